//! Optional label contributions from widgets and forms.

use std::collections::BTreeMap;

use crate::classes::ClassSet;

/// HTML attributes of a label, keyed by attribute name.
pub type Attrs = BTreeMap<String, String>;

/// Extra template context values passed to the label template.
pub type Context = BTreeMap<String, serde_json::Value>;

/// Label configuration a widget or form may contribute.
///
/// Every method defaults to an empty contribution, so implementors only
/// override what they need. Types that contribute nothing simply return
/// `None` from their `label_hooks()` accessor.
pub trait LabelHooks: Send + Sync {
    /// CSS classes to add to the label.
    fn label_classes(&self) -> ClassSet {
        ClassSet::new()
    }

    /// HTML attributes to set on the label.
    fn label_attrs(&self) -> Attrs {
        Attrs::new()
    }

    /// Extra values for the label template context.
    fn label_context(&self) -> Context {
        Context::new()
    }
}

/// A static set of label classes, attributes and context values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelLayer {
    /// CSS classes.
    pub classes: ClassSet,
    /// HTML attributes.
    pub attrs: Attrs,
    /// Template context values.
    pub context: Context,
}

impl LabelLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the layer contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.attrs.is_empty() && self.context.is_empty()
    }

    /// Adds a CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class);
        self
    }

    /// Sets an HTML attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Sets a template context value.
    #[must_use]
    pub fn context(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

impl LabelHooks for LabelLayer {
    fn label_classes(&self) -> ClassSet {
        self.classes.clone()
    }

    fn label_attrs(&self) -> Attrs {
        self.attrs.clone()
    }

    fn label_context(&self) -> Context {
        self.context.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoContribution;

    impl LabelHooks for NoContribution {}

    #[test]
    fn test_default_hooks_are_empty() {
        let hooks = NoContribution;
        assert!(hooks.label_classes().is_empty());
        assert!(hooks.label_attrs().is_empty());
        assert!(hooks.label_context().is_empty());
    }

    #[test]
    fn test_label_layer_builder() {
        let layer = LabelLayer::new()
            .class("fw-bold")
            .attr("title", "Name")
            .context("help", "Your full name");

        assert!(!layer.is_empty());
        assert!(layer.label_classes().contains("fw-bold"));
        assert_eq!(layer.label_attrs().get("title").map(String::as_str), Some("Name"));
        assert_eq!(
            layer.label_context().get("help"),
            Some(&serde_json::Value::from("Your full name"))
        );
    }
}
