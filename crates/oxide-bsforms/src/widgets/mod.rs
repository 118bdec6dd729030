//! Form widgets as seen by the label renderer.

mod bootstrap;

pub use bootstrap::{
    BootstrapCheckbox, BootstrapRadioSelect, BootstrapSelect, BootstrapTextInput, BootstrapTextarea,
};

use std::collections::BTreeMap;

use minijinja::Environment;

use crate::error::Result;
use crate::hooks::{LabelHooks, LabelLayer};
use crate::label::LabelContext;

/// Attributes that can be applied to a widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }
}

/// Trait for form widgets.
///
/// Only the parts of a widget that affect its label are modelled here. Every
/// method has a default, so a plain text widget is just `impl Widget for T {}`.
pub trait Widget: Send + Sync {
    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }

    /// Whether the label should get checkbox styling.
    fn is_checkbox(&self) -> bool {
        matches!(self.input_type(), "checkbox" | "radio")
    }

    /// Returns the id a label should point at, given the field's id.
    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }

    /// Template used for this widget's label instead of the default.
    fn label_template_name(&self) -> Option<&str> {
        None
    }

    /// Label contributions of this widget, if any.
    fn label_hooks(&self) -> Option<&dyn LabelHooks> {
        None
    }

    /// Renders the label template with the assembled context.
    fn render_label(
        &self,
        env: &Environment<'_>,
        template_name: &str,
        context: &LabelContext,
    ) -> Result<String> {
        let template = env.get_template(template_name)?;
        Ok(template.render(context)?)
    }
}

/// Label customizations stored on the built-in widgets.
#[derive(Debug, Clone, Default)]
pub struct WidgetLabel {
    hooks: Option<LabelLayer>,
    template_name: Option<String>,
}

impl WidgetLabel {
    /// Returns the configured hooks.
    pub fn hooks(&self) -> Option<&dyn LabelHooks> {
        self.hooks.as_ref().map(|layer| layer as &dyn LabelHooks)
    }

    /// Returns the configured template override.
    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    pub(crate) fn set_hooks(&mut self, layer: LabelLayer) {
        self.hooks = Some(layer);
    }

    pub(crate) fn set_template_name(&mut self, name: String) {
        self.template_name = Some(name);
    }
}
