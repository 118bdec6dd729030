//! Bootstrap 5 form widgets.

use super::{Widget, WidgetLabel};
use crate::hooks::{LabelHooks, LabelLayer};

/// Adds the label builder methods shared by every built-in widget.
macro_rules! label_builders {
    ($($widget:ty),+ $(,)?) => {
        $(
            impl $widget {
                /// Sets classes, attributes and context this widget contributes to its label.
                #[must_use]
                pub fn label_layer(mut self, layer: LabelLayer) -> Self {
                    self.label.set_hooks(layer);
                    self
                }

                /// Renders this widget's label with a different template.
                #[must_use]
                pub fn label_template(mut self, name: impl Into<String>) -> Self {
                    self.label.set_template_name(name.into());
                    self
                }
            }
        )+
    };
}

label_builders!(
    BootstrapTextInput,
    BootstrapTextarea,
    BootstrapSelect,
    BootstrapCheckbox,
    BootstrapRadioSelect,
);

/// Bootstrap 5 text input widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    /// The HTML input type (text, email, password, etc.).
    pub input_type: String,
    label: WidgetLabel,
}

impl Default for BootstrapTextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            label: WidgetLabel::default(),
        }
    }
}

impl BootstrapTextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a password input.
    pub fn password() -> Self {
        Self {
            input_type: "password".to_string(),
            ..Default::default()
        }
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self {
            input_type: "email".to_string(),
            ..Default::default()
        }
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self {
            input_type: "number".to_string(),
            ..Default::default()
        }
    }
}

impl Widget for BootstrapTextInput {
    fn input_type(&self) -> &str {
        &self.input_type
    }

    fn label_template_name(&self) -> Option<&str> {
        self.label.template_name()
    }

    fn label_hooks(&self) -> Option<&dyn LabelHooks> {
        self.label.hooks()
    }
}

/// Bootstrap 5 textarea widget.
#[derive(Debug, Clone, Default)]
pub struct BootstrapTextarea {
    label: WidgetLabel,
}

impl BootstrapTextarea {
    /// Creates a new textarea.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for BootstrapTextarea {
    fn input_type(&self) -> &str {
        "textarea"
    }

    fn label_template_name(&self) -> Option<&str> {
        self.label.template_name()
    }

    fn label_hooks(&self) -> Option<&dyn LabelHooks> {
        self.label.hooks()
    }
}

/// Bootstrap 5 select widget.
#[derive(Debug, Clone, Default)]
pub struct BootstrapSelect {
    label: WidgetLabel,
}

impl BootstrapSelect {
    /// Creates a new select.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for BootstrapSelect {
    fn input_type(&self) -> &str {
        "select"
    }

    fn label_template_name(&self) -> Option<&str> {
        self.label.template_name()
    }

    fn label_hooks(&self) -> Option<&dyn LabelHooks> {
        self.label.hooks()
    }
}

/// Bootstrap 5 checkbox widget.
#[derive(Debug, Clone, Default)]
pub struct BootstrapCheckbox {
    label: WidgetLabel,
}

impl BootstrapCheckbox {
    /// Creates a new checkbox.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for BootstrapCheckbox {
    fn input_type(&self) -> &str {
        "checkbox"
    }

    fn label_template_name(&self) -> Option<&str> {
        self.label.template_name()
    }

    fn label_hooks(&self) -> Option<&dyn LabelHooks> {
        self.label.hooks()
    }
}

/// Bootstrap 5 radio select widget.
#[derive(Debug, Clone, Default)]
pub struct BootstrapRadioSelect {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    label: WidgetLabel,
}

impl BootstrapRadioSelect {
    /// Creates a new radio select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            label: WidgetLabel::default(),
        }
    }
}

impl Widget for BootstrapRadioSelect {
    fn input_type(&self) -> &str {
        "radio"
    }

    // Radio inputs get ids `{id}_0`, `{id}_1`, ...; the label targets the first.
    fn id_for_label(&self, id: &str) -> String {
        if self.choices.is_empty() {
            id.to_string()
        } else {
            format!("{id}_0")
        }
    }

    fn label_template_name(&self) -> Option<&str> {
        self.label.template_name()
    }

    fn label_hooks(&self) -> Option<&dyn LabelHooks> {
        self.label.hooks()
    }
}
