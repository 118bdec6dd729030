//! Checkbox field types.

use crate::form::FormFieldDef;
use crate::widgets::BootstrapCheckbox;

/// Creates a boolean field (checkbox).
pub fn boolean_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, BootstrapCheckbox::new())
}
