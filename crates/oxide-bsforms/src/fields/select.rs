//! Choice field types.

use crate::form::FormFieldDef;
use crate::widgets::{BootstrapRadioSelect, BootstrapSelect};

/// Creates a choice field (select/dropdown).
pub fn choice_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, BootstrapSelect::new())
}

/// Creates a choice field rendered as a group of radio buttons.
pub fn radio_field(name: &str, label: &str, choices: Vec<(&str, &str)>) -> FormFieldDef {
    FormFieldDef::new(name, label, BootstrapRadioSelect::new(choices))
}
