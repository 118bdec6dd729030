//! Text field types.

use crate::form::FormFieldDef;
use crate::widgets::{BootstrapTextInput, BootstrapTextarea};

/// Creates a character field (text input).
pub fn char_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, BootstrapTextInput::new())
}

/// Creates a text field (textarea).
pub fn text_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, BootstrapTextarea::new())
}

/// Creates an email field.
pub fn email_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, BootstrapTextInput::email())
}

/// Creates a password field.
pub fn password_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, BootstrapTextInput::password())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Widget;

    #[test]
    fn test_char_field() {
        let field = char_field("username", "Username");
        assert_eq!(field.name, "username");
        assert_eq!(field.label, "Username");
        assert_eq!(field.widget.input_type(), "text");
    }

    #[test]
    fn test_text_inputs() {
        assert_eq!(email_field("email", "Email").widget.input_type(), "email");
        assert_eq!(
            password_field("password", "Password").widget.input_type(),
            "password"
        );
        assert_eq!(text_field("bio", "Bio").widget.input_type(), "textarea");
    }
}
