//! Error types for label rendering.

use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A settings key holds a value of the wrong shape.
    #[error("invalid setting `{key}`: {message}")]
    InvalidSettings { key: String, message: String },

    /// No field with this name exists on the form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Template lookup or rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON.
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormError {
    pub(crate) fn invalid_settings(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_settings_display() {
        let err = FormError::invalid_settings("label_attrs", "expected an object");
        assert_eq!(
            err.to_string(),
            "invalid setting `label_attrs`: expected an object"
        );
    }

    #[test]
    fn test_unknown_field_display() {
        let err = FormError::UnknownField("email".to_string());
        assert_eq!(err.to_string(), "unknown field: email");
    }
}
