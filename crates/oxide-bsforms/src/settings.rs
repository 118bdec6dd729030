//! Library-wide label settings.
//!
//! Settings are plain data passed into every render call. They are usually
//! loaded once at startup from a JSON document of the form:
//!
//! ```json
//! {
//!     "label_classes": ["form-label"],
//!     "label_attrs": {"data-role": "label"},
//!     "label_context": {"required_marker": "*"}
//! }
//! ```
//!
//! Every key is optional. Unknown keys are ignored so the settings can live
//! next to other configuration in the same document.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::classes::ClassSet;
use crate::error::{FormError, Result};
use crate::hooks::{Attrs, Context};

/// Default label configuration applied to every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Classes added to every label.
    pub label_classes: ClassSet,
    /// Attributes added to every label. Never contains `for`.
    pub label_attrs: Attrs,
    /// Context values passed to every label template.
    pub label_context: Context,
}

impl Settings {
    /// Creates empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a default label class.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_classes.insert(class);
        self
    }

    /// Sets a default label attribute.
    ///
    /// `for` is silently skipped, it is always derived from the field.
    #[must_use]
    pub fn label_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if key != "for" {
            self.label_attrs.insert(key, value.into());
        }
        self
    }

    /// Sets a default label context value.
    #[must_use]
    pub fn label_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.label_context.insert(key.into(), value.into());
        self
    }

    /// Parses settings from a JSON string.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Reads settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading label settings");
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    /// Builds settings from a parsed JSON value, validating every key.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(FormError::invalid_settings(
                "<root>",
                format!("expected an object, found {}", type_name(value)),
            ));
        };

        Ok(Self {
            label_classes: parse_classes(map)?,
            label_attrs: parse_attrs(map)?,
            label_context: parse_context(map)?,
        })
    }
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

fn parse_classes(map: &Map<String, Value>) -> Result<ClassSet> {
    const KEY: &str = "label_classes";
    match map.get(KEY) {
        None | Some(Value::Null) => Ok(ClassSet::new()),
        Some(Value::String(s)) => Ok(s.split_whitespace().collect()),
        Some(Value::Array(items)) => {
            let mut classes = ClassSet::new();
            for item in items {
                match item {
                    Value::String(s) => classes.insert(s.as_str()),
                    other => {
                        return Err(FormError::invalid_settings(
                            KEY,
                            format!("expected class names as strings, found {}", type_name(other)),
                        ))
                    }
                }
            }
            Ok(classes)
        }
        Some(other) => Err(FormError::invalid_settings(
            KEY,
            format!("expected an array of strings, found {}", type_name(other)),
        )),
    }
}

fn parse_attrs(map: &Map<String, Value>) -> Result<Attrs> {
    const KEY: &str = "label_attrs";
    match map.get(KEY) {
        None | Some(Value::Null) => Ok(Attrs::new()),
        Some(Value::Object(entries)) => {
            let mut attrs = Attrs::new();
            for (name, value) in entries {
                if name == "for" {
                    return Err(FormError::invalid_settings(
                        KEY,
                        "the `for` attribute is derived from the field and cannot be configured",
                    ));
                }
                let Value::String(value) = value else {
                    return Err(FormError::invalid_settings(
                        KEY,
                        format!(
                            "attribute `{name}` must be a string, found {}",
                            type_name(value)
                        ),
                    ));
                };
                attrs.insert(name.clone(), value.clone());
            }
            Ok(attrs)
        }
        Some(other) => Err(FormError::invalid_settings(
            KEY,
            format!("expected an object, found {}", type_name(other)),
        )),
    }
}

fn parse_context(map: &Map<String, Value>) -> Result<Context> {
    const KEY: &str = "label_context";
    match map.get(KEY) {
        None | Some(Value::Null) => Ok(Context::new()),
        Some(Value::Object(entries)) => Ok(entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()),
        Some(other) => Err(FormError::invalid_settings(
            KEY,
            format!("expected an object, found {}", type_name(other)),
        )),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_empty_document() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_full_document() {
        let settings = Settings::from_value(&json!({
            "label_classes": ["form-label", "fw-bold"],
            "label_attrs": {"data-role": "label"},
            "label_context": {"marker": "*", "level": 2},
            "other_setting": true,
        }))
        .unwrap();

        assert!(settings.label_classes.contains("form-label"));
        assert!(settings.label_classes.contains("fw-bold"));
        assert_eq!(settings.label_attrs["data-role"], "label");
        assert_eq!(settings.label_context["level"], json!(2));
    }

    #[test]
    fn test_classes_as_string() {
        let settings = Settings::from_value(&json!({"label_classes": "a  b"})).unwrap();
        assert_eq!(settings.label_classes.to_attr_value(), "a b");
    }

    #[test]
    fn test_classes_entries_are_split() {
        let settings =
            Settings::from_json_str(r#"{"label_classes": ["form-label text-end", ""]}"#).unwrap();
        assert_eq!(settings.label_classes.len(), 2);
        assert!(settings.label_classes.contains("form-label"));
        assert!(settings.label_classes.contains("text-end"));
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = Settings::from_value(&json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("expected an object"));
    }

    #[test]
    fn test_rejects_bad_classes() {
        let err = Settings::from_value(&json!({"label_classes": 3})).unwrap_err();
        assert!(matches!(err, FormError::InvalidSettings { ref key, .. } if key == "label_classes"));

        let err = Settings::from_value(&json!({"label_classes": ["a", 1]})).unwrap_err();
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn test_rejects_bad_attrs() {
        let err = Settings::from_value(&json!({"label_attrs": ["x"]})).unwrap_err();
        assert!(matches!(err, FormError::InvalidSettings { ref key, .. } if key == "label_attrs"));

        let err = Settings::from_value(&json!({"label_attrs": {"tabindex": 1}})).unwrap_err();
        assert!(err.to_string().contains("tabindex"));
    }

    #[test]
    fn test_rejects_for_attr() {
        let err = Settings::from_value(&json!({"label_attrs": {"for": "id_x"}})).unwrap_err();
        assert!(err.to_string().contains("`for`"));

        let settings = Settings::new().label_attr("for", "id_x");
        assert!(settings.label_attrs.is_empty());
    }

    #[test]
    fn test_rejects_bad_context() {
        let err = Settings::from_value(&json!({"label_context": "x"})).unwrap_err();
        assert!(matches!(err, FormError::InvalidSettings { ref key, .. } if key == "label_context"));
    }

    #[test]
    fn test_invalid_json() {
        let err = Settings::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, FormError::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"label_classes": ["form-label"]}}"#).unwrap();

        let settings = Settings::from_path(file.path()).unwrap();
        assert!(settings.label_classes.contains("form-label"));
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FormError::Io(_)));
    }

    #[test]
    fn test_deserialize_embedded() {
        #[derive(Deserialize)]
        struct AppConfig {
            bootstrap_forms: Settings,
        }

        let config: AppConfig = serde_json::from_value(json!({
            "bootstrap_forms": {"label_classes": ["x"]}
        }))
        .unwrap();
        assert!(config.bootstrap_forms.label_classes.contains("x"));

        let bad: std::result::Result<AppConfig, _> = serde_json::from_value(json!({
            "bootstrap_forms": {"label_attrs": 5}
        }));
        assert!(bad.is_err());
    }
}
