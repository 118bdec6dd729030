//! The `label` template tag.
//!
//! ```jinja
//! {{ label(form.email) }}
//! {{ label(form.email, horizontal="col-md-4", size="sm", class="fw-bold") }}
//! ```
//!
//! Unset options fall back to the ambient context variables
//! `form_horizontal_label`, `form_size` and `form_sronly`. An ambient
//! `label_attrs` mapping provides default attributes that keyword
//! arguments override, and an ambient `csrf_token` is handed on to the
//! label template.

use std::sync::Arc;

use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind, State};

use crate::classes::ExtraClasses;
use crate::error::FormError;
use crate::form::FieldRef;
use crate::hooks::{Attrs, Context};
use crate::label::{label, LabelOptions};
use crate::settings::Settings;

/// Name the tag is registered under.
pub const LABEL_TAG: &str = "label";

/// Registers the `label` function on a template environment.
pub fn register_label_tag(env: &mut Environment<'_>, settings: Arc<Settings>) {
    env.add_function(
        LABEL_TAG,
        move |state: &State, field: Value, kwargs: Kwargs| -> Result<Value, Error> {
            label_tag(state, &settings, &field, &kwargs)
        },
    );
}

fn label_tag(
    state: &State<'_, '_>,
    settings: &Settings,
    field: &Value,
    kwargs: &Kwargs,
) -> Result<Value, Error> {
    let Some(field_ref) = field.downcast_object_ref::<FieldRef>() else {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("label() expects a form field, got {}", field.kind()),
        ));
    };

    let mut options = LabelOptions::new();
    let mut attrs = ambient_attrs(state)?;
    let keys: Vec<String> = kwargs.args().map(str::to_string).collect();
    for key in &keys {
        let value: Value = kwargs.get(key)?;
        match key.as_str() {
            "horizontal" => options.horizontal = classes_from_value(&value),
            "size" => options.size = truthy_string(&value),
            "sronly" => options.sronly = value.is_true(),
            _ => match attr_value(&value) {
                Some(v) => {
                    attrs.insert(key.clone(), v);
                }
                None => {
                    attrs.remove(key);
                }
            },
        }
    }

    if !options.horizontal.is_set() {
        if let Some(value) = state.lookup("form_horizontal_label") {
            options.horizontal = classes_from_value(&value);
        }
    }
    if options.size.is_none() {
        options.size = state
            .lookup("form_size")
            .and_then(|value| truthy_string(&value));
    }
    if !options.sronly {
        options.sronly = state
            .lookup("form_sronly")
            .is_some_and(|value| value.is_true());
    }

    let mut extra = Context::new();
    if let Some(token) = state.lookup("csrf_token").filter(|v| !v.is_undefined()) {
        let token = serde_json::to_value(&token).map_err(|err| {
            Error::new(ErrorKind::InvalidOperation, "csrf_token is not serializable")
                .with_source(err)
        })?;
        extra.insert("csrf_token".to_string(), token);
    }

    let field = field_ref.bound();
    let html = label(state.env(), settings, &field, &options, attrs, extra)
        .map_err(into_template_error)?;
    Ok(Value::from_safe_string(html))
}

/// Reads the `label_attrs` mapping from the render context.
fn ambient_attrs(state: &State<'_, '_>) -> Result<Attrs, Error> {
    let mut attrs = Attrs::new();
    let Some(value) = state.lookup("label_attrs") else {
        return Ok(attrs);
    };
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(attrs),
        ValueKind::Map => {
            for key in value.try_iter()? {
                let item = value.get_item(&key)?;
                if let Some(v) = attr_value(&item) {
                    attrs.insert(key.to_string(), v);
                }
            }
            Ok(attrs)
        }
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("label_attrs must be a mapping, got {kind}"),
        )),
    }
}

/// Converts a template value into an attribute value.
///
/// `none` and undefined drop the attribute, sequences are joined with
/// spaces so `class=["a", "b"]` works.
fn attr_value(value: &Value) -> Option<String> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => None,
        ValueKind::Seq | ValueKind::Iterable => {
            let items: Vec<String> = value
                .try_iter()
                .ok()?
                .map(|item| item.to_string())
                .collect();
            Some(items.join(" "))
        }
        _ => Some(value.to_string()),
    }
}

fn classes_from_value(value: &Value) -> ExtraClasses {
    if !value.is_true() {
        return ExtraClasses::None;
    }
    match value.kind() {
        ValueKind::Seq | ValueKind::Iterable => value.try_iter().map_or(ExtraClasses::None, |iter| {
            ExtraClasses::List(iter.map(|item| item.to_string()).collect())
        }),
        _ => ExtraClasses::Str(value.to_string()),
    }
}

fn truthy_string(value: &Value) -> Option<String> {
    value.is_true().then(|| value.to_string())
}

fn into_template_error(err: FormError) -> Error {
    match err {
        FormError::Template(err) => err,
        other => Error::new(ErrorKind::InvalidOperation, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{boolean_field, char_field};
    use crate::form::Form;
    use crate::render::LabelRenderer;
    use minijinja::context;

    fn form_value() -> Value {
        Form::builder()
            .field(char_field("name", "Name"))
            .field(boolean_field("agree", "I agree"))
            .build()
            .into_value()
    }

    fn render(source: &str, ctx: Value) -> String {
        LabelRenderer::new(Settings::new())
            .render_str(source, ctx)
            .unwrap()
    }

    #[test]
    fn test_tag_plain() {
        let html = render("{{ label(form.name) }}", context! { form => form_value() });
        assert_eq!(html, r#"<label for="id_name">Name</label>"#);
    }

    #[test]
    fn test_tag_keyword_options() {
        let html = render(
            r#"{{ label(form.name, horizontal="col-md-4", size="sm", sronly=true) }}"#,
            context! { form => form_value() },
        );
        assert_eq!(
            html,
            r#"<label class="col-form-label col-form-label-sm col-md-4 sr-only" for="id_name">Name</label>"#
        );
    }

    #[test]
    fn test_tag_ambient_options() {
        let html = render(
            "{{ label(form.name) }}",
            context! {
                form => form_value(),
                form_horizontal_label => "col-sm-3",
                form_size => "lg",
                form_sronly => true,
            },
        );
        assert_eq!(
            html,
            r#"<label class="col-form-label col-form-label-lg col-sm-3 sr-only" for="id_name">Name</label>"#
        );
    }

    #[test]
    fn test_tag_keyword_beats_ambient() {
        let html = render(
            r#"{{ label(form.name, horizontal="col-md-2") }}"#,
            context! { form => form_value(), form_horizontal_label => "col-sm-3" },
        );
        assert!(html.contains("col-md-2"));
        assert!(!html.contains("col-sm-3"));
    }

    #[test]
    fn test_tag_blank_horizontal() {
        let html = render(
            r#"{{ label(form.name, horizontal=" ") }}"#,
            context! { form => form_value(), form_horizontal_label => "col-sm-3" },
        );
        assert_eq!(html, r#"<label class="col-form-label" for="id_name">Name</label>"#);
    }

    #[test]
    fn test_tag_attrs() {
        let html = render(
            r#"{{ label(form.name, class=["fw-bold", "text-end"], title="Your name", hidden=none) }}"#,
            context! {
                form => form_value(),
                label_attrs => context! { title => "ambient", hidden => "hidden", lang => "en" },
            },
        );
        assert_eq!(
            html,
            r#"<label class="fw-bold text-end" for="id_name" lang="en" title="Your name">Name</label>"#
        );
    }

    #[test]
    fn test_tag_for_is_ignored() {
        let ambient = Value::from_serialize(std::collections::BTreeMap::from([("for", "other")]));
        let html = render(
            "{{ label(form.name) }}",
            context! { form => form_value(), label_attrs => ambient },
        );
        assert_eq!(html, r#"<label for="id_name">Name</label>"#);
    }

    #[test]
    fn test_tag_checkbox() {
        let html = render("{{ label(form.agree) }}", context! { form => form_value() });
        assert!(html.contains(r#"class="form-check-label""#));
    }

    #[test]
    fn test_tag_passes_csrf_token() {
        let mut renderer = LabelRenderer::new(Settings::new());
        renderer
            .add_template(
                crate::label::DEFAULT_LABEL_TEMPLATE,
                "{{ label }}:{{ csrf_token }}",
            )
            .unwrap();
        let html = renderer
            .render_str(
                "{{ label(form.name) }}",
                context! { form => form_value(), csrf_token => "tok123" },
            )
            .unwrap();
        assert_eq!(html, "Name:tok123");
    }

    #[test]
    fn test_tag_rejects_non_field() {
        let result = LabelRenderer::new(Settings::new())
            .render_str(r#"{{ label("name") }}"#, context! {});
        let err = result.unwrap_err();
        assert!(err.to_string().contains("expects a form field"));
    }

    #[test]
    fn test_tag_rejects_bad_label_attrs() {
        let result = LabelRenderer::new(Settings::new()).render_str(
            "{{ label(form.name) }}",
            context! { form => form_value(), label_attrs => "oops" },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_tag_uses_settings() {
        let html = LabelRenderer::new(Settings::new().label_class("form-label"))
            .render_str("{{ label(form.name) }}", context! { form => form_value() })
            .unwrap();
        assert_eq!(html, r#"<label class="form-label" for="id_name">Name</label>"#);
    }
}
