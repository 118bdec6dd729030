//! # oxide-bsforms
//!
//! Bootstrap 5 form labels with layered configuration.
//!
//! The classes, attributes and template context of a label are merged from
//! four sources:
//!
//! - library-wide [`Settings`],
//! - the field widget's [`LabelHooks`],
//! - the form's [`LabelHooks`],
//! - the values passed at the call site.
//!
//! Classes are unioned. Attributes and context values are applied in the
//! order widget, form, settings, call site, each overwriting the previous.
//! The `for` attribute always points at the field and cannot be overridden.
//! The merged values are rendered with a [`minijinja`] template.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bsforms::fields::{boolean_field, char_field};
//! use oxide_bsforms::{Form, LabelRenderer, Settings};
//! use minijinja::context;
//!
//! let form = Form::builder()
//!     .field(char_field("name", "Name"))
//!     .field(boolean_field("subscribe", "Subscribe"))
//!     .build();
//!
//! let renderer = LabelRenderer::new(Settings::new());
//! let html = renderer
//!     .render_str(
//!         r#"{{ label(form.name, size="sm") }}"#,
//!         context! { form => form.into_value(), form_horizontal_label => "col-md-4" },
//!     )
//!     .unwrap();
//! assert_eq!(
//!     html,
//!     r#"<label class="col-form-label col-form-label-sm col-md-4" for="id_name">Name</label>"#
//! );
//! ```
//!
//! ## Settings
//!
//! ```rust
//! use oxide_bsforms::Settings;
//!
//! let settings = Settings::from_json_str(
//!     r#"{"label_classes": ["form-label"], "label_attrs": {"data-role": "label"}}"#,
//! )
//! .unwrap();
//! assert!(settings.label_classes.contains("form-label"));
//!
//! // Malformed settings are rejected.
//! assert!(Settings::from_json_str(r#"{"label_attrs": ["oops"]}"#).is_err());
//! ```
//!
//! ## Hooks
//!
//! Widgets and forms contribute through [`LabelHooks`]. The built-in widgets
//! and [`FormBuilder`] accept a static [`LabelLayer`]; custom widgets
//! implement [`widgets::Widget::label_hooks`].

mod classes;
mod error;
pub mod fields;
mod form;
mod hooks;
mod label;
mod render;
mod settings;
pub mod tag;
pub mod widgets;

pub use classes::{update_css_classes, ClassSet, ExtraClasses};
pub use error::{FormError, Result};
pub use form::{BoundField, FieldRef, Form, FormBuilder, FormFieldDef, DEFAULT_AUTO_ID};
pub use hooks::{Attrs, Context, LabelHooks, LabelLayer};
pub use label::{
    build_label_context, get_label_attrs, get_label_classes, get_label_context, label,
    LabelContext, LabelOptions, CHECK_LABEL_CLASS, COL_LABEL_CLASS, DEFAULT_LABEL_TEMPLATE,
    SR_ONLY_CLASS,
};
pub use render::{builtin_template, LabelRenderer};
pub use settings::Settings;
pub use tag::{register_label_tag, LABEL_TAG};
