//! Label class, attribute and context resolution.
//!
//! Every label is assembled from four layers: the library [`Settings`], the
//! field's widget hooks, the form's hooks and the values passed by the
//! caller. The result is rendered by the widget's label template.

use minijinja::Environment;
use serde::Serialize;
use tracing::debug;

use crate::classes::{ClassSet, ExtraClasses};
use crate::error::Result;
use crate::form::BoundField;
use crate::hooks::{Attrs, Context, LabelHooks};
use crate::settings::Settings;

/// Template used when the widget does not name its own.
pub const DEFAULT_LABEL_TEMPLATE: &str = "bootstrap_forms/label.html";

/// Class added to labels of checkboxes and radio groups.
pub const CHECK_LABEL_CLASS: &str = "form-check-label";

/// Class added to labels in horizontal forms.
pub const COL_LABEL_CLASS: &str = "col-form-label";

/// Class added to labels that are only visible to screen readers.
pub const SR_ONLY_CLASS: &str = "sr-only";

/// Per-call label layout options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOptions {
    /// Grid classes of a horizontal form, e.g. `"col-md-4"`. Any non-empty
    /// value adds `col-form-label`, even one made only of whitespace.
    pub horizontal: ExtraClasses,
    /// Size suffix for `col-form-label-{size}`, e.g. `"sm"` or `"lg"`.
    pub size: Option<String>,
    /// Hide the label visually.
    pub sronly: bool,
}

impl LabelOptions {
    /// Creates default options: vertical layout, default size, visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays the label out in a horizontal form with the given grid classes.
    #[must_use]
    pub fn horizontal(mut self, classes: impl Into<ExtraClasses>) -> Self {
        self.horizontal = classes.into();
        self
    }

    /// Sets the label size.
    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Hides the label for everyone but screen readers.
    #[must_use]
    pub fn sronly(mut self, sronly: bool) -> Self {
        self.sronly = sronly;
        self
    }

    fn size_class(&self) -> Option<String> {
        self.size
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{COL_LABEL_CLASS}-{s}"))
    }
}

/// The context the label template is rendered with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelContext {
    /// Label text.
    pub label: String,
    /// HTML attributes, always including `for`.
    pub attrs: Attrs,
    /// Additional values from hooks, settings and the caller.
    #[serde(flatten)]
    pub extra: Context,
}

/// Collects the classes of a label.
///
/// Merges the settings' classes, the widget's and the form's hook classes
/// and `extra`.
pub fn get_label_classes(
    settings: &Settings,
    field: &BoundField<'_>,
    extra: &ExtraClasses,
) -> ClassSet {
    let mut classes = settings.label_classes.clone();
    if let Some(hooks) = field.widget().label_hooks() {
        classes.union_with(&hooks.label_classes());
    }
    if let Some(hooks) = field.form().label_hooks() {
        classes.union_with(&hooks.label_classes());
    }
    classes.extend_from(extra);
    classes
}

/// Collects the attributes of a label.
///
/// Later layers overwrite earlier ones: widget hooks, form hooks, settings,
/// then `extra`. `for` is set last and always equals
/// [`BoundField::id_for_label`].
pub fn get_label_attrs(settings: &Settings, field: &BoundField<'_>, extra: &Attrs) -> Attrs {
    let mut attrs = Attrs::new();
    if let Some(hooks) = field.widget().label_hooks() {
        attrs.extend(hooks.label_attrs());
    }
    if let Some(hooks) = field.form().label_hooks() {
        attrs.extend(hooks.label_attrs());
    }
    attrs.extend(settings.label_attrs.clone());
    attrs.extend(extra.clone());
    attrs.insert("for".to_string(), field.id_for_label());
    attrs
}

/// Collects extra template context values, layered like the attributes.
pub fn get_label_context(settings: &Settings, field: &BoundField<'_>, extra: &Context) -> Context {
    let mut context = Context::new();
    if let Some(hooks) = field.widget().label_hooks() {
        context.extend(hooks.label_context());
    }
    if let Some(hooks) = field.form().label_hooks() {
        context.extend(hooks.label_context());
    }
    context.extend(settings.label_context.clone());
    context.extend(extra.clone());
    context
}

/// Resolves everything the label template needs, without rendering.
///
/// A `class` entry in `attrs` is merged with the other classes instead of
/// replacing them. A `for` entry is ignored.
pub fn build_label_context(
    settings: &Settings,
    field: &BoundField<'_>,
    options: &LabelOptions,
    mut attrs: Attrs,
    extra_context: Context,
) -> LabelContext {
    let extra_classes = ExtraClasses::from(attrs.remove("class"));
    if attrs.remove("for").is_some() {
        debug!(
            field = %field.html_name(),
            "Ignoring caller-supplied `for` attribute on label"
        );
    }

    let mut classes = get_label_classes(settings, field, &extra_classes);
    if field.widget().is_checkbox() {
        classes.insert(CHECK_LABEL_CLASS);
    }
    if options.horizontal.is_set() {
        classes.extend_from(&options.horizontal);
        classes.insert(COL_LABEL_CLASS);
    }
    if let Some(size_class) = options.size_class() {
        classes.insert(size_class);
    }
    if options.sronly {
        classes.insert(SR_ONLY_CLASS);
    }

    let mut attrs = get_label_attrs(settings, field, &attrs);
    attrs.remove("class");
    if !classes.is_empty() {
        attrs.insert("class".to_string(), classes.to_attr_value());
    }

    let mut extra = get_label_context(settings, field, &extra_context);
    extra.remove("label");
    extra.remove("attrs");

    LabelContext {
        label: field.label().to_string(),
        attrs,
        extra,
    }
}

/// Renders the label of a field.
///
/// The template is the widget's own label template if it has one, otherwise
/// [`DEFAULT_LABEL_TEMPLATE`]. It must be available in `env`.
pub fn label(
    env: &Environment<'_>,
    settings: &Settings,
    field: &BoundField<'_>,
    options: &LabelOptions,
    attrs: Attrs,
    extra_context: Context,
) -> Result<String> {
    let context = build_label_context(settings, field, options, attrs, extra_context);
    let widget = field.widget();
    let template_name = widget
        .label_template_name()
        .unwrap_or(DEFAULT_LABEL_TEMPLATE);
    debug!(
        field = %field.html_name(),
        template = template_name,
        "Rendering label"
    );
    widget.render_label(env, template_name, &context)
}
