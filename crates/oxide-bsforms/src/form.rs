//! Forms, field definitions and bound fields.

use std::sync::Arc;

use minijinja::value::{Enumerator, Object, Value};

use crate::error::{FormError, Result};
use crate::hooks::LabelHooks;
use crate::widgets::{Widget, WidgetAttrs};

/// Default format of generated element ids.
pub const DEFAULT_AUTO_ID: &str = "id_%s";

/// Definition of a form field.
pub struct FormFieldDef {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// The widget used to render the field.
    pub widget: Box<dyn Widget>,
    /// Widget attributes. An `id` entry overrides the generated id.
    pub attrs: WidgetAttrs,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("input_type", &self.widget.input_type())
            .field("attrs", &self.attrs)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            widget: Box::new(widget),
            attrs: WidgetAttrs::new(),
        }
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Sets an explicit element id instead of the generated one.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }
}

/// A form: an ordered collection of fields plus optional label hooks.
pub struct Form {
    fields: Vec<FormFieldDef>,
    prefix: Option<String>,
    auto_id: String,
    hooks: Option<Box<dyn LabelHooks>>,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields)
            .field("prefix", &self.prefix)
            .field("auto_id", &self.auto_id)
            .field("has_label_hooks", &self.hooks.is_some())
            .finish()
    }
}

impl Form {
    /// Starts building a form.
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// Returns the bound field with the given name.
    pub fn field(&self, name: &str) -> Option<BoundField<'_>> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|def| BoundField { form: self, def })
    }

    /// Returns the bound field with the given name, or an error naming it.
    pub fn try_field(&self, name: &str) -> Result<BoundField<'_>> {
        self.field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Returns all fields in declaration order.
    pub fn bound_fields(&self) -> impl Iterator<Item = BoundField<'_>> {
        self.fields.iter().map(move |def| BoundField { form: self, def })
    }

    /// Returns the field name prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the name a field has in submitted data.
    pub fn add_prefix(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}-{name}"),
            None => name.to_string(),
        }
    }

    /// Label contributions of this form, if any.
    pub fn label_hooks(&self) -> Option<&dyn LabelHooks> {
        self.hooks.as_deref()
    }

    /// Wraps the form for use in a template context.
    ///
    /// Fields are reachable as `form.<name>` or `form["<name>"]` and can be
    /// passed straight to the `label` tag.
    pub fn into_value(self) -> Value {
        Value::from_object(self)
    }
}

impl Object for Form {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let name = key.as_str()?;
        let index = self.fields.iter().position(|f| f.name == name)?;
        Some(Value::from_object(FieldRef {
            form: Arc::clone(self),
            index,
        }))
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Values(
            self.fields
                .iter()
                .map(|f| Value::from(f.name.clone()))
                .collect(),
        )
    }
}

/// A field together with the form that owns it.
#[derive(Debug, Clone, Copy)]
pub struct BoundField<'a> {
    form: &'a Form,
    def: &'a FormFieldDef,
}

impl<'a> BoundField<'a> {
    /// Returns the owning form.
    pub fn form(&self) -> &'a Form {
        self.form
    }

    /// Returns the field's widget.
    pub fn widget(&self) -> &'a dyn Widget {
        self.def.widget.as_ref()
    }

    /// Returns the field name.
    pub fn name(&self) -> &'a str {
        &self.def.name
    }

    /// Returns the label text.
    pub fn label(&self) -> &'a str {
        &self.def.label
    }

    /// Returns the prefixed field name.
    pub fn html_name(&self) -> String {
        self.form.add_prefix(&self.def.name)
    }

    /// Returns the element id of the field's input.
    ///
    /// An explicit `id` attribute wins. Otherwise the form's `auto_id` format
    /// is used: `%s` is replaced by the html name, a format without `%s` uses
    /// the html name as is, and an empty format yields an empty id.
    pub fn auto_id(&self) -> String {
        if let Some(id) = self.def.attrs.get("id") {
            return id.clone();
        }
        let auto_id = &self.form.auto_id;
        if auto_id.contains("%s") {
            auto_id.replace("%s", &self.html_name())
        } else if auto_id.is_empty() {
            String::new()
        } else {
            self.html_name()
        }
    }

    /// Returns the id the field's label points at.
    pub fn id_for_label(&self) -> String {
        let id = self.auto_id();
        if id.is_empty() {
            id
        } else {
            self.def.widget.id_for_label(&id)
        }
    }
}

/// A template value pointing at one field of a shared form.
#[derive(Debug)]
pub struct FieldRef {
    form: Arc<Form>,
    index: usize,
}

impl FieldRef {
    /// Borrows the field.
    pub fn bound(&self) -> BoundField<'_> {
        BoundField {
            form: &self.form,
            def: &self.form.fields[self.index],
        }
    }
}

impl Object for FieldRef {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let field = self.bound();
        let value = match key.as_str()? {
            "name" => Value::from(field.name()),
            "label" => Value::from(field.label()),
            "html_name" => Value::from(field.html_name()),
            "auto_id" => Value::from(field.auto_id()),
            "id_for_label" => Value::from(field.id_for_label()),
            "input_type" => Value::from(field.widget().input_type()),
            _ => return None,
        };
        Some(value)
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Str(&[
            "name",
            "label",
            "html_name",
            "auto_id",
            "id_for_label",
            "input_type",
        ])
    }
}

/// Builder for [`Form`].
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
    prefix: Option<String>,
    auto_id: String,
    hooks: Option<Box<dyn LabelHooks>>,
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            prefix: None,
            auto_id: DEFAULT_AUTO_ID.to_string(),
            hooks: None,
        }
    }
}

impl std::fmt::Debug for FormBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("fields", &self.fields)
            .field("prefix", &self.prefix)
            .field("auto_id", &self.auto_id)
            .finish_non_exhaustive()
    }
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Prefixes every field name with `{prefix}-`.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the id format; `%s` is replaced by the field's html name.
    #[must_use]
    pub fn auto_id(mut self, auto_id: impl Into<String>) -> Self {
        self.auto_id = auto_id.into();
        self
    }

    /// Sets the label contributions of the form.
    #[must_use]
    pub fn label_hooks(mut self, hooks: impl LabelHooks + 'static) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    /// Builds the form.
    pub fn build(self) -> Form {
        Form {
            fields: self.fields,
            prefix: self.prefix,
            auto_id: self.auto_id,
            hooks: self.hooks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::LabelLayer;
    use crate::widgets::{BootstrapRadioSelect, BootstrapTextInput};

    fn sample_form() -> Form {
        Form::builder()
            .field(FormFieldDef::new("name", "Name", BootstrapTextInput::new()))
            .field(FormFieldDef::new(
                "plan",
                "Plan",
                BootstrapRadioSelect::new(vec![("free", "Free"), ("pro", "Pro")]),
            ))
            .build()
    }

    #[test]
    fn test_bound_field_ids() {
        let form = sample_form();
        let name = form.field("name").unwrap();
        assert_eq!(name.label(), "Name");
        assert_eq!(name.html_name(), "name");
        assert_eq!(name.auto_id(), "id_name");
        assert_eq!(name.id_for_label(), "id_name");

        let plan = form.field("plan").unwrap();
        assert_eq!(plan.id_for_label(), "id_plan_0");
        assert!(form.field("missing").is_none());
        assert!(matches!(
            form.try_field("missing"),
            Err(FormError::UnknownField(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_prefix_and_auto_id() {
        let form = Form::builder()
            .prefix("billing")
            .auto_id("f_%s")
            .field(FormFieldDef::new("name", "Name", BootstrapTextInput::new()))
            .build();
        let field = form.field("name").unwrap();
        assert_eq!(field.html_name(), "billing-name");
        assert_eq!(field.id_for_label(), "f_billing-name");
    }

    #[test]
    fn test_auto_id_without_placeholder() {
        let form = Form::builder()
            .auto_id("yes")
            .field(FormFieldDef::new("name", "Name", BootstrapTextInput::new()))
            .build();
        assert_eq!(form.field("name").unwrap().auto_id(), "name");

        let form = Form::builder()
            .auto_id("")
            .field(FormFieldDef::new("name", "Name", BootstrapTextInput::new()))
            .build();
        assert_eq!(form.field("name").unwrap().id_for_label(), "");
    }

    #[test]
    fn test_explicit_id_wins() {
        let form = Form::builder()
            .field(FormFieldDef::new("name", "Name", BootstrapTextInput::new()).id("full-name"))
            .build();
        assert_eq!(form.field("name").unwrap().id_for_label(), "full-name");
    }

    #[test]
    fn test_bound_fields_order() {
        let form = sample_form();
        let names: Vec<_> = form.bound_fields().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "plan"]);
    }

    #[test]
    fn test_form_hooks() {
        let form = Form::builder()
            .label_hooks(LabelLayer::new().class("form-label"))
            .build();
        assert!(form
            .label_hooks()
            .unwrap()
            .label_classes()
            .contains("form-label"));
        assert!(sample_form().label_hooks().is_none());
    }

    #[test]
    fn test_form_as_template_value() {
        let value = sample_form().into_value();
        let field = value.get_attr("plan").unwrap();
        assert_eq!(field.get_attr("label").unwrap().to_string(), "Plan");
        assert_eq!(
            field.get_attr("id_for_label").unwrap().to_string(),
            "id_plan_0"
        );
        assert!(value.get_attr("missing").unwrap().is_undefined());

        let field_ref = field.downcast_object_ref::<FieldRef>().unwrap();
        assert_eq!(field_ref.bound().name(), "plan");
    }
}
