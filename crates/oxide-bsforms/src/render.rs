//! Template environment for label rendering.

use std::path::Path;
use std::sync::Arc;

use minijinja::{path_loader, Environment};
use serde::Serialize;

use crate::error::Result;
use crate::form::BoundField;
use crate::hooks::{Attrs, Context};
use crate::label::{label, LabelOptions, DEFAULT_LABEL_TEMPLATE};
use crate::settings::Settings;
use crate::tag::register_label_tag;

/// Returns the source of a template shipped with this crate.
pub fn builtin_template(name: &str) -> Option<&'static str> {
    match name {
        DEFAULT_LABEL_TEMPLATE => Some(include_str!("../templates/bootstrap_forms/label.html")),
        _ => None,
    }
}

/// A template environment with the label templates and the `label` tag.
///
/// # Example
///
/// ```rust
/// use oxide_bsforms::{fields::char_field, Form, LabelOptions, LabelRenderer, Settings};
///
/// let form = Form::builder().field(char_field("name", "Name")).build();
/// let renderer = LabelRenderer::new(Settings::new().label_class("form-label"));
///
/// let field = form.field("name").unwrap();
/// let html = renderer
///     .label(&field, &LabelOptions::new().horizontal("col-sm-2"), Default::default())
///     .unwrap();
/// assert_eq!(
///     html,
///     r#"<label class="col-form-label col-sm-2 form-label" for="id_name">Name</label>"#
/// );
/// ```
pub struct LabelRenderer {
    env: Environment<'static>,
    settings: Arc<Settings>,
}

impl std::fmt::Debug for LabelRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelRenderer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl LabelRenderer {
    /// Creates a renderer that only knows the built-in templates.
    pub fn new(settings: Settings) -> Self {
        let mut env = Environment::new();
        env.set_loader(|name| Ok(builtin_template(name).map(str::to_string)));
        Self::with_environment(env, settings)
    }

    /// Creates a renderer that looks templates up in `dir` first.
    ///
    /// A `bootstrap_forms/label.html` in `dir` replaces the built-in one.
    pub fn with_template_dir(settings: Settings, dir: impl AsRef<Path>) -> Self {
        let dir_loader = path_loader(dir.as_ref());
        let mut env = Environment::new();
        env.set_loader(move |name| match dir_loader(name)? {
            Some(source) => Ok(Some(source)),
            None => Ok(builtin_template(name).map(str::to_string)),
        });
        Self::with_environment(env, settings)
    }

    /// Wraps an existing environment, registering the `label` tag on it.
    ///
    /// The environment must be able to load [`DEFAULT_LABEL_TEMPLATE`] for
    /// widgets without their own label template.
    pub fn with_environment(mut env: Environment<'static>, settings: Settings) -> Self {
        let settings = Arc::new(settings);
        register_label_tag(&mut env, Arc::clone(&settings));
        Self { env, settings }
    }

    /// Registers a named template, replacing any loaded one.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a template with the given context.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }

    /// Renders a template from source without registering it.
    pub fn render_str<S: Serialize>(&self, source: &str, ctx: S) -> Result<String> {
        Ok(self.env.render_str(source, ctx)?)
    }

    /// Renders the label of a field.
    pub fn label(
        &self,
        field: &BoundField<'_>,
        options: &LabelOptions,
        attrs: Attrs,
    ) -> Result<String> {
        label(
            &self.env,
            &self.settings,
            field,
            options,
            attrs,
            Context::new(),
        )
    }

    /// Returns the settings labels are rendered with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the underlying template environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns the underlying template environment mutably.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for LabelRenderer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
