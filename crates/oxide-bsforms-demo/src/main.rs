//! oxide-bsforms demo
//!
//! Renders the label of a field of a small demo form from the command line.

use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::Parser;
use minijinja::context;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_bsforms::fields::{boolean_field, char_field, radio_field};
use oxide_bsforms::{Form, LabelRenderer, Settings};

/// Render Bootstrap 5 form labels.
#[derive(Parser)]
#[command(name = "oxide-bsforms-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with label settings.
    #[arg(short, long, env = "BSFORMS_SETTINGS")]
    settings: Option<PathBuf>,

    /// Directory with template overrides.
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Field to render the label for (all fields if not specified).
    #[arg(short, long)]
    field: Option<String>,

    /// Grid classes for a horizontal form, e.g. "col-md-4".
    #[arg(long)]
    horizontal: Option<String>,

    /// Label size, e.g. "sm" or "lg".
    #[arg(long)]
    size: Option<String>,

    /// Only show the label to screen readers.
    #[arg(long)]
    sronly: bool,

    /// Extra label attribute as key=value (repeatable).
    #[arg(short, long = "attr", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    if key.trim().is_empty() {
        return Err(format!("missing attribute name in `{s}`"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

fn demo_form() -> Form {
    Form::builder()
        .field(char_field("name", "Name"))
        .field(boolean_field("subscribe", "Subscribe to the newsletter"))
        .field(radio_field(
            "plan",
            "Plan",
            vec![("free", "Free"), ("pro", "Pro")],
        ))
        .build()
}

const TEMPLATE: &str = "{% for name in fields %}{{ label(form[name]) }}\n{% endfor %}";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = match &cli.settings {
        Some(path) => Settings::from_path(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    debug!(?settings, "Settings loaded");

    let renderer = match &cli.templates {
        Some(dir) => {
            info!(dir = %dir.display(), "Using template overrides");
            LabelRenderer::with_template_dir(settings, dir)
        }
        None => LabelRenderer::new(settings),
    };

    let form = demo_form();
    let fields: Vec<String> = match &cli.field {
        Some(name) => {
            if let Err(err) = form.try_field(name) {
                let known: Vec<_> = form.bound_fields().map(|f| f.name()).collect();
                bail!("{err}, expected one of: {}", known.join(", "));
            }
            vec![name.clone()]
        }
        None => form.bound_fields().map(|f| f.name().to_string()).collect(),
    };

    let label_attrs: serde_json::Map<String, serde_json::Value> = cli
        .attrs
        .into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect();

    let html = renderer.render_str(
        TEMPLATE,
        context! {
            form => form.into_value(),
            fields => fields,
            label_attrs => label_attrs,
            form_horizontal_label => cli.horizontal,
            form_size => cli.size,
            form_sronly => cli.sronly,
        },
    )?;
    print!("{html}");

    Ok(())
}
