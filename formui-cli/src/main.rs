//! Fill in a form in the terminal and post it as JSON.
//!
//! Without `--form` the built-in contact form is shown. The final state of the
//! form is printed to stdout as JSON once the UI exits.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use formui::{DocumentFormat, FormReport, FormUI, UiOptions, contact, parse_form_document};

#[derive(Debug, Parser)]
#[command(
    name = "formui",
    version,
    about = "Fill in validated forms in the terminal and submit them as JSON"
)]
struct Cli {
    /// Form document (.json, .yaml/.yml or .toml) describing the fields
    #[arg(short = 'f', long = "form", value_name = "PATH")]
    form: Option<PathBuf>,

    /// Endpoint receiving the submission; overrides the document's action
    #[arg(short = 'a', long = "action", value_name = "URL")]
    action: Option<String>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Write diagnostics to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter used with --log-file, e.g. "debug" or "formui=trace"
    #[arg(long = "log-level", value_name = "FILTER", default_value = "info")]
    log_level: String,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path, &cli.log_level)?;
    }

    let ui = build_ui(&cli)?;
    let report = ui.run().map_err(|err| eyre!("{err:#}"))?;
    println!("{}", render_report(&report, !cli.no_pretty)?);
    Ok(())
}

fn init_logging(path: &Path, level: &str) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(level)
        .wrap_err_with(|| format!("invalid log filter `{level}`"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))?;
    Ok(())
}

fn build_ui(cli: &Cli) -> Result<FormUI> {
    tracing::debug!(form = ?cli.form, action = ?cli.action, "building form");
    let (form, title, intro) = match cli.form.as_deref() {
        Some(path) => {
            let format = DocumentFormat::from_path(path).map_err(|err| eyre!("{err:#}"))?;
            let contents = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read form document {}", path.display()))?;
            let mut document =
                parse_form_document(&contents, format).map_err(|err| eyre!("{err:#}"))?;
            if let Some(action) = &cli.action {
                document.action = action.clone();
            }
            let title = document.title.take();
            let intro = document.intro.take();
            let form = document
                .into_form()
                .wrap_err_with(|| format!("invalid form document {}", path.display()))?;
            (form, title, intro)
        }
        None => {
            let action = cli.action.as_deref().unwrap_or(contact::CONTACT_ACTION);
            (
                contact::contact_form(action),
                Some(contact::CONTACT_TITLE.to_string()),
                Some(contact::CONTACT_INTRO.to_string()),
            )
        }
    };

    let mut ui = FormUI::new(form).with_options(UiOptions::default());
    if let Some(title) = cli.title.clone().or(title) {
        ui = ui.with_title(title);
    }
    if let Some(intro) = intro {
        ui = ui.with_intro(intro);
    }
    Ok(ui)
}

fn render_report(report: &FormReport, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    text.wrap_err("failed to serialize form report")
}
