//! `svdocs export` command implementation.

use std::path::PathBuf;

use clap::Args;
use svdocs_config::Config;
use svdocs_nav::{LocaleManifest, NavigationModel, SiteManifest, SiteSettings};

use crate::error::CliError;
use crate::output::Output;
use crate::settings::site_settings_from_config;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover svdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Export a single locale's config instead of the full manifest.
    #[arg(short, long)]
    locale: Option<String>,

    /// Emit compact JSON.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the locale is unknown, or
    /// the model cannot be built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let settings = site_settings_from_config(&config);
        tracing::info!(config_path = ?config.config_path, "Loaded configuration");
        let model = NavigationModel::new(&settings)?;

        let json = render(&model, &settings, self.locale.as_deref(), !self.compact)?;

        output.data(&json)?;
        Ok(())
    }
}

/// Serialize the full manifest, or one locale's registration entry.
fn render(
    model: &NavigationModel,
    settings: &SiteSettings,
    locale: Option<&str>,
    pretty: bool,
) -> Result<String, CliError> {
    let Some(locale) = locale else {
        return Ok(SiteManifest::build(model, settings).to_json(pretty)?);
    };
    let entry = LocaleManifest::new(model.resolve(locale)?);
    let json = if pretty {
        serde_json::to_string_pretty(&entry)?
    } else {
        serde_json::to_string(&entry)?
    };
    Ok(json)
}
