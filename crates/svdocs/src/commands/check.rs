//! `svdocs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use svdocs_config::{CliSettings, Config};
use svdocs_nav::{Locale, NavigationModel, PageSet};

use crate::error::CliError;
use crate::output::Output;
use crate::settings::site_settings_from_config;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover svdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Skip checking link targets against the documentation pages.
    #[arg(long)]
    no_pages: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the docs directory cannot be
    /// read, or any navigation entry is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let settings = site_settings_from_config(&config);
        tracing::info!(config_path = ?config.config_path, "Loaded configuration");

        let pages = if self.no_pages {
            output.info("Page check: skipped");
            None
        } else {
            let source_dir = &config.docs_resolved.source_dir;
            let pages = PageSet::scan(source_dir).map_err(|source| CliError::DocsDir {
                path: source_dir.clone(),
                source,
            })?;
            output.info(&format!(
                "Source directory: {} ({} pages)",
                source_dir.display(),
                pages.len()
            ));
            Some(pages)
        };

        output.highlight(&format!(
            "Checking navigation for {} locales",
            Locale::ALL.len()
        ));
        let report = NavigationModel::check(&settings, pages.as_ref());

        if report.is_ok() {
            output.success("Navigation is valid");
            return Ok(());
        }

        for error in report.errors() {
            output.error(&error.to_string());
        }
        output.separator();

        Err(report.into())
    }
}
