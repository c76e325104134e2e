//! `svdocs sidebar` command implementation.

use std::path::PathBuf;

use clap::Args;
use svdocs_config::Config;
use svdocs_nav::{Locale, NavigationModel, SidebarNode};

use crate::error::CliError;
use crate::output::Output;
use crate::settings::site_settings_from_config;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path, e.g. /guide/attributes/input. Paths without the locale
    /// prefix are localized.
    path: String,

    /// Locale the path belongs to.
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Path to configuration file (default: auto-discover svdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the locale is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let model = NavigationModel::new(&site_settings_from_config(&config))?;
        let locale_config = model.resolve(&self.locale)?;

        let path = localize_path(locale_config.locale, &normalize_path(&self.path));
        let Some((prefix, entry)) = locale_config.sidebar.resolve(&path) else {
            output.warning(&format!("No sidebar for {path}"));
            return Ok(());
        };

        output.highlight(&format!("Sidebar {prefix}"));

        let Some(trail) = entry.trail(&path) else {
            output.warning(&format!("{path} is not listed in this sidebar"));
            return Ok(());
        };
        let labels: Vec<_> = trail.iter().map(|node| node.label()).collect();
        output.info(&labels.join(" > "));

        let (prev, next) = entry.neighbors(&path);
        output.muted(&format!("prev: {}", describe(prev)));
        output.muted(&format!("next: {}", describe(next)));

        Ok(())
    }
}

/// Ensure the path starts with `/`.
fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Prefix `path` with the locale's path prefix unless it already has it.
fn localize_path(locale: Locale, path: &str) -> String {
    let prefix = locale.path_prefix();
    let localized = path
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
    if prefix.is_empty() || localized {
        path.to_owned()
    } else {
        locale.localize_path(path)
    }
}

fn describe(node: Option<&SidebarNode>) -> String {
    match node {
        Some(node) => format!("{} ({})", node.label(), node.target().unwrap_or_default()),
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("guide/why"), "/guide/why");
        assert_eq!(normalize_path("/guide/why"), "/guide/why");
    }

    #[test]
    fn test_localize_path() {
        assert_eq!(
            localize_path(Locale::Ru, "/guide/attributes/input"),
            "/ru/guide/attributes/input"
        );
        assert_eq!(
            localize_path(Locale::Ru, "/ru/guide/attributes/input"),
            "/ru/guide/attributes/input"
        );
        assert_eq!(localize_path(Locale::Ru, "/ruby/intro"), "/ru/ruby/intro");
        assert_eq!(localize_path(Locale::En, "/guide/why"), "/guide/why");
    }

    #[test]
    fn test_unprefixed_path_resolves_in_russian_sidebar() {
        let config = svdocs_nav::resolve_config("ru").unwrap();
        let path = localize_path(config.locale, "/guide/attributes/input");

        let (prefix, entry) = config.sidebar.resolve(&path).unwrap();

        assert_eq!(prefix, "/ru/guide/");
        assert!(entry.trail(&path).is_some());
    }

    #[test]
    fn test_describe() {
        let leaf = SidebarNode::Leaf {
            label: "Input".to_owned(),
            target: "/guide/attributes/input".to_owned(),
        };
        assert_eq!(describe(Some(&leaf)), "Input (/guide/attributes/input)");
        assert_eq!(describe(None), "-");
    }
}
