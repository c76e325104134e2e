//! Configuration management for svdocs.
//!
//! Parses `svdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.hostname`
//! - `analytics.script_src`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "svdocs.toml";

/// Default social preview image.
const DEFAULT_SOCIAL_IMAGE: &str =
    "https://user-images.githubusercontent.com/904724/185365452-87b7ca7b-6030-4813-a2db-5e65c785bf88.png";

/// Default analytics snippet location.
const DEFAULT_ANALYTICS_SRC: &str = "/_vercel/insights/script.js";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide values.
    pub site: SiteConfig,
    /// Source repository.
    pub github: GithubConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Page outline configuration.
    pub outline: OutlineConfig,
    /// Analytics snippet configuration.
    pub analytics: AnalyticsConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Overrides the default locale's description.
    pub description: Option<String>,
    /// Public hostname, used by the generator for the sitemap.
    pub hostname: Option<String>,
    /// Social preview image URL.
    pub image: Option<String>,
    /// Header logo path.
    pub logo: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Servactory".to_owned(),
            description: None,
            hostname: None,
            image: Some(DEFAULT_SOCIAL_IMAGE.to_owned()),
            logo: None,
        }
    }
}

/// Source repository configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch edit links point at.
    pub branch: String,
    /// Documentation directory inside the repository.
    pub dir: String,
    /// Whether pages get an "edit this page" link.
    pub edit: bool,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            owner: "servactory".to_owned(),
            repo: "servactory".to_owned(),
            branch: "main".to_owned(),
            dir: "/".to_owned(),
            edit: true,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Page outline configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Heading depths included in the outline.
    pub levels: Vec<u8>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self { levels: vec![2, 3] }
    }
}

/// Analytics snippet configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Whether the snippet is injected.
    pub enabled: bool,
    /// Script URL.
    pub script_src: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            script_src: DEFAULT_ANALYTICS_SRC.to_owned(),
        }
    }
}

impl AnalyticsConfig {
    /// Script URL when analytics is enabled.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.enabled.then_some(self.script_src.as_str())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.hostname`").
        field: String,
        /// Error message (e.g., "${`DOCS_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `svdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            github: GithubConfig::default(),
            docs: DocsConfigRaw::default(),
            outline: OutlineConfig::default(),
            analytics: AnalyticsConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_github()?;
        self.validate_outline()?;
        self.validate_analytics()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        if let Some(ref hostname) = self.site.hostname {
            require_http_url(hostname, "site.hostname")?;
        }
        if let Some(ref image) = self.site.image {
            require_http_url(image, "site.image")?;
        }
        Ok(())
    }

    fn validate_github(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.github.owner, "github.owner")?;
        require_non_empty(&self.github.repo, "github.repo")?;
        require_non_empty(&self.github.branch, "github.branch")?;
        Ok(())
    }

    /// Outline levels must be non-empty heading depths (1-6).
    fn validate_outline(&self) -> Result<(), ConfigError> {
        if self.outline.levels.is_empty() {
            return Err(ConfigError::Validation(
                "outline.levels cannot be empty".to_owned(),
            ));
        }
        if let Some(level) = self
            .outline
            .levels
            .iter()
            .find(|level| !(1..=6).contains(*level))
        {
            return Err(ConfigError::Validation(format!(
                "outline.levels contains {level}, expected 1 to 6"
            )));
        }
        Ok(())
    }

    fn validate_analytics(&self) -> Result<(), ConfigError> {
        if self.analytics.enabled {
            require_non_empty(&self.analytics.script_src, "analytics.script_src")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;

        if let Some(ref hostname) = self.site.hostname {
            self.site.hostname = Some(expand::expand_env(hostname, "site.hostname")?);
        }

        self.analytics.script_src =
            expand::expand_env(&self.analytics.script_src, "analytics.script_src")?;

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };
    }
}
