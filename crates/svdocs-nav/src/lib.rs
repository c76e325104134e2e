//! Localized navigation model for the Servactory documentation site.
//!
//! This crate provides:
//! - [`NavigationModel`]: one immutable [`LocaleConfig`] per supported locale
//! - [`SidebarMap`]: sidebar trees keyed by path prefix, resolved by
//!   longest-prefix match
//! - [`PageSet`]: published pages, used to reject dangling link targets
//! - [`SiteManifest`]: the JSON shape handed to the site generator
//!
//! The navigation tree is declared once, language-neutral; each locale only
//! supplies a translation table.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use svdocs_nav::{NavigationModel, SiteSettings};
//!
//! let model = NavigationModel::new(&SiteSettings::default())?;
//! let ru = model.resolve("ru")?;
//!
//! // Sidebar for a page
//! let sidebar = ru.sidebar_for("/ru/guide/attributes/input");
//! # Ok(())
//! # }
//! ```

mod error;
mod locale;
mod manifest;
mod model;
mod settings;
mod shape;
mod sidebar;
mod target;
mod translations;

pub use error::{NavError, ValidationReport};
pub use locale::Locale;
pub use manifest::{HeadTag, LocaleManifest, SiteManifest, SocialLink, head_tags};
pub use model::{
    DeclaredTarget, EditLink, LocaleConfig, NavItem, NavigationModel, Outline, TargetOrigin,
    resolve_config,
};
pub use settings::{DEFAULT_SOCIAL_IMAGE, GithubSettings, SiteSettings};
pub use sidebar::{SidebarEntry, SidebarMap, SidebarNode};
pub use target::{PageSet, Target};
pub use translations::{SearchFooter, SearchTranslations, UiStrings};
