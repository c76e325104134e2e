//! Localized navigation configuration.
//!
//! [`NavigationModel`] builds one immutable [`LocaleConfig`] per supported
//! locale from the language-neutral site shape and that locale's
//! translation table. Everything is assembled and checked once, up front;
//! lookups afterwards only borrow.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::shape::{ShapeNode, SiteShape, site_shape};
use crate::translations::{SearchTranslations, Translations, UiStrings};
use crate::{
    GithubSettings, Locale, NavError, PageSet, SidebarEntry, SidebarMap, SidebarNode,
    SiteSettings, Target, ValidationReport,
};

/// Top-level navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display label.
    #[serde(rename = "text")]
    pub label: String,
    /// Absolute URL or site path starting with `/`.
    #[serde(rename = "link")]
    pub target: String,
    /// Pattern of page paths for which this item is highlighted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

/// "Edit this page" link settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditLink {
    /// URL pattern containing a `:path` placeholder.
    pub pattern: String,
    /// Link text.
    pub text: String,
}

/// Page outline settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// Heading depths included in the outline.
    #[serde(rename = "level")]
    pub levels: BTreeSet<u8>,
    /// Outline title.
    pub label: String,
}

/// Complete configuration of one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Locale this configuration was built for.
    #[serde(skip)]
    pub locale: Locale,
    /// Site description in this locale.
    #[serde(skip)]
    pub description: String,
    /// Top-level navigation in render order.
    #[serde(rename = "nav")]
    pub navigation: Vec<NavItem>,
    /// Sidebar trees keyed by localized path prefix.
    pub sidebar: SidebarMap,
    pub outline: Outline,
    /// Absent when the repository has editing disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    /// Local search UI strings.
    pub search: SearchTranslations,
    /// Theme strings, serialized at the top level.
    #[serde(flatten)]
    pub ui: UiStrings,
}

/// Where a link target was declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetOrigin<'a> {
    /// Top-level navigation.
    Nav,
    /// Sidebar tree registered under the given prefix.
    Sidebar(&'a str),
}

impl fmt::Display for TargetOrigin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nav => f.write_str("nav"),
            Self::Sidebar(prefix) => write!(f, "sidebar {prefix}"),
        }
    }
}

/// A link target declared somewhere in a locale's navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclaredTarget<'a> {
    pub origin: TargetOrigin<'a>,
    /// Label of the declaring item.
    pub label: &'a str,
    /// Raw target as declared, already localized.
    pub target: &'a str,
}

impl LocaleConfig {
    /// Build a locale's configuration from the site shape.
    fn build(
        locale: Locale,
        shape: &SiteShape,
        translations: &Translations,
        settings: &SiteSettings,
    ) -> Result<Self, NavError> {
        let navigation = shape
            .nav
            .iter()
            .map(|item| {
                Ok(NavItem {
                    label: translations.label(locale, item.id)?.to_owned(),
                    target: localize_target(locale, item.link)?,
                    active_match: item
                        .active_prefix
                        .map(|prefix| format!("^{}", locale.localize_path(prefix))),
                })
            })
            .collect::<Result<Vec<_>, NavError>>()?;

        let mut sidebar = SidebarMap::new();
        for tree in &shape.sidebars {
            let prefix = locale.localize_path(tree.prefix);
            let items = localize_nodes(locale, &tree.items, translations)?;
            let entry = SidebarEntry {
                base_path: prefix.clone(),
                items,
            };
            sidebar.insert(locale, prefix, entry)?;
        }

        let description = match &settings.description {
            Some(description) if locale == Locale::DEFAULT => description.clone(),
            _ => translations.description.clone(),
        };

        let edit_link = settings
            .github
            .as_ref()
            .and_then(GithubSettings::edit_link_pattern)
            .map(|pattern| EditLink {
                pattern,
                text: translations.ui.edit_link_text.clone(),
            });

        let unused = translations.unused_keys(&shape.ids());
        if !unused.is_empty() {
            tracing::warn!(%locale, keys = ?unused, "Translation keys not used by any node");
        }

        tracing::debug!(
            %locale,
            nav_items = navigation.len(),
            sidebar_prefixes = sidebar.len(),
            "Built locale config"
        );

        Ok(Self {
            locale,
            description,
            navigation,
            sidebar,
            outline: Outline {
                levels: settings.outline_levels.clone(),
                label: translations.outline_label.clone(),
            },
            edit_link,
            search: translations.search.clone(),
            ui: translations.ui.clone(),
        })
    }

    /// Sidebar tree for a page path, by longest-prefix match.
    #[must_use]
    pub fn sidebar_for(&self, path: &str) -> Option<&SidebarEntry> {
        self.sidebar.resolve(path).map(|(_, entry)| entry)
    }

    /// Every declared link target, navigation first, then sidebars in
    /// prefix order.
    #[must_use]
    pub fn targets(&self) -> Vec<DeclaredTarget<'_>> {
        fn walk<'a>(
            nodes: &'a [SidebarNode],
            origin: TargetOrigin<'a>,
            out: &mut Vec<DeclaredTarget<'a>>,
        ) {
            for node in nodes {
                match node {
                    SidebarNode::Leaf { label, target } => out.push(DeclaredTarget {
                        origin,
                        label,
                        target,
                    }),
                    SidebarNode::Group { children, .. } => walk(children, origin, out),
                }
            }
        }

        let mut out: Vec<_> = self
            .navigation
            .iter()
            .map(|item| DeclaredTarget {
                origin: TargetOrigin::Nav,
                label: &item.label,
                target: &item.target,
            })
            .collect();
        for (prefix, entry) in self.sidebar.iter() {
            walk(&entry.items, TargetOrigin::Sidebar(prefix), &mut out);
        }
        out
    }

    /// Check every site-relative target against the published page set.
    ///
    /// Returns one `NavError::DanglingLinkTarget` per target without a
    /// page. External URLs are not checked.
    #[must_use]
    pub fn validate_targets(&self, pages: &PageSet) -> Vec<NavError> {
        self.targets()
            .into_iter()
            .filter(|declared| {
                Target::parse(declared.target)
                    .and_then(Target::page_path)
                    .is_some_and(|page| !pages.contains(&page))
            })
            .map(|declared| NavError::DanglingLinkTarget {
                locale: self.locale.code().to_owned(),
                origin: declared.origin.to_string(),
                target: declared.target.to_owned(),
            })
            .collect()
    }
}

/// Prefix site paths with the locale prefix; leave external URLs alone.
fn localize_target(locale: Locale, link: &str) -> Result<String, NavError> {
    match Target::parse(link) {
        Some(Target::External(url)) => Ok(url.to_owned()),
        Some(Target::Page(path)) => Ok(locale.localize_path(path)),
        None => Err(NavError::InvalidTarget {
            locale: locale.code().to_owned(),
            target: link.to_owned(),
        }),
    }
}

fn localize_nodes(
    locale: Locale,
    nodes: &[ShapeNode],
    translations: &Translations,
) -> Result<Vec<SidebarNode>, NavError> {
    nodes
        .iter()
        .map(|node| match node {
            ShapeNode::Leaf { id, link } => Ok(SidebarNode::Leaf {
                label: translations.label(locale, id)?.to_owned(),
                target: localize_target(locale, link)?,
            }),
            ShapeNode::Group {
                id,
                collapsed,
                children,
            } => Ok(SidebarNode::Group {
                label: translations.label(locale, id)?.to_owned(),
                collapsed: *collapsed,
                children: localize_nodes(locale, children, translations)?,
            }),
        })
        .collect()
}

/// Immutable, locale-keyed navigation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationModel {
    configs: BTreeMap<Locale, LocaleConfig>,
}

impl NavigationModel {
    /// Build and validate every supported locale.
    ///
    /// # Errors
    ///
    /// Returns the first structural error: a missing or malformed
    /// translation, an invalid target, or an ambiguous sidebar prefix.
    pub fn new(settings: &SiteSettings) -> Result<Self, NavError> {
        let shape = site_shape();
        let configs = Locale::ALL
            .into_iter()
            .map(|locale| {
                let translations = Translations::load(locale)?;
                let config = LocaleConfig::build(locale, &shape, &translations, settings)?;
                Ok((locale, config))
            })
            .collect::<Result<_, NavError>>()?;
        Ok(Self { configs })
    }

    /// Configuration for a locale code.
    ///
    /// # Errors
    ///
    /// Returns `NavError::UnknownLocale` if the code is not supported.
    pub fn resolve(&self, locale: &str) -> Result<&LocaleConfig, NavError> {
        let parsed: Locale = locale.parse()?;
        self.configs
            .get(&parsed)
            .ok_or_else(|| NavError::UnknownLocale(locale.to_owned()))
    }

    /// Iterate over locale configs, default locale first.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleConfig> {
        self.configs.values()
    }

    /// Check every locale's targets against the published page set.
    #[must_use]
    pub fn validate(&self, pages: &PageSet) -> ValidationReport {
        let mut report = ValidationReport::default();
        for config in self.iter() {
            report.extend(config.validate_targets(pages));
        }
        report
    }

    /// Build every locale independently and collect all errors.
    ///
    /// Unlike [`NavigationModel::new`], a broken locale does not hide errors
    /// in the others. When `pages` is given, targets of every locale that
    /// built cleanly are checked against it too.
    #[must_use]
    pub fn check(settings: &SiteSettings, pages: Option<&PageSet>) -> ValidationReport {
        let shape = site_shape();
        let mut report = ValidationReport::default();
        for locale in Locale::ALL {
            let built = Translations::load(locale)
                .and_then(|t| LocaleConfig::build(locale, &shape, &t, settings));
            match built {
                Ok(config) => {
                    if let Some(pages) = pages {
                        report.extend(config.validate_targets(pages));
                    }
                }
                Err(e) => report.push(e),
            }
        }
        report
    }
}

/// Resolve one locale's configuration with default site settings.
///
/// # Errors
///
/// Returns `NavError::UnknownLocale` for unsupported codes, or a structural
/// error if the locale's configuration is broken.
pub fn resolve_config(locale: &str) -> Result<LocaleConfig, NavError> {
    let locale: Locale = locale.parse()?;
    let translations = Translations::load(locale)?;
    LocaleConfig::build(locale, &site_shape(), &translations, &SiteSettings::default())
}
