//! Site-wide settings passed into the navigation model.
//!
//! Mirrors the parts of the project configuration the model needs, without
//! depending on how that configuration is loaded.

use std::collections::BTreeSet;

/// Social preview image shipped with the site.
pub const DEFAULT_SOCIAL_IMAGE: &str =
    "https://user-images.githubusercontent.com/904724/185365452-87b7ca7b-6030-4813-a2db-5e65c785bf88.png";

/// GitHub repository hosting the documentation sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GithubSettings {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Directory of the documentation sources inside the repository.
    pub dir: String,
    /// Whether pages get an "edit this page" link.
    pub edit: bool,
}

impl GithubSettings {
    /// Repository URL.
    #[must_use]
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }

    /// Edit link pattern with a `:path` placeholder, or `None` when editing
    /// is disabled.
    #[must_use]
    pub fn edit_link_pattern(&self) -> Option<String> {
        if !self.edit {
            return None;
        }
        let dir = self.dir.trim_matches('/');
        let dir = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        Some(format!(
            "{}/edit/{}/{dir}:path",
            self.repo_url(),
            self.branch
        ))
    }
}

impl Default for GithubSettings {
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

/// Settings that shape every locale's configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteSettings {
    /// Site title.
    pub title: String,
    /// Overrides the default locale's description when set.
    pub description: Option<String>,
    /// Public hostname, passed through for sitemap generation.
    pub hostname: Option<String>,
    /// Social preview image URL.
    pub image: Option<String>,
    /// Logo path shown in the header.
    pub logo: Option<String>,
    /// Source repository, used for the social link and edit links.
    pub github: Option<GithubSettings>,
    /// Heading depths included in the page outline.
    pub outline_levels: BTreeSet<u8>,
    /// Analytics script injected around every page.
    pub analytics_script: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Servactory".to_owned(),
            description: None,
            hostname: None,
            image: Some(DEFAULT_SOCIAL_IMAGE.to_owned()),
            logo: None,
            github: Some(GithubSettings::default()),
            outline_levels: BTreeSet::from([2, 3]),
            analytics_script: None,
        }
    }
}
