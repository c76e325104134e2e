//! Conversion from loaded configuration to navigation model settings.

use std::collections::BTreeSet;

use svdocs_config::Config;
use svdocs_nav::{GithubSettings, SiteSettings};

/// Build [`SiteSettings`] from the project configuration.
pub(crate) fn site_settings_from_config(config: &Config) -> SiteSettings {
    SiteSettings {
        title: config.site.title.clone(),
        description: config.site.description.clone(),
        hostname: config.site.hostname.clone(),
        image: config.site.image.clone(),
        logo: config.site.logo.clone(),
        github: Some(GithubSettings {
            owner: config.github.owner.clone(),
            repo: config.github.repo.clone(),
            branch: config.github.branch.clone(),
            dir: config.github.dir.clone(),
            edit: config.github.edit,
        }),
        outline_levels: config.outline.levels.iter().copied().collect::<BTreeSet<_>>(),
        analytics_script: config.analytics.script().map(str::to_owned),
    }
}
