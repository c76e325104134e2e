//! Site manifest consumed by the site generator's configuration hook.
//!
//! Bundles every locale's configuration with the site-wide values the
//! generator passes through untouched (hostname, logo, social links), plus
//! the head tags injected around every rendered page.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Serialize, Serializer};

use crate::{LocaleConfig, NavigationModel, SiteSettings};

/// Tag injected into every page's `<head>`.
///
/// Serializes as the `[tag, attrs]` tuple site generators accept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    /// Deferred external script, used for the analytics snippet.
    #[must_use]
    pub fn script(src: &str) -> Self {
        Self {
            tag: "script".to_owned(),
            attrs: BTreeMap::from([
                ("defer".to_owned(), String::new()),
                ("src".to_owned(), src.to_owned()),
            ]),
        }
    }

    /// `<meta property=… content=…>` tag.
    #[must_use]
    pub fn meta_property(property: &str, content: &str) -> Self {
        Self {
            tag: "meta".to_owned(),
            attrs: BTreeMap::from([
                ("content".to_owned(), content.to_owned()),
                ("property".to_owned(), property.to_owned()),
            ]),
        }
    }

    /// Render as HTML. Attribute values are escaped; empty values render
    /// as bare boolean attributes.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(html, " {name}");
            } else {
                let _ = write!(html, " {name}=\"{}\"", escape_attr(value));
            }
        }
        if self.tag == "meta" || self.tag == "link" {
            html.push('>');
        } else {
            let _ = write!(html, "></{}>", self.tag);
        }
        html
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.tag, &self.attrs).serialize(serializer)
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Social link in the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// One locale as registered with the site generator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleManifest<'a> {
    pub label: &'static str,
    pub lang: &'static str,
    pub link: String,
    pub description: &'a str,
    pub theme_config: &'a LocaleConfig,
}

impl<'a> LocaleManifest<'a> {
    /// Registration entry for one locale's config.
    #[must_use]
    pub fn new(config: &'a LocaleConfig) -> Self {
        let locale = config.locale;
        Self {
            label: locale.label(),
            lang: locale.lang(),
            link: locale.link(),
            description: &config.description,
            theme_config: config,
        }
    }
}

/// Complete site configuration handed to the generator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<&'a str>,
    pub head: Vec<HeadTag>,
    pub social_links: Vec<SocialLink>,
    /// Keyed by `root` for the default locale, locale code otherwise.
    pub locales: BTreeMap<&'static str, LocaleManifest<'a>>,
}

impl<'a> SiteManifest<'a> {
    /// Assemble the manifest from a built model.
    #[must_use]
    pub fn build(model: &'a NavigationModel, settings: &'a SiteSettings) -> Self {
        let locales: BTreeMap<_, _> = model
            .iter()
            .map(|config| (config.locale.manifest_key(), LocaleManifest::new(config)))
            .collect();

        let description = locales
            .get("root")
            .map(|root| root.description)
            .unwrap_or_default();

        let social_links = settings
            .github
            .iter()
            .map(|github| SocialLink {
                icon: "github".to_owned(),
                link: github.repo_url(),
            })
            .collect();

        Self {
            title: &settings.title,
            description,
            hostname: settings.hostname.as_deref(),
            logo: settings.logo.as_deref(),
            head: head_tags(settings),
            social_links,
            locales,
        }
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Head tags for every page: social preview image and the analytics snippet.
#[must_use]
pub fn head_tags(settings: &SiteSettings) -> Vec<HeadTag> {
    let mut tags = Vec::new();
    if let Some(image) = &settings.image {
        tags.push(HeadTag::meta_property("og:image", image));
    }
    if let Some(src) = &settings.analytics_script {
        tags.push(HeadTag::script(src));
    }
    tags
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_script_tag_html() {
        let tag = HeadTag::script("/_vercel/insights/script.js");
        assert_eq!(
            tag.to_html(),
            "<script defer src=\"/_vercel/insights/script.js\"></script>"
        );
    }

    #[test]
    fn test_meta_tag_html_escapes_attrs() {
        let tag = HeadTag::meta_property("og:image", "https://x.test/a.png?a=1&b=\"2\"");
        assert_eq!(
            tag.to_html(),
            "<meta content=\"https://x.test/a.png?a=1&amp;b=&quot;2&quot;\" property=\"og:image\">"
        );
    }

    #[test]
    fn test_head_tag_serializes_as_tuple() {
        let tag = HeadTag::script("/a.js");
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            serde_json::json!(["script", { "defer": "", "src": "/a.js" }])
        );
    }

    #[test]
    fn test_meta_tag_html_escapes_apostrophe() {
        let tag = HeadTag::meta_property("og:title", "Servactory's guide");
        assert_eq!(
            tag.to_html(),
            "<meta content=\"Servactory&#39;s guide\" property=\"og:title\">"
        );
    }

    #[test]
    fn test_head_tags_default_to_social_image() {
        let tags = head_tags(&SiteSettings::default());

        assert_eq!(
            tags,
            vec![HeadTag::meta_property("og:image", crate::DEFAULT_SOCIAL_IMAGE)]
        );
    }

    #[test]
    fn test_locale_manifest_carries_description() {
        let model = NavigationModel::new(&SiteSettings::default()).unwrap();
        let ru = model.resolve("ru").unwrap();

        let json = serde_json::to_value(LocaleManifest::new(ru)).unwrap();

        assert_eq!(json["description"], ru.description.as_str());
        assert!(!ru.description.is_empty());
        assert_eq!(json["lang"], "ru-RU");
        assert_eq!(json["themeConfig"]["nav"][0]["link"], "/ru/guide/getting-started");
    }

    #[test]
    fn test_head_tags_include_analytics() {
        let settings = SiteSettings {
            image: Some("https://example.com/og.png".to_owned()),
            analytics_script: Some("/_vercel/insights/script.js".to_owned()),
            ..SiteSettings::default()
        };

        let tags = head_tags(&settings);

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].tag, "meta");
        assert_eq!(tags[1].tag, "script");
    }

    #[test]
    fn test_manifest_locales_and_links() {
        let settings = SiteSettings {
            hostname: Some("https://servactory.com".to_owned()),
            ..SiteSettings::default()
        };
        let model = NavigationModel::new(&settings).unwrap();

        let manifest = SiteManifest::build(&model, &settings);
        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["title"], "Servactory");
        assert_eq!(json["hostname"], "https://servactory.com");
        assert_eq!(json["locales"]["root"]["lang"], "en-US");
        assert_eq!(json["locales"]["root"]["link"], "/");
        assert_eq!(json["locales"]["ru"]["label"], "Русский");
        assert_eq!(json["locales"]["ru"]["link"], "/ru/");
        assert_eq!(
            json["socialLinks"][0]["link"],
            "https://github.com/servactory/servactory"
        );
        assert_eq!(
            json["locales"]["ru"]["themeConfig"]["nav"][0]["link"],
            "/ru/guide/getting-started"
        );
        assert!(json["locales"]["root"]["themeConfig"]["sidebar"]["/guide/"].is_object());
        assert_eq!(
            json["locales"]["root"]["themeConfig"]["outline"]["level"],
            serde_json::json!([2, 3])
        );
    }

    #[test]
    fn test_manifest_json_is_stable() {
        let settings = SiteSettings::default();
        let first = NavigationModel::new(&settings).unwrap();
        let second = NavigationModel::new(&settings).unwrap();

        let a = SiteManifest::build(&first, &settings).to_json(true).unwrap();
        let b = SiteManifest::build(&second, &settings).to_json(true).unwrap();

        assert_eq!(a, b);
    }
}
