//! Per-locale translation tables.
//!
//! Tables are YAML documents embedded at compile time from `locales/`.
//! Labels are keyed by the stable node identifiers declared in the
//! navigation shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Locale, NavError};

const EN_YAML: &str = include_str!("../locales/en.yaml");
const RU_YAML: &str = include_str!("../locales/ru.yaml");

/// Strings for the bundled local-search UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), deny_unknown_fields)]
pub struct SearchTranslations {
    pub button_text: String,
    pub button_aria_label: String,
    pub placeholder: String,
    pub reset_button_title: String,
    pub back_button_title: String,
    pub no_results_text: String,
    pub footer: SearchFooter,
}

/// Keyboard hints shown in the search modal footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), deny_unknown_fields)]
pub struct SearchFooter {
    pub select_text: String,
    pub navigate_text: String,
    pub close_text: String,
}

/// Theme chrome strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), deny_unknown_fields)]
pub struct UiStrings {
    /// Doc footer link to the previous page.
    pub doc_footer_prev: String,
    /// Doc footer link to the next page.
    pub doc_footer_next: String,
    pub last_updated_text: String,
    pub return_to_top_label: String,
    pub sidebar_menu_label: String,
    pub dark_mode_switch_label: String,
    pub lang_menu_label: String,
    /// Text of the "edit this page" link.
    pub edit_link_text: String,
}

/// A locale's translation table.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Translations {
    pub description: String,
    pub outline_label: String,
    pub search: SearchTranslations,
    pub ui: UiStrings,
    labels: BTreeMap<String, String>,
}

impl Translations {
    /// Load the embedded table for a locale.
    pub(crate) fn load(locale: Locale) -> Result<Self, NavError> {
        let content = match locale {
            Locale::En => EN_YAML,
            Locale::Ru => RU_YAML,
        };
        Self::parse(locale, content)
    }

    /// Parse a table from YAML content.
    pub(crate) fn parse(locale: Locale, content: &str) -> Result<Self, NavError> {
        serde_yaml::from_str(content).map_err(|source| NavError::Translations {
            locale: locale.code().to_owned(),
            source,
        })
    }

    /// Label for a node identifier.
    pub(crate) fn label(&self, locale: Locale, key: &str) -> Result<&str, NavError> {
        self.labels
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| NavError::MissingTranslation {
                locale: locale.code().to_owned(),
                key: key.to_owned(),
            })
    }

    /// Keys present in the table but never looked up by `used`.
    pub(crate) fn unused_keys<'a>(&'a self, used: &[&str]) -> Vec<&'a str> {
        self.labels
            .keys()
            .map(String::as_str)
            .filter(|key| !used.contains(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::site_shape;

    #[test]
    fn test_embedded_tables_parse() {
        for locale in Locale::ALL {
            Translations::load(locale).unwrap();
        }
    }

    #[test]
    fn test_tables_cover_every_node() {
        let ids = site_shape().ids();
        for locale in Locale::ALL {
            let table = Translations::load(locale).unwrap();
            for id in &ids {
                assert!(
                    table.label(locale, id).is_ok(),
                    "{locale} has no label for {id}"
                );
            }
        }
    }

    #[test]
    fn test_tables_have_no_stale_keys() {
        let ids = site_shape().ids();
        for locale in Locale::ALL {
            let table = Translations::load(locale).unwrap();
            assert!(table.unused_keys(&ids).is_empty(), "{locale}");
        }
    }

    #[test]
    fn test_russian_input_label() {
        let table = Translations::load(Locale::Ru).unwrap();
        assert_eq!(
            table.label(Locale::Ru, "guide.attributes.input").unwrap(),
            "Входящие"
        );
    }

    #[test]
    fn test_missing_label_error() {
        let table = Translations::load(Locale::En).unwrap();
        let err = table.label(Locale::En, "guide.nope").unwrap_err();
        assert!(matches!(
            err,
            NavError::MissingTranslation { ref key, .. } if key == "guide.nope"
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let yaml = format!("{EN_YAML}\nextra: true\n");
        let err = Translations::parse(Locale::En, &yaml).unwrap_err();
        assert!(matches!(err, NavError::Translations { .. }));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let err = Translations::parse(Locale::Ru, "labels: [unclosed").unwrap_err();
        assert!(err.to_string().starts_with("[ru] invalid translation table"));
    }
}
