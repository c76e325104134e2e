//! Supported documentation locales.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::NavError;

/// A statically known documentation locale.
///
/// The default locale is served from the site root; every other locale lives
/// under its own path prefix (e.g. `/ru`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default, site root).
    En,
    /// Russian, served under `/ru`.
    Ru,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 2] = [Self::En, Self::Ru];

    /// The locale served from the site root.
    pub const DEFAULT: Self = Self::En;

    /// Short locale code (`en`, `ru`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// BCP 47 language tag for the `<html lang>` attribute.
    #[must_use]
    pub fn lang(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Ru => "ru-RU",
        }
    }

    /// Name shown in the language switcher.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
        }
    }

    /// Path prefix prepended to every site-relative link (empty for the default locale).
    #[must_use]
    pub fn path_prefix(self) -> &'static str {
        match self {
            Self::En => "",
            Self::Ru => "/ru",
        }
    }

    /// Home link of the locale.
    #[must_use]
    pub fn link(self) -> String {
        format!("{}/", self.path_prefix())
    }

    /// Key under which the site generator expects this locale (`root` for the default).
    #[must_use]
    pub fn manifest_key(self) -> &'static str {
        if self == Self::DEFAULT {
            "root"
        } else {
            self.code()
        }
    }

    /// Prefix a locale-neutral site path (`/guide/...`) with this locale's prefix.
    #[must_use]
    pub fn localize_path(self, path: &str) -> String {
        format!("{}{path}", self.path_prefix())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NavError::UnknownLocale(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_locales() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ru".parse::<Locale>().unwrap(), Locale::Ru);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!(" En ".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn test_parse_unknown_locale() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, NavError::UnknownLocale(code) if code == "fr"));
    }

    #[test]
    fn test_localize_path() {
        assert_eq!(
            Locale::En.localize_path("/guide/attributes/input"),
            "/guide/attributes/input"
        );
        assert_eq!(
            Locale::Ru.localize_path("/guide/attributes/input"),
            "/ru/guide/attributes/input"
        );
    }

    #[test]
    fn test_manifest_key_and_link() {
        assert_eq!(Locale::En.manifest_key(), "root");
        assert_eq!(Locale::Ru.manifest_key(), "ru");
        assert_eq!(Locale::En.link(), "/");
        assert_eq!(Locale::Ru.link(), "/ru/");
    }
}
