//! Navigation model errors.
//!
//! Every variant is a build-time configuration failure. None of them are
//! recoverable: the site must not be published until they are fixed.

/// Error produced while building or validating the navigation model.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Requested locale is not one of the supported locales.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Sidebar prefix is equal to, or nested inside, an already registered prefix.
    #[error("[{locale}] sidebar prefix {prefix} is ambiguous with {existing}")]
    AmbiguousSidebarPrefix {
        /// Locale code.
        locale: String,
        /// Prefix being registered.
        prefix: String,
        /// Previously registered prefix it collides with.
        existing: String,
    },

    /// Declared link target has no corresponding documentation page.
    #[error("[{locale}] {origin}: link target {target} does not match any page")]
    DanglingLinkTarget {
        /// Locale code.
        locale: String,
        /// Where the target was declared (e.g., `nav`, `sidebar /guide/`).
        origin: String,
        /// The offending target.
        target: String,
    },

    /// Target is neither an absolute URL nor a site path starting with `/`.
    #[error("[{locale}] invalid link target {target:?}: expected http(s) URL or path starting with /")]
    InvalidTarget {
        /// Locale code.
        locale: String,
        /// The offending target.
        target: String,
    },

    /// Translation table has no label for a node identifier.
    #[error("[{locale}] missing translation for {key}")]
    MissingTranslation {
        /// Locale code.
        locale: String,
        /// Node identifier without a label.
        key: String,
    },

    /// Embedded translation table is not valid YAML or has the wrong shape.
    #[error("[{locale}] invalid translation table: {source}")]
    Translations {
        /// Locale code.
        locale: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// All validation errors collected across every locale.
///
/// Unlike model construction, which stops at the first structural error,
/// a report keeps going so one run surfaces every broken entry.
#[derive(Debug, Default, thiserror::Error)]
#[error("navigation validation failed with {} error(s)", .errors.len())]
pub struct ValidationReport {
    errors: Vec<NavError>,
}

impl ValidationReport {
    /// Record an error.
    pub(crate) fn push(&mut self, error: NavError) {
        self.errors.push(error);
    }

    /// Record several errors.
    pub(crate) fn extend(&mut self, errors: impl IntoIterator<Item = NavError>) {
        self.errors.extend(errors);
    }

    /// Collected errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[NavError] {
        &self.errors
    }

    /// True when nothing was reported.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a `Result`, failing when any error was reported.
    ///
    /// # Errors
    ///
    /// Returns the report itself if it contains at least one error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_ok() { Ok(()) } else { Err(self) }
    }
}
