//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the value unchanged if it has no `${` sequence. Bare `$VAR` is
/// left as is.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SVDOCS_TEST_HOST", "servactory.com");
        }
        let result = expand_env("https://${SVDOCS_TEST_HOST}", "site.hostname").unwrap();
        assert_eq!(result, "https://servactory.com");
        unsafe {
            std::env::remove_var("SVDOCS_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SVDOCS_UNSET_TEST");
        }
        let result = expand_env("${SVDOCS_UNSET_TEST:-Servactory}", "site.title").unwrap();
        assert_eq!(result, "Servactory");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SVDOCS_MISSING_TEST");
        }
        let err = expand_env("${SVDOCS_MISSING_TEST}", "analytics.script_src").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("SVDOCS_MISSING_TEST"));
        assert!(err.to_string().contains("analytics.script_src"));
    }

    #[test]
    fn test_literal_unchanged() {
        let result = expand_env("/_vercel/insights/script.js", "analytics.script_src").unwrap();
        assert_eq!(result, "/_vercel/insights/script.js");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("https://example.com/$path", "site.hostname").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }
}
