//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with common conversions.
//! Each reader has a `*_from` variant that takes a provider function, so
//! parsing can be tested without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use birthday_clock::config::env::{read_i64, read_var};
//!
//! let tz = read_var("APP_TIMEZONE").unwrap_or_else(|| "UTC".into());
//! let offset = read_i64("CLOCK_OFFSET_SECONDS").expect("invalid offset");
//! ```

use anyhow::{Context, Result};

/// Reads a non-empty, trimmed string variable.
pub fn read_var(name: &str) -> Option<String> {
    read_var_from(|k| std::env::var(k).ok(), name)
}

/// Reads a non-empty string using a custom provider function.
///
/// Surrounding whitespace and one layer of quotes are stripped; an empty
/// result counts as unset.
///
/// # Example
/// ```rust
/// use birthday_clock::config::env::read_var_from;
///
/// assert_eq!(read_var_from(|_| Some(" 'UTC' ".into()), "TZ"), Some("UTC".into()));
/// assert_eq!(read_var_from(|_| Some("  ".into()), "TZ"), None);
/// ```
pub fn read_var_from<F>(provider: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| {
            v.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .trim()
                .to_string()
        })
        .filter(|s| !s.is_empty())
}

/// Reads a signed integer (`i64`) from an environment variable.
///
/// Returns `Ok(None)` if the variable is unset or empty.
///
/// # Errors
/// Fails if the variable is set but is not an integer; there is no silent
/// default.
pub fn read_i64(name: &str) -> Result<Option<i64>> {
    read_i64_from(|k| std::env::var(k).ok(), name)
}

/// Reads a signed integer using a custom provider function.
///
/// # Example
/// ```rust
/// use birthday_clock::config::env::read_i64_from;
///
/// assert_eq!(read_i64_from(|_| Some("-180".into()), "OFFSET").unwrap(), Some(-180));
/// assert!(read_i64_from(|_| Some("soon".into()), "OFFSET").is_err());
/// ```
pub fn read_i64_from<F>(provider: F, name: &str) -> Result<Option<i64>>
where
    F: Fn(&str) -> Option<String>,
{
    read_var_from(provider, name)
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("{name}: not an integer: {s}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_var_strips_quotes_and_whitespace() {
        for val in ["Europe/Berlin", " Europe/Berlin ", "\"Europe/Berlin\"", "'Europe/Berlin'"] {
            let got = read_var_from(|_| Some(val.into()), "X");
            assert_eq!(got.as_deref(), Some("Europe/Berlin"), "input {val:?}");
        }
    }

    #[test]
    fn test_read_var_empty_is_unset() {
        assert_eq!(read_var_from(|_| Some("".into()), "X"), None);
        assert_eq!(read_var_from(|_| Some("\"\"".into()), "X"), None);
        assert_eq!(read_var_from(|_| None, "X"), None);
    }

    #[test]
    fn test_read_i64_valid_numbers() {
        for (val, want) in [("180", 180), (" -3600 ", -3600), ("'42'", 42), ("\"0\"", 0)] {
            let got = read_i64_from(|_| Some(val.into()), "X").unwrap();
            assert_eq!(got, Some(want), "input {val:?}");
        }
    }

    #[test]
    fn test_read_i64_missing_or_empty_is_unset() {
        assert_eq!(read_i64_from(|_| None, "X").unwrap(), None);
        assert_eq!(read_i64_from(|_| Some("  ".into()), "X").unwrap(), None);
    }

    #[test]
    fn test_read_i64_invalid_is_an_error() {
        for val in ["three", "1.5", "99999999999999999999"] {
            let err = read_i64_from(|_| Some(val.into()), "LIMIT").unwrap_err();
            assert!(err.to_string().contains("LIMIT"), "input {val:?}");
        }
    }

    #[test]
    fn test_read_i64_uses_process_env() {
        temp_env::with_var("BIRTHDAY_CLOCK_TEST_I64", Some("-7"), || {
            assert_eq!(read_i64("BIRTHDAY_CLOCK_TEST_I64").unwrap(), Some(-7));
        });
    }

    #[test]
    fn test_read_var_uses_process_env() {
        temp_env::with_var("BIRTHDAY_CLOCK_TEST_VAR", Some("value"), || {
            assert_eq!(read_var("BIRTHDAY_CLOCK_TEST_VAR").as_deref(), Some("value"));
        });
    }
}
