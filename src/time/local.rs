//! Time zone and instant helpers based on `chrono` and `chrono-tz`.
//!
//! # Provided Functions
//! - [`parse_timezone`]: Parses an IANA time zone name into a [`Tz`].
//! - [`parse_instant`]: Parses an RFC 3339 instant into a UTC [`DateTime`].
//! - [`now_in_local`]: Returns the current wall-clock time in the given zone.
//! - [`today_in_local`]: Returns the current date in the given zone.
//!
//! # Timezone Format
//! - Timezone names must follow the **IANA format**, e.g. `"Europe/Berlin"`
//!   or `"Pacific/Honolulu"`.
//! - An unknown name yields [`ValidationError::UnknownTimeZone`].

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::ValidationError;

/// Parses an IANA time zone identifier.
///
/// ## Example
/// ```
/// use birthday_clock::time::local::parse_timezone;
///
/// let tz = parse_timezone("Europe/Berlin").unwrap();
/// assert_eq!(tz, birthday_clock::chrono_tz::Europe::Berlin);
/// assert!(parse_timezone("Europe/Atlantis").is_err());
/// ```
pub fn parse_timezone(tz_name: &str) -> Result<Tz, ValidationError> {
    Tz::from_str(tz_name.trim()).map_err(|_| ValidationError::UnknownTimeZone {
        name: tz_name.to_string(),
    })
}

/// Parses an ISO-8601 extended instant that carries a UTC offset
/// (`Z` or `±hh:mm`) and normalizes it to UTC.
///
/// ## Example
/// ```
/// use birthday_clock::time::local::parse_instant;
///
/// let instant = parse_instant("2025-01-08T10:00:00+01:00").unwrap();
/// assert_eq!(instant.to_rfc3339(), "2025-01-08T09:00:00+00:00");
/// ```
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ValidationError::InvalidInstant {
            input: input.to_string(),
            source,
        })
}

/// Returns the **current local time** in the specified timezone.
///
/// This reads the OS clock and is therefore not reproducible. Prefer a
/// [`Clock`](crate::time::Clock) anywhere the result feeds tested logic.
pub fn now_in_local(tz_name: &str) -> Result<DateTime<Tz>, ValidationError> {
    let tz = parse_timezone(tz_name)?;
    Ok(Utc::now().with_timezone(&tz))
}

/// Returns **today's date** in the specified IANA timezone.
///
/// ## Example
/// ```
/// use birthday_clock::time::local::today_in_local;
/// let date = today_in_local("Europe/Berlin").unwrap();
/// println!("Berlin today = {}", date);
/// ```
pub fn today_in_local(tz_name: &str) -> Result<NaiveDate, ValidationError> {
    Ok(now_in_local(tz_name)?.date_naive())
}
