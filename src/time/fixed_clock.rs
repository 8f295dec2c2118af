use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::ValidationError;
use crate::time::clock::Clock;
use crate::time::local::{parse_instant, parse_timezone};

/// A [`Clock`] frozen at one instant.
///
/// Every read returns the same instant projected into the same zone, so
/// logic driven by a `FixedClock` is fully reproducible. This is the clock
/// tests inject in place of [`SystemClock`](crate::time::SystemClock).
///
/// # Example
/// ```
/// use birthday_clock::time::{Clock, FixedClock};
///
/// let clock = FixedClock::parse("2025-01-09T09:00:00Z", "Pacific/Honolulu").unwrap();
/// assert_eq!(clock.today().to_string(), "2025-01-08");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    tz: Tz,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`, projected into `tz`.
    pub fn new(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self { instant, tz }
    }

    /// Creates a clock from an ISO-8601 instant with offset
    /// (e.g. `"2025-01-08T09:00:00Z"`) and an IANA zone name.
    ///
    /// # Errors
    /// - [`ValidationError::InvalidInstant`] if the instant is malformed
    /// - [`ValidationError::UnknownTimeZone`] if the zone is unknown
    pub fn parse(instant: &str, tz_name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(parse_instant(instant)?, parse_timezone(tz_name)?))
    }

    /// The frozen instant, in UTC.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.instant.with_timezone(&self.tz)
    }

    fn zone(&self) -> Tz {
        self.tz
    }
}
