use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::ValidationError;
use crate::time::clock::Clock;
use crate::time::local::parse_timezone;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` reports the operating system's current time projected into
/// a configured IANA timezone. It is the production default and the only
/// clock whose reads are not reproducible.
///
/// # Default Zone
/// [`SystemClock::utc`] and [`Default`] report in **UTC**. `chrono_tz::Tz`
/// has no variant for the host's local zone, so a deployment that wants
/// local dates names its zone explicitly (e.g. via `APP_TIMEZONE`).
///
/// # Design Notes
/// - The timezone is parsed once, at construction time.
/// - An invalid timezone is a **configuration error** and is reported by
///   [`SystemClock::new`]; it never surfaces on a read.
///
/// # Responsibility
/// - Selecting the timezone is the responsibility of the **composition root**
///   (see [`ClockConfig`](crate::config::clock::ClockConfig)).
/// - Application and domain logic should treat `Clock` as a trusted source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a new [`SystemClock`] for the given IANA timezone name.
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownTimeZone`] if the name is not a
    /// known IANA identifier.
    ///
    /// # Example
    /// ```
    /// use birthday_clock::time::{Clock, SystemClock};
    ///
    /// let clock = SystemClock::new("Europe/Berlin").unwrap();
    /// println!("Berlin today = {}", clock.today());
    /// assert!(SystemClock::new("Invalid/Timezone").is_err());
    /// ```
    pub fn new(tz_name: &str) -> Result<Self, ValidationError> {
        Ok(Self::in_zone(parse_timezone(tz_name)?))
    }

    /// Creates a [`SystemClock`] for an already-parsed timezone.
    pub fn in_zone(tz: Tz) -> Self {
        Self { tz }
    }

    /// The default system clock, reporting in UTC.
    ///
    /// UTC stands in for "local" because the host zone is not expressible
    /// as a [`Tz`].
    pub fn utc() -> Self {
        Self::in_zone(Tz::UTC)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    fn zone(&self) -> Tz {
        self.tz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn system_clock_returns_a_date_for_valid_timezone() {
        let clock = SystemClock::new("Asia/Tokyo").unwrap();

        let today = clock.today();

        assert!(today.year() >= 2000);
        assert!((1..=12).contains(&today.month()));
        assert!((1..=31).contains(&today.day()));
    }

    #[test]
    fn system_clock_rejects_invalid_timezone_at_construction() {
        let err = SystemClock::new("Invalid/Timezone").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownTimeZone { .. }));
    }

    #[test]
    fn system_clock_reads_are_non_decreasing() {
        let clock = SystemClock::utc();
        let before = Utc::now();
        let first = clock.now();
        let second = clock.now();
        let after = Utc::now();

        assert!(before <= first);
        assert!(first <= second);
        assert!(second <= after);
    }

    #[test]
    fn system_clock_reports_its_zone() {
        let clock = SystemClock::new("Pacific/Honolulu").unwrap();
        assert_eq!(clock.zone(), chrono_tz::Pacific::Honolulu);
        assert_eq!(clock.now().timezone(), chrono_tz::Pacific::Honolulu);
    }

    #[test]
    fn default_is_utc() {
        assert_eq!(SystemClock::default().zone(), Tz::UTC);
        assert_eq!(SystemClock::default(), SystemClock::utc());
        assert_eq!(SystemClock::utc().now().timezone(), Tz::UTC);
    }
}
