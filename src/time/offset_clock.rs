use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::error::ValidationError;
use crate::time::clock::Clock;

/// A [`Clock`] that reports another clock's instant shifted by a fixed
/// duration.
///
/// The shift may be negative. The base clock's zone is kept unless
/// [`OffsetClock::with_zone`] overrides it. Wrapping a
/// [`FixedClock`](crate::time::FixedClock) yields a clock that is just as
/// deterministic; wrapping a [`SystemClock`](crate::time::SystemClock) runs
/// the real clock ahead of or behind wall time.
///
/// Reads never fail. [`OffsetClock::try_new`] and [`OffsetClock::from_seconds`]
/// reject a shift that leaves the representable range of [`DateTime`] for
/// the base clock's current reading. A shift that only overflows later (a
/// system clock drifting towards the limit, or one built through
/// [`OffsetClock::new`]) saturates at the range boundary instead of panicking.
///
/// # Example
/// ```
/// use birthday_clock::chrono::TimeDelta;
/// use birthday_clock::time::{Clock, FixedClock, OffsetClock};
///
/// let base = FixedClock::parse("2025-01-08T22:58:00Z", "Europe/Berlin").unwrap();
/// let ahead = OffsetClock::new(base, TimeDelta::minutes(3));
///
/// assert_eq!(base.today().to_string(), "2025-01-08");
/// assert_eq!(ahead.today().to_string(), "2025-01-09");
/// ```
#[derive(Clone, Debug)]
pub struct OffsetClock<C> {
    base: C,
    offset: TimeDelta,
    tz: Option<Tz>,
}

impl<C: Clock> OffsetClock<C> {
    /// Wraps `base`, shifting every read by `offset`.
    pub fn new(base: C, offset: TimeDelta) -> Self {
        Self {
            base,
            offset,
            tz: None,
        }
    }

    /// Wraps `base`, shifting every read by `offset`, after checking that
    /// the base clock's current reading can be shifted that far.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidOffset`] if the shifted reading is
    /// outside the range of [`DateTime`].
    pub fn try_new(base: C, offset: TimeDelta) -> Result<Self, ValidationError> {
        check_offset(base.now().with_timezone(&Utc), offset)?;
        Ok(Self::new(base, offset))
    }

    /// Wraps `base`, shifting every read by a signed number of seconds.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidOffset`] if `seconds` does not fit
    /// in a [`TimeDelta`] or moves the base reading out of range.
    pub fn from_seconds(base: C, seconds: i64) -> Result<Self, ValidationError> {
        let offset =
            TimeDelta::try_seconds(seconds).ok_or(ValidationError::InvalidOffset { seconds })?;
        Self::try_new(base, offset)
    }

    /// Projects reads into `tz` instead of the base clock's zone.
    pub fn with_zone(mut self, tz: Tz) -> Self {
        self.tz = Some(tz);
        self
    }

    /// The configured shift.
    pub fn offset(&self) -> TimeDelta {
        self.offset
    }

    /// The wrapped clock.
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn now(&self) -> DateTime<Tz> {
        let base = self.base.now();
        let shifted = base
            .checked_add_signed(self.offset)
            .unwrap_or_else(|| saturated(self.offset).with_timezone(&base.timezone()));
        match self.tz {
            Some(tz) => shifted.with_timezone(&tz),
            None => shifted,
        }
    }

    fn zone(&self) -> Tz {
        self.tz.unwrap_or_else(|| self.base.zone())
    }
}

/// Checks that `reference + offset` is a representable instant.
///
/// # Errors
/// Returns [`ValidationError::InvalidOffset`] otherwise.
pub fn check_offset(reference: DateTime<Utc>, offset: TimeDelta) -> Result<(), ValidationError> {
    match reference.checked_add_signed(offset) {
        Some(_) => Ok(()),
        None => Err(ValidationError::InvalidOffset {
            seconds: offset.num_seconds(),
        }),
    }
}

// one day inside the range so any zone projection stays representable
fn saturated(offset: TimeDelta) -> DateTime<Utc> {
    if offset < TimeDelta::zero() {
        DateTime::<Utc>::MIN_UTC + TimeDelta::days(1)
    } else {
        DateTime::<Utc>::MAX_UTC - TimeDelta::days(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use chrono_tz::{Europe::Berlin, Pacific::Honolulu};

    use crate::time::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base() -> FixedClock {
        FixedClock::parse("2025-01-08T09:00:00Z", "Europe/Berlin").unwrap()
    }

    #[test]
    fn offset_shifts_the_base_instant() {
        let clock = OffsetClock::new(base(), TimeDelta::minutes(3));

        assert_eq!(clock.now(), base().now() + TimeDelta::minutes(3));
        assert_eq!(clock.today(), base().today());
    }

    #[test]
    fn offset_keeps_the_base_zone() {
        let clock = OffsetClock::new(base(), TimeDelta::minutes(3));

        assert_eq!(clock.zone(), Berlin);
        assert_eq!(clock.now().timezone(), Berlin);
    }

    #[test]
    fn negative_offset_crosses_midnight_backwards() {
        // 10:00 in Berlin; eleven hours earlier is 23:00 the previous day
        let clock = OffsetClock::new(base(), TimeDelta::hours(-11));

        assert_eq!(clock.today(), date(2025, 1, 7));
        assert_eq!(clock.now(), base().now() - TimeDelta::hours(11));
    }

    #[test]
    fn positive_offset_crosses_midnight_forwards() {
        let late = FixedClock::parse("2025-01-08T22:58:00Z", "Europe/Berlin").unwrap();
        let clock = OffsetClock::new(late, TimeDelta::minutes(3));

        assert_eq!(late.today(), date(2025, 1, 8));
        assert_eq!(clock.today(), date(2025, 1, 9));
    }

    #[test]
    fn zone_override_changes_the_projected_date_only() {
        let clock = OffsetClock::new(base(), TimeDelta::zero()).with_zone(Honolulu);

        assert_eq!(clock.zone(), Honolulu);
        assert_eq!(clock.now(), base().now());
        assert_eq!(clock.today(), date(2025, 1, 7));
    }

    #[test]
    fn offsets_compose() {
        let inner = OffsetClock::new(base(), TimeDelta::hours(1));
        let outer = OffsetClock::new(inner, TimeDelta::hours(-3));

        assert_eq!(outer.now(), base().now() - TimeDelta::hours(2));
        assert_eq!(outer.base().offset(), TimeDelta::hours(1));
    }

    #[test]
    fn repeated_reads_apply_the_same_shift() {
        let clock = OffsetClock::new(base(), TimeDelta::days(-1));
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn wraps_a_shared_trait_object() {
        let shared: Arc<dyn Clock> = Arc::new(base());
        let clock = OffsetClock::new(shared, TimeDelta::days(1));

        assert_eq!(clock.today(), date(2025, 1, 9));
    }

    #[test]
    fn from_seconds_accepts_signed_values() {
        let clock = OffsetClock::from_seconds(base(), -90).unwrap();
        assert_eq!(clock.offset(), TimeDelta::seconds(-90));
    }

    #[test]
    fn from_seconds_rejects_offsets_beyond_the_datetime_range() {
        // fits in a TimeDelta, but not in a DateTime
        let err = OffsetClock::from_seconds(base(), 10_000_000_000_000).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidOffset { seconds } if seconds == 10_000_000_000_000)
        );

        let err = OffsetClock::from_seconds(base(), -10_000_000_000_000).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOffset { .. }));
    }

    #[test]
    fn try_new_accepts_offsets_within_range() {
        let far = TimeDelta::days(365 * 1000);
        let clock = OffsetClock::try_new(base(), far).unwrap();
        assert_eq!(clock.now(), base().now() + far);
    }

    #[test]
    fn unchecked_overflow_saturates_instead_of_panicking() {
        let huge = TimeDelta::try_seconds(10_000_000_000_000).unwrap();

        let ahead = OffsetClock::new(base(), huge);
        assert_eq!(ahead.now(), DateTime::<Utc>::MAX_UTC - TimeDelta::days(1));
        assert_eq!(ahead.zone(), Berlin);
        let _ = ahead.today();

        let behind = OffsetClock::new(base(), -huge).with_zone(Honolulu);
        assert_eq!(behind.now(), DateTime::<Utc>::MIN_UTC + TimeDelta::days(1));
        let _ = behind.today();
    }

    #[test]
    fn check_offset_uses_the_reference_instant() {
        assert!(check_offset(DateTime::<Utc>::MAX_UTC, TimeDelta::zero()).is_ok());
        assert!(check_offset(DateTime::<Utc>::MAX_UTC, TimeDelta::seconds(1)).is_err());
        assert!(check_offset(DateTime::<Utc>::MIN_UTC, TimeDelta::seconds(-1)).is_err());
    }

    #[test]
    fn from_seconds_rejects_out_of_range() {
        let err = OffsetClock::from_seconds(base(), i64::MAX).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOffset { seconds } if seconds == i64::MAX));
    }
}
