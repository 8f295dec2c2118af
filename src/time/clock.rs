use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

/// A port that provides the **current instant** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Application and domain logic do **not** call `Utc::now()` directly
/// - Implementations can be swapped (system clock, fixed clock, offset clock)
/// - Tests can be deterministic and independent of the wall clock
///
/// # Design Notes
/// - Every implementation carries a time zone; the calendar date of "now"
///   is the instant projected into that zone.
/// - This trait represents an **external capability**, similar to a
///   Repository or Mailer, and is injected from the composition root.
/// - Reads never mutate the clock, so one instance may be shared freely.
///
/// # Implementations
/// - [`SystemClock`](crate::time::SystemClock): OS clock in a configured zone
/// - [`FixedClock`](crate::time::FixedClock): one frozen instant
/// - [`OffsetClock`](crate::time::OffsetClock): another clock shifted by a fixed duration
pub trait Clock: Send + Sync {
    /// Returns the current instant in this clock's time zone.
    fn now(&self) -> DateTime<Tz>;

    /// The time zone used to project instants into calendar dates.
    fn zone(&self) -> Tz {
        self.now().timezone()
    }

    /// Returns today's date in this clock's time zone.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the current instant projected into `tz` instead of the
    /// clock's own zone.
    fn now_in(&self, tz: Tz) -> DateTime<Tz> {
        self.now().with_timezone(&tz)
    }

    /// Returns today's date as seen from `tz`.
    fn today_in(&self, tz: Tz) -> NaiveDate {
        self.now_in(tz).date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Tz> {
        (**self).now()
    }

    fn zone(&self) -> Tz {
        (**self).zone()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Tz> {
        (**self).now()
    }

    fn zone(&self) -> Tz {
        (**self).zone()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Tz> {
        (**self).now()
    }

    fn zone(&self) -> Tz {
        (**self).zone()
    }
}
