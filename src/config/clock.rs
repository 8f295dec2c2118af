//! # Clock Configuration
//!
//! Reads the clock settings from the environment and builds the
//! [`Clock`] the application injects everywhere it needs "now".
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_TIMEZONE` | IANA zone used to project instants into dates | `"UTC"` |
//! | `CLOCK_FIXED_INSTANT` | RFC 3339 instant that freezes the clock | *none* (system clock) |
//! | `CLOCK_OFFSET_SECONDS` | Signed shift applied to the clock | *none* |
//!
//! Invalid values are rejected when the configuration is loaded; the
//! system clock is never used as a silent fallback.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use tracing::info;

use crate::config::env::{read_i64_from, read_var_from};
use crate::error::ValidationError;
use crate::time::local::{parse_instant, parse_timezone};
use crate::time::offset_clock::check_offset;
use crate::time::{Clock, FixedClock, OffsetClock, SystemClock};

/// Clock settings, already validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    /// Zone used to project instants into calendar dates.
    pub timezone: Tz,
    /// Freezes the clock at this instant when set.
    pub fixed_instant: Option<DateTime<Utc>>,
    /// Shifts every read by this amount when set.
    pub offset: Option<TimeDelta>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            fixed_instant: None,
            offset: None,
        }
    }
}

impl ClockConfig {
    /// Builds a [`ClockConfig`] from environment variables.
    ///
    /// # Errors
    /// Fails if any variable is present but invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_provider(|k| std::env::var(k).ok())
    }

    /// Builds a [`ClockConfig`] using a custom provider function.
    ///
    /// # Example
    /// ```rust
    /// use birthday_clock::config::clock::ClockConfig;
    /// use birthday_clock::time::Clock;
    ///
    /// let cfg = ClockConfig::from_provider(|k| match k {
    ///     "APP_TIMEZONE" => Some("Pacific/Honolulu".into()),
    ///     "CLOCK_FIXED_INSTANT" => Some("2025-01-09T09:00:00Z".into()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(cfg.build().today().to_string(), "2025-01-08");
    /// ```
    pub fn from_provider<F>(provider: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = match read_var_from(&provider, "APP_TIMEZONE") {
            Some(name) => parse_timezone(&name).context("APP_TIMEZONE")?,
            None => Tz::UTC,
        };

        let fixed_instant = read_var_from(&provider, "CLOCK_FIXED_INSTANT")
            .map(|s| parse_instant(&s))
            .transpose()
            .context("CLOCK_FIXED_INSTANT")?;

        let reference = fixed_instant.unwrap_or_else(Utc::now);
        let offset = read_i64_from(&provider, "CLOCK_OFFSET_SECONDS")?
            .map(|seconds| parse_offset(seconds, reference))
            .transpose()
            .context("CLOCK_OFFSET_SECONDS")?;

        Ok(Self {
            timezone,
            fixed_instant,
            offset,
        })
    }

    /// Builds the configured clock.
    ///
    /// This is the composition root for time: a [`SystemClock`] unless a
    /// fixed instant is configured, wrapped in an [`OffsetClock`] when an
    /// offset is set.
    pub fn build(&self) -> Arc<dyn Clock> {
        let base: Arc<dyn Clock> = match self.fixed_instant {
            Some(instant) => Arc::new(FixedClock::new(instant, self.timezone)),
            None => Arc::new(SystemClock::in_zone(self.timezone)),
        };

        info!(
            "clock init: zone={} fixed={} offset_seconds={}",
            self.timezone,
            self.fixed_instant
                .map(|i| i.to_rfc3339())
                .unwrap_or_else(|| "no".into()),
            self.offset.map(|o| o.num_seconds()).unwrap_or(0)
        );

        match self.offset {
            Some(offset) => Arc::new(OffsetClock::new(base, offset)),
            None => base,
        }
    }
}

/// Converts seconds into an offset that keeps `reference` inside the
/// representable range of [`DateTime`].
fn parse_offset(seconds: i64, reference: DateTime<Utc>) -> Result<TimeDelta, ValidationError> {
    let offset =
        TimeDelta::try_seconds(seconds).ok_or(ValidationError::InvalidOffset { seconds })?;
    check_offset(reference, offset)?;
    Ok(offset)
}
