use thiserror::Error;

/// Input-validation failure raised while constructing a clock or a person.
///
/// These errors only ever occur at construction time. Reading a clock or
/// classifying a birthday cannot fail once the values exist.
///
/// # Example
/// ```
/// use birthday_clock::error::ValidationError;
/// use birthday_clock::time::FixedClock;
///
/// let err = FixedClock::parse("2025-01-08T09:00:00Z", "Mars/Olympus").unwrap_err();
/// assert!(matches!(err, ValidationError::UnknownTimeZone { .. }));
/// assert_eq!(err.to_string(), "unknown time zone: Mars/Olympus");
/// ```
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The instant string is not a valid RFC 3339 timestamp with an offset.
    #[error("invalid instant: {input}")]
    InvalidInstant {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The name is not a known IANA time zone identifier.
    #[error("unknown time zone: {name}")]
    UnknownTimeZone { name: String },

    /// The (year, month, day) triple is not a calendar date.
    #[error("invalid birth date: {year:04}-{month:02}-{day:02}")]
    InvalidBirthDate { year: i32, month: u32, day: u32 },

    /// The offset does not fit in a `TimeDelta`.
    #[error("clock offset out of range: {seconds}s")]
    InvalidOffset { seconds: i64 },
}
