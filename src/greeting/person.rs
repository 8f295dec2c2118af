use chrono::NaiveDate;

use crate::error::ValidationError;

/// A person to greet: a display name and a date of birth.
///
/// Immutable once built. Only the month and day of [`Person::birthday`]
/// take part in classification; the year is kept for completeness.
///
/// # Example
/// ```
/// use birthday_clock::greeting::Person;
///
/// let elvis = Person::from_ymd("Elvis", 1935, 1, 8).unwrap();
/// assert_eq!(elvis.name(), "Elvis");
/// assert_eq!(elvis.birthday().to_string(), "1935-01-08");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    birthday: NaiveDate,
}

impl Person {
    /// Creates a person from a name and an already-valid birth date.
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthday,
        }
    }

    /// Builds a person from a (year, month, day) birth date.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidBirthDate`] if the triple is not a
    /// calendar date (e.g. `1985-02-29`).
    pub fn from_ymd(
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Self, ValidationError> {
        let birthday = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ValidationError::InvalidBirthDate { year, month, day })?;
        Ok(Self::new(name, birthday))
    }

    /// The display name used in greetings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The date of birth, including the year.
    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }
}
