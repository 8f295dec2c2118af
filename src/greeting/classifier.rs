//! Pure birthday classification.
//!
//! Nothing in this module reads a clock. "Today" is always handed in by the
//! caller, typically resolved once from an injected
//! [`Clock`](crate::time::Clock) by [`BirthdayGreeter`](super::BirthdayGreeter).

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::person::Person;

/// The outcome of classifying a person against a reference date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Greeting {
    /// Today is the person's birthday.
    Birthday { name: String },
    /// Any other day.
    Plain { name: String },
}

impl Greeting {
    /// Returns `true` for [`Greeting::Birthday`].
    pub fn is_birthday(&self) -> bool {
        matches!(self, Greeting::Birthday { .. })
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greeting::Birthday { name } => write!(f, "Happy Birthday, {name}!"),
            Greeting::Plain { name } => write!(f, "Hello, {name}!"),
        }
    }
}

/// Returns `true` if `today` is the anniversary of `birthday`.
///
/// Month and day-of-month are compared; the year is ignored. A 29 February
/// birthday is observed on 1 March in years without a 29 February.
///
/// # Example
/// ```
/// use birthday_clock::chrono::NaiveDate;
/// use birthday_clock::greeting::is_birthday;
///
/// let born = NaiveDate::from_ymd_opt(1984, 2, 29).unwrap();
/// assert!(is_birthday(born, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// assert!(is_birthday(born, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
/// assert!(!is_birthday(born, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// ```
pub fn is_birthday(birthday: NaiveDate, today: NaiveDate) -> bool {
    let anniversary = NaiveDate::from_ymd_opt(today.year(), birthday.month(), birthday.day());
    let (month, day) = match anniversary {
        Some(date) => (date.month(), date.day()),
        // only 29 Feb lacks an anniversary; it rolls over to 1 Mar
        None => (3, 1),
    };
    today.month() == month && today.day() == day
}

/// Classifies `person` against the reference date `today`.
pub fn classify(person: &Person, today: NaiveDate) -> Greeting {
    let name = person.name().to_string();
    if is_birthday(person.birthday(), today) {
        Greeting::Birthday { name }
    } else {
        Greeting::Plain { name }
    }
}

/// Greets `person` on `today`.
///
/// Returns `"Happy Birthday, <name>!"` when `today` is the person's
/// birthday and `"Hello, <name>!"` otherwise.
///
/// # Example
/// ```
/// use birthday_clock::chrono::NaiveDate;
/// use birthday_clock::greeting::{greet, Person};
///
/// let elvis = Person::from_ymd("Elvis", 1935, 1, 8).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
/// assert_eq!(greet(&elvis, today), "Happy Birthday, Elvis!");
/// ```
pub fn greet(person: &Person, today: NaiveDate) -> String {
    classify(person, today).to_string()
}
