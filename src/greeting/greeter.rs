use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::classifier::{classify, Greeting};
use super::person::Person;
use crate::time::Clock;

/// Greets people using an injected [`Clock`].
///
/// ## Responsibilities
///
/// - Resolves "today" from the clock **once per call**, at the boundary
/// - Hands that date to the pure [`classify`] function
///
/// ## What this type does *not* do
///
/// - Construct its own clock or call `Utc::now()`
/// - Decide which time zone applies (the clock carries it)
///
/// Production code injects a [`SystemClock`](crate::time::SystemClock);
/// tests inject a [`FixedClock`](crate::time::FixedClock).
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use birthday_clock::greeting::{BirthdayGreeter, Person};
/// use birthday_clock::time::FixedClock;
///
/// let clock = FixedClock::parse("2025-01-08T09:00:00Z", "Europe/Berlin").unwrap();
/// let greeter = BirthdayGreeter::new(Arc::new(clock));
///
/// let elvis = Person::from_ymd("Elvis", 1935, 1, 8).unwrap();
/// assert_eq!(greeter.greet(&elvis), "Happy Birthday, Elvis!");
/// ```
#[derive(Clone)]
pub struct BirthdayGreeter {
    clock: Arc<dyn Clock>,
}

impl BirthdayGreeter {
    /// Creates a greeter that reads "today" from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The reference date, read from the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Classifies `person` against today's date.
    pub fn classify(&self, person: &Person) -> Greeting {
        let today = self.today();
        let greeting = classify(person, today);
        debug!(
            name = person.name(),
            birthday = %person.birthday(),
            %today,
            zone = %self.clock.zone(),
            is_birthday = greeting.is_birthday(),
            "classified birthday"
        );
        greeting
    }

    /// Greets `person` on today's date.
    pub fn greet(&self, person: &Person) -> String {
        self.classify(person).to_string()
    }
}
