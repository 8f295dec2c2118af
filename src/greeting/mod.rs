//! Birthday classification and greeting.

pub mod classifier;
pub mod greeter;
pub mod person;

pub use classifier::{classify, greet, is_birthday, Greeting};
pub use greeter::BirthdayGreeter;
pub use person::Person;
