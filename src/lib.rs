//! # birthday_clock
//!
//! Deterministic, testable date logic through an injectable clock.
//!
//! Business logic never calls `Utc::now()` itself. It receives a
//! [`time::Clock`] from the composition root, or better, receives the
//! already-resolved date as a plain value:
//!
//! - [`time`]: the `Clock` port with system, fixed and offset implementations
//! - [`greeting`]: the pure birthday classifier and a thin greeter around it
//! - [`config`]: environment-driven selection of the production clock
//! - [`error`]: construction-time validation errors
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use birthday_clock::greeting::{BirthdayGreeter, Person};
//! use birthday_clock::time::FixedClock;
//!
//! let clock = FixedClock::parse("2025-03-01T09:00:00Z", "Europe/Berlin").unwrap();
//! let greeter = BirthdayGreeter::new(Arc::new(clock));
//!
//! let mark = Person::from_ymd("Mark Foster", 1984, 2, 29).unwrap();
//! assert_eq!(greeter.greet(&mark), "Happy Birthday, Mark Foster!");
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use chrono_tz;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod greeting;
pub mod time;
