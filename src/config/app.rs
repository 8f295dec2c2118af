//! # Application Configuration Loader
//!
//! Loads the application settings once at startup.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//!
//! Clock variables are documented in [`crate::config::clock`].
//!
//! # Example
//! ```rust,no_run
//! use birthday_clock::config::app::AppConfig;
//! use birthday_clock::greeting::{BirthdayGreeter, Person};
//!
//! let cfg = AppConfig::from_env().expect("invalid configuration");
//! let greeter = BirthdayGreeter::new(cfg.clock.build());
//!
//! let elvis = Person::from_ymd("Elvis", 1935, 1, 8).unwrap();
//! println!("{}", greeter.greet(&elvis));
//! ```

use std::env;

use anyhow::{Context, Result};

use crate::config::clock::ClockConfig;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Current environment name (`APP_ENV`).
    pub app_env: String,
    /// Clock configuration.
    pub clock: ClockConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses and validates the clock settings.
    ///
    /// # Errors
    /// Fails if a clock variable is present but invalid.
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let clock = ClockConfig::from_env().context("invalid clock configuration")?;

        Ok(AppConfig { app_env, clock })
    }

    /// Returns `true` when `APP_ENV` is `"production"`.
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
