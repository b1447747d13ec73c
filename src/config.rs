//! Configuration management for the contact book.
//!
//! Settings come from environment variables. A `.env` file is loaded first
//! if present; `dotenvy` does not print to stdout, which is the UI.

use crate::error::{ConfigError, ConfigResult};
use crate::ui::{CardLayout, View};
use std::env;
use std::ops::RangeInclusive;

const CARD_WIDTH_RANGE: RangeInclusive<usize> = 12..=80;
const CARDS_PER_ROW_RANGE: RangeInclusive<usize> = 1..=8;

/// Configuration for a contact book session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Screen shown when the session starts (default: form)
    pub initial_view: View,

    /// Card width in columns, borders included (default: 28)
    pub card_width: usize,

    /// Cards per gallery row (default: 3)
    pub cards_per_row: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_INITIAL_VIEW`: `form` or `list` (default: form)
    /// - `CONTACT_BOOK_CARD_WIDTH`: 12-80 (default: 28)
    /// - `CONTACT_BOOK_CARDS_PER_ROW`: 1-8 (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let initial_view = match env::var("CONTACT_BOOK_INITIAL_VIEW") {
            Ok(val) => val
                .parse::<View>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_INITIAL_VIEW".to_string(),
                    reason,
                })?,
            Err(_) => defaults.initial_view,
        };

        let card_width = Self::parse_env_usize_in(
            "CONTACT_BOOK_CARD_WIDTH",
            defaults.card_width,
            CARD_WIDTH_RANGE,
        )?;
        let cards_per_row = Self::parse_env_usize_in(
            "CONTACT_BOOK_CARDS_PER_ROW",
            defaults.cards_per_row,
            CARDS_PER_ROW_RANGE,
        )?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            initial_view,
            card_width,
            cards_per_row,
            log_level,
        })
    }

    /// Gallery geometry derived from this configuration.
    pub fn card_layout(&self) -> CardLayout {
        CardLayout {
            card_width: self.card_width,
            cards_per_row: self.cards_per_row,
        }
    }

    /// Parse an environment variable as usize within `range`, with a default value.
    fn parse_env_usize_in(
        var_name: &str,
        default: usize,
        range: RangeInclusive<usize>,
    ) -> ConfigResult<usize> {
        let value = match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                })?,
            Err(_) => return Ok(default),
        };

        if !range.contains(&value) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be between {} and {}", range.start(), range.end()),
            });
        }

        Ok(value)
    }
}

impl Default for Config {
    fn default() -> Self {
        let layout = CardLayout::default();
        Config {
            initial_view: View::Form,
            card_width: layout.card_width,
            cards_per_row: layout.cards_per_row,
            log_level: "error".to_string(),
        }
    }
}
