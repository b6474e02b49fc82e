//! Startup configuration parsed from JSON.
//!
//! All fields are optional:
//! - `width`, `height`: surface size; missing or `0` falls back to 320
//! - `log_level`: console log level, `error` through `trace` (default `info`)
//!
//! Unknown fields are rejected. Frames always clear to opaque black, so there is
//! no colour setting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::DEFAULT_LOG_LEVEL;
use crate::error::GameError;
use crate::surface::Dimensions;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl GameConfig {
    /// Parse a config object, e.g. from a `data-` attribute on the host page.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Surface size with the zero/missing fallback applied.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::resolve(self.width, self.height)
    }

    /// # Errors
    ///
    /// Returns [`GameError::InvalidLogLevel`] if `log_level` is not a `log` level name.
    pub fn log_level(&self) -> Result<log::Level, GameError> {
        log::Level::from_str(&self.log_level).map_err(|_| GameError::InvalidLogLevel(self.log_level.clone()))
    }
}
