//! Catalog configuration
//!
//! Defaults match the published library. `from_env` overlays the `BOOKZ_*`
//! environment variables on top of them.

use crate::load::{ProgressSimulator, DEFAULT_INTERVAL, DEFAULT_STEP};
use crate::types::PriorityList;
use std::str::FromStr;
use std::time::Duration;

/// Books shown per page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Deployment mode; decides the base path of the quiz application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub page_size: usize,
    pub priority: PriorityList,
    pub progress_step: u8,
    pub progress_interval: Duration,
    pub mode: Mode,
}

impl CatalogConfig {
    /// Defaults overridden by `BOOKZ_PAGE_SIZE` and `BOOKZ_MODE`.
    /// Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("BOOKZ_PAGE_SIZE") {
            match raw.parse::<usize>() {
                Ok(n) if n >= 1 => config.page_size = n,
                _ => tracing::warn!("Ignoring invalid BOOKZ_PAGE_SIZE: {}", raw),
            }
        }

        if let Ok(raw) = std::env::var("BOOKZ_MODE") {
            match raw.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => tracing::warn!("Ignoring BOOKZ_MODE: {}", e),
            }
        }

        config
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_priority(mut self, priority: PriorityList) -> Self {
        self.priority = priority;
        self
    }

    pub fn simulator(&self) -> ProgressSimulator {
        ProgressSimulator::new(self.progress_step, self.progress_interval)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            priority: PriorityList::default(),
            progress_step: DEFAULT_STEP,
            progress_interval: DEFAULT_INTERVAL,
            mode: Mode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!(" Dev ".parse::<Mode>().unwrap(), Mode::Development);
        assert!("staging".parse::<Mode>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.priority.len(), 7);
        assert_eq!(config.simulator().ticks(), 50);
    }

    #[test]
    fn test_page_size_floor() {
        assert_eq!(CatalogConfig::default().with_page_size(0).page_size, 1);
    }
}
