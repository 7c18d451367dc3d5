//! Scheduler layout configuration.

use crate::virtualization::DEFAULT_OVERSCAN_ROWS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DAYS_TO_SHOW: usize = 15;
pub const DEFAULT_CELL_WIDTH: f32 = 100.0;
pub const DEFAULT_ROW_HEIGHT: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("days to show must be greater than zero")]
    ZeroDays,

    #[error("cell width must be a positive number of pixels, got {0}")]
    InvalidCellWidth(f32),

    #[error("row height must be a positive number of pixels, got {0}")]
    InvalidRowHeight(f32),
}

/// Layout parameters of the scheduler grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub days_to_show: usize,
    pub cell_width: f32,
    pub row_height: f32,
    pub overscan_rows: usize,
    /// First visible date; today when unset
    pub anchor: Option<NaiveDate>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            days_to_show: DEFAULT_DAYS_TO_SHOW,
            cell_width: DEFAULT_CELL_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            overscan_rows: DEFAULT_OVERSCAN_ROWS,
            anchor: None,
        }
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days_to_show == 0 {
            return Err(ConfigError::ZeroDays);
        }
        if !positive(self.cell_width) {
            return Err(ConfigError::InvalidCellWidth(self.cell_width));
        }
        if !positive(self.row_height) {
            return Err(ConfigError::InvalidRowHeight(self.row_height));
        }
        Ok(())
    }

    /// Replaces every invalid field with its default, logging a warning for each.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.days_to_show == 0 {
            log::warn!("{}; using {}", ConfigError::ZeroDays, defaults.days_to_show);
            self.days_to_show = defaults.days_to_show;
        }
        if !positive(self.cell_width) {
            log::warn!("{}; using {}", ConfigError::InvalidCellWidth(self.cell_width), defaults.cell_width);
            self.cell_width = defaults.cell_width;
        }
        if !positive(self.row_height) {
            log::warn!("{}; using {}", ConfigError::InvalidRowHeight(self.row_height), defaults.row_height);
            self.row_height = defaults.row_height;
        }
        self
    }

    /// Anchor date, resolving an unset anchor to today.
    pub fn resolved_anchor(&self) -> NaiveDate {
        self.anchor.unwrap_or_else(crate::dates::today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SchedulerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.days_to_show, 15);
        assert_eq!(config.cell_width, 100.0);
        assert_eq!(config.row_height, 60.0);
        assert_eq!(config.overscan_rows, 3);
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let config = SchedulerConfig { days_to_show: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDays));

        let config = SchedulerConfig { cell_width: -4.0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidCellWidth(-4.0)));

        let config = SchedulerConfig { row_height: f32::NAN, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRowHeight(_))));
    }

    #[test]
    fn test_validated_falls_back_per_field() {
        let config = SchedulerConfig {
            days_to_show: 0,
            cell_width: 80.0,
            row_height: 0.0,
            ..Default::default()
        }
        .validated();
        assert_eq!(config.days_to_show, 15);
        assert_eq!(config.cell_width, 80.0);
        assert_eq!(config.row_height, 60.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidCellWidth(0.0).to_string(),
            "cell width must be a positive number of pixels, got 0"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SchedulerConfig = serde_json::from_str(r#"{"days_to_show": 30, "anchor": "2026-01-21"}"#).unwrap();
        assert_eq!(config.days_to_show, 30);
        assert_eq!(config.cell_width, 100.0);
        assert_eq!(config.resolved_anchor(), NaiveDate::from_ymd_opt(2026, 1, 21).unwrap());
    }
}
