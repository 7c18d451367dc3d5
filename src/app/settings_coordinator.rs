//! Settings persistence.
//!
//! Settings are stored in eframe's key-value storage as JSON strings, so any
//! serde type can be persisted under a key.

use rsched::SchedulerConfig;
use serde::{Deserialize, Serialize};

pub const DAYS_TO_SHOW_KEY: &str = "days_to_show";
pub const CELL_WIDTH_KEY: &str = "cell_width";
pub const LAYOUT_KEY: &str = "layout";

pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()` when missing or invalid.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Loads a setting, falling back to `default` when missing or invalid.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring stored setting '{}': {}", key, e);
                None
            }
        }
    }

    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("Failed to store setting '{}': {}", key, e),
        }
    }

    /// Overlays the stored grid settings on top of `config`.
    pub fn restore_config(storage: Option<&dyn eframe::Storage>, config: SchedulerConfig) -> SchedulerConfig {
        SchedulerConfig {
            days_to_show: Self::load_setting_or(storage, DAYS_TO_SHOW_KEY, config.days_to_show),
            cell_width: Self::load_setting_or(storage, CELL_WIDTH_KEY, config.cell_width),
            ..config
        }
    }

    pub fn save_grid_settings(storage: &mut dyn eframe::Storage, days_to_show: usize, cell_width: f32) {
        Self::save_setting(storage, DAYS_TO_SHOW_KEY, &days_to_show);
        Self::save_setting(storage, CELL_WIDTH_KEY, &cell_width);
    }
}
