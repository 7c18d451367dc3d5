//! Grid geometry: date columns, cell size and the synchronized scroll offsets.

use rsched::{DateColumns, SchedulerConfig, VirtualizationController};

pub const MIN_CELL_WIDTH: f32 = 40.0;
pub const MAX_CELL_WIDTH: f32 = 240.0;
pub const MAX_DAYS_TO_SHOW: usize = 365;

/// State of the visible grid.
///
/// Responsibilities:
/// - Owning the date columns and the cell width
/// - Owning the virtualization controller (row windowing + scroll sync)
/// - Remembering the last measured body viewport height
#[derive(Debug, Clone)]
pub struct ViewportState {
    columns: DateColumns,
    cell_width: f32,
    controller: VirtualizationController,
    /// Height of the timeline body viewport, measured every frame
    body_height: f32,
}

impl ViewportState {
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            columns: DateColumns::new(config.resolved_anchor(), config.days_to_show),
            cell_width: config.cell_width,
            controller: VirtualizationController::from_config(config),
            body_height: 0.0,
        }
    }

    pub fn columns(&self) -> &DateColumns {
        &self.columns
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn row_height(&self) -> f32 {
        self.controller.row_height()
    }

    /// Width of the full date grid in pixels.
    pub fn content_width(&self) -> f32 {
        self.columns.len() as f32 * self.cell_width
    }

    pub fn controller(&self) -> &VirtualizationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut VirtualizationController {
        &mut self.controller
    }

    pub fn body_height(&self) -> f32 {
        self.body_height
    }

    pub fn set_body_height(&mut self, height: f32) {
        self.body_height = height.max(0.0);
    }

    pub fn set_cell_width(&mut self, width: f32) {
        self.cell_width = width.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH);
    }

    /// Returns `true` if the date columns were regenerated.
    pub fn set_days_to_show(&mut self, days: usize) -> bool {
        self.columns.set_days_to_show(days.clamp(1, MAX_DAYS_TO_SHOW))
    }

    pub fn set_anchor(&mut self, anchor: chrono::NaiveDate) -> bool {
        self.columns.set_anchor(anchor)
    }

    /// Scrolls both axes back to the origin.
    pub fn reset_scroll(&mut self) {
        self.controller.sync_mut().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> SchedulerConfig {
        SchedulerConfig {
            anchor: NaiveDate::from_ymd_opt(2026, 1, 21),
            ..Default::default()
        }
    }

    #[test]
    fn test_geometry_from_config() {
        let viewport = ViewportState::from_config(&config());
        assert_eq!(viewport.columns().len(), 15);
        assert_eq!(viewport.content_width(), 1500.0);
        assert_eq!(viewport.row_height(), 60.0);
    }

    #[test]
    fn test_days_and_cell_width_are_clamped() {
        let mut viewport = ViewportState::from_config(&config());
        assert!(viewport.set_days_to_show(0));
        assert_eq!(viewport.columns().len(), 1);
        viewport.set_cell_width(5.0);
        assert_eq!(viewport.cell_width(), MIN_CELL_WIDTH);
    }
}
