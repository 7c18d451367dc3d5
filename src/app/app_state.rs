//! Centralized application state for the scheduler.
//!
//! Composes focused state components that each manage one aspect of the
//! application, so borrows of different aspects do not conflict.

use crate::cache::RowCache;
use crate::state::{
    FilterState, InteractionState, LayoutState, ScheduleState, SelectionState, ThemeState, ViewportState,
};
use rsched::SchedulerConfig;

pub struct AppState {
    /// Resources, bookings and their revisions
    pub schedule: ScheduleState,

    /// Date columns, cell size and scroll sync
    pub viewport: ViewportState,

    /// Drag selection and confirmation dialog
    pub selection: SelectionState,

    /// Hovered cell
    pub interaction: InteractionState,

    /// Search and booking-id filters
    pub filter: FilterState,

    pub theme: ThemeState,

    pub layout: LayoutState,

    /// Last load error, shown in the header
    pub error_message: Option<String>,

    /// Flattened rows and booking index
    pub row_cache: RowCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&SchedulerConfig::default())
    }
}

impl AppState {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            schedule: ScheduleState::new(),
            viewport: ViewportState::from_config(config),
            selection: SelectionState::new(),
            interaction: InteractionState::new(),
            filter: FilterState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
            row_cache: RowCache::new(),
        }
    }

    /// Creates the state with the theme and layout restored from storage.
    pub fn with_theme_and_layout(config: &SchedulerConfig, theme_name: &str, layout: LayoutState) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            layout,
            ..Self::new(config)
        }
    }

    /// Clears loaded data and transient interaction before a new load.
    pub fn reset_schedule_state(&mut self) {
        self.schedule.clear();
        self.selection.clear();
        self.interaction.reset();
        self.viewport.reset_scroll();
        self.error_message = None;
        self.row_cache.invalidate();
    }

    /// Brings the row cache up to date and keeps the scroll offset inside the content.
    pub fn refresh_rows(&mut self) {
        if self.row_cache.refresh(&self.schedule, self.filter.filter()) {
            let total = self.row_cache.len();
            let height = self.viewport.body_height();
            self.viewport.controller_mut().clamp_to_content(total, height);
        }
    }
}
