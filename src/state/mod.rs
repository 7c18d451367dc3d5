//! State management modules for the scheduler.
//!
//! This module contains state-only logic (no UI concerns):
//! - Schedule state (resource tree, bookings, revisions)
//! - Viewport state (date columns, cell size, scroll sync)
//! - Selection state (drag selection, confirmation dialog)
//! - Interaction state (hovered cell)
//! - Filter state (search and booking-id filters)
//! - Theme state (theme manager, current theme)
//! - Layout state (panel sizes)

mod schedule_state;
mod viewport;
mod selection;
mod interaction;
mod filter_state;
mod theme_state;
mod layout_state;

pub use schedule_state::ScheduleState;
pub use viewport::{ViewportState, MAX_DAYS_TO_SHOW, MIN_CELL_WIDTH, MAX_CELL_WIDTH};
pub use selection::SelectionState;
pub use interaction::{InteractionState, CellRef};
pub use filter_state::FilterState;
pub use theme_state::ThemeState;
pub use layout_state::LayoutState;
