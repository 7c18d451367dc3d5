//! UI panel rendering subsystem
//!
//! - Header panel (data source, date navigation, grid size, theme selector)
//! - Filter bar (resource search, booking id lookup)
//! - Resource panel (fixed left column)
//! - Timeline panel (date header and scrollable body)
//! - Booking modal (confirmation dialog after a drag)
//! - Status bar (source and counts)
//! - Virtual scroll manager (shared row windowing)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pointer to cell resolution)

pub mod header;
pub mod filter_bar;
pub mod resource_panel;
pub mod timeline_panel;
pub mod booking_modal;
pub mod status_bar;
pub mod virtual_scroll_manager;
pub mod panel_manager;
pub mod input;
