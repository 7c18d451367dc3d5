//! Virtual scrolling coordination for the resource column and the timeline body.
//!
//! Both panels render the same row window computed from the shared vertical
//! offset, so their rows line up. Rows outside the window are replaced by
//! blank space of the same height.

use crate::state::ViewportState;
use rsched::RowWindow;

/// Manages virtual scrolling operations for the synchronized panels.
pub struct VirtualScrollManager;

impl VirtualScrollManager {
    /// Rows to render this frame, including overscan.
    pub fn window(viewport: &ViewportState, total_rows: usize) -> RowWindow {
        viewport.controller().window(total_rows, viewport.body_height())
    }

    /// Blank space standing in for the rows above the window.
    pub fn add_top_padding(ui: &mut egui::Ui, window: &RowWindow) {
        if window.top_padding > 0.0 {
            ui.add_space(window.top_padding);
        }
    }

    /// Blank space standing in for the rows below the window.
    pub fn add_bottom_padding(ui: &mut egui::Ui, window: &RowWindow) {
        if window.bottom_padding > 0.0 {
            ui.add_space(window.bottom_padding);
        }
    }

    /// Prepares a scroll area's content UI for back-to-back fixed-height rows.
    pub fn prepare_rows(ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
    }
}
