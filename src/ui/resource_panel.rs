//! Resource column UI rendering
//!
//! The fixed left column listing groups and their resources. It scrolls
//! vertically in lockstep with the timeline body and never shows its own bars.

use eframe::egui;
use egui::ScrollArea;
use crate::app::AppState;
use crate::rendering::resource_renderer::{render_resource_row, ResourceRowInteraction};
use crate::ui::virtual_scroll_manager::VirtualScrollManager;
use rsched::{Axis, ResourceId, ScrollRegion, ThemeColors};

/// Result of user interaction with the resource column
pub enum ResourcePanelInteraction {
    ParentToggled(ResourceId),
}

/// Renders the resource column header and rows.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `theme_colors` - Color palette for the current theme
pub fn render_resource_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<ResourcePanelInteraction> {
    render_column_header(ui, state.layout.header_height(), theme_colors);

    let mut interaction = None;
    let total_rows = state.row_cache.len();
    let window = VirtualScrollManager::window(&state.viewport, total_rows);
    let row_height = state.viewport.row_height();
    let scroll_y = state.viewport.controller().sync().scroll_y();

    let output = ScrollArea::vertical()
        .id_salt("resource_scroll_area")
        .auto_shrink([false, false])
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .vertical_scroll_offset(scroll_y)
        .show(ui, |ui| {
            VirtualScrollManager::prepare_rows(ui);
            VirtualScrollManager::add_top_padding(ui, &window);

            for row in &state.row_cache.rows()[window.range()] {
                let booking_count = state.row_cache.booking_index().for_resource(&row.id).len();
                if let Some(ResourceRowInteraction::ToggleRequested(id)) =
                    render_resource_row(ui, row, row_height, booking_count, theme_colors)
                {
                    interaction = Some(ResourcePanelInteraction::ParentToggled(id));
                }
            }

            VirtualScrollManager::add_bottom_padding(ui, &window);
        });

    state
        .viewport
        .controller_mut()
        .sync_mut()
        .report(ScrollRegion::ResourceColumn, Axis::Vertical, output.state.offset.y);

    interaction
}

/// Blank header cell aligned with the date header.
fn render_column_header(ui: &mut egui::Ui, height: f32, theme_colors: &ThemeColors) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme_colors.header_background);
    painter.text(
        egui::pos2(rect.left() + 8.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        "Resources",
        egui::FontId::proportional(14.0),
        theme_colors.text_strong,
    );
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        egui::Stroke::new(1.0, theme_colors.border),
    );
}
