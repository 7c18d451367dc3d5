//! Timeline UI rendering: the date header and the scrollable body.
//!
//! The header scrolls horizontally with the body; the body scrolls both ways
//! and drives the resource column vertically. Offsets flow through the
//! shared scroll sync in both directions.

use eframe::egui;
use egui::ScrollArea;
use crate::app::{AppState, CellInput};
use crate::io::AsyncLoader;
use crate::rendering::date_header_renderer::render_date_header;
use crate::rendering::row_renderer::{render_timeline_row, RowPaintContext};
use crate::rendering::timeline_overlays;
use crate::ui::input::cell_input_handler::{handle_cell_input, BodyGeometry};
use crate::ui::virtual_scroll_manager::VirtualScrollManager;
use rsched::{Axis, ScrollRegion, ThemeColors};

/// Renders the date header strip above the body.
pub fn render_timeline_header(ui: &mut egui::Ui, state: &mut AppState, theme_colors: &ThemeColors) {
    let header_height = state.layout.header_height();
    let content_width = state.viewport.content_width();
    let scroll_x = state.viewport.controller().sync().scroll_x();
    let today = rsched::dates::today();

    let output = ScrollArea::horizontal()
        .id_salt("date_header_scroll_area")
        .auto_shrink([false, true])
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .horizontal_scroll_offset(scroll_x)
        .show(ui, |ui| {
            let (header_rect, _) =
                ui.allocate_exact_size(egui::vec2(content_width, header_height), egui::Sense::hover());
            render_date_header(
                &ui.painter_at(header_rect),
                header_rect,
                state.viewport.columns(),
                state.viewport.cell_width(),
                today,
                theme_colors,
            );
        });

    state
        .viewport
        .controller_mut()
        .sync_mut()
        .report(ScrollRegion::DateHeader, Axis::Horizontal, output.state.offset.x);
}

/// Renders the timeline body and returns the pointer inputs of this frame.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `loader` - Loader, for the loading indicator
/// * `theme_colors` - Color palette for the current theme
pub fn render_timeline_body(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loader: &AsyncLoader,
    theme_colors: &ThemeColors,
) -> Vec<CellInput> {
    if !state.schedule.is_loaded() {
        render_placeholder(ui, loader, theme_colors);
        return Vec::new();
    }

    let total_rows = state.row_cache.len();
    let window = VirtualScrollManager::window(&state.viewport, total_rows);
    let sync = state.viewport.controller().sync();
    let offset = egui::vec2(sync.scroll_x(), sync.scroll_y());
    let today = rsched::dates::today();
    let content_width = state.viewport.content_width();

    let paint = RowPaintContext {
        columns: state.viewport.columns(),
        cell_width: state.viewport.cell_width(),
        row_height: state.viewport.row_height(),
        today,
        bookings: state.row_cache.booking_index(),
        selection: state.selection.selection(),
        show_tooltips: !state.selection.is_selecting() && !state.selection.is_modal_open(),
        theme_colors,
    };

    let output = ScrollArea::both()
        .id_salt("timeline_body_scroll_area")
        .auto_shrink([false, false])
        .drag_to_scroll(false)
        .scroll_offset(offset)
        .show(ui, |ui| {
            VirtualScrollManager::prepare_rows(ui);
            ui.set_min_width(content_width);
            VirtualScrollManager::add_top_padding(ui, &window);

            for row in &state.row_cache.rows()[window.range()] {
                render_timeline_row(ui, row, &paint);
            }

            VirtualScrollManager::add_bottom_padding(ui, &window);
        });

    {
        let sync = state.viewport.controller_mut().sync_mut();
        sync.report(ScrollRegion::TimelineBody, Axis::Horizontal, output.state.offset.x);
        sync.report(ScrollRegion::TimelineBody, Axis::Vertical, output.state.offset.y);
    }
    state.viewport.set_body_height(output.inner_rect.height());

    let body = BodyGeometry {
        inner_rect: output.inner_rect,
        offset: output.state.offset,
        layer_id: ui.layer_id(),
    };
    let accepting_input = !state.selection.is_modal_open() && !state.selection.modal_pending();
    let (inputs, hovered) = handle_cell_input(
        ui.ctx(),
        &body,
        state.row_cache.rows(),
        &state.viewport,
        &mut state.interaction,
        accepting_input,
    );

    // Overlays
    let painter = ui.painter_at(output.inner_rect);
    timeline_overlays::render_today_marker(
        &painter,
        output.inner_rect,
        state.viewport.columns(),
        state.viewport.cell_width(),
        output.state.offset.x,
        today,
        theme_colors,
    );

    if let Some(hovered) = &hovered {
        let cell_rect = body.cell_screen_rect(hovered.row, hovered.cell.column, &state.viewport);
        timeline_overlays::render_hover_cell(&painter, cell_rect, theme_colors);
    }

    if state.selection.is_selecting() {
        if let (Some(selection), Some(pointer)) = (state.selection.selection(), ui.ctx().pointer_hover_pos()) {
            let days = selection.day_count();
            let text = if days == 1 { "1 day".to_string() } else { format!("{} days", days) };
            timeline_overlays::render_drag_badge(&painter, pointer, &text, theme_colors);
        }
    }

    if total_rows == 0 {
        painter.text(
            output.inner_rect.center(),
            egui::Align2::CENTER_CENTER,
            "No resources match the current filter",
            egui::FontId::proportional(16.0),
            theme_colors.text_dim,
        );
    }

    inputs
}

/// Loading indicator or a hint when nothing is loaded yet.
fn render_placeholder(ui: &mut egui::Ui, loader: &AsyncLoader, theme_colors: &ThemeColors) {
    let rect = ui.available_rect_before_wrap();
    let painter = ui.painter();

    match loader.loading_source() {
        Some(source) => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("Loading {}…", source),
                egui::FontId::proportional(24.0),
                theme_colors.text_dim,
            );
            ui.ctx().request_repaint();
        }
        None => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Open a resources file and a bookings file, or load demo data",
                egui::FontId::proportional(16.0),
                theme_colors.text_dim,
            );
        }
    }
}
