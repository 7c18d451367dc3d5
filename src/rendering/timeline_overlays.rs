//! Overlays painted on top of the timeline body after its rows.
//!
//! These use the body's clipped painter so they never spill over the date
//! header or the resource column.

use eframe::egui;
use egui::Color32;
use rsched::{with_alpha, DateColumns, ThemeColors};
use chrono::NaiveDate;

/// Draws a vertical line through the middle of today's column, if visible.
///
/// # Arguments
/// * `painter` - Painter clipped to the body viewport
/// * `body_rect` - Screen rectangle of the body viewport
/// * `scroll_x` - Current horizontal scroll offset of the body
pub fn render_today_marker(
    painter: &egui::Painter,
    body_rect: egui::Rect,
    columns: &DateColumns,
    cell_width: f32,
    scroll_x: f32,
    today: NaiveDate,
    theme_colors: &ThemeColors,
) {
    let Some(index) = columns.index_of(today) else {
        return;
    };
    let x = body_rect.left() - scroll_x + (index as f32 + 0.5) * cell_width;
    if x < body_rect.left() || x > body_rect.right() {
        return;
    }

    painter.line_segment(
        [egui::pos2(x, body_rect.top()), egui::pos2(x, body_rect.bottom())],
        egui::Stroke::new(1.5, with_alpha(theme_colors.today_marker, 160)),
    );
}

/// Outlines the cell under the pointer.
pub fn render_hover_cell(painter: &egui::Painter, cell_rect: egui::Rect, theme_colors: &ThemeColors) {
    painter.rect_stroke(
        cell_rect.shrink(1.0),
        2.0,
        egui::Stroke::new(1.0, theme_colors.selection_stroke),
        egui::StrokeKind::Inside,
    );
}

/// Small label next to the pointer while a range is being dragged.
pub fn render_drag_badge(
    painter: &egui::Painter,
    pointer: egui::Pos2,
    text: &str,
    theme_colors: &ThemeColors,
) {
    let font_id = egui::FontId::proportional(12.0);
    let galley = painter.layout_no_wrap(text.to_string(), font_id, theme_colors.text_strong);

    let padding = egui::vec2(6.0, 3.0);
    let min = pointer + egui::vec2(14.0, 14.0);
    let bg_rect = egui::Rect::from_min_size(min, galley.size() + padding * 2.0);

    painter.rect_filled(bg_rect, 3.0, with_alpha(theme_colors.extreme_background, 230));
    painter.rect_stroke(
        bg_rect,
        3.0,
        egui::Stroke::new(1.0, theme_colors.selection_stroke),
        egui::StrokeKind::Outside,
    );
    painter.galley(min + padding, galley, Color32::PLACEHOLDER);
}
