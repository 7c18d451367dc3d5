//! Timeline row rendering: day cells, booking blocks and the drag selection.

use crate::presentation::color_mapping;
use crate::rendering::text_utils::{fit_text, LABEL_PADDING};
use crate::utils::format_date_range;
use eframe::egui;
use chrono::NaiveDate;
use rsched::{
    place_booking, place_range, with_alpha, BookingIndex, DateColumns, DisplayRow, Selection, ThemeColors,
};

const BLOCK_MARGIN_Y: f32 = 6.0;
const BLOCK_RADIUS: u8 = 4;

/// Everything shared by the rows of one frame.
pub struct RowPaintContext<'a> {
    pub columns: &'a DateColumns,
    pub cell_width: f32,
    pub row_height: f32,
    pub today: NaiveDate,
    pub bookings: &'a BookingIndex,
    /// Selection being dragged or awaiting confirmation
    pub selection: Option<&'a Selection>,
    /// Booking tooltips are suppressed while dragging
    pub show_tooltips: bool,
    pub theme_colors: &'a ThemeColors,
}

impl RowPaintContext<'_> {
    fn content_width(&self) -> f32 {
        self.columns.len() as f32 * self.cell_width
    }
}

/// Renders a single timeline row.
///
/// Only the columns intersecting the clip rectangle are painted.
pub fn render_timeline_row(ui: &mut egui::Ui, row: &DisplayRow, paint: &RowPaintContext) {
    let (row_rect, _) = ui.allocate_exact_size(
        egui::vec2(paint.content_width(), paint.row_height),
        egui::Sense::hover(),
    );

    if !ui.is_rect_visible(row_rect) {
        return;
    }

    let painter = ui.painter_at(row_rect);
    let colors = paint.theme_colors;
    let visible = visible_columns(painter.clip_rect(), row_rect.left(), paint.cell_width, paint.columns.len());

    // Cells
    for index in visible {
        let Some(date) = paint.columns.get(index) else {
            continue;
        };
        let cell_rect = cell_rect(row_rect, index, paint.cell_width);
        painter.rect_filled(cell_rect, 0.0, color_mapping::cell_fill(date, paint.today, row.is_parent(), colors));
        painter.line_segment(
            [cell_rect.right_top(), cell_rect.right_bottom()],
            egui::Stroke::new(1.0, colors.grid_line),
        );
    }
    painter.line_segment(
        [row_rect.left_bottom(), row_rect.right_bottom()],
        egui::Stroke::new(1.0, colors.grid_line),
    );

    if row.is_parent() {
        return;
    }

    // Bookings
    for (n, booking) in paint.bookings.visible_for(&row.id, paint.columns).enumerate() {
        let Some(placement) = place_booking(booking, paint.columns, paint.cell_width) else {
            continue;
        };
        let block_rect = egui::Rect::from_min_max(
            egui::pos2(row_rect.left() + placement.left + 1.0, row_rect.top() + BLOCK_MARGIN_Y),
            egui::pos2(row_rect.left() + placement.right() - 1.0, row_rect.bottom() - BLOCK_MARGIN_Y),
        );
        if !painter.clip_rect().intersects(block_rect) {
            continue;
        }

        let (fill, border, text_color) = color_mapping::booking_colors(booking, colors);
        let left_radius = if placement.clipped_start { 0 } else { BLOCK_RADIUS };
        let right_radius = if placement.clipped_end { 0 } else { BLOCK_RADIUS };
        let radius = egui::CornerRadius {
            nw: left_radius,
            sw: left_radius,
            ne: right_radius,
            se: right_radius,
        };

        painter.rect_filled(block_rect, radius, fill);
        painter.rect_stroke(block_rect, radius, egui::Stroke::new(1.0, border), egui::StrokeKind::Inside);

        // Keep the label readable when the block starts left of the viewport
        let label_left = block_rect.left().max(painter.clip_rect().left());
        let label_rect = egui::Rect::from_min_max(egui::pos2(label_left, block_rect.top()), block_rect.max);
        let font_id = egui::FontId::proportional(12.0);
        let name = booking.display_name();
        let label = fit_text(&name, label_rect.width(), &font_id, &painter);
        if !label.is_empty() {
            painter.text(
                egui::pos2(label_rect.left() + LABEL_PADDING, label_rect.center().y),
                egui::Align2::LEFT_CENTER,
                label,
                font_id,
                text_color,
            );
        }

        if paint.show_tooltips {
            let id = ui.id().with(("booking", row.index, n));
            ui.interact(block_rect, id, egui::Sense::hover()).on_hover_ui(|ui| {
                ui.strong(booking.display_name());
                ui.label(format_date_range(booking.start_date, booking.end_date));
                if let Some(notes) = booking.notes.as_deref() {
                    ui.label(notes);
                }
            });
        }
    }

    // Drag selection
    if let Some(selection) = paint.selection.filter(|s| s.resource_id == row.id) {
        if let Some(placement) = place_range(selection.start_date, selection.end_date, paint.columns, paint.cell_width) {
            let selection_rect = egui::Rect::from_min_max(
                egui::pos2(row_rect.left() + placement.left, row_rect.top() + 2.0),
                egui::pos2(row_rect.left() + placement.right(), row_rect.bottom() - 2.0),
            );
            painter.rect_filled(selection_rect, 3.0, with_alpha(colors.selection_fill, 150));
            painter.rect_stroke(
                selection_rect,
                3.0,
                egui::Stroke::new(1.5, colors.selection_stroke),
                egui::StrokeKind::Inside,
            );
        }
    }
}

/// Screen rectangle of column `index` within a row.
pub fn cell_rect(row_rect: egui::Rect, index: usize, cell_width: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(row_rect.left() + index as f32 * cell_width, row_rect.top()),
        egui::vec2(cell_width, row_rect.height()),
    )
}

/// Columns overlapping the horizontal extent of `clip`.
pub fn visible_columns(clip: egui::Rect, content_left: f32, cell_width: f32, column_count: usize) -> std::ops::Range<usize> {
    if cell_width <= 0.0 || column_count == 0 {
        return 0..0;
    }
    let first = ((clip.left() - content_left) / cell_width).floor().max(0.0) as usize;
    let end = ((clip.right() - content_left) / cell_width).ceil().max(0.0) as usize;
    first.min(column_count)..end.min(column_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_columns_clamped_to_grid() {
        let clip = egui::Rect::from_min_max(egui::pos2(250.0, 0.0), egui::pos2(650.0, 60.0));
        // Content scrolled 130 px left of the viewport
        assert_eq!(visible_columns(clip, 120.0, 100.0, 15), 1..6);
        assert_eq!(visible_columns(clip, 120.0, 100.0, 3), 1..3);
        assert_eq!(visible_columns(clip, 700.0, 100.0, 15), 0..0);
    }

    #[test]
    fn test_cell_rect() {
        let row = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 60.0));
        let rect = cell_rect(row, 2, 100.0);
        assert_eq!(rect.left(), 210.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 60.0);
    }
}
