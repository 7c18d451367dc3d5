//! Date header rendering: one labelled cell per visible day.

use crate::utils::{format_day_header, is_weekend};
use eframe::egui;
use chrono::NaiveDate;
use rsched::{DateColumns, ThemeColors};

/// Paints the header strip for the columns intersecting the clip rectangle.
///
/// `header_rect` spans the full content width, starting at column 0.
pub fn render_date_header(
    painter: &egui::Painter,
    header_rect: egui::Rect,
    columns: &DateColumns,
    cell_width: f32,
    today: NaiveDate,
    theme_colors: &ThemeColors,
) {
    painter.rect_filled(header_rect, 0.0, theme_colors.header_background);

    let clip = painter.clip_rect();
    let first = (((clip.left() - header_rect.left()) / cell_width).floor().max(0.0)) as usize;
    let end = ((((clip.right() - header_rect.left()) / cell_width).ceil().max(0.0)) as usize).min(columns.len());

    let weekday_font = egui::FontId::proportional(11.0);
    let day_font = egui::FontId::proportional(14.0);
    let grid_stroke = egui::Stroke::new(1.0, theme_colors.grid_line);

    for index in first..end {
        let Some(date) = columns.get(index) else {
            continue;
        };
        let left = header_rect.left() + index as f32 * cell_width;
        let cell_rect = egui::Rect::from_min_size(
            egui::pos2(left, header_rect.top()),
            egui::vec2(cell_width, header_rect.height()),
        );

        if date == today {
            painter.rect_filled(cell_rect, 0.0, theme_colors.today_cell);
        } else if is_weekend(date) {
            painter.rect_filled(cell_rect, 0.0, theme_colors.weekend_cell);
        }

        let (weekday, day) = format_day_header(date, index == 0);
        let text_color = if date == today { theme_colors.today_marker } else { theme_colors.text };

        painter.text(
            egui::pos2(cell_rect.center().x, cell_rect.top() + cell_rect.height() * 0.3),
            egui::Align2::CENTER_CENTER,
            weekday,
            weekday_font.clone(),
            theme_colors.text_dim,
        );
        painter.text(
            egui::pos2(cell_rect.center().x, cell_rect.top() + cell_rect.height() * 0.68),
            egui::Align2::CENTER_CENTER,
            day,
            day_font.clone(),
            text_color,
        );

        painter.line_segment([cell_rect.right_top(), cell_rect.right_bottom()], grid_stroke);
    }

    painter.line_segment(
        [header_rect.left_bottom(), header_rect.right_bottom()],
        egui::Stroke::new(1.0, theme_colors.border),
    );
}
