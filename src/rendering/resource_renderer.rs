//! Resource column rows: group headers with an expand toggle, and indented
//! bookable resources.

use crate::rendering::text_utils::paint_label;
use eframe::egui;
use rsched::{DisplayRow, ResourceId, RowKind, ThemeColors};

const CHILD_INDENT: f32 = 24.0;
const TOGGLE_WIDTH: f32 = 20.0;

/// Result of user interaction with a resource row
pub enum ResourceRowInteraction {
    /// A group row was clicked
    ToggleRequested(ResourceId),
}

/// Renders one row of the resource column.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `row` - The flattened row to render
/// * `row_height` - Height of every row in pixels
/// * `booking_count` - Number of bookings on a child row, shown as a hint
/// * `theme_colors` - Color palette for the current theme
pub fn render_resource_row(
    ui: &mut egui::Ui,
    row: &DisplayRow,
    row_height: f32,
    booking_count: usize,
    theme_colors: &ThemeColors,
) -> Option<ResourceRowInteraction> {
    let sense = if row.is_parent() { egui::Sense::click() } else { egui::Sense::hover() };
    let (row_rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), row_height), sense);

    if !ui.is_rect_visible(row_rect) {
        return None;
    }

    let painter = ui.painter_at(row_rect);
    let mut interaction = None;

    match &row.kind {
        RowKind::Parent { expanded, child_count } => {
            let fill = if response.hovered() { theme_colors.hover } else { theme_colors.parent_row };
            painter.rect_filled(row_rect, 0.0, fill);

            let icon = if *expanded { "▼" } else { "▶" };
            painter.text(
                egui::pos2(row_rect.left() + TOGGLE_WIDTH / 2.0 + 4.0, row_rect.center().y),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(12.0),
                theme_colors.text_dim,
            );

            let badge = format!("{}", child_count);
            let badge_font = egui::FontId::proportional(11.0);
            let badge_galley = painter.layout_no_wrap(badge, badge_font, theme_colors.text_dim);
            let badge_width = badge_galley.size().x + 12.0;
            painter.galley(
                egui::pos2(
                    row_rect.right() - badge_width + 6.0,
                    row_rect.center().y - badge_galley.size().y / 2.0,
                ),
                badge_galley,
                theme_colors.text_dim,
            );

            let label_rect = egui::Rect::from_min_max(
                egui::pos2(row_rect.left() + TOGGLE_WIDTH + 4.0, row_rect.top()),
                egui::pos2(row_rect.right() - badge_width, row_rect.bottom()),
            );
            paint_label(
                &painter,
                label_rect,
                &row.name,
                egui::FontId::proportional(14.0),
                theme_colors.text_strong,
            );

            if response.clicked() {
                interaction = Some(ResourceRowInteraction::ToggleRequested(row.id.clone()));
            }
        }
        RowKind::Child { .. } => {
            painter.rect_filled(row_rect, 0.0, theme_colors.cell);

            let label_rect = egui::Rect::from_min_max(
                egui::pos2(row_rect.left() + CHILD_INDENT, row_rect.top()),
                row_rect.max,
            );
            paint_label(
                &painter,
                label_rect,
                &row.name,
                egui::FontId::proportional(13.0),
                theme_colors.text,
            );

            response.on_hover_text(format!("{} ({} bookings)", row.id, booking_count));
        }
    }

    painter.line_segment(
        [row_rect.left_bottom(), row_rect.right_bottom()],
        egui::Stroke::new(1.0, theme_colors.grid_line),
    );

    interaction
}
