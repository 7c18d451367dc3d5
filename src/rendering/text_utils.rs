//! Text measurement and truncation for labels painted inside cells and blocks.

use eframe::egui;
use std::borrow::Cow;

const ELLIPSIS: &str = "…";

/// Horizontal padding kept free on each side of a label.
pub const LABEL_PADDING: f32 = 4.0;

fn text_width(painter: &egui::Painter, text: &str, font_id: &egui::FontId) -> f32 {
    painter
        .layout_no_wrap(text.to_string(), font_id.clone(), egui::Color32::WHITE)
        .size()
        .x
}

/// Shortens `text` with a trailing ellipsis until it fits `available_width`.
///
/// Returns an empty string when not even the ellipsis fits.
pub fn fit_text<'a>(
    text: &'a str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> Cow<'a, str> {
    let max_width = available_width - 2.0 * LABEL_PADDING;
    if max_width <= 0.0 {
        return Cow::Borrowed("");
    }
    if text_width(painter, text, font_id) <= max_width {
        return Cow::Borrowed(text);
    }

    let budget = max_width - text_width(painter, ELLIPSIS, font_id);
    if budget <= 0.0 {
        return Cow::Borrowed("");
    }

    // Longest char prefix within budget
    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let (mut low, mut high) = (0usize, boundaries.len());
    while low < high {
        let mid = (low + high + 1) / 2;
        if text_width(painter, &text[..boundaries[mid - 1]], font_id) <= budget {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let cut = if low == 0 { 0 } else { boundaries[low - 1] };
    let prefix = text[..cut].trim_end();
    if prefix.is_empty() {
        Cow::Borrowed("")
    } else {
        Cow::Owned(format!("{}{}", prefix, ELLIPSIS))
    }
}

/// Paints a single-line label left-aligned and vertically centered in `rect`.
pub fn paint_label(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: &str,
    font_id: egui::FontId,
    color: egui::Color32,
) {
    let fitted = fit_text(text, rect.width(), &font_id, painter);
    if fitted.is_empty() {
        return;
    }
    painter.text(
        egui::pos2(rect.left() + LABEL_PADDING, rect.center().y),
        egui::Align2::LEFT_CENTER,
        fitted,
        font_id,
        color,
    );
}
