//! Color mapping for grid cells and booking blocks.

use crate::utils::is_weekend;
use chrono::NaiveDate;
use egui::Color32;
use rsched::theme::{adjust_brightness, contrasting_text, parse_hex_color};
use rsched::{Booking, ThemeColors};

/// Background of a day cell.
pub fn cell_fill(date: NaiveDate, today: NaiveDate, is_parent_row: bool, colors: &ThemeColors) -> Color32 {
    if date == today {
        colors.today_cell
    } else if is_parent_row {
        colors.parent_row
    } else if is_weekend(date) {
        colors.weekend_cell
    } else {
        colors.cell
    }
}

/// Fill, border and label colors of a booking block.
///
/// A valid `#rrggbb` on the booking wins over the theme color.
pub fn booking_colors(booking: &Booking, colors: &ThemeColors) -> (Color32, Color32, Color32) {
    match booking.color.as_deref().and_then(parse_hex_color) {
        Some(fill) => (fill, adjust_brightness(fill, 0.7), contrasting_text(fill)),
        None => (colors.booking, colors.booking_border, colors.booking_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsched::{Id, ThemeManager};

    fn booking(color: Option<&str>) -> Booking {
        let day = NaiveDate::from_ymd_opt(2026, 1, 22).unwrap();
        Booking {
            id: Id::Int(1),
            resource_id: "C1".into(),
            start_date: day,
            end_date: day,
            name: None,
            notes: None,
            color: color.map(str::to_string),
        }
    }

    #[test]
    fn test_booking_color_override_and_fallback() {
        let colors = ThemeManager::new().current_theme().colors;
        assert_eq!(booking_colors(&booking(Some("#ff0000")), &colors).0, Color32::from_rgb(255, 0, 0));
        assert_eq!(booking_colors(&booking(Some("red")), &colors).0, colors.booking);
        assert_eq!(booking_colors(&booking(None), &colors).0, colors.booking);
    }

    #[test]
    fn test_today_wins_over_weekend() {
        let colors = ThemeManager::new().current_theme().colors;
        let saturday = NaiveDate::from_ymd_opt(2026, 1, 24).unwrap();
        assert_eq!(cell_fill(saturday, saturday, false, &colors), colors.today_cell);
        assert_eq!(cell_fill(saturday, saturday.pred_opt().unwrap(), false, &colors), colors.weekend_cell);
    }
}
