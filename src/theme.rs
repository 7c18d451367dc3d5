//! Color themes for the scheduler grid.
//!
//! Each theme carries the egui chrome colors plus the grid-specific colors:
//! day cells, weekend and today highlights, parent rows, booking blocks and
//! the drag selection.
//!
//! # Examples
//!
//! ```
//! use rsched::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula booking fill: {:?}", dracula.colors.booking);
//! ```

use egui::Color32;
use std::collections::HashMap;

pub const DEFAULT_THEME: &str = "Light";

/// Full palette of one theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Chrome
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub error: Color32,

    // Grid
    pub cell: Color32,
    pub weekend_cell: Color32,
    pub today_cell: Color32,
    pub today_marker: Color32,
    pub grid_line: Color32,
    pub parent_row: Color32,
    pub header_background: Color32,

    // Bookings and selection
    pub booking: Color32,
    pub booking_border: Color32,
    pub booking_text: Color32,
    pub selection_fill: Color32,
    pub selection_stroke: Color32,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes plus the current choice
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [light_theme(), dark_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Sorted theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// The selected theme, or Light if the name is somehow unknown
    pub fn current_theme(&self) -> Theme {
        self.themes
            .get(&self.current_theme_name)
            .cloned()
            .unwrap_or_else(light_theme)
    }

    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Copies a theme's chrome colors into egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection_fill;
        visuals.selection.stroke.color = colors.selection_stroke;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection_fill;

        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light grid on white".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),
            hover: Color32::from_rgb(225, 230, 240),
            border: Color32::from_rgb(190, 190, 190),
            error: Color32::from_rgb(200, 40, 40),

            cell: Color32::from_rgb(255, 255, 255),
            weekend_cell: Color32::from_rgb(244, 244, 247),
            today_cell: Color32::from_rgb(255, 248, 225),
            today_marker: Color32::from_rgb(230, 120, 20),
            grid_line: Color32::from_rgb(225, 225, 225),
            parent_row: Color32::from_rgb(236, 239, 244),
            header_background: Color32::from_rgb(240, 240, 240),

            booking: hex_to_color32("#4f86c6"),
            booking_border: hex_to_color32("#2d5e96"),
            booking_text: Color32::WHITE,
            selection_fill: Color32::from_rgb(180, 200, 255),
            selection_stroke: Color32::from_rgb(40, 100, 200),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark grid with egui default chrome".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(90, 90, 90),
            error: Color32::from_rgb(231, 76, 60),

            cell: Color32::from_rgb(30, 30, 30),
            weekend_cell: Color32::from_rgb(36, 36, 42),
            today_cell: Color32::from_rgb(58, 50, 30),
            today_marker: Color32::from_rgb(243, 156, 18),
            grid_line: Color32::from_rgb(55, 55, 55),
            parent_row: Color32::from_rgb(45, 48, 56),
            header_background: Color32::from_rgb(46, 46, 46),

            booking: Color32::from_rgb(52, 152, 219),
            booking_border: Color32::from_rgb(30, 100, 160),
            booking_text: Color32::WHITE,
            selection_fill: Color32::from_rgb(50, 80, 120),
            selection_stroke: Color32::from_rgb(90, 150, 230),
        },
    }
}

/// Palette from https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),
            error: hex_to_color32("#ff5555"),

            cell: hex_to_color32("#282a36"),
            weekend_cell: hex_to_color32("#2f3142"),
            today_cell: hex_to_color32("#3d3a4f"),
            today_marker: hex_to_color32("#ffb86c"),
            grid_line: hex_to_color32("#3a3c4e"),
            parent_row: hex_to_color32("#343746"),
            header_background: hex_to_color32("#21222c"),

            booking: hex_to_color32("#bd93f9"),
            booking_border: hex_to_color32("#8d63c9"),
            booking_text: hex_to_color32("#282a36"),
            selection_fill: hex_to_color32("#44475a"),
            selection_stroke: hex_to_color32("#ff79c6"),
        },
    }
}

/// Parses `#rrggbb`, returning `None` for anything else.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Converts `#rrggbb` to Color32, falling back to black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex_color(hex).unwrap_or(Color32::BLACK)
}

/// Scales RGB by `factor` (1.0 = unchanged, >1.0 brighter, <1.0 darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Black or white, whichever reads better on `background`.
pub fn contrasting_text(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32 + 0.587 * background.g() as f32 + 0.114 * background.b() as f32;
    if luma > 150.0 {
        Color32::from_rgb(20, 20, 20)
    } else {
        Color32::WHITE
    }
}
