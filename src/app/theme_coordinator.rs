//! Theme persistence and application.

use crate::app::AppState;
use rsched::theme::DEFAULT_THEME;

const THEME_KEY: &str = "theme_preference";

pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the stored theme name, defaulting to Light.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|storage| storage.get_string(THEME_KEY))
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context. Called every frame.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state.theme.theme_manager().current_theme();
        let mut visuals = if theme.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        state.theme.theme_manager().apply_theme(&theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
