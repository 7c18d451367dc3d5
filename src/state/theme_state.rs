//! Theme selection state.

use rsched::theme::DEFAULT_THEME;
use rsched::ThemeManager;

/// State related to visual theme and styling.
pub struct ThemeState {
    theme_manager: ThemeManager,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name())
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
        }
    }

    /// Creates the state with a stored theme name, falling back to the default if unknown.
    pub fn with_theme(theme_name: &str) -> Self {
        let mut state = Self::new();
        if state.theme_manager.set_current_theme(theme_name).is_err() {
            log::warn!("Unknown theme '{}', using {}", theme_name, DEFAULT_THEME);
        }
        state
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        self.theme_manager.current_theme_name()
    }

    pub fn set_theme(&mut self, theme_name: &str) {
        if let Err(e) = self.theme_manager.set_current_theme(theme_name) {
            log::warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_stored_theme_falls_back() {
        assert_eq!(ThemeState::with_theme("Solarized").current_theme_name(), DEFAULT_THEME);
        assert_eq!(ThemeState::with_theme("Dark").current_theme_name(), "Dark");
    }
}
