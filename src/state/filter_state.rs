//! Text buffers of the filter bar and the row filter derived from them.

use rsched::RowFilter;

#[derive(Debug, Clone, Default)]
pub struct FilterState {
    filter: RowFilter,
    search_text: String,
    booking_text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &RowFilter {
        &self.filter
    }

    pub fn search_text_mut(&mut self) -> &mut String {
        &mut self.search_text
    }

    pub fn booking_text_mut(&mut self) -> &mut String {
        &mut self.booking_text
    }

    /// Rebuilds the row filter from the text buffers. Returns `true` if it changed.
    pub fn apply(&mut self) -> bool {
        let next = RowFilter::new()
            .with_search_term(self.search_text.trim())
            .with_booking_id(self.booking_text.trim());
        if next == self.filter {
            return false;
        }
        self.filter = next;
        true
    }

    pub fn clear(&mut self) -> bool {
        self.search_text.clear();
        self.booking_text.clear();
        self.apply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_trims_and_detects_changes() {
        let mut state = FilterState::new();
        assert!(!state.apply());

        state.search_text_mut().push_str("  room ");
        assert!(state.apply());
        assert_eq!(state.filter().search_term(), Some("room"));
        assert!(!state.apply());

        assert!(state.clear());
        assert!(!state.filter().is_active());
    }
}
