//! Drag selection plus the confirmation dialog it leads to.

use rsched::{BookingForm, NewBooking, ResourceId, Selection, SelectionMachine};
use chrono::NaiveDate;

/// Delay between releasing the pointer and showing the dialog, so the last
/// selected cell is painted first.
pub const MODAL_OPEN_DELAY_SECS: f64 = 0.08;

/// State related to the date-range selection.
///
/// Responsibilities:
/// - Driving the selection state machine from pointer input
/// - Scheduling the confirmation dialog after the drag ends
/// - Holding the dialog's form fields
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    machine: SelectionMachine,
    form: BookingForm,
    /// Frame time at which the dialog becomes visible
    modal_deadline: Option<f64>,
    modal_open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.machine.cancel();
        self.form = BookingForm::default();
        self.modal_deadline = None;
        self.modal_open = false;
    }

    // ===== Queries =====

    pub fn machine(&self) -> &SelectionMachine {
        &self.machine
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.machine.selection()
    }

    pub fn is_selecting(&self) -> bool {
        self.machine.is_selecting()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// True while the dialog is scheduled but not yet shown.
    pub fn modal_pending(&self) -> bool {
        self.modal_deadline.is_some()
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    // ===== Pointer input =====

    pub fn pointer_down(&mut self, resource_id: ResourceId, date: NaiveDate) -> bool {
        self.machine.pointer_down(resource_id, date)
    }

    pub fn pointer_enter(&mut self, resource_id: &ResourceId, date: NaiveDate) -> bool {
        self.machine.pointer_enter(resource_id, date)
    }

    /// Ends the drag. Schedules the dialog if a selection was finished.
    pub fn pointer_up(&mut self, now: f64) -> bool {
        if self.machine.pointer_up().is_some() {
            self.form = BookingForm::default();
            self.modal_deadline = Some(now + MODAL_OPEN_DELAY_SECS);
            true
        } else {
            false
        }
    }

    /// Opens the dialog once its deadline has passed. Returns the time left
    /// when still waiting, so the caller can request a repaint.
    pub fn poll_modal(&mut self, now: f64) -> Option<f64> {
        let deadline = self.modal_deadline?;
        if now >= deadline {
            self.modal_deadline = None;
            self.modal_open = true;
            None
        } else {
            Some(deadline - now)
        }
    }

    // ===== Dialog outcome =====

    pub fn cancel(&mut self) -> bool {
        self.modal_deadline = None;
        self.modal_open = false;
        self.machine.cancel()
    }

    pub fn confirm(&mut self) -> Option<NewBooking> {
        let request = self.machine.confirm(std::mem::take(&mut self.form))?;
        self.modal_deadline = None;
        self.modal_open = false;
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    #[test]
    fn test_modal_opens_after_delay() {
        let mut state = SelectionState::new();
        let c1: ResourceId = "C1".into();
        assert!(state.pointer_down(c1.clone(), date(25)));
        state.pointer_enter(&c1, date(23));
        assert!(state.pointer_up(10.0));

        assert!(state.modal_pending());
        assert!(state.poll_modal(10.05).is_some());
        assert!(!state.is_modal_open());
        assert!(state.poll_modal(10.1).is_none());
        assert!(state.is_modal_open());
        assert_eq!(state.selection().map(|s| (s.start_date, s.end_date)), Some((date(23), date(25))));
    }

    #[test]
    fn test_confirm_consumes_form() {
        let mut state = SelectionState::new();
        state.pointer_down("C1".into(), date(22));
        state.pointer_up(0.0);
        state.poll_modal(1.0);
        state.form_mut().name = "Garcia family".to_string();

        let request = state.confirm().unwrap();
        assert_eq!(request.name.as_deref(), Some("Garcia family"));
        assert!(!state.is_modal_open());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_cancel_closes_modal_without_request() {
        let mut state = SelectionState::new();
        state.pointer_down("C1".into(), date(22));
        state.pointer_up(0.0);
        state.poll_modal(1.0);
        assert!(state.cancel());
        assert!(!state.is_modal_open());
        assert!(state.confirm().is_none());
    }

    #[test]
    fn test_pointer_up_without_drag_schedules_nothing() {
        let mut state = SelectionState::new();
        assert!(!state.pointer_up(0.0));
        assert!(!state.modal_pending());
        assert_eq!(state.poll_modal(5.0), None);
    }
}
