//! Drag selection of a date range on one resource row.
//!
//! The selection goes through three phases:
//!
//! ```text
//! Idle --pointer_down--> Selecting --pointer_up--> PendingConfirmation --cancel/confirm--> Idle
//! ```
//!
//! While selecting, only pointer-enter events on the originating row move the
//! end date. Dates are normalized to `start <= end` when the drag ends.

use crate::model::{NewBooking, ResourceId};
use chrono::NaiveDate;

/// A user-drawn date range on a single resource row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub resource_id: ResourceId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Selection {
    /// Starts a single-day selection.
    pub fn new(resource_id: ResourceId, date: NaiveDate) -> Self {
        Self {
            resource_id,
            start_date: date,
            end_date: date,
        }
    }

    /// Returns `(earliest, latest)` regardless of drag direction.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        if self.start_date <= self.end_date {
            (self.start_date, self.end_date)
        } else {
            (self.end_date, self.start_date)
        }
    }

    pub fn normalized(&self) -> Self {
        let (start_date, end_date) = self.bounds();
        Self {
            resource_id: self.resource_id.clone(),
            start_date,
            end_date,
        }
    }

    /// Number of selected days, inclusive.
    pub fn day_count(&self) -> i64 {
        let (start, end) = self.bounds();
        (end - start).num_days() + 1
    }

    /// True if the cell `(resource_id, date)` lies inside this selection.
    pub fn covers(&self, resource_id: &ResourceId, date: NaiveDate) -> bool {
        &self.resource_id == resource_id && is_date_in_selection(date, self)
    }
}

/// True if `date` lies between the selection bounds, inclusive.
pub fn is_date_in_selection(date: NaiveDate, selection: &Selection) -> bool {
    let (start, end) = selection.bounds();
    start <= date && date <= end
}

/// Fields collected by the confirmation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub notes: String,
    pub color: Option<String>,
}

impl BookingForm {
    fn non_empty(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Phase of the selection state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selecting(Selection),
    /// Drag finished; the selection is normalized and awaits confirmation
    PendingConfirmation(Selection),
}

/// Owns the single live selection and enforces the transitions between phases.
#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    phase: SelectionPhase,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SelectionPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, SelectionPhase::Idle)
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.phase, SelectionPhase::Selecting(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SelectionPhase::PendingConfirmation(_))
    }

    /// The live selection, in either the selecting or pending phase.
    pub fn selection(&self) -> Option<&Selection> {
        match &self.phase {
            SelectionPhase::Idle => None,
            SelectionPhase::Selecting(s) | SelectionPhase::PendingConfirmation(s) => Some(s),
        }
    }

    /// Pointer pressed on a cell. Starts a new selection only when idle.
    pub fn pointer_down(&mut self, resource_id: ResourceId, date: NaiveDate) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = SelectionPhase::Selecting(Selection::new(resource_id, date));
        true
    }

    /// Pointer entered a cell. Extends the selection on the originating row only.
    pub fn pointer_enter(&mut self, resource_id: &ResourceId, date: NaiveDate) -> bool {
        match &mut self.phase {
            SelectionPhase::Selecting(selection) if &selection.resource_id == resource_id => {
                if selection.end_date == date {
                    return false;
                }
                selection.end_date = date;
                true
            }
            _ => false,
        }
    }

    /// Pointer released anywhere. Finishes the drag and returns the normalized
    /// selection, which is the request to open the confirmation dialog.
    pub fn pointer_up(&mut self) -> Option<&Selection> {
        let normalized = match &self.phase {
            SelectionPhase::Selecting(selection) => selection.normalized(),
            _ => return None,
        };
        self.phase = SelectionPhase::PendingConfirmation(normalized);
        self.selection()
    }

    /// Discards the selection without side effects.
    pub fn cancel(&mut self) -> bool {
        let had_selection = !self.is_idle();
        self.phase = SelectionPhase::Idle;
        had_selection
    }

    /// Confirms the pending selection, producing the booking-create request.
    pub fn confirm(&mut self, form: BookingForm) -> Option<NewBooking> {
        let selection = match std::mem::take(&mut self.phase) {
            SelectionPhase::PendingConfirmation(selection) => selection,
            other => {
                self.phase = other;
                return None;
            }
        };

        Some(NewBooking {
            resource_id: selection.resource_id,
            start_date: selection.start_date,
            end_date: selection.end_date,
            name: BookingForm::non_empty(&form.name),
            notes: BookingForm::non_empty(&form.notes),
            color: form.color,
        })
    }

    /// True if the cell `(resource_id, date)` is part of the live selection.
    pub fn is_date_selected(&self, resource_id: &ResourceId, date: NaiveDate) -> bool {
        self.selection()
            .map(|selection| selection.covers(resource_id, date))
            .unwrap_or(false)
    }
}
