//! Application-level coordination and workflow management.
//!
//! Handles loading, pointer-driven selection, and the host side of the
//! scheduler events: assigning booking ids and replacing the resource tree.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use rsched::{
    next_booking_id, toggle_expanded, DataSource, DemoSource, JsonFileSource, ResourceId, SchedulerEvent,
};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

/// Pointer input on the timeline body, already resolved to cells.
#[derive(Debug, Clone, PartialEq)]
pub enum CellInput {
    Down { resource_id: ResourceId, date: NaiveDate },
    Enter { resource_id: ResourceId, date: NaiveDate },
    /// Released anywhere in the window
    Up,
}

pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading from `source`, clearing the current schedule.
    pub fn load_source(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        source: Arc<dyn DataSource>,
        ctx: &egui::Context,
    ) {
        state.reset_schedule_state();
        let ctx_handle = ctx.clone();
        loader.start_load(source, move || ctx_handle.request_repaint());
    }

    pub fn open_files(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        resources: PathBuf,
        bookings: PathBuf,
        ctx: &egui::Context,
    ) {
        Self::load_source(state, loader, Arc::new(JsonFileSource::new(resources, bookings)), ctx);
    }

    /// Loads generated demo data anchored at the first visible date.
    pub fn open_demo(state: &mut AppState, loader: &mut AsyncLoader, ctx: &egui::Context) {
        let anchor = state.viewport.columns().anchor();
        Self::load_source(state, loader, Arc::new(DemoSource::new(anchor)), ctx);
    }

    /// Applies a finished load. Called once per frame.
    ///
    /// On failure the error is shown and the schedule stays empty.
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success(data) => {
                log::info!(
                    "Loaded {} resource groups and {} bookings from {}",
                    data.resources.len(),
                    data.bookings.len(),
                    data.source
                );
                state.schedule.load(data.resources, data.bookings, data.source);
                state.error_message = None;
                state.selection.clear();
                state.viewport.reset_scroll();
                true
            }
            LoadResult::Error(message) => {
                log::error!("Failed to load schedule: {}", message);
                state.error_message = Some(format!("Error loading schedule: {}", message));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Feeds pointer input to the selection state machine.
    ///
    /// `now` is the frame time in seconds, used to schedule the dialog.
    pub fn handle_cell_input(state: &mut AppState, input: CellInput, now: f64) {
        match input {
            CellInput::Down { resource_id, date } => {
                state.selection.pointer_down(resource_id, date);
            }
            CellInput::Enter { resource_id, date } => {
                state.selection.pointer_enter(&resource_id, date);
            }
            CellInput::Up => {
                state.selection.pointer_up(now);
            }
        }
    }

    /// Builds the replacement tree for an expand/collapse click.
    pub fn toggle_parent(state: &AppState, parent_id: &ResourceId) -> SchedulerEvent {
        SchedulerEvent::ResourcesChanged(toggle_expanded(state.schedule.resources(), parent_id))
    }

    /// Confirms the pending selection with the dialog's form.
    pub fn confirm_booking(state: &mut AppState) -> Option<SchedulerEvent> {
        state.selection.confirm().map(SchedulerEvent::BookingCreated)
    }

    pub fn cancel_booking(state: &mut AppState) {
        state.selection.cancel();
    }

    /// Host side of the scheduler events.
    pub fn apply_event(state: &mut AppState, event: SchedulerEvent) {
        match event {
            SchedulerEvent::BookingCreated(request) => {
                let id = next_booking_id(state.schedule.bookings());
                let booking = request.into_booking(id);
                log::info!(
                    "Created booking {} on {} from {} to {}",
                    booking.id,
                    booking.resource_id,
                    booking.start_date,
                    booking.end_date
                );
                state.schedule.add_booking(booking);
            }
            SchedulerEvent::ResourcesChanged(resources) => {
                state.schedule.replace_resources(resources);
            }
        }
        state.refresh_rows();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsched::{Booking, ChildResource, Id, ParentResource, RowKind, SchedulerConfig};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    fn loaded_state() -> AppState {
        let config = SchedulerConfig {
            anchor: Some(date(21)),
            days_to_show: 8,
            ..Default::default()
        };
        let mut state = AppState::new(&config);
        state.schedule.load(
            vec![ParentResource::new("P1", "Group").with_child(ChildResource::new("C1", "Room1"))],
            vec![Booking {
                id: Id::Int(4),
                resource_id: "C1".into(),
                start_date: date(22),
                end_date: date(24),
                name: None,
                notes: None,
                color: None,
            }],
            "test".to_string(),
        );
        state.refresh_rows();
        state
    }

    #[test]
    fn test_toggle_round_trips_through_host() {
        let mut state = loaded_state();
        assert_eq!(state.row_cache.len(), 1);

        let event = ApplicationCoordinator::toggle_parent(&state, &"P1".into());
        ApplicationCoordinator::apply_event(&mut state, event);

        assert_eq!(state.row_cache.len(), 2);
        assert_eq!(
            state.row_cache.row(1).map(|r| r.kind.clone()),
            Some(RowKind::Child { parent_id: "P1".into() })
        );
    }

    #[test]
    fn test_drag_confirm_creates_booking_with_next_id() {
        let mut state = loaded_state();
        let c1: ResourceId = "C1".into();

        ApplicationCoordinator::handle_cell_input(&mut state, CellInput::Down { resource_id: c1.clone(), date: date(27) }, 1.0);
        ApplicationCoordinator::handle_cell_input(&mut state, CellInput::Enter { resource_id: c1.clone(), date: date(26) }, 1.0);
        ApplicationCoordinator::handle_cell_input(&mut state, CellInput::Enter { resource_id: "C2".into(), date: date(28) }, 1.0);
        ApplicationCoordinator::handle_cell_input(&mut state, CellInput::Up, 1.0);
        state.selection.poll_modal(2.0);
        assert!(state.selection.is_modal_open());

        state.selection.form_mut().name = "Okafor".to_string();
        let event = ApplicationCoordinator::confirm_booking(&mut state).unwrap();
        ApplicationCoordinator::apply_event(&mut state, event);

        let created = state.schedule.bookings().last().unwrap();
        assert_eq!(created.id, Id::Int(5));
        assert_eq!((created.start_date, created.end_date), (date(26), date(27)));
        assert_eq!(created.name.as_deref(), Some("Okafor"));
        assert_eq!(state.row_cache.booking_index().for_resource(&c1).len(), 2);
    }

    #[test]
    fn test_cancel_emits_nothing() {
        let mut state = loaded_state();
        ApplicationCoordinator::handle_cell_input(&mut state, CellInput::Down { resource_id: "C1".into(), date: date(22) }, 0.0);
        ApplicationCoordinator::handle_cell_input(&mut state, CellInput::Up, 0.0);
        ApplicationCoordinator::cancel_booking(&mut state);
        assert!(ApplicationCoordinator::confirm_booking(&mut state).is_none());
        assert_eq!(state.schedule.bookings().len(), 1);
    }

    #[test]
    fn test_failed_load_keeps_schedule_empty() {
        let mut state = AppState::default();
        let mut loader = AsyncLoader::new();
        loader.start_load(
            Arc::new(JsonFileSource::new("/nonexistent/r.json", "/nonexistent/b.json")),
            || {},
        );

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        while !ApplicationCoordinator::check_loading_completion(&mut state, &mut loader) {
            assert!(std::time::Instant::now() < deadline, "load never finished");
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert!(!state.schedule.is_loaded());
        assert!(state.error_message.as_deref().unwrap_or("").starts_with("Error loading schedule"));
    }
}
