//! Memoized row list and booking index.
//!
//! Flattening runs only when the resource revision, booking revision or the
//! filter changes. The booking index depends on the two revisions only.

use crate::state::ScheduleState;
use rsched::{flatten_resources, BookingIndex, DisplayRow, RowFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RowKey {
    resource_revision: u64,
    booking_revision: u64,
    filter: RowFilter,
}

/// Cache of the flattened rows shown by the resource column and the timeline.
#[derive(Debug, Default)]
pub struct RowCache {
    row_key: Option<RowKey>,
    rows: Vec<DisplayRow>,
    index_key: Option<(u64, u64)>,
    index: BookingIndex,
    /// Number of flatten passes, for diagnostics and tests
    rebuilds: u64,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds whatever is stale. Returns `true` if the row list changed.
    pub fn refresh(&mut self, schedule: &ScheduleState, filter: &RowFilter) -> bool {
        let index_key = (schedule.resource_revision(), schedule.booking_revision());
        if self.index_key != Some(index_key) {
            self.index = BookingIndex::build(schedule.resources(), schedule.bookings());
            self.index_key = Some(index_key);
            if self.index.dropped() > 0 {
                log::debug!("{} bookings reference non-child resources", self.index.dropped());
            }
        }

        let row_key = RowKey {
            resource_revision: schedule.resource_revision(),
            booking_revision: schedule.booking_revision(),
            filter: filter.clone(),
        };
        if self.row_key.as_ref() == Some(&row_key) {
            return false;
        }

        self.rows = flatten_resources(schedule.resources(), schedule.bookings(), filter);
        self.row_key = Some(row_key);
        self.rebuilds += 1;
        log::debug!("Rebuilt row list: {} rows", self.rows.len());
        true
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&DisplayRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn booking_index(&self) -> &BookingIndex {
        &self.index
    }

    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn invalidate(&mut self) {
        self.row_key = None;
        self.index_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rsched::{Booking, ChildResource, Id, ParentResource};

    fn schedule() -> ScheduleState {
        let day = NaiveDate::from_ymd_opt(2026, 1, 22).unwrap();
        let mut state = ScheduleState::new();
        state.load(
            vec![ParentResource::new("P1", "Group")
                .with_expanded(true)
                .with_child(ChildResource::new("C1", "Room1"))
                .with_child(ChildResource::new("C2", "Suite"))],
            vec![Booking {
                id: Id::Int(1),
                resource_id: "C1".into(),
                start_date: day,
                end_date: day,
                name: None,
                notes: None,
                color: None,
            }],
            "test".to_string(),
        );
        state
    }

    #[test]
    fn test_unchanged_inputs_do_not_rebuild() {
        let state = schedule();
        let mut cache = RowCache::new();
        let filter = RowFilter::new();

        assert!(cache.refresh(&state, &filter));
        assert!(!cache.refresh(&state, &filter));
        assert_eq!(cache.rebuilds(), 1);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.booking_index().for_resource(&"C1".into()).len(), 1);
    }

    #[test]
    fn test_filter_change_rebuilds() {
        let state = schedule();
        let mut cache = RowCache::new();
        cache.refresh(&state, &RowFilter::new());

        assert!(cache.refresh(&state, &RowFilter::new().with_search_term("suite")));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.row(1).map(|r| r.name.as_str()), Some("Suite"));
    }

    #[test]
    fn test_revision_change_rebuilds() {
        let mut state = schedule();
        let mut cache = RowCache::new();
        let filter = RowFilter::new();
        cache.refresh(&state, &filter);

        let collapsed = rsched::toggle_expanded(state.resources(), &"P1".into());
        state.replace_resources(collapsed);
        assert!(cache.refresh(&state, &filter));
        assert_eq!(cache.len(), 1);

        cache.invalidate();
        assert!(cache.refresh(&state, &filter));
        assert_eq!(cache.rebuilds(), 3);
    }
}
