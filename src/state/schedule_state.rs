//! Resource tree and booking list owned by the host application.
//!
//! Both collections are replaced wholesale, never edited in place by the
//! grid. Every replacement bumps a revision counter so caches keyed on the
//! revisions know when to rebuild.

use rsched::{Booking, ParentResource};

#[derive(Debug, Clone, Default)]
pub struct ScheduleState {
    resources: Vec<ParentResource>,
    bookings: Vec<Booking>,
    /// Description of the source the data came from (file names or demo seed)
    source: Option<String>,
    loaded: bool,
    resource_revision: u64,
    booking_revision: u64,
}

impl ScheduleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs freshly loaded collections.
    pub fn load(&mut self, resources: Vec<ParentResource>, bookings: Vec<Booking>, source: String) {
        self.resources = resources;
        self.bookings = bookings;
        self.source = Some(source);
        self.loaded = true;
        self.resource_revision += 1;
        self.booking_revision += 1;
    }

    /// Drops all data. Revisions keep counting up.
    pub fn clear(&mut self) {
        self.resources.clear();
        self.bookings.clear();
        self.source = None;
        self.loaded = false;
        self.resource_revision += 1;
        self.booking_revision += 1;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn resources(&self) -> &[ParentResource] {
        &self.resources
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn resource_revision(&self) -> u64 {
        self.resource_revision
    }

    pub fn booking_revision(&self) -> u64 {
        self.booking_revision
    }

    pub fn child_count(&self) -> usize {
        self.resources.iter().map(|p| p.children.len()).sum()
    }

    /// Replaces the resource tree (expand/collapse produces a new tree).
    pub fn replace_resources(&mut self, resources: Vec<ParentResource>) {
        self.resources = resources;
        self.resource_revision += 1;
    }

    pub fn add_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
        self.booking_revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsched::{ChildResource, Id};
    use chrono::NaiveDate;

    #[test]
    fn test_revisions_bump_on_every_replacement() {
        let mut state = ScheduleState::new();
        assert!(!state.is_loaded());

        state.load(
            vec![ParentResource::new("P1", "Group").with_child(ChildResource::new("C1", "Room1"))],
            Vec::new(),
            "demo".to_string(),
        );
        assert!(state.is_loaded());
        assert_eq!((state.resource_revision(), state.booking_revision()), (1, 1));
        assert_eq!(state.child_count(), 1);

        state.replace_resources(Vec::new());
        assert_eq!((state.resource_revision(), state.booking_revision()), (2, 1));

        let day = NaiveDate::from_ymd_opt(2026, 1, 22).unwrap();
        state.add_booking(Booking {
            id: Id::Int(1),
            resource_id: "C1".into(),
            start_date: day,
            end_date: day,
            name: None,
            notes: None,
            color: None,
        });
        assert_eq!(state.booking_revision(), 2);
        assert_eq!(state.bookings().len(), 1);

        state.clear();
        assert!(!state.is_loaded());
        assert_eq!(state.source(), None);
        assert_eq!((state.resource_revision(), state.booking_revision()), (3, 3));
    }
}
