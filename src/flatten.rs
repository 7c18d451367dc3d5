//! Resource tree flattening.
//!
//! Turns the parent/child resource tree into the ordered list of rows the
//! grid actually shows, applying expand/collapse state plus the search and
//! booking-id filters. The output is rebuilt from scratch on every change of
//! its inputs and never edited in place.

use crate::model::{Booking, ChildResource, ParentResource, ResourceId};
use std::collections::HashSet;

/// Active filters for the row list. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RowFilter {
    search_term: Option<String>,
    booking_id: Option<String>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    pub fn with_booking_id(mut self, needle: impl Into<String>) -> Self {
        self.set_booking_id(needle);
        self
    }

    /// Case-insensitive name filter, if set.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|s| !s.is_empty())
    }

    /// Case-sensitive booking id substring, if set.
    pub fn booking_id(&self) -> Option<&str> {
        self.booking_id.as_deref().filter(|s| !s.is_empty())
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.search_term = if term.is_empty() { None } else { Some(term) };
    }

    pub fn set_booking_id(&mut self, needle: impl Into<String>) {
        let needle = needle.into();
        self.booking_id = if needle.is_empty() { None } else { Some(needle) };
    }

    pub fn clear(&mut self) {
        self.search_term = None;
        self.booking_id = None;
    }

    pub fn is_active(&self) -> bool {
        self.search_term().is_some() || self.booking_id().is_some()
    }
}

/// Discriminates parent and child rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Group row. `child_count` counts the children surviving the filters.
    Parent { expanded: bool, child_count: usize },
    Child { parent_id: ResourceId },
}

/// One rendered row of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Position in the flattened list
    pub index: usize,
    pub id: ResourceId,
    pub name: String,
    pub kind: RowKind,
}

impl DisplayRow {
    pub fn is_parent(&self) -> bool {
        matches!(self.kind, RowKind::Parent { .. })
    }

    pub fn parent_id(&self) -> Option<&ResourceId> {
        match &self.kind {
            RowKind::Child { parent_id } => Some(parent_id),
            RowKind::Parent { .. } => None,
        }
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Flattens the resource tree into display rows.
///
/// 1. With a booking-id filter, children are restricted to the resources of
///    bookings whose id contains the filter text; parents left empty are
///    dropped and the survivors are shown expanded.
/// 2. With a search term, a parent survives if its own name or any child name
///    matches. When any child matches, the children are narrowed to the
///    matching ones; a parent matching on its own name alone keeps them all.
/// 3. Each surviving parent is emitted, followed by its children when expanded.
pub fn flatten_resources(
    resources: &[ParentResource],
    bookings: &[Booking],
    filter: &RowFilter,
) -> Vec<DisplayRow> {
    let booked_resources: Option<HashSet<&ResourceId>> = filter.booking_id().map(|needle| {
        bookings
            .iter()
            .filter(|booking| booking.id.to_string().contains(needle))
            .map(|booking| &booking.resource_id)
            .collect()
    });
    let search = filter.search_term().map(str::to_lowercase);

    let mut rows = Vec::new();

    for parent in resources {
        let mut children: Vec<&ChildResource> = parent.children.iter().collect();
        let mut expanded = parent.expanded;

        if let Some(ids) = &booked_resources {
            children.retain(|child| ids.contains(&child.id));
            if children.is_empty() {
                continue;
            }
            expanded = true;
        }

        if let Some(needle) = &search {
            let any_child_matches = children.iter().any(|child| contains_ignore_case(&child.name, needle));
            if any_child_matches {
                children.retain(|child| contains_ignore_case(&child.name, needle));
            } else if !contains_ignore_case(&parent.name, needle) {
                continue;
            }
        }

        rows.push(DisplayRow {
            index: rows.len(),
            id: parent.id.clone(),
            name: parent.name.clone(),
            kind: RowKind::Parent {
                expanded,
                child_count: children.len(),
            },
        });

        if expanded {
            for child in children {
                rows.push(DisplayRow {
                    index: rows.len(),
                    id: child.id.clone(),
                    name: child.name.clone(),
                    kind: RowKind::Child {
                        parent_id: parent.id.clone(),
                    },
                });
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChildResource, Id};
    use chrono::NaiveDate;

    fn tree() -> Vec<ParentResource> {
        vec![
            ParentResource::new("P1", "Deluxe")
                .with_child(ChildResource::new("A", "Room-1"))
                .with_child(ChildResource::new("B", "Room-2")),
            ParentResource::new("P2", "Butterfly")
                .with_expanded(true)
                .with_child(ChildResource::new("670DH", "670 DH"))
                .with_child(ChildResource::new("671DH", "Garden Suite")),
            ParentResource::new("P3", "Empty").with_expanded(true),
        ]
    }

    fn booking(id: i64, resource: &str) -> Booking {
        let day = NaiveDate::from_ymd_opt(2026, 1, 22).unwrap();
        Booking {
            id: Id::Int(id),
            resource_id: resource.into(),
            start_date: day,
            end_date: day,
            name: None,
            notes: None,
            color: None,
        }
    }

    fn ids(rows: &[DisplayRow]) -> Vec<String> {
        rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_collapsed_parent_hides_children() {
        let rows = flatten_resources(&tree(), &[], &RowFilter::new());
        assert_eq!(ids(&rows), vec!["P1", "P2", "670DH", "671DH", "P3"]);
        assert_eq!(rows[1].kind, RowKind::Parent { expanded: true, child_count: 2 });
        assert_eq!(rows[2].parent_id(), Some(&Id::from("P2")));
    }

    #[test]
    fn test_indices_are_contiguous() {
        let rows = flatten_resources(&tree(), &[], &RowFilter::new());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, i);
        }
    }

    #[test]
    fn test_empty_expanded_parent_contributes_only_itself() {
        let rows = flatten_resources(&tree(), &[], &RowFilter::new());
        assert_eq!(rows.last().map(|r| r.id.to_string()), Some("P3".to_string()));
        assert_eq!(rows.last().map(|r| r.kind.clone()), Some(RowKind::Parent { expanded: true, child_count: 0 }));
    }

    #[test]
    fn test_search_matching_child_narrows_children() {
        let filter = RowFilter::new().with_search_term("GARDEN");
        let rows = flatten_resources(&tree(), &[], &filter);
        assert_eq!(ids(&rows), vec!["P2", "671DH"]);
    }

    #[test]
    fn test_search_matching_only_parent_keeps_all_children() {
        let filter = RowFilter::new().with_search_term("butter");
        let rows = flatten_resources(&tree(), &[], &filter);
        assert_eq!(ids(&rows), vec!["P2", "670DH", "671DH"]);
    }

    #[test]
    fn test_search_matching_parent_and_child_narrows_children() {
        let tree = vec![ParentResource::new("P1", "Deluxe")
            .with_expanded(true)
            .with_child(ChildResource::new("C1", "Deluxe Room"))
            .with_child(ChildResource::new("C2", "Standard"))];
        let filter = RowFilter::new().with_search_term("deluxe");
        let rows = flatten_resources(&tree, &[], &filter);
        assert_eq!(ids(&rows), vec!["P1", "C1"]);
        assert_eq!(rows[0].kind, RowKind::Parent { expanded: true, child_count: 1 });
    }

    #[test]
    fn test_search_respects_collapsed_state() {
        let filter = RowFilter::new().with_search_term("room-2");
        let rows = flatten_resources(&tree(), &[], &filter);
        assert_eq!(ids(&rows), vec!["P1"]);
        assert_eq!(rows[0].kind, RowKind::Parent { expanded: false, child_count: 1 });
    }

    #[test]
    fn test_booking_filter_expands_and_restricts() {
        let bookings = vec![booking(12, "B"), booking(13, "671DH"), booking(7, "A")];
        let filter = RowFilter::new().with_booking_id("1");
        let rows = flatten_resources(&tree(), &bookings, &filter);
        assert_eq!(ids(&rows), vec!["P1", "B", "P2", "671DH"]);
        assert!(matches!(rows[0].kind, RowKind::Parent { expanded: true, .. }));
    }

    #[test]
    fn test_booking_filter_without_matches_is_empty() {
        let bookings = vec![booking(7, "A")];
        let filter = RowFilter::new().with_booking_id("99");
        assert!(flatten_resources(&tree(), &bookings, &filter).is_empty());
    }

    #[test]
    fn test_booking_filter_ignores_parent_resource_ids() {
        let bookings = vec![booking(5, "P1")];
        let filter = RowFilter::new().with_booking_id("5");
        assert!(flatten_resources(&tree(), &bookings, &filter).is_empty());
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let filter = RowFilter::new().with_search_term("").with_booking_id("");
        assert!(!filter.is_active());
        assert_eq!(flatten_resources(&tree(), &[], &filter), flatten_resources(&tree(), &[], &RowFilter::new()));
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let bookings = vec![booking(12, "B")];
        for filter in [
            RowFilter::new(),
            RowFilter::new().with_search_term("room"),
            RowFilter::new().with_booking_id("12"),
            RowFilter::new().with_search_term("dh").with_booking_id("1"),
        ] {
            let first = flatten_resources(&tree(), &bookings, &filter);
            let second = flatten_resources(&tree(), &bookings, &filter);
            assert_eq!(first, second);
        }
    }
}
