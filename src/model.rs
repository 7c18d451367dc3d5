//! Resource and booking data model.
//!
//! Resources form a two-level tree: parents (groups) own an ordered list of
//! children (bookable units). Bookings reference a resource by id and cover an
//! inclusive range of calendar dates.
//!
//! # Examples
//!
//! ```
//! use rsched::model::{ParentResource, ChildResource, toggle_expanded};
//!
//! let tree = vec![ParentResource::new("P1", "Group").with_child(ChildResource::new("C1", "Room1"))];
//! let toggled = toggle_expanded(&tree, &"P1".into());
//! assert!(toggled[0].expanded);
//! assert!(!tree[0].expanded);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier that is either an integer or a string.
///
/// Data files mix both (`"id": 7` and `"id": "670DH"`). Equality is strict,
/// so `Id::Int(1)` never equals `Id::Text("1")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl Id {
    /// Returns the integer value for numeric ids.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Id::Int(n) => Some(*n),
            Id::Text(_) => None,
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Int(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Text(value)
    }
}

pub type ResourceId = Id;
pub type BookingId = Id;

/// A bookable unit inside a parent group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildResource {
    pub id: ResourceId,
    pub name: String,
}

impl ChildResource {
    pub fn new(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A resource group with its children.
///
/// `expanded` controls whether children are shown when the tree is flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentResource {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub expanded: bool,
    #[serde(default)]
    pub children: Vec<ChildResource>,
}

impl ParentResource {
    pub fn new(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ChildResource) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}

/// Returns a copy of the tree with the given parent's `expanded` flag flipped.
///
/// The input is left untouched; the caller owns storing the new tree.
pub fn toggle_expanded(resources: &[ParentResource], parent_id: &ResourceId) -> Vec<ParentResource> {
    resources
        .iter()
        .map(|parent| {
            if &parent.id == parent_id {
                ParentResource {
                    expanded: !parent.expanded,
                    ..parent.clone()
                }
            } else {
                parent.clone()
            }
        })
        .collect()
}

/// Collects the ids of every child resource in the tree.
pub fn child_ids(resources: &[ParentResource]) -> HashSet<ResourceId> {
    resources
        .iter()
        .flat_map(|parent| parent.children.iter().map(|child| child.id.clone()))
        .collect()
}

/// Looks up the display name of a parent or child resource.
pub fn resource_name<'a>(resources: &'a [ParentResource], id: &ResourceId) -> Option<&'a str> {
    for parent in resources {
        if &parent.id == id {
            return Some(&parent.name);
        }
        if let Some(child) = parent.children.iter().find(|c| &c.id == id) {
            return Some(&child.name);
        }
    }
    None
}

/// An existing reservation of one resource over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub resource_id: ResourceId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Block color as `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Booking {
    /// Returns the booking with `start_date <= end_date`.
    pub fn normalized(mut self) -> Self {
        if self.start_date > self.end_date {
            std::mem::swap(&mut self.start_date, &mut self.end_date);
        }
        self
    }

    /// Label shown on the booking block.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Booking {}", self.id),
        }
    }

    /// Number of calendar days covered, inclusive.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days().abs() + 1
    }
}

/// A booking-create request produced by a confirmed selection.
///
/// Carries everything but the id, which the host assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub resource_id: ResourceId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl NewBooking {
    pub fn into_booking(self, id: BookingId) -> Booking {
        Booking {
            id,
            resource_id: self.resource_id,
            start_date: self.start_date,
            end_date: self.end_date,
            name: self.name,
            notes: self.notes,
            color: self.color,
        }
        .normalized()
    }
}

/// Picks the next free integer booking id (largest integer id + 1).
/// Saturates at `i64::MAX` instead of overflowing.
pub fn next_booking_id(bookings: &[Booking]) -> BookingId {
    let max = bookings.iter().filter_map(|b| b.id.as_int()).max().unwrap_or(0);
    Id::Int(max.max(bookings.len() as i64).saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let ids: Vec<Id> = serde_json::from_str(r#"[7, "670DH"]"#).unwrap();
        assert_eq!(ids, vec![Id::Int(7), Id::Text("670DH".to_string())]);
        assert_ne!(Id::Int(1), Id::from("1"));
        assert_eq!(Id::Int(42).to_string(), "42");
    }

    #[test]
    fn test_parent_defaults_when_fields_missing() {
        let parent: ParentResource = serde_json::from_str(r#"{"id": "P1", "name": "Group"}"#).unwrap();
        assert!(!parent.expanded);
        assert!(parent.children.is_empty());
    }

    #[test]
    fn test_booking_uses_camel_case_and_iso_dates() {
        let json = r#"{"id": 1, "resourceId": "C1", "startDate": "2026-01-22", "endDate": "2026-01-24", "name": "Stay"}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.resource_id, Id::from("C1"));
        assert_eq!(booking.start_date, date("2026-01-22"));
        assert_eq!(booking.day_count(), 3);

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["endDate"], "2026-01-24");
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_normalized_swaps_reversed_range() {
        let booking = Booking {
            id: Id::Int(1),
            resource_id: "C1".into(),
            start_date: date("2026-01-25"),
            end_date: date("2026-01-23"),
            name: None,
            notes: None,
            color: None,
        }
        .normalized();
        assert_eq!(booking.start_date, date("2026-01-23"));
        assert_eq!(booking.end_date, date("2026-01-25"));
        assert_eq!(booking.display_name(), "Booking 1");
    }

    #[test]
    fn test_toggle_expanded_only_touches_target() {
        let tree = vec![
            ParentResource::new("P1", "A"),
            ParentResource::new("P2", "B").with_expanded(true),
        ];
        let toggled = toggle_expanded(&tree, &"P2".into());
        assert!(!toggled[0].expanded);
        assert!(!toggled[1].expanded);
        assert!(tree[1].expanded);
    }

    #[test]
    fn test_next_booking_id_skips_past_largest() {
        let mk = |id: Id| Booking {
            id,
            resource_id: "C1".into(),
            start_date: date("2026-01-01"),
            end_date: date("2026-01-01"),
            name: None,
            notes: None,
            color: None,
        };
        assert_eq!(next_booking_id(&[]), Id::Int(1));
        assert_eq!(next_booking_id(&[mk(Id::Int(9)), mk(Id::from("x"))]), Id::Int(10));
        assert_eq!(next_booking_id(&[mk(Id::from("a")), mk(Id::from("b"))]), Id::Int(3));
    }

    #[test]
    fn test_next_booking_id_saturates_at_max() {
        let booking = Booking {
            id: Id::Int(i64::MAX),
            resource_id: "C1".into(),
            start_date: date("2026-01-01"),
            end_date: date("2026-01-01"),
            name: None,
            notes: None,
            color: None,
        };
        assert_eq!(next_booking_id(&[booking]), Id::Int(i64::MAX));
    }

    #[test]
    fn test_resource_name_finds_children() {
        let tree = vec![ParentResource::new("P1", "Group").with_child(ChildResource::new("C1", "Room1"))];
        assert_eq!(resource_name(&tree, &"C1".into()), Some("Room1"));
        assert_eq!(resource_name(&tree, &"P1".into()), Some("Group"));
        assert_eq!(resource_name(&tree, &"X".into()), None);
        assert!(child_ids(&tree).contains(&Id::from("C1")));
    }
}
