//! Booking block geometry and per-resource booking lookup.

use crate::dates::DateColumns;
use crate::model::{child_ids, Booking, ParentResource, ResourceId};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Horizontal extent of a booking block inside a row, in row-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPlacement {
    pub start_index: usize,
    pub end_index: usize,
    pub left: f32,
    pub width: f32,
    /// The booking starts before the first visible column
    pub clipped_start: bool,
    /// The booking ends after the last visible column
    pub clipped_end: bool,
}

impl BlockPlacement {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn column_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// Places an inclusive date range on the column grid.
///
/// Dates outside the window clamp to the first or last column. Returns `None`
/// when the range lies entirely before or entirely after the window, or when
/// the window is empty.
pub fn place_range(
    start: NaiveDate,
    end: NaiveDate,
    columns: &DateColumns,
    cell_width: f32,
) -> Option<BlockPlacement> {
    if columns.is_empty() {
        return None;
    }
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let last = columns.len() as i64 - 1;
    let start_offset = columns.offset_of(start);
    let end_offset = columns.offset_of(end);
    if end_offset < 0 || start_offset > last {
        return None;
    }

    let start_index = start_offset.clamp(0, last) as usize;
    let end_index = end_offset.clamp(0, last) as usize;

    Some(BlockPlacement {
        start_index,
        end_index,
        left: start_index as f32 * cell_width,
        width: (end_index - start_index + 1) as f32 * cell_width,
        clipped_start: start_offset < 0,
        clipped_end: end_offset > last,
    })
}

pub fn place_booking(booking: &Booking, columns: &DateColumns, cell_width: f32) -> Option<BlockPlacement> {
    place_range(booking.start_date, booking.end_date, columns, cell_width)
}

/// Column under a row-local x coordinate.
pub fn cell_index_at(x: f32, cell_width: f32, column_count: usize) -> Option<usize> {
    if x < 0.0 || cell_width <= 0.0 {
        return None;
    }
    let index = (x / cell_width).floor() as usize;
    (index < column_count).then_some(index)
}

/// Bookings grouped by the child resource they reserve.
///
/// Bookings that reference a parent id or an unknown id are left out.
#[derive(Debug, Clone, Default)]
pub struct BookingIndex {
    by_resource: HashMap<ResourceId, Vec<Booking>>,
    indexed: usize,
    dropped: usize,
}

impl BookingIndex {
    pub fn build(resources: &[ParentResource], bookings: &[Booking]) -> Self {
        let children = child_ids(resources);
        let mut by_resource: HashMap<ResourceId, Vec<Booking>> = HashMap::new();
        let mut dropped = 0;

        for booking in bookings {
            if children.contains(&booking.resource_id) {
                by_resource
                    .entry(booking.resource_id.clone())
                    .or_default()
                    .push(booking.clone().normalized());
            } else {
                log::debug!(
                    "Skipping booking {}: resource {} is not a child resource",
                    booking.id,
                    booking.resource_id
                );
                dropped += 1;
            }
        }

        for list in by_resource.values_mut() {
            list.sort_by_key(|b| (b.start_date, b.end_date));
        }

        Self {
            indexed: bookings.len() - dropped,
            by_resource,
            dropped,
        }
    }

    pub fn for_resource(&self, resource_id: &ResourceId) -> &[Booking] {
        self.by_resource
            .get(resource_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of indexed bookings.
    pub fn len(&self) -> usize {
        self.indexed
    }

    pub fn is_empty(&self) -> bool {
        self.indexed == 0
    }

    /// Number of bookings left out because their resource is not a child.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Bookings of `resource_id` that overlap at least one column of the window.
    pub fn visible_for<'a>(
        &'a self,
        resource_id: &ResourceId,
        columns: &'a DateColumns,
    ) -> impl Iterator<Item = &'a Booking> + 'a {
        let first = columns.first();
        let last = columns.last();
        self.for_resource(resource_id)
            .iter()
            .filter(move |b| match (first, last) {
                (Some(first), Some(last)) => b.end_date >= first && b.start_date <= last,
                _ => false,
            })
    }
}
