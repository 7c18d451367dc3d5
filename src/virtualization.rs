//! Row windowing and scroll synchronization.
//!
//! The scheduler has three scrollable regions that must move as one:
//!
//! - the resource column scrolls vertically only,
//! - the date header scrolls horizontally only,
//! - the timeline body scrolls on both axes.
//!
//! `ScrollSync` keeps one canonical offset per axis. Each region reports its
//! native offset after it renders and is driven to the canonical offset on the
//! next render. A per-axis guard, released once per frame, discards the stale
//! offsets that the other participants still report in the frame where the
//! canonical value moved.
//!
//! `RowWindow` picks the slice of rows that intersects the viewport. Rows
//! have a uniform height, so the offset of row `i` is `i * row_height`.

use crate::config::SchedulerConfig;
use std::ops::Range;

/// Rows rendered above and below the viewport.
pub const DEFAULT_OVERSCAN_ROWS: usize = 3;

/// Offsets closer than this are considered equal (sub-pixel jitter).
const OFFSET_EPSILON: f32 = 0.5;

/// One of the three independently scrollable regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollRegion {
    ResourceColumn,
    DateHeader,
    TimelineBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Regions that share this axis.
    pub fn participants(self) -> [ScrollRegion; 2] {
        match self {
            Axis::Horizontal => [ScrollRegion::DateHeader, ScrollRegion::TimelineBody],
            Axis::Vertical => [ScrollRegion::ResourceColumn, ScrollRegion::TimelineBody],
        }
    }
}

impl ScrollRegion {
    pub fn scrolls(self, axis: Axis) -> bool {
        axis.participants().contains(&self)
    }
}

#[derive(Debug, Clone, Default)]
struct AxisState {
    offset: f32,
    /// Region whose report moved the offset during the current frame
    guard: Option<ScrollRegion>,
}

/// Canonical scroll offsets shared by the synchronized regions.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    horizontal: AxisState,
    vertical: AxisState,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// The offset every participant of `axis` is driven to.
    pub fn offset(&self, axis: Axis) -> f32 {
        self.axis(axis).offset
    }

    pub fn scroll_x(&self) -> f32 {
        self.horizontal.offset
    }

    pub fn scroll_y(&self) -> f32 {
        self.vertical.offset
    }

    /// Records the native offset observed in `region`.
    ///
    /// Returns `true` if the canonical offset moved. Reports from regions that
    /// do not scroll on `axis` are ignored, as are differing reports from the
    /// other participant while the axis guard is held this frame.
    pub fn report(&mut self, region: ScrollRegion, axis: Axis, offset: f32) -> bool {
        if !region.scrolls(axis) {
            return false;
        }
        let offset = offset.max(0.0);
        let state = self.axis_mut(axis);
        if (state.offset - offset).abs() < OFFSET_EPSILON {
            return false;
        }
        match state.guard {
            Some(holder) if holder != region => false,
            _ => {
                state.offset = offset;
                state.guard = Some(region);
                true
            }
        }
    }

    /// Moves an axis programmatically (jump to a row, clamping). Does not take the guard.
    pub fn set_offset(&mut self, axis: Axis, offset: f32) {
        self.axis_mut(axis).offset = offset.max(0.0);
    }

    pub fn is_guarded(&self, axis: Axis) -> bool {
        self.axis(axis).guard.is_some()
    }

    /// Releases the guards. Called once at the end of every frame.
    pub fn end_frame(&mut self) {
        self.horizontal.guard = None;
        self.vertical.guard = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The slice of rows to instantiate for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowWindow {
    /// First instantiated row
    pub first: usize,
    /// One past the last instantiated row
    pub end: usize,
    /// Height of the skipped rows above the window
    pub top_padding: f32,
    /// Height of the skipped rows below the window
    pub bottom_padding: f32,
}

impl RowWindow {
    pub fn empty() -> Self {
        Self {
            first: 0,
            end: 0,
            top_padding: 0.0,
            bottom_padding: 0.0,
        }
    }

    /// Computes the rows intersecting `[scroll_offset, scroll_offset + viewport_height)`
    /// plus `overscan` rows on each side.
    pub fn compute(
        scroll_offset: f32,
        viewport_height: f32,
        row_height: f32,
        total_rows: usize,
        overscan: usize,
    ) -> Self {
        if total_rows == 0 || row_height <= 0.0 {
            return Self::empty();
        }

        let top = scroll_offset.max(0.0);
        let bottom = top + viewport_height.max(0.0);
        let first_visible = ((top / row_height).floor() as usize).min(total_rows);
        let end_visible = ((bottom / row_height).ceil() as usize).min(total_rows);

        let first = first_visible.saturating_sub(overscan);
        let end = (end_visible + overscan).min(total_rows).max(first);

        Self {
            first,
            end,
            top_padding: first as f32 * row_height,
            bottom_padding: (total_rows - end) as f32 * row_height,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.first..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.first
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.first
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Windowing plus scroll sync for the scheduler grid.
#[derive(Debug, Clone)]
pub struct VirtualizationController {
    sync: ScrollSync,
    row_height: f32,
    overscan: usize,
}

impl VirtualizationController {
    pub fn new(row_height: f32, overscan: usize) -> Self {
        Self {
            sync: ScrollSync::new(),
            row_height,
            overscan,
        }
    }

    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self::new(config.row_height, config.overscan_rows)
    }

    pub fn sync(&self) -> &ScrollSync {
        &self.sync
    }

    pub fn sync_mut(&mut self) -> &mut ScrollSync {
        &mut self.sync
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn set_row_height(&mut self, row_height: f32) {
        self.row_height = row_height;
    }

    /// Absolute top of row `index`.
    pub fn row_offset(&self, index: usize) -> f32 {
        index as f32 * self.row_height
    }

    /// Row under a content-space y coordinate.
    pub fn row_at(&self, y: f32, total_rows: usize) -> Option<usize> {
        if y < 0.0 || self.row_height <= 0.0 {
            return None;
        }
        let index = (y / self.row_height) as usize;
        (index < total_rows).then_some(index)
    }

    pub fn content_height(&self, total_rows: usize) -> f32 {
        total_rows as f32 * self.row_height
    }

    /// Rows to instantiate at the canonical vertical offset.
    pub fn window(&self, total_rows: usize, viewport_height: f32) -> RowWindow {
        RowWindow::compute(
            self.sync.scroll_y(),
            viewport_height,
            self.row_height,
            total_rows,
            self.overscan,
        )
    }

    /// Pulls the vertical offset back inside the content after the row list shrank.
    ///
    /// Returns `true` if the offset changed.
    pub fn clamp_to_content(&mut self, total_rows: usize, viewport_height: f32) -> bool {
        let max_offset = (self.content_height(total_rows) - viewport_height).max(0.0);
        if self.sync.scroll_y() > max_offset {
            self.sync.set_offset(Axis::Vertical, max_offset);
            true
        } else {
            false
        }
    }

    /// Scrolls the minimum amount needed to bring row `index` fully into view.
    pub fn scroll_to_row(&mut self, index: usize, viewport_height: f32) {
        let top = self.row_offset(index);
        let bottom = top + self.row_height;
        let current = self.sync.scroll_y();
        if top < current {
            self.sync.set_offset(Axis::Vertical, top);
        } else if bottom > current + viewport_height {
            self.sync.set_offset(Axis::Vertical, bottom - viewport_height);
        }
    }

    pub fn end_frame(&mut self) {
        self.sync.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_report_converges_both_ways() {
        let mut sync = ScrollSync::new();
        assert!(sync.report(ScrollRegion::TimelineBody, Axis::Vertical, 420.0));
        assert_eq!(sync.offset(Axis::Vertical), 420.0);
        sync.end_frame();

        assert!(sync.report(ScrollRegion::ResourceColumn, Axis::Vertical, 60.0));
        assert_eq!(sync.scroll_y(), 60.0);
    }

    #[test]
    fn test_stale_echo_is_ignored_while_guarded() {
        let mut sync = ScrollSync::new();
        assert!(sync.report(ScrollRegion::ResourceColumn, Axis::Vertical, 300.0));
        // The body still shows the old offset this frame.
        assert!(!sync.report(ScrollRegion::TimelineBody, Axis::Vertical, 0.0));
        assert_eq!(sync.scroll_y(), 300.0);
        assert!(sync.is_guarded(Axis::Vertical));

        sync.end_frame();
        assert!(!sync.is_guarded(Axis::Vertical));
        // Next frame the body has been driven to the canonical offset.
        assert!(!sync.report(ScrollRegion::TimelineBody, Axis::Vertical, 300.0));
    }

    #[test]
    fn test_guard_holder_may_keep_scrolling_in_same_frame() {
        let mut sync = ScrollSync::new();
        assert!(sync.report(ScrollRegion::TimelineBody, Axis::Horizontal, 100.0));
        assert!(sync.report(ScrollRegion::TimelineBody, Axis::Horizontal, 150.0));
        assert_eq!(sync.scroll_x(), 150.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let mut sync = ScrollSync::new();
        assert!(sync.report(ScrollRegion::DateHeader, Axis::Horizontal, 250.0));
        assert!(sync.report(ScrollRegion::ResourceColumn, Axis::Vertical, 90.0));
        assert_eq!(sync.scroll_x(), 250.0);
        assert_eq!(sync.scroll_y(), 90.0);
    }

    #[test]
    fn test_non_participants_are_ignored() {
        let mut sync = ScrollSync::new();
        assert!(!sync.report(ScrollRegion::ResourceColumn, Axis::Horizontal, 50.0));
        assert!(!sync.report(ScrollRegion::DateHeader, Axis::Vertical, 50.0));
        assert_eq!(sync.scroll_x(), 0.0);
        assert_eq!(sync.scroll_y(), 0.0);
    }

    #[test]
    fn test_negative_offsets_clamp_to_zero() {
        let mut sync = ScrollSync::new();
        sync.set_offset(Axis::Vertical, 10.0);
        assert!(sync.report(ScrollRegion::TimelineBody, Axis::Vertical, -40.0));
        assert_eq!(sync.scroll_y(), 0.0);
    }

    #[test]
    fn test_window_includes_overscan() {
        // Rows 10..15 are visible (offset 600, height 300, rows of 60).
        let window = RowWindow::compute(600.0, 300.0, 60.0, 100, 3);
        assert_eq!(window.range(), 7..18);
        assert_eq!(window.top_padding, 420.0);
        assert_eq!(window.bottom_padding, 82.0 * 60.0);
    }

    #[test]
    fn test_window_partial_rows() {
        let window = RowWindow::compute(30.0, 100.0, 60.0, 100, 0);
        assert_eq!(window.range(), 0..3);
    }

    #[test]
    fn test_window_clamps_at_edges() {
        assert_eq!(RowWindow::compute(0.0, 300.0, 60.0, 3, 3).range(), 0..3);
        assert_eq!(RowWindow::compute(10_000.0, 300.0, 60.0, 20, 2).range(), 18..20);
        assert!(RowWindow::compute(0.0, 300.0, 60.0, 0, 3).is_empty());
    }

    #[test]
    fn test_window_never_exceeds_overscan_margin() {
        let row_height = 60.0;
        let total = 500;
        let overscan = 2;
        for step in 0..200 {
            let offset = step as f32 * 37.0;
            let height = 250.0;
            let window = RowWindow::compute(offset, height, row_height, total, overscan);
            let i = ((offset / row_height).floor() as usize).min(total);
            let j = (((offset + height) / row_height).ceil() as usize).min(total);
            for index in window.range() {
                assert!(index + overscan >= i && index < j + overscan, "row {index} outside margin at offset {offset}");
            }
            for index in i..j {
                assert!(window.contains(index));
            }
        }
    }

    #[test]
    fn test_controller_clamps_after_shrink() {
        let mut controller = VirtualizationController::new(60.0, 3);
        controller.sync_mut().set_offset(Axis::Vertical, 3000.0);
        assert!(controller.clamp_to_content(10, 300.0));
        assert_eq!(controller.sync().scroll_y(), 300.0);
        assert!(!controller.clamp_to_content(10, 300.0));
    }

    #[test]
    fn test_scroll_to_row_minimal_movement() {
        let mut controller = VirtualizationController::new(60.0, 3);
        controller.scroll_to_row(20, 300.0);
        assert_eq!(controller.sync().scroll_y(), 21.0 * 60.0 - 300.0);
        controller.scroll_to_row(2, 300.0);
        assert_eq!(controller.sync().scroll_y(), 120.0);
        controller.scroll_to_row(3, 300.0);
        assert_eq!(controller.sync().scroll_y(), 120.0);
    }

    #[test]
    fn test_row_at_maps_content_y() {
        let controller = VirtualizationController::new(60.0, 3);
        assert_eq!(controller.row_at(0.0, 5), Some(0));
        assert_eq!(controller.row_at(119.9, 5), Some(1));
        assert_eq!(controller.row_at(300.0, 5), None);
        assert_eq!(controller.row_at(-1.0, 5), None);
        assert_eq!(controller.row_offset(4), 240.0);
    }
}
