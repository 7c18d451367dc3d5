//! UI layout state.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RESOURCE_COLUMN_WIDTH: f32 = 192.0;
pub const DATE_HEADER_HEIGHT: f32 = 44.0;

/// Persisted panel sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutState {
    /// Width of the fixed resource column
    resource_column_width: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            resource_column_width: DEFAULT_RESOURCE_COLUMN_WIDTH,
        }
    }

    pub fn with_resource_column_width(width: f32) -> Self {
        let mut layout = Self::new();
        layout.set_resource_column_width(width);
        layout
    }

    pub fn resource_column_width(&self) -> f32 {
        self.resource_column_width
    }

    pub fn set_resource_column_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.resource_column_width = width;
        }
    }

    pub fn header_height(&self) -> f32 {
        DATE_HEADER_HEIGHT
    }
}
