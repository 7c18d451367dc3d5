//! Pointer tracking over the timeline body.

use rsched::ResourceId;

/// A grid cell: the row's resource and the column index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub resource_id: ResourceId,
    pub column: usize,
}

/// State related to ongoing pointer interaction.
///
/// Tracks the cell under the pointer so that pointer-enter is reported once
/// per cell change rather than every frame.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    hovered_cell: Option<CellRef>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.hovered_cell = None;
    }

    pub fn hovered_cell(&self) -> Option<&CellRef> {
        self.hovered_cell.as_ref()
    }

    /// Records the cell under the pointer. Returns `true` if it changed.
    pub fn set_hovered_cell(&mut self, cell: Option<CellRef>) -> bool {
        if self.hovered_cell == cell {
            return false;
        }
        self.hovered_cell = cell;
        true
    }
}
