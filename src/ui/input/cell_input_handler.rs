//! Pointer handling over the timeline body.
//!
//! Resolves the pointer to a grid cell and turns egui's raw pointer state
//! into the down/enter/up inputs the selection state machine consumes:
//! - Press on a resource cell starts a selection
//! - Moving onto another cell extends it (same resource only)
//! - Release anywhere in the window finishes it

use crate::app::CellInput;
use crate::state::{CellRef, InteractionState, ViewportState};
use chrono::NaiveDate;
use eframe::egui;
use rsched::{cell_index_at, DisplayRow};

/// Where the body viewport is on screen and how far it is scrolled.
#[derive(Debug, Clone, Copy)]
pub struct BodyGeometry {
    pub inner_rect: egui::Rect,
    pub offset: egui::Vec2,
    pub layer_id: egui::LayerId,
}

impl BodyGeometry {
    /// Converts a screen position to content coordinates.
    pub fn to_content(&self, pos: egui::Pos2) -> egui::Vec2 {
        pos - self.inner_rect.min + self.offset
    }

    /// Screen rectangle of a cell given in content coordinates.
    pub fn cell_screen_rect(&self, row: usize, column: usize, viewport: &ViewportState) -> egui::Rect {
        let min = self.inner_rect.min - self.offset
            + egui::vec2(column as f32 * viewport.cell_width(), viewport.controller().row_offset(row));
        egui::Rect::from_min_size(min, egui::vec2(viewport.cell_width(), viewport.row_height()))
    }
}

/// A cell resolved from a content position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    pub row: usize,
    pub cell: CellRef,
    pub date: NaiveDate,
}

/// Resolves a content-space position to a bookable cell.
///
/// Group rows are not bookable and resolve to `None`.
pub fn resolve_cell(content: egui::Vec2, rows: &[DisplayRow], viewport: &ViewportState) -> Option<ResolvedCell> {
    let row_index = viewport.controller().row_at(content.y, rows.len())?;
    let row = rows.get(row_index)?;
    if row.is_parent() {
        return None;
    }

    let column = cell_index_at(content.x, viewport.cell_width(), viewport.columns().len())?;
    let date = viewport.columns().get(column)?;

    Some(ResolvedCell {
        row: row_index,
        cell: CellRef {
            resource_id: row.id.clone(),
            column,
        },
        date,
    })
}

/// Handles pointer input for the body and returns the resulting cell inputs in order.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `body` - Geometry of the body viewport this frame
/// * `rows` - Flattened rows currently displayed
/// * `viewport` - Column and row geometry
/// * `interaction` - Hover tracking state (mutable)
/// * `accepting_input` - False while the booking dialog is up
pub fn handle_cell_input(
    ctx: &egui::Context,
    body: &BodyGeometry,
    rows: &[DisplayRow],
    viewport: &ViewportState,
    interaction: &mut InteractionState,
    accepting_input: bool,
) -> (Vec<CellInput>, Option<ResolvedCell>) {
    let (hover_pos, pressed, released) = ctx.input(|i| {
        (
            i.pointer.hover_pos(),
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
        )
    });

    // Popups and the dialog are areas of their own; panels have none
    let hovered = hover_pos
        .filter(|pos| accepting_input && body.inner_rect.contains(*pos))
        .filter(|pos| ctx.layer_id_at(*pos).map_or(true, |layer| layer == body.layer_id))
        .and_then(|pos| resolve_cell(body.to_content(pos), rows, viewport));

    let mut inputs = Vec::new();

    if interaction.set_hovered_cell(hovered.as_ref().map(|h| h.cell.clone())) {
        if let Some(h) = &hovered {
            inputs.push(CellInput::Enter {
                resource_id: h.cell.resource_id.clone(),
                date: h.date,
            });
        }
    }

    if pressed {
        if let Some(h) = &hovered {
            inputs.push(CellInput::Down {
                resource_id: h.cell.resource_id.clone(),
                date: h.date,
            });
        }
    }

    if released {
        inputs.push(CellInput::Up);
    }

    (inputs, hovered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsched::{RowKind, SchedulerConfig};

    fn viewport() -> ViewportState {
        let config = SchedulerConfig {
            anchor: NaiveDate::from_ymd_opt(2026, 1, 21),
            days_to_show: 8,
            ..Default::default()
        };
        ViewportState::from_config(&config)
    }

    fn rows() -> Vec<DisplayRow> {
        vec![
            DisplayRow {
                index: 0,
                id: "P1".into(),
                name: "Group".into(),
                kind: RowKind::Parent { expanded: true, child_count: 1 },
            },
            DisplayRow {
                index: 1,
                id: "C1".into(),
                name: "Room1".into(),
                kind: RowKind::Child { parent_id: "P1".into() },
            },
        ]
    }

    #[test]
    fn test_resolve_child_cell() {
        let resolved = resolve_cell(egui::vec2(250.0, 90.0), &rows(), &viewport()).unwrap();
        assert_eq!(resolved.row, 1);
        assert_eq!(resolved.cell.column, 2);
        assert_eq!(resolved.cell.resource_id, "C1".into());
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2026, 1, 23).unwrap());
    }

    #[test]
    fn test_parent_rows_and_outside_positions_do_not_resolve() {
        let vp = viewport();
        assert!(resolve_cell(egui::vec2(250.0, 30.0), &rows(), &vp).is_none());
        assert!(resolve_cell(egui::vec2(250.0, 130.0), &rows(), &vp).is_none());
        assert!(resolve_cell(egui::vec2(810.0, 90.0), &rows(), &vp).is_none());
    }

    #[test]
    fn test_body_geometry_round_trip() {
        let body = BodyGeometry {
            inner_rect: egui::Rect::from_min_size(egui::pos2(200.0, 100.0), egui::vec2(600.0, 400.0)),
            offset: egui::vec2(150.0, 60.0),
            layer_id: egui::LayerId::background(),
        };
        let vp = viewport();
        let content = body.to_content(egui::pos2(260.0, 130.0));
        assert_eq!(content, egui::vec2(210.0, 90.0));

        let rect = body.cell_screen_rect(1, 2, &vp);
        assert_eq!(rect.min, egui::pos2(250.0, 100.0));
        assert_eq!(rect.size(), egui::vec2(100.0, 60.0));
    }
}
