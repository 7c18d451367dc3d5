//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, filter bar, resource column, timeline,
//! status bar, booking dialog) and collects their interactions for the
//! application coordinator.

use crate::app::{AppState, CellInput};
use crate::io::AsyncLoader;
use crate::ui::{booking_modal, filter_bar, header, resource_panel, status_bar, timeline_panel};
use std::path::PathBuf;
use rsched::ResourceId;

const RESOURCE_COLUMN_MIN_WIDTH: f32 = 120.0;
const RESOURCE_COLUMN_MAX_WIDTH: f32 = 480.0;

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// User picked both data files
    OpenFilesRequested { resources: PathBuf, bookings: PathBuf },
    /// User requested generated demo data
    OpenDemoRequested,
    /// A group row was clicked
    ParentToggled(ResourceId),
    /// Pointer input on a timeline cell
    Cell(CellInput),
    /// The booking dialog was confirmed
    BookingConfirmed,
    /// The booking dialog was dismissed
    BookingCancelled,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Interactions are returned in the order they happened.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        let theme_colors = state.theme.theme_manager().current_theme().colors;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            match header::render_header(ui, state, loader.is_loading()) {
                Some(header::HeaderInteraction::OpenFilesRequested { resources, bookings }) => {
                    interactions.push(PanelInteraction::OpenFilesRequested { resources, bookings });
                }
                Some(header::HeaderInteraction::OpenDemoRequested) => {
                    interactions.push(PanelInteraction::OpenDemoRequested);
                }
                None => {}
            }
        });

        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            filter_bar::render_filter_bar(ui, state);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        // Both grid panels share one frame so their headers and rows line up
        let grid_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .fill(ctx.style().visuals.panel_fill);

        if state.schedule.is_loaded() {
            let side = egui::SidePanel::left("resource_panel")
                .default_width(state.layout.resource_column_width())
                .width_range(RESOURCE_COLUMN_MIN_WIDTH..=RESOURCE_COLUMN_MAX_WIDTH)
                .resizable(true)
                .frame(grid_frame)
                .show(ctx, |ui| resource_panel::render_resource_panel(ui, state, &theme_colors));

            if let Some(resource_panel::ResourcePanelInteraction::ParentToggled(id)) = side.inner {
                interactions.push(PanelInteraction::ParentToggled(id));
            }
            state.layout.set_resource_column_width(side.response.rect.width());
        }

        egui::CentralPanel::default()
            .frame(grid_frame)
            .show(ctx, |ui| {
                if state.schedule.is_loaded() {
                    timeline_panel::render_timeline_header(ui, state, &theme_colors);
                }
                let inputs = timeline_panel::render_timeline_body(ui, state, loader, &theme_colors);
                interactions.extend(inputs.into_iter().map(PanelInteraction::Cell));
            });

        match booking_modal::render_booking_modal(ctx, state, &theme_colors) {
            Some(booking_modal::ModalInteraction::Confirmed) => {
                interactions.push(PanelInteraction::BookingConfirmed);
            }
            Some(booking_modal::ModalInteraction::Cancelled) => {
                interactions.push(PanelInteraction::BookingCancelled);
            }
            None => {}
        }

        interactions
    }
}
