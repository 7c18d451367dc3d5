//! Resource booking scheduler GUI application.
//!
//! Displays bookable resources grouped under collapsible parents against a
//! horizontal strip of days. Dragging across cells of one resource selects a
//! date range; confirming the dialog creates a booking.
//! - Virtualized rows with the resource column and timeline kept in sync
//! - Asynchronous loading of resources and bookings from JSON files or demo data
//! - Name and booking id filters
//! - Multiple themes with persistent preferences
//!
//! Module layout:
//! - `app/` - Application state management and coordination
//! - `state/` - Focused state components (schedule, viewport, selection, ...)
//! - `cache/` - Flattened rows and booking index, rebuilt on change
//! - `io/` - Background loading
//! - `presentation/` - Color mapping for cells and bookings
//! - `ui/` - Panel rendering and input handling
//! - `rendering/` - Low-level painting of rows, headers and overlays
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use chrono::NaiveDate;
use eframe::egui;
use rsched::{read_json, Axis, SchedulerConfig, SchedulerEvent};
use std::path::PathBuf;

mod utils;
mod cache;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, LAYOUT_KEY};
use io::AsyncLoader;
use state::LayoutState;
use ui::panel_manager::{PanelInteraction, PanelManager};

#[derive(Parser, Debug)]
#[command(name = "sched-gui", version, about = "Resource booking scheduler")]
struct Args {
    /// Resources file (.json or .json.br)
    #[arg(long, requires = "bookings")]
    resources: Option<PathBuf>,

    /// Bookings file (.json or .json.br)
    #[arg(long, requires = "resources")]
    bookings: Option<PathBuf>,

    /// Start with generated demo data
    #[arg(long, conflicts_with = "resources")]
    demo: bool,

    /// Scheduler settings as JSON; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of day columns
    #[arg(long)]
    days: Option<usize>,

    /// Width of a day column in pixels
    #[arg(long)]
    cell_width: Option<f32>,

    /// Height of a row in pixels
    #[arg(long)]
    row_height: Option<f32>,

    /// First visible date (YYYY-MM-DD), today by default
    #[arg(long)]
    anchor: Option<NaiveDate>,
}

impl Args {
    /// Applies the command-line overrides on top of `config`.
    fn overlay(&self, config: SchedulerConfig) -> SchedulerConfig {
        SchedulerConfig {
            days_to_show: self.days.unwrap_or(config.days_to_show),
            cell_width: self.cell_width.unwrap_or(config.cell_width),
            row_height: self.row_height.unwrap_or(config.row_height),
            anchor: self.anchor.or(config.anchor),
            ..config
        }
    }

    fn initial_source(&self) -> Option<InitialSource> {
        match (&self.resources, &self.bookings) {
            (Some(resources), Some(bookings)) => Some(InitialSource::Files {
                resources: resources.clone(),
                bookings: bookings.clone(),
            }),
            _ if self.demo => Some(InitialSource::Demo),
            _ => None,
        }
    }
}

/// Data to load on the first frame.
enum InitialSource {
    Files { resources: PathBuf, bookings: PathBuf },
    Demo,
}

/// Main application entry point that initializes and launches the scheduler GUI.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Scheduler"),
        ..Default::default()
    };

    eframe::run_native(
        "Scheduler",
        options,
        Box::new(move |cc| Ok(Box::new(SchedulerApp::new(cc, &args)))),
    )
}

/// The scheduler application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles loading, selection input and scheduler events
/// - `ThemeCoordinator` handles theme persistence and application
/// - `SettingsCoordinator` restores and saves grid settings and layout
/// - `PanelManager` handles UI panel layout and rendering
struct SchedulerApp {
    state: AppState,
    loader: AsyncLoader,
    /// Source to load on the first frame
    pending_source: Option<InitialSource>,
}

impl SchedulerApp {
    fn new(cc: &eframe::CreationContext, args: &Args) -> Self {
        let base = match &args.config {
            Some(path) => match read_json::<SchedulerConfig>(path) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Ignoring config file: {:#}", e);
                    SchedulerConfig::default()
                }
            },
            None => SchedulerConfig::default(),
        };

        // Stored settings first, then command-line overrides
        let config = args.overlay(SettingsCoordinator::restore_config(cc.storage, base)).validated();
        log::debug!("Starting with {:?}", config);

        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layout: LayoutState = SettingsCoordinator::load_setting(cc.storage, LAYOUT_KEY);

        Self {
            state: AppState::with_theme_and_layout(&config, &theme_name, layout),
            loader: AsyncLoader::new(),
            pending_source: args.initial_source(),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFilesRequested { resources, bookings } => {
                ApplicationCoordinator::open_files(&mut self.state, &mut self.loader, resources, bookings, ctx);
            }
            PanelInteraction::OpenDemoRequested => {
                ApplicationCoordinator::open_demo(&mut self.state, &mut self.loader, ctx);
            }
            PanelInteraction::ParentToggled(parent_id) => {
                let event = ApplicationCoordinator::toggle_parent(&self.state, &parent_id);
                self.dispatch(event);
            }
            PanelInteraction::Cell(input) => {
                let now = ctx.input(|i| i.time);
                ApplicationCoordinator::handle_cell_input(&mut self.state, input, now);
            }
            PanelInteraction::BookingConfirmed => {
                if let Some(event) = ApplicationCoordinator::confirm_booking(&mut self.state) {
                    self.dispatch(event);
                }
            }
            PanelInteraction::BookingCancelled => {
                ApplicationCoordinator::cancel_booking(&mut self.state);
            }
        }
    }

    fn dispatch(&mut self, event: SchedulerEvent) {
        ApplicationCoordinator::apply_event(&mut self.state, event);
    }
}

impl eframe::App for SchedulerApp {
    /// Called periodically and on shutdown to persist preferences.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_grid_settings(
            storage,
            self.state.viewport.columns().days_to_show(),
            self.state.viewport.cell_width(),
        );
        SettingsCoordinator::save_setting(storage, LAYOUT_KEY, &self.state.layout);
    }

    /// Main update loop.
    ///
    /// 1. Apply a finished load
    /// 2. Apply theme
    /// 3. Start the load requested on the command line (first frame only)
    /// 4. Refresh rows and open the booking dialog when due
    /// 5. Render all panels and handle their interactions
    /// 6. Release the scroll sync guards for the next frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        match self.pending_source.take() {
            Some(InitialSource::Files { resources, bookings }) => {
                ApplicationCoordinator::open_files(&mut self.state, &mut self.loader, resources, bookings, ctx);
            }
            Some(InitialSource::Demo) => {
                ApplicationCoordinator::open_demo(&mut self.state, &mut self.loader, ctx);
            }
            None => {}
        }

        self.state.refresh_rows();

        let now = ctx.input(|i| i.time);
        if let Some(remaining) = self.state.selection.poll_modal(now) {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(remaining));
        }

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }

        // A region scrolled this frame; the others follow on the next one
        let sync = self.state.viewport.controller().sync();
        let scrolled = sync.is_guarded(Axis::Vertical) || sync.is_guarded(Axis::Horizontal);
        self.state.viewport.controller_mut().end_frame();
        if scrolled {
            ctx.request_repaint();
        }
    }
}
