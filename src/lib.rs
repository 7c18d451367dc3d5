pub mod config;
pub mod data_source;
pub mod dates;
pub mod events;
pub mod flatten;
pub mod model;
pub mod placement;
pub mod selection;
pub mod theme;
pub mod virtualization;

// Data model
pub use model::{
    Id, ResourceId, BookingId,
    ParentResource, ChildResource, Booking, NewBooking,
    toggle_expanded, child_ids, resource_name, next_booking_id
};

// Grid geometry
pub use dates::{DateColumns, generate_date_range};
pub use flatten::{RowFilter, RowKind, DisplayRow, flatten_resources};
pub use placement::{BlockPlacement, BookingIndex, place_booking, place_range, cell_index_at};
pub use virtualization::{
    ScrollSync, ScrollRegion, Axis, RowWindow, VirtualizationController, DEFAULT_OVERSCAN_ROWS
};

// Interaction
pub use selection::{Selection, SelectionMachine, SelectionPhase, BookingForm, is_date_in_selection};
pub use events::SchedulerEvent;

// Loading and configuration
pub use data_source::{DataSource, JsonFileSource, DemoSource, read_json, write_json};
pub use config::{SchedulerConfig, ConfigError};

// Theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, parse_hex_color, adjust_brightness, with_alpha};
