//! Utility modules for the scheduler GUI.

pub mod formatting;

pub use formatting::{
    format_day_header, format_date_range, format_memory_mb, get_current_memory_mb, is_weekend,
};
