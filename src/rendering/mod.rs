//! Painting of the scheduler grid.
//!
//! Resource rows, timeline rows with their booking blocks, the date header
//! and overlays drawn on top of the body.

pub mod resource_renderer;
pub mod row_renderer;
pub mod date_header_renderer;
pub mod timeline_overlays;
pub mod text_utils;
