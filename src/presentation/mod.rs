//! Presentation layer: colors derived from data and theme.

pub mod color_mapping;
