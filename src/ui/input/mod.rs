//! Input handling subsystem for UI interactions.
//!
//! - Timeline body pointer handling (hover tracking, drag selection)

pub mod cell_input_handler;
