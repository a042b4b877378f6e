//! # Reusable UI Widgets
//!
//! Components of the converter window.

pub mod currency_picker;
pub mod forms;
pub mod header;
pub mod quick_amounts;
pub mod result_panel;
