//! # Async Tasks
//!
//! Background work spawned by the controller.

pub mod rates;
