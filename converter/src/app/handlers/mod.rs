//! # Event Handlers
//!
//! User action handlers, organized by domain.

pub mod conversion;
