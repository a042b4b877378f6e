//! # Screens
//!
//! Screen-level layouts built from [`crate::ui::widgets`].

pub mod converter;
