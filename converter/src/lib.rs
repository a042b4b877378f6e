//! # Currency Converter - Library Root
//!
//! A **native desktop GUI** that converts an amount between two currencies
//! using live rates from an exchange-rate HTTP service.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              converter (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  Tokio         - Background rate fetches               │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ shared (currencies, DTOs)    │ HTTPS
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  shared crate   │          │  Exchange-rate provider │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state, controller transitions, handlers and tasks
//! - **config**: provider settings read from the environment
//! - **core**: error type and the service/view traits
//! - **debug**: logging setup
//! - **services**: the HTTP rate client
//! - **ui**: window, theme, widgets
//! - **utils**: runtime, validation, time formatting
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, input handling)
//!   │   └── services::api (HTTP requests)
//!   │
//!   └── ui (rendering)
//!       ├── screens::converter
//!       ├── widgets::*
//!       └── theme
//! ```
//!
//! ## Event-Driven Architecture
//!
//! - Main thread: handles input and rendering
//! - Async tasks: one rate fetch per convert, on the shared Tokio runtime
//!
//! Results flow back to the main thread as [`AppEvent`]s and are applied in
//! [`App::on_tick`]. When fetches overlap, the last one to finish wins.
//!
//! ## Usage
//!
//! ```bash
//! EXCHANGE_API_KEY=... cargo run --bin converter
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use config::ConverterConfig;
pub use core::{AppError, Result};
