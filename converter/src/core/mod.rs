//! # Core Abstractions
//!
//! Error taxonomy and the service traits the controller is written against.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: `RateService` and `ConverterView` seams
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use converter::config::ConverterConfig;
//! use converter::core::service::RateService;
//! use converter::services::api::RateClient;
//!
//! // In production: the HTTP client
//! let rates: Arc<dyn RateService> = Arc::new(RateClient::new(&ConverterConfig::default()));
//!
//! // In tests: any scripted implementation of RateService
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{ConverterView, RateService};
