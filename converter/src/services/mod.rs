//! # Services Module
//!
//! External service integrations for the converter.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! └── api/   - Exchange-rate provider client
//!              (latest rates for a base currency)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Converter window              │
//! │                                             │
//! │   ┌──────────────────┐                      │
//! │   │  RateClient      │  (behind RateService) │
//! │   └────────┬─────────┘                      │
//! └────────────┼────────────────────────────────┘
//!              │ HTTPS GET ?apikey=..&base=..
//!              ▼
//! ┌─────────────────────────────────────────────┐
//! │  Exchange-rate provider (/v6/latest)        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The client never runs on the UI thread: the controller hands each request
//! to the background runtime and receives the outcome over its event channel.

pub mod api;
