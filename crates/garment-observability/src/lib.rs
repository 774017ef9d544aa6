//! Structured logging for the garment storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - JSON or human-readable log lines tagged with the
//!   shopping session id and the component that emitted them
//! - `LogBuilder` - fluent construction of entries with typed fields

mod logging;

pub use logging::*;
