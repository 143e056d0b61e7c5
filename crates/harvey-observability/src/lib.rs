//! Observability for the Shop with Harvey storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Scoped structured logging (JSON or human-readable)
//! - `LogBuilder` - Fluent construction of entries with typed fields
//! - `LogTarget` / `MemorySink` - Where entries go: stderr, the browser
//!   console, or an in-memory buffer

mod logging;

pub use logging::*;
