//! Structured logging for the Adega storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - leveled logs carrying app/component context
//! - `LogBuilder` - fluent typed fields
//! - `LogSink` - where formatted entries go (stderr, memory, browser console)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
