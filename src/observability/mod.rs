//! Observability subsystem.
//!
//! Structured JSON logging of query events.
//!
//! # Principles
//!
//! 1. Observability is read-only and never affects execution
//! 2. No async, no background threads, no buffering
//! 3. Deterministic output: same event, same line

mod logger;

pub use logger::{Logger, Severity};
