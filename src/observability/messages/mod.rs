// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable text and
//! [`StructuredLog`] to emit it through `tracing` at its documented level with
//! its fields attached.
//!
//! * `comparison` - comparator diagnostics
//! * `snapshot` - engine config and snapshot loading

use tracing::Span;

pub mod comparison;
pub mod snapshot;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event at the message's level.
    fn log(&self);

    /// A span at the message's level carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
