// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for the diagnostic and
//! operational logging of the crate. Message types follow a struct-based
//! pattern with a `Display` implementation so that log text lives in one place
//! and every event carries the same structured fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::comparison` - comparator diagnostics (differences, depth and type errors)
//! * `messages::snapshot` - engine config and snapshot loading
//!
//! The pure predicates in [`crate::equality`] never log. Only
//! [`Comparator`](crate::equality::Comparator) and the loaders emit events.
//!
//! # Usage
//!
//! ```rust
//! use gateway_equality::observability::messages::comparison::DifferenceFound;
//! use gateway_equality::observability::messages::StructuredLog;
//!
//! let msg = DifferenceFound {
//!     message: "gloo.solo.io.RouteOptions",
//!     path: "cors.allow_origin[0]",
//!     reason: "\"a.example.com\" != \"b.example.com\"",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
