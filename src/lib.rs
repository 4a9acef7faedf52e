// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod api;           // gateway option messages
pub mod config;        // engine config + snapshot loading
pub mod equality;      // deep equality engine
pub mod errors;        // error handling
pub mod observability;
pub mod schema;        // per-type field tables

pub use equality::{equal, equal_dyn, Comparator, Difference, DifferenceKind, SchemaEq};
pub use schema::{DynMessage, Equalizer, Schema};
