// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod equality;
mod snapshot;

pub use config::ConfigError;
pub use equality::EqualityError;
pub use snapshot::SnapshotError;
