// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod snapshot;

pub mod consts;

pub use loader::{load_config, load_snapshot, EngineConfig, FileFormat};
pub use snapshot::{diff_snapshot_files, SnapshotKind};
