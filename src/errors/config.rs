// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading engine configuration and snapshots from disk.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("max_depth must be at least 1, got {0}")]
    InvalidMaxDepth(usize),

    #[error("Unsupported file format '{extension}' for '{path}'")]
    UnsupportedFormat { path: String, extension: String },
}
