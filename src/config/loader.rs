// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_MAX_DEPTH, MIN_MAX_DEPTH};
use crate::errors::ConfigError;
use crate::observability::messages::snapshot::{EngineConfigLoaded, SnapshotLoaded};
use crate::observability::messages::StructuredLog;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for the equality engine.
///
/// Loaded from a YAML or TOML file. Every field is optional and falls back to
/// the built-in defaults in [`consts`](crate::config::consts).
///
/// # Fields
/// * `max_depth` - Bound on message nesting, root included (defaults to 64)
///
/// # Example
/// ```yaml
/// max_depth: 32
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl EngineConfig {
    /// Get the depth bound, using the built-in default if not configured.
    pub fn get_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Reject a depth bound that would refuse every comparison.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.max_depth {
            Some(depth) if depth < MIN_MAX_DEPTH => Err(ConfigError::InvalidMaxDepth(depth)),
            _ => Ok(()),
        }
    }
}

/// On-disk format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            "toml" => Ok(FileFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
                extension,
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Yaml => "yaml",
            FileFormat::Json => "json",
            FileFormat::Toml => "toml",
        }
    }

    /// Oneof groups are single-key maps (`host_rewrite: a.internal`) in every
    /// format, never YAML `!tag` values.
    fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T, ConfigError> {
        Ok(match self {
            FileFormat::Yaml => serde_yaml::with::singleton_map_recursive::deserialize(
                serde_yaml::Deserializer::from_str(content),
            )?,
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Toml => toml::from_str(content)?,
        })
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load and validate engine configuration from a YAML or TOML file.
///
/// An empty file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let content = read(path)?;

    let config: EngineConfig = if content.trim().is_empty() {
        EngineConfig::default()
    } else {
        format.parse(&content)?
    };
    config.validate()?;

    EngineConfigLoaded {
        path: &path.display().to_string(),
        max_depth: config.get_max_depth(),
    }
    .log();

    Ok(config)
}

/// Load a configuration snapshot of message type `M` from a YAML, JSON or
/// TOML file.
///
/// An empty file yields the default message.
pub fn load_snapshot<M, P>(path: P) -> Result<M, ConfigError>
where
    M: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let content = read(path)?;
    let snapshot: M = if content.trim().is_empty() {
        M::default()
    } else {
        format.parse(&content)?
    };

    SnapshotLoaded {
        path: &path.display().to_string(),
        format: format.as_str(),
        type_name: std::any::type_name::<M>(),
        size_bytes: content.len(),
    }
    .log();

    Ok(snapshot)
}
