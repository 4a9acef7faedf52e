// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine configuration and snapshot loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Engine configuration loaded from disk.
///
/// # Log Level
/// `info!` - Important operational event
pub struct EngineConfigLoaded<'a> {
    pub path: &'a str,
    pub max_depth: usize,
}

impl Display for EngineConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded engine configuration from '{}': max_depth={}",
            self.path, self.max_depth
        )
    }
}

impl StructuredLog for EngineConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, max_depth = self.max_depth, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "engine_config_loaded",
            name = name,
            path = self.path,
            max_depth = self.max_depth,
        )
    }
}

/// A configuration snapshot parsed from disk.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use gateway_equality::observability::messages::snapshot::SnapshotLoaded;
///
/// let msg = SnapshotLoaded {
///     path: "route-v2.yaml",
///     format: "yaml",
///     type_name: "gateway_equality::api::v1::options::RouteOptions",
///     size_bytes: 2048,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SnapshotLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub type_name: &'a str,
    pub size_bytes: usize,
}

impl Display for SnapshotLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} snapshot '{}' as {} ({} bytes)",
            self.format, self.path, self.type_name, self.size_bytes
        )
    }
}

impl StructuredLog for SnapshotLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            type_name = self.type_name,
            size_bytes = self.size_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "snapshot_loaded",
            name = name,
            path = self.path,
            format = self.format,
            type_name = self.type_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let loaded = SnapshotLoaded {
            path: "route.yaml",
            format: "yaml",
            type_name: "RouteOptions",
            size_bytes: 12,
        };
        assert_eq!(
            loaded.to_string(),
            "Loaded yaml snapshot 'route.yaml' as RouteOptions (12 bytes)"
        );
    }

    #[test]
    fn test_span_can_be_entered_without_subscriber() {
        let config = EngineConfigLoaded {
            path: "engine.yaml",
            max_depth: 64,
        };
        let span = config.span("load");
        let _entered = span.enter();
        config.log();
    }
}
