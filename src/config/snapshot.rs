// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::api::v1::{
    DestinationSpec, HttpListenerOptions, ListenerOptions, RouteConfigurationOptions,
    RouteOptions, TcpListenerOptions, VirtualHostOptions, WeightedDestinationOptions,
};
use crate::config::loader::load_snapshot;
use crate::equality::{Comparator, Difference};
use crate::errors::SnapshotError;
use crate::schema::Schema;

/// Option set stored in a snapshot file, named as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Listener,
    HttpListener,
    TcpListener,
    RouteConfiguration,
    VirtualHost,
    Route,
    Destination,
    WeightedDestination,
}

impl SnapshotKind {
    pub const ALL: [SnapshotKind; 8] = [
        SnapshotKind::Listener,
        SnapshotKind::HttpListener,
        SnapshotKind::TcpListener,
        SnapshotKind::RouteConfiguration,
        SnapshotKind::VirtualHost,
        SnapshotKind::Route,
        SnapshotKind::Destination,
        SnapshotKind::WeightedDestination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotKind::Listener => "listener",
            SnapshotKind::HttpListener => "http-listener",
            SnapshotKind::TcpListener => "tcp-listener",
            SnapshotKind::RouteConfiguration => "route-configuration",
            SnapshotKind::VirtualHost => "virtual-host",
            SnapshotKind::Route => "route",
            SnapshotKind::Destination => "destination",
            SnapshotKind::WeightedDestination => "weighted-destination",
        }
    }

    /// Fully qualified name of the message stored for this kind.
    pub fn message_name(&self) -> &'static str {
        match self {
            SnapshotKind::Listener => ListenerOptions::schema().name,
            SnapshotKind::HttpListener => HttpListenerOptions::schema().name,
            SnapshotKind::TcpListener => TcpListenerOptions::schema().name,
            SnapshotKind::RouteConfiguration => RouteConfigurationOptions::schema().name,
            SnapshotKind::VirtualHost => VirtualHostOptions::schema().name,
            SnapshotKind::Route => RouteOptions::schema().name,
            SnapshotKind::Destination => DestinationSpec::schema().name,
            SnapshotKind::WeightedDestination => WeightedDestinationOptions::schema().name,
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnapshotKind {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnapshotKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SnapshotError::UnknownKind(s.to_string()))
    }
}

fn diff_files<M>(
    comparator: &Comparator,
    left: &Path,
    right: &Path,
) -> Result<Option<Difference>, SnapshotError>
where
    M: Schema + DeserializeOwned + Default,
{
    let left: M = load_snapshot(left)?;
    let right: M = load_snapshot(right)?;
    Ok(comparator.first_difference(Some(&left), Some(&right))?)
}

/// Load two snapshots of the given kind and report their first difference.
pub fn diff_snapshot_files(
    kind: SnapshotKind,
    comparator: &Comparator,
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
) -> Result<Option<Difference>, SnapshotError> {
    let (left, right) = (left.as_ref(), right.as_ref());
    match kind {
        SnapshotKind::Listener => diff_files::<ListenerOptions>(comparator, left, right),
        SnapshotKind::HttpListener => diff_files::<HttpListenerOptions>(comparator, left, right),
        SnapshotKind::TcpListener => diff_files::<TcpListenerOptions>(comparator, left, right),
        SnapshotKind::RouteConfiguration => {
            diff_files::<RouteConfigurationOptions>(comparator, left, right)
        }
        SnapshotKind::VirtualHost => diff_files::<VirtualHostOptions>(comparator, left, right),
        SnapshotKind::Route => diff_files::<RouteOptions>(comparator, left, right),
        SnapshotKind::Destination => diff_files::<DestinationSpec>(comparator, left, right),
        SnapshotKind::WeightedDestination => {
            diff_files::<WeightedDestinationOptions>(comparator, left, right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::DifferenceKind;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in SnapshotKind::ALL {
            assert_eq!(kind.as_str().parse::<SnapshotKind>().unwrap(), kind);
        }
        assert_eq!(SnapshotKind::Route.message_name(), "gloo.solo.io.RouteOptions");
    }

    #[test]
    fn test_unknown_kind() {
        let err = "gateway".parse::<SnapshotKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown snapshot kind 'gateway'");
    }

    #[test]
    fn test_yaml_and_json_snapshots_compare_equal() {
        let dir = tempfile::tempdir().unwrap();
        let left = write(
            &dir,
            "left.yaml",
            "socket_options:\n  - level: 1\n    name: 9\n    value:\n      int_value: 1\n",
        );
        let right = write(
            &dir,
            "right.json",
            r#"{"socket_options": [{"level": 1, "name": 9, "value": {"int_value": 1}}]}"#,
        );

        let difference =
            diff_snapshot_files(SnapshotKind::Listener, &Comparator::default(), &left, &right)
                .unwrap();
        assert_eq!(difference, None);
    }

    #[test]
    fn test_first_difference_between_files() {
        let dir = tempfile::tempdir().unwrap();
        let left = write(&dir, "left.yaml", "retries:\n  num_retries: 2\n");
        let right = write(&dir, "right.yaml", "retries:\n  num_retries: 3\n");

        let difference =
            diff_snapshot_files(SnapshotKind::Route, &Comparator::default(), &left, &right)
                .unwrap()
                .unwrap();
        assert_eq!(difference.path.to_string(), "retries.num_retries");
        assert_eq!(
            difference.kind,
            DifferenceKind::Scalar {
                left: "2".to_string(),
                right: "3".to_string()
            }
        );
    }

    #[test]
    fn test_missing_snapshot_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let left = write(&dir, "left.yaml", "{}\n");
        let result = diff_snapshot_files(
            SnapshotKind::Destination,
            &Comparator::default(),
            &left,
            dir.path().join("absent.yaml"),
        );
        assert!(matches!(result, Err(SnapshotError::Config(_))));
    }
}
