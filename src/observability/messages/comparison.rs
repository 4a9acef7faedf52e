// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for comparator diagnostics.
//!
//! This module contains message types for logging events related to:
//! * First-difference reports
//! * Depth bound violations
//! * Type-erased comparisons of mismatched message types

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Two messages differ; reports the first mismatch.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use gateway_equality::observability::messages::comparison::DifferenceFound;
///
/// let msg = DifferenceFound {
///     message: "gloo.solo.io.ListenerOptions",
///     path: "socket_options[1].name",
///     reason: "9 != 10",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct DifferenceFound<'a> {
    pub message: &'a str,
    pub path: &'a str,
    pub reason: &'a str,
}

impl Display for DifferenceFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}' differs at '{}': {}",
            self.message, self.path, self.reason
        )
    }
}

impl StructuredLog for DifferenceFound<'_> {
    fn log(&self) {
        tracing::debug!(
            message_type = self.message,
            path = self.path,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "difference_found",
            name = name,
            message_type = self.message,
            path = self.path,
        )
    }
}

/// A comparison nested deeper than the configured bound.
///
/// # Log Level
/// `warn!` - Degraded behavior; the comparison was abandoned
///
/// # Example
/// ```
/// use gateway_equality::observability::messages::comparison::DepthLimitExceeded;
///
/// let msg = DepthLimitExceeded {
///     limit: 64,
///     path: "retries.retry_back_off",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct DepthLimitExceeded<'a> {
    pub limit: usize,
    pub path: &'a str,
}

impl Display for DepthLimitExceeded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Comparison abandoned at '{}': depth limit of {} exceeded",
            self.path, self.limit
        )
    }
}

impl StructuredLog for DepthLimitExceeded<'_> {
    fn log(&self) {
        tracing::warn!(limit = self.limit, path = self.path, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "depth_limit_exceeded",
            name = name,
            limit = self.limit,
            path = self.path,
        )
    }
}

/// A type-erased comparison was handed two different message types.
///
/// # Log Level
/// `warn!` - Caller error
///
/// # Example
/// ```
/// use gateway_equality::observability::messages::comparison::TypeMismatchDetected;
///
/// let msg = TypeMismatchDetected {
///     expected: "gloo.solo.io.RouteOptions",
///     found: "gloo.solo.io.VirtualHostOptions",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct TypeMismatchDetected<'a> {
    pub expected: &'a str,
    pub found: &'a str,
}

impl Display for TypeMismatchDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Refusing to compare '{}' with '{}'",
            self.expected, self.found
        )
    }
}

impl StructuredLog for TypeMismatchDetected<'_> {
    fn log(&self) {
        tracing::warn!(expected = self.expected, found = self.found, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "type_mismatch",
            name = name,
            expected = self.expected,
            found = self.found,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let found = DifferenceFound {
            message: "gloo.solo.io.RouteOptions",
            path: "upgrades",
            reason: "length 1 != 2",
        };
        assert_eq!(
            found.to_string(),
            "'gloo.solo.io.RouteOptions' differs at 'upgrades': length 1 != 2"
        );

        let depth = DepthLimitExceeded {
            limit: 2,
            path: "cors",
        };
        assert_eq!(
            depth.to_string(),
            "Comparison abandoned at 'cors': depth limit of 2 exceeded"
        );
    }
}
