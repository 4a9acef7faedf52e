// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by [`Comparator`](crate::equality::Comparator).
//!
//! The plain predicates ([`equal`](crate::equality::equal) and friends) never
//! return these; they fold both cases into an unequal verdict.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EqualityError {
    /// Two present roots of different message types were passed to a
    /// type-erased comparison.
    #[error("Cannot compare '{expected}' with '{found}': message types differ")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The tree nests deeper than the configured bound.
    #[error("Depth limit of {limit} exceeded at '{path}'")]
    DepthExceeded { limit: usize, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let mismatch = EqualityError::TypeMismatch {
            expected: "gloo.solo.io.RouteOptions",
            found: "gloo.solo.io.DestinationSpec",
        };
        assert_eq!(
            mismatch.to_string(),
            "Cannot compare 'gloo.solo.io.RouteOptions' with 'gloo.solo.io.DestinationSpec': message types differ"
        );

        let depth = EqualityError::DepthExceeded {
            limit: 4,
            path: "retries.retry_back_off".to_string(),
        };
        assert_eq!(
            depth.to_string(),
            "Depth limit of 4 exceeded at 'retries.retry_back_off'"
        );
    }
}
