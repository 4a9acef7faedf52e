// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deep equality over schema-described messages.
//!
//! One recursive algorithm serves every message type. For each pair of values
//! the engine applies the null rules (both absent is equal, one absent is not),
//! rejects values of different message types, then compares fields in
//! declaration order:
//!
//! * **Scalars** compare exactly; strings and bytes byte for byte.
//! * **Sub-messages** use the value's [`Equalizer`](crate::schema::Equalizer)
//!   when it has one, and structural recursion otherwise.
//! * **Repeated fields** must have the same length and equal elements at every
//!   index. Order matters.
//! * **Maps** must have the same size, and every key on the left must be present
//!   on the right with an equal value. Iteration order never matters.
//! * **Oneof groups** are equal when both are unset, or when both select the same
//!   alternative and the payloads are equal.
//!
//! [`equal`], [`equal_dyn`] and [`SchemaEq`] are pure: they never log, allocate
//! only transient state and always return a verdict. [`Comparator`] exposes the
//! same walk with explicit errors, a configurable depth bound, a first-difference
//! report and structured logging.
//!
//! # Example
//!
//! ```rust
//! use gateway_equality::api::v1::{HeaderManipulation, HttpListenerOptions};
//! use gateway_equality::{equal, SchemaEq};
//!
//! let mut left = HeaderManipulation::default();
//! left.request_headers_to_set.insert("x-env".to_string(), "prod".to_string());
//! left.request_headers_to_set.insert("x-team".to_string(), "edge".to_string());
//!
//! let mut right = HeaderManipulation::default();
//! right.request_headers_to_set.insert("x-team".to_string(), "edge".to_string());
//! right.request_headers_to_set.insert("x-env".to_string(), "prod".to_string());
//!
//! assert!(left.schema_eq(&right));
//! assert!(equal::<HttpListenerOptions>(None, None));
//! ```

mod difference;
mod engine;


use crate::config::consts::DEFAULT_MAX_DEPTH;
use crate::config::EngineConfig;
use crate::errors::EqualityError;
use crate::observability::messages::comparison::{
    DepthLimitExceeded, DifferenceFound, TypeMismatchDetected,
};
use crate::observability::messages::StructuredLog;
use crate::schema::{DynMessage, Schema};

pub use difference::{Difference, DifferenceKind, FieldPath, PathSegment};

use engine::{Walk, Walker};

fn as_dyn<M: Schema>(message: &M) -> &dyn DynMessage {
    message
}

/// Deep equality of two optional messages of the same type.
///
/// Mismatched types are rejected at compile time. A tree nested deeper than
/// the default depth bound compares as unequal.
pub fn equal<M: Schema>(a: Option<&M>, b: Option<&M>) -> bool {
    equal_dyn(a.map(as_dyn), b.map(as_dyn))
}

/// Deep equality of two optional type-erased messages.
///
/// Values of different message types are unequal.
pub fn equal_dyn(a: Option<&dyn DynMessage>, b: Option<&dyn DynMessage>) -> bool {
    matches!(Walker::new(DEFAULT_MAX_DEPTH).run(a, b), Ok(None))
}

/// Method-call form of [`equal`] for present values.
pub trait SchemaEq {
    fn schema_eq(&self, other: &Self) -> bool;
}

impl<M: Schema> SchemaEq for M {
    fn schema_eq(&self, other: &Self) -> bool {
        equal(Some(self), Some(other))
    }
}

/// Configurable front end to the equality walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    max_depth: usize,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Comparator {
    /// `max_depth` counts message levels, the root included.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.get_max_depth())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Deep equality with the depth bound surfaced as an error.
    pub fn compare<M: Schema>(&self, a: Option<&M>, b: Option<&M>) -> Result<bool, EqualityError> {
        self.compare_dyn(a.map(as_dyn), b.map(as_dyn))
    }

    /// Deep equality of type-erased messages.
    ///
    /// Two present roots of different message types are a caller error and
    /// yield [`EqualityError::TypeMismatch`] instead of a silent `false`.
    pub fn compare_dyn(
        &self,
        a: Option<&dyn DynMessage>,
        b: Option<&dyn DynMessage>,
    ) -> Result<bool, EqualityError> {
        self.check_types(a, b)?;
        self.walk(a, b).map(|difference| difference.is_none())
    }

    /// The first mismatch in declaration order, or `None` when equal.
    pub fn first_difference<M: Schema>(
        &self,
        a: Option<&M>,
        b: Option<&M>,
    ) -> Result<Option<Difference>, EqualityError> {
        let difference = self.walk(a.map(as_dyn), b.map(as_dyn))?;
        if let Some(difference) = &difference {
            let path = difference.path.to_string();
            let reason = difference.kind.to_string();
            DifferenceFound {
                message: difference.message,
                path: &path,
                reason: &reason,
            }
            .log();
        }
        Ok(difference)
    }

    fn check_types(
        &self,
        a: Option<&dyn DynMessage>,
        b: Option<&dyn DynMessage>,
    ) -> Result<(), EqualityError> {
        if let (Some(a), Some(b)) = (a, b) {
            if a.as_any().type_id() != b.as_any().type_id() {
                TypeMismatchDetected {
                    expected: a.type_name(),
                    found: b.type_name(),
                }
                .log();
                return Err(EqualityError::TypeMismatch {
                    expected: a.type_name(),
                    found: b.type_name(),
                });
            }
        }
        Ok(())
    }

    fn walk(&self, a: Option<&dyn DynMessage>, b: Option<&dyn DynMessage>) -> Walk {
        let result = Walker::new(self.max_depth).run(a, b);
        if let Err(EqualityError::DepthExceeded { limit, path }) = &result {
            DepthLimitExceeded {
                limit: *limit,
                path,
            }
            .log();
        }
        result
    }
}
