// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The recursive walk shared by every equality entry point.
//!
//! A walk returns `Ok(None)` when both sides are equal, `Ok(Some(difference))`
//! at the first mismatch in field declaration order, and `Err` only when the
//! depth bound is exceeded. The walker keeps a stack of borrowed path steps and
//! only materializes an owned [`FieldPath`] when a mismatch is found.

use crate::errors::EqualityError;
use crate::schema::{DynMessage, Element, FieldValue, ListAccess, MapAccess, Scalar, Selected};

use super::difference::{Difference, DifferenceKind, FieldPath, Step};

pub(crate) type Walk = Result<Option<Difference>, EqualityError>;

pub(crate) struct Walker<'v> {
    root: &'static str,
    max_depth: usize,
    path: Vec<Step<'v>>,
}

impl<'v> Walker<'v> {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            root: "<none>",
            max_depth,
            path: Vec::new(),
        }
    }

    /// Compare two optional root messages. A root with an equalizer is
    /// judged by it, exactly like a nested value.
    pub(crate) fn run(
        mut self,
        a: Option<&'v dyn DynMessage>,
        b: Option<&'v dyn DynMessage>,
    ) -> Walk {
        if let Some(root) = a.or(b) {
            self.root = root.type_name();
        }
        self.nested(a, b, 0)
    }

    fn differs(&self, kind: DifferenceKind) -> Difference {
        Difference {
            message: self.root,
            path: self.current_path(),
            kind,
        }
    }

    fn current_path(&self) -> FieldPath {
        FieldPath::from(self.path.iter().map(|step| step.to_segment()).collect::<Vec<_>>())
    }

    /// Null handling, type check, then field-by-field comparison.
    fn messages(
        &mut self,
        a: Option<&'v dyn DynMessage>,
        b: Option<&'v dyn DynMessage>,
        depth: usize,
    ) -> Walk {
        let (a, b) = match (a, b) {
            (None, None) => return Ok(None),
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                return Ok(Some(self.differs(DifferenceKind::Presence {
                    left: a.is_some(),
                    right: b.is_some(),
                })))
            }
        };

        if a.as_any().type_id() != b.as_any().type_id() {
            return Ok(Some(self.differs(DifferenceKind::TypeMismatch {
                left: a.type_name(),
                right: b.type_name(),
            })));
        }

        if depth > self.max_depth {
            return Err(EqualityError::DepthExceeded {
                limit: self.max_depth,
                path: self.current_path().to_string(),
            });
        }

        for index in 0..a.field_count() {
            let (Some(left), Some(right)) = (a.field(index), b.field(index)) else {
                break;
            };
            self.path.push(Step::Field(left.name));
            let outcome = self.fields(left.value, right.value, depth)?;
            self.path.pop();
            if outcome.is_some() {
                return Ok(outcome);
            }
        }

        Ok(None)
    }

    fn fields(&mut self, a: FieldValue<'v>, b: FieldValue<'v>, depth: usize) -> Walk {
        match (a, b) {
            (FieldValue::Scalar(a), FieldValue::Scalar(b)) => Ok(self.scalars(a, b)),
            (FieldValue::Message(a), FieldValue::Message(b)) => self.nested(a, b, depth),
            (FieldValue::Repeated(a), FieldValue::Repeated(b)) => self.lists(a, b, depth),
            (FieldValue::Map(a), FieldValue::Map(b)) => self.maps(a, b, depth),
            (FieldValue::Variant(a), FieldValue::Variant(b)) => self.variants(a, b, depth),
            _ => Ok(Some(self.differs(DifferenceKind::KindMismatch))),
        }
    }

    fn scalars(&self, a: Scalar<'v>, b: Scalar<'v>) -> Option<Difference> {
        if a.same_as(&b) {
            None
        } else {
            Some(self.differs(DifferenceKind::Scalar {
                left: a.to_string(),
                right: b.to_string(),
            }))
        }
    }

    /// A sub-message: the equalizer's verdict if the left side has one,
    /// otherwise structural recursion.
    fn nested(
        &mut self,
        a: Option<&'v dyn DynMessage>,
        b: Option<&'v dyn DynMessage>,
        depth: usize,
    ) -> Walk {
        if let Some(message) = a {
            if let Some(equalizer) = message.as_equalizer() {
                if equalizer.equal(b) {
                    return Ok(None);
                }
                return Ok(Some(self.differs(DifferenceKind::Equalizer {
                    type_name: message.type_name(),
                })));
            }
        }
        self.messages(a, b, depth + 1)
    }

    fn elements(&mut self, a: Element<'v>, b: Element<'v>, depth: usize) -> Walk {
        match (a, b) {
            (Element::Scalar(a), Element::Scalar(b)) => Ok(self.scalars(a, b)),
            (Element::Message(a), Element::Message(b)) => self.nested(a, b, depth),
            _ => Ok(Some(self.differs(DifferenceKind::KindMismatch))),
        }
    }

    /// Ordered comparison; a length mismatch is decided before any element.
    fn lists(&mut self, a: &'v dyn ListAccess, b: &'v dyn ListAccess, depth: usize) -> Walk {
        if a.len() != b.len() {
            return Ok(Some(self.differs(DifferenceKind::Length {
                left: a.len(),
                right: b.len(),
            })));
        }

        for index in 0..a.len() {
            let (Some(left), Some(right)) = (a.element(index), b.element(index)) else {
                break;
            };
            self.path.push(Step::Index(index));
            let outcome = self.elements(left, right, depth)?;
            self.path.pop();
            if outcome.is_some() {
                return Ok(outcome);
            }
        }

        Ok(None)
    }

    /// Keyed comparison. Keys are visited in sorted order so the reported
    /// difference does not depend on hash iteration order.
    fn maps(&mut self, a: &'v dyn MapAccess, b: &'v dyn MapAccess, depth: usize) -> Walk {
        if a.len() != b.len() {
            return Ok(Some(self.differs(DifferenceKind::Length {
                left: a.len(),
                right: b.len(),
            })));
        }

        let mut entries: Vec<_> = a.entries().collect();
        entries.sort_by(|(x, _), (y, _)| x.cmp(y));

        for (key, left) in entries {
            self.path.push(Step::Key(key));
            let outcome = match b.lookup(&key) {
                Some(right) => self.elements(left, right, depth)?,
                None => Some(self.differs(DifferenceKind::MissingKey)),
            };
            self.path.pop();
            if outcome.is_some() {
                return Ok(outcome);
            }
        }

        Ok(None)
    }

    /// Oneof groups are equal when both are unset, or when both hold the same
    /// alternative with equal payloads.
    fn variants(
        &mut self,
        a: Option<Selected<'v>>,
        b: Option<Selected<'v>>,
        depth: usize,
    ) -> Walk {
        match (a, b) {
            (None, None) => Ok(None),
            (Some(a), Some(b)) if a.number == b.number => {
                self.path.push(Step::Field(a.name));
                let outcome = self.elements(a.value, b.value, depth)?;
                self.path.pop();
                Ok(outcome)
            }
            (a, b) => Ok(Some(self.differs(DifferenceKind::VariantSelection {
                left: a.map(|s| s.name),
                right: b.map(|s| s.name),
            }))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::v1::{
        socket_option, BoolValue, Duration, Extensions, ExtensionConfig, SocketOption,
        UInt32Value,
    };
    use crate::equality::difference::PathSegment;
    use std::collections::HashMap;

    fn walk<'v>(
        a: Option<&'v dyn DynMessage>,
        b: Option<&'v dyn DynMessage>,
    ) -> Walk {
        Walker::new(16).run(a, b)
    }

    fn socket(name: i64, value: socket_option::Value) -> SocketOption {
        SocketOption {
            description: "opt".to_string(),
            level: 6,
            name,
            value: Some(value),
            state: 0,
        }
    }

    #[test]
    fn test_both_absent_is_equal() {
        assert_eq!(walk(None, None).unwrap(), None);
    }

    #[test]
    fn test_one_absent_reports_presence() {
        let wrapper = UInt32Value { value: 1 };
        let difference = walk(Some(&wrapper), None).unwrap().unwrap();
        assert_eq!(
            difference.kind,
            DifferenceKind::Presence {
                left: true,
                right: false
            }
        );
        assert!(difference.path.is_root());
        assert_eq!(difference.message, "google.protobuf.UInt32Value");

        let difference = walk(None, Some(&wrapper)).unwrap().unwrap();
        assert_eq!(
            difference.kind,
            DifferenceKind::Presence {
                left: false,
                right: true
            }
        );
    }

    #[test]
    fn test_type_mismatch_is_a_difference() {
        let a = UInt32Value { value: 1 };
        let b = BoolValue { value: true };
        let difference = walk(Some(&a), Some(&b)).unwrap().unwrap();
        assert_eq!(
            difference.kind,
            DifferenceKind::TypeMismatch {
                left: "google.protobuf.UInt32Value",
                right: "google.protobuf.BoolValue"
            }
        );
    }

    #[test]
    fn test_scalar_difference_carries_path_and_values() {
        let a = socket(9, socket_option::Value::IntValue(1));
        let b = socket(10, socket_option::Value::IntValue(1));
        let difference = walk(Some(&a), Some(&b)).unwrap().unwrap();
        assert_eq!(difference.path.to_string(), "name");
        assert_eq!(
            difference.kind,
            DifferenceKind::Scalar {
                left: "9".to_string(),
                right: "10".to_string()
            }
        );
    }

    #[test]
    fn test_variant_payload_difference_names_alternative() {
        let a = socket(9, socket_option::Value::BufValue(vec![1, 2]));
        let b = socket(9, socket_option::Value::BufValue(vec![1, 3]));
        let difference = walk(Some(&a), Some(&b)).unwrap().unwrap();
        assert_eq!(difference.path.to_string(), "value.buf_value");
    }

    #[test]
    fn test_variant_discriminant_is_strict() {
        let a = socket(9, socket_option::Value::IntValue(0));
        let b = socket(9, socket_option::Value::BufValue(Vec::new()));
        let difference = walk(Some(&a), Some(&b)).unwrap().unwrap();
        assert_eq!(
            difference.kind,
            DifferenceKind::VariantSelection {
                left: Some("int_value"),
                right: Some("buf_value")
            }
        );
    }

    #[test]
    fn test_map_missing_key_is_reported_in_sorted_key_order() {
        let mut left = HashMap::new();
        left.insert("b".to_string(), ExtensionConfig::default());
        left.insert("a".to_string(), ExtensionConfig::default());
        let mut right = HashMap::new();
        right.insert("c".to_string(), ExtensionConfig::default());
        right.insert("d".to_string(), ExtensionConfig::default());

        let a = Extensions { configs: left };
        let b = Extensions { configs: right };
        let difference = walk(Some(&a), Some(&b)).unwrap().unwrap();
        assert_eq!(
            difference.path.segments(),
            &[
                PathSegment::Field("configs"),
                PathSegment::Key("\"a\"".to_string())
            ]
        );
        assert_eq!(difference.kind, DifferenceKind::MissingKey);
    }

    #[test]
    fn test_equalizer_verdict_is_used() {
        let a = Duration {
            seconds: 1,
            nanos: 0,
        };
        let b = Duration {
            seconds: 0,
            nanos: 1_000_000_000,
        };
        assert_eq!(walk(Some(&a), Some(&b)).unwrap(), None);
    }

    #[test]
    fn test_depth_bound_is_enforced() {
        let a = SocketOption::default();
        let result = Walker::new(0).run(Some(&a), Some(&a));
        assert!(matches!(
            result,
            Err(EqualityError::DepthExceeded { limit: 0, .. })
        ));
    }
}
