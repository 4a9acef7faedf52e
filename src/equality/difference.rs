// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Description of the first mismatch found between two messages.

use std::fmt;

use crate::schema::MapKey;

/// One step from a message towards a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A declared field, or the selected alternative of a oneof group.
    Field(&'static str),
    /// Position in a repeated field.
    Index(usize),
    /// Key of a map entry, rendered the way it prints in a report.
    Key(String),
}

/// Location of a value relative to the root message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for FieldPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        FieldPath(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
                PathSegment::Key(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}

/// Borrowed path segment used while walking; converted to [`PathSegment`] on mismatch.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Step<'v> {
    Field(&'static str),
    Index(usize),
    Key(MapKey<'v>),
}

impl Step<'_> {
    pub(crate) fn to_segment(self) -> PathSegment {
        match self {
            Step::Field(name) => PathSegment::Field(name),
            Step::Index(index) => PathSegment::Index(index),
            Step::Key(key) => PathSegment::Key(key.to_string()),
        }
    }
}

/// Why two values at the same path are unequal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifferenceKind {
    /// One side holds a message and the other does not.
    Presence { left: bool, right: bool },
    /// Both sides hold messages of different types.
    TypeMismatch { left: &'static str, right: &'static str },
    /// Values have different shapes (scalar against message).
    KindMismatch,
    Scalar { left: String, right: String },
    Length { left: usize, right: usize },
    /// A key present on the left is missing on the right.
    MissingKey,
    /// The oneof groups hold different alternatives.
    VariantSelection {
        left: Option<&'static str>,
        right: Option<&'static str>,
    },
    /// A custom equalizer reported the values as unequal.
    Equalizer { type_name: &'static str },
}

fn presence(present: bool) -> &'static str {
    if present {
        "set"
    } else {
        "unset"
    }
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifferenceKind::Presence { left, right } => {
                write!(f, "left is {}, right is {}", presence(*left), presence(*right))
            }
            DifferenceKind::TypeMismatch { left, right } => {
                write!(f, "message type '{}' differs from '{}'", left, right)
            }
            DifferenceKind::KindMismatch => write!(f, "values have different shapes"),
            DifferenceKind::Scalar { left, right } => write!(f, "{} != {}", left, right),
            DifferenceKind::Length { left, right } => {
                write!(f, "length {} != {}", left, right)
            }
            DifferenceKind::MissingKey => write!(f, "key missing on the right"),
            DifferenceKind::VariantSelection { left, right } => write!(
                f,
                "selected alternative {} != {}",
                left.unwrap_or("<unset>"),
                right.unwrap_or("<unset>")
            ),
            DifferenceKind::Equalizer { type_name } => {
                write!(f, "custom equality of '{}' reported a change", type_name)
            }
        }
    }
}

/// First mismatch between two messages, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Fully qualified name of the root message type.
    pub message: &'static str,
    pub path: FieldPath,
    pub kind: DifferenceKind,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.message, self.path, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = FieldPath::from(vec![
            PathSegment::Field("socket_options"),
            PathSegment::Index(1),
            PathSegment::Field("value"),
            PathSegment::Field("int_value"),
        ]);
        assert_eq!(path.to_string(), "socket_options[1].value.int_value");

        let keyed = FieldPath::from(vec![
            PathSegment::Field("configs"),
            PathSegment::Key("\"waf\"".to_string()),
        ]);
        assert_eq!(keyed.to_string(), "configs[\"waf\"]");

        assert_eq!(FieldPath::default().to_string(), "<root>");
        assert!(FieldPath::default().is_root());
    }

    #[test]
    fn test_difference_display() {
        let difference = Difference {
            message: "gloo.solo.io.RouteOptions",
            path: FieldPath::from(vec![PathSegment::Field("host_rewrite_type")]),
            kind: DifferenceKind::VariantSelection {
                left: Some("host_rewrite"),
                right: None,
            },
        };
        assert_eq!(
            difference.to_string(),
            "gloo.solo.io.RouteOptions at host_rewrite_type: selected alternative host_rewrite != <unset>"
        );
    }

    #[test]
    fn test_step_to_segment_renders_keys() {
        assert_eq!(
            Step::Key(MapKey::Str("x-request-id")).to_segment(),
            PathSegment::Key("\"x-request-id\"".to_string())
        );
        assert_eq!(Step::Index(3).to_segment(), PathSegment::Index(3));
    }
}
