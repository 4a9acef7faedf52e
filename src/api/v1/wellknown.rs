// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Well-known wrapper types.

use crate::schema::{DynMessage, Equalizer, FieldKind, FieldSchema, FieldValue, MessageSchema, Schema};
use serde::{Deserialize, Serialize};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A signed span of time as seconds plus nanoseconds.
///
/// Durations compare by total length, so `1s` equals `0s + 1_000_000_000ns`.
///
/// # Example
/// ```
/// use gateway_equality::api::v1::Duration;
/// use gateway_equality::SchemaEq;
///
/// let a = Duration { seconds: 1, nanos: 0 };
/// let b = Duration { seconds: 0, nanos: 1_000_000_000 };
/// assert!(a.schema_eq(&b));
/// ```
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Duration {
    pub fn total_nanos(&self) -> i128 {
        i128::from(self.seconds) * NANOS_PER_SECOND + i128::from(self.nanos)
    }
}

impl Equalizer for Duration {
    fn equal(&self, other: Option<&dyn DynMessage>) -> bool {
        other
            .and_then(|o| o.as_any().downcast_ref::<Duration>())
            .is_some_and(|o| self.total_nanos() == o.total_nanos())
    }
}

impl Schema for Duration {
    fn schema() -> &'static MessageSchema<Self> {
        static SCHEMA: MessageSchema<Duration> = MessageSchema {
            name: "google.protobuf.Duration",
            fields: &[
                FieldSchema {
                    name: "seconds",
                    kind: FieldKind::Scalar,
                    get: |m: &Duration| FieldValue::scalar(&m.seconds),
                },
                FieldSchema {
                    name: "nanos",
                    kind: FieldKind::Scalar,
                    get: |m: &Duration| FieldValue::scalar(&m.nanos),
                },
            ],
        };
        &SCHEMA
    }

    fn equalizer(&self) -> Option<&dyn Equalizer> {
        Some(self)
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolValue {
    #[prost(bool, tag = "1")]
    pub value: bool,
}

message_schema!(BoolValue, "google.protobuf.BoolValue" { value: scalar });

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct UInt32Value {
    #[prost(uint32, tag = "1")]
    pub value: u32,
}

message_schema!(UInt32Value, "google.protobuf.UInt32Value" { value: scalar });

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct StringValue {
    #[prost(string, tag = "1")]
    pub value: String,
}

message_schema!(StringValue, "google.protobuf.StringValue" { value: scalar });
