// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::wellknown::BoolValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderValue {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

message_schema!(HeaderValue, "headers.options.gloo.solo.io.HeaderValue" {
    key: scalar,
    value: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderValueOption {
    #[prost(message, optional, tag = "1")]
    pub header: Option<HeaderValue>,
    #[prost(message, optional, tag = "2")]
    pub append: Option<BoolValue>,
}

message_schema!(HeaderValueOption, "headers.options.gloo.solo.io.HeaderValueOption" {
    header: message,
    append: message,
});

/// Headers to add, set or remove on requests and responses.
///
/// The `*_to_add` and `*_to_remove` lists are ordered; the `*_to_set` maps
/// are not.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderManipulation {
    #[prost(message, repeated, tag = "1")]
    pub request_headers_to_add: Vec<HeaderValueOption>,
    #[prost(string, repeated, tag = "2")]
    pub request_headers_to_remove: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub response_headers_to_add: Vec<HeaderValueOption>,
    #[prost(string, repeated, tag = "4")]
    pub response_headers_to_remove: Vec<String>,
    #[prost(map = "string, string", tag = "5")]
    pub request_headers_to_set: HashMap<String, String>,
    #[prost(map = "string, string", tag = "6")]
    pub response_headers_to_set: HashMap<String, String>,
}

message_schema!(HeaderManipulation, "headers.options.gloo.solo.io.HeaderManipulation" {
    request_headers_to_add: repeated,
    request_headers_to_remove: repeated,
    response_headers_to_add: repeated,
    response_headers_to_remove: repeated,
    request_headers_to_set: map,
    response_headers_to_set: map,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaEq;

    fn add(key: &str, value: &str) -> HeaderValueOption {
        HeaderValueOption {
            header: Some(HeaderValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
            append: None,
        }
    }

    #[test]
    fn test_added_headers_are_ordered() {
        let a = HeaderManipulation {
            request_headers_to_add: vec![add("x-a", "1"), add("x-b", "2")],
            ..Default::default()
        };
        let b = HeaderManipulation {
            request_headers_to_add: vec![add("x-b", "2"), add("x-a", "1")],
            ..Default::default()
        };
        assert!(!a.schema_eq(&b));
    }

    #[test]
    fn test_append_presence_matters() {
        let plain = add("x-a", "1");
        let mut appended = add("x-a", "1");
        appended.append = Some(BoolValue { value: false });
        assert!(!plain.schema_eq(&appended));
    }
}
