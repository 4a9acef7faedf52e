// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Core listener building blocks: socket options, proxy protocol, access
//! logging and extension settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference to another resource by name and namespace.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRef {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub namespace: String,
}

message_schema!(ResourceRef, "core.solo.io.ResourceRef" {
    name: scalar,
    namespace: scalar,
});

/// Free-form settings for one named extension.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    #[prost(map = "string, string", tag = "1")]
    pub settings: HashMap<String, String>,
}

message_schema!(ExtensionConfig, "gloo.solo.io.ExtensionConfig" { settings: map });

/// Extension settings keyed by extension name.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Extensions {
    #[prost(map = "string, message", tag = "1")]
    pub configs: HashMap<String, ExtensionConfig>,
}

message_schema!(Extensions, "gloo.solo.io.Extensions" { configs: map });

/// Socket state in which a [`SocketOption`] is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SocketState {
    StatePrebind = 0,
    StateBound = 1,
    StateListening = 2,
}

/// A raw socket option applied to a listener socket.
///
/// # Example
/// ```
/// use gateway_equality::api::v1::{socket_option, SocketOption, SocketState};
///
/// let keepalive = SocketOption {
///     description: "enable keepalive".to_string(),
///     level: 1,
///     name: 9,
///     value: Some(socket_option::Value::IntValue(1)),
///     state: SocketState::StatePrebind as i32,
/// };
/// assert_eq!(keepalive.state(), SocketState::StatePrebind);
/// ```
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketOption {
    #[prost(string, tag = "1")]
    pub description: String,
    #[prost(int64, tag = "2")]
    pub level: i64,
    #[prost(int64, tag = "3")]
    pub name: i64,
    #[prost(oneof = "socket_option::Value", tags = "4, 5")]
    pub value: Option<socket_option::Value>,
    #[prost(enumeration = "SocketState", tag = "6")]
    pub state: i32,
}

pub mod socket_option {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Value {
        #[prost(int64, tag = "4")]
        IntValue(i64),
        #[prost(bytes, tag = "5")]
        BufValue(Vec<u8>),
    }

    oneof_schema!(Value {
        IntValue = 4 => "int_value",
        BufValue = 5 => "buf_value",
    });
}

message_schema!(SocketOption, "solo.io.envoy.api.v2.core.SocketOption" {
    description: scalar,
    level: scalar,
    name: scalar,
    value: oneof ["int_value", "buf_value"],
    state: scalar,
});

/// One TLV extraction rule for the PROXY protocol listener filter.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyProtocolRule {
    #[prost(uint32, tag = "1")]
    pub tlv_type: u32,
    #[prost(string, tag = "2")]
    pub metadata_namespace: String,
    #[prost(string, tag = "3")]
    pub metadata_key: String,
}

message_schema!(ProxyProtocolRule, "proxy_protocol.options.gloo.solo.io.ProxyProtocol.Rule" {
    tlv_type: scalar,
    metadata_namespace: scalar,
    metadata_key: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyProtocol {
    #[prost(message, repeated, tag = "1")]
    pub rules: Vec<ProxyProtocolRule>,
    #[prost(bool, tag = "2")]
    pub allow_requests_without_proxy_protocol: bool,
}

message_schema!(ProxyProtocol, "proxy_protocol.options.gloo.solo.io.ProxyProtocol" {
    rules: repeated,
    allow_requests_without_proxy_protocol: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSink {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(string, tag = "2")]
    pub string_format: String,
}

message_schema!(FileSink, "als.options.gloo.solo.io.FileSink" {
    path: scalar,
    string_format: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GrpcService {
    #[prost(string, tag = "1")]
    pub log_name: String,
    #[prost(string, tag = "2")]
    pub static_cluster_name: String,
}

message_schema!(GrpcService, "als.options.gloo.solo.io.GrpcService" {
    log_name: scalar,
    static_cluster_name: scalar,
});

/// One access log sink.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessLog {
    #[prost(oneof = "access_log::OutputDestination", tags = "2, 3")]
    pub output_destination: Option<access_log::OutputDestination>,
}

pub mod access_log {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum OutputDestination {
        #[prost(message, tag = "2")]
        FileSink(super::FileSink),
        #[prost(message, tag = "3")]
        GrpcService(super::GrpcService),
    }

    oneof_schema!(OutputDestination {
        FileSink = 2 => "file_sink",
        GrpcService = 3 => "grpc_service",
    });
}

message_schema!(AccessLog, "als.options.gloo.solo.io.AccessLog" {
    output_destination: oneof ["file_sink", "grpc_service"],
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessLoggingService {
    #[prost(message, repeated, tag = "1")]
    pub access_log: Vec<AccessLog>,
}

message_schema!(AccessLoggingService, "als.options.gloo.solo.io.AccessLoggingService" {
    access_log: repeated,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, Schema};
    use crate::{equal, SchemaEq};

    fn file_log(path: &str) -> AccessLog {
        AccessLog {
            output_destination: Some(access_log::OutputDestination::FileSink(FileSink {
                path: path.to_string(),
                string_format: String::new(),
            })),
        }
    }

    #[test]
    fn test_access_logs_compare_in_order() {
        let a = AccessLoggingService {
            access_log: vec![file_log("/dev/stdout"), file_log("/var/log/gw.log")],
        };
        let b = AccessLoggingService {
            access_log: vec![file_log("/var/log/gw.log"), file_log("/dev/stdout")],
        };
        assert!(a.schema_eq(&a.clone()));
        assert!(!a.schema_eq(&b));
    }

    #[test]
    fn test_output_destination_alternatives_are_distinct() {
        let file = file_log("out");
        let grpc = AccessLog {
            output_destination: Some(access_log::OutputDestination::GrpcService(
                GrpcService::default(),
            )),
        };
        assert!(!equal(Some(&file), Some(&grpc)));
        assert!(equal(Some(&AccessLog::default()), Some(&AccessLog::default())));
    }

    #[test]
    fn test_extension_settings_ignore_insertion_order() {
        let mut first = ExtensionConfig::default();
        first.settings.insert("mode".to_string(), "strict".to_string());
        first.settings.insert("level".to_string(), "2".to_string());
        let mut second = ExtensionConfig::default();
        second.settings.insert("level".to_string(), "2".to_string());
        second.settings.insert("mode".to_string(), "strict".to_string());
        assert!(first.schema_eq(&second));
    }

    #[test]
    fn test_socket_option_state_is_a_scalar() {
        let field = SocketOption::schema().field("state").unwrap();
        assert_eq!(field.kind, FieldKind::Scalar);
        assert_eq!(SocketState::try_from(2).ok(), Some(SocketState::StateListening));
    }
}
