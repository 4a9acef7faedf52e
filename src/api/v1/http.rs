// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP and TCP listener settings.

use super::wellknown::{BoolValue, Duration, StringValue, UInt32Value};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConnectionManagerSettings {
    #[prost(message, optional, tag = "1")]
    pub skip_xff_append: Option<BoolValue>,
    #[prost(message, optional, tag = "2")]
    pub via: Option<StringValue>,
    #[prost(message, optional, tag = "3")]
    pub xff_num_trusted_hops: Option<UInt32Value>,
    #[prost(message, optional, tag = "4")]
    pub use_remote_address: Option<BoolValue>,
    #[prost(message, optional, tag = "5")]
    pub idle_timeout: Option<Duration>,
    #[prost(message, optional, tag = "6")]
    pub request_timeout: Option<Duration>,
    #[prost(string, tag = "7")]
    pub server_name: String,
    #[prost(string, repeated, tag = "8")]
    pub upgrades: Vec<String>,
}

message_schema!(HttpConnectionManagerSettings, "hcm.options.gloo.solo.io.HttpConnectionManagerSettings" {
    skip_xff_append: message,
    via: message,
    xff_num_trusted_hops: message,
    use_remote_address: message,
    idle_timeout: message,
    request_timeout: message,
    server_name: scalar,
    upgrades: repeated,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GrpcWeb {
    #[prost(bool, tag = "1")]
    pub disable: bool,
}

message_schema!(GrpcWeb, "grpc_web.options.gloo.solo.io.GrpcWeb" { disable: scalar });

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheck {
    #[prost(string, tag = "1")]
    pub path: String,
}

message_schema!(HealthCheck, "healthcheck.options.gloo.solo.io.HealthCheck" { path: scalar });

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpProxySettings {
    #[prost(message, optional, tag = "1")]
    pub max_connect_attempts: Option<UInt32Value>,
    #[prost(message, optional, tag = "2")]
    pub idle_timeout: Option<Duration>,
}

message_schema!(TcpProxySettings, "tcp.options.gloo.solo.io.TcpProxySettings" {
    max_connect_attempts: message,
    idle_timeout: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Buffer {
    #[prost(message, optional, tag = "1")]
    pub max_request_bytes: Option<UInt32Value>,
}

message_schema!(Buffer, "solo.io.envoy.extensions.filters.http.buffer.v3.Buffer" {
    max_request_bytes: message,
});

/// Per-route buffer override: either disable buffering or replace the limits.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferPerRoute {
    #[prost(oneof = "buffer_per_route::BufferOverride", tags = "2, 3")]
    pub buffer_override: Option<buffer_per_route::BufferOverride>,
}

pub mod buffer_per_route {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum BufferOverride {
        #[prost(bool, tag = "2")]
        Disabled(bool),
        #[prost(message, tag = "3")]
        Buffer(super::Buffer),
    }

    oneof_schema!(BufferOverride {
        Disabled = 2 => "disabled",
        Buffer = 3 => "buffer",
    });
}

message_schema!(BufferPerRoute, "solo.io.envoy.extensions.filters.http.buffer.v3.BufferPerRoute" {
    buffer_override: oneof ["disabled", "buffer"],
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaEq;

    #[test]
    fn test_disabled_override_differs_from_empty_buffer() {
        let disabled = BufferPerRoute {
            buffer_override: Some(buffer_per_route::BufferOverride::Disabled(false)),
        };
        let empty = BufferPerRoute {
            buffer_override: Some(buffer_per_route::BufferOverride::Buffer(Buffer::default())),
        };
        assert!(!disabled.schema_eq(&empty));
        assert!(!disabled.schema_eq(&BufferPerRoute::default()));
    }

    #[test]
    fn test_hcm_timeouts_compare_by_length() {
        let a = HttpConnectionManagerSettings {
            idle_timeout: Some(Duration {
                seconds: 60,
                nanos: 0,
            }),
            ..Default::default()
        };
        let b = HttpConnectionManagerSettings {
            idle_timeout: Some(Duration {
                seconds: 59,
                nanos: 1_000_000_000,
            }),
            ..Default::default()
        };
        assert!(a.schema_eq(&b));
    }
}
