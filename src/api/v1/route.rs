// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-route behavior: retries, CORS, protocol upgrades, rewrites and fault
//! injection.

use super::wellknown::{BoolValue, Duration};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryBackOff {
    #[prost(message, optional, tag = "1")]
    pub base_interval: Option<Duration>,
    #[prost(message, optional, tag = "2")]
    pub max_interval: Option<Duration>,
}

message_schema!(RetryBackOff, "retries.options.gloo.solo.io.RetryBackOff" {
    base_interval: message,
    max_interval: message,
});

/// Retry behavior for a route or virtual host.
///
/// # Example
/// ```
/// use gateway_equality::api::v1::{Duration, RetryPolicy};
///
/// let retries = RetryPolicy {
///     retry_on: "5xx,reset".to_string(),
///     num_retries: 3,
///     per_try_timeout: Some(Duration { seconds: 2, nanos: 0 }),
///     retry_back_off: None,
/// };
/// assert_eq!(retries.num_retries, 3);
/// ```
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    #[prost(string, tag = "1")]
    pub retry_on: String,
    #[prost(uint32, tag = "2")]
    pub num_retries: u32,
    #[prost(message, optional, tag = "3")]
    pub per_try_timeout: Option<Duration>,
    #[prost(message, optional, tag = "4")]
    pub retry_back_off: Option<RetryBackOff>,
}

message_schema!(RetryPolicy, "retries.options.gloo.solo.io.RetryPolicy" {
    retry_on: scalar,
    num_retries: scalar,
    per_try_timeout: message,
    retry_back_off: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsPolicy {
    #[prost(string, repeated, tag = "1")]
    pub allow_origin: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub allow_origin_regex: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub allow_methods: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub allow_headers: Vec<String>,
    #[prost(string, repeated, tag = "5")]
    pub expose_headers: Vec<String>,
    #[prost(string, tag = "6")]
    pub max_age: String,
    #[prost(bool, tag = "7")]
    pub allow_credentials: bool,
    #[prost(bool, tag = "8")]
    pub disable_for_route: bool,
}

message_schema!(CorsPolicy, "cors.options.gloo.solo.io.CorsPolicy" {
    allow_origin: repeated,
    allow_origin_regex: repeated,
    allow_methods: repeated,
    allow_headers: repeated,
    expose_headers: repeated,
    max_age: scalar,
    allow_credentials: scalar,
    disable_for_route: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSocketUpgrade {
    #[prost(message, optional, tag = "1")]
    pub enabled: Option<BoolValue>,
}

message_schema!(WebSocketUpgrade, "protocol_upgrade.options.gloo.solo.io.ProtocolUpgradeConfig.ProtocolUpgradeSpec" {
    enabled: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectUpgrade {
    #[prost(message, optional, tag = "1")]
    pub enabled: Option<BoolValue>,
}

message_schema!(ConnectUpgrade, "protocol_upgrade.options.gloo.solo.io.ProtocolUpgradeConfig.ConnectConfig" {
    enabled: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeConfig {
    #[prost(oneof = "upgrade_config::UpgradeType", tags = "1, 2")]
    pub upgrade_type: Option<upgrade_config::UpgradeType>,
}

pub mod upgrade_config {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum UpgradeType {
        #[prost(message, tag = "1")]
        Websocket(super::WebSocketUpgrade),
        #[prost(message, tag = "2")]
        Connect(super::ConnectUpgrade),
    }

    oneof_schema!(UpgradeType {
        Websocket = 1 => "websocket",
        Connect = 2 => "connect",
    });
}

message_schema!(UpgradeConfig, "protocol_upgrade.options.gloo.solo.io.ProtocolUpgradeConfig" {
    upgrade_type: oneof ["websocket", "connect"],
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexMatchAndSubstitute {
    #[prost(string, tag = "1")]
    pub pattern: String,
    #[prost(string, tag = "2")]
    pub substitution: String,
}

message_schema!(RegexMatchAndSubstitute, "solo.io.envoy.type.matcher.v3.RegexMatchAndSubstitute" {
    pattern: scalar,
    substitution: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteAbort {
    #[prost(float, tag = "1")]
    pub percentage: f32,
    #[prost(uint32, tag = "2")]
    pub http_status: u32,
}

message_schema!(RouteAbort, "fault.options.gloo.solo.io.RouteAbort" {
    percentage: scalar,
    http_status: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteDelay {
    #[prost(float, tag = "1")]
    pub percentage: f32,
    #[prost(message, optional, tag = "2")]
    pub fixed_delay: Option<Duration>,
}

message_schema!(RouteDelay, "fault.options.gloo.solo.io.RouteDelay" {
    percentage: scalar,
    fixed_delay: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteFaults {
    #[prost(message, optional, tag = "1")]
    pub abort: Option<RouteAbort>,
    #[prost(message, optional, tag = "2")]
    pub delay: Option<RouteDelay>,
}

message_schema!(RouteFaults, "fault.options.gloo.solo.io.RouteFaults" {
    abort: message,
    delay: message,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaEq;

    #[test]
    fn test_fault_percentages_follow_float_rules() {
        let nan = RouteAbort {
            percentage: f32::NAN,
            http_status: 503,
        };
        assert!(nan.schema_eq(&nan.clone()));

        let positive = RouteAbort {
            percentage: 0.0,
            http_status: 503,
        };
        let negative = RouteAbort {
            percentage: -0.0,
            http_status: 503,
        };
        assert!(positive.schema_eq(&negative));
    }

    #[test]
    fn test_cors_origins_are_ordered() {
        let a = CorsPolicy {
            allow_origin: vec!["https://a.example".to_string(), "https://b.example".to_string()],
            ..Default::default()
        };
        let mut b = a.clone();
        b.allow_origin.reverse();
        assert!(!a.schema_eq(&b));
    }

    #[test]
    fn test_upgrade_kinds_are_distinct() {
        let websocket = UpgradeConfig {
            upgrade_type: Some(upgrade_config::UpgradeType::Websocket(WebSocketUpgrade::default())),
        };
        let connect = UpgradeConfig {
            upgrade_type: Some(upgrade_config::UpgradeType::Connect(ConnectUpgrade::default())),
        };
        assert!(!websocket.schema_eq(&connect));
    }
}
