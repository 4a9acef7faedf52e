// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Top-level option sets attached to listeners, virtual hosts, routes and
//! destinations.

use super::core::{AccessLoggingService, Extensions, ProxyProtocol, SocketOption};
use super::destination::{
    AwsDestinationSpec, AzureDestinationSpec, GrpcDestinationSpec, RestDestinationSpec,
};
use super::headers::HeaderManipulation;
use super::http::{
    Buffer, BufferPerRoute, GrpcWeb, HealthCheck, HttpConnectionManagerSettings, TcpProxySettings,
};
use super::jwt::{
    JwtStagedRouteExtension, JwtStagedVhostExtension, JwtRouteExtension, JwtVhostExtension,
};
use super::ratelimit::{
    IngressRateLimit, RateLimitConfigRefs, RateLimitRouteExtension, RateLimitVhostExtension,
};
use super::route::{CorsPolicy, RegexMatchAndSubstitute, RetryPolicy, RouteFaults, UpgradeConfig};
use super::security::{CsrfPolicy, ExtAuthExtension, RbacSettings, WafSettings};
use super::wellknown::{BoolValue, Duration, StringValue, UInt32Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Options for a listener, applied to every connection it accepts.
///
/// # Example
/// ```
/// use gateway_equality::api::v1::{ListenerOptions, UInt32Value};
/// use gateway_equality::SchemaEq;
///
/// let a = ListenerOptions {
///     per_connection_buffer_limit_bytes: Some(UInt32Value { value: 32768 }),
///     ..Default::default()
/// };
/// assert!(a.schema_eq(&a.clone()));
/// assert!(!a.schema_eq(&ListenerOptions::default()));
/// ```
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerOptions {
    #[prost(message, optional, tag = "1")]
    pub access_logging_service: Option<AccessLoggingService>,
    #[prost(message, optional, tag = "2")]
    pub extensions: Option<Extensions>,
    #[prost(message, optional, tag = "3")]
    pub per_connection_buffer_limit_bytes: Option<UInt32Value>,
    #[prost(message, repeated, tag = "4")]
    pub socket_options: Vec<SocketOption>,
    #[prost(message, optional, tag = "5")]
    pub proxy_protocol: Option<ProxyProtocol>,
}

message_schema!(ListenerOptions, "gloo.solo.io.ListenerOptions" {
    access_logging_service: message,
    extensions: message,
    per_connection_buffer_limit_bytes: message,
    socket_options: repeated,
    proxy_protocol: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfigurationOptions {
    #[prost(message, optional, tag = "1")]
    pub max_direct_response_body_size_bytes: Option<UInt32Value>,
}

message_schema!(RouteConfigurationOptions, "gloo.solo.io.RouteConfigurationOptions" {
    max_direct_response_body_size_bytes: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpListenerOptions {
    #[prost(message, optional, tag = "1")]
    pub grpc_web: Option<GrpcWeb>,
    #[prost(message, optional, tag = "2")]
    pub http_connection_manager_settings: Option<HttpConnectionManagerSettings>,
    #[prost(message, optional, tag = "3")]
    pub health_check: Option<HealthCheck>,
    #[prost(message, optional, tag = "4")]
    pub extensions: Option<Extensions>,
    #[prost(message, optional, tag = "5")]
    pub waf: Option<WafSettings>,
    #[prost(message, optional, tag = "6")]
    pub buffer: Option<Buffer>,
    #[prost(message, optional, tag = "7")]
    pub csrf: Option<CsrfPolicy>,
    #[prost(message, optional, tag = "8")]
    pub sanitize_cluster_header: Option<BoolValue>,
    #[prost(message, optional, tag = "9")]
    pub leftmost_xff_address: Option<BoolValue>,
}

message_schema!(HttpListenerOptions, "gloo.solo.io.HttpListenerOptions" {
    grpc_web: message,
    http_connection_manager_settings: message,
    health_check: message,
    extensions: message,
    waf: message,
    buffer: message,
    csrf: message,
    sanitize_cluster_header: message,
    leftmost_xff_address: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpListenerOptions {
    #[prost(message, optional, tag = "1")]
    pub tcp_proxy_settings: Option<TcpProxySettings>,
}

message_schema!(TcpListenerOptions, "gloo.solo.io.TcpListenerOptions" {
    tcp_proxy_settings: message,
});

/// Options shared by every route of a virtual host.
///
/// Rate limits come in three stages (early, regular and the legacy unstaged
/// slot), each either inline or as config references. JWT is either a single
/// extension or staged around external auth.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualHostOptions {
    #[prost(message, optional, tag = "1")]
    pub extensions: Option<Extensions>,
    #[prost(message, optional, tag = "2")]
    pub retries: Option<RetryPolicy>,
    #[prost(message, optional, tag = "3")]
    pub header_manipulation: Option<HeaderManipulation>,
    #[prost(message, optional, tag = "4")]
    pub cors: Option<CorsPolicy>,
    #[prost(message, optional, tag = "5")]
    pub ratelimit_basic: Option<IngressRateLimit>,
    #[prost(message, optional, tag = "6")]
    pub waf: Option<WafSettings>,
    #[prost(message, optional, tag = "7")]
    pub rbac: Option<RbacSettings>,
    #[prost(message, optional, tag = "8")]
    pub extauth: Option<ExtAuthExtension>,
    #[prost(message, optional, tag = "9")]
    pub buffer_per_route: Option<BufferPerRoute>,
    #[prost(message, optional, tag = "10")]
    pub csrf: Option<CsrfPolicy>,
    #[prost(message, optional, tag = "11")]
    pub include_request_attempt_count: Option<BoolValue>,
    #[prost(message, optional, tag = "12")]
    pub include_attempt_count_in_response: Option<BoolValue>,
    #[prost(oneof = "virtual_host_options::RateLimitEarlyConfigType", tags = "20, 21")]
    pub rate_limit_early_config_type: Option<virtual_host_options::RateLimitEarlyConfigType>,
    #[prost(oneof = "virtual_host_options::RateLimitConfigType", tags = "22, 23")]
    pub rate_limit_config_type: Option<virtual_host_options::RateLimitConfigType>,
    #[prost(oneof = "virtual_host_options::RateLimitRegularConfigType", tags = "24, 25")]
    pub rate_limit_regular_config_type: Option<virtual_host_options::RateLimitRegularConfigType>,
    #[prost(oneof = "virtual_host_options::JwtConfig", tags = "30, 31")]
    pub jwt_config: Option<virtual_host_options::JwtConfig>,
}

pub mod virtual_host_options {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RateLimitEarlyConfigType {
        #[prost(message, tag = "20")]
        RatelimitEarly(super::RateLimitVhostExtension),
        #[prost(message, tag = "21")]
        RateLimitEarlyConfigs(super::RateLimitConfigRefs),
    }

    oneof_schema!(RateLimitEarlyConfigType {
        RatelimitEarly = 20 => "ratelimit_early",
        RateLimitEarlyConfigs = 21 => "rate_limit_early_configs",
    });

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RateLimitConfigType {
        #[prost(message, tag = "22")]
        Ratelimit(super::RateLimitVhostExtension),
        #[prost(message, tag = "23")]
        RateLimitConfigs(super::RateLimitConfigRefs),
    }

    oneof_schema!(RateLimitConfigType {
        Ratelimit = 22 => "ratelimit",
        RateLimitConfigs = 23 => "rate_limit_configs",
    });

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RateLimitRegularConfigType {
        #[prost(message, tag = "24")]
        RatelimitRegular(super::RateLimitVhostExtension),
        #[prost(message, tag = "25")]
        RateLimitRegularConfigs(super::RateLimitConfigRefs),
    }

    oneof_schema!(RateLimitRegularConfigType {
        RatelimitRegular = 24 => "ratelimit_regular",
        RateLimitRegularConfigs = 25 => "rate_limit_regular_configs",
    });

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum JwtConfig {
        #[prost(message, tag = "30")]
        Jwt(super::JwtVhostExtension),
        #[prost(message, tag = "31")]
        JwtStaged(super::JwtStagedVhostExtension),
    }

    oneof_schema!(JwtConfig {
        Jwt = 30 => "jwt",
        JwtStaged = 31 => "jwt_staged",
    });
}

message_schema!(VirtualHostOptions, "gloo.solo.io.VirtualHostOptions" {
    extensions: message,
    retries: message,
    header_manipulation: message,
    cors: message,
    ratelimit_basic: message,
    waf: message,
    rbac: message,
    extauth: message,
    buffer_per_route: message,
    csrf: message,
    include_request_attempt_count: message,
    include_attempt_count_in_response: message,
    rate_limit_early_config_type: oneof ["ratelimit_early", "rate_limit_early_configs"],
    rate_limit_config_type: oneof ["ratelimit", "rate_limit_configs"],
    rate_limit_regular_config_type: oneof ["ratelimit_regular", "rate_limit_regular_configs"],
    jwt_config: oneof ["jwt", "jwt_staged"],
});

/// Options for a single route.
///
/// # Example
/// ```
/// use gateway_equality::api::v1::{route_options, RouteOptions, StringValue};
/// use gateway_equality::SchemaEq;
///
/// let rewrite = |host: &str| RouteOptions {
///     prefix_rewrite: Some(StringValue { value: "/".to_string() }),
///     host_rewrite_type: Some(route_options::HostRewriteType::HostRewrite(host.to_string())),
///     ..Default::default()
/// };
/// assert!(rewrite("api.internal").schema_eq(&rewrite("api.internal")));
/// assert!(!rewrite("api.internal").schema_eq(&rewrite("web.internal")));
/// ```
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    #[prost(message, optional, tag = "1")]
    pub faults: Option<RouteFaults>,
    #[prost(message, optional, tag = "2")]
    pub prefix_rewrite: Option<StringValue>,
    #[prost(message, optional, tag = "3")]
    pub timeout: Option<Duration>,
    #[prost(message, optional, tag = "4")]
    pub retries: Option<RetryPolicy>,
    #[prost(message, optional, tag = "5")]
    pub extensions: Option<Extensions>,
    #[prost(message, optional, tag = "6")]
    pub header_manipulation: Option<HeaderManipulation>,
    #[prost(message, optional, tag = "7")]
    pub cors: Option<CorsPolicy>,
    #[prost(message, repeated, tag = "8")]
    pub upgrades: Vec<UpgradeConfig>,
    #[prost(message, optional, tag = "9")]
    pub ratelimit_basic: Option<IngressRateLimit>,
    #[prost(message, optional, tag = "10")]
    pub waf: Option<WafSettings>,
    #[prost(message, optional, tag = "11")]
    pub rbac: Option<RbacSettings>,
    #[prost(message, optional, tag = "12")]
    pub extauth: Option<ExtAuthExtension>,
    #[prost(message, optional, tag = "13")]
    pub buffer_per_route: Option<BufferPerRoute>,
    #[prost(message, optional, tag = "14")]
    pub csrf: Option<CsrfPolicy>,
    #[prost(map = "string, message", tag = "15")]
    pub envoy_metadata: HashMap<String, StringValue>,
    #[prost(message, optional, tag = "16")]
    pub regex_rewrite: Option<RegexMatchAndSubstitute>,
    #[prost(message, optional, tag = "17")]
    pub max_stream_duration: Option<route_options::MaxStreamDuration>,
    #[prost(message, optional, tag = "18")]
    pub idle_timeout: Option<Duration>,
    #[prost(oneof = "route_options::HostRewriteType", tags = "40, 41, 42")]
    pub host_rewrite_type: Option<route_options::HostRewriteType>,
    #[prost(oneof = "route_options::RateLimitEarlyConfigType", tags = "50, 51")]
    pub rate_limit_early_config_type: Option<route_options::RateLimitEarlyConfigType>,
    #[prost(oneof = "route_options::RateLimitConfigType", tags = "52, 53")]
    pub rate_limit_config_type: Option<route_options::RateLimitConfigType>,
    #[prost(oneof = "route_options::RateLimitRegularConfigType", tags = "54, 55")]
    pub rate_limit_regular_config_type: Option<route_options::RateLimitRegularConfigType>,
    #[prost(oneof = "route_options::JwtConfig", tags = "60, 61")]
    pub jwt_config: Option<route_options::JwtConfig>,
}

pub mod route_options {
    use super::Duration;
    use serde::{Deserialize, Serialize};

    /// Stream duration limits for a route.
    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    pub struct MaxStreamDuration {
        #[prost(message, optional, tag = "1")]
        pub max_stream_duration: Option<Duration>,
        #[prost(message, optional, tag = "2")]
        pub grpc_timeout_header_max: Option<Duration>,
        #[prost(message, optional, tag = "3")]
        pub grpc_timeout_header_offset: Option<Duration>,
    }

    message_schema!(MaxStreamDuration, "gloo.solo.io.RouteOptions.MaxStreamDuration" {
        max_stream_duration: message,
        grpc_timeout_header_max: message,
        grpc_timeout_header_offset: message,
    });

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum HostRewriteType {
        #[prost(string, tag = "40")]
        HostRewrite(String),
        #[prost(message, tag = "41")]
        AutoHostRewrite(super::BoolValue),
        #[prost(message, tag = "42")]
        HostRewritePathRegex(super::RegexMatchAndSubstitute),
    }

    oneof_schema!(HostRewriteType {
        HostRewrite = 40 => "host_rewrite",
        AutoHostRewrite = 41 => "auto_host_rewrite",
        HostRewritePathRegex = 42 => "host_rewrite_path_regex",
    });

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RateLimitEarlyConfigType {
        #[prost(message, tag = "50")]
        RatelimitEarly(super::RateLimitRouteExtension),
        #[prost(message, tag = "51")]
        RateLimitEarlyConfigs(super::RateLimitConfigRefs),
    }

    oneof_schema!(RateLimitEarlyConfigType {
        RatelimitEarly = 50 => "ratelimit_early",
        RateLimitEarlyConfigs = 51 => "rate_limit_early_configs",
    });

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RateLimitConfigType {
        #[prost(message, tag = "52")]
        Ratelimit(super::RateLimitRouteExtension),
        #[prost(message, tag = "53")]
        RateLimitConfigs(super::RateLimitConfigRefs),
    }

    oneof_schema!(RateLimitConfigType {
        Ratelimit = 52 => "ratelimit",
        RateLimitConfigs = 53 => "rate_limit_configs",
    });

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RateLimitRegularConfigType {
        #[prost(message, tag = "54")]
        RatelimitRegular(super::RateLimitRouteExtension),
        #[prost(message, tag = "55")]
        RateLimitRegularConfigs(super::RateLimitConfigRefs),
    }

    oneof_schema!(RateLimitRegularConfigType {
        RatelimitRegular = 54 => "ratelimit_regular",
        RateLimitRegularConfigs = 55 => "rate_limit_regular_configs",
    });

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum JwtConfig {
        #[prost(message, tag = "60")]
        Jwt(super::JwtRouteExtension),
        #[prost(message, tag = "61")]
        JwtStaged(super::JwtStagedRouteExtension),
    }

    oneof_schema!(JwtConfig {
        Jwt = 60 => "jwt",
        JwtStaged = 61 => "jwt_staged",
    });
}

message_schema!(RouteOptions, "gloo.solo.io.RouteOptions" {
    faults: message,
    prefix_rewrite: message,
    timeout: message,
    retries: message,
    extensions: message,
    header_manipulation: message,
    cors: message,
    upgrades: repeated,
    ratelimit_basic: message,
    waf: message,
    rbac: message,
    extauth: message,
    buffer_per_route: message,
    csrf: message,
    envoy_metadata: map,
    regex_rewrite: message,
    max_stream_duration: message,
    idle_timeout: message,
    host_rewrite_type: oneof ["host_rewrite", "auto_host_rewrite", "host_rewrite_path_regex"],
    rate_limit_early_config_type: oneof ["ratelimit_early", "rate_limit_early_configs"],
    rate_limit_config_type: oneof ["ratelimit", "rate_limit_configs"],
    rate_limit_regular_config_type: oneof ["ratelimit_regular", "rate_limit_regular_configs"],
    jwt_config: oneof ["jwt", "jwt_staged"],
});

/// Function-level routing for a destination; at most one spec applies.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationSpec {
    #[prost(oneof = "destination_spec::DestinationType", tags = "1, 2, 3, 4")]
    pub destination_type: Option<destination_spec::DestinationType>,
}

pub mod destination_spec {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum DestinationType {
        #[prost(message, tag = "1")]
        Aws(super::AwsDestinationSpec),
        #[prost(message, tag = "2")]
        Azure(super::AzureDestinationSpec),
        #[prost(message, tag = "3")]
        Rest(super::RestDestinationSpec),
        #[prost(message, tag = "4")]
        Grpc(super::GrpcDestinationSpec),
    }

    oneof_schema!(DestinationType {
        Aws = 1 => "aws",
        Azure = 2 => "azure",
        Rest = 3 => "rest",
        Grpc = 4 => "grpc",
    });
}

message_schema!(DestinationSpec, "gloo.solo.io.DestinationSpec" {
    destination_type: oneof ["aws", "azure", "rest", "grpc"],
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedDestinationOptions {
    #[prost(message, optional, tag = "1")]
    pub header_manipulation: Option<HeaderManipulation>,
    #[prost(message, optional, tag = "2")]
    pub extensions: Option<Extensions>,
    #[prost(message, optional, tag = "3")]
    pub extauth: Option<ExtAuthExtension>,
    #[prost(message, optional, tag = "4")]
    pub buffer_per_route: Option<BufferPerRoute>,
    #[prost(message, optional, tag = "5")]
    pub csrf: Option<CsrfPolicy>,
}

message_schema!(WeightedDestinationOptions, "gloo.solo.io.WeightedDestinationOptions" {
    header_manipulation: message,
    extensions: message,
    extauth: message,
    buffer_per_route: message,
    csrf: message,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::v1::{socket_option, JwtProvider, RateLimitConfigRef, UpgradeConfig};
    use crate::schema::{FieldKind, Schema};
    use crate::{equal, SchemaEq};
    use prost::Message;

    fn config_refs(name: &str) -> RateLimitConfigRefs {
        RateLimitConfigRefs {
            refs: vec![RateLimitConfigRef {
                name: name.to_string(),
                namespace: "gloo-system".to_string(),
            }],
        }
    }

    fn sample_route() -> RouteOptions {
        let mut route = RouteOptions {
            prefix_rewrite: Some(StringValue {
                value: "/v2".to_string(),
            }),
            timeout: Some(Duration {
                seconds: 30,
                nanos: 0,
            }),
            upgrades: vec![UpgradeConfig::default()],
            host_rewrite_type: Some(route_options::HostRewriteType::AutoHostRewrite(BoolValue {
                value: true,
            })),
            rate_limit_config_type: Some(route_options::RateLimitConfigType::RateLimitConfigs(
                config_refs("global"),
            )),
            ..Default::default()
        };
        route.envoy_metadata.insert(
            "owner".to_string(),
            StringValue {
                value: "edge".to_string(),
            },
        );
        route
    }

    #[test]
    fn test_oneof_groups_are_listed_last() {
        let kinds: Vec<FieldKind> = RouteOptions::schema().fields.iter().map(|f| f.kind).collect();
        let first_variant = kinds
            .iter()
            .position(|k| matches!(k, FieldKind::Variant { .. }))
            .unwrap();
        assert!(kinds[first_variant..]
            .iter()
            .all(|k| matches!(k, FieldKind::Variant { .. })));
        assert_eq!(RouteOptions::schema().fields.len(), 23);
    }

    #[test]
    fn test_wire_round_trip_preserves_equality() {
        let route = sample_route();
        let decoded = RouteOptions::decode(route.encode_to_vec().as_slice()).unwrap();
        assert!(route.schema_eq(&decoded));

        let listener = ListenerOptions {
            socket_options: vec![SocketOption {
                description: "reuse port".to_string(),
                level: 1,
                name: 15,
                value: Some(socket_option::Value::BufValue(vec![0, 0, 0, 1])),
                state: 1,
            }],
            ..Default::default()
        };
        let decoded = ListenerOptions::decode(listener.encode_to_vec().as_slice()).unwrap();
        assert!(listener.schema_eq(&decoded));
    }

    #[test]
    fn test_same_refs_in_different_rate_limit_stages_differ() {
        let early = RouteOptions {
            rate_limit_early_config_type: Some(
                route_options::RateLimitEarlyConfigType::RateLimitEarlyConfigs(config_refs("global")),
            ),
            ..Default::default()
        };
        let regular = RouteOptions {
            rate_limit_regular_config_type: Some(
                route_options::RateLimitRegularConfigType::RateLimitRegularConfigs(config_refs(
                    "global",
                )),
            ),
            ..Default::default()
        };
        assert!(!early.schema_eq(&regular));
    }

    #[test]
    fn test_inline_and_referenced_rate_limits_differ() {
        let inline = VirtualHostOptions {
            rate_limit_config_type: Some(virtual_host_options::RateLimitConfigType::Ratelimit(
                RateLimitVhostExtension::default(),
            )),
            ..Default::default()
        };
        let referenced = VirtualHostOptions {
            rate_limit_config_type: Some(
                virtual_host_options::RateLimitConfigType::RateLimitConfigs(
                    RateLimitConfigRefs::default(),
                ),
            ),
            ..Default::default()
        };
        assert!(!inline.schema_eq(&referenced));
    }

    #[test]
    fn test_virtual_host_yaml_snapshot() {
        let yaml = r#"
retries:
  retry_on: 5xx
  num_retries: 2
jwt_config:
  jwt:
    providers:
      okta:
        issuer: https://okta.example
        audiences: [gateway]
"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("virtual-host.yaml");
        std::fs::write(&path, yaml).unwrap();
        let parsed: VirtualHostOptions = crate::config::load_snapshot(&path).unwrap();

        let mut providers = HashMap::new();
        providers.insert(
            "okta".to_string(),
            JwtProvider {
                issuer: "https://okta.example".to_string(),
                audiences: vec!["gateway".to_string()],
                ..Default::default()
            },
        );
        let expected = VirtualHostOptions {
            retries: Some(RetryPolicy {
                retry_on: "5xx".to_string(),
                num_retries: 2,
                ..Default::default()
            }),
            jwt_config: Some(virtual_host_options::JwtConfig::Jwt(JwtVhostExtension {
                providers,
                allow_missing_or_failed_jwt: false,
            })),
            ..Default::default()
        };
        assert!(equal(Some(&parsed), Some(&expected)));
    }

    #[test]
    fn test_destination_spec_selection() {
        let aws = DestinationSpec {
            destination_type: Some(destination_spec::DestinationType::Aws(AwsDestinationSpec {
                logical_name: "checkout".to_string(),
                ..Default::default()
            })),
        };
        let azure = DestinationSpec {
            destination_type: Some(destination_spec::DestinationType::Azure(
                AzureDestinationSpec {
                    function_name: "checkout".to_string(),
                },
            )),
        };
        assert!(!aws.schema_eq(&azure));
        assert!(DestinationSpec::default().schema_eq(&DestinationSpec::default()));
    }

    #[test]
    fn test_unused_message_types_compare_equal_when_default() {
        assert!(equal(
            Some(&WeightedDestinationOptions::default()),
            Some(&WeightedDestinationOptions::default())
        ));
        assert!(equal(
            Some(&TcpListenerOptions::default()),
            Some(&TcpListenerOptions::default())
        ));
        assert!(equal(
            Some(&RouteConfigurationOptions::default()),
            Some(&RouteConfigurationOptions::default())
        ));
    }
}
