// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Gateway option messages.
//!
//! Every message is a prost message that also deserializes from YAML or JSON
//! snapshots, and carries a static schema table for the equality engine. Field
//! tables list fields in declaration order with oneof groups last.

/// Implements [`Schema`](crate::schema::Schema) from a field list.
///
/// Each field is written `name: kind`, where kind is one of `scalar`,
/// `message`, `repeated`, `map` or `oneof [alternatives...]`.
macro_rules! message_schema {
    ($ty:ty, $name:literal { $($field:ident: $kind:ident $([$($alt:literal),*])?),* $(,)? }) => {
        impl $crate::schema::Schema for $ty {
            fn schema() -> &'static $crate::schema::MessageSchema<Self> {
                static SCHEMA: $crate::schema::MessageSchema<$ty> = $crate::schema::MessageSchema {
                    name: $name,
                    fields: &[$(field_schema!($ty, $field, $kind $([$($alt),*])?)),*],
                };
                &SCHEMA
            }
        }
    };
}

macro_rules! field_schema {
    ($ty:ty, $field:ident, scalar) => {
        $crate::schema::FieldSchema {
            name: stringify!($field),
            kind: $crate::schema::FieldKind::Scalar,
            get: |m: &$ty| $crate::schema::FieldValue::scalar(&m.$field),
        }
    };
    ($ty:ty, $field:ident, message) => {
        $crate::schema::FieldSchema {
            name: stringify!($field),
            kind: $crate::schema::FieldKind::Message,
            get: |m: &$ty| $crate::schema::FieldValue::message(m.$field.as_ref()),
        }
    };
    ($ty:ty, $field:ident, repeated) => {
        $crate::schema::FieldSchema {
            name: stringify!($field),
            kind: $crate::schema::FieldKind::Repeated,
            get: |m: &$ty| $crate::schema::FieldValue::repeated(&m.$field),
        }
    };
    ($ty:ty, $field:ident, map) => {
        $crate::schema::FieldSchema {
            name: stringify!($field),
            kind: $crate::schema::FieldKind::Map,
            get: |m: &$ty| $crate::schema::FieldValue::map(&m.$field),
        }
    };
    ($ty:ty, $field:ident, oneof [$($alt:literal),*]) => {
        $crate::schema::FieldSchema {
            name: stringify!($field),
            kind: $crate::schema::FieldKind::Variant {
                alternatives: &[$($alt),*],
            },
            get: |m: &$ty| $crate::schema::FieldValue::variant(m.$field.as_ref()),
        }
    };
}

/// Implements [`Oneof`](crate::schema::Oneof) for a prost oneof enum.
/// Each alternative is `Variant = field_number => "field_name"`.
macro_rules! oneof_schema {
    ($ty:ty { $($variant:ident = $number:literal => $name:literal),* $(,)? }) => {
        impl $crate::schema::Oneof for $ty {
            fn selected(&self) -> $crate::schema::Selected<'_> {
                match self {
                    $(Self::$variant(value) => $crate::schema::Selected {
                        number: $number,
                        name: $name,
                        value: $crate::schema::AsElement::as_element(value),
                    },)*
                }
            }
        }
    };
}

pub mod core;
pub mod destination;
pub mod headers;
pub mod http;
pub mod jwt;
pub mod options;
pub mod ratelimit;
pub mod route;
pub mod security;
pub mod wellknown;

pub use self::core::{
    access_log, socket_option, AccessLog, AccessLoggingService, ExtensionConfig, Extensions,
    FileSink, GrpcService, ProxyProtocol, ProxyProtocolRule, ResourceRef, SocketOption,
    SocketState,
};
pub use destination::{
    AwsDestinationSpec, AzureDestinationSpec, GrpcDestinationSpec, InvocationStyle,
    RestDestinationSpec,
};
pub use headers::{HeaderManipulation, HeaderValue, HeaderValueOption};
pub use http::{
    buffer_per_route, Buffer, BufferPerRoute, GrpcWeb, HealthCheck,
    HttpConnectionManagerSettings, TcpProxySettings,
};
pub use jwt::{
    JwtProvider, JwtRouteExtension, JwtStagedRouteExtension, JwtStagedVhostExtension,
    JwtVhostExtension,
};
pub use options::{
    destination_spec, route_options, virtual_host_options, DestinationSpec, HttpListenerOptions,
    ListenerOptions, RouteConfigurationOptions, RouteOptions, TcpListenerOptions,
    VirtualHostOptions, WeightedDestinationOptions,
};
pub use ratelimit::{
    IngressRateLimit, RateLimit, RateLimitAction, RateLimitActions, RateLimitConfigRef,
    RateLimitConfigRefs, RateLimitRouteExtension, RateLimitVhostExtension, TimeUnit,
};
pub use route::{
    upgrade_config, ConnectUpgrade, CorsPolicy, RegexMatchAndSubstitute, RetryBackOff,
    RetryPolicy, RouteAbort, RouteDelay, RouteFaults, UpgradeConfig, WebSocketUpgrade,
};
pub use security::{ext_auth_extension, CsrfPolicy, CustomAuth, ExtAuthExtension, RbacSettings, WafSettings};
pub use wellknown::{BoolValue, Duration, StringValue, UInt32Value};
