// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rate limiting: basic ingress limits, inline actions and config references.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TimeUnit {
    Unknown = 0,
    Second = 1,
    Minute = 2,
    Hour = 3,
    Day = 4,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimit {
    #[prost(enumeration = "TimeUnit", tag = "1")]
    pub unit: i32,
    #[prost(uint32, tag = "2")]
    pub requests_per_unit: u32,
}

message_schema!(RateLimit, "ratelimit.api.solo.io.RateLimit" {
    unit: scalar,
    requests_per_unit: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressRateLimit {
    #[prost(message, optional, tag = "1")]
    pub authorized_limits: Option<RateLimit>,
    #[prost(message, optional, tag = "2")]
    pub anonymous_limits: Option<RateLimit>,
}

message_schema!(IngressRateLimit, "ratelimit.options.gloo.solo.io.IngressRateLimit" {
    authorized_limits: message,
    anonymous_limits: message,
});

/// Produces one descriptor entry from a request header.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitAction {
    #[prost(string, tag = "1")]
    pub descriptor_key: String,
    #[prost(string, tag = "2")]
    pub header_name: String,
}

message_schema!(RateLimitAction, "ratelimit.api.solo.io.Action" {
    descriptor_key: scalar,
    header_name: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitActions {
    #[prost(message, repeated, tag = "1")]
    pub actions: Vec<RateLimitAction>,
}

message_schema!(RateLimitActions, "ratelimit.api.solo.io.RateLimitActions" { actions: repeated });

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitVhostExtension {
    #[prost(message, repeated, tag = "1")]
    pub rate_limits: Vec<RateLimitActions>,
}

message_schema!(RateLimitVhostExtension, "ratelimit.options.gloo.solo.io.RateLimitVhostExtension" {
    rate_limits: repeated,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitRouteExtension {
    #[prost(bool, tag = "1")]
    pub include_vh_rate_limits: bool,
    #[prost(message, repeated, tag = "2")]
    pub rate_limits: Vec<RateLimitActions>,
}

message_schema!(RateLimitRouteExtension, "ratelimit.options.gloo.solo.io.RateLimitRouteExtension" {
    include_vh_rate_limits: scalar,
    rate_limits: repeated,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfigRef {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub namespace: String,
}

message_schema!(RateLimitConfigRef, "ratelimit.options.gloo.solo.io.RateLimitConfigRef" {
    name: scalar,
    namespace: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfigRefs {
    #[prost(message, repeated, tag = "1")]
    pub refs: Vec<RateLimitConfigRef>,
}

message_schema!(RateLimitConfigRefs, "ratelimit.options.gloo.solo.io.RateLimitConfigRefs" {
    refs: repeated,
});
