// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtProvider {
    #[prost(string, tag = "1")]
    pub issuer: String,
    #[prost(string, repeated, tag = "2")]
    pub audiences: Vec<String>,
    #[prost(bool, tag = "3")]
    pub keep_token: bool,
    #[prost(string, tag = "4")]
    pub jwks_uri: String,
}

message_schema!(JwtProvider, "jwt.options.gloo.solo.io.Provider" {
    issuer: scalar,
    audiences: repeated,
    keep_token: scalar,
    jwks_uri: scalar,
});

/// JWT providers for a virtual host, keyed by provider name.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtVhostExtension {
    #[prost(map = "string, message", tag = "1")]
    pub providers: HashMap<String, JwtProvider>,
    #[prost(bool, tag = "2")]
    pub allow_missing_or_failed_jwt: bool,
}

message_schema!(JwtVhostExtension, "jwt.options.gloo.solo.io.VhostExtension" {
    providers: map,
    allow_missing_or_failed_jwt: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtStagedVhostExtension {
    #[prost(message, optional, tag = "1")]
    pub before_ext_auth: Option<JwtVhostExtension>,
    #[prost(message, optional, tag = "2")]
    pub after_ext_auth: Option<JwtVhostExtension>,
}

message_schema!(JwtStagedVhostExtension, "jwt.options.gloo.solo.io.JwtStagedVhostExtension" {
    before_ext_auth: message,
    after_ext_auth: message,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtRouteExtension {
    #[prost(bool, tag = "1")]
    pub disable: bool,
}

message_schema!(JwtRouteExtension, "jwt.options.gloo.solo.io.RouteExtension" { disable: scalar });

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtStagedRouteExtension {
    #[prost(message, optional, tag = "1")]
    pub before_ext_auth: Option<JwtRouteExtension>,
    #[prost(message, optional, tag = "2")]
    pub after_ext_auth: Option<JwtRouteExtension>,
}

message_schema!(JwtStagedRouteExtension, "jwt.options.gloo.solo.io.JwtStagedRouteExtension" {
    before_ext_auth: message,
    after_ext_auth: message,
});
