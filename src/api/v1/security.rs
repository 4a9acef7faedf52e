// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! External auth, CSRF, RBAC and WAF settings.

use super::core::ResourceRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomAuth {
    #[prost(map = "string, string", tag = "1")]
    pub context_extensions: HashMap<String, String>,
    #[prost(string, tag = "2")]
    pub name: String,
}

message_schema!(CustomAuth, "enterprise.gloo.solo.io.CustomAuth" {
    context_extensions: map,
    name: scalar,
});

/// External auth for a virtual host, route or weighted destination: disabled,
/// a reference to an auth config, or a custom auth server.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtAuthExtension {
    #[prost(oneof = "ext_auth_extension::Spec", tags = "1, 2, 3")]
    pub spec: Option<ext_auth_extension::Spec>,
}

pub mod ext_auth_extension {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Spec {
        #[prost(bool, tag = "1")]
        Disable(bool),
        #[prost(message, tag = "2")]
        ConfigRef(super::ResourceRef),
        #[prost(message, tag = "3")]
        CustomAuth(super::CustomAuth),
    }

    oneof_schema!(Spec {
        Disable = 1 => "disable",
        ConfigRef = 2 => "config_ref",
        CustomAuth = 3 => "custom_auth",
    });
}

message_schema!(ExtAuthExtension, "enterprise.gloo.solo.io.ExtAuthExtension" {
    spec: oneof ["disable", "config_ref", "custom_auth"],
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CsrfPolicy {
    #[prost(bool, tag = "1")]
    pub filter_enabled: bool,
    #[prost(bool, tag = "2")]
    pub shadow_enabled: bool,
    #[prost(string, repeated, tag = "3")]
    pub additional_origins: Vec<String>,
}

message_schema!(CsrfPolicy, "solo.io.envoy.extensions.filters.http.csrf.v3.CsrfPolicy" {
    filter_enabled: scalar,
    shadow_enabled: scalar,
    additional_origins: repeated,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RbacSettings {
    #[prost(bool, tag = "1")]
    pub disable: bool,
    #[prost(string, repeated, tag = "2")]
    pub policies: Vec<String>,
}

message_schema!(RbacSettings, "rbac.options.gloo.solo.io.ExtensionSettings" {
    disable: scalar,
    policies: repeated,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct WafSettings {
    #[prost(bool, tag = "1")]
    pub disabled: bool,
    #[prost(string, tag = "2")]
    pub custom_intervention_message: String,
    #[prost(string, repeated, tag = "3")]
    pub rule_sets: Vec<String>,
}

message_schema!(WafSettings, "waf.options.gloo.solo.io.Settings" {
    disabled: scalar,
    custom_intervention_message: scalar,
    rule_sets: repeated,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaEq;

    #[test]
    fn test_ext_auth_config_refs_compare_structurally() {
        let reference = |name: &str| ExtAuthExtension {
            spec: Some(ext_auth_extension::Spec::ConfigRef(ResourceRef {
                name: name.to_string(),
                namespace: "gloo-system".to_string(),
            })),
        };
        assert!(reference("basic-auth").schema_eq(&reference("basic-auth")));
        assert!(!reference("basic-auth").schema_eq(&reference("oauth")));
    }

    #[test]
    fn test_disabled_ext_auth_is_not_unset() {
        let disabled = ExtAuthExtension {
            spec: Some(ext_auth_extension::Spec::Disable(true)),
        };
        assert!(!disabled.schema_eq(&ExtAuthExtension::default()));
    }
}
