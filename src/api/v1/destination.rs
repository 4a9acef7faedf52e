// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Function-level destination specs for AWS, Azure, REST and gRPC upstreams.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InvocationStyle {
    Sync = 0,
    Async = 1,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsDestinationSpec {
    #[prost(string, tag = "1")]
    pub logical_name: String,
    #[prost(enumeration = "InvocationStyle", tag = "2")]
    pub invocation_style: i32,
    #[prost(bool, tag = "3")]
    pub response_transformation: bool,
    #[prost(bool, tag = "4")]
    pub unwrap_as_alb: bool,
}

message_schema!(AwsDestinationSpec, "aws.options.gloo.solo.io.DestinationSpec" {
    logical_name: scalar,
    invocation_style: scalar,
    response_transformation: scalar,
    unwrap_as_alb: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureDestinationSpec {
    #[prost(string, tag = "1")]
    pub function_name: String,
}

message_schema!(AzureDestinationSpec, "azure.options.gloo.solo.io.DestinationSpec" {
    function_name: scalar,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct RestDestinationSpec {
    #[prost(string, tag = "1")]
    pub function_name: String,
    #[prost(map = "string, string", tag = "2")]
    pub parameters: HashMap<String, String>,
}

message_schema!(RestDestinationSpec, "rest.options.gloo.solo.io.DestinationSpec" {
    function_name: scalar,
    parameters: map,
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GrpcDestinationSpec {
    #[prost(string, tag = "1")]
    pub package: String,
    #[prost(string, tag = "2")]
    pub service: String,
    #[prost(string, tag = "3")]
    pub function: String,
    #[prost(map = "string, string", tag = "4")]
    pub parameters: HashMap<String, String>,
}

message_schema!(GrpcDestinationSpec, "grpc.options.gloo.solo.io.DestinationSpec" {
    package: scalar,
    service: scalar,
    function: scalar,
    parameters: map,
});
