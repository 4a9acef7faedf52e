// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Borrowed views of field values handed out by schema accessors.

use std::collections::HashMap;
use std::fmt;

use super::access::{AsElement, AsMapKey, AsScalar, ListAccess, MapAccess};
use super::{DynMessage, Oneof};

/// A scalar field value: numeric, bool, string or bytes.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a> {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl Scalar<'_> {
    /// Exact value equality.
    ///
    /// Strings and bytes compare byte for byte. Floating point values compare
    /// with `==` except that NaN equals NaN, so every value equals itself.
    pub fn same_as(&self, other: &Scalar<'_>) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::I32(a), Scalar::I32(b)) => a == b,
            (Scalar::I64(a), Scalar::I64(b)) => a == b,
            (Scalar::U32(a), Scalar::U32(b)) => a == b,
            (Scalar::U64(a), Scalar::U64(b)) => a == b,
            (Scalar::F32(a), Scalar::F32(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::F64(a), Scalar::F64(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Str(a), Scalar::Str(b)) => a.as_bytes() == b.as_bytes(),
            (Scalar::Bytes(a), Scalar::Bytes(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
            Scalar::Str(v) => write!(f, "{:?}", v),
            Scalar::Bytes(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

/// Key of a map entry. Protobuf map keys are integral, bool or string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey<'a> {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    Str(&'a str),
}

impl fmt::Display for MapKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Bool(k) => write!(f, "{}", k),
            MapKey::I32(k) => write!(f, "{}", k),
            MapKey::I64(k) => write!(f, "{}", k),
            MapKey::U32(k) => write!(f, "{}", k),
            MapKey::U64(k) => write!(f, "{}", k),
            MapKey::Str(k) => write!(f, "{:?}", k),
        }
    }
}

/// A single list element, map value or oneof payload.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    Scalar(Scalar<'a>),
    Message(Option<&'a dyn DynMessage>),
}

/// The alternative currently held by a oneof group.
#[derive(Debug, Clone, Copy)]
pub struct Selected<'a> {
    /// Field number of the alternative; this is the discriminant.
    pub number: u32,
    pub name: &'static str,
    pub value: Element<'a>,
}

/// Current value of one field, as returned by a [`FieldSchema`](super::FieldSchema) accessor.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    Scalar(Scalar<'a>),
    Message(Option<&'a dyn DynMessage>),
    Repeated(&'a dyn ListAccess),
    Map(&'a dyn MapAccess),
    Variant(Option<Selected<'a>>),
}

impl<'a> FieldValue<'a> {
    pub fn scalar<S: AsScalar>(value: &'a S) -> Self {
        FieldValue::Scalar(value.as_scalar())
    }

    /// Optional sub-message. Boxed fields pass `field.as_deref()`.
    pub fn message<M: DynMessage>(value: Option<&'a M>) -> Self {
        FieldValue::Message(value.map(|m| m as &'a dyn DynMessage))
    }

    pub fn repeated<T: AsElement>(values: &'a Vec<T>) -> Self {
        FieldValue::Repeated(values)
    }

    pub fn map<K: AsMapKey, V: AsElement>(entries: &'a HashMap<K, V>) -> Self {
        FieldValue::Map(entries)
    }

    pub fn variant<O: Oneof>(value: Option<&'a O>) -> Self {
        FieldValue::Variant(value.map(|o| o.selected()))
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            FieldValue::Message(m) => f.debug_tuple("Message").field(m).finish(),
            FieldValue::Repeated(l) => write!(f, "Repeated(len={})", l.len()),
            FieldValue::Map(m) => write!(f, "Map(len={})", m.len()),
            FieldValue::Variant(v) => f.debug_tuple("Variant").field(v).finish(),
        }
    }
}
