// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Schema adapter: per-type field tables that drive the equality engine.
//!
//! Every message type implements [`Schema`] by returning a `static`
//! [`MessageSchema`]: its fully qualified name and an ordered table of
//! [`FieldSchema`] entries, each carrying the field's name, its [`FieldKind`]
//! and an accessor that borrows the field's current value as a [`FieldValue`].
//!
//! The engine never names a field. It walks the table through the object-safe
//! [`DynMessage`] view, which is implemented for every `Schema` type.
//!
//! # Example
//!
//! ```rust
//! use gateway_equality::schema::{FieldKind, FieldSchema, FieldValue, MessageSchema, Schema};
//!
//! #[derive(Debug, Default)]
//! struct Upstream {
//!     name: String,
//!     weight: u32,
//! }
//!
//! impl Schema for Upstream {
//!     fn schema() -> &'static MessageSchema<Self> {
//!         static SCHEMA: MessageSchema<Upstream> = MessageSchema {
//!             name: "example.Upstream",
//!             fields: &[
//!                 FieldSchema { name: "name", kind: FieldKind::Scalar, get: |m: &Upstream| FieldValue::scalar(&m.name) },
//!                 FieldSchema { name: "weight", kind: FieldKind::Scalar, get: |m: &Upstream| FieldValue::scalar(&m.weight) },
//!             ],
//!         };
//!         &SCHEMA
//!     }
//! }
//!
//! let a = Upstream { name: "blue".into(), weight: 3 };
//! let b = Upstream { name: "blue".into(), weight: 3 };
//! assert!(gateway_equality::equal(Some(&a), Some(&b)));
//! ```

mod access;
mod value;

use std::any::Any;
use std::fmt;

pub use access::{AsElement, AsMapKey, AsScalar, ListAccess, MapAccess};
pub use value::{Element, FieldValue, MapKey, Scalar, Selected};

/// Custom equality a message may provide in place of structural comparison.
///
/// `other` is the value on the right-hand side of the comparison, or `None`
/// when that side is absent.
pub trait Equalizer {
    fn equal(&self, other: Option<&dyn DynMessage>) -> bool;
}

/// A oneof group: a closed set of alternatives, one of which is held.
pub trait Oneof {
    fn selected(&self) -> Selected<'_>;
}

/// Shape of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Message,
    Repeated,
    Map,
    Variant {
        /// Names of the alternatives, in declaration order.
        alternatives: &'static [&'static str],
    },
}

impl FieldKind {
    /// Whether `value` has the shape this declaration promises. A held
    /// alternative must be one of the declared names.
    pub fn admits(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (FieldKind::Scalar, FieldValue::Scalar(_))
            | (FieldKind::Message, FieldValue::Message(_))
            | (FieldKind::Repeated, FieldValue::Repeated(_))
            | (FieldKind::Map, FieldValue::Map(_)) => true,
            (FieldKind::Variant { alternatives }, FieldValue::Variant(selected)) => selected
                .as_ref()
                .map_or(true, |s| alternatives.contains(&s.name)),
            _ => false,
        }
    }
}

/// One entry in a message's field table.
pub struct FieldSchema<M: 'static> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub get: for<'a> fn(&'a M) -> FieldValue<'a>,
}

/// Field table of a message type, built once as a `static`.
pub struct MessageSchema<M: 'static> {
    /// Fully qualified message name, e.g. `gloo.solo.io.RouteOptions`.
    pub name: &'static str,
    pub fields: &'static [FieldSchema<M>],
}

impl<M: 'static> MessageSchema<M> {
    pub fn field(&self, name: &str) -> Option<&FieldSchema<M>> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Statically typed schema access, implemented once per message type.
pub trait Schema: Any + fmt::Debug + Sized {
    fn schema() -> &'static MessageSchema<Self>;

    /// Custom equality capability. Most messages have none.
    fn equalizer(&self) -> Option<&dyn Equalizer> {
        None
    }
}

/// A field of a live message: its declaration plus its current value.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub value: FieldValue<'a>,
}

/// Object-safe view of a [`Schema`] message, used for nested values.
pub trait DynMessage: Any + fmt::Debug {
    fn type_name(&self) -> &'static str;

    fn field_count(&self) -> usize;

    fn field(&self, index: usize) -> Option<Field<'_>>;

    fn as_equalizer(&self) -> Option<&dyn Equalizer>;

    fn as_any(&self) -> &dyn Any;
}

impl<M: Schema> DynMessage for M {
    fn type_name(&self) -> &'static str {
        M::schema().name
    }

    fn field_count(&self) -> usize {
        M::schema().fields.len()
    }

    fn field(&self, index: usize) -> Option<Field<'_>> {
        M::schema().fields.get(index).map(|f| {
            let value = (f.get)(self);
            debug_assert!(
                f.kind.admits(&value),
                "field '{}' of '{}' is declared {:?} but its accessor returned {:?}",
                f.name,
                M::schema().name,
                f.kind,
                value
            );
            Field {
                name: f.name,
                kind: f.kind,
                value,
            }
        })
    }

    fn as_equalizer(&self) -> Option<&dyn Equalizer> {
        Schema::equalizer(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::v1::{socket_option, ListenerOptions, SocketOption, UInt32Value};

    #[test]
    fn test_field_table_follows_declaration_order() {
        let names: Vec<&str> = ListenerOptions::schema().fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "access_logging_service",
                "extensions",
                "per_connection_buffer_limit_bytes",
                "socket_options",
                "proxy_protocol",
            ]
        );
    }

    #[test]
    fn test_dyn_message_exposes_current_values() {
        let option = SocketOption {
            description: "keepalive".to_string(),
            level: 1,
            name: 9,
            value: Some(socket_option::Value::IntValue(1)),
            state: 0,
        };
        let view: &dyn DynMessage = &option;

        assert_eq!(view.type_name(), "solo.io.envoy.api.v2.core.SocketOption");
        assert_eq!(view.field_count(), 5);

        let description = view.field(0).unwrap();
        assert_eq!(description.name, "description");
        assert!(matches!(description.value, FieldValue::Scalar(Scalar::Str("keepalive"))));

        let value = view.field(3).unwrap();
        match value.value {
            FieldValue::Variant(Some(selected)) => {
                assert_eq!(selected.name, "int_value");
                assert_eq!(selected.number, 4);
            }
            other => panic!("expected selected variant, got {:?}", other),
        }
        assert!(view.field(5).is_none());
    }

    #[test]
    fn test_variant_kind_lists_alternatives() {
        let field = SocketOption::schema().field("value").unwrap();
        assert_eq!(
            field.kind,
            FieldKind::Variant {
                alternatives: &["int_value", "buf_value"]
            }
        );
    }

    #[derive(Debug, Default)]
    struct Mislabeled {
        port: Option<UInt32Value>,
    }

    impl Schema for Mislabeled {
        fn schema() -> &'static MessageSchema<Self> {
            static SCHEMA: MessageSchema<Mislabeled> = MessageSchema {
                name: "test.Mislabeled",
                fields: &[FieldSchema {
                    name: "port",
                    kind: FieldKind::Scalar,
                    get: |m: &Mislabeled| FieldValue::message(m.port.as_ref()),
                }],
            };
            &SCHEMA
        }
    }

    #[test]
    fn test_kind_admits_matching_values() {
        let option = SocketOption {
            value: Some(socket_option::Value::BufValue(vec![1])),
            ..Default::default()
        };
        for field in SocketOption::schema().fields {
            assert!(field.kind.admits(&(field.get)(&option)), "{}", field.name);
        }

        let port = UInt32Value { value: 1 };
        assert!(!FieldKind::Scalar.admits(&FieldValue::message(Some(&port))));
        assert!(!FieldKind::Variant { alternatives: &["int_value"] }
            .admits(&(SocketOption::schema().fields[3].get)(&option)));
    }

    #[test]
    fn test_option_tables_declare_their_kinds() {
        use crate::api::v1::{
            DestinationSpec, HttpListenerOptions, RouteConfigurationOptions, RouteOptions,
            TcpListenerOptions, VirtualHostOptions, WeightedDestinationOptions,
        };

        let roots: [&dyn DynMessage; 8] = [
            &ListenerOptions::default(),
            &HttpListenerOptions::default(),
            &TcpListenerOptions::default(),
            &RouteConfigurationOptions::default(),
            &VirtualHostOptions::default(),
            &RouteOptions::default(),
            &DestinationSpec::default(),
            &WeightedDestinationOptions::default(),
        ];
        for root in roots {
            for index in 0..root.field_count() {
                let field = root.field(index).unwrap();
                assert!(field.kind.admits(&field.value), "{}.{}", root.type_name(), field.name);
            }
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "field 'port' of 'test.Mislabeled' is declared Scalar")]
    fn test_mislabeled_field_is_caught() {
        let value = Mislabeled {
            port: Some(UInt32Value { value: 80 }),
        };
        let view: &dyn DynMessage = &value;
        let _ = view.field(0);
    }

    #[test]
    fn test_plain_messages_have_no_equalizer() {
        let wrapper = UInt32Value { value: 7 };
        assert!(wrapper.as_equalizer().is_none());
    }

    #[test]
    fn test_scalar_same_as() {
        assert!(Scalar::Str("a").same_as(&Scalar::Str("a")));
        assert!(!Scalar::Str("a").same_as(&Scalar::Str("A")));
        assert!(!Scalar::I32(1).same_as(&Scalar::I64(1)));
        assert!(Scalar::F64(f64::NAN).same_as(&Scalar::F64(f64::NAN)));
        assert!(Scalar::F32(0.0).same_as(&Scalar::F32(-0.0)));
        assert!(Scalar::Bytes(&[1, 2]).same_as(&Scalar::Bytes(&[1, 2])));
    }

    #[test]
    fn test_map_keys_sort_deterministically() {
        let mut keys = vec![MapKey::Str("b"), MapKey::Str("a"), MapKey::Str("c")];
        keys.sort();
        assert_eq!(keys, vec![MapKey::Str("a"), MapKey::Str("b"), MapKey::Str("c")]);
        assert_eq!(MapKey::Str("x-id").to_string(), "\"x-id\"");
        assert_eq!(MapKey::U32(8).to_string(), "8");
    }
}
