// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conversions from concrete field types to the borrowed views in [`super::value`].

use std::collections::HashMap;
use std::hash::Hash;

use super::value::{Element, MapKey, Scalar};
use super::Schema;

/// Field types that compare as scalars.
pub trait AsScalar {
    fn as_scalar(&self) -> Scalar<'_>;
}

/// Types that can sit in a repeated field, a map value or a oneof alternative.
pub trait AsElement {
    fn as_element(&self) -> Element<'_>;
}

/// Ordered, index-addressable collection behind a repeated field.
pub trait ListAccess {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element(&self, index: usize) -> Option<Element<'_>>;
}

/// Keyed collection behind a map field.
pub trait MapAccess {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in unspecified order.
    fn entries(&self) -> Box<dyn Iterator<Item = (MapKey<'_>, Element<'_>)> + '_>;

    fn lookup(&self, key: &MapKey<'_>) -> Option<Element<'_>>;
}

/// Types usable as protobuf map keys.
pub trait AsMapKey: Eq + Hash + Sized {
    fn as_key(&self) -> MapKey<'_>;

    fn lookup<'m, V>(entries: &'m HashMap<Self, V>, key: &MapKey<'_>) -> Option<&'m V>;
}

macro_rules! copy_scalars {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AsScalar for $ty {
                fn as_scalar(&self) -> Scalar<'_> {
                    Scalar::$variant(*self)
                }
            }
        )*
    };
}

copy_scalars!(
    bool => Bool,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

impl AsScalar for String {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Str(self.as_str())
    }
}

impl AsScalar for Vec<u8> {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Bytes(self.as_slice())
    }
}

macro_rules! scalar_elements {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsElement for $ty {
                fn as_element(&self) -> Element<'_> {
                    Element::Scalar(self.as_scalar())
                }
            }
        )*
    };
}

scalar_elements!(bool, i32, i64, u32, u64, f32, f64, String, Vec<u8>);

impl<M: Schema> AsElement for M {
    fn as_element(&self) -> Element<'_> {
        Element::Message(Some(self))
    }
}

impl<T: AsElement> ListAccess for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn element(&self, index: usize) -> Option<Element<'_>> {
        self.get(index).map(AsElement::as_element)
    }
}

macro_rules! copy_map_keys {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AsMapKey for $ty {
                fn as_key(&self) -> MapKey<'_> {
                    MapKey::$variant(*self)
                }

                fn lookup<'m, V>(entries: &'m HashMap<Self, V>, key: &MapKey<'_>) -> Option<&'m V> {
                    match key {
                        MapKey::$variant(k) => entries.get(k),
                        _ => None,
                    }
                }
            }
        )*
    };
}

copy_map_keys!(
    bool => Bool,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
);

impl AsMapKey for String {
    fn as_key(&self) -> MapKey<'_> {
        MapKey::Str(self.as_str())
    }

    fn lookup<'m, V>(entries: &'m HashMap<Self, V>, key: &MapKey<'_>) -> Option<&'m V> {
        match key {
            MapKey::Str(k) => entries.get(*k),
            _ => None,
        }
    }
}

impl<K: AsMapKey, V: AsElement> MapAccess for HashMap<K, V> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (MapKey<'_>, Element<'_>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_key(), v.as_element())))
    }

    fn lookup(&self, key: &MapKey<'_>) -> Option<Element<'_>> {
        K::lookup(self, key).map(AsElement::as_element)
    }
}
