//! Struct mapper for PayPal payloads.
//!
//! PayPal speaks snake_case JSON; our structs are addressed by camelCase field names.
//! Every struct declared with [`paypal_struct!`] carries a static field registry
//! (`FIELDS`) and a generated `set_field` dispatch, so wire payloads can be mapped
//! onto typed struct graphs without reflection:
//!
//! ```ignore
//! paypal_struct! {
//!     pub struct Webhook {
//!         id ("id"): scalar String,
//!         event_types ("eventTypes"): many EventType,
//!         resource ("resource"): raw serde_json::Value,
//!     }
//! }
//! ```
//!
//! Field kinds: `scalar T` (string/number/bool), `raw T` (any JSON, kept as-is and
//! stored without `Option`, so `null` survives a round trip),
//! `one S` (nested struct) and `many S` (ordered list of nested structs). The nested
//! type is part of the declaration; by convention a `many` field names its element
//! type with the singular of the field name (`events` -> `Event`).
//!
//! Wire keys without a matching field are skipped, so new provider fields never break
//! deserialization. A value whose shape the field cannot hold is a schema mismatch
//! and fails loudly with [`MapperError::UnresolvedType`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::name_converter;

/// String-keyed JSON object as sent over the wire.
pub type WireMap = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Raw,
    One,
    Many,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Raw => write!(f, "raw"),
            Self::One => write!(f, "to-one"),
            Self::Many => write!(f, "to-many"),
        }
    }
}

/// One entry of a struct's field registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// camelCase field identifier
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Shape of an incoming wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    Scalar,
    Object,
    Sequence,
}

impl WireShape {
    /// Classify a wire value.
    ///
    /// Emptiness is checked before key shape: `{}` and `[]` are both sequences.
    /// Objects keyed `"0".."n-1"` in order are sequences as well.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => Self::Sequence,
            Value::Object(map) if map.is_empty() => Self::Sequence,
            Value::Object(map) if is_list_shaped(map) => Self::Sequence,
            Value::Object(_) => Self::Object,
            _ => Self::Scalar,
        }
    }
}

impl fmt::Display for WireShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Object => write!(f, "object"),
            Self::Sequence => write!(f, "sequence"),
        }
    }
}

fn is_list_shaped(map: &WireMap) -> bool {
    map.keys()
        .enumerate()
        .all(|(index, key)| *key == index.to_string())
}

fn into_elements(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, item)| item).collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// The wire value needs a nested struct type the field does not declare.
    #[error("cannot resolve a nested struct for {owner}.{field}: field is {expected}, wire value is {found}")]
    UnresolvedType {
        owner: &'static str,
        field: String,
        expected: FieldKind,
        found: WireShape,
    },
    #[error("invalid value for {owner}.{field}: {source}")]
    InvalidValue {
        owner: &'static str,
        field: String,
        source: serde_json::Error,
    },
}

fn unresolved(
    owner: &'static str,
    field: &str,
    expected: FieldKind,
    found: WireShape,
) -> MapperError {
    tracing::error!(
        owner = owner,
        field = field,
        expected = %expected,
        found = %found,
        "PayPal payload does not match the declared struct schema"
    );
    MapperError::UnresolvedType {
        owner,
        field: field.to_string(),
        expected,
        found,
    }
}

fn invalid(owner: &'static str, field: &str, source: serde_json::Error) -> MapperError {
    tracing::error!(owner = owner, field = field, "Invalid PayPal field value: {}", source);
    MapperError::InvalidValue {
        owner,
        field: field.to_string(),
        source,
    }
}

/// A typed PayPal payload. Implemented by [`paypal_struct!`].
pub trait PayPalStruct: Default {
    const NAME: &'static str;
    /// Field registry, in declaration order.
    const FIELDS: &'static [Field];

    /// Assign one wire value to the field addressed by its camelCase name.
    /// Returns `Ok(false)` when the struct has no such field.
    fn set_field(&mut self, name: &str, value: Value) -> Result<bool, MapperError>;

    /// Wire representation of one field; `Value::Null` for unknown names.
    fn field_value(&self, name: &str) -> Result<Value, MapperError>;

    /// Populate from a snake_case wire mapping.
    fn assign(&mut self, wire: WireMap) -> Result<&mut Self, MapperError> {
        for (key, value) in wire {
            let name = name_converter::denormalize(&key);
            if !self.set_field(&name, value)? {
                // PayPal added a field we don't know yet
                tracing::trace!(owner = Self::NAME, key = %key, "Skipping unknown PayPal field");
            }
        }

        Ok(self)
    }

    fn from_wire(wire: WireMap) -> Result<Self, MapperError> {
        let mut instance = Self::default();
        instance.assign(wire)?;
        Ok(instance)
    }

    /// Serialize every declared field, unset ones as explicit nulls.
    fn to_wire(&self) -> Result<WireMap, MapperError> {
        let mut wire = WireMap::new();
        for field in Self::FIELDS {
            wire.insert(
                name_converter::normalize(field.name),
                self.field_value(field.name)?,
            );
        }

        Ok(wire)
    }
}

pub fn assign_scalar<T: DeserializeOwned>(
    owner: &'static str,
    field: &str,
    value: Value,
) -> Result<Option<T>, MapperError> {
    match WireShape::of(&value) {
        WireShape::Scalar => serde_json::from_value(value).map_err(|e| invalid(owner, field, e)),
        found => Err(unresolved(owner, field, FieldKind::Scalar, found)),
    }
}

/// Raw fields have no `Option` layer: JSON `null` is the unset value.
pub fn assign_raw<T: DeserializeOwned>(
    owner: &'static str,
    field: &str,
    value: Value,
) -> Result<T, MapperError> {
    serde_json::from_value(value).map_err(|e| invalid(owner, field, e))
}

pub fn raw_to_wire<T: Serialize>(
    owner: &'static str,
    field: &str,
    value: &T,
) -> Result<Value, MapperError> {
    serde_json::to_value(value).map_err(|e| invalid(owner, field, e))
}

pub fn assign_one<S: PayPalStruct>(
    owner: &'static str,
    field: &str,
    value: Value,
) -> Result<Option<S>, MapperError> {
    match (WireShape::of(&value), value) {
        (_, Value::Null) => Ok(None),
        (WireShape::Object, Value::Object(map)) => S::from_wire(map).map(Some),
        (found, _) => Err(unresolved(owner, field, FieldKind::One, found)),
    }
}

pub fn assign_many<S: PayPalStruct>(
    owner: &'static str,
    field: &str,
    value: Value,
) -> Result<Option<Vec<S>>, MapperError> {
    match WireShape::of(&value) {
        WireShape::Sequence => {}
        WireShape::Scalar if value.is_null() => return Ok(None),
        found => return Err(unresolved(owner, field, FieldKind::Many, found)),
    }

    let mut associations = Vec::new();
    for element in into_elements(value) {
        match element {
            Value::Null => continue,
            Value::Object(map) => associations.push(S::from_wire(map)?),
            other => {
                return Err(unresolved(owner, field, FieldKind::Many, WireShape::of(&other)));
            }
        }
    }

    Ok(Some(associations))
}

pub fn scalar_to_wire<T: Serialize>(
    owner: &'static str,
    field: &str,
    value: &Option<T>,
) -> Result<Value, MapperError> {
    serde_json::to_value(value).map_err(|e| invalid(owner, field, e))
}

pub fn one_to_wire<S: PayPalStruct>(value: &Option<S>) -> Result<Value, MapperError> {
    match value {
        Some(association) => association.to_wire().map(Value::Object),
        None => Ok(Value::Null),
    }
}

pub fn many_to_wire<S: PayPalStruct>(value: &Option<Vec<S>>) -> Result<Value, MapperError> {
    match value {
        Some(associations) => associations
            .iter()
            .map(|association| association.to_wire().map(Value::Object))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        None => Ok(Value::Null),
    }
}

/// Declare a PayPal payload struct together with its field registry.
macro_rules! paypal_struct {
    (@storage scalar $t:ty) => { ::std::option::Option<$t> };
    (@storage raw $t:ty) => { $t };
    (@storage one $t:ty) => { ::std::option::Option<$t> };
    (@storage many $t:ty) => { ::std::option::Option<::std::vec::Vec<$t>> };

    (@kind scalar) => { $crate::connectors::paypal::mapper::FieldKind::Scalar };
    (@kind raw) => { $crate::connectors::paypal::mapper::FieldKind::Raw };
    (@kind one) => { $crate::connectors::paypal::mapper::FieldKind::One };
    (@kind many) => { $crate::connectors::paypal::mapper::FieldKind::Many };

    (@assign scalar $owner:expr, $name:expr, $value:expr) => {
        $crate::connectors::paypal::mapper::assign_scalar($owner, $name, $value)
    };
    (@assign raw $owner:expr, $name:expr, $value:expr) => {
        $crate::connectors::paypal::mapper::assign_raw($owner, $name, $value)
    };
    (@assign one $owner:expr, $name:expr, $value:expr) => {
        $crate::connectors::paypal::mapper::assign_one($owner, $name, $value)
    };
    (@assign many $owner:expr, $name:expr, $value:expr) => {
        $crate::connectors::paypal::mapper::assign_many($owner, $name, $value)
    };

    (@wire scalar $owner:expr, $name:expr, $field:expr) => {
        $crate::connectors::paypal::mapper::scalar_to_wire($owner, $name, $field)
    };
    (@wire raw $owner:expr, $name:expr, $field:expr) => {
        $crate::connectors::paypal::mapper::raw_to_wire($owner, $name, $field)
    };
    (@wire one $owner:expr, $name:expr, $field:expr) => {
        $crate::connectors::paypal::mapper::one_to_wire($field)
    };
    (@wire many $owner:expr, $name:expr, $field:expr) => {
        $crate::connectors::paypal::mapper::many_to_wire($field)
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident ($camel:literal): $kind:ident $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field:
                    $crate::connectors::paypal::mapper::paypal_struct!(@storage $kind $field_ty),
            )*
        }

        impl $crate::connectors::paypal::mapper::PayPalStruct for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::connectors::paypal::mapper::Field] = &[
                $(
                    $crate::connectors::paypal::mapper::Field {
                        name: $camel,
                        kind: $crate::connectors::paypal::mapper::paypal_struct!(@kind $kind),
                    },
                )*
            ];

            #[allow(unused_variables)]
            fn set_field(
                &mut self,
                name: &str,
                value: ::serde_json::Value,
            ) -> Result<bool, $crate::connectors::paypal::mapper::MapperError> {
                match name {
                    $(
                        $camel => {
                            self.$field = $crate::connectors::paypal::mapper::paypal_struct!(
                                @assign $kind Self::NAME, name, value
                            )?;
                        }
                    )*
                    _ => return Ok(false),
                }
                Ok(true)
            }

            #[allow(unused_variables)]
            fn field_value(
                &self,
                name: &str,
            ) -> Result<::serde_json::Value, $crate::connectors::paypal::mapper::MapperError> {
                match name {
                    $(
                        $camel => $crate::connectors::paypal::mapper::paypal_struct!(
                            @wire $kind Self::NAME, name, &self.$field
                        ),
                    )*
                    _ => Ok(::serde_json::Value::Null),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let wire = $crate::connectors::paypal::mapper::PayPalStruct::to_wire(self)
                    .map_err(::serde::ser::Error::custom)?;
                ::serde::Serialize::serialize(&wire, serializer)
            }
        }
    };
}

pub(crate) use paypal_struct;
