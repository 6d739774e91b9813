//! Ingestion paths: JSON documents and native Rust types.

use std::collections::{BTreeMap, HashMap};

use crate::value::Value;

impl From<serde_json::Value> for Value {
    /// JSON maps onto the value model without loss: objects become plain
    /// records (JSON objects carry no type identity), arrays stay ordered,
    /// and numbers become doubles.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Record(
                entries
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Conversion seam for native Rust types.
///
/// Implement this for any type that should participate in canonicalization
/// directly. Integer types up to 64 signed bits map to `Number`; `u64` and
/// `i128` map to `BigInt` because they exceed the double-precision safe
/// integer range. Unordered map types may be handed over in any iteration
/// order; the canonicalizer sorts entries by key text.
pub trait ToCanonical {
    fn to_canonical(&self) -> Value;
}

impl ToCanonical for Value {
    fn to_canonical(&self) -> Value {
        self.clone()
    }
}

impl ToCanonical for bool {
    fn to_canonical(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_to_canonical_number {
    ($($ty:ty),*) => {
        $(impl ToCanonical for $ty {
            fn to_canonical(&self) -> Value {
                Value::Number(*self as f64)
            }
        })*
    };
}

impl_to_canonical_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl ToCanonical for u64 {
    fn to_canonical(&self) -> Value {
        Value::BigInt(*self as i128)
    }
}

impl ToCanonical for i128 {
    fn to_canonical(&self) -> Value {
        Value::BigInt(*self)
    }
}

impl ToCanonical for str {
    fn to_canonical(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToCanonical for String {
    fn to_canonical(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToCanonical> ToCanonical for Option<T> {
    fn to_canonical(&self) -> Value {
        match self {
            Some(inner) => inner.to_canonical(),
            None => Value::Null,
        }
    }
}

impl<T: ToCanonical> ToCanonical for [T] {
    fn to_canonical(&self) -> Value {
        Value::Array(self.iter().map(ToCanonical::to_canonical).collect())
    }
}

impl<T: ToCanonical> ToCanonical for Vec<T> {
    fn to_canonical(&self) -> Value {
        self.as_slice().to_canonical()
    }
}

impl<T: ToCanonical> ToCanonical for BTreeMap<String, T> {
    fn to_canonical(&self) -> Value {
        Value::Record(
            self.iter()
                .map(|(k, v)| (Value::String(k.clone()), v.to_canonical()))
                .collect(),
        )
    }
}

impl<T: ToCanonical> ToCanonical for HashMap<String, T> {
    fn to_canonical(&self) -> Value {
        Value::Record(
            self.iter()
                .map(|(k, v)| (Value::String(k.clone()), v.to_canonical()))
                .collect(),
        )
    }
}

impl<T: ToCanonical + ?Sized> ToCanonical for &T {
    fn to_canonical(&self) -> Value {
        (**self).to_canonical()
    }
}
