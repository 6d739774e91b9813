use chrono::{DateTime, Utc};

/// A structured runtime value, as seen by the canonicalizer.
///
/// `Value` is a closed union: every type family has exactly one variant,
/// and the canonicalizer has exactly one encoding rule per variant. There
/// is no open-ended dispatch; new type families are added as new variants.
///
/// Containers own their contents, so a `Value` is always a finite tree:
/// cyclic structures cannot be expressed.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The undefined-equivalent scalar.
    Undefined,
    /// The null scalar.
    Null,
    Bool(bool),
    /// Double-precision number. `-0`, `NaN`, and infinities are all
    /// representable; the canonicalizer normalizes their text forms.
    Number(f64),
    /// Big integer, rendered with a trailing `n` marker.
    BigInt(i128),
    String(String),
    /// Unique token carrying a description. Textual form `Symbol(<desc>)`.
    Symbol(String),
    /// Callable reference carrying its source-level text, rendered verbatim.
    Callable(String),
    /// Instant in time. Canonical text is RFC 3339 UTC with millisecond
    /// precision, so the rendering is zone-independent.
    Date(DateTime<Utc>),
    /// Regular expression, carrying its full textual form (e.g. `/ab+c/i`).
    Regex(String),
    /// Error object. `name` doubles as the concrete type tag
    /// (`Error`, `TypeError`, ...); the natural string form is
    /// `<name>: <message>`.
    Error { name: String, message: String },
    /// Weak-keyed map. Members are not enumerable, so only the generic
    /// `[object WeakMap]` representation exists.
    WeakMap,
    /// Weak membership set. Same non-enumerable restriction as [`Value::WeakMap`].
    WeakSet,
    /// Ordered sequence. Position is part of the value's identity.
    Array(Vec<Value>),
    Int8Array(Vec<i8>),
    Uint8Array(Vec<u8>),
    Uint8ClampedArray(Vec<u8>),
    Int16Array(Vec<i16>),
    Uint16Array(Vec<u16>),
    Int32Array(Vec<i32>),
    Uint32Array(Vec<u32>),
    Float32Array(Vec<f32>),
    Float64Array(Vec<f64>),
    /// 64-bit signed elements are big-integer valued: they render with the
    /// trailing `n` marker.
    BigInt64Array(Vec<i64>),
    BigUint64Array(Vec<u64>),
    /// Raw byte buffer with no element type of its own. The canonicalizer
    /// reinterprets it as the widest unsigned view its length allows.
    Buffer(Vec<u8>),
    /// Membership container, kept in insertion order.
    Set(Vec<Value>),
    /// Keyed container with arbitrary keys, tagged `Map`. Entry order on
    /// input is irrelevant: the canonicalizer sorts by key text.
    Map(Vec<(Value, Value)>),
    /// Plain record: a key→value mapping with no type identity beyond its
    /// entries, tagged `Object`. Entry order on input is irrelevant.
    Record(Vec<(Value, Value)>),
    /// Class instance: a record-shaped value with a concrete type of its
    /// own. `fields` carries the flattened own + inherited enumerable
    /// field set; whoever constructs the value does the flattening.
    Instance {
        type_name: String,
        fields: Vec<(Value, Value)>,
    },
}

impl Value {
    /// The canonical type tag folded into container encodings.
    ///
    /// For scalars this is the family name; it is not rendered, but keeps
    /// the mapping total.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::BigInt(_) => "BigInt",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Callable(_) => "Function",
            Value::Date(_) => "Date",
            Value::Regex(_) => "RegExp",
            Value::Error { name, .. } => name,
            Value::WeakMap => "WeakMap",
            Value::WeakSet => "WeakSet",
            Value::Array(_) => "Array",
            Value::Int8Array(_) => "Int8Array",
            Value::Uint8Array(_) => "Uint8Array",
            Value::Uint8ClampedArray(_) => "Uint8ClampedArray",
            Value::Int16Array(_) => "Int16Array",
            Value::Uint16Array(_) => "Uint16Array",
            Value::Int32Array(_) => "Int32Array",
            Value::Uint32Array(_) => "Uint32Array",
            Value::Float32Array(_) => "Float32Array",
            Value::Float64Array(_) => "Float64Array",
            Value::BigInt64Array(_) => "BigInt64Array",
            Value::BigUint64Array(_) => "BigUint64Array",
            Value::Buffer(_) => "ArrayBuffer",
            Value::Set(_) => "Set",
            Value::Map(_) => "Map",
            Value::Record(_) => "Object",
            Value::Instance { type_name, .. } => type_name,
        }
    }

    /// Build an [`Value::Array`] from anything convertible to values.
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a [`Value::Set`]. Members keep their insertion order.
    pub fn set<V, I>(members: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Set(members.into_iter().map(Into::into).collect())
    }

    /// Build a [`Value::Map`] from key/value pairs. Keys may be any value.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(collect_entries(entries))
    }

    /// Build a plain [`Value::Record`] from key/value pairs.
    pub fn record<K, V, I>(entries: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(collect_entries(entries))
    }

    /// Build a class [`Value::Instance`].
    ///
    /// `fields` must already contain the flattened own + inherited field
    /// set. The result is always an instance, never a plain record, even
    /// when `type_name` is the literal `"Object"`.
    pub fn instance<K, V, I>(type_name: impl Into<String>, fields: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Instance {
            type_name: type_name.into(),
            fields: collect_entries(fields),
        }
    }

    /// Build a [`Value::Symbol`] with the given description.
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(description.into())
    }

    /// Build a [`Value::Callable`] from its source-level text.
    pub fn callable(source: impl Into<String>) -> Self {
        Value::Callable(source.into())
    }

    /// Build a [`Value::Regex`] from its textual form.
    pub fn regex(text: impl Into<String>) -> Self {
        Value::Regex(text.into())
    }

    /// Build a [`Value::Error`] with a concrete error type name and message.
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Value::Error {
            name: name.into(),
            message: message.into(),
        }
    }
}

fn collect_entries<K, V, I>(entries: I) -> Vec<(Value, Value)>
where
    K: Into<Value>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Value::BigInt(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_builder_accepts_str_keys() {
        let record = Value::record([("a", 1.0), ("b", 2.0)]);
        match record {
            Value::Record(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].0, Value::String("a".into()));
                assert_eq!(entries[0].1, Value::Number(1.0));
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn instance_keeps_object_type_name() {
        let inst = Value::instance("Object", [("a", 1.0)]);
        assert_eq!(inst.type_name(), "Object");
        assert!(matches!(inst, Value::Instance { .. }));
    }

    #[test]
    fn error_tag_is_the_error_name() {
        let err = Value::error("TypeError", "bad input");
        assert_eq!(err.type_name(), "TypeError");
    }

    #[test]
    fn type_names_for_containers() {
        assert_eq!(Value::record([("k", 1.0)]).type_name(), "Object");
        assert_eq!(Value::map([("k", 1.0)]).type_name(), "Map");
        assert_eq!(Value::set([1.0]).type_name(), "Set");
        assert_eq!(Value::array([1.0]).type_name(), "Array");
        assert_eq!(Value::Int8Array(vec![]).type_name(), "Int8Array");
        assert_eq!(Value::Buffer(vec![]).type_name(), "ArrayBuffer");
    }

    #[test]
    fn from_impls_pick_expected_variants() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(3), Value::Number(3.0));
        assert_eq!(Value::from(3i64), Value::Number(3.0));
        assert_eq!(Value::from(3i128), Value::BigInt(3));
        assert_eq!(Value::from("x"), Value::String("x".into()));
    }

    #[test]
    fn mixed_key_map_builder() {
        let map = Value::map([
            (Value::symbol("a"), Value::from(1.0)),
            (Value::from("b"), Value::from(2.0)),
        ]);
        match map {
            Value::Map(entries) => assert_eq!(entries.len(), 2),
            other => panic!("expected map, got {other:?}"),
        }
    }
}
