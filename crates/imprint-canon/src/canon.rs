use std::fmt::Write as _;

use chrono::SecondsFormat;
use imprint_value::Value;

use crate::memo::Memo;

/// Canonicalize a value into its deterministic string encoding.
///
/// Total over every value: this function never fails. The encoding rules,
/// one per variant:
///
/// - Strings are wrapped in double quotes with embedded quotes escaped,
///   which distinguishes them from the bare rendering of other scalars
///   (`"null"` vs `null`, `"123"` vs `123`).
/// - Symbols and callables render their textual form verbatim.
/// - Scalars render as their direct text cast. `-0` renders `0`, any `NaN`
///   renders `NaN`, infinities keep their sign, and big integers carry a
///   trailing `n`.
/// - Dates, regexes, errors, and weak containers render as
///   `(<TypeName>:<natural string form>)`. Weak containers are not
///   enumerable, so only their generic `[object WeakMap]` form exists.
/// - Sets render members in insertion order. Membership, not position, is
///   the semantic content, so this makes the encoding sensitive to
///   insertion history (an accepted limitation, kept for compatibility).
/// - Arrays and typed numeric arrays render `(<i>:<element>)` per index;
///   position is part of the value's identity and is never sorted.
/// - Raw buffers are reinterpreted little-endian as the widest unsigned
///   element view their length allows (64, 32, then 16 bits); odd-length
///   buffers fall back to concatenated single-byte views. A buffer and a
///   typed view over the same bytes encode identically.
/// - Maps, plain records, and class instances render entries sorted by the
///   key's text form: string keys bare, every other key through the
///   canonicalizer. Sorting is Unicode code-point order, so the output is
///   identical across processes and locales.
pub fn canonicalize(value: &Value) -> String {
    let mut out = String::new();
    Writer { memo: None }.write(value, &mut out);
    out
}

/// Canonicalize with a caller-threaded memoization table.
///
/// Identical output to [`canonicalize`]. Every node's encoding is recorded
/// in `memo`, keyed by node address, so canonicalizing the same tree again
/// through the same table returns the cached text without re-walking it.
/// Useful when one value is fingerprinted under several algorithms or
/// encodings. The table is an explicit argument scoped to whatever the
/// caller threads it through, never process-wide state.
pub fn canonicalize_memo<'v>(value: &'v Value, memo: &mut Memo<'v>) -> String {
    let mut out = String::new();
    Writer { memo: Some(memo) }.write(value, &mut out);
    out
}

struct Writer<'m, 'v> {
    memo: Option<&'m mut Memo<'v>>,
}

impl<'m, 'v> Writer<'m, 'v> {
    fn write(&mut self, value: &'v Value, out: &mut String) {
        if let Some(memo) = self.memo.as_deref_mut() {
            if let Some(hit) = memo.get(value) {
                out.push_str(hit);
                return;
            }
        }

        let start = out.len();
        match value {
            Value::String(s) => write_quoted(out, s),
            Value::Symbol(desc) => {
                let _ = write!(out, "Symbol({desc})");
            }
            Value::Callable(source) => out.push_str(source),
            Value::Undefined => out.push_str("undefined"),
            Value::Null => out.push_str("null"),
            Value::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Value::Number(n) => write_number(out, *n),
            Value::BigInt(n) => {
                let _ = write!(out, "{n}n");
            }
            Value::Date(dt) => {
                let _ = write!(
                    out,
                    "(Date:{})",
                    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
                );
            }
            Value::Regex(text) => {
                let _ = write!(out, "(RegExp:{text})");
            }
            Value::Error { name, message } => {
                if message.is_empty() {
                    let _ = write!(out, "({name}:{name})");
                } else {
                    let _ = write!(out, "({name}:{name}: {message})");
                }
            }
            Value::WeakMap => out.push_str("(WeakMap:[object WeakMap])"),
            Value::WeakSet => out.push_str("(WeakSet:[object WeakSet])"),
            Value::Set(members) => {
                out.push_str("(Set:[");
                for member in members {
                    out.push('(');
                    self.write(member, out);
                    out.push_str("),");
                }
                out.push_str("])");
            }
            Value::Array(items) => {
                out.push_str("(Array:[");
                for (i, item) in items.iter().enumerate() {
                    let _ = write!(out, "({i}:");
                    self.write(item, out);
                    out.push_str("),");
                }
                out.push_str("])");
            }
            Value::Int8Array(v) => write_int_elements(out, "Int8Array", v.iter().map(|&x| i128::from(x))),
            Value::Uint8Array(v) => write_int_elements(out, "Uint8Array", v.iter().map(|&x| i128::from(x))),
            Value::Uint8ClampedArray(v) => {
                write_int_elements(out, "Uint8ClampedArray", v.iter().map(|&x| i128::from(x)))
            }
            Value::Int16Array(v) => write_int_elements(out, "Int16Array", v.iter().map(|&x| i128::from(x))),
            Value::Uint16Array(v) => write_int_elements(out, "Uint16Array", v.iter().map(|&x| i128::from(x))),
            Value::Int32Array(v) => write_int_elements(out, "Int32Array", v.iter().map(|&x| i128::from(x))),
            Value::Uint32Array(v) => write_int_elements(out, "Uint32Array", v.iter().map(|&x| i128::from(x))),
            Value::Float32Array(v) => write_float_elements(out, "Float32Array", v.iter().map(|&x| f64::from(x))),
            Value::Float64Array(v) => write_float_elements(out, "Float64Array", v.iter().copied()),
            Value::BigInt64Array(v) => {
                write_bigint_elements(out, "BigInt64Array", v.iter().map(|&x| i128::from(x)))
            }
            Value::BigUint64Array(v) => {
                write_bigint_elements(out, "BigUint64Array", v.iter().map(|&x| i128::from(x)))
            }
            Value::Buffer(bytes) => write_buffer(out, bytes),
            Value::Map(entries) => self.write_sorted_entries(out, "Map", entries),
            Value::Record(entries) => self.write_sorted_entries(out, "Object", entries),
            Value::Instance { type_name, fields } => self.write_sorted_entries(out, type_name, fields),
        }

        if let Some(memo) = self.memo.as_deref_mut() {
            memo.insert(value, out[start..].to_string());
        }
    }

    /// Entry encoding shared by maps, records, and instances: sort by key
    /// text, then render `(<key>:<value>),` per entry. Keys are unique per
    /// container, so ties cannot occur.
    fn write_sorted_entries(&mut self, out: &mut String, tag: &str, entries: &'v [(Value, Value)]) {
        let mut rendered: Vec<(String, &'v Value)> = entries
            .iter()
            .map(|(key, value)| (self.key_text(key), value))
            .collect();
        rendered.sort_by(|a, b| a.0.cmp(&b.0));

        let _ = write!(out, "({tag}:[");
        for (key, value) in rendered {
            out.push('(');
            out.push_str(&key);
            out.push(':');
            self.write(value, out);
            out.push_str("),");
        }
        out.push_str("])");
    }

    /// String keys render bare (no quoting) so that plain records keep the
    /// familiar `(a:1)` entry shape; every other key type goes through the
    /// canonicalizer, which puts symbol keys in the same textual space as
    /// string keys for sorting.
    fn key_text(&mut self, key: &'v Value) -> String {
        match key {
            Value::String(s) => s.clone(),
            other => {
                let mut text = String::new();
                self.write(other, &mut text);
                text
            }
        }
    }
}

fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}

fn write_number(out: &mut String, n: f64) {
    if n.is_nan() {
        out.push_str("NaN");
    } else if n.is_infinite() {
        out.push_str(if n.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        });
    } else if n == 0.0 {
        // Collapses negative zero.
        out.push('0');
    } else {
        let _ = write!(out, "{n}");
    }
}

fn write_int_elements<I>(out: &mut String, tag: &str, elements: I)
where
    I: Iterator<Item = i128>,
{
    out.push('(');
    out.push_str(tag);
    out.push_str(":[");
    for (i, element) in elements.enumerate() {
        let _ = write!(out, "({i}:{element}),");
    }
    out.push_str("])");
}

fn write_bigint_elements<I>(out: &mut String, tag: &str, elements: I)
where
    I: Iterator<Item = i128>,
{
    out.push('(');
    out.push_str(tag);
    out.push_str(":[");
    for (i, element) in elements.enumerate() {
        let _ = write!(out, "({i}:{element}n),");
    }
    out.push_str("])");
}

fn write_float_elements<I>(out: &mut String, tag: &str, elements: I)
where
    I: Iterator<Item = f64>,
{
    out.push('(');
    out.push_str(tag);
    out.push_str(":[");
    for (i, element) in elements.enumerate() {
        let _ = write!(out, "({i}:");
        write_number(out, element);
        out.push_str("),");
    }
    out.push_str("])");
}

/// Raw buffers have no element type, so the encoding borrows one: the
/// widest unsigned view the byte length divides into, little-endian. An
/// odd-length buffer concatenates 1-element single-byte views inside one
/// outer group.
fn write_buffer(out: &mut String, bytes: &[u8]) {
    if bytes.len() % 8 == 0 {
        write_bigint_elements(
            out,
            "BigUint64Array",
            bytes.chunks_exact(8).map(|chunk| {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                i128::from(u64::from_le_bytes(word))
            }),
        );
    } else if bytes.len() % 4 == 0 {
        write_int_elements(
            out,
            "Uint32Array",
            bytes.chunks_exact(4).map(|chunk| {
                let mut word = [0u8; 4];
                word.copy_from_slice(chunk);
                i128::from(u32::from_le_bytes(word))
            }),
        );
    } else if bytes.len() % 2 == 0 {
        write_int_elements(
            out,
            "Uint16Array",
            bytes.chunks_exact(2).map(|chunk| {
                let mut word = [0u8; 2];
                word.copy_from_slice(chunk);
                i128::from(u16::from_le_bytes(word))
            }),
        );
    } else {
        out.push('(');
        for &byte in bytes {
            write_int_elements(out, "Uint8Array", std::iter::once(i128::from(byte)));
        }
        out.push(')');
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::collection::{btree_map, vec as prop_vec};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn record_order_never_matters(entries in btree_map("[a-z]{1,8}", -1.0e6..1.0e6f64, 0..10)) {
            let forward = Value::Record(
                entries
                    .iter()
                    .map(|(k, v)| (Value::String(k.clone()), Value::Number(*v)))
                    .collect(),
            );
            let reversed = Value::Record(
                entries
                    .iter()
                    .rev()
                    .map(|(k, v)| (Value::String(k.clone()), Value::Number(*v)))
                    .collect(),
            );
            prop_assert_eq!(canonicalize(&forward), canonicalize(&reversed));
        }

        #[test]
        fn string_never_collides_with_number(n in -1.0e9..1.0e9f64) {
            let number = Value::Number(n);
            let text = Value::String(canonicalize(&number));
            prop_assert_ne!(canonicalize(&text), canonicalize(&number));
        }

        #[test]
        fn canonicalization_is_deterministic(items in prop_vec("[ -~]{0,12}", 0..8)) {
            let value = Value::Array(items.iter().map(|s| Value::String(s.clone())).collect());
            prop_assert_eq!(canonicalize(&value), canonicalize(&value));
        }

        #[test]
        fn array_order_matters(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
            prop_assume!(a != b);
            let ab = Value::array([Value::String(a.clone()), Value::String(b.clone())]);
            let ba = Value::array([Value::String(b), Value::String(a)]);
            prop_assert_ne!(canonicalize(&ab), canonicalize(&ba));
        }
    }
}
