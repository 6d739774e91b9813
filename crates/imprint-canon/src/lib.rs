//! The Imprint canonicalizer.
//!
//! Converts any [`imprint_value::Value`] into a canonical string that is a
//! pure function of the value's structural content and type tag,
//! independent of entry insertion order, container construction path, and
//! object identity. Structurally equal values always produce identical
//! strings; values of different type families never collide, because the
//! type tag is folded into every container encoding.
//!
//! Canonicalization is total and pure: it never fails, performs no I/O,
//! and allocates only the output buffer. See [`canonicalize`] for the
//! encoding rules and [`Memo`] for the opt-in memoization table.

pub mod canon;
pub mod memo;

pub use canon::{canonicalize, canonicalize_memo};
pub use memo::Memo;
