//! Names a declaration may not use.
//!
//! A declared name becomes a lookup key on the built [`ChoiceSet`](crate::ChoiceSet),
//! so it must not shadow anything the container itself exposes: its accessors,
//! the internal order record, or the collection protocol.

/// Reserved identifiers, sorted for binary search.
pub const RESERVED_NAMES: &[&str] = &[
    "_fields",
    "as_slice",
    "at",
    "clone",
    "contains",
    "count",
    "deserialize",
    "entries",
    "eq",
    "fields",
    "fmt",
    "get",
    "hash",
    "index",
    "index_of",
    "into_iter",
    "is_empty",
    "iter",
    "label",
    "label_of",
    "labels",
    "len",
    "pairs",
    "serialize",
    "values",
];

/// Returns `true` if `name` collides with a container or protocol name.
///
/// Dunder names (`__dict__`, `__len__`, ...) are reserved as a class.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    is_dunder(name) || RESERVED_NAMES.binary_search(&name).is_ok()
}

fn is_dunder(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}
