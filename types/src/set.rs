//! The built, immutable choice set.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::slice;
use std::vec;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::declaration::{Collected, Declaration};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("choice index {index} out of range for {len} choices")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown choice name {name:?}")]
    UnknownName { name: String },
}

/// Iterator over the `(value, label)` pairs of a [`ChoiceSet`].
pub type Iter<'a, V> = slice::Iter<'a, (V, String)>;

/// Borrowed `(name, value, label)` view of one built entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceEntry<'a, V> {
    name: &'a str,
    value: &'a V,
    label: &'a str,
}

impl<'a, V> ChoiceEntry<'a, V> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[must_use]
    pub fn value(&self) -> &'a V {
        self.value
    }

    #[must_use]
    pub fn label(&self) -> &'a str {
        self.label
    }
}

/// Ordered, fixed-length, read-only sequence of `(value, label)` pairs whose
/// values can also be looked up by their declared name.
///
/// Obtained only from [`Declaration::build`] (or the [`choices!`](crate::choices)
/// macro). There is no mutating API: the pairs, the declared names and the
/// lookup table are fixed at construction.
///
/// Replacing an entry does not compile:
///
/// ```compile_fail
/// let mut set = choices_types::choices!(A = 1, B = 2).unwrap();
/// set[0] = (3, String::from("C"));
/// ```
///
/// Neither does writing through a borrowed pair:
///
/// ```compile_fail
/// let mut set = choices_types::choices!(A = 1).unwrap();
/// set.at(0).unwrap().0 = 5;
/// ```
///
/// Nor attaching a new attribute:
///
/// ```compile_fail
/// let mut set = choices_types::choices!(A = 1).unwrap();
/// set.new_attribute = 0;
/// ```
#[derive(Clone)]
pub struct ChoiceSet<V> {
    pairs: Box<[(V, String)]>,
    fields: Box<[String]>,
    index: HashMap<String, usize>,
}

impl<V> ChoiceSet<V> {
    pub(crate) fn from_collected(collected: Collected<V>) -> Self {
        let Collected { names, pairs } = collected;
        let index = names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();
        Self {
            pairs: pairs.into_boxed_slice(),
            fields: names.into_boxed_slice(),
            index,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The `(value, label)` pair at `index`.
    pub fn at(&self, index: usize) -> Result<&(V, String), LookupError> {
        self.pairs.get(index).ok_or(LookupError::IndexOutOfRange {
            index,
            len: self.pairs.len(),
        })
    }

    /// The value declared under `name`.
    pub fn get(&self, name: &str) -> Result<&V, LookupError> {
        self.index_of(name).map(|position| &self.pairs[position].0)
    }

    /// The label of the entry declared under `name`.
    pub fn label(&self, name: &str) -> Result<&str, LookupError> {
        self.index_of(name)
            .map(|position| self.pairs[position].1.as_str())
    }

    /// Declaration position of `name`.
    pub fn index_of(&self, name: &str) -> Result<usize, LookupError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownName {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declared names in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Label of the first entry whose value equals `value`.
    #[must_use]
    pub fn label_of(&self, value: &V) -> Option<&str>
    where
        V: PartialEq,
    {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate == value)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> Iter<'_, V> {
        self.pairs.iter()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.pairs.iter().map(|(value, _)| value)
    }

    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.pairs.iter().map(|(_, label)| label.as_str())
    }

    pub fn entries(
        &self,
    ) -> impl DoubleEndedIterator<Item = ChoiceEntry<'_, V>> + ExactSizeIterator {
        self.fields
            .iter()
            .zip(self.pairs.iter())
            .map(|(name, (value, label))| ChoiceEntry {
                name: name.as_str(),
                value,
                label: label.as_str(),
            })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(V, String)] {
        &self.pairs
    }
}

impl<V> AsRef<[(V, String)]> for ChoiceSet<V> {
    fn as_ref(&self) -> &[(V, String)] {
        self.as_slice()
    }
}

/// Panics if `index` is out of bounds; use [`ChoiceSet::at`] to check.
impl<V> Index<usize> for ChoiceSet<V> {
    type Output = (V, String);

    fn index(&self, index: usize) -> &Self::Output {
        &self.pairs[index]
    }
}

/// Panics if `name` was not declared; use [`ChoiceSet::get`] to check.
impl<V> Index<&str> for ChoiceSet<V> {
    type Output = V;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, V> IntoIterator for &'a ChoiceSet<V> {
    type Item = &'a (V, String);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for ChoiceSet<V> {
    type Item = (V, String);
    type IntoIter = vec::IntoIter<(V, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_vec().into_iter()
    }
}

// ── Equality ─────────────────────────────────────────────────
//
// Two sets are equal when their pair sequences are equal; declared names do
// not take part. A set also compares equal to a plain ordered sequence of
// the same pairs.

fn pairs_eq<V, L>(ours: &[(V, String)], theirs: &[(V, L)]) -> bool
where
    V: PartialEq,
    L: AsRef<str>,
{
    ours.len() == theirs.len()
        && ours
            .iter()
            .zip(theirs)
            .all(|((value, label), (other_value, other_label))| {
                value == other_value && label.as_str() == other_label.as_ref()
            })
}

impl<V: PartialEq> PartialEq for ChoiceSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<V: Eq> Eq for ChoiceSet<V> {}

impl<V: PartialEq, L: AsRef<str>> PartialEq<[(V, L)]> for ChoiceSet<V> {
    fn eq(&self, other: &[(V, L)]) -> bool {
        pairs_eq(&self.pairs, other)
    }
}

impl<V: PartialEq, L: AsRef<str>, const N: usize> PartialEq<[(V, L); N]> for ChoiceSet<V> {
    fn eq(&self, other: &[(V, L); N]) -> bool {
        pairs_eq(&self.pairs, other)
    }
}

impl<V: PartialEq, L: AsRef<str>> PartialEq<Vec<(V, L)>> for ChoiceSet<V> {
    fn eq(&self, other: &Vec<(V, L)>) -> bool {
        pairs_eq(&self.pairs, other)
    }
}

// ── Formatting ───────────────────────────────────────────────

impl<V: fmt::Debug> fmt::Debug for ChoiceSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceSet")
            .field("fields", &self.fields)
            .field("pairs", &self.pairs)
            .finish()
    }
}

/// `[NAME=value (label), ...]`
impl<V: fmt::Display> fmt::Display for ChoiceSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, entry) in self.entries().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={} ({})", entry.name, entry.value, entry.label)?;
        }
        f.write_str("]")
    }
}

// ── Serde ────────────────────────────────────────────────────

/// Serializes as a sequence of `[value, label]` pairs.
impl<V: Serialize> Serialize for ChoiceSet<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.pairs.iter())
    }
}

/// Deserializes a declaration map and validates it on load.
impl<'de, V: Deserialize<'de>> Deserialize<'de> for ChoiceSet<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Declaration::deserialize(deserializer)?
            .build()
            .map_err(D::Error::custom)
    }
}
