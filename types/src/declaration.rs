//! Declaration collector.
//!
//! A [`Declaration`] is the caller-authored, explicitly ordered list of
//! `name = value` entries. Nothing is validated while entries are added;
//! [`Declaration::build`] runs [`collect`] over the whole list and only
//! produces a [`ChoiceSet`] if every entry passes. A rejected declaration
//! never yields a partially built set.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::reserved::is_reserved;
use crate::set::ChoiceSet;

/// Right-hand side of one declared entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawChoice<V> {
    /// Value with an explicit label, written `[value, "label"]` in documents.
    Labeled(V, String),
    /// Bare value; the label defaults to the declared name.
    Value(V),
}

impl<V> RawChoice<V> {
    /// Attach an explicit label, replacing any label already present.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        match self {
            RawChoice::Labeled(value, _) | RawChoice::Value(value) => {
                RawChoice::Labeled(value, label.into())
            }
        }
    }

    #[must_use]
    pub fn value(&self) -> &V {
        match self {
            RawChoice::Labeled(value, _) | RawChoice::Value(value) => value,
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            RawChoice::Labeled(_, label) => Some(label),
            RawChoice::Value(_) => None,
        }
    }

    /// Resolve into a `(value, label)` pair, defaulting the label to `name`.
    #[must_use]
    pub fn into_pair(self, name: &str) -> (V, String) {
        match self {
            RawChoice::Labeled(value, label) => (value, label),
            RawChoice::Value(value) => (value, name.to_string()),
        }
    }
}

impl<V> From<V> for RawChoice<V> {
    fn from(value: V) -> Self {
        RawChoice::Value(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("invalid choice name {name:?}: expected a non-empty identifier")]
    InvalidName { name: String },
    #[error("illegal choice name {name:?}: conflicts with a reserved name")]
    NameConflict { name: String },
    #[error("duplicated choice name {name:?}")]
    DuplicateName { name: String },
}

impl DeclarationError {
    /// The offending declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            DeclarationError::InvalidName { name }
            | DeclarationError::NameConflict { name }
            | DeclarationError::DuplicateName { name } => name,
        }
    }
}

/// Validated output of [`collect`]: declared names and their pairs, in
/// declaration order. `names[i]` owns `pairs[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected<V> {
    pub names: Vec<String>,
    pub pairs: Vec<(V, String)>,
}

/// Validate entries in order and resolve their labels.
///
/// Each name is checked, in this order, for being an identifier, for
/// colliding with a reserved name, and for repeating an earlier name. The
/// first failure aborts collection.
pub fn collect<V, I>(entries: I) -> Result<Collected<V>, DeclarationError>
where
    I: IntoIterator<Item = (String, RawChoice<V>)>,
{
    let entries = entries.into_iter();
    let (capacity, _) = entries.size_hint();
    let mut names = Vec::with_capacity(capacity);
    let mut pairs = Vec::with_capacity(capacity);
    let mut seen = HashSet::with_capacity(capacity);

    for (name, choice) in entries {
        if !is_identifier(&name) {
            return Err(DeclarationError::InvalidName { name });
        }
        if is_reserved(&name) {
            return Err(DeclarationError::NameConflict { name });
        }
        if !seen.insert(name.clone()) {
            return Err(DeclarationError::DuplicateName { name });
        }
        pairs.push(choice.into_pair(&name));
        names.push(name);
    }

    Ok(Collected { names, pairs })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Ordered list of `(name, raw choice)` entries awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<V> {
    entries: Vec<(String, RawChoice<V>)>,
}

impl<V> Default for Declaration<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Declaration<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry, builder style.
    pub fn entry(mut self, name: impl Into<String>, choice: impl Into<RawChoice<V>>) -> Self {
        self.push(name, choice);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, choice: impl Into<RawChoice<V>>) {
        self.entries.push((name.into(), choice.into()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &RawChoice<V>)> {
        self.entries
            .iter()
            .map(|(name, choice)| (name.as_str(), choice))
    }

    /// Validate every entry and build the immutable set.
    ///
    /// This is the only way to obtain a [`ChoiceSet`].
    pub fn build(self) -> Result<ChoiceSet<V>, DeclarationError> {
        let declared = self.entries.len();
        let collected = collect(self.entries).inspect_err(|err| {
            tracing::debug!(name = err.name(), declared, "rejected choice declaration: {err}");
        })?;
        let set = ChoiceSet::from_collected(collected);
        tracing::debug!(choices = set.len(), "built choice set");
        Ok(set)
    }
}

impl<V, N, C> FromIterator<(N, C)> for Declaration<V>
where
    N: Into<String>,
    C: Into<RawChoice<V>>,
{
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut declaration = Self::new();
        declaration.extend(iter);
        declaration
    }
}

impl<V, N, C> Extend<(N, C)> for Declaration<V>
where
    N: Into<String>,
    C: Into<RawChoice<V>>,
{
    fn extend<I: IntoIterator<Item = (N, C)>>(&mut self, iter: I) {
        for (name, choice) in iter {
            self.push(name, choice);
        }
    }
}

// ── Serde ────────────────────────────────────────────────────

impl<V: Serialize> Serialize for Declaration<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Deserializes from a map, keeping entries in document order. Repeated
/// keys are kept so that [`Declaration::build`] can report them.
impl<'de, V: Deserialize<'de>> Deserialize<'de> for Declaration<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DeclarationVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for DeclarationVisitor<V> {
            type Value = Declaration<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of choice names to values or [value, label] pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let capacity = map.size_hint().unwrap_or(0).min(1024);
                let mut declaration = Declaration::with_capacity(capacity);
                while let Some((name, choice)) = map.next_entry::<String, RawChoice<V>>()? {
                    declaration.push(name, choice);
                }
                Ok(declaration)
            }
        }

        deserializer.deserialize_map(DeclarationVisitor(PhantomData))
    }
}
