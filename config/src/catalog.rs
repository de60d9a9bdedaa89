use std::vec;

use choices_types::{ChoiceSet, Declaration};

use crate::error::ConfigError;
use crate::value::ChoiceValue;

/// Named choice sets loaded from one document, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceCatalog {
    sets: Vec<(String, ChoiceSet<ChoiceValue>)>,
}

impl ChoiceCatalog {
    /// Build `declaration` and append it under `set`.
    ///
    /// Nothing is appended if the set name is taken or the declaration is
    /// rejected.
    pub(crate) fn insert(
        &mut self,
        set: &str,
        declaration: Declaration<ChoiceValue>,
    ) -> Result<(), ConfigError> {
        if self.get(set).is_some() {
            return Err(ConfigError::DuplicateSet {
                set: set.to_string(),
            });
        }
        let built = declaration
            .build()
            .map_err(|source| ConfigError::Declaration {
                set: set.to_string(),
                source,
            })?;
        self.sets.push((set.to_string(), built));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, set: &str) -> Option<&ChoiceSet<ChoiceValue>> {
        self.sets
            .iter()
            .find(|(name, _)| name == set)
            .map(|(_, choices)| choices)
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.sets.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &ChoiceSet<ChoiceValue>)> {
        self.sets
            .iter()
            .map(|(name, choices)| (name.as_str(), choices))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl IntoIterator for ChoiceCatalog {
    type Item = (String, ChoiceSet<ChoiceValue>);
    type IntoIter = vec::IntoIter<(String, ChoiceSet<ChoiceValue>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}
