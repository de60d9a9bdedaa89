//! JSON declarations: an object of set name to an object of entries.
//!
//! ```json
//! { "Status": { "ACTIVE": 1, "DISABLED": [0, "Disabled"] } }
//! ```

use std::fmt;

use choices_types::Declaration;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::catalog::ChoiceCatalog;
use crate::error::ConfigError;
use crate::value::ChoiceValue;

/// Top-level object with member order kept.
struct CatalogDocument(Vec<(String, Declaration<ChoiceValue>)>);

impl<'de> Deserialize<'de> for CatalogDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = CatalogDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of choice set names to declarations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut sets = Vec::new();
                while let Some(entry) = map.next_entry()? {
                    sets.push(entry);
                }
                Ok(CatalogDocument(sets))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

pub fn parse_json(source: &str) -> Result<ChoiceCatalog, ConfigError> {
    let CatalogDocument(sets) = serde_json::from_str(source)?;
    let mut catalog = ChoiceCatalog::default();
    for (set, declaration) in sets {
        catalog.insert(&set, declaration)?;
    }
    Ok(catalog)
}
