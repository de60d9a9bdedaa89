//! TOML declarations.
//!
//! Each top-level table is one choice set. `toml_edit` keeps keys in
//! document order, which is the declaration order.
//!
//! ```toml
//! [Status]
//! ACTIVE = 1
//! DISABLED = [0, "Disabled"]
//! ```

use choices_types::{Declaration, RawChoice};
use toml_edit::{Array, DocumentMut, Item, TableLike, Value};

use crate::catalog::ChoiceCatalog;
use crate::error::ConfigError;
use crate::value::ChoiceValue;

pub fn parse_toml(source: &str) -> Result<ChoiceCatalog, ConfigError> {
    let document = source.parse::<DocumentMut>()?;
    let mut catalog = ChoiceCatalog::default();
    for (set, item) in document.iter() {
        let table = item.as_table_like().ok_or_else(|| ConfigError::NotATable {
            set: set.to_string(),
        })?;
        catalog.insert(set, declaration(set, table)?)?;
    }
    Ok(catalog)
}

fn declaration(
    set: &str,
    table: &dyn TableLike,
) -> Result<Declaration<ChoiceValue>, ConfigError> {
    let mut declaration = Declaration::with_capacity(table.len());
    for (choice, item) in table.iter() {
        declaration.push(choice, raw_choice(set, choice, item)?);
    }
    Ok(declaration)
}

fn raw_choice(
    set: &str,
    choice: &str,
    item: &Item,
) -> Result<RawChoice<ChoiceValue>, ConfigError> {
    let Some(value) = item.as_value() else {
        return Err(unsupported(set, choice, item.type_name()));
    };
    match value {
        Value::Array(array) => labeled(set, choice, array),
        other => scalar(set, choice, other).map(RawChoice::Value),
    }
}

fn labeled(
    set: &str,
    choice: &str,
    array: &Array,
) -> Result<RawChoice<ChoiceValue>, ConfigError> {
    let mut items = array.iter();
    match (items.next(), items.next(), items.next()) {
        (Some(value), Some(Value::String(label)), None) => Ok(RawChoice::Labeled(
            scalar(set, choice, value)?,
            label.value().clone(),
        )),
        _ => Err(ConfigError::MalformedLabel {
            set: set.to_string(),
            choice: choice.to_string(),
        }),
    }
}

fn scalar(set: &str, choice: &str, value: &Value) -> Result<ChoiceValue, ConfigError> {
    match value {
        Value::Boolean(flag) => Ok(ChoiceValue::Boolean(*flag.value())),
        Value::Integer(number) => Ok(ChoiceValue::Integer(*number.value())),
        Value::Float(number) => Ok(ChoiceValue::Float(*number.value())),
        Value::String(text) => Ok(ChoiceValue::String(text.value().clone())),
        other => Err(unsupported(set, choice, other.type_name())),
    }
}

fn unsupported(set: &str, choice: &str, kind: &'static str) -> ConfigError {
    ConfigError::UnsupportedValue {
        set: set.to_string(),
        choice: choice.to_string(),
        kind,
    }
}
