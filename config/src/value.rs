use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar value of a choice declared in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl ChoiceValue {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            ChoiceValue::Boolean(_) => "boolean",
            ChoiceValue::Integer(_) => "integer",
            ChoiceValue::Float(_) => "float",
            ChoiceValue::String(_) => "string",
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            ChoiceValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            ChoiceValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            ChoiceValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ChoiceValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceValue::Boolean(value) => fmt::Display::fmt(value, f),
            ChoiceValue::Integer(value) => fmt::Display::fmt(value, f),
            ChoiceValue::Float(value) => fmt::Display::fmt(value, f),
            ChoiceValue::String(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl From<bool> for ChoiceValue {
    fn from(value: bool) -> Self {
        ChoiceValue::Boolean(value)
    }
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        ChoiceValue::Integer(value)
    }
}

impl From<f64> for ChoiceValue {
    fn from(value: f64) -> Self {
        ChoiceValue::Float(value)
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        ChoiceValue::String(value)
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        ChoiceValue::String(value.to_string())
    }
}
