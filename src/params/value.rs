// nmlgen/src/params/value.rs

//! Core ParamValue enum and basic operations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single parameter value in a calculation input tree.
///
/// Variant order is significant for untagged deserialization: variants are
/// probed in declaration order, so `Integer` must precede `Real` or whole
/// numbers would come back as reals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Logical (boolean) value
    Logical(bool),

    /// Integer value
    Integer(i64),

    /// Real (floating-point) value
    Real(f64),

    /// Character string
    Character(String),

    /// Sequence of values, possibly nested one level for explicit indices
    Array(Vec<ParamValue>),

    /// Mapping from labels to payload values
    Mapping(HashMap<String, ParamValue>),

    /// Null/unset value
    Null,
}

impl ParamValue {
    /// Create a new logical value.
    pub fn logical(value: bool) -> Self {
        ParamValue::Logical(value)
    }

    /// Create a new integer value.
    pub fn integer(value: i64) -> Self {
        ParamValue::Integer(value)
    }

    /// Create a new real value.
    pub fn real(value: f64) -> Self {
        ParamValue::Real(value)
    }

    /// Create a new character value.
    pub fn character<S: Into<String>>(value: S) -> Self {
        ParamValue::Character(value.into())
    }

    /// Create a new array from a vector of values.
    pub fn array(values: Vec<ParamValue>) -> Self {
        ParamValue::Array(values)
    }

    /// Create a new mapping from labels to values.
    pub fn mapping(entries: HashMap<String, ParamValue>) -> Self {
        ParamValue::Mapping(entries)
    }

    /// Get the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Logical(_) => "logical",
            ParamValue::Integer(_) => "integer",
            ParamValue::Real(_) => "real",
            ParamValue::Character(_) => "character",
            ParamValue::Array(_) => "array",
            ParamValue::Mapping(_) => "mapping",
            ParamValue::Null => "null",
        }
    }

    /// Check if this value has a Fortran literal form.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ParamValue::Logical(_)
                | ParamValue::Integer(_)
                | ParamValue::Real(_)
                | ParamValue::Character(_)
        )
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// Get a summary of this value for debugging/logging.
    pub fn summary(&self) -> String {
        match self {
            ParamValue::Logical(b) => format!("logical({})", b),
            ParamValue::Integer(i) => format!("integer({})", i),
            ParamValue::Real(f) => format!("real({:.6})", f),
            ParamValue::Character(s) => {
                if s.chars().count() > 20 {
                    let head: String = s.chars().take(17).collect();
                    format!("character(\"{}...\")", head)
                } else {
                    format!("character(\"{}\")", s)
                }
            }
            ParamValue::Array(items) => {
                format!("array[{}]", items.len())
            }
            ParamValue::Mapping(entries) => {
                format!("mapping({} keys)", entries.len())
            }
            ParamValue::Null => "null".to_string(),
        }
    }
}
