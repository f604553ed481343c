// nmlgen/src/params/conversion.rs

//! Conversions from common Rust types into parameter values.

use super::value::ParamValue;
use std::collections::HashMap;

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Logical(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Real(value as f64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Real(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Character(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Character(value)
    }
}

/// Sequences convert element by element, so nested vectors build the
/// two-level arrays used for explicitly indexed entries.
impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue>> From<HashMap<String, T>> for ParamValue {
    fn from(entries: HashMap<String, T>) -> Self {
        ParamValue::Mapping(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ParamValue::Null,
        }
    }
}
