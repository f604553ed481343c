// nmlgen/src/keys.rs

//! Case normalization for parameter mappings.
//!
//! Fortran namelist variables are case-insensitive, so parameter trees are
//! normalized to one casing before any entries are rendered. Keys that
//! collapse to the same normalized key are reported as collisions.

use std::collections::HashMap;

use crate::error::{NmlgenError, Result};
use crate::params::ParamValue;

/// Target casing for normalized keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    Lower,
    Upper,
}

impl KeyCase {
    fn apply(self, key: &str) -> String {
        match self {
            KeyCase::Lower => key.to_lowercase(),
            KeyCase::Upper => key.to_uppercase(),
        }
    }
}

/// Return a copy of a parameter mapping with every key folded to `case`.
///
/// Values are carried over untouched. Keys that become identical after the
/// fold are reported with [`NmlgenError::CaseCollision`], listing each
/// colliding normalized key once, and anything other than a mapping is
/// rejected with [`NmlgenError::NotAMapping`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use nmlgen::{lowercase_keys, ParamValue};
///
/// fn main() -> Result<(), nmlgen::NmlgenError> {
///     let mut params = HashMap::new();
///     params.insert("NSTEPI".to_string(), 1i64);
///     params.insert("Verbosity".to_string(), 3i64);
///
///     let normalized = lowercase_keys(&ParamValue::from(params))?;
///     assert_eq!(normalized.get("nstepi"), Some(&ParamValue::Integer(1)));
///     assert_eq!(normalized.get("verbosity"), Some(&ParamValue::Integer(3)));
///     Ok(())
/// }
/// ```
pub fn normalize_keys(value: &ParamValue, case: KeyCase) -> Result<HashMap<String, ParamValue>> {
    let entries = match value {
        ParamValue::Mapping(entries) => entries,
        other => return Err(NmlgenError::not_a_mapping(other.type_name())),
    };

    // Count normalized keys first so every collision is reported, not just
    // the one that happens to be inserted last.
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    for key in entries.keys() {
        *counts.entry(case.apply(key)).or_insert(0) += 1;
    }

    let mut collisions: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key)
        .collect();
    if !collisions.is_empty() {
        collisions.sort();
        return Err(NmlgenError::case_collision(collisions));
    }

    Ok(entries
        .iter()
        .map(|(key, value)| (case.apply(key), value.clone()))
        .collect())
}

/// Return a copy of a parameter mapping with lowercase keys.
pub fn lowercase_keys(value: &ParamValue) -> Result<HashMap<String, ParamValue>> {
    normalize_keys(value, KeyCase::Lower)
}

/// Return a copy of a parameter mapping with uppercase keys.
pub fn uppercase_keys(value: &ParamValue) -> Result<HashMap<String, ParamValue>> {
    normalize_keys(value, KeyCase::Upper)
}
