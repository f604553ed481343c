// nmlgen/src/lib.rs

//! A Rust-native library for generating Fortran namelist input entries.
//!
//! This library provides functionality to:
//! - Render scalar parameter values as Fortran literals (logical constants,
//!   double precision reals with a `d` exponent, quoted strings)
//! - Build `  key(index) = value` entry lines for scalars, sequences, nested
//!   sequences with explicit indices, and keyed mappings
//! - Resolve symbolic labels such as atom kind names to their namelist indices
//! - Normalize parameter mapping keys to a single case with collision detection
//! - Convert parameter trees between formats (JSON, YAML)

pub mod entry;
pub mod error;
pub mod keys;
pub mod params;

pub use entry::{to_namelist_entry, to_namelist_entry_with_options};
pub use error::{NmlgenError, Result};
pub use keys::{lowercase_keys, normalize_keys, uppercase_keys, KeyCase};
pub use params::{FormatOptions, ParamValue};

#[cfg(feature = "json")]
/// Convert a parameter tree to a JSON string.
pub fn to_json(value: &ParamValue) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(NmlgenError::from)
}

#[cfg(feature = "json")]
/// Parse a parameter tree from a JSON string.
pub fn from_json(json: &str) -> Result<ParamValue> {
    serde_json::from_str(json).map_err(NmlgenError::from)
}

#[cfg(feature = "yaml")]
/// Convert a parameter tree to a YAML string.
pub fn to_yaml(value: &ParamValue) -> Result<String> {
    serde_yaml::to_string(value).map_err(NmlgenError::from)
}

#[cfg(feature = "yaml")]
/// Parse a parameter tree from a YAML string.
pub fn from_yaml(yaml: &str) -> Result<ParamValue> {
    serde_yaml::from_str(yaml).map_err(NmlgenError::from)
}
