// nmlgen/src/params/mod.rs

//! Parameter values and their Fortran literal representations.

pub mod conversion;
pub mod formatting;
pub mod value;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use formatting::FormatOptions;
pub use value::ParamValue;
