// nmlgen/src/entry.rs

//! Rendering of single namelist variables into input file text.

use std::collections::HashMap;

use crate::error::{NmlgenError, Result};
use crate::params::{FormatOptions, ParamValue};

/// Build the input file text for one namelist variable.
///
/// Scalars produce a single `  key = value` line. Sequences produce one line
/// per element: a plain element is indexed by its one-based position, while a
/// nested sequence spells out its index components explicitly and carries the
/// payload as its last element. Keyed mappings resolve every label through
/// `mapping` and emit their lines sorted by the resolved index. Label strings
/// among nested index components are resolved through `mapping` as well.
///
/// # Examples
///
/// ```
/// use nmlgen::{to_namelist_entry, ParamValue};
///
/// fn main() -> Result<(), nmlgen::NmlgenError> {
///     let verbosity = ParamValue::from(3i64);
///     assert_eq!(
///         to_namelist_entry("verbosity", &verbosity, None)?,
///         "  verbosity = 3\n"
///     );
///
///     let efield = ParamValue::from(vec![4i64, 5, 6]);
///     assert_eq!(
///         to_namelist_entry("efield", &efield, None)?,
///         "  efield(1) = 4\n  efield(2) = 5\n  efield(3) = 6\n"
///     );
///     Ok(())
/// }
/// ```
///
/// Keyed mappings need a label-to-index mapping:
///
/// ```
/// use std::collections::HashMap;
/// use nmlgen::{to_namelist_entry, ParamValue};
///
/// fn main() -> Result<(), nmlgen::NmlgenError> {
///     let mut kinds = HashMap::new();
///     kinds.insert("Co".to_string(), 1i64);
///     kinds.insert("O".to_string(), 3i64);
///
///     let mut hubbard_u = HashMap::new();
///     hubbard_u.insert("Co".to_string(), 3.5f64);
///     hubbard_u.insert("O".to_string(), 7.4f64);
///
///     let text = to_namelist_entry("hubbard_u", &ParamValue::from(hubbard_u), Some(&kinds))?;
///     assert_eq!(
///         text,
///         "  hubbard_u(1) =   3.5000000000d+00\n  hubbard_u(3) =   7.4000000000d+00\n"
///     );
///     Ok(())
/// }
/// ```
pub fn to_namelist_entry(
    key: &str,
    value: &ParamValue,
    mapping: Option<&HashMap<String, i64>>,
) -> Result<String> {
    to_namelist_entry_with_options(key, value, mapping, &FormatOptions::default())
}

/// Build the input file text for one namelist variable with explicit
/// formatting options.
///
/// # Examples
///
/// ```
/// use nmlgen::{to_namelist_entry_with_options, FormatOptions, ParamValue};
///
/// fn main() -> Result<(), nmlgen::NmlgenError> {
///     let options = FormatOptions {
///         quote_strings: false,
///     };
///     let basis = ParamValue::from("aiida.bas");
///     let text = to_namelist_entry_with_options("basisfile", &basis, None, &options)?;
///     assert_eq!(text, "  basisfile = aiida.bas\n");
///     Ok(())
/// }
/// ```
pub fn to_namelist_entry_with_options(
    key: &str,
    value: &ParamValue,
    mapping: Option<&HashMap<String, i64>>,
    options: &FormatOptions,
) -> Result<String> {
    match value {
        ParamValue::Mapping(entries) => {
            let mapping = mapping
                .ok_or_else(|| NmlgenError::missing_mapping("the value is a keyed mapping"))?;

            let mut lines = Vec::with_capacity(entries.len());
            for (label, payload) in entries {
                let index = *mapping
                    .get(label)
                    .ok_or_else(|| NmlgenError::label_not_found(label.as_str()))?;
                let rendered = payload.to_fortran_string_with_options(options)?;
                lines.push((index, format!("  {}({}) = {}\n", key, index, rendered)));
            }

            // Map iteration order is arbitrary; emit in ascending index
            // order, with the line text breaking ties.
            lines.sort();
            Ok(lines.into_iter().map(|(_, line)| line).collect())
        }

        ParamValue::Array(items) => {
            let mut output = String::new();
            for (position, item) in items.iter().enumerate() {
                let (index, payload) = match item {
                    ParamValue::Array(inner) => {
                        let (payload, components) = inner.split_last().ok_or_else(|| {
                            NmlgenError::invalid_value(item.summary(), item.type_name())
                        })?;
                        (resolve_index_components(components, mapping)?, payload)
                    }
                    scalar => ((position + 1).to_string(), scalar),
                };
                let rendered = payload.to_fortran_string_with_options(options)?;
                output.push_str(&format!("  {}({}) = {}\n", key, index, rendered));
            }
            Ok(output)
        }

        scalar => {
            let rendered = scalar.to_fortran_string_with_options(options)?;
            Ok(format!("  {} = {}\n", key, rendered))
        }
    }
}

/// Spell out the explicit index of a nested element. Integer components are
/// used as written, label strings are resolved through the mapping.
fn resolve_index_components(
    components: &[ParamValue],
    mapping: Option<&HashMap<String, i64>>,
) -> Result<String> {
    let mut resolved = Vec::with_capacity(components.len());
    for component in components {
        match component {
            ParamValue::Integer(index) => resolved.push(index.to_string()),
            ParamValue::Character(label) => {
                let mapping = mapping.ok_or_else(|| {
                    NmlgenError::missing_mapping(format!(
                        "cannot resolve the label '{}' in a nested sequence",
                        label
                    ))
                })?;
                let index = mapping
                    .get(label)
                    .ok_or_else(|| NmlgenError::label_not_found(label.as_str()))?;
                resolved.push(index.to_string());
            }
            other => {
                return Err(NmlgenError::invalid_index(
                    other.summary(),
                    other.type_name(),
                ))
            }
        }
    }
    Ok(resolved.join(","))
}
