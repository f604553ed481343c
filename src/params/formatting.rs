// nmlgen/src/params/formatting.rs

//! Formatting options and Fortran literal output for parameter values.

use super::value::ParamValue;
use crate::error::{NmlgenError, Result};

/// Formatting options for Fortran literal output.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Whether to wrap character values in single quotes
    pub quote_strings: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            quote_strings: true,
        }
    }
}

impl ParamValue {
    /// Format this value as a Fortran literal with default options.
    pub fn to_fortran_string(&self) -> Result<String> {
        self.to_fortran_string_with_options(&FormatOptions::default())
    }

    /// Format this value as a Fortran literal.
    ///
    /// Only scalars have a literal form. Logicals render as `.true.` and
    /// `.false.`, reals as double precision literals with a `d` exponent
    /// marker, and strings are single quoted unless `quote_strings` is
    /// disabled. Arrays, mappings and null values are rejected with
    /// [`NmlgenError::InvalidValue`].
    pub fn to_fortran_string_with_options(&self, options: &FormatOptions) -> Result<String> {
        match self {
            ParamValue::Logical(b) => Ok(if *b { ".true." } else { ".false." }.to_string()),
            ParamValue::Integer(i) => Ok(i.to_string()),
            ParamValue::Real(f) => Ok(format_real(*f)),
            ParamValue::Character(s) => {
                if options.quote_strings {
                    Ok(format!("'{}'", s))
                } else {
                    Ok(s.clone())
                }
            }
            other => Err(NmlgenError::invalid_value(
                other.summary(),
                other.type_name(),
            )),
        }
    }
}

/// Render a real as a fixed-width Fortran double precision literal.
///
/// The output carries a ten digit mantissa and a `d` exponent with an
/// explicit sign and at least two digits, right justified to 18 columns:
/// `  3.1415900000d+00`.
fn format_real(value: f64) -> String {
    if value.is_infinite() {
        let literal = if value > 0.0 { "inf" } else { "-inf" };
        return format!("{:>18}", literal);
    }
    if value.is_nan() {
        return format!("{:>18}", "nan");
    }

    // `{:.10e}` writes an unpadded exponent without a plus sign (`2.5e-1`).
    let formatted = format!("{:.10e}", value);
    let literal = match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!("{}d{:+03}", mantissa, exponent),
            Err(_) => formatted.replace('e', "d"),
        },
        None => formatted,
    };
    format!("{:>18}", literal)
}
