// nmlgen/src/error.rs

//! Error types for namelist entry generation.

use std::fmt;

/// Result type alias for nmlgen operations.
pub type Result<T> = std::result::Result<T, NmlgenError>;

/// Errors that can occur when formatting values or building namelist entries.
#[derive(Debug, Clone, PartialEq)]
pub enum NmlgenError {
    /// Value cannot be rendered as a Fortran literal
    InvalidValue { value: String, type_name: String },

    /// Nested sequence index component is neither an integer nor a label
    InvalidIndex { value: String, type_name: String },

    /// Key normalization was handed something other than a mapping
    NotAMapping { type_name: String },

    /// Distinct keys that become identical after case normalization
    CaseCollision { keys: Vec<String> },

    /// A label mapping was required but none was provided
    MissingMapping { reason: String },

    /// Label is absent from the provided mapping
    LabelNotFound { label: String },

    /// Serialization/deserialization error
    #[cfg(feature = "json")]
    Json(String),

    /// YAML serialization/deserialization error
    #[cfg(feature = "yaml")]
    Yaml(String),
}

impl fmt::Display for NmlgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmlgenError::InvalidValue { value, type_name } => {
                write!(
                    f,
                    "Invalid value '{}' of type '{}', accepts only logicals, integers, reals and strings",
                    value, type_name
                )
            }

            NmlgenError::InvalidIndex { value, type_name } => {
                write!(
                    f,
                    "Invalid index component '{}' of type '{}', nested sequence indices must be integers or label strings",
                    value, type_name
                )
            }

            NmlgenError::NotAMapping { type_name } => {
                write!(
                    f,
                    "Key normalization accepts only mappings as argument, got {}",
                    type_name
                )
            }

            NmlgenError::CaseCollision { keys } => {
                write!(
                    f,
                    "Keys repeated more than once when compared case-insensitively: {}",
                    keys.join(",")
                )
            }

            NmlgenError::MissingMapping { reason } => {
                write!(f, "Label mapping required: {}", reason)
            }

            NmlgenError::LabelNotFound { label } => {
                write!(f, "Unable to find the label '{}' in the mapping", label)
            }

            #[cfg(feature = "json")]
            NmlgenError::Json(msg) => write!(f, "JSON error: {}", msg),

            #[cfg(feature = "yaml")]
            NmlgenError::Yaml(msg) => write!(f, "YAML error: {}", msg),
        }
    }
}

impl std::error::Error for NmlgenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // None of these variants wrap another error type.
        None
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for NmlgenError {
    fn from(err: serde_json::Error) -> Self {
        NmlgenError::Json(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for NmlgenError {
    fn from(err: serde_yaml::Error) -> Self {
        NmlgenError::Yaml(err.to_string())
    }
}

impl NmlgenError {
    /// Create a new invalid value error.
    pub fn invalid_value(value: impl Into<String>, type_name: impl Into<String>) -> Self {
        NmlgenError::InvalidValue {
            value: value.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a new invalid index error.
    pub fn invalid_index(value: impl Into<String>, type_name: impl Into<String>) -> Self {
        NmlgenError::InvalidIndex {
            value: value.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a new not-a-mapping error.
    pub fn not_a_mapping(type_name: impl Into<String>) -> Self {
        NmlgenError::NotAMapping {
            type_name: type_name.into(),
        }
    }

    /// Create a new case collision error.
    pub fn case_collision(keys: Vec<String>) -> Self {
        NmlgenError::CaseCollision { keys }
    }

    /// Create a new missing mapping error.
    pub fn missing_mapping(reason: impl Into<String>) -> Self {
        NmlgenError::MissingMapping {
            reason: reason.into(),
        }
    }

    /// Create a new label not found error.
    pub fn label_not_found(label: impl Into<String>) -> Self {
        NmlgenError::LabelNotFound {
            label: label.into(),
        }
    }

    /// Get the error category for logging/metrics purposes.
    pub fn category(&self) -> &'static str {
        match self {
            NmlgenError::InvalidValue { .. } => "value",
            NmlgenError::InvalidIndex { .. } => "index",
            NmlgenError::NotAMapping { .. } => "type",
            NmlgenError::CaseCollision { .. } => "collision",
            NmlgenError::MissingMapping { .. } => "config",
            NmlgenError::LabelNotFound { .. } => "lookup",
            #[cfg(feature = "json")]
            NmlgenError::Json(_) => "json",
            #[cfg(feature = "yaml")]
            NmlgenError::Yaml(_) => "yaml",
        }
    }

    /// Check if this is a recoverable error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Shape errors are fixable by reshaping the offending value
            NmlgenError::InvalidValue { .. } => true,
            NmlgenError::InvalidIndex { .. } => true,
            NmlgenError::NotAMapping { .. } => true,

            // Colliding keys require the caller to rename its parameters
            NmlgenError::CaseCollision { .. } => false,

            // Lookup errors are fixable by supplying a complete mapping
            NmlgenError::MissingMapping { .. } => true,
            NmlgenError::LabelNotFound { .. } => true,

            // Serialization errors
            #[cfg(feature = "json")]
            NmlgenError::Json(_) => true,
            #[cfg(feature = "yaml")]
            NmlgenError::Yaml(_) => true,
        }
    }
}
