//! Error types for environment variable decoding

/// Errors that can occur while filling a struct from environment variables.
///
/// Missing or empty variables are never errors: the affected field is left
/// untouched. Malformed scalar text is absorbed best-effort (zero, `false`,
/// or a dropped map pair), so the only failure a decode can report is a
/// map-shaped field whose type cannot hold string keys and values; errors
/// from nested sections bubble up unchanged.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Map-shaped field whose type is not convertible to a string-to-string
    /// map.
    ///
    /// Raised whenever a non-empty value is present for the field's
    /// variable, whatever the value contains.
    #[error("environment variable '{name}': map type {type_name} is not convertible to a string-to-string map")]
    UnsupportedMap {
        /// Name of the environment variable the field is tagged with
        name: String,
        /// Fully qualified type name of the offending field
        type_name: String,
    },
}

impl EnvError {
    /// Create an unsupported-map error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unsupported_map<T>(name: impl Into<String>) -> Self {
        Self::UnsupportedMap {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
        }
    }
}
