//! Environment variable-based struct population
//!
//! This library fills fields of an existing, possibly nested, struct in
//! place from environment variables, driven by per-field `#[env(...)]`
//! annotations.
//!
//! # Features
//!
//! - **Declarative**: Automatic implementation with `#[derive(EnvFill)]`
//! - **In-place**: The caller owns the struct; decoding only mutates
//!   annotated fields that have a value set
//! - **Case-insensitive annotations**: Variable names are upper-cased
//!   before lookup
//! - **Nested sections**: Recurse into embedded structs, including
//!   `Option`/`Box` owned references allocated on demand
//! - **Best-effort scalars**: Malformed numbers and booleans coerce to
//!   zero and `false` instead of failing the decode
//!
//! # Value Parsing
//!
//! - Strings: `DATABASE_URL=postgres://localhost/db` (verbatim)
//! - Integers: `MAX_CONNECTIONS=42`, with auto-detected radix prefixes
//!   (`0xff`, `0o755`, `0755`, `0b101`) and saturation to the field's
//!   width
//! - Booleans: `DEBUG=true` (`1`/`t`/`T`/`true`/`TRUE`/`True`; anything
//!   else is `false`)
//! - Lists: `TAGS=a,b,c` decodes `Vec<T>` for any scalar `T`
//! - Maps: `LABELS=team=core,tier=web` decodes `HashMap<String, String>`
//!   or `BTreeMap<String, String>`
//!
//! A variable that is unset or set to the empty string leaves the field's
//! current value untouched; a missing variable is never an error.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use envfill::EnvFill;
//!
//! #[derive(Debug, Default, EnvFill)]
//! struct Config {
//!     // Annotation case is irrelevant: looks up DATABASE_URL
//!     #[env(name = "database_url")]
//!     pub database_url: String,
//!
//!     // Bare annotation: looks up PORT
//!     #[env]
//!     pub port: u16,
//!
//!     #[env]
//!     pub labels: HashMap<String, String>,
//!
//!     // No annotation: never touched
//!     pub internal: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! #     std::env::set_var("PORT", "8080");
//! #     std::env::set_var("LABELS", "team=core,tier=web");
//! #     let config = Config::from_env()?;
//! #     assert_eq!(config.database_url, "postgres://localhost/db");
//! #     assert_eq!(config.port, 8080);
//! #     assert_eq!(config.labels["team"], "core");
//! #     assert_eq!(config.internal, "");
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env]` / `#[env(name = "custom_name")]`
//!
//! Mark a field as decodable. With `name`, the variable base name is the
//! given string instead of the field identifier. The final name is always
//! upper-cased before lookup. Fields without any `#[env]` attribute are
//! skipped entirely.
//!
//! ## `#[env(nested)]`
//!
//! Recurse into a nested section instead of looking the field up. The
//! section type derives `EnvFill` itself and declares its own variable
//! names. Sections behind `Option` or `Box` are allocated with `Default`
//! when empty, so a config tree can be grown on demand:
//!
//! ```rust
//! use envfill::EnvFill;
//!
//! #[derive(Debug, Default, EnvFill)]
//! struct Database {
//!     #[env(name = "DB_HOST")]
//!     pub host: String,
//! }
//!
//! #[derive(Debug, Default, EnvFill)]
//! struct Config {
//!     #[env(nested)]
//!     pub database: Option<Box<Database>>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DB_HOST", "localhost");
//! #     let mut config = Config::default();
//! #     config.fill_from_env()?;
//! #     assert_eq!(config.database.unwrap().host, "localhost");
//! #     Ok(())
//! # }
//! ```
//!
//! ## `#[env(prefix = "PREFIX_")]` (struct level)
//!
//! Prepend a prefix to every variable name declared by the struct:
//!
//! ```rust
//! use envfill::EnvFill;
//!
//! #[derive(Debug, Default, EnvFill)]
//! #[env(prefix = "MYAPP_")]
//! struct Config {
//!     // Looks up MYAPP_DATABASE_URL
//!     #[env]
//!     pub database_url: String,
//! }
//! ```

#[doc(hidden)]
pub mod de;

mod error;

pub use envfill_derive::EnvFill;
pub use error::EnvError;

// Re-export for macro-generated code
#[doc(hidden)]
pub use anyhow;

/// In-place decoding of environment variables into a struct.
///
/// Implemented with `#[derive(EnvFill)]`. The generated code visits the
/// struct's fields in declaration order, recursing into `#[env(nested)]`
/// sections and coercing the value of each annotated leaf field whose
/// variable is set and non-empty. The first error aborts the remaining
/// traversal at every level.
pub trait EnvFill {
    /// Fill annotated fields from the process environment, leaving every
    /// other field (and every field whose variable is unset or empty)
    /// untouched.
    fn fill_from_env(&mut self) -> Result<(), EnvError>;
}

impl<T: EnvFill> EnvFill for Box<T> {
    fn fill_from_env(&mut self) -> Result<(), EnvError> {
        (**self).fill_from_env()
    }
}

/// An empty owned reference is allocated with `Default` before recursing,
/// transferring ownership of the fresh instance to the containing value.
impl<T: EnvFill + Default> EnvFill for Option<T> {
    fn fill_from_env(&mut self) -> Result<(), EnvError> {
        self.get_or_insert_with(T::default).fill_from_env()
    }
}
