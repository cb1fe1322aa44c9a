//! SQL identifier validation.
//!
//! Table and column names cannot be passed through parameter binding, so
//! any identifier that reaches statement text must first pass this
//! allow-list check. Data values never go through here; they are always
//! bound as parameters by the storage backend.

use thiserror::Error;

/// A table or column name failed the safe-identifier grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unsafe SQL identifier '{0}': must start with a letter or underscore \
     and contain only letters, digits, and underscores"
)]
pub struct InvalidIdentifier(pub String);

/// Validates a SQL identifier (table or column name).
///
/// The name must fully match `[A-Za-z_][A-Za-z0-9_]*`. On success the
/// input is returned unchanged so call sites can validate and use a name
/// in one expression.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the name is empty, starts with a
/// digit, or contains any character outside ASCII letters, digits, and
/// underscores.
///
/// # Examples
///
/// ```
/// use tree_db_core::validate_identifier;
///
/// assert_eq!(validate_identifier("trees").unwrap(), "trees");
/// assert_eq!(validate_identifier("_staging_2024").unwrap(), "_staging_2024");
/// assert!(validate_identifier("2trees").is_err());
/// assert!(validate_identifier("trees; --").is_err());
/// ```
pub fn validate_identifier(name: &str) -> Result<&str, InvalidIdentifier> {
    let mut chars = name.chars();
    let ok = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if ok {
        Ok(name)
    } else {
        Err(InvalidIdentifier(name.to_string()))
    }
}
