//! Environment variable lookup

use crate::error::SharedError;
use std::env;

/// Read a required environment variable.
///
/// An unset variable and one set to the empty string are both reported as
/// [`SharedError::MissingEnvVar`]; callers cannot tell the two apart. A value
/// that is not valid unicode is treated as missing as well.
pub fn get_env(name: &str) -> Result<String, SharedError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => {
            log::debug!("Environment variable {} is unset or empty", name);
            Err(SharedError::MissingEnvVar)
        }
    }
}
