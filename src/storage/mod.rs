//! Storage layer
//!
//! Persists the command-line front end's settings as TOML.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
