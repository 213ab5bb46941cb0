//! # staff-shared
//!
//! Small, independent helpers shared by the staff management backend:
//!
//! - [`utils::case`]: camelCase to snake_case conversion
//! - [`utils::value`]: loosely typed values and their text form
//! - [`utils::env`]: required environment variable lookup
//! - [`utils::date`]: lenient `YYYY-MM-DD` parsing and formatting
//! - [`utils::path`]: request path normalization for policy lookup
//! - [`error`]: sentinel error catalogue with remediation hints
//! - [`upload`]: file upload sentinels and limit checks
//!
//! Every helper is a pure function of its input (plus, for [`utils::get_env`],
//! the process environment) and can be called concurrently.

pub use error::{AppError, SharedError};

/// Command-line front end
pub mod cli;

/// Sentinel errors, fixes and the crate-wide error hierarchy
pub mod error;

/// Configuration persistence for the command-line front end
pub mod storage;

/// File upload sentinels and checks
pub mod upload;

/// Shared utilities
pub mod utils;

pub type Result<T> = std::result::Result<T, AppError>;
