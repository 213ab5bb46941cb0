//! Utils module - Shared utilities and helpers
//!
//! Independent, stateless helpers called by request handlers. None of them
//! share state, so every function is safe to call from any thread.

/// camelCase to snake_case conversion
pub mod case;

/// Lenient date parsing and formatting
pub mod date;

/// Required environment variable lookup
pub mod env;

/// Console output for the command-line front end
pub mod logging;

/// Request path normalization
pub mod path;

/// Loosely typed values and coercion to text
pub mod value;

pub use case::to_snake_case;
pub use date::{format_date, parse_time, str_to_date, zero_time};
pub use env::get_env;
pub use path::normalize_for_lookup;
pub use value::{Value, to_string_or};
