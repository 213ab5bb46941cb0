use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "staff-shared")]
#[command(about = "Shared helpers of the staff management backend, from the command line")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, env = "STAFF_SHARED_CONFIG_DIR")]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a camelCase identifier to snake_case
    Snake {
        /// Identifier to convert
        input: String,
    },
    /// Replace numeric segments of a request path with a placeholder
    Normalize {
        /// Request path, e.g. /api/v1/staff/630
        path: String,
    },
    /// Render a JSON value (or bare text) as a string
    Coerce {
        /// JSON value; anything that is not valid JSON is taken as text
        value: String,
        /// Returned for null values
        #[arg(long, default_value = "")]
        fallback: String,
    },
    /// Date parsing and formatting
    Date {
        #[command(subcommand)]
        command: DateCommands,
    },
    /// Read a required environment variable
    Env {
        /// Variable name
        name: String,
    },
    /// Error catalogue
    Errors {
        #[command(subcommand)]
        command: ErrorsCommands,
    },
    /// File upload checks
    Upload {
        #[command(subcommand)]
        command: UploadCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum DateCommands {
    /// Normalize a YYYY-MM-DD date, falling back to 1970-01-01
    Format {
        value: String,
    },
    /// Parse a YYYY-MM-DD date into a date/time
    Parse {
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ErrorsCommands {
    /// List every error and fix in the catalogue
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one catalogue entry by code
    Show {
        /// Error code, e.g. missing_env_var
        code: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum UploadCommands {
    /// Check a file name and size against the configured limits
    Check {
        file_name: String,
        /// Size in bytes
        size: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}
