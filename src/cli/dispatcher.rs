use crate::cli::main_types::{
    Commands, ConfigCommands, DateCommands, ErrorsCommands, UploadCommands,
};
use crate::error::{AppError, CliError, ErrorBody, Fix, SharedError};
use crate::storage::config::Config;
use crate::upload::{UploadError, check_upload};
use crate::utils::path::normalize_with_placeholder;
use crate::utils::value::Value;
use crate::utils::{format_date, get_env, parse_time, str_to_date, to_snake_case, to_string_or};
use serde_json::json;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn dispatch(&mut self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Snake { input } => {
                println!("{}", to_snake_case(&input));
                Ok(())
            }
            Commands::Normalize { path } => {
                let placeholder = self.config.placeholder();
                log::debug!("Normalizing with placeholder '{}'", placeholder);
                println!("{}", normalize_with_placeholder(&path, &placeholder));
                Ok(())
            }
            Commands::Coerce { value, fallback } => {
                let parsed = match serde_json::from_str::<serde_json::Value>(&value) {
                    Ok(json) => Value::from(json),
                    Err(_) => {
                        log::debug!("Input is not JSON, treating it as text");
                        Value::Text(value)
                    }
                };
                log::debug!("Coercing {:?}", parsed);
                println!("{}", to_string_or(&parsed, &fallback));
                Ok(())
            }
            Commands::Date { command } => self.handle_date_command(command),
            Commands::Env { name } => {
                log::debug!("Reading environment variable {}", name);
                println!("{}", get_env(&name)?);
                Ok(())
            }
            Commands::Errors { command } => self.handle_errors_command(command),
            Commands::Upload { command } => self.handle_upload_command(command),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_date_command(&self, command: DateCommands) -> Result<(), AppError> {
        match command {
            DateCommands::Format { value } => {
                let parsed = str_to_date(&Value::Text(value));
                println!("{}", format_date(&Value::DateTime(parsed)));
            }
            DateCommands::Parse { value } => {
                println!("{}", parse_time(&value));
            }
        }
        Ok(())
    }

    fn handle_errors_command(&self, command: ErrorsCommands) -> Result<(), AppError> {
        match command {
            ErrorsCommands::List { json } => {
                if json {
                    let errors: Vec<ErrorBody> =
                        SharedError::ALL.iter().copied().map(ErrorBody::from).collect();
                    let uploads: Vec<ErrorBody> =
                        UploadError::ALL.iter().copied().map(ErrorBody::from).collect();
                    let fixes: Vec<_> = Fix::ALL
                        .iter()
                        .map(|fix| json!({ "code": fix.code(), "text": fix.text() }))
                        .collect();
                    let body = json!({ "errors": errors, "upload_errors": uploads, "fixes": fixes });
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&body).map_err(CliError::from)?
                    );
                } else {
                    println!("Errors:");
                    for entry in SharedError::ALL {
                        println!("  {:<28} {}", entry.code(), entry.message());
                    }
                    println!("Upload errors:");
                    for entry in UploadError::ALL {
                        println!("  {:<28} {}", entry.code(), entry.message());
                    }
                    println!("Fixes:");
                    for fix in Fix::ALL {
                        println!("  {:<28} {}", fix.code(), fix.text());
                    }
                }
                Ok(())
            }
            ErrorsCommands::Show { code, json } => {
                let body = SharedError::from_code(&code)
                    .map(ErrorBody::from)
                    .or_else(|| UploadError::from_code(&code).map(ErrorBody::from))
                    .ok_or(CliError::UnknownCode { code })?;

                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&body).map_err(CliError::from)?
                    );
                } else {
                    println!("{}: {}", body.code, body.message);
                    if let Some(fix) = body.fix {
                        println!("Fix: {}", fix);
                    }
                }
                Ok(())
            }
        }
    }

    fn handle_upload_command(&self, command: UploadCommands) -> Result<(), AppError> {
        match command {
            UploadCommands::Check { file_name, size } => {
                let limits = self.config.upload_limits();
                log::debug!(
                    "Checking against max {} bytes, extensions {:?}",
                    limits.max_bytes,
                    limits.allowed_extensions
                );
                check_upload(&file_name, size, &limits)?;
                println!("{} accepted", file_name);
                Ok(())
            }
        }
    }

    fn handle_config_command(&mut self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                let limits = self.config.upload_limits();
                println!("placeholder = {}", self.config.placeholder());
                println!("max_upload_bytes = {}", limits.max_bytes);
                println!(
                    "allowed_extensions = {}",
                    limits.allowed_extensions.join(",")
                );
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.config.set(&key, &value)?;
                self.config.save(self.config_path.clone())?;
                log::debug!("Saved {} = {}", key, value);
                println!("{} = {}", key, value);
                Ok(())
            }
        }
    }
}
