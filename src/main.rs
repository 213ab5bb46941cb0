use clap::Parser;
use staff_shared::cli::dispatcher::Dispatcher;
use staff_shared::cli::main_types::Cli;
use staff_shared::storage::config::Config;
use staff_shared::utils::logging;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: logger unavailable: {}", err);
    }

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    // An unreadable config is never replaced with defaults
    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    let mut dispatcher = Dispatcher::new(config, config_path);
    if let Err(err) = dispatcher.dispatch(cli.command) {
        log::error!("{} {}", err.severity().emoji(), err);
        if let Some(hint) = err.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
