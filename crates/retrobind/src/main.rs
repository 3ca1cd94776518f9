mod cli;
mod commands;
mod error;
mod logging;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use retrobind_device::DeviceClass;
use retrobind_input::Technology;
use retrobind_resolve::Resolver;
use retrobind_workspace::Config;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "retrobind.yaml";

fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                print_debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                return Ok(Config::default());
            }
            path
        }
    };
    let config = Config::load(&path)?;
    print_info!(
        "{} controllers configured in {}",
        config.controllers.len(),
        path.display()
    );
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let database = config.database();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Resolve { technology, player } => {
            let technology = technology
                .map(|name| name.parse::<Technology>())
                .transpose()
                .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
            let resolver = Resolver::new(database.get(), config.tables.clone());
            commands::resolve(&config, &resolver, technology, player, &mut out)?;
        }
        Command::Lookup { guid } => {
            commands::lookup(database.get(), &guid, &mut out)?;
        }
        Command::Specialty { class } => {
            let class: DeviceClass = class
                .parse()
                .map_err(|e: retrobind_device::Error| CliError::InvalidArgument(e.to_string()))?;
            let resolver = Resolver::new(database.get(), config.tables.clone());
            commands::specialty(&config, &resolver, class, &mut out)?;
        }
        #[cfg(feature = "sdl2-backend")]
        Command::Devices => {
            commands::devices(database.get(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup(cli.verbose, cli.no_color) {
        let _ = writeln!(io::stderr(), "unable to set up logger: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
