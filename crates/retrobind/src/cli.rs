use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Print the code of every input of each configured controller.
    Resolve {
        /// Technology to resolve for, instead of each controller's own
        #[clap(short, long)]
        technology: Option<String>,
        /// Only resolve the controller of this player
        #[clap(short, long)]
        player: Option<u8>,
    },
    /// Print the community database entry for a GUID.
    Lookup {
        /// Joystick GUID, 32 hex characters
        guid: String,
    },
    /// Print the controllers picked for a specialty role.
    Specialty {
        /// Device class: wheel or lightgun
        #[clap(short, long, default_value = "wheel")]
        class: String,
    },
    /// List the controllers SDL sees right now.
    #[cfg(feature = "sdl2-backend")]
    Devices,
}

/// Translate controller inputs into emulator input codes.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_and_resolve() {
        let cli = Cli::parse_from([
            "retrobind",
            "-v",
            "--config",
            "pads.yaml",
            "resolve",
            "--technology",
            "sdl",
            "--player",
            "2",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("pads.yaml")));
        assert_eq!(
            cli.command,
            Command::Resolve {
                technology: Some("sdl".to_string()),
                player: Some(2)
            }
        );
    }

    #[test]
    fn specialty_defaults_to_wheels() {
        let cli = Cli::parse_from(["retrobind", "specialty"]);
        assert_eq!(
            cli.command,
            Command::Specialty {
                class: "wheel".to_string()
            }
        );
    }
}
