use thiserror::Error;

use retrobind_workspace::ConfigError;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no community mapping for {0}")]
    NotFound(String),
    #[error("no controller configured for player {0}")]
    UnknownPlayer(u8),
    #[cfg(feature = "sdl2-backend")]
    #[error("sdl error: {0}")]
    Sdl(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
