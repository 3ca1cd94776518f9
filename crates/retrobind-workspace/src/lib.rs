//! YAML configuration of a retrobind pass: where the community database
//! lives, the lookup tables and the connected controllers.

mod config;
mod parse;
mod v1;

use thiserror::Error;

pub use config::{Config, DEFAULT_DATABASE_PATH};
pub use parse::parse_config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("v1 config error: {0}")]
    V1ConfigError(#[from] v1::Error),
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}
