mod config;
mod parse;

use thiserror::Error;

use retrobind_input::{CanonicalInput, GuidParseError, InputParseError, PrimitiveParseError};

pub(crate) use config::ConfigV1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid guid for player {0}: {1}")]
    InvalidGuid(u8, GuidParseError),
    #[error("invalid technology for player {0}: {1}")]
    InvalidTechnology(u8, InputParseError),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputParseError),
    #[error("invalid primitive for {0}: {1}")]
    InvalidPrimitive(String, PrimitiveParseError),
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("player {0} is configured twice")]
    DuplicatePlayer(u8),
    #[error("player {0} maps {1} more than once")]
    DuplicateMapping(u8, CanonicalInput),
    #[error("sdl threshold must be within (0, 1], got {0}")]
    InvalidThreshold(f32),
    #[error("device error: {0}")]
    Device(#[from] retrobind_device::Error),
}
