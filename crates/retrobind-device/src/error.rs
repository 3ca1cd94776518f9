use thiserror::Error;

/// Error type for building device descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Player slots are numbered from 1.
    #[error("invalid player slot: {0}")]
    InvalidPlayer(u8),
    /// The device class name is not known.
    #[error("unknown device class: {0}")]
    UnknownDeviceClass(String),
    /// A specialty table row has nothing to match against.
    #[error("empty specialty pattern for {0}")]
    EmptyPattern(String),
}

/// Convenient result alias for device operations.
pub type Result<T> = std::result::Result<T, Error>;
