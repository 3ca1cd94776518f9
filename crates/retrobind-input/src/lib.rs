//! Canonical vocabulary shared by every part of retrobind: the logical
//! inputs a player can press, the physical primitives a device exposes, the
//! input technologies and the SDL joystick GUID.

mod canonical;
mod guid;
mod primitive;
mod technology;

use thiserror::Error;

use retrobind_bit_mask::Bitmask;

pub use canonical::{reverted_axis, CanonicalInput};
pub use guid::{Guid, GuidParseError};
pub use primitive::{AxisRange, HatDirection, PhysicalPrimitive, Polarity, PrimitiveParseError};
pub use technology::Technology;

pub use retrobind_bit_mask::Bitable;

/// A set of canonical inputs.
pub type InputSet = Bitmask<CanonicalInput>;

/// Returned when a name does not denote any canonical input or technology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    #[error("unknown canonical input: {0}")]
    UnknownInput(String),
    #[error("unknown technology: {0}")]
    UnknownTechnology(String),
}
