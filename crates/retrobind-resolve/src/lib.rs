//! Translation of canonical inputs into the raw codes each input technology
//! expects.
//!
//! A [`Resolver`] holds the community [`MappingDatabase`] and the other
//! lookup tables of a configuration pass. For a device and a canonical input
//! it finds the physical primitive (the device's own mapping, the community
//! entry for its GUID, or the standard XInput layout), applies direction and
//! trigger rules, and encodes the result as a [`Code`].

pub mod dinput;
pub mod keyboard;
pub mod xinput;

mod code;
mod layout;
mod pass;
mod resolver;
mod sdl;

pub use code::Code;
pub use layout::{VendorLayouts, NINTENDO_VENDOR_ID};
pub use pass::{ConfigurationPass, ResolvedController};
pub use resolver::{ResolveOptions, Resolver, Tables};
pub use sdl::{SdlBinding, SdlCode, SdlOptions, DEFAULT_ENGINE, DEFAULT_THRESHOLD};
pub use xinput::{XInputAxis, XInputButton, XInputCode};

pub use retrobind_device::disambiguate;
pub use retrobind_gamecontrollerdb::MappingDatabase;
pub use retrobind_input::reverted_axis;
