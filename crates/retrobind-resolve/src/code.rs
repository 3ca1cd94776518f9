use std::fmt;

use retrobind_input::Technology;

use crate::sdl::SdlCode;
use crate::{dinput, xinput};

/// Raw code an emulator expects for one canonical input.
#[derive(Debug, Clone, PartialEq)]
pub enum Code {
    DirectInput(u32),
    XInput(u32),
    Sdl(SdlCode),
    Keyboard(u32),
    /// Nothing on the device corresponds to the input.
    Unbound(Technology),
}

impl Code {
    pub fn technology(&self) -> Technology {
        match self {
            Self::DirectInput(_) => Technology::DirectInput,
            Self::XInput(_) => Technology::XInput,
            Self::Sdl(_) => Technology::Sdl,
            Self::Keyboard(_) => Technology::Keyboard,
            Self::Unbound(technology) => *technology,
        }
    }

    pub fn is_bound(&self) -> bool {
        !matches!(self, Self::Unbound(_))
    }

    /// Numeric value for DirectInput, XInput and keyboard codes.
    pub fn as_number(&self) -> Option<u32> {
        match self {
            Self::DirectInput(code) | Self::XInput(code) | Self::Keyboard(code) => Some(*code),
            Self::Sdl(_) | Self::Unbound(_) => None,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectInput(code) | Self::XInput(code) | Self::Keyboard(code) => {
                write!(f, "{code}")
            }
            Self::Sdl(code) => write!(f, "{code}"),
            Self::Unbound(Technology::DirectInput) => write!(f, "{}", dinput::UNBOUND),
            Self::Unbound(Technology::XInput) => write!(f, "{}", xinput::UNBOUND),
            Self::Unbound(Technology::Sdl | Technology::Keyboard) => f.write_str("None"),
        }
    }
}
