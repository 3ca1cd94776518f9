use std::fmt;
use std::str::FromStr;

use crate::InputParseError;

/// Input API through which an emulator addresses a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Technology {
    DirectInput,
    XInput,
    Sdl,
    Keyboard,
}

impl Technology {
    pub const ALL: [Technology; 4] =
        [Self::DirectInput, Self::XInput, Self::Sdl, Self::Keyboard];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectInput => "dinput",
            Self::XInput => "xinput",
            Self::Sdl => "sdl",
            Self::Keyboard => "keyboard",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technology {
    type Err = InputParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name.trim().to_ascii_lowercase().as_str() {
            "dinput" | "directinput" | "di" => Self::DirectInput,
            "xinput" | "xi" => Self::XInput,
            "sdl" | "sdl2" => Self::Sdl,
            "keyboard" | "kb" => Self::Keyboard,
            _ => return Err(InputParseError::UnknownTechnology(name.to_string())),
        })
    }
}
