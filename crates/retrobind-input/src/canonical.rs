use std::fmt;
use std::str::FromStr;

use retrobind_bit_derive::Bit;

use crate::{InputParseError, InputSet, Polarity};

/// Logical controller inputs understood by every resolver.
///
/// The set is closed. The declaration order defines the bit index used by
/// [`crate::InputSet`] and by the per-device capability tables.
#[derive(Bit, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalInput {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
    LeftThumb,
    RightThumb,
    Start,
    Select,
    LeftStickUp,
    LeftStickDown,
    LeftStickLeft,
    LeftStickRight,
    RightStickUp,
    RightStickDown,
    RightStickLeft,
    RightStickRight,
    Hotkey,
}

impl CanonicalInput {
    /// Every canonical input in bit order.
    pub const ALL: [CanonicalInput; 25] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::A,
        Self::B,
        Self::X,
        Self::Y,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftTrigger,
        Self::RightTrigger,
        Self::LeftThumb,
        Self::RightThumb,
        Self::Start,
        Self::Select,
        Self::LeftStickUp,
        Self::LeftStickDown,
        Self::LeftStickLeft,
        Self::LeftStickRight,
        Self::RightStickUp,
        Self::RightStickDown,
        Self::RightStickLeft,
        Self::RightStickRight,
        Self::Hotkey,
    ];

    /// Redefines the second direction of an axis pair in terms of its
    /// reference direction.
    ///
    /// Up/down share `Up` as base key, left/right share `Left`; `down` and
    /// `right` come back with `reversed = true`. Every other input maps to
    /// itself.
    pub const fn reverted_axis(self) -> (CanonicalInput, bool) {
        match self {
            Self::Down => (Self::Up, true),
            Self::Right => (Self::Left, true),
            Self::LeftStickDown => (Self::LeftStickUp, true),
            Self::LeftStickRight => (Self::LeftStickLeft, true),
            Self::RightStickDown => (Self::RightStickUp, true),
            Self::RightStickRight => (Self::RightStickLeft, true),
            other => (other, false),
        }
    }

    /// The other direction of the same axis, for directional inputs.
    pub const fn opposite(self) -> Option<CanonicalInput> {
        Some(match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::LeftStickUp => Self::LeftStickDown,
            Self::LeftStickDown => Self::LeftStickUp,
            Self::LeftStickLeft => Self::LeftStickRight,
            Self::LeftStickRight => Self::LeftStickLeft,
            Self::RightStickUp => Self::RightStickDown,
            Self::RightStickDown => Self::RightStickUp,
            Self::RightStickLeft => Self::RightStickRight,
            Self::RightStickRight => Self::RightStickLeft,
            _ => return None,
        })
    }

    /// Inputs that read the same physical control: both directions of an
    /// axis, or the input alone.
    pub fn axis_pair(self) -> InputSet {
        let mut pair = InputSet::new(&[self]);
        if let Some(opposite) = self.opposite() {
            pair.insert(opposite);
        }
        pair
    }

    /// Field name used by the community mapping database.
    ///
    /// Both directions of a stick axis share the axis name (`lefty` for up
    /// and down).
    pub const fn community_name(self) -> &'static str {
        match self {
            Self::Up => "dpup",
            Self::Down => "dpdown",
            Self::Left => "dpleft",
            Self::Right => "dpright",
            Self::A => "a",
            Self::B => "b",
            Self::X => "x",
            Self::Y => "y",
            Self::LeftShoulder => "leftshoulder",
            Self::RightShoulder => "rightshoulder",
            Self::LeftTrigger => "lefttrigger",
            Self::RightTrigger => "righttrigger",
            Self::LeftThumb => "leftstick",
            Self::RightThumb => "rightstick",
            Self::Start => "start",
            Self::Select => "back",
            Self::LeftStickUp | Self::LeftStickDown => "lefty",
            Self::LeftStickLeft | Self::LeftStickRight => "leftx",
            Self::RightStickUp | Self::RightStickDown => "righty",
            Self::RightStickLeft | Self::RightStickRight => "rightx",
            Self::Hotkey => "guide",
        }
    }

    /// Excursion of a full-range axis that this input corresponds to.
    ///
    /// Up and left read the negative half of an axis, like SDL reports them.
    pub const fn nominal_polarity(self) -> Polarity {
        match self {
            Self::Up
            | Self::Left
            | Self::LeftStickUp
            | Self::LeftStickLeft
            | Self::RightStickUp
            | Self::RightStickLeft => Polarity::Negative,
            _ => Polarity::Positive,
        }
    }

    pub const fn is_trigger(self) -> bool {
        matches!(self, Self::LeftTrigger | Self::RightTrigger)
    }

    pub const fn is_dpad(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    pub const fn is_stick_direction(self) -> bool {
        matches!(
            self,
            Self::LeftStickUp
                | Self::LeftStickDown
                | Self::LeftStickLeft
                | Self::LeftStickRight
                | Self::RightStickUp
                | Self::RightStickDown
                | Self::RightStickLeft
                | Self::RightStickRight
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::A => "a",
            Self::B => "b",
            Self::X => "x",
            Self::Y => "y",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftTrigger => "left_trigger",
            Self::RightTrigger => "right_trigger",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::Start => "start",
            Self::Select => "select",
            Self::LeftStickUp => "left_stick_up",
            Self::LeftStickDown => "left_stick_down",
            Self::LeftStickLeft => "left_stick_left",
            Self::LeftStickRight => "left_stick_right",
            Self::RightStickUp => "right_stick_up",
            Self::RightStickDown => "right_stick_down",
            Self::RightStickLeft => "right_stick_left",
            Self::RightStickRight => "right_stick_right",
            Self::Hotkey => "hotkey",
        }
    }
}

/// Free-function form of [`CanonicalInput::reverted_axis`].
pub fn reverted_axis(key: CanonicalInput) -> (CanonicalInput, bool) {
    key.reverted_axis()
}

impl fmt::Display for CanonicalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalInput {
    type Err = InputParseError;

    /// Parses canonical names and the aliases used by frontend input configs.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lowered = name.trim().to_ascii_lowercase();
        Ok(match lowered.as_str() {
            "up" | "dpup" | "dpad_up" => Self::Up,
            "down" | "dpdown" | "dpad_down" => Self::Down,
            "left" | "dpleft" | "dpad_left" => Self::Left,
            "right" | "dpright" | "dpad_right" => Self::Right,
            "a" => Self::A,
            "b" => Self::B,
            "x" => Self::X,
            "y" => Self::Y,

            "left_shoulder" | "leftshoulder" | "lb" | "l1" | "pageup" => {
                Self::LeftShoulder
            }
            "right_shoulder" | "rightshoulder" | "rb" | "r1" | "pagedown" => {
                Self::RightShoulder
            }
            "left_trigger" | "lefttrigger" | "lt" | "l2" => Self::LeftTrigger,
            "right_trigger" | "righttrigger" | "rt" | "r2" => Self::RightTrigger,
            "left_thumb" | "leftthumb" | "leftstick" | "ls" | "l3" => Self::LeftThumb,
            "right_thumb" | "rightthumb" | "rightstick" | "rs" | "r3" => {
                Self::RightThumb
            }

            "start" => Self::Start,
            "select" | "back" => Self::Select,
            "hotkey" => Self::Hotkey,

            "left_stick_up" | "leftanalogup" | "joystick1up" => Self::LeftStickUp,
            "left_stick_down" | "leftanalogdown" | "joystick1down" => {
                Self::LeftStickDown
            }
            "left_stick_left" | "leftanalogleft" | "joystick1left" => {
                Self::LeftStickLeft
            }
            "left_stick_right" | "leftanalogright" | "joystick1right" => {
                Self::LeftStickRight
            }
            "right_stick_up" | "rightanalogup" | "joystick2up" => Self::RightStickUp,
            "right_stick_down" | "rightanalogdown" | "joystick2down" => {
                Self::RightStickDown
            }
            "right_stick_left" | "rightanalogleft" | "joystick2left" => {
                Self::RightStickLeft
            }
            "right_stick_right" | "rightanalogright" | "joystick2right" => {
                Self::RightStickRight
            }

            _ => return Err(InputParseError::UnknownInput(name.to_string())),
        })
    }
}
