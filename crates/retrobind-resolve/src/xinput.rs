//! XInput ordinals and the standard XInput pad layout.

use std::fmt;

use retrobind_input::{CanonicalInput, HatDirection, PhysicalPrimitive, Polarity};

/// Distance between the codes of two consecutive XInput slots.
pub const XINPUT_DEVICE_STRIDE: u32 = 0x100;

/// Code a sink reads as "no binding".
pub const UNBOUND: u32 = 0;

/// Local code of the button with ordinal 0.
pub const BUTTON_BASE: u32 = 1;

/// Local codes of axes start after the buttons; each slot takes two codes,
/// positive then negative.
pub const AXIS_BASE: u32 = 0x10;

/// XInput digital buttons in ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XInputButton {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    Back,
    Start,
    LeftThumb,
    RightThumb,
    Guide,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl XInputButton {
    pub const ALL: [XInputButton; 15] = [
        Self::A,
        Self::B,
        Self::X,
        Self::Y,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::Back,
        Self::Start,
        Self::LeftThumb,
        Self::RightThumb,
        Self::Guide,
        Self::DPadUp,
        Self::DPadDown,
        Self::DPadLeft,
        Self::DPadRight,
    ];

    #[inline]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(ordinal).ok()?).copied()
    }

    /// `XINPUT_GAMEPAD_*` bit in `wButtons`.
    pub const fn flag(self) -> u16 {
        match self {
            Self::DPadUp => 0x0001,
            Self::DPadDown => 0x0002,
            Self::DPadLeft => 0x0004,
            Self::DPadRight => 0x0008,
            Self::Start => 0x0010,
            Self::Back => 0x0020,
            Self::LeftThumb => 0x0040,
            Self::RightThumb => 0x0080,
            Self::LeftShoulder => 0x0100,
            Self::RightShoulder => 0x0200,
            Self::Guide => 0x0400,
            Self::A => 0x1000,
            Self::B => 0x2000,
            Self::X => 0x4000,
            Self::Y => 0x8000,
        }
    }

    /// XInput button a canonical input is on a standard pad.
    pub const fn from_canonical(key: CanonicalInput) -> Option<Self> {
        Some(match key {
            CanonicalInput::A => Self::A,
            CanonicalInput::B => Self::B,
            CanonicalInput::X => Self::X,
            CanonicalInput::Y => Self::Y,
            CanonicalInput::LeftShoulder => Self::LeftShoulder,
            CanonicalInput::RightShoulder => Self::RightShoulder,
            CanonicalInput::Select => Self::Back,
            CanonicalInput::Start => Self::Start,
            CanonicalInput::LeftThumb => Self::LeftThumb,
            CanonicalInput::RightThumb => Self::RightThumb,
            CanonicalInput::Hotkey => Self::Guide,
            CanonicalInput::Up => Self::DPadUp,
            CanonicalInput::Down => Self::DPadDown,
            CanonicalInput::Left => Self::DPadLeft,
            CanonicalInput::Right => Self::DPadRight,
            _ => return None,
        })
    }

    const fn from_hat(direction: HatDirection) -> Self {
        match direction {
            HatDirection::Up => Self::DPadUp,
            HatDirection::Down => Self::DPadDown,
            HatDirection::Left => Self::DPadLeft,
            HatDirection::Right => Self::DPadRight,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
            Self::LeftShoulder => "LEFT_SHOULDER",
            Self::RightShoulder => "RIGHT_SHOULDER",
            Self::Back => "BACK",
            Self::Start => "START",
            Self::LeftThumb => "LEFT_THUMB",
            Self::RightThumb => "RIGHT_THUMB",
            Self::Guide => "GUIDE",
            Self::DPadUp => "DPAD_UP",
            Self::DPadDown => "DPAD_DOWN",
            Self::DPadLeft => "DPAD_LEFT",
            Self::DPadRight => "DPAD_RIGHT",
        }
    }
}

impl fmt::Display for XInputButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// XInput analog inputs in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XInputAxis {
    LeftX,
    LeftY,
    LeftTrigger,
    RightX,
    RightY,
    RightTrigger,
}

impl XInputAxis {
    pub const ALL: [XInputAxis; 6] = [
        Self::LeftX,
        Self::LeftY,
        Self::LeftTrigger,
        Self::RightX,
        Self::RightY,
        Self::RightTrigger,
    ];

    #[inline]
    pub const fn slot(self) -> u32 {
        self as u32
    }

    pub fn from_slot(slot: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(slot).ok()?).copied()
    }

    pub const fn is_trigger(self) -> bool {
        matches!(self, Self::LeftTrigger | Self::RightTrigger)
    }

    /// Local code of one half of the axis.
    pub const fn local_code(self, polarity: Polarity) -> u32 {
        AXIS_BASE + self.slot() * 2 + polarity.is_negative() as u32
    }
}

/// Decoded XInput code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XInputCode {
    Button(XInputButton),
    Axis(XInputAxis, Polarity),
}

impl XInputCode {
    /// Maps a primitive in standard-layout numbering to an XInput input.
    pub fn from_primitive(primitive: PhysicalPrimitive) -> Option<Self> {
        match primitive {
            PhysicalPrimitive::Button(id) => XInputButton::from_ordinal(id).map(Self::Button),
            PhysicalPrimitive::Hat {
                index: 0,
                direction,
            } => Some(Self::Button(XInputButton::from_hat(direction))),
            PhysicalPrimitive::Hat { .. } => None,
            PhysicalPrimitive::Axis { id, polarity, .. } => {
                XInputAxis::from_slot(id).map(|axis| Self::Axis(axis, polarity))
            }
        }
    }

    pub const fn local_code(self) -> u32 {
        match self {
            Self::Button(button) => BUTTON_BASE + button.ordinal(),
            Self::Axis(axis, polarity) => axis.local_code(polarity),
        }
    }
}

/// Full code for a primitive on the `device_index`th XInput slot.
pub fn encode(device_index: u32, primitive: PhysicalPrimitive) -> Option<u32> {
    let local = XInputCode::from_primitive(primitive)?.local_code();
    device_index
        .checked_mul(XINPUT_DEVICE_STRIDE)?
        .checked_add(local)
}

/// Primitive SDL reports for a canonical input on a standard XInput pad.
pub const fn standard_primitive(key: CanonicalInput) -> PhysicalPrimitive {
    use CanonicalInput as K;
    use PhysicalPrimitive as P;

    match key {
        K::A => P::Button(0),
        K::B => P::Button(1),
        K::X => P::Button(2),
        K::Y => P::Button(3),
        K::LeftShoulder => P::Button(4),
        K::RightShoulder => P::Button(5),
        K::Select => P::Button(6),
        K::Start => P::Button(7),
        K::LeftThumb => P::Button(8),
        K::RightThumb => P::Button(9),
        K::Hotkey => P::Button(10),
        K::Up => P::hat(HatDirection::Up),
        K::Down => P::hat(HatDirection::Down),
        K::Left => P::hat(HatDirection::Left),
        K::Right => P::hat(HatDirection::Right),
        K::LeftStickLeft => P::axis(0, Polarity::Negative),
        K::LeftStickRight => P::axis(0, Polarity::Positive),
        K::LeftStickUp => P::axis(1, Polarity::Negative),
        K::LeftStickDown => P::axis(1, Polarity::Positive),
        K::LeftTrigger => P::axis(2, Polarity::Positive),
        K::RightStickLeft => P::axis(3, Polarity::Negative),
        K::RightStickRight => P::axis(3, Polarity::Positive),
        K::RightStickUp => P::axis(4, Polarity::Negative),
        K::RightStickDown => P::axis(4, Polarity::Positive),
        K::RightTrigger => P::axis(5, Polarity::Positive),
    }
}

/// The whole standard XInput layout, in canonical order.
pub fn standard_layout() -> impl Iterator<Item = (CanonicalInput, PhysicalPrimitive)> {
    CanonicalInput::ALL
        .into_iter()
        .map(|key| (key, standard_primitive(key)))
}

#[cfg(test)]
mod tests {
    use ahash::AHashSet;

    use super::*;

    #[test]
    fn ordinal_table_is_a_bijection() {
        let ordinals: AHashSet<u32> = XInputButton::ALL.iter().map(|b| b.ordinal()).collect();
        assert_eq!(ordinals.len(), XInputButton::ALL.len());
        for button in XInputButton::ALL {
            assert_eq!(XInputButton::from_ordinal(button.ordinal()), Some(button));
        }

        let mapped: Vec<XInputButton> = CanonicalInput::ALL
            .into_iter()
            .filter_map(XInputButton::from_canonical)
            .collect();
        let unique: AHashSet<XInputButton> = mapped.iter().copied().collect();
        assert_eq!(mapped.len(), 15);
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn native_flags_are_distinct_bits() {
        let mut seen = 0u16;
        for button in XInputButton::ALL {
            let flag = button.flag();
            assert_eq!(flag.count_ones(), 1);
            assert_eq!(seen & flag, 0);
            seen |= flag;
        }
        assert_eq!(XInputButton::A.flag(), 0x1000);
        assert_eq!(XInputButton::DPadRight.flag(), 0x0008);
    }

    #[test]
    fn standard_layout_encodes_to_matching_ordinals() {
        for (key, primitive) in standard_layout() {
            if let Some(button) = XInputButton::from_canonical(key) {
                assert_eq!(
                    encode(0, primitive),
                    Some(BUTTON_BASE + button.ordinal()),
                    "{key}"
                );
            }
        }
    }

    #[test]
    fn axes_encode_with_sign() {
        let left_up = standard_primitive(CanonicalInput::LeftStickUp);
        let left_down = standard_primitive(CanonicalInput::LeftStickDown);
        assert_eq!(encode(0, left_up), Some(AXIS_BASE + 3));
        assert_eq!(encode(0, left_down), Some(AXIS_BASE + 2));
        assert_eq!(
            encode(0, standard_primitive(CanonicalInput::RightTrigger)),
            Some(AXIS_BASE + 10)
        );
        assert_eq!(encode(2, left_down), Some(2 * XINPUT_DEVICE_STRIDE + AXIS_BASE + 2));
    }

    #[test]
    fn no_bound_code_collides_with_unbound() {
        let buttons = XInputButton::ALL.map(XInputCode::Button);
        let axes = XInputAxis::ALL.into_iter().flat_map(|axis| {
            [Polarity::Positive, Polarity::Negative].map(|polarity| XInputCode::Axis(axis, polarity))
        });
        let mut locals: Vec<u32> = buttons.into_iter().chain(axes).map(XInputCode::local_code).collect();

        assert!(locals.iter().all(|&local| local != UNBOUND && local < XINPUT_DEVICE_STRIDE));
        let total = locals.len();
        locals.sort_unstable();
        locals.dedup();
        assert_eq!(locals.len(), total);
        assert_eq!(encode(0, PhysicalPrimitive::Button(0)), Some(BUTTON_BASE));
    }

    #[test]
    fn unknown_primitives_are_unbound() {
        assert_eq!(encode(0, PhysicalPrimitive::Button(15)), None);
        assert_eq!(encode(0, PhysicalPrimitive::axis(6, Polarity::Positive)), None);
        assert_eq!(
            encode(
                0,
                PhysicalPrimitive::Hat {
                    index: 1,
                    direction: HatDirection::Up
                }
            ),
            None
        );
    }
}
