//! DirectInput codes.
//!
//! A code packs the device index in the high 16 bits and a local code in
//! the low 16 bits:
//!
//! | local range   | primitive                            |
//! |---------------|--------------------------------------|
//! | `0x00..0x10`  | reserved, never produced             |
//! | `0x10..0x20`  | positive half of axis `id`           |
//! | `0x20..0x30`  | negative half of axis `id`           |
//! | `0x30..0x40`  | hat `h`, `0x30 + h * 4 + direction`  |
//! | `0x40..`      | button `id`                          |
//!
//! Hat directions count clockwise from up, so hat 0 occupies `0x30..0x33`.
//! The reserved block keeps every bound code non-zero, so `0` only ever
//! means unbound.

use retrobind_input::{HatDirection, PhysicalPrimitive, Polarity};

/// Distance between the codes of two consecutive devices.
pub const DEVICE_STRIDE: u32 = 0x1_0000;

/// Code a sink reads as "no binding".
pub const UNBOUND: u32 = 0;

pub const AXIS_POSITIVE_BASE: u32 = 0x10;
pub const AXIS_NEGATIVE_BASE: u32 = 0x20;
/// Axes per device; each polarity gets its own 16-code block.
pub const AXIS_COUNT: u32 = AXIS_NEGATIVE_BASE - AXIS_POSITIVE_BASE;

pub const HAT_BASE: u32 = 0x30;
/// Hats per device, four directions each.
pub const HAT_COUNT: u32 = (BUTTON_BASE - HAT_BASE) / 4;

pub const BUTTON_BASE: u32 = 0x40;
/// Buttons fill the rest of the device block.
pub const BUTTON_COUNT: u32 = DEVICE_STRIDE - BUTTON_BASE;

const fn hat_ordinal(direction: HatDirection) -> u32 {
    match direction {
        HatDirection::Up => 0,
        HatDirection::Right => 1,
        HatDirection::Down => 2,
        HatDirection::Left => 3,
    }
}

/// Code of a primitive inside its device block.
pub fn local_code(primitive: PhysicalPrimitive) -> Option<u32> {
    match primitive {
        PhysicalPrimitive::Axis { id, polarity, .. } if id < AXIS_COUNT => Some(match polarity {
            Polarity::Positive => AXIS_POSITIVE_BASE + id,
            Polarity::Negative => AXIS_NEGATIVE_BASE + id,
        }),
        PhysicalPrimitive::Hat { index, direction } if u32::from(index) < HAT_COUNT => {
            Some(HAT_BASE + u32::from(index) * 4 + hat_ordinal(direction))
        }
        PhysicalPrimitive::Button(id) if id < BUTTON_COUNT => Some(BUTTON_BASE + id),
        _ => None,
    }
}

/// Full code for a primitive on the `device_index`th device, or `None` when
/// the primitive or the index does not fit the layout.
pub fn encode(device_index: u32, primitive: PhysicalPrimitive) -> Option<u32> {
    let local = local_code(primitive)?;
    device_index.checked_mul(DEVICE_STRIDE)?.checked_add(local)
}
