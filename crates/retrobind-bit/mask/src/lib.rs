mod bitmask;

pub use bitmask::{Bitmask, Iter};

/// A fieldless enum whose variants map onto distinct bits of a `u64`.
///
/// Usually implemented through `#[derive(Bit)]` from `retrobind-bit-derive`.
pub trait Bitable: Copy {
    /// Number of variants. Never exceeds 64.
    const COUNT: u32;

    fn bit(&self) -> u64;
    fn index(&self) -> u32;
    fn from_index(index: u32) -> Option<Self>;
}
