use ahash::AHashMap;
use smallvec::SmallVec;

use retrobind_input::CanonicalInput;

/// Nintendo USB vendor id.
pub const NINTENDO_VENDOR_ID: u16 = 0x057e;

type Swaps = SmallVec<[(CanonicalInput, CanonicalInput); 4]>;

/// Face-button swaps per USB vendor.
///
/// Some pads label their face buttons in a different position than the
/// Xbox layout the canonical inputs follow. Each pair is swapped both ways.
/// The built-in pairs need confirming against every target emulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorLayouts {
    swaps: AHashMap<u16, Swaps>,
}

impl VendorLayouts {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Nintendo pads swap A/B and X/Y.
    pub fn builtin() -> Self {
        let mut layouts = Self::empty();
        layouts.insert(
            NINTENDO_VENDOR_ID,
            [
                (CanonicalInput::A, CanonicalInput::B),
                (CanonicalInput::X, CanonicalInput::Y),
            ],
        );
        layouts
    }

    /// Adds swaps for a vendor, after any it already has.
    pub fn insert(
        &mut self,
        vendor_id: u16,
        swaps: impl IntoIterator<Item = (CanonicalInput, CanonicalInput)>,
    ) {
        self.swaps.entry(vendor_id).or_default().extend(swaps);
    }

    pub fn swaps(&self, vendor_id: u16) -> &[(CanonicalInput, CanonicalInput)] {
        self.swaps
            .get(&vendor_id)
            .map(|swaps| swaps.as_slice())
            .unwrap_or(&[])
    }

    /// The input to look up on a device of `vendor_id` for `key`.
    pub fn apply(&self, vendor_id: u16, key: CanonicalInput) -> CanonicalInput {
        for &(first, second) in self.swaps(vendor_id) {
            if key == first {
                return second;
            }
            if key == second {
                return first;
            }
        }
        key
    }

    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }
}
