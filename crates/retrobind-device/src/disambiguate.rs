use ahash::AHashMap;
use log::debug;

use retrobind_input::Technology;

use crate::descriptor::DeviceDescriptor;

/// Controllers sharing this key are indistinguishable to emulators that
/// address devices by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisambiguationKey {
    technology: Technology,
    name: Box<str>,
}

impl DisambiguationKey {
    pub fn new(technology: Technology, name: &str) -> Self {
        Self {
            technology,
            name: normalize_name(name).into(),
        }
    }

    pub fn technology(&self) -> Technology {
        self.technology
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Normalizes a device display name for comparison: trimmed, inner
/// whitespace collapsed to one space, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sub-index of every controller of a pass, parallel to the controller
/// slice it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubIndexMap {
    entries: Vec<u32>,
}

impl SubIndexMap {
    /// Sub-index of the controller at `position` in enumeration order.
    pub fn get(&self, position: usize) -> Option<u32> {
        self.entries.get(position).copied()
    }

    /// Sub-indices in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assigns each controller a zero-based index among the controllers that
/// share its [`DisambiguationKey`], in the order they are given.
pub fn disambiguate(controllers: &[DeviceDescriptor]) -> SubIndexMap {
    let mut seen: AHashMap<DisambiguationKey, u32> = AHashMap::new();
    let mut entries = Vec::with_capacity(controllers.len());

    for controller in controllers {
        let counter = seen.entry(controller.disambiguation_key()).or_insert(0);
        let sub_index = *counter;
        *counter += 1;

        if sub_index > 0 {
            debug!(
                "player {} is {} #{} on {}",
                controller.player(),
                controller.name(),
                sub_index,
                controller.technology()
            );
        }
        entries.push(sub_index);
    }

    SubIndexMap { entries }
}

/// Device path form used by SDL-based emulators, e.g. `SDL/1/Xbox Controller`.
pub fn sdl_device_path(sub_index: u32, name: &str) -> String {
    format!("SDL/{sub_index}/{}", name.trim())
}
