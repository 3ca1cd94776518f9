use retrobind_gamecontrollerdb::Entry;
use retrobind_input::{
    Bitable, CanonicalInput, Guid, InputSet, PhysicalPrimitive, Technology,
};

use crate::disambiguate::DisambiguationKey;
use crate::error::{Error, Result};

/// Player slot a controller is assigned to, starting at 1.
pub type PlayerSlot = u8;

const INPUT_COUNT: usize = CanonicalInput::ALL.len();

type CapabilityTable = [Option<PhysicalPrimitive>; INPUT_COUNT];

/// Snapshot of one connected controller for the duration of a configuration
/// pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    guid: Guid,
    name: Box<str>,
    technology: Technology,
    device_index: u32,
    player: PlayerSlot,
    vendor_id: Option<u16>,
    product_id: Option<u16>,
    path: Option<Box<str>>,
    mapping: CapabilityTable,
    bound: InputSet,
}

impl DeviceDescriptor {
    pub fn builder(
        guid: Guid,
        name: impl Into<Box<str>>,
        technology: Technology,
    ) -> DescriptorBuilder {
        DescriptorBuilder::new(guid, name, technology)
    }

    /// GUID as reported by the device.
    pub fn guid(&self) -> Guid {
        self.guid
    }

    /// Family form of the GUID used for database lookups.
    pub fn normalized_guid(&self) -> Guid {
        self.guid.normalized()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn technology(&self) -> Technology {
        self.technology
    }

    /// Index of the device in its technology's own enumeration.
    pub fn device_index(&self) -> u32 {
        self.device_index
    }

    pub fn player(&self) -> PlayerSlot {
        self.player
    }

    /// USB vendor id, taken from the GUID when not given explicitly.
    pub fn vendor_id(&self) -> u16 {
        self.vendor_id.unwrap_or_else(|| self.guid.vendor_id())
    }

    /// USB product id, taken from the GUID when not given explicitly.
    pub fn product_id(&self) -> u16 {
        self.product_id.unwrap_or_else(|| self.guid.product_id())
    }

    /// Raw device path (HID or evdev) when known.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Primitive this device binds to `key`, if any.
    #[inline]
    pub fn primitive(&self, key: CanonicalInput) -> Option<PhysicalPrimitive> {
        self.mapping[key.index() as usize]
    }

    /// Inputs this device has a primitive for.
    #[inline]
    pub fn capabilities(&self) -> InputSet {
        self.bound
    }

    pub fn disambiguation_key(&self) -> DisambiguationKey {
        DisambiguationKey::new(self.technology, &self.name)
    }
}

/// Builder for [`DeviceDescriptor`].
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    descriptor: DeviceDescriptor,
}

impl DescriptorBuilder {
    pub fn new(guid: Guid, name: impl Into<Box<str>>, technology: Technology) -> Self {
        Self {
            descriptor: DeviceDescriptor {
                guid,
                name: name.into(),
                technology,
                device_index: 0,
                player: 1,
                vendor_id: None,
                product_id: None,
                path: None,
                mapping: [None; INPUT_COUNT],
                bound: InputSet::empty(),
            },
        }
    }

    pub fn device_index(mut self, index: u32) -> Self {
        self.descriptor.device_index = index;
        self
    }

    pub fn player(mut self, player: PlayerSlot) -> Self {
        self.descriptor.player = player;
        self
    }

    pub fn vendor_product(mut self, vendor_id: u16, product_id: u16) -> Self {
        self.descriptor.vendor_id = Some(vendor_id);
        self.descriptor.product_id = Some(product_id);
        self
    }

    pub fn path(mut self, path: impl Into<Box<str>>) -> Self {
        self.descriptor.path = Some(path.into());
        self
    }

    /// Bind a canonical input to a primitive, replacing any earlier binding.
    pub fn bind(mut self, key: CanonicalInput, primitive: PhysicalPrimitive) -> Self {
        self.descriptor.mapping[key.index() as usize] = Some(primitive);
        self.descriptor.bound.insert(key);
        self
    }

    /// Fill every input not bound yet from a community database entry.
    pub fn bind_community(mut self, entry: &Entry) -> Self {
        for key in CanonicalInput::ALL {
            let slot = &mut self.descriptor.mapping[key.index() as usize];
            if slot.is_none() {
                *slot = entry.primitive_for(key);
                if slot.is_some() {
                    self.descriptor.bound.insert(key);
                }
            }
        }
        self
    }

    pub fn build(self) -> Result<DeviceDescriptor> {
        if self.descriptor.player == 0 {
            return Err(Error::InvalidPlayer(self.descriptor.player));
        }
        Ok(self.descriptor)
    }
}
