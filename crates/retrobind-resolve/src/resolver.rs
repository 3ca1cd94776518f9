use log::{debug, warn};

use retrobind_device::{DeviceDescriptor, SpecialtyTable};
use retrobind_gamecontrollerdb::{Entry, MappingDatabase};
use retrobind_input::{
    reverted_axis, AxisRange, CanonicalInput, PhysicalPrimitive, Polarity, Technology,
};

use crate::code::Code;
use crate::layout::VendorLayouts;
use crate::sdl::{SdlCode, SdlOptions};
use crate::{dinput, keyboard, xinput};

/// Per-call overrides of the resolution rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Resolve through the input's base key, reading it reversed or not
    /// regardless of the input's own direction.
    pub reversed: Option<bool>,
    /// Read the primitive as a half-axis trigger.
    pub as_trigger: bool,
}

impl ResolveOptions {
    pub fn reversed(reversed: bool) -> Self {
        Self {
            reversed: Some(reversed),
            ..Self::default()
        }
    }

    pub fn as_trigger() -> Self {
        Self {
            as_trigger: true,
            ..Self::default()
        }
    }
}

/// Immutable tables a resolver reads besides the mapping database.
#[derive(Debug, Clone)]
pub struct Tables {
    pub layouts: VendorLayouts,
    pub specialty: SpecialtyTable,
    pub sdl: SdlOptions,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            layouts: VendorLayouts::builtin(),
            specialty: SpecialtyTable::builtin(),
            sdl: SdlOptions::default(),
        }
    }
}

/// Turns canonical inputs of a device into technology codes.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    database: &'a MappingDatabase,
    tables: Tables,
}

impl<'a> Resolver<'a> {
    pub fn new(database: &'a MappingDatabase, tables: Tables) -> Self {
        Self { database, tables }
    }

    pub fn database(&self) -> &'a MappingDatabase {
        self.database
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn specialty(&self) -> &SpecialtyTable {
        &self.tables.specialty
    }

    /// Code for `key` on `descriptor`, for `technology`, on the
    /// `device_index`th device of that technology.
    ///
    /// Never fails: anything that cannot be resolved comes back as
    /// [`Code::Unbound`].
    pub fn resolve(
        &self,
        descriptor: &DeviceDescriptor,
        key: CanonicalInput,
        technology: Technology,
        device_index: u32,
    ) -> Code {
        self.resolve_with(
            descriptor,
            key,
            technology,
            device_index,
            ResolveOptions::default(),
        )
    }

    pub fn resolve_with(
        &self,
        descriptor: &DeviceDescriptor,
        key: CanonicalInput,
        technology: Technology,
        device_index: u32,
        options: ResolveOptions,
    ) -> Code {
        let code = self
            .physical(descriptor, key, options)
            .and_then(|primitive| self.encode(descriptor, primitive, technology, device_index));

        match code {
            Some(code) => {
                debug!("{} {key} -> {code}", descriptor.name());
                code
            }
            None => {
                warn!(
                    "{} (player {}): no {technology} binding for {key}",
                    descriptor.name(),
                    descriptor.player()
                );
                Code::Unbound(technology)
            }
        }
    }

    /// Primitive `key` reads on the device, with direction and trigger
    /// rules applied.
    pub fn physical(
        &self,
        descriptor: &DeviceDescriptor,
        key: CanonicalInput,
        options: ResolveOptions,
    ) -> Option<PhysicalPrimitive> {
        let key = self.tables.layouts.apply(descriptor.vendor_id(), key);

        let direct = match options.reversed {
            Some(_) => None,
            None => self.lookup(descriptor, key),
        };
        let primitive = match direct {
            Some(primitive) => primitive,
            None => {
                let (base, reversed) = reverted_axis(key);
                let reversed = options.reversed.unwrap_or(reversed);
                let primitive = self.lookup(descriptor, base)?;
                if reversed {
                    reverse(primitive)?
                } else {
                    primitive
                }
            }
        };

        if key.is_trigger() || options.as_trigger {
            return Some(as_trigger(primitive));
        }
        Some(primitive)
    }

    /// Hotkey falls back to select, read from select's own source.
    fn lookup(&self, descriptor: &DeviceDescriptor, key: CanonicalInput) -> Option<PhysicalPrimitive> {
        let primitive = self
            .source(descriptor, key)
            .and_then(|source| source.primitive(key));
        if primitive.is_none() && key == CanonicalInput::Hotkey {
            debug!("{}: hotkey falls back to select", descriptor.name());
            let select = CanonicalInput::Select;
            return self.source(descriptor, select)?.primitive(select);
        }
        primitive
    }

    /// Table `key` is read from. Both directions of an axis pair always come
    /// from the same table: the descriptor as soon as it binds either of
    /// them, then the community entry, then the standard XInput layout.
    fn source<'d>(&self, descriptor: &'d DeviceDescriptor, key: CanonicalInput) -> Option<Source<'d>>
    where
        'a: 'd,
    {
        if !descriptor
            .capabilities()
            .intersection(&key.axis_pair())
            .is_empty()
        {
            return Some(Source::Descriptor(descriptor));
        }
        if let Some(entry) = self.database.lookup_by_guid(&descriptor.guid()) {
            return Some(Source::Community(entry));
        }
        if is_xinput_device(descriptor) {
            return Some(Source::StandardXInput);
        }
        None
    }

    fn encode(
        &self,
        descriptor: &DeviceDescriptor,
        primitive: PhysicalPrimitive,
        technology: Technology,
        device_index: u32,
    ) -> Option<Code> {
        match technology {
            Technology::DirectInput => dinput::encode(device_index, primitive).map(Code::DirectInput),
            Technology::XInput => xinput::encode(device_index, primitive).map(Code::XInput),
            Technology::Sdl => Some(Code::Sdl(SdlCode::new(
                &self.tables.sdl,
                primitive,
                descriptor.guid(),
                device_index,
            ))),
            Technology::Keyboard => keyboard::encode(primitive).map(Code::Keyboard),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Source<'d> {
    Descriptor(&'d DeviceDescriptor),
    Community(&'d Entry),
    StandardXInput,
}

impl Source<'_> {
    fn primitive(self, key: CanonicalInput) -> Option<PhysicalPrimitive> {
        match self {
            Self::Descriptor(descriptor) => descriptor.primitive(key),
            Self::Community(entry) => entry.primitive_for(key),
            Self::StandardXInput => Some(xinput::standard_primitive(key)),
        }
    }
}

fn is_xinput_device(descriptor: &DeviceDescriptor) -> bool {
    descriptor.technology() == Technology::XInput || descriptor.guid().is_xinput()
}

/// Reads a primitive in the opposite direction. A button has no opposite.
fn reverse(primitive: PhysicalPrimitive) -> Option<PhysicalPrimitive> {
    match primitive {
        PhysicalPrimitive::Button(_) => None,
        other => Some(other.inverted()),
    }
}

/// Triggers read one half of their axis: the forced half when the mapping
/// names one, the positive half otherwise.
fn as_trigger(primitive: PhysicalPrimitive) -> PhysicalPrimitive {
    match primitive {
        PhysicalPrimitive::Axis {
            id,
            polarity,
            range,
        } => PhysicalPrimitive::Axis {
            id,
            polarity: match range {
                AxisRange::Half => polarity,
                AxisRange::Full => Polarity::Positive,
            },
            range: AxisRange::Half,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use retrobind_input::{Guid, HatDirection};

    use super::*;
    use crate::dinput::{AXIS_NEGATIVE_BASE, AXIS_POSITIVE_BASE, BUTTON_BASE, DEVICE_STRIDE};
    use crate::xinput::{XInputAxis, XInputButton};

    const XBOX_360: &str = "030000005e0400008e02000000007200";
    const DATABASE: &str = include_str!("../../retrobind-gamecontrollerdb/testdata/gamecontrollerdb.txt");

    fn guid(raw: &str) -> Guid {
        raw.parse().unwrap()
    }

    fn stick_pad() -> DeviceDescriptor {
        DeviceDescriptor::builder(guid(XBOX_360), "Custom Pad", Technology::DirectInput)
            .bind(CanonicalInput::Up, PhysicalPrimitive::axis(1, Polarity::Negative))
            .bind(CanonicalInput::Left, PhysicalPrimitive::axis(0, Polarity::Negative))
            .bind(CanonicalInput::A, PhysicalPrimitive::Button(2))
            .build()
            .unwrap()
    }

    #[test]
    fn end_to_end_negative_axis_on_second_device() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = stick_pad();

        let first = resolver.resolve(&pad, CanonicalInput::Up, Technology::DirectInput, 1);
        let second = resolver.resolve(&pad, CanonicalInput::Up, Technology::DirectInput, 1);

        assert_eq!(first, Code::DirectInput(DEVICE_STRIDE + AXIS_NEGATIVE_BASE + 1));
        assert_eq!(first, Code::DirectInput(65569));
        assert_eq!(first, second);
    }

    #[test]
    fn opposite_direction_reads_the_base_key_reversed() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = stick_pad();

        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::Down, Technology::DirectInput, 0),
            Code::DirectInput(AXIS_POSITIVE_BASE + 1)
        );
        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::Right, Technology::DirectInput, 0),
            Code::DirectInput(AXIS_POSITIVE_BASE)
        );
    }

    #[test]
    fn explicit_reversal_overrides_the_key() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = stick_pad();

        assert_eq!(
            resolver.resolve_with(
                &pad,
                CanonicalInput::Up,
                Technology::DirectInput,
                0,
                ResolveOptions::reversed(true)
            ),
            Code::DirectInput(AXIS_POSITIVE_BASE + 1)
        );
        assert_eq!(
            resolver.resolve_with(
                &pad,
                CanonicalInput::Down,
                Technology::DirectInput,
                0,
                ResolveOptions::reversed(false)
            ),
            Code::DirectInput(AXIS_NEGATIVE_BASE + 1)
        );
    }

    #[test]
    fn hats_reverse_to_the_opposite_direction() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(guid(XBOX_360), "Hat Pad", Technology::Sdl)
            .bind(CanonicalInput::Up, PhysicalPrimitive::hat(HatDirection::Up))
            .build()
            .unwrap();

        assert_eq!(
            resolver.physical(&pad, CanonicalInput::Down, ResolveOptions::default()),
            Some(PhysicalPrimitive::hat(HatDirection::Down))
        );
    }

    #[test]
    fn reversed_buttons_are_unbound() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(guid(XBOX_360), "Button Pad", Technology::DirectInput)
            .bind(CanonicalInput::Up, PhysicalPrimitive::Button(12))
            .build()
            .unwrap();

        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::Up, Technology::DirectInput, 0),
            Code::DirectInput(BUTTON_BASE + 12)
        );
        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::Down, Technology::DirectInput, 0),
            Code::Unbound(Technology::DirectInput)
        );
    }

    #[test]
    fn falls_back_to_community_entry() {
        let database = MappingDatabase::parse(DATABASE);
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(guid(XBOX_360), "Xbox 360 Controller", Technology::DirectInput)
            .build()
            .unwrap();

        assert_eq!(
            resolver.physical(&pad, CanonicalInput::A, ResolveOptions::default()),
            Some(PhysicalPrimitive::Button(0))
        );
        assert_eq!(
            resolver.physical(&pad, CanonicalInput::LeftStickUp, ResolveOptions::default()),
            Some(PhysicalPrimitive::axis(1, Polarity::Negative))
        );
    }

    #[test]
    fn partial_descriptor_owns_the_whole_axis_pair() {
        let database = MappingDatabase::parse(DATABASE);
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(guid(XBOX_360), "Xbox 360 Controller", Technology::DirectInput)
            .bind(CanonicalInput::Up, "a1~".parse().unwrap())
            .bind(CanonicalInput::LeftStickUp, "a5~".parse().unwrap())
            .build()
            .unwrap();
        let physical = |key| resolver.physical(&pad, key, ResolveOptions::default());

        assert_eq!(
            physical(CanonicalInput::Up),
            Some(PhysicalPrimitive::axis(1, Polarity::Negative))
        );
        assert_eq!(
            physical(CanonicalInput::Down),
            Some(PhysicalPrimitive::axis(1, Polarity::Positive))
        );
        assert_eq!(
            physical(CanonicalInput::LeftStickDown),
            Some(PhysicalPrimitive::axis(5, Polarity::Positive))
        );
        // Pairs the descriptor leaves alone still come from the database.
        assert_eq!(
            physical(CanonicalInput::Left),
            Some(PhysicalPrimitive::hat(HatDirection::Left))
        );
        assert_eq!(
            physical(CanonicalInput::RightStickDown),
            Some(PhysicalPrimitive::axis(4, Polarity::Positive))
        );
    }

    #[test]
    fn stick_direction_shares_the_axis_across_technologies() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(guid(XBOX_360), "Stick Pad", Technology::DirectInput)
            .bind(CanonicalInput::LeftStickUp, PhysicalPrimitive::axis(1, Polarity::Negative))
            .build()
            .unwrap();
        let resolve = |key, technology| resolver.resolve(&pad, key, technology, 0);

        assert_eq!(
            resolve(CanonicalInput::LeftStickUp, Technology::DirectInput),
            Code::DirectInput(AXIS_NEGATIVE_BASE + 1)
        );
        assert_eq!(
            resolve(CanonicalInput::LeftStickDown, Technology::DirectInput),
            Code::DirectInput(AXIS_POSITIVE_BASE + 1)
        );

        assert_eq!(
            resolve(CanonicalInput::LeftStickUp, Technology::XInput),
            Code::XInput(XInputAxis::LeftY.local_code(Polarity::Negative))
        );
        assert_eq!(
            resolve(CanonicalInput::LeftStickDown, Technology::XInput),
            Code::XInput(XInputAxis::LeftY.local_code(Polarity::Positive))
        );
        assert_eq!(XInputAxis::LeftY.slot(), 1);

        let up = resolve(CanonicalInput::LeftStickUp, Technology::Sdl).to_string();
        let down = resolve(CanonicalInput::LeftStickDown, Technology::Sdl).to_string();
        assert!(up.starts_with("engine:sdl,axis:1,direction:-,"), "{up}");
        assert!(down.starts_with("engine:sdl,axis:1,direction:+,"), "{down}");
    }

    #[test]
    fn xinput_devices_use_the_standard_layout() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(
            guid("78696e70757401000000000000000000"),
            "XInput Controller",
            Technology::XInput,
        )
        .build()
        .unwrap();

        for button in [XInputButton::A, XInputButton::Start, XInputButton::DPadLeft] {
            let key = CanonicalInput::ALL
                .into_iter()
                .find(|key| XInputButton::from_canonical(*key) == Some(button))
                .unwrap();
            assert_eq!(
                resolver.resolve(&pad, key, Technology::XInput, 0),
                Code::XInput(xinput::BUTTON_BASE + button.ordinal())
            );
        }
    }

    #[test]
    fn triggers_read_the_positive_half() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(guid(XBOX_360), "Trigger Pad", Technology::DirectInput)
            .bind(CanonicalInput::LeftTrigger, PhysicalPrimitive::axis(2, Polarity::Negative))
            .bind(
                CanonicalInput::RightTrigger,
                PhysicalPrimitive::Axis {
                    id: 5,
                    polarity: Polarity::Negative,
                    range: AxisRange::Half,
                },
            )
            .bind(CanonicalInput::LeftShoulder, PhysicalPrimitive::axis(4, Polarity::Negative))
            .build()
            .unwrap();

        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::LeftTrigger, Technology::DirectInput, 0),
            Code::DirectInput(AXIS_POSITIVE_BASE + 2)
        );
        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::RightTrigger, Technology::DirectInput, 0),
            Code::DirectInput(AXIS_NEGATIVE_BASE + 5)
        );
        assert_eq!(
            resolver.resolve_with(
                &pad,
                CanonicalInput::LeftShoulder,
                Technology::DirectInput,
                0,
                ResolveOptions::as_trigger()
            ),
            Code::DirectInput(AXIS_POSITIVE_BASE + 4)
        );
    }

    #[test]
    fn hotkey_falls_back_to_select() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(guid(XBOX_360), "No Guide", Technology::DirectInput)
            .bind(CanonicalInput::Select, PhysicalPrimitive::Button(6))
            .build()
            .unwrap();

        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::Hotkey, Technology::DirectInput, 0),
            Code::DirectInput(BUTTON_BASE + 6)
        );
    }

    #[test]
    fn nintendo_pads_swap_face_buttons() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(
            Guid::from_parts(3, 0x057e, 0x2009, 0),
            "Pro Controller",
            Technology::DirectInput,
        )
        .bind(CanonicalInput::A, PhysicalPrimitive::Button(0))
        .bind(CanonicalInput::B, PhysicalPrimitive::Button(1))
        .build()
        .unwrap();

        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::A, Technology::DirectInput, 0),
            Code::DirectInput(BUTTON_BASE + 1)
        );

        let plain = Tables {
            layouts: VendorLayouts::empty(),
            ..Tables::default()
        };
        let resolver = Resolver::new(&database, plain);
        assert_eq!(
            resolver.resolve(&pad, CanonicalInput::A, Technology::DirectInput, 0),
            Code::DirectInput(BUTTON_BASE)
        );
    }

    #[test]
    fn sdl_codes_carry_guid_and_port() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = stick_pad();

        assert_eq!(
            resolver
                .resolve(&pad, CanonicalInput::Up, Technology::Sdl, 1)
                .to_string(),
            "engine:sdl,axis:1,direction:-,threshold:0.5,guid:030000005e0400008e02000000007200,port:1"
        );
    }

    #[test]
    fn misses_are_unbound_sentinels() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let pad = DeviceDescriptor::builder(guid(XBOX_360), "Bare", Technology::DirectInput)
            .build()
            .unwrap();

        for technology in Technology::ALL {
            let code = resolver.resolve(&pad, CanonicalInput::X, technology, 0);
            assert_eq!(code, Code::Unbound(technology));
        }
    }

    #[test]
    fn keyboard_uses_button_scancodes() {
        let database = MappingDatabase::empty();
        let resolver = Resolver::new(&database, Tables::default());
        let keys = DeviceDescriptor::builder(Guid::default(), "Keyboard", Technology::Keyboard)
            .bind(CanonicalInput::Start, PhysicalPrimitive::Button(0x28))
            .build()
            .unwrap();

        assert_eq!(
            resolver.resolve(&keys, CanonicalInput::Start, Technology::Keyboard, 0),
            Code::Keyboard(0x28)
        );
    }
}
