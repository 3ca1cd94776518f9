use std::path::PathBuf;

use log::debug;

use retrobind_device::{DeviceDescriptor, SpecialtyDevice, SpecialtyTable, DEFAULT_ROLE_LIMIT};
use retrobind_gamecontrollerdb::current_platform;
use retrobind_input::{CanonicalInput, Guid, InputSet, PhysicalPrimitive, Technology};
use retrobind_resolve::{SdlOptions, Tables, VendorLayouts};

use crate::config::{Config, DEFAULT_DATABASE_PATH};

use super::config::{
    ConfigV1, ConfigV1Controller, ConfigV1Id, ConfigV1Layout, ConfigV1Sdl, ConfigV1Specialty,
};
use super::Error;

/// Platform value that turns the database platform filter off.
const ANY_PLATFORM: &str = "any";

impl ConfigV1 {
    pub fn to_config(&self) -> Result<Config, Error> {
        let database = self
            .database
            .as_deref()
            .map_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH), PathBuf::from);

        let platform = match self.platform.as_deref() {
            None => current_platform().map(Into::into),
            Some(platform) if platform.eq_ignore_ascii_case(ANY_PLATFORM) => None,
            Some(platform) => Some(platform.into()),
        };

        let sdl = parse_sdl(self.sdl.as_ref())?;
        let layouts = match &self.layouts {
            Some(layouts) => parse_layouts(layouts)?,
            None => VendorLayouts::builtin(),
        };
        let specialty_config = self.specialty.clone().unwrap_or_default();
        let specialty = parse_specialty(&specialty_config)?;
        let controllers = parse_controllers(&self.controllers)?;

        Ok(Config {
            database,
            platform,
            tables: Tables {
                layouts,
                specialty,
                sdl,
            },
            specialty_limit: specialty_config.limit.unwrap_or(DEFAULT_ROLE_LIMIT),
            controllers,
        })
    }
}

fn parse_sdl(raw: Option<&ConfigV1Sdl>) -> Result<SdlOptions, Error> {
    let mut options = SdlOptions::default();
    let Some(raw) = raw else {
        return Ok(options);
    };
    if let Some(engine) = &raw.engine {
        options.engine.clone_from(engine);
    }
    if let Some(threshold) = raw.threshold {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(Error::InvalidThreshold(threshold));
        }
        options.threshold = threshold;
    }
    Ok(options)
}

fn parse_layouts(raw: &[ConfigV1Layout]) -> Result<VendorLayouts, Error> {
    let mut layouts = VendorLayouts::empty();
    for layout in raw {
        let vendor = parse_id(&layout.vendor)?;
        let swaps = layout
            .swap
            .iter()
            .map(|[first, second]| Ok((first.parse()?, second.parse()?)))
            .collect::<Result<Vec<(CanonicalInput, CanonicalInput)>, Error>>()?;
        layouts.insert(vendor, swaps);
    }
    Ok(layouts)
}

/// Config rows are added after the built-in wheels.
fn parse_specialty(raw: &ConfigV1Specialty) -> Result<SpecialtyTable, Error> {
    let mut table = SpecialtyTable::builtin();
    let devices = raw
        .devices
        .iter()
        .map(|device| {
            SpecialtyDevice::new(
                &device.pattern,
                &device.name,
                device.priority,
                device.class.parse()?,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    table.extend(devices);
    Ok(table)
}

fn parse_controllers(raw: &[ConfigV1Controller]) -> Result<Vec<DeviceDescriptor>, Error> {
    let mut controllers: Vec<DeviceDescriptor> = Vec::with_capacity(raw.len());
    for controller in raw {
        if controllers.iter().any(|c| c.player() == controller.player) {
            return Err(Error::DuplicatePlayer(controller.player));
        }
        controllers.push(parse_controller(controller)?);
    }
    Ok(controllers)
}

fn parse_controller(raw: &ConfigV1Controller) -> Result<DeviceDescriptor, Error> {
    let guid: Guid = raw
        .guid
        .parse()
        .map_err(|e| Error::InvalidGuid(raw.player, e))?;
    let technology: Technology = raw
        .technology
        .parse()
        .map_err(|e| Error::InvalidTechnology(raw.player, e))?;
    let index = raw
        .index
        .unwrap_or_else(|| u32::from(raw.player.saturating_sub(1)));

    let mut builder = DeviceDescriptor::builder(guid, raw.name.as_str(), technology)
        .player(raw.player)
        .device_index(index);

    if raw.vid.is_some() || raw.pid.is_some() {
        let vendor = raw.vid.as_ref().map(parse_id).transpose()?;
        let product = raw.pid.as_ref().map(parse_id).transpose()?;
        builder = builder.vendor_product(
            vendor.unwrap_or_else(|| guid.vendor_id()),
            product.unwrap_or_else(|| guid.product_id()),
        );
    }
    if let Some(path) = &raw.path {
        builder = builder.path(path.as_str());
    }
    // One entry per input, whichever alias names it.
    let mut mapped = InputSet::empty();
    for (name, code) in &raw.mapping {
        let key: CanonicalInput = name.parse()?;
        if mapped.contains(key) {
            return Err(Error::DuplicateMapping(raw.player, key));
        }
        mapped.insert(key);
        let primitive: PhysicalPrimitive = code
            .parse()
            .map_err(|e| Error::InvalidPrimitive(name.clone(), e))?;
        builder = builder.bind(key, primitive);
    }

    let descriptor = builder.build()?;
    debug!(
        "player {}: {} ({technology}, index {index})",
        descriptor.player(),
        descriptor.name()
    );
    Ok(descriptor)
}

fn parse_id(raw: &ConfigV1Id) -> Result<u16, Error> {
    match raw {
        ConfigV1Id::Number(id) => Ok(*id),
        ConfigV1Id::Hex(text) => {
            let digits = text.trim();
            let digits = digits
                .strip_prefix("0x")
                .or_else(|| digits.strip_prefix("0X"))
                .unwrap_or(digits);
            u16::from_str_radix(digits, 16).map_err(|_| Error::InvalidId(text.clone()))
        }
    }
}
