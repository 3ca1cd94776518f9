use std::io::Write;

use colored::Colorize;

use retrobind_device::{disambiguate, sdl_device_path, DeviceDescriptor};
use retrobind_gamecontrollerdb::MappingDatabase;
use retrobind_input::{Guid, Technology};

use crate::error::CliError;
use crate::print_warning;

/// Enumerates the joysticks SDL sees, in SDL order.
fn enumerate() -> Result<Vec<DeviceDescriptor>, CliError> {
    let sdl_ctx = sdl2::init().map_err(CliError::Sdl)?;
    let joystick_subsystem = sdl_ctx.joystick().map_err(CliError::Sdl)?;
    let count = joystick_subsystem
        .num_joysticks()
        .map_err(CliError::Sdl)?;

    let mut controllers = Vec::new();
    for index in 0..count {
        let joystick = match joystick_subsystem.open(index) {
            Ok(joystick) => joystick,
            Err(e) => {
                print_warning!("joystick {index} could not be opened: {e}");
                continue;
            }
        };
        let guid: Guid = match joystick.guid().string().parse() {
            Ok(guid) => guid,
            Err(e) => {
                print_warning!("joystick {index}: {e}");
                continue;
            }
        };
        let player = u8::try_from(controllers.len() + 1)
            .map_err(|_| CliError::InvalidArgument("too many joysticks".to_string()))?;
        let descriptor = DeviceDescriptor::builder(guid, joystick.name(), Technology::Sdl)
            .device_index(index)
            .player(player)
            .build()
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
        controllers.push(descriptor);
    }
    Ok(controllers)
}

/// Lists connected joysticks with the community entry that serves each.
pub(crate) fn devices(database: &MappingDatabase, out: &mut impl Write) -> Result<(), CliError> {
    let controllers = enumerate()?;
    if controllers.is_empty() {
        writeln!(out, "no joysticks connected")?;
        return Ok(());
    }

    let sub_indices = disambiguate(&controllers);
    for (position, controller) in controllers.iter().enumerate() {
        let sub_index = sub_indices.get(position).unwrap_or(0);
        let mapping = database
            .lookup_by_guid(&controller.guid())
            .map_or("no community mapping", |entry| entry.name());
        writeln!(
            out,
            "{} {} {:04x}:{:04x} {} ({mapping})",
            controller.device_index(),
            controller.guid(),
            controller.vendor_id(),
            controller.product_id(),
            sdl_device_path(sub_index, controller.name()),
        )?;
    }
    Ok(())
}
