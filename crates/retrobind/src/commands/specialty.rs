use std::io::Write;

use retrobind_device::DeviceClass;
use retrobind_resolve::{ConfigurationPass, Resolver};
use retrobind_workspace::Config;

use crate::error::CliError;

pub(crate) fn specialty(
    config: &Config,
    resolver: &Resolver<'_>,
    class: DeviceClass,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let pass = ConfigurationPass::new(resolver, &config.controllers);
    let matches = pass.specialty(class, config.specialty_limit);

    if matches.is_empty() {
        writeln!(out, "no {class} connected")?;
        return Ok(());
    }
    for found in matches {
        writeln!(
            out,
            "{class} {}: player {} {} ({}, priority {})",
            found.role_index + 1,
            found.controller.player(),
            found.controller.name(),
            found.device.name(),
            found.device.priority()
        )?;
    }
    Ok(())
}
