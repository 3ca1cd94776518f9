use std::io::Write;

use retrobind_input::Technology;
use retrobind_resolve::{ConfigurationPass, Resolver};
use retrobind_workspace::Config;

use crate::error::CliError;

/// Prints the code of every canonical input, one controller after the other.
///
/// Each controller is resolved for its own technology unless `technology`
/// overrides it.
pub(crate) fn resolve(
    config: &Config,
    resolver: &Resolver<'_>,
    technology: Option<Technology>,
    player: Option<u8>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let pass = ConfigurationPass::new(resolver, &config.controllers);

    let mut found = false;
    for (position, descriptor) in pass.controllers().iter().enumerate() {
        if player.is_some_and(|player| player != descriptor.player()) {
            continue;
        }
        let technology = technology.unwrap_or(descriptor.technology());
        let Some(resolved) = pass.resolve_controller(position, technology) else {
            continue;
        };
        found = true;

        writeln!(
            out,
            "player {}: {} [{technology}, index {}, {}]",
            descriptor.player(),
            descriptor.name(),
            descriptor.device_index(),
            resolved.sdl_path()
        )?;
        for (key, code) in &resolved.bindings {
            writeln!(out, "  {:<18} {code}", key.as_str())?;
        }
    }

    match player {
        Some(player) if !found => Err(CliError::UnknownPlayer(player)),
        _ => Ok(()),
    }
}
