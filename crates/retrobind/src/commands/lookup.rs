use std::io::Write;

use retrobind_gamecontrollerdb::MappingDatabase;

use crate::error::CliError;

/// Prints the community entry that serves `guid`.
pub(crate) fn lookup(
    database: &MappingDatabase,
    guid: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let entry = database
        .lookup_by_str(guid)
        .ok_or_else(|| CliError::NotFound(guid.to_string()))?;

    writeln!(out, "{} ({})", entry.name(), entry.guid())?;
    if let Some(platform) = entry.platform() {
        writeln!(out, "  platform: {platform}")?;
    }
    for (name, code) in entry.iter() {
        writeln!(out, "  {name}: {code}")?;
    }
    Ok(())
}
