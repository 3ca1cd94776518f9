//! Loader for the community-maintained SDL game controller database
//! (`gamecontrollerdb.txt`): one device per line, keyed by joystick GUID,
//! mapping community button names to physical primitives.
//!
//! Nothing here fails hard. A missing file is an empty database, malformed
//! lines are skipped and logged, and lookups that miss return `None`.

mod database;
mod entry;
mod lazy;
mod parse;

pub use database::{current_platform, MappingDatabase};
pub use entry::Entry;
pub use lazy::LazyDatabase;
