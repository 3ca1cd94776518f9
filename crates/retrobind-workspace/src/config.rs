use std::fs;
use std::path::{Path, PathBuf};

use retrobind_device::{DeviceDescriptor, DEFAULT_ROLE_LIMIT};
use retrobind_gamecontrollerdb::{current_platform, LazyDatabase};
use retrobind_resolve::Tables;

use crate::{parse_config, ConfigError};

/// Database file name used when the config does not name one.
pub const DEFAULT_DATABASE_PATH: &str = "gamecontrollerdb.txt";

/// Everything a configuration pass needs, parsed and validated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Community database file.
    pub database: PathBuf,
    /// Platform filter for database lines, `None` keeps every line.
    pub platform: Option<Box<str>>,
    pub tables: Tables,
    /// Maximum number of controllers per specialty role.
    pub specialty_limit: usize,
    /// Controllers in enumeration order.
    pub controllers: Vec<DeviceDescriptor>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let input = fs::read_to_string(path)?;
        parse_config(&input)
    }

    /// Database handle that reads the file on first use.
    pub fn database(&self) -> LazyDatabase {
        LazyDatabase::new(&self.database, self.platform.as_deref())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
            platform: current_platform().map(Into::into),
            tables: Tables::default(),
            specialty_limit: DEFAULT_ROLE_LIMIT,
            controllers: Vec::new(),
        }
    }
}
