use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::MappingDatabase;

/// A database that is read from disk the first time it is needed and then
/// kept for the rest of the configuration pass.
#[derive(Debug)]
pub struct LazyDatabase {
    path: PathBuf,
    platform: Option<Box<str>>,
    cell: OnceCell<MappingDatabase>,
}

impl LazyDatabase {
    pub fn new(path: impl Into<PathBuf>, platform: Option<&str>) -> Self {
        Self {
            path: path.into(),
            platform: platform.map(Into::into),
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has been read yet.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> &MappingDatabase {
        self.cell.get_or_init(|| {
            MappingDatabase::load_for_platform(&self.path, self.platform.as_deref())
        })
    }
}
