use std::path::Path;

use ahash::AHashMap;
use log::{debug, warn};

use retrobind_input::Guid;

use crate::entry::Entry;
use crate::parse::{parse_line, LineGuid};

/// Parsed community mapping database.
///
/// Entries are keyed by their normalized GUID; when several lines share a
/// normalized GUID the first one wins.
#[derive(Debug, Clone, Default)]
pub struct MappingDatabase {
    entries: Vec<Entry>,
    index: AHashMap<Guid, usize>,
    xinput_default: Option<Entry>,
}

impl MappingDatabase {
    /// An empty database: every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read the database at `path`.
    ///
    /// A missing or unreadable file yields an empty database.
    pub fn load(path: impl AsRef<Path>) -> Self {
        Self::load_for_platform(path, None)
    }

    /// Read the database at `path`, keeping only lines for `platform` and
    /// lines without a platform.
    pub fn load_for_platform(path: impl AsRef<Path>, platform: Option<&str>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(input) => {
                let database = Self::parse_for_platform(&input, platform);
                debug!(
                    "loaded {} controller mappings from {}",
                    database.len(),
                    path.display()
                );
                database
            }
            Err(e) => {
                warn!(
                    "controller database {} unavailable ({e}), community mappings disabled",
                    path.display()
                );
                Self::empty()
            }
        }
    }

    /// Parse database text, keeping every platform.
    pub fn parse(input: &str) -> Self {
        Self::parse_for_platform(input, None)
    }

    /// Parse database text. Malformed lines are logged and skipped.
    pub fn parse_for_platform(input: &str, platform: Option<&str>) -> Self {
        let mut database = Self::empty();

        for (number, line) in input.lines().enumerate() {
            let parsed = match parse_line(line) {
                Ok(Some(parsed)) => parsed,
                Ok(None) => continue,
                Err(e) => {
                    warn!("controller database line {}: {e}, skipped", number + 1);
                    continue;
                }
            };

            if let (Some(wanted), Some(actual)) = (platform, parsed.platform) {
                if !wanted.eq_ignore_ascii_case(actual) {
                    continue;
                }
            }

            match parsed.guid {
                LineGuid::XInputDefault => {
                    if database.xinput_default.is_none() {
                        database.xinput_default = Some(Entry::new(
                            Guid::default(),
                            parsed.name,
                            parsed.platform,
                            parsed.fields,
                        ));
                    }
                }
                LineGuid::Device(guid) => {
                    let key = guid.normalized();
                    if database.index.contains_key(&key) {
                        continue;
                    }
                    database.index.insert(key, database.entries.len());
                    database.entries.push(Entry::new(
                        guid,
                        parsed.name,
                        parsed.platform,
                        parsed.fields,
                    ));
                }
            }
        }

        database
    }

    /// Find the entry for a device GUID.
    ///
    /// XInput GUIDs without a device-specific entry fall back to the default
    /// XInput mapping when the database has one.
    pub fn lookup_by_guid(&self, guid: &Guid) -> Option<&Entry> {
        if let Some(&position) = self.index.get(&guid.normalized()) {
            return self.entries.get(position);
        }
        if guid.is_xinput() {
            return self.xinput_default.as_ref();
        }
        debug!("no community mapping for {guid}");
        None
    }

    /// Like [`lookup_by_guid`](Self::lookup_by_guid), for raw GUID strings.
    /// An unparseable GUID is a miss.
    pub fn lookup_by_str(&self, guid: &str) -> Option<&Entry> {
        match guid.parse::<Guid>() {
            Ok(guid) => self.lookup_by_guid(&guid),
            Err(e) => {
                warn!("cannot look up controller mapping for \"{guid}\": {e}");
                None
            }
        }
    }

    /// Default mapping for XInput devices, from the `xinput` line.
    pub fn xinput_default(&self) -> Option<&Entry> {
        self.xinput_default.as_ref()
    }

    /// Device entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.xinput_default.is_none()
    }
}

/// Platform name the community database uses for the running OS.
pub fn current_platform() -> Option<&'static str> {
    if cfg!(target_os = "windows") {
        Some("Windows")
    } else if cfg!(target_os = "macos") {
        Some("Mac OS X")
    } else if cfg!(target_os = "android") {
        Some("Android")
    } else if cfg!(target_os = "ios") {
        Some("iOS")
    } else if cfg!(target_os = "linux") {
        Some("Linux")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../testdata/gamecontrollerdb.txt");

    #[test]
    fn finds_entry_by_exact_guid() {
        let database = MappingDatabase::parse(
            "030000005e0400008e02000000007200,Xbox 360 Controller,a:b0,b:b1,leftx:a0,lefty:a1,",
        );
        let entry = database
            .lookup_by_str("030000005e0400008e02000000007200")
            .expect("entry");
        assert_eq!(entry.name(), "Xbox 360 Controller");
        assert_eq!(entry.get("a"), Some("b0"));
    }

    #[test]
    fn matches_on_normalized_guid() {
        let database = MappingDatabase::parse(FIXTURE);
        // Same pad, different CRC and driver version.
        let entry = database
            .lookup_by_str("0300a1b25e0400008e02000000001401")
            .expect("entry");
        assert_eq!(entry.name(), "Xbox 360 Controller");
        assert_eq!(entry.platform(), Some("Windows"));
    }

    #[test]
    fn first_line_wins_for_duplicate_family() {
        let database = MappingDatabase::parse(
            "030000005e0400008e02000000007200,First,a:b0,\n\
             030000005e0400008e02000010010000,Second,a:b9,\n",
        );
        assert_eq!(database.len(), 1);
        let entry = database
            .lookup_by_str("030000005e0400008e02000010010000")
            .expect("entry");
        assert_eq!(entry.name(), "First");
    }

    #[test]
    fn platform_filter_skips_other_platforms() {
        let database = MappingDatabase::parse_for_platform(FIXTURE, Some("linux"));
        let entry = database
            .lookup_by_str("030000005e0400008e02000000007200")
            .expect("entry");
        assert_eq!(entry.platform(), Some("Linux"));
        assert_eq!(entry.get("guide"), Some("b8"));
        // The xinput line has no platform and is always kept.
        assert!(database.xinput_default().is_some());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let database = MappingDatabase::parse(
            "garbage line\n\
             030000005e0400008e02000000007200,,a:b0\n\
             030000004c050000c405000000000000,PS4 Controller,a:b1,broken\n\
             03000000c82d00000160000000000000,8BitDo SN30 Pro,a:b1,\n",
        );
        assert_eq!(database.len(), 1);
        assert!(database
            .lookup_by_str("03000000c82d00000160000000000000")
            .is_some());
        assert!(database
            .lookup_by_str("030000004c050000c405000000000000")
            .is_none());
    }

    #[test]
    fn missing_file_is_an_empty_database() {
        let database = MappingDatabase::load("/nonexistent/gamecontrollerdb.txt");
        assert!(database.is_empty());
        assert!(database
            .lookup_by_str("030000005e0400008e02000000007200")
            .is_none());
    }

    #[test]
    fn loads_fixture_from_disk() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/gamecontrollerdb.txt");
        let database = MappingDatabase::load(path);
        assert_eq!(database.len(), 8);
    }

    #[test]
    fn xinput_guid_falls_back_to_default_mapping() {
        let database = MappingDatabase::parse(FIXTURE);
        let entry = database
            .lookup_by_str("78696e70757401000000000000000000")
            .expect("xinput default");
        assert_eq!(entry.name(), "XInput Controller");
        assert_eq!(entry.get("righttrigger"), Some("a5"));
    }

    #[test]
    fn unknown_and_invalid_guids_miss() {
        let database = MappingDatabase::parse(FIXTURE);
        assert!(database
            .lookup_by_str("03000000ffff0000ffff000000000000")
            .is_none());
        assert!(database.lookup_by_str("nope").is_none());
    }
}
