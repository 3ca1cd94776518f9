use ahash::AHashMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigV1 {
    pub version: u8,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub sdl: Option<ConfigV1Sdl>,
    /// Absent keeps the built-in layouts, an empty list disables them.
    #[serde(default)]
    pub layouts: Option<Vec<ConfigV1Layout>>,
    #[serde(default)]
    pub specialty: Option<ConfigV1Specialty>,
    #[serde(default)]
    pub controllers: Vec<ConfigV1Controller>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigV1Sdl {
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub threshold: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigV1Layout {
    pub vendor: ConfigV1Id,
    #[serde(default)]
    pub swap: Vec<[String; 2]>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigV1Specialty {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub devices: Vec<ConfigV1SpecialtyDevice>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigV1SpecialtyDevice {
    pub pattern: String,
    pub name: String,
    pub priority: u16,
    pub class: String, // wheel | lightgun
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigV1Controller {
    pub player: u8,
    pub name: String,
    pub guid: String,
    pub technology: String, // dinput | xinput | sdl | keyboard
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub vid: Option<ConfigV1Id>,
    #[serde(default)]
    pub pid: Option<ConfigV1Id>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub mapping: AHashMap<String, String>, // canonical input -> primitive code
}

/// USB id written as a number or a hex string (`"045e"`, `"0x045e"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ConfigV1Id {
    Number(u16),
    Hex(String),
}
