use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::descriptor::DeviceDescriptor;
use crate::error::{Error, Result};

/// Number of controllers that can hold a specialty role by default.
pub const DEFAULT_ROLE_LIMIT: usize = 2;

/// Role a specialty controller can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Wheel,
    Lightgun,
}

impl DeviceClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wheel => "wheel",
            Self::Lightgun => "lightgun",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceClass {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "wheel" => Ok(Self::Wheel),
            "lightgun" | "gun" => Ok(Self::Lightgun),
            _ => Err(Error::UnknownDeviceClass(name.to_string())),
        }
    }
}

/// One row of the specialty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialtyDevice {
    pattern: Box<str>,
    name: Box<str>,
    priority: u16,
    class: DeviceClass,
}

impl SpecialtyDevice {
    pub fn new(pattern: &str, name: &str, priority: u16, class: DeviceClass) -> Result<Self> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(Error::EmptyPattern(name.to_string()));
        }
        Ok(Self {
            pattern: pattern.to_ascii_lowercase().into(),
            name: name.into(),
            priority,
            class,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower values are preferred.
    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn class(&self) -> DeviceClass {
        self.class
    }

    /// Whether the row matches the controller's path or its
    /// `vid_XXXX&pid_YYYY` form.
    pub fn matches(&self, controller: &DeviceDescriptor) -> bool {
        if let Some(path) = controller.path() {
            if path.to_ascii_lowercase().contains(&*self.pattern) {
                return true;
            }
        }
        vid_pid(controller).contains(&*self.pattern)
    }
}

fn vid_pid(controller: &DeviceDescriptor) -> String {
    format!(
        "vid_{:04x}&pid_{:04x}",
        controller.vendor_id(),
        controller.product_id()
    )
}

/// A controller picked for a specialty role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialtyMatch<'a> {
    pub controller: &'a DeviceDescriptor,
    pub device: &'a SpecialtyDevice,
    /// Zero-based position in the role.
    pub role_index: usize,
}

/// Known specialty controllers ordered by preference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecialtyTable {
    devices: Vec<SpecialtyDevice>,
}

// Direct drive bases first, then belt and gear driven wheels.
const DIRECT_DRIVE: u16 = 10;
const BELT: u16 = 20;
const ENTRY: u16 = 30;

const BUILTIN_WHEELS: &[(&str, &str, u16)] = &[
    ("vid_046d&pid_c299", "Logitech G25", ENTRY),
    ("vid_046d&pid_c29b", "Logitech G27", ENTRY),
    ("vid_046d&pid_c24f", "Logitech G29", BELT),
    ("vid_046d&pid_c262", "Logitech G920", BELT),
    ("vid_046d&pid_c26d", "Logitech G923 (Xbox)", BELT),
    ("vid_046d&pid_c26e", "Logitech G923 (PlayStation)", BELT),
    ("vid_046d&pid_c266", "Logitech G PRO", DIRECT_DRIVE),
    ("vid_044f&pid_b677", "Thrustmaster T150", ENTRY),
    ("vid_044f&pid_b66e", "Thrustmaster T300RS", BELT),
    ("vid_044f&pid_b65e", "Thrustmaster T500RS", BELT),
    ("vid_044f&pid_b67f", "Thrustmaster TMX", ENTRY),
    ("vid_044f&pid_b669", "Thrustmaster TX", BELT),
    ("vid_044f&pid_b696", "Thrustmaster T248", BELT),
    ("vid_044f&pid_b69b", "Thrustmaster T818", DIRECT_DRIVE),
    ("vid_0eb7&pid_0020", "Fanatec CSL DD", DIRECT_DRIVE),
    ("vid_0eb7&pid_0004", "Fanatec ClubSport V2.5", BELT),
    ("vid_0eb7&pid_0006", "Fanatec Podium DD1", DIRECT_DRIVE),
    ("vid_0eb7&pid_0007", "Fanatec Podium DD2", DIRECT_DRIVE),
    ("vid_0eb7&pid_0e03", "Fanatec CSL Elite", BELT),
    ("vid_0eb7&pid_0024", "Fanatec GT DD Pro", DIRECT_DRIVE),
];

impl SpecialtyTable {
    pub fn new(devices: Vec<SpecialtyDevice>) -> Self {
        Self { devices }
    }

    /// Table of well known racing wheels.
    pub fn builtin() -> Self {
        let devices = BUILTIN_WHEELS
            .iter()
            .map(|(pattern, name, priority)| SpecialtyDevice {
                pattern: (*pattern).into(),
                name: (*name).into(),
                priority: *priority,
                class: DeviceClass::Wheel,
            })
            .collect();
        Self { devices }
    }

    /// Appends rows, keeping existing ones.
    pub fn extend(&mut self, devices: impl IntoIterator<Item = SpecialtyDevice>) {
        self.devices.extend(devices);
    }

    pub fn devices(&self) -> &[SpecialtyDevice] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Best ranked row of `class` matching the controller.
    pub fn classify(
        &self,
        controller: &DeviceDescriptor,
        class: DeviceClass,
    ) -> Option<&SpecialtyDevice> {
        self.devices
            .iter()
            .filter(|device| device.class == class && device.matches(controller))
            .min_by_key(|device| device.priority)
    }

    /// Picks at most `limit` controllers for the `class` role, ordered by
    /// ascending priority. Ties keep enumeration order.
    pub fn prioritize<'a>(
        &'a self,
        controllers: &'a [DeviceDescriptor],
        class: DeviceClass,
        limit: usize,
    ) -> Vec<SpecialtyMatch<'a>> {
        let mut matched: Vec<(&DeviceDescriptor, &SpecialtyDevice)> = controllers
            .iter()
            .filter_map(|controller| {
                self.classify(controller, class)
                    .map(|device| (controller, device))
            })
            .collect();
        // sort_by_key is stable
        matched.sort_by_key(|(_, device)| device.priority);

        if matched.len() > limit {
            debug!(
                "{} {class} devices found, keeping {limit}",
                matched.len()
            );
            matched.truncate(limit);
        }

        matched
            .into_iter()
            .enumerate()
            .map(|(role_index, (controller, device))| {
                info!(
                    "{class} {}: {} (player {})",
                    role_index + 1,
                    device.name(),
                    controller.player()
                );
                SpecialtyMatch {
                    controller,
                    device,
                    role_index,
                }
            })
            .collect()
    }
}
