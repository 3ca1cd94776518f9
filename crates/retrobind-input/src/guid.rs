use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Prefix of the GUIDs SDL assigns to XInput slots (`"xinput"` in ASCII).
const XINPUT_PREFIX: &[u8; 6] = b"xinput";

/// Driver signature byte SDL writes for devices opened through XInput.
const XINPUT_DRIVER_SIGNATURE: u8 = b'x';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuidParseError {
    #[error("guid must be 32 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("guid contains a non-hex character: {0}")]
    InvalidCharacter(String),
}

/// SDL joystick GUID.
///
/// Byte layout: bus (LE16), name CRC (LE16), vendor (LE16), zero,
/// product (LE16), zero, version (LE16), driver signature, driver data.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Guid([u8; 16]);

impl Guid {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds the GUID SDL derives from a Linux-style input id.
    pub fn from_parts(bus: u16, vendor: u16, product: u16, version: u16) -> Self {
        let mut bytes = [0u8; 16];
        let parts = [bus, 0, vendor, 0, product, 0, version, 0];
        for (chunk, part) in bytes.chunks_exact_mut(2).zip(parts.iter()) {
            chunk.copy_from_slice(&part.to_le_bytes());
        }
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    #[inline]
    fn le16(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.0[offset], self.0[offset + 1]])
    }

    pub fn bus(&self) -> u16 {
        self.le16(0)
    }

    pub fn crc(&self) -> u16 {
        self.le16(2)
    }

    pub fn vendor_id(&self) -> u16 {
        self.le16(4)
    }

    pub fn product_id(&self) -> u16 {
        self.le16(8)
    }

    pub fn version(&self) -> u16 {
        self.le16(12)
    }

    pub const fn driver_signature(&self) -> u8 {
        self.0[14]
    }

    /// Whether SDL enumerated the device through XInput.
    pub fn is_xinput(&self) -> bool {
        self.0.starts_with(XINPUT_PREFIX)
            || self.driver_signature() == XINPUT_DRIVER_SIGNATURE
    }

    /// Family form used for database lookups: the name CRC, version and
    /// driver bytes are zeroed so only bus, vendor and product remain.
    ///
    /// Idempotent.
    pub fn normalized(&self) -> Self {
        let mut bytes = self.0;
        bytes[2] = 0;
        bytes[3] = 0;
        bytes[12..16].fill(0);
        Self(bytes)
    }
}

impl FromStr for Guid {
    type Err = GuidParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let hex = input.trim();
        if hex.len() != 32 {
            return Err(GuidParseError::InvalidLength(hex.len()));
        }

        let mut bytes = [0u8; 16];
        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            let (Some(high), Some(low)) = (hex_value(pair[0]), hex_value(pair[1]))
            else {
                return Err(GuidParseError::InvalidCharacter(hex.to_string()));
            };
            *byte = (high << 4) | low;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}
