use std::fmt;

use retrobind_input::{Guid, HatDirection, PhysicalPrimitive, Polarity};

pub const DEFAULT_ENGINE: &str = "sdl";
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Settings shared by every SDL code of a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SdlOptions {
    /// Engine name written in front of every code.
    pub engine: String,
    /// Axis deflection at which an axis counts as pressed.
    pub threshold: f32,
}

impl Default for SdlOptions {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SdlBinding {
    Button(u32),
    Hat {
        index: u8,
        direction: HatDirection,
    },
    Axis {
        id: u32,
        polarity: Polarity,
        threshold: f32,
    },
}

impl SdlBinding {
    pub fn new(primitive: PhysicalPrimitive, threshold: f32) -> Self {
        match primitive {
            PhysicalPrimitive::Button(id) => Self::Button(id),
            PhysicalPrimitive::Hat { index, direction } => Self::Hat { index, direction },
            PhysicalPrimitive::Axis { id, polarity, .. } => Self::Axis {
                id,
                polarity,
                threshold,
            },
        }
    }
}

/// Input string of the form
/// `engine:sdl,axis:1,direction:-,threshold:0.5,guid:<guid>,port:0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SdlCode {
    pub engine: String,
    pub binding: SdlBinding,
    pub guid: Guid,
    pub port: u32,
}

impl SdlCode {
    pub fn new(options: &SdlOptions, primitive: PhysicalPrimitive, guid: Guid, port: u32) -> Self {
        Self {
            engine: options.engine.clone(),
            binding: SdlBinding::new(primitive, options.threshold),
            guid,
            port,
        }
    }
}

impl fmt::Display for SdlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine:{},", self.engine)?;
        match self.binding {
            SdlBinding::Button(id) => write!(f, "button:{id}")?,
            SdlBinding::Hat { index, direction } => {
                write!(f, "hat:{index},direction:{}", direction.name())?;
            }
            SdlBinding::Axis {
                id,
                polarity,
                threshold,
            } => write!(
                f,
                "axis:{id},direction:{},threshold:{threshold}",
                polarity.sign()
            )?,
        }
        write!(f, ",guid:{},port:{}", self.guid, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUID: &str = "030000005e0400008e02000000007200";

    fn code(primitive: PhysicalPrimitive, port: u32) -> String {
        SdlCode::new(&SdlOptions::default(), primitive, GUID.parse().unwrap(), port).to_string()
    }

    #[test]
    fn renders_buttons() {
        assert_eq!(
            code(PhysicalPrimitive::Button(3), 0),
            "engine:sdl,button:3,guid:030000005e0400008e02000000007200,port:0"
        );
    }

    #[test]
    fn renders_hats() {
        assert_eq!(
            code(PhysicalPrimitive::hat(HatDirection::Left), 1),
            "engine:sdl,hat:0,direction:left,guid:030000005e0400008e02000000007200,port:1"
        );
    }

    #[test]
    fn renders_axes_with_threshold() {
        assert_eq!(
            code(PhysicalPrimitive::axis(1, Polarity::Negative), 0),
            "engine:sdl,axis:1,direction:-,threshold:0.5,guid:030000005e0400008e02000000007200,port:0"
        );
    }

    #[test]
    fn engine_and_threshold_come_from_options() {
        let options = SdlOptions {
            engine: "sdl2".to_string(),
            threshold: 0.25,
        };
        let code = SdlCode::new(
            &options,
            PhysicalPrimitive::axis(0, Polarity::Positive),
            GUID.parse().unwrap(),
            2,
        );
        assert_eq!(
            code.to_string(),
            "engine:sdl2,axis:0,direction:+,threshold:0.25,guid:030000005e0400008e02000000007200,port:2"
        );
    }
}
