use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Direction of an axis excursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    #[inline]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    /// Inverts the polarity when `reversed` is set.
    #[inline]
    pub const fn reversed_if(self, reversed: bool) -> Self {
        if reversed {
            self.inverted()
        } else {
            self
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    pub const fn sign(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
        }
    }
}

/// How much of an axis a primitive reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisRange {
    /// The whole axis (`aN`); the excursion comes from the input it is
    /// bound to.
    Full,
    /// One forced half of the axis (`+aN` / `-aN`).
    Half,
}

/// The four single-bit values of a standard POV hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HatDirection {
    Up = 1,
    Right = 2,
    Down = 4,
    Left = 8,
}

impl HatDirection {
    pub const ALL: [HatDirection; 4] =
        [Self::Up, Self::Right, Self::Down, Self::Left];

    #[inline]
    pub const fn mask(self) -> u8 {
        self as u8
    }

    pub const fn from_mask(mask: u8) -> Option<Self> {
        Some(match mask {
            1 => Self::Up,
            2 => Self::Right,
            4 => Self::Down,
            8 => Self::Left,
            _ => return None,
        })
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }
}

/// A raw control element of a physical device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalPrimitive {
    Button(u32),
    Axis {
        id: u32,
        polarity: Polarity,
        range: AxisRange,
    },
    Hat {
        index: u8,
        direction: HatDirection,
    },
}

impl PhysicalPrimitive {
    pub const fn axis(id: u32, polarity: Polarity) -> Self {
        Self::Axis {
            id,
            polarity,
            range: AxisRange::Full,
        }
    }

    pub const fn hat(direction: HatDirection) -> Self {
        Self::Hat {
            index: 0,
            direction,
        }
    }

    /// The same primitive read in the opposite direction.
    ///
    /// Axes flip polarity, hats point the other way, buttons are unchanged.
    pub const fn inverted(self) -> Self {
        match self {
            Self::Axis {
                id,
                polarity,
                range,
            } => Self::Axis {
                id,
                polarity: polarity.inverted(),
                range,
            },
            Self::Hat { index, direction } => Self::Hat {
                index,
                direction: direction.opposite(),
            },
            Self::Button(id) => Self::Button(id),
        }
    }

    pub const fn is_axis(&self) -> bool {
        matches!(self, Self::Axis { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveParseError {
    #[error("empty primitive code")]
    Empty,
    #[error("unknown primitive kind in \"{0}\"")]
    UnknownKind(String),
    #[error("invalid primitive id in \"{0}\"")]
    InvalidId(String),
    #[error("hat value must be a single direction bit in \"{0}\"")]
    InvalidHat(String),
}

impl FromStr for PhysicalPrimitive {
    type Err = PrimitiveParseError;

    /// Parses the community database syntax: `b3`, `h0.4`, `a1`, `-a1`,
    /// `+a5` and `a2~` (inverted axis).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let code = input.trim();
        if code.is_empty() {
            return Err(PrimitiveParseError::Empty);
        }

        let (forced, rest) = match code.as_bytes()[0] {
            b'+' => (Some(Polarity::Positive), &code[1..]),
            b'-' => (Some(Polarity::Negative), &code[1..]),
            _ => (None, code),
        };

        if let Some(axis) = rest.strip_prefix('a') {
            let (digits, inverted) = match axis.strip_suffix('~') {
                Some(digits) => (digits, true),
                None => (axis, false),
            };
            let id = parse_id(digits, input)?;
            let (polarity, range) = match forced {
                Some(polarity) => (polarity, AxisRange::Half),
                None => (Polarity::Positive, AxisRange::Full),
            };
            return Ok(Self::Axis {
                id,
                polarity: polarity.reversed_if(inverted),
                range,
            });
        }

        if forced.is_some() {
            return Err(PrimitiveParseError::UnknownKind(input.to_string()));
        }

        if let Some(button) = rest.strip_prefix('b') {
            return Ok(Self::Button(parse_id(button, input)?));
        }

        if let Some(hat) = rest.strip_prefix('h') {
            let Some((index, mask)) = hat.split_once('.') else {
                return Err(PrimitiveParseError::InvalidHat(input.to_string()));
            };
            let index = index
                .parse::<u8>()
                .map_err(|_| PrimitiveParseError::InvalidId(input.to_string()))?;
            let direction = mask
                .parse::<u8>()
                .ok()
                .and_then(HatDirection::from_mask)
                .ok_or_else(|| PrimitiveParseError::InvalidHat(input.to_string()))?;
            return Ok(Self::Hat { index, direction });
        }

        Err(PrimitiveParseError::UnknownKind(input.to_string()))
    }
}

fn parse_id(digits: &str, input: &str) -> Result<u32, PrimitiveParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PrimitiveParseError::InvalidId(input.to_string()));
    }
    digits
        .parse::<u32>()
        .map_err(|_| PrimitiveParseError::InvalidId(input.to_string()))
}

impl fmt::Display for PhysicalPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Button(id) => write!(f, "b{id}"),
            Self::Hat { index, direction } => write!(f, "h{index}.{}", direction.mask()),
            Self::Axis {
                id,
                polarity,
                range: AxisRange::Half,
            } => write!(f, "{}a{id}", polarity.sign()),
            Self::Axis {
                id,
                polarity: Polarity::Positive,
                range: AxisRange::Full,
            } => write!(f, "a{id}"),
            Self::Axis {
                id,
                polarity: Polarity::Negative,
                range: AxisRange::Full,
            } => write!(f, "a{id}~"),
        }
    }
}
