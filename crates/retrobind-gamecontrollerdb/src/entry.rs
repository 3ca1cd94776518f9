use log::warn;
use smallvec::SmallVec;

use retrobind_input::{AxisRange, CanonicalInput, Guid, PhysicalPrimitive};

/// Most devices define fewer than 24 fields.
type Fields = SmallVec<[(Box<str>, Box<str>); 24]>;

/// Mapping of one device: community button names to primitive codes, in
/// file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    guid: Guid,
    name: Box<str>,
    platform: Option<Box<str>>,
    fields: Fields,
}

impl Entry {
    pub(crate) fn new<'a>(
        guid: Guid,
        name: &str,
        platform: Option<&str>,
        fields: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            guid,
            name: name.into(),
            platform: platform.map(Into::into),
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// GUID exactly as written in the database.
    pub fn guid(&self) -> Guid {
        self.guid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Raw primitive code bound to a community button name, e.g. `b0`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }

    /// Parsed primitive bound to a community button name.
    ///
    /// A code that does not parse is logged and treated as unbound.
    pub fn primitive(&self, name: &str) -> Option<PhysicalPrimitive> {
        let code = self.get(name)?;
        match code.parse::<PhysicalPrimitive>() {
            Ok(primitive) => Some(primitive),
            Err(e) => {
                warn!("{} ({}): ignoring field {name}: {e}", self.name, self.guid);
                None
            }
        }
    }

    /// Primitive for a canonical input.
    ///
    /// Full-range axes are oriented towards the input's nominal excursion,
    /// so `left_stick_up` reads the negative half of `lefty`.
    pub fn primitive_for(&self, key: CanonicalInput) -> Option<PhysicalPrimitive> {
        let primitive = self.primitive(key.community_name())?;
        Some(match primitive {
            PhysicalPrimitive::Axis {
                range: AxisRange::Full,
                ..
            } if key.nominal_polarity().is_negative() => primitive.inverted(),
            other => other,
        })
    }

    /// Fields in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use retrobind_input::{HatDirection, Polarity};

    use super::*;

    fn entry() -> Entry {
        Entry::new(
            "030000005e0400008e02000000007200".parse().unwrap(),
            "Xbox 360 Controller",
            Some("Windows"),
            [
                ("a", "b0"),
                ("dpup", "h0.1"),
                ("leftx", "a0"),
                ("lefty", "a1"),
                ("righty", "a4~"),
                ("righttrigger", "-a2"),
                ("misc1", "q9"),
            ],
        )
    }

    #[test]
    fn get_returns_raw_code() {
        let entry = entry();
        assert_eq!(entry.get("a"), Some("b0"));
        assert_eq!(entry.get("b"), None);
        assert_eq!(entry.platform(), Some("Windows"));
    }

    #[test]
    fn malformed_code_is_unbound() {
        assert_eq!(entry().primitive("misc1"), None);
    }

    #[test]
    fn stick_directions_share_axis_with_opposite_polarity() {
        let entry = entry();
        assert_eq!(
            entry.primitive_for(CanonicalInput::LeftStickUp),
            Some(PhysicalPrimitive::axis(1, Polarity::Negative))
        );
        assert_eq!(
            entry.primitive_for(CanonicalInput::LeftStickDown),
            Some(PhysicalPrimitive::axis(1, Polarity::Positive))
        );
        assert_eq!(
            entry.primitive_for(CanonicalInput::LeftStickLeft),
            Some(PhysicalPrimitive::axis(0, Polarity::Negative))
        );
        assert_eq!(
            entry.primitive_for(CanonicalInput::LeftStickRight),
            Some(PhysicalPrimitive::axis(0, Polarity::Positive))
        );
    }

    #[test]
    fn inverted_axis_flips_orientation() {
        let entry = entry();
        assert_eq!(
            entry.primitive_for(CanonicalInput::RightStickUp),
            Some(PhysicalPrimitive::axis(4, Polarity::Positive))
        );
    }

    #[test]
    fn half_axes_keep_forced_polarity() {
        assert_eq!(
            entry().primitive_for(CanonicalInput::RightTrigger),
            Some(PhysicalPrimitive::Axis {
                id: 2,
                polarity: Polarity::Negative,
                range: AxisRange::Half
            })
        );
    }

    #[test]
    fn hats_and_buttons_pass_through() {
        let entry = entry();
        assert_eq!(
            entry.primitive_for(CanonicalInput::Up),
            Some(PhysicalPrimitive::hat(HatDirection::Up))
        );
        assert_eq!(
            entry.primitive_for(CanonicalInput::A),
            Some(PhysicalPrimitive::Button(0))
        );
    }

    #[test]
    fn iter_preserves_file_order() {
        let entry = entry();
        let names: Vec<&str> = entry.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["a", "dpup", "leftx", "lefty", "righty", "righttrigger", "misc1"]
        );
    }
}
