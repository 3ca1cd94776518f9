use retrobind_bit_derive::Bit;
use retrobind_bit_mask::{Bitable, Bitmask};

#[derive(Bit, Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Shoulder {
    LeftBumper,
    RightBumper,
    LeftTrigger,
    RightTrigger,
}

#[test]
fn variants_are_numbered_in_declaration_order() {
    assert_eq!(Shoulder::COUNT, 4);
    assert_eq!(Shoulder::LeftBumper.index(), 0);
    assert_eq!(Shoulder::RightTrigger.index(), 3);
    assert_eq!(Shoulder::LeftTrigger.bit(), 0b100);
}

#[test]
fn from_index_inverts_index() {
    for index in 0..Shoulder::COUNT {
        let value = Shoulder::from_index(index).expect("variant exists");
        assert_eq!(value.index(), index);
    }
    assert_eq!(Shoulder::from_index(Shoulder::COUNT), None);
}

#[test]
fn derived_values_work_in_masks() {
    let triggers = Bitmask::new(&[Shoulder::LeftTrigger, Shoulder::RightTrigger]);
    assert!(triggers.contains(Shoulder::RightTrigger));
    assert!(!triggers.contains(Shoulder::LeftBumper));
    assert_eq!(Bitmask::<Shoulder>::full().iter().count(), 4);
}
