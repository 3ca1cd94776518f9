mod descriptor;
mod disambiguate;
mod error;
mod specialty;

pub use descriptor::{DescriptorBuilder, DeviceDescriptor, PlayerSlot};
pub use disambiguate::{
    disambiguate, normalize_name, sdl_device_path, DisambiguationKey, SubIndexMap,
};
pub use error::{Error, Result};
pub use specialty::{
    DeviceClass, SpecialtyDevice, SpecialtyMatch, SpecialtyTable, DEFAULT_ROLE_LIMIT,
};
