mod lookup;
mod resolve;
mod specialty;

#[cfg(feature = "sdl2-backend")]
mod devices;

pub(crate) use lookup::lookup;
pub(crate) use resolve::resolve;
pub(crate) use specialty::specialty;

#[cfg(feature = "sdl2-backend")]
pub(crate) use devices::devices;
