//! Traits

mod builder;
mod coordinates;
#[cfg(feature = "serde")]
mod io;

pub use builder::Builder;
pub use coordinates::Coordinates;
#[cfg(feature = "serde")]
pub(crate) use io::ConvertToSerializable;
#[cfg(feature = "serde")]
pub use io::{RONExport, RONImport};
