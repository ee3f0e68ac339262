//! I/O
mod ron;

pub use ron::{ConvertToSerializable, RONExport, RONImport};
