//! RON I/O
use crate::error::GeometryResult;
use std::fs;

pub trait ConvertToSerializable: Sized {
    //! Convert to/from a serializable representation
    type SerializableType: serde::Serialize;
    /// Convert to the serializable type
    fn to_serializable(&self) -> Self::SerializableType;
    /// Convert from the serializable type, validating it
    fn from_serializable(s: Self::SerializableType) -> GeometryResult<Self>;
}

pub trait RONExport {
    //! Export as RON

    /// Generate the RON string
    fn to_ron_string(&self) -> GeometryResult<String>;

    /// Export as RON
    fn export_as_ron(&self, filename: &str) -> GeometryResult<()> {
        let ron_s = self.to_ron_string()?;
        fs::write(filename, ron_s)?;
        Ok(())
    }
}

pub trait RONImport: Sized {
    //! Import from RON

    /// Create from a RON string
    fn from_ron_string(s: &str) -> GeometryResult<Self>;

    /// Import from a RON file
    fn import_from_ron(filename: &str) -> GeometryResult<Self> {
        let content = fs::read_to_string(filename)?;
        Self::from_ron_string(&content)
    }
}
