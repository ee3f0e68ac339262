//! RON I/O
use crate::{
    block::{Axis, Block},
    coordinates::SinusoidalCoordinates,
    error::GeometryResult,
    geometry::SinusoidalParameters,
    traits::{Coordinates, ConvertToSerializable, RONExport, RONImport},
    types::{Direction, RealScalar},
};

/// Parameters and face positions of a block with sinusoidal coordinates
#[derive(serde::Serialize, Debug, serde::Deserialize)]
#[serde(bound = "T: serde::Serialize + serde::de::DeserializeOwned")]
pub struct SerializableCoordinates<T: RealScalar> {
    parameters: SinusoidalParameters<T>,
    ghost: [usize; 3],
    faces: [Vec<T>; 3],
}

impl<T: RealScalar + serde::Serialize + serde::de::DeserializeOwned> ConvertToSerializable
    for SinusoidalCoordinates<T>
{
    type SerializableType = SerializableCoordinates<T>;

    fn to_serializable(&self) -> SerializableCoordinates<T> {
        let block = self.block();
        SerializableCoordinates {
            parameters: *self.parameters(),
            ghost: Direction::ALL.map(|d| block.axis(d).ghost()),
            faces: Direction::ALL.map(|d| block.axis(d).faces().to_vec()),
        }
    }

    fn from_serializable(s: SerializableCoordinates<T>) -> GeometryResult<Self> {
        let [x, y, z] = s.faces;
        let block = Block::new(
            Axis::new(Direction::X, x, s.ghost[0])?,
            Axis::new(Direction::Y, y, s.ghost[1])?,
            Axis::new(Direction::Z, z, s.ghost[2])?,
        )?;
        log::debug!("imported block with {} cells", block.total_cell_count());
        SinusoidalCoordinates::new(block, s.parameters)
    }
}

impl<C: ConvertToSerializable> RONExport for C {
    fn to_ron_string(&self) -> GeometryResult<String> {
        Ok(ron::to_string(&self.to_serializable())?)
    }
}

impl<C: ConvertToSerializable> RONImport for C
where
    C::SerializableType: serde::de::DeserializeOwned,
{
    fn from_ron_string(s: &str) -> GeometryResult<Self> {
        Self::from_serializable(ron::from_str(s)?)
    }
}
