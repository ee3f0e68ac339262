//! Block builder
use crate::{
    error::GeometryResult,
    types::{Direction, RealScalar},
};

pub trait Builder {
    //! Object that can be used to build a mesh block

    /// The floating point type used for coordinates
    type T: RealScalar;
    /// The type of the block that the builder creates
    type Block;

    /// Set the face positions along a direction, including the faces of ghost cells
    fn set_faces(&mut self, direction: Direction, faces: &[Self::T]);

    /// Create the block
    fn create_block(self) -> GeometryResult<Self::Block>;
}
