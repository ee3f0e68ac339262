//! Functions to create simple blocks

mod uniform;

pub use uniform::{stretched_block, uniform_block};
