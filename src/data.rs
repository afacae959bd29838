//! Reference datasets
//!
//! - `image`: dense n-dimensional storage with an arbitrary [`Layout`](crate::structure::layout::Layout)
//! - `voxel`: a positioned view onto an image, one per worker
//! - `counter`: a dataless position, the progress state of an unmasked cursor
//! - `bitmask`: bit-packed boolean storage for masks

mod bitmask;
mod counter;
mod image;
mod voxel;

pub use bitmask::{BitMask, BitMaskVoxel};
pub use counter::IndexCounter;
pub use image::{Image, ImageError};
pub use voxel::Voxel;
