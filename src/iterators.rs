//! Traversals of n-dimensional iteration spaces
//!
//! This module provides the descriptors that enumerate coordinates, organized as:
//!
//! - `traits`: the [`Traversal`] capability consumed by the cursors
//! - `walker`: [`AxisWalker`], the odometer shared by every traversal
//! - `axis_loop`: [`Loop`], a contiguous range of axes, lowest axis fastest
//! - `ordered`: [`LoopInOrder`], an explicit axis order, e.g. the memory order of a dataset
//!
//! A traversal never holds data. It is reset against an extent, then moves positioned
//! datasets along, one coordinate per advance. Two traversals over congruent extents
//! visit the same coordinates in the same order, whatever the layout of the datasets
//! they are driven with.

mod axis_loop;
mod ordered;
mod traits;
mod walker;

#[cfg(test)]
mod tests;

pub use axis_loop::Loop;
pub use ordered::LoopInOrder;
pub use traits::{Traversal, TraversalError, MAX_TARGETS};
pub use walker::AxisWalker;
