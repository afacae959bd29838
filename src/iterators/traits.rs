//! The traversal capability
//!
//! A [`Traversal`] owns the progress through an enumeration order and nothing else:
//! the datasets it moves along are passed in at every step.

use thiserror::Error;

use crate::structure::{Extent, Position};

/// Largest number of holders positioned by a single [`Traversal::extract_position`]
pub const MAX_TARGETS: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TraversalError {
    #[error("Axis {0} appears more than once in the traversal order")]
    DuplicateAxis(usize),
    #[error("Empty axis range {from}..{to}")]
    EmptyRange { from: usize, to: usize },
}

/// Enumeration order and progress over an n-dimensional space
///
/// The traversal starts *before* its first coordinate: after [`reset`](Self::reset),
/// every call to [`advance`](Self::advance) moves onto the next coordinate, as long as
/// [`has_more`](Self::has_more) holds.
pub trait Traversal {
    /// Restarts the enumeration over the shape of `extent`
    ///
    /// # Panics
    ///
    /// If the traversal drives an axis the extent does not have
    fn reset<E: Extent + ?Sized>(&mut self, extent: &E);

    /// Whether a further [`advance`](Self::advance) yields a coordinate
    fn has_more(&self) -> bool;

    /// Steps onto the next coordinate and positions `set` there
    ///
    /// # Panics
    ///
    /// If called once [`has_more`](Self::has_more) is false
    fn advance<P: Position + ?Sized>(&mut self, set: &mut P);

    /// The axes this traversal moves, fastest first
    fn axes(&self) -> &[usize];

    /// Copies the coordinate of `source` along the traversed axes into every target.
    ///
    /// Targets translate the coordinate into their own layouts, so all of them end up
    /// denoting the same logical coordinate. Axes not traversed are left untouched.
    ///
    /// # Panics
    ///
    /// If there are no targets or more than [`MAX_TARGETS`], or if a target lacks a
    /// traversed axis or has a different size along it than `source`
    fn extract_position<P: Position + ?Sized>(
        &self,
        source: &P,
        targets: &mut [&mut dyn Position],
    ) {
        assert!(
            (1..=MAX_TARGETS).contains(&targets.len()),
            "Expected between 1 and {} position targets, got {}",
            MAX_TARGETS,
            targets.len()
        );
        for (n, target) in targets.iter_mut().enumerate() {
            for &axis in self.axes() {
                assert!(
                    axis < target.order() && target.dim(axis) == source.dim(axis),
                    "Position target {} is not congruent with the traversed extent along axis {}",
                    n,
                    axis
                );
                target.set_index(axis, source.index(axis));
            }
        }
    }
}
