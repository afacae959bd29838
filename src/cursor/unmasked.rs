use log::debug;

use crate::data::IndexCounter;
use crate::iterators::Traversal;
use crate::structure::{Extent, Position};

use super::gate::Gated;

/// Hands every coordinate of a traversal to exactly one of the workers sharing it.
///
/// The cursor borrows the traversal for its whole life and drives it along an
/// internal [`IndexCounter`] shaped like the extent it was built from. It is not
/// `Clone`: a copy would carry its own progress and deliver coordinates twice.
/// Share it by reference, e.g. from scoped threads.
#[derive(Debug)]
pub struct Cursor<'a, L: Traversal> {
    gate: Gated<'a, L, IndexCounter>,
}

impl<'a, L: Traversal> Cursor<'a, L> {
    /// Resets `traversal` over the shape of `extent`. Only the shape is read; the
    /// extent is not retained.
    pub fn new<E: Extent + ?Sized>(traversal: &'a mut L, extent: &E) -> Self {
        let counter = IndexCounter::new(extent);
        traversal.reset(&counter);
        debug!(
            "cursor over shape {:?}, traversing axes {:?}",
            counter.shape(),
            traversal.axes()
        );
        Cursor {
            gate: Gated::new(traversal, counter),
        }
    }

    /// Claims the next coordinate, positioning every target on it.
    ///
    /// Returns `false` once the traversal is exhausted, leaving the targets untouched.
    ///
    /// # Panics
    ///
    /// If `targets` holds no target or more than [`MAX_TARGETS`](crate::iterators::MAX_TARGETS),
    /// or if a target is not congruent with the extent along the traversed axes
    pub fn claim_next(&self, targets: &mut [&mut dyn Position]) -> bool {
        let mut guard = self.gate.enter();
        let gate = &mut *guard;
        if !gate.traversal.has_more() {
            return gate.exhausted();
        }
        gate.traversal.advance(&mut gate.source);
        gate.deliver(targets)
    }

    /// [`Self::claim_next`] for a single target
    pub fn claim(&self, target: &mut dyn Position) -> bool {
        self.claim_next(&mut [target])
    }

    /// Number of successful claims so far
    pub fn claimed(&self) -> usize {
        self.gate.enter().claimed
    }
}
