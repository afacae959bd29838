use log::debug;

use crate::iterators::Traversal;
use crate::structure::{Mask, Position};

use super::gate::Gated;

/// Hands the coordinates of a traversal where a mask is set to exactly one of the
/// workers sharing it.
///
/// The traversal is driven along the mask itself. A claim scans forward under the
/// lock until it finds a set element or runs out, so no two workers can race for the
/// same eligible coordinate. Eligibility is only checked when claiming; building the
/// cursor does not scan.
///
/// Holders passed to the claims must be congruent with the mask along the traversed
/// axes; a mismatch panics.
#[derive(Debug)]
pub struct MaskedCursor<'a, L: Traversal, M: Mask> {
    gate: Gated<'a, L, M>,
}

impl<'a, L: Traversal, M: Mask> MaskedCursor<'a, L, M> {
    /// Resets `traversal` over the extent of `mask`
    pub fn new(traversal: &'a mut L, mask: M) -> Self {
        traversal.reset(&mask);
        debug!(
            "masked cursor over shape {:?}, traversing axes {:?}",
            mask.shape(),
            traversal.axes()
        );
        MaskedCursor {
            gate: Gated::new(traversal, mask),
        }
    }

    /// Claims the next coordinate where the mask is set, positioning every target on it.
    ///
    /// Returns `false` once the traversal is exhausted, leaving the targets untouched.
    ///
    /// # Panics
    ///
    /// Same as [`Cursor::claim_next`](super::Cursor::claim_next)
    pub fn claim_next(&self, targets: &mut [&mut dyn Position]) -> bool {
        let mut guard = self.gate.enter();
        let gate = &mut *guard;
        while gate.traversal.has_more() {
            gate.traversal.advance(&mut gate.source);
            if gate.source.is_set() {
                return gate.deliver(targets);
            }
        }
        gate.exhausted()
    }

    /// [`Self::claim_next`] for a single target
    pub fn claim(&self, target: &mut dyn Position) -> bool {
        self.claim_next(&mut [target])
    }

    /// Number of successful claims since construction or the last reset
    pub fn claimed(&self) -> usize {
        self.gate.enter().claimed
    }

    /// Rewinds to the first coordinate, for another full pass over the same mask.
    ///
    /// Needs exclusive access, so no worker can be claiming meanwhile.
    pub fn reset(&mut self) {
        let gate = self.gate.get_mut();
        debug!("masked cursor reset after {} claims", gate.claimed);
        gate.restart();
    }

    /// Gives the mask back, positioned wherever the last claim left it
    pub fn into_mask(self) -> M {
        self.gate.into_inner().source
    }
}
