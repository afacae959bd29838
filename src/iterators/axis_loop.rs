use std::ops::Range;

use crate::structure::{Extent, Position};

use super::traits::{Traversal, TraversalError};
use super::walker::AxisWalker;

/// Traverses a contiguous range of axes, the lowest axis fastest.
///
/// The end of the range is clamped to the order of the extent at every reset, so
/// [`Loop::new`] walks all axes of whatever it is reset against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    from: usize,
    to: usize,
    walker: AxisWalker,
}

impl Loop {
    /// All axes. Reset against an extent of order zero, it yields that extent's
    /// single coordinate once.
    pub fn new() -> Self {
        Loop {
            from: 0,
            to: usize::MAX,
            walker: AxisWalker::new(),
        }
    }

    /// Only the axes in `range`
    ///
    /// # Errors
    ///
    /// [`TraversalError::EmptyRange`] if the range holds no axis
    pub fn over(range: Range<usize>) -> Result<Self, TraversalError> {
        if range.is_empty() {
            return Err(TraversalError::EmptyRange {
                from: range.start,
                to: range.end,
            });
        }
        Ok(Loop {
            from: range.start,
            to: range.end,
            walker: AxisWalker::new(),
        })
    }

    /// Only `axis`
    pub fn axis(axis: usize) -> Self {
        Loop {
            from: axis,
            to: axis.saturating_add(1),
            walker: AxisWalker::new(),
        }
    }

    /// Coordinates left before exhaustion
    pub fn remaining(&self) -> usize {
        self.walker.remaining()
    }
}

impl Default for Loop {
    fn default() -> Self {
        Self::new()
    }
}

impl Traversal for Loop {
    fn reset<E: Extent + ?Sized>(&mut self, extent: &E) {
        let to = self.to.min(extent.order());
        // A range starting beyond the extent is handed over as is, for the walker to reject.
        let axes = if self.from < to || self.from == 0 {
            (self.from..to).collect()
        } else {
            vec![self.from]
        };
        self.walker.reset(axes, extent);
    }

    fn has_more(&self) -> bool {
        self.walker.has_more()
    }

    fn advance<P: Position + ?Sized>(&mut self, set: &mut P) {
        self.walker.step();
        self.walker.write(set);
    }

    fn axes(&self) -> &[usize] {
        self.walker.axes()
    }
}
