use std::ops::Range;

use crate::structure::{layout::Layout, Extent, Position};

use super::traits::{Traversal, TraversalError};
use super::walker::AxisWalker;

/// Traverses axes in an explicit order, the first listed axis fastest.
///
/// Built from a [`Layout`], it follows the memory order of that layout, so the
/// dataset it was derived from is read sequentially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopInOrder {
    order: Vec<usize>,
    walker: AxisWalker,
}

impl LoopInOrder {
    /// # Errors
    ///
    /// [`TraversalError::DuplicateAxis`] if an axis is listed twice
    pub fn new(order: Vec<usize>) -> Result<Self, TraversalError> {
        for (i, axis) in order.iter().enumerate() {
            if order[..i].contains(axis) {
                return Err(TraversalError::DuplicateAxis(*axis));
            }
        }
        Ok(LoopInOrder {
            order,
            walker: AxisWalker::new(),
        })
    }

    /// All axes of `layout`, from the contiguous one outwards
    pub fn from_layout(layout: &Layout) -> Self {
        LoopInOrder {
            order: layout.memory_order(),
            walker: AxisWalker::new(),
        }
    }

    /// The axes of `layout` within `axes`, from the contiguous one outwards
    ///
    /// # Errors
    ///
    /// [`TraversalError::EmptyRange`] if no axis of the layout lies in the range
    pub fn from_layout_range(layout: &Layout, axes: Range<usize>) -> Result<Self, TraversalError> {
        let order: Vec<usize> = layout
            .memory_order()
            .into_iter()
            .filter(|a| axes.contains(a))
            .collect();
        if order.is_empty() {
            return Err(TraversalError::EmptyRange {
                from: axes.start,
                to: axes.end,
            });
        }
        Ok(LoopInOrder {
            order,
            walker: AxisWalker::new(),
        })
    }

    /// Coordinates left before exhaustion
    pub fn remaining(&self) -> usize {
        self.walker.remaining()
    }
}

impl Traversal for LoopInOrder {
    fn reset<E: Extent + ?Sized>(&mut self, extent: &E) {
        self.walker.reset(self.order.clone(), extent);
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
