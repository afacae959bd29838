use crate::structure::{
    concrete_index::{ConcreteIndex, ExpandedIndex},
    Extent, Position,
};

/// Odometer over a list of axes, the first axis turning fastest.
///
/// Holds the coordinate along the listed axes only; it is written into datasets with
/// [`AxisWalker::write`]. A freshly reset walker sits before its first coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisWalker {
    axes: Vec<usize>,
    dims: Vec<usize>,
    current: Vec<ConcreteIndex>,
    remaining: usize,
    started: bool,
}

impl AxisWalker {
    /// An exhausted walker over no axes; call [`AxisWalker::reset`] before use
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts over `axes`, sized by `extent`
    ///
    /// # Panics
    ///
    /// If an axis is not below the order of `extent`
    pub fn reset<E: Extent + ?Sized>(&mut self, axes: Vec<usize>, extent: &E) {
        for &axis in &axes {
            assert!(
                axis < extent.order(),
                "Traversal axis {} out of bounds for an extent of order {}",
                axis,
                extent.order()
            );
        }
        self.dims = axes.iter().map(|&a| extent.dim(a)).collect();
        self.current = vec![0; axes.len()];
        self.remaining = self.dims.iter().product();
        self.axes = axes;
        self.started = false;
    }

    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// Number of coordinates left to visit
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn axes(&self) -> &[usize] {
        &self.axes
    }

    /// Moves onto the next coordinate
    ///
    /// # Panics
    ///
    /// If the walker is exhausted
    pub fn step(&mut self) {
        assert!(self.has_more(), "Traversal advanced past its last coordinate");
        if self.started {
            for (i, dim) in self.current.iter_mut().zip(&self.dims) {
                *i += 1;
                if *i < *dim {
                    break;
                }
                *i = 0;
            }
        } else {
            self.started = true;
        }
        self.remaining -= 1;
    }

    /// Current indices along the walked axes, in walking order
    pub fn current(&self) -> ExpandedIndex {
        self.current.iter().copied().collect()
    }

    /// Positions `set` on the current coordinate along the walked axes
    pub fn write<P: Position + ?Sized>(&self, set: &mut P) {
        for (&axis, &i) in self.axes.iter().zip(&self.current) {
            set.set_index(axis, i);
        }
    }
}
