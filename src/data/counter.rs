use crate::structure::{concrete_index::ConcreteIndex, Extent, Position};

/// A position without data: the shape of some dataset and a coordinate within it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexCounter {
    shape: Vec<usize>,
    index: Vec<ConcreteIndex>,
}

impl IndexCounter {
    /// Copies the shape of `extent`; the extent itself is not retained
    pub fn new<E: Extent + ?Sized>(extent: &E) -> Self {
        let shape: Vec<usize> = (0..extent.order()).map(|a| extent.dim(a)).collect();
        IndexCounter {
            index: vec![0; shape.len()],
            shape,
        }
    }
}

impl Extent for IndexCounter {
    fn order(&self) -> usize {
        self.shape.len()
    }

    fn dim(&self, axis: usize) -> usize {
        self.shape[axis]
    }
}

impl Position for IndexCounter {
    fn index(&self, axis: usize) -> ConcreteIndex {
        self.index[axis]
    }

    fn set_index(&mut self, axis: usize, value: ConcreteIndex) {
        self.index[axis] = value;
    }
}
