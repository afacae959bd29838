use crate::structure::{concrete_index::ConcreteIndex, Extent, Mask, Position, Truthy};

use super::Image;

/// A positioned, read-only view onto an [`Image`].
///
/// Each worker owns its own voxel; the image behind it is shared. Moving along an
/// axis updates the storage offset incrementally through that axis' stride, so
/// voxels onto images with different layouts can follow the same coordinates.
#[derive(Debug, Clone)]
pub struct Voxel<'a, T> {
    image: &'a Image<T>,
    index: Vec<ConcreteIndex>,
    offset: isize,
}

impl<'a, T> Voxel<'a, T> {
    pub fn new(image: &'a Image<T>) -> Self {
        Voxel {
            image,
            index: vec![0; image.order()],
            offset: image.layout().start() as isize,
        }
    }

    pub fn image(&self) -> &'a Image<T> {
        self.image
    }

    /// Value at the current position
    pub fn value(&self) -> &'a T {
        &self.image.data()[self.offset as usize]
    }
}

impl<T> Extent for Voxel<'_, T> {
    fn order(&self) -> usize {
        self.index.len()
    }

    fn dim(&self, axis: usize) -> usize {
        self.image.dim(axis)
    }
}

impl<T> Position for Voxel<'_, T> {
    fn index(&self, axis: usize) -> ConcreteIndex {
        self.index[axis]
    }

    fn set_index(&mut self, axis: usize, value: ConcreteIndex) {
        assert!(
            value < self.dim(axis),
            "Index {} out of bounds for dimension {} of size {}",
            value,
            axis,
            self.dim(axis)
        );
        let stride = self.image.layout().stride(axis);
        self.offset += (value as isize - self.index[axis] as isize) * stride;
        self.index[axis] = value;
    }
}

impl<T: Truthy> Mask for Voxel<'_, T> {
    fn is_set(&self) -> bool {
        self.value().truthy()
    }
}
