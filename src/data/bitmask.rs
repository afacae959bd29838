use bitvec::vec::BitVec;

use crate::structure::{concrete_index::ConcreteIndex, layout::Layout, Extent, Mask, Position};

use super::Image;

/// Boolean dataset packed one bit per element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMask {
    layout: Layout,
    bits: BitVec,
}

impl BitMask {
    /// Every element cleared
    pub fn empty(layout: Layout) -> Self {
        let bits = BitVec::repeat(false, layout.size());
        BitMask { layout, bits }
    }

    pub fn from_fn(layout: Layout, mut f: impl FnMut(&[ConcreteIndex]) -> bool) -> Self {
        let flags = Image::from_fn(layout, |i| f(i));
        let layout = flags.layout().clone();
        BitMask {
            layout,
            bits: flags.into_data().into_iter().collect(),
        }
    }

    /// Thresholds an image: an element is set where its value reads as true
    pub fn from_image<T: crate::structure::Truthy>(image: &Image<T>) -> Self {
        BitMask {
            layout: image.layout().clone(),
            bits: image.data().iter().map(|v| v.truthy()).collect(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of set elements
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn voxel(&self) -> BitMaskVoxel<'_> {
        BitMaskVoxel {
            mask: self,
            index: vec![0; self.layout.order()],
            offset: self.layout.start() as isize,
        }
    }
}

impl Extent for BitMask {
    fn order(&self) -> usize {
        self.layout.order()
    }

    fn dim(&self, axis: usize) -> usize {
        self.layout.dim(axis)
    }
}

/// Positioned view onto a [`BitMask`]
#[derive(Debug, Clone)]
pub struct BitMaskVoxel<'a> {
    mask: &'a BitMask,
    index: Vec<ConcreteIndex>,
    offset: isize,
}

impl Extent for BitMaskVoxel<'_> {
    fn order(&self) -> usize {
        self.index.len()
    }

    fn dim(&self, axis: usize) -> usize {
        self.mask.dim(axis)
    }
}

impl Position for BitMaskVoxel<'_> {
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
        let stride = self.mask.layout.stride(axis);
        self.offset += (value as isize - self.index[axis] as isize) * stride;
        self.index[axis] = value;
    }
}

impl Mask for BitMaskVoxel<'_> {
    fn is_set(&self) -> bool {
        self.mask.bits[self.offset as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal() {
        let mask = BitMask::from_fn(Layout::column_major(vec![3, 3]), |i| i[0] == i[1]);
        assert_eq!(mask.count(), 3);

        let mut v = mask.voxel();
        for a in 0..3 {
            for b in 0..3 {
                v.set_position(&[a, b]);
                assert_eq!(v.is_set(), a == b);
            }
        }
    }

    #[test]
    fn thresholded_image() {
        let image = Image::from_fn(Layout::row_major(vec![4]), |i| i[0] % 2);
        let mask = BitMask::from_image(&image);
        assert_eq!(mask.count(), 2);
        assert_eq!(BitMask::empty(Layout::row_major(vec![4])).count(), 0);
    }
}
