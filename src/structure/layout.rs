use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::concrete_index::{ConcreteIndex, ExpandedIndex, FlatIndex};
use super::Extent;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Mismatched order: shape has {shape} axes, strides have {strides}")]
    MismatchedOrder { shape: usize, strides: usize },
    #[error("Stride rank {0} is given to more than one axis")]
    DuplicateRank(usize),
    #[error("Stride {stride} of axis {axis} does not match the expected {expected}")]
    InvalidStride {
        axis: usize,
        stride: isize,
        expected: usize,
    },
    #[error("Start offset {start} does not address the origin, expected {expected}")]
    InvalidStart { start: usize, expected: usize },
}

/// Maps the coordinates of an n-dimensional dataset onto a linear storage.
///
/// Strides are signed: a negative stride stores its axis back to front, and `start`
/// is then the offset of the coordinate with every index at zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct Layout {
    shape: Vec<usize>,
    strides: Vec<isize>,
    start: usize,
}

/// The fields of a [`Layout`] as read from an external header, before validation
#[derive(Deserialize)]
struct RawLayout {
    shape: Vec<usize>,
    strides: Vec<isize>,
    start: usize,
}

impl TryFrom<RawLayout> for Layout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Layout::from_parts(raw.shape, raw.strides, raw.start)
    }
}

impl Layout {
    /// Last axis contiguous
    pub fn row_major(shape: Vec<usize>) -> Self {
        let mut strides = vec![1isize; shape.len()];
        for i in (0..shape.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * shape[i + 1] as isize;
        }
        Layout {
            shape,
            strides,
            start: 0,
        }
    }

    /// First axis contiguous
    pub fn column_major(shape: Vec<usize>) -> Self {
        let mut strides = vec![1isize; shape.len()];
        for i in 0..shape.len().saturating_sub(1) {
            strides[i + 1] = strides[i] * shape[i] as isize;
        }
        Layout {
            shape,
            strides,
            start: 0,
        }
    }

    /// Builds a layout from a symbolic stride specification.
    ///
    /// Each entry ranks its axis in memory order: the axis with the smallest absolute
    /// rank is contiguous, the sign gives the direction of storage. Axes with a zero
    /// entry are placed after all ranked axes, in axis order. So `[0, 1, 0]` on a
    /// three-axis shape stores axis 1 contiguously, then axis 0, then axis 2.
    ///
    /// # Errors
    ///
    /// [`LayoutError::MismatchedOrder`] if `spec` and `shape` differ in length,
    /// [`LayoutError::DuplicateRank`] if two axes carry the same absolute rank.
    pub fn from_stride_spec(shape: Vec<usize>, spec: &[isize]) -> Result<Self, LayoutError> {
        if spec.len() != shape.len() {
            return Err(LayoutError::MismatchedOrder {
                shape: shape.len(),
                strides: spec.len(),
            });
        }

        let mut ranked: Vec<usize> = (0..spec.len()).filter(|&a| spec[a] != 0).collect();
        ranked.sort_by_key(|&a| spec[a].unsigned_abs());
        for pair in ranked.windows(2) {
            if spec[pair[0]].unsigned_abs() == spec[pair[1]].unsigned_abs() {
                return Err(LayoutError::DuplicateRank(spec[pair[0]].unsigned_abs()));
            }
        }
        let memory_order = ranked
            .into_iter()
            .chain((0..spec.len()).filter(|&a| spec[a] == 0));

        let mut strides = vec![0isize; shape.len()];
        let mut start = 0;
        let mut acc = 1usize;
        for axis in memory_order {
            if spec[axis] < 0 {
                strides[axis] = -(acc as isize);
                start += shape[axis].saturating_sub(1) * acc;
            } else {
                strides[axis] = acc as isize;
            }
            acc *= shape[axis];
        }

        Ok(Layout {
            shape,
            strides,
            start,
        })
    }

    /// Builds a layout from explicit strides and start offset.
    ///
    /// Sorted by magnitude, the strides of the axes longer than one must be the
    /// running products of their sizes, so that every coordinate gets its own offset
    /// within the storage. `start` must be the offset of the origin.
    ///
    /// # Errors
    ///
    /// [`LayoutError::MismatchedOrder`], [`LayoutError::InvalidStride`] or
    /// [`LayoutError::InvalidStart`] when these conditions do not hold
    pub fn from_parts(
        shape: Vec<usize>,
        strides: Vec<isize>,
        start: usize,
    ) -> Result<Self, LayoutError> {
        if strides.len() != shape.len() {
            return Err(LayoutError::MismatchedOrder {
                shape: shape.len(),
                strides: strides.len(),
            });
        }
        let layout = Layout {
            shape,
            strides,
            start,
        };

        // An empty layout addresses no storage at all.
        if layout.size() > 0 {
            let mut expected = 1usize;
            for axis in layout.memory_order() {
                let dim = layout.shape[axis];
                if dim == 1 {
                    continue;
                }
                let stride = layout.strides[axis];
                if stride.unsigned_abs() != expected {
                    return Err(LayoutError::InvalidStride {
                        axis,
                        stride,
                        expected,
                    });
                }
                expected = expected.saturating_mul(dim);
            }
        }

        let origin: usize = (0..layout.order())
            .filter(|&a| layout.strides[a] < 0)
            .map(|a| layout.shape[a].saturating_sub(1) * layout.strides[a].unsigned_abs())
            .sum();
        if layout.start != origin {
            return Err(LayoutError::InvalidStart {
                start: layout.start,
                expected: origin,
            });
        }
        Ok(layout)
    }

    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    pub fn stride(&self, axis: usize) -> isize {
        self.strides[axis]
    }

    /// Offset of the coordinate with every index at zero
    pub fn start(&self) -> usize {
        self.start
    }

    /// Axes sorted from contiguous to outermost, ties broken by axis number
    pub fn memory_order(&self) -> Vec<usize> {
        let mut axes: Vec<usize> = (0..self.strides.len()).collect();
        axes.sort_by_key(|&a| self.strides[a].unsigned_abs());
        axes
    }

    /// Storage offset of `indices`, without bound checks
    pub(crate) fn offset_unchecked(&self, indices: &[ConcreteIndex]) -> usize {
        let mut offset = self.start as isize;
        for (i, &index) in indices.iter().enumerate() {
            offset += index as isize * self.strides[i];
        }
        offset as usize
    }

    /// Verifies that the list of indices provided are valid for the layout
    ///
    /// # Errors
    ///
    /// `Mismatched order` = if the length of the indices is different from the order of the layout,
    ///
    /// `Index out of bounds` = if the index is out of bounds for the dimension of that index
    pub fn verify_indices<C: AsRef<[ConcreteIndex]>>(&self, indices: C) -> Result<()> {
        let indices = indices.as_ref();
        if indices.len() != self.order() {
            return Err(anyhow!(
                "Mismatched order: {} indices, vs order {}",
                indices.len(),
                self.order()
            ));
        }
        for (axis, (&index, &dim)) in indices.iter().zip(&self.shape).enumerate() {
            if index >= dim {
                return Err(anyhow!(
                    "Index {} out of bounds for dimension {} of size {}",
                    index,
                    axis,
                    dim
                ));
            }
        }
        Ok(())
    }

    /// yields the flat index of a coordinate
    ///
    /// # Errors
    ///
    /// Same as [`Self::verify_indices`]
    pub fn flat_index<C: AsRef<[ConcreteIndex]>>(&self, indices: C) -> Result<FlatIndex> {
        self.verify_indices(&indices)?;
        Ok(self.offset_unchecked(indices.as_ref()).into())
    }

    /// yields the coordinate stored at a flat index
    ///
    /// # Errors
    ///
    /// `Index out of bounds` = if the flat index is out of bounds for the layout
    pub fn expanded_index(&self, flat_index: FlatIndex) -> Result<ExpandedIndex> {
        let flat: usize = flat_index.into();
        if flat >= self.size() {
            return Err(anyhow!("Index {flat_index} out of bounds"));
        }

        // Each axis contributes its stored index (flipped for negative strides)
        // times the absolute stride, a mixed radix number in memory order.
        let mut indices = vec![0; self.order()];
        let mut rest = flat;
        for axis in self.memory_order().into_iter().rev() {
            let dim = self.shape[axis];
            if dim == 1 {
                continue;
            }
            let step = self.strides[axis].unsigned_abs();
            let stored = rest / step;
            rest %= step;
            indices[axis] = if self.strides[axis] < 0 {
                dim - 1 - stored
            } else {
                stored
            };
        }
        Ok(indices.into())
    }
}

impl Extent for Layout {
    fn order(&self) -> usize {
        self.shape.len()
    }

    fn dim(&self, axis: usize) -> usize {
        self.shape[axis]
    }

    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }
}
