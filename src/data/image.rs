use thiserror::Error;

use crate::structure::{
    concrete_index::ConcreteIndex,
    layout::{Layout, LayoutError},
    Extent,
};

use super::Voxel;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Layout holds {expected} elements, but {got} were given")]
    SizeMismatch { expected: usize, got: usize },
    #[error("Layout error :{0}")]
    Layout(#[from] LayoutError),
}

/// Dense n-dimensional storage.
///
/// The image only owns the data; positions live in [`Voxel`]s borrowed from it,
/// so any number of workers can read the same image concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    layout: Layout,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Wraps `data`, which must already be ordered according to `layout`
    ///
    /// # Errors
    ///
    /// [`ImageError::SizeMismatch`] if the number of elements differs from the layout size
    pub fn from_vec(layout: Layout, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != layout.size() {
            return Err(ImageError::SizeMismatch {
                expected: layout.size(),
                got: data.len(),
            });
        }
        Ok(Image { layout, data })
    }

    /// Like [`Self::from_vec`], with the layout given as a symbolic stride specification
    /// (see [`Layout::from_stride_spec`])
    pub fn from_vec_with_strides(
        shape: Vec<usize>,
        spec: &[isize],
        data: Vec<T>,
    ) -> Result<Self, ImageError> {
        let layout = Layout::from_stride_spec(shape, spec)?;
        Self::from_vec(layout, data)
    }

    /// Fills the image by evaluating `f` at every coordinate
    pub fn from_fn(layout: Layout, mut f: impl FnMut(&[ConcreteIndex]) -> T) -> Self {
        let size = layout.size();
        let mut slots: Vec<Option<T>> = (0..size).map(|_| None).collect();
        let shape = layout.shape();
        let mut index = vec![0; shape.len()];
        for _ in 0..size {
            slots[layout.offset_unchecked(&index)] = Some(f(&index));
            for (axis, i) in index.iter_mut().enumerate().rev() {
                *i += 1;
                if *i < shape[axis] {
                    break;
                }
                *i = 0;
            }
        }
        let data = slots.into_iter().flatten().collect();
        Image { layout, data }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The raw storage, in layout order
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// A view positioned at the origin
    pub fn voxel(&self) -> Voxel<'_, T> {
        Voxel::new(self)
    }

    pub fn get<C: AsRef<[ConcreteIndex]>>(&self, indices: C) -> anyhow::Result<&T> {
        let flat = self.layout.flat_index(indices)?;
        Ok(&self.data[usize::from(flat)])
    }

    pub fn get_mut<C: AsRef<[ConcreteIndex]>>(&mut self, indices: C) -> anyhow::Result<&mut T> {
        let flat = self.layout.flat_index(indices)?;
        Ok(&mut self.data[usize::from(flat)])
    }
}

impl<T> Extent for Image<T> {
    fn order(&self) -> usize {
        self.layout.order()
    }

    fn dim(&self, axis: usize) -> usize {
        self.layout.dim(axis)
    }

    fn shape(&self) -> Vec<usize> {
        self.layout.shape()
    }
}

impl<T: Clone> Image<T> {
    pub fn filled(layout: Layout, value: T) -> Self {
        let data = vec![value; layout.size()];
        Image { layout, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_follows_layout() {
        let row = Image::from_fn(Layout::row_major(vec![2, 3]), |i| i[0] * 10 + i[1]);
        assert_eq!(row.data(), &[0, 1, 2, 10, 11, 12]);

        let col = Image::from_fn(Layout::column_major(vec![2, 3]), |i| i[0] * 10 + i[1]);
        assert_eq!(col.data(), &[0, 10, 1, 11, 2, 12]);
        assert_eq!(*col.get([1, 2]).unwrap(), 12);
    }

    #[test]
    fn size_mismatch() {
        let err = Image::from_vec(Layout::row_major(vec![2, 2]), vec![1.0f32; 3]).unwrap_err();
        assert!(matches!(
            err,
            ImageError::SizeMismatch {
                expected: 4,
                got: 3
            }
        ));
        assert!(matches!(
            Image::from_vec_with_strides(vec![2, 2], &[1, 1], vec![0u8; 4]),
            Err(ImageError::Layout(LayoutError::DuplicateRank(1)))
        ));
    }

    #[test]
    fn get_mut_writes_through_layout() {
        let layout = Layout::from_stride_spec(vec![2, 2], &[-1, 2]).unwrap();
        let mut image = Image::filled(layout, 0);
        *image.get_mut([0, 1]).unwrap() = 7;
        assert_eq!(image.data(), &[0, 0, 0, 7]);
    }
}
