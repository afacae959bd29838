//! Capabilities of the datasets a traversal walks over.
//!
//! A dataset is anything with an [`Extent`] (an order and a size per axis).
//! Datasets that also carry a current coordinate implement [`Position`]: they
//! are the holders a [`Cursor`](crate::cursor::Cursor) writes claimed
//! coordinates into. A [`Mask`] is a positioned dataset whose value at the
//! current coordinate reads as a boolean.

use duplicate::duplicate;

pub mod concrete_index;
pub mod layout;

use concrete_index::{ConcreteIndex, ExpandedIndex};

/// The dimensionality and per-axis size of an iteration space
pub trait Extent {
    /// Number of axes
    fn order(&self) -> usize;

    /// Size along `axis`
    ///
    /// # Panics
    ///
    /// May panic if `axis >= self.order()`
    fn dim(&self, axis: usize) -> usize;

    fn shape(&self) -> Vec<usize> {
        (0..self.order()).map(|a| self.dim(a)).collect()
    }

    /// Number of coordinates in the space. An order zero space holds a single coordinate.
    fn size(&self) -> usize {
        (0..self.order()).map(|a| self.dim(a)).product()
    }

    /// Same order, same size along every axis
    fn is_congruent<E: Extent + ?Sized>(&self, other: &E) -> bool
    where
        Self: Sized,
    {
        self.order() == other.order() && (0..self.order()).all(|a| self.dim(a) == other.dim(a))
    }
}

/// A dataset with a current coordinate
///
/// Implementors map the logical coordinate onto their own storage layout, so two
/// holders set to the same coordinate may address different memory offsets.
pub trait Position: Extent {
    /// Current index along `axis`
    fn index(&self, axis: usize) -> ConcreteIndex;

    /// Moves the current coordinate along `axis` to `value`, leaving the other axes unchanged
    fn set_index(&mut self, axis: usize, value: ConcreteIndex);

    fn position(&self) -> ExpandedIndex {
        (0..self.order()).map(|a| self.index(a)).collect()
    }

    /// Moves to `indices`, one entry per axis
    ///
    /// # Panics
    ///
    /// If the number of indices differs from the order of the dataset
    fn set_position(&mut self, indices: &[ConcreteIndex]) {
        assert_eq!(
            indices.len(),
            self.order(),
            "Mismatched order: {} indices, vs order {}",
            indices.len(),
            self.order()
        );
        for (axis, &i) in indices.iter().enumerate() {
            self.set_index(axis, i);
        }
    }
}

/// A positioned dataset whose value at the current coordinate decides eligibility
///
/// Reading the value must be free of side effects and total over the extent.
pub trait Mask: Position {
    fn is_set(&self) -> bool;
}

/// Values that can be read as booleans: non zero is true
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

duplicate! {
    [num zero;
        [u8] [0]; [u16] [0]; [u32] [0]; [u64] [0]; [usize] [0];
        [i8] [0]; [i16] [0]; [i32] [0]; [i64] [0]; [isize] [0];
        [f32] [0.0]; [f64] [0.0]]

    impl Truthy for num {
        fn truthy(&self) -> bool {
            *self != zero
        }
    }
}

impl<E: Extent + ?Sized> Extent for &E {
    fn order(&self) -> usize {
        (**self).order()
    }

    fn dim(&self, axis: usize) -> usize {
        (**self).dim(axis)
    }
}

impl<E: Extent + ?Sized> Extent for &mut E {
    fn order(&self) -> usize {
        (**self).order()
    }

    fn dim(&self, axis: usize) -> usize {
        (**self).dim(axis)
    }
}

impl<P: Position + ?Sized> Position for &mut P {
    fn index(&self, axis: usize) -> ConcreteIndex {
        (**self).index(axis)
    }

    fn set_index(&mut self, axis: usize, value: ConcreteIndex) {
        (**self).set_index(axis, value)
    }
}

impl Extent for [usize] {
    fn order(&self) -> usize {
        self.len()
    }

    fn dim(&self, axis: usize) -> usize {
        self[axis]
    }
}

impl Extent for Vec<usize> {
    fn order(&self) -> usize {
        self.len()
    }

    fn dim(&self, axis: usize) -> usize {
        self[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_are_extents() {
        let shape = vec![2usize, 3, 4];
        assert_eq!(shape.size(), 24);
        assert_eq!(shape.as_slice().shape(), vec![2, 3, 4]);
        assert!(shape.is_congruent(&[2usize, 3, 4][..]));
        assert!(!shape.is_congruent(&[3usize, 2, 4][..]));
        assert!(!shape.is_congruent(&[2usize, 3][..]));

        let scalar: Vec<usize> = vec![];
        assert_eq!(scalar.size(), 1);
    }

    #[test]
    fn truthiness() {
        assert!(true.truthy());
        assert!(!0u8.truthy());
        assert!(3i32.truthy());
        assert!((-0.5f32).truthy());
        assert!(!0.0f64.truthy());
    }
}
