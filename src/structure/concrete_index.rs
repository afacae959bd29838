use std::ops::Deref;

use derive_more::Display;
use derive_more::From;
use derive_more::Index;
use derive_more::Into;
use derive_more::IntoIterator;

use serde::{Deserialize, Serialize};

/// A concrete index, i.e. the position along a single axis
pub type ConcreteIndex = usize;

/// A coordinate in an n-dimensional iteration space: one [`ConcreteIndex`] per axis, in axis order.
#[derive(
    Debug,
    Clone,
    Default,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    Index,
    Serialize,
    Deserialize,
    From,
    Into,
    Display,
    IntoIterator,
)]
#[display(fmt = "{:?}", indices)]
pub struct ExpandedIndex {
    indices: Vec<ConcreteIndex>,
}

impl ExpandedIndex {
    /// The index with every axis at zero
    pub fn zeros(order: usize) -> Self {
        ExpandedIndex {
            indices: vec![0; order],
        }
    }

    pub fn order(&self) -> usize {
        self.indices.len()
    }
}

impl AsRef<[ConcreteIndex]> for ExpandedIndex {
    fn as_ref(&self) -> &[ConcreteIndex] {
        &self.indices
    }
}

impl Deref for ExpandedIndex {
    type Target = [ConcreteIndex];

    fn deref(&self) -> &Self::Target {
        &self.indices
    }
}

impl FromIterator<ConcreteIndex> for ExpandedIndex {
    fn from_iter<T: IntoIterator<Item = ConcreteIndex>>(iter: T) -> Self {
        ExpandedIndex {
            indices: iter.into_iter().collect(),
        }
    }
}

impl From<&[ConcreteIndex]> for ExpandedIndex {
    fn from(value: &[ConcreteIndex]) -> Self {
        ExpandedIndex {
            indices: value.to_vec(),
        }
    }
}

impl<const N: usize> From<[ConcreteIndex; N]> for ExpandedIndex {
    fn from(value: [ConcreteIndex; N]) -> Self {
        ExpandedIndex {
            indices: value.to_vec(),
        }
    }
}

/// Offset of an element in the linear storage of a dataset.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    From,
    Into,
    Display,
)]
#[display(fmt = "{}", index)]
pub struct FlatIndex {
    index: usize,
}

impl FlatIndex {
    pub fn new(index: usize) -> Self {
        FlatIndex { index }
    }
}
