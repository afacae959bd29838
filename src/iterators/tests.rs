//! Tests for the traversal descriptors


use crate::data::IndexCounter;
use crate::structure::{Extent, Position};

use super::Traversal;

/// Drains `traversal` over `extent`, rendering every visited coordinate
fn visits<L: Traversal, E: Extent + ?Sized>(traversal: &mut L, extent: &E) -> String {
    let mut counter = IndexCounter::new(extent);
    traversal.reset(extent);
    let mut seen = vec![];
    while traversal.has_more() {
        traversal.advance(&mut counter);
        seen.push(counter.position().to_string());
    }
    seen.join(" ")
}
