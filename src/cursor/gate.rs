use std::sync::{Mutex, MutexGuard};

use log::trace;

use crate::iterators::Traversal;
use crate::structure::Position;

/// Everything a claim touches: the traversal, the dataset it moves along and the
/// number of coordinates handed out so far.
///
/// Only ever reached through [`Gated`], so the whole check, advance and extract
/// sequence of a claim runs under one lock.
#[derive(Debug)]
pub(super) struct Gate<'a, L, S> {
    pub(super) traversal: &'a mut L,
    pub(super) source: S,
    pub(super) claimed: usize,
}

impl<L: Traversal, S: Position> Gate<'_, L, S> {
    /// Positions `targets` on the coordinate `source` sits on and counts the claim
    pub(super) fn deliver(&mut self, targets: &mut [&mut dyn Position]) -> bool {
        self.traversal.extract_position(&self.source, targets);
        self.claimed += 1;
        true
    }

    pub(super) fn exhausted(&self) -> bool {
        trace!("cursor exhausted after {} claims", self.claimed);
        false
    }

    pub(super) fn restart(&mut self) {
        self.traversal.reset(&self.source);
        self.claimed = 0;
    }
}

#[derive(Debug)]
pub(super) struct Gated<'a, L, S> {
    inner: Mutex<Gate<'a, L, S>>,
}

impl<'a, L, S> Gated<'a, L, S> {
    pub(super) fn new(traversal: &'a mut L, source: S) -> Self {
        Gated {
            inner: Mutex::new(Gate {
                traversal,
                source,
                claimed: 0,
            }),
        }
    }

    /// Enters the critical section; it is left when the guard drops.
    ///
    /// # Panics
    ///
    /// If another worker panicked inside the gate, leaving the traversal in an
    /// unknown state
    pub(super) fn enter(&self) -> MutexGuard<'_, Gate<'a, L, S>> {
        match self.inner.lock() {
            Ok(gate) => gate,
            Err(_) => panic!("cursor gate poisoned: a worker panicked while claiming"),
        }
    }

    /// Exclusive access without locking, for callers already holding `&mut`
    pub(super) fn get_mut(&mut self) -> &mut Gate<'a, L, S> {
        match self.inner.get_mut() {
            Ok(gate) => gate,
            Err(_) => panic!("cursor gate poisoned: a worker panicked while claiming"),
        }
    }

    pub(super) fn into_inner(self) -> Gate<'a, L, S> {
        match self.inner.into_inner() {
            Ok(gate) => gate,
            Err(_) => panic!("cursor gate poisoned: a worker panicked while claiming"),
        }
    }
}
