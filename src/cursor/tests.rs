//! Tests for the cursors
//!
//! Workers are scoped threads sharing one cursor by reference; each drains it
//! and reports the coordinates it claimed.


use crate::structure::concrete_index::ExpandedIndex;

/// Runs `workers` copies of `work` concurrently and gathers what each returns
fn run_workers<F>(workers: usize, work: F) -> Vec<Vec<ExpandedIndex>>
where
    F: Fn() -> Vec<ExpandedIndex> + Sync,
{
    let work = &work;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers).map(|_| s.spawn(work)).collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    })
}

/// All claimed coordinates, sorted, asserting none was claimed twice
fn merged(claims: Vec<Vec<ExpandedIndex>>) -> Vec<ExpandedIndex> {
    let mut all: Vec<ExpandedIndex> = claims.into_iter().flatten().collect();
    all.sort();
    for pair in all.windows(2) {
        assert_ne!(pair[0], pair[1], "coordinate {} claimed twice", pair[0]);
    }
    all
}

/// Every coordinate of `shape`, sorted
fn every_coordinate(shape: &[usize]) -> Vec<ExpandedIndex> {
    let mut all = vec![ExpandedIndex::zeros(0)];
    for &dim in shape {
        all = all
            .into_iter()
            .flat_map(|prefix| {
                (0..dim).map(move |i| {
                    let mut next: Vec<usize> = prefix.clone().into();
                    next.push(i);
                    ExpandedIndex::from(next)
                })
            })
            .collect();
    }
    all.sort();
    all
}
