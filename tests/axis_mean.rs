use std::thread;

use nextvox::cursor::{Cursor, MaskedCursor};
use nextvox::data::{BitMask, Image, IndexCounter, Voxel};
use nextvox::iterators::{Loop, LoopInOrder, Traversal};
use nextvox::structure::{concrete_index::ExpandedIndex, layout::Layout, Position};

const WORKERS: usize = 4;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Input laid out with the averaged axis contiguous
fn input() -> Image<f64> {
    let layout = Layout::from_stride_spec(vec![4, 3, 5], &[0, 0, 1]).unwrap();
    Image::from_fn(layout, |i| (i[0] + 10 * i[1] + 100 * i[2]) as f64)
}

/// Averages `voxel` along axis 2, leaving it wherever the inner loop stops
fn mean_along_last(voxel: &mut Voxel<'_, f64>) -> f64 {
    let mut inner = Loop::axis(2);
    inner.reset(&*voxel);
    let (mut sum, mut n) = (0.0, 0);
    while inner.has_more() {
        inner.advance(voxel);
        sum += *voxel.value();
        n += 1;
    }
    sum / n as f64
}

fn write_back(output: &mut Image<f64>, results: Vec<Vec<(ExpandedIndex, f64)>>) {
    for (position, mean) in results.into_iter().flatten() {
        *output.get_mut(&position).unwrap() = mean;
    }
}

#[test]
fn mean_along_one_axis() {
    init();
    let input = input();
    let mut output = Image::filled(Layout::row_major(vec![4, 3, 1]), f64::NAN);

    let mut outer = LoopInOrder::new(vec![0, 1]).unwrap();
    let cursor = Cursor::new(&mut outer, &output);

    let results: Vec<Vec<(ExpandedIndex, f64)>> = thread::scope(|s| {
        let workers: Vec<_> = (0..WORKERS)
            .map(|_| {
                s.spawn(|| {
                    let mut voxel = input.voxel();
                    let mut out = IndexCounter::new(&output);
                    let mut mine = vec![];
                    while cursor.claim_next(&mut [&mut voxel, &mut out]) {
                        mine.push((out.position(), mean_along_last(&mut voxel)));
                    }
                    mine
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });
    write_back(&mut output, results);

    for i0 in 0..4 {
        for i1 in 0..3 {
            let expected = (i0 + 10 * i1 + 200) as f64;
            assert_eq!(*output.get([i0, i1, 0]).unwrap(), expected);
        }
    }
}

#[test]
fn masked_mean_along_one_axis() {
    init();
    let input = input();
    let mut output = Image::filled(Layout::row_major(vec![4, 3, 1]), 0.0);
    let mask = BitMask::from_fn(output.layout().clone(), |i| (i[0] + i[1]) % 2 == 0);

    let mut outer = Loop::over(0..2).unwrap();
    let cursor = MaskedCursor::new(&mut outer, mask.voxel());

    let results: Vec<Vec<(ExpandedIndex, f64)>> = thread::scope(|s| {
        let workers: Vec<_> = (0..WORKERS)
            .map(|_| {
                s.spawn(|| {
                    let mut voxel = input.voxel();
                    let mut out = IndexCounter::new(&output);
                    let mut mine = vec![];
                    while cursor.claim_next(&mut [&mut voxel, &mut out]) {
                        mine.push((out.position(), mean_along_last(&mut voxel)));
                    }
                    mine
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });
    assert_eq!(cursor.claimed(), mask.count());

    write_back(&mut output, results);

    for i0 in 0..4 {
        for i1 in 0..3 {
            let expected = if (i0 + i1) % 2 == 0 {
                (i0 + 10 * i1 + 200) as f64
            } else {
                0.0
            };
            assert_eq!(*output.get([i0, i1, 0]).unwrap(), expected);
        }
    }
}
