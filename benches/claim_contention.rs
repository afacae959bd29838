use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nextvox::cursor::{Cursor, MaskedCursor};
use nextvox::data::{BitMask, Image};
use nextvox::iterators::LoopInOrder;
use nextvox::structure::{layout::Layout, Extent};

fn image() -> Image<f32> {
    let layout = Layout::from_stride_spec(vec![64, 64, 32], &[0, 0, 1]).unwrap();
    Image::from_fn(layout, |i| (i[0] ^ i[1] ^ i[2]) as f32)
}

fn drain(image: &Image<f32>, workers: usize) -> f32 {
    let mut traversal = LoopInOrder::from_layout(image.layout());
    let cursor = Cursor::new(&mut traversal, image);
    let cursor = &cursor;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(move || {
                    let mut voxel = image.voxel();
                    let mut sum = 0.0;
                    while cursor.claim(&mut voxel) {
                        sum += *voxel.value();
                    }
                    sum
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    })
}

fn drain_masked(image: &Image<f32>, mask: &BitMask, workers: usize) -> f32 {
    let mut traversal = LoopInOrder::from_layout(mask.layout());
    let cursor = MaskedCursor::new(&mut traversal, mask.voxel());
    let cursor = &cursor;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(move || {
                    let mut voxel = image.voxel();
                    let mut sum = 0.0;
                    while cursor.claim(&mut voxel) {
                        sum += *voxel.value();
                    }
                    sum
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    })
}

fn criterion_benchmark(c: &mut Criterion) {
    let image = image();
    let mask = BitMask::from_fn(image.layout().clone(), |i| (i[0] + i[1] + i[2]) % 3 == 0);

    let mut group = c.benchmark_group("claim_contention");
    group.throughput(Throughput::Elements(image.size() as u64));

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("unmasked", workers), &workers, |b, &w| {
            b.iter(|| drain(&image, w))
        });
        group.bench_with_input(BenchmarkId::new("masked", workers), &workers, |b, &w| {
            b.iter(|| drain_masked(&image, &mask, w))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
