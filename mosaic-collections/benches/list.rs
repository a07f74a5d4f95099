//! Benchmarks for list operations over a pre-sized arena.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mosaic_collections::{List, ListArena, OwnedList};

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    group.bench_function("try_push_back/pop_front", |b| {
        let mut queue: OwnedList<u64> = OwnedList::with_capacity(1024);
        b.iter(|| {
            queue.try_push_back(black_box(42)).unwrap();
            black_box(queue.pop_front().unwrap())
        });
    });

    group.bench_function("try_push_front/pop_back", |b| {
        let mut queue: OwnedList<u64> = OwnedList::with_capacity(1024);
        b.iter(|| {
            queue.try_push_front(black_box(42)).unwrap();
            black_box(queue.pop_back().unwrap())
        });
    });

    group.finish();
}

fn bench_remove_middle(c: &mut Criterion) {
    c.bench_function("remove_middle", |b| {
        let mut storage: ListArena<u64> = ListArena::with_capacity(1024);
        let mut list: List<u64, ListArena<u64>> = List::new();

        let keys: Vec<_> = (0..512)
            .map(|i| list.try_push_back(&mut storage, i).unwrap())
            .collect();
        let middle = keys[256];

        b.iter(|| {
            let value = list.remove(&mut storage, middle).unwrap();
            // LIFO slot reuse hands the same key back, so the probe stays stable
            black_box(list.try_push_back(&mut storage, value).unwrap())
        });
    });
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for len in [16usize, 256] {
        group.bench_function(format!("scan/{len}"), |b| {
            let mut list: OwnedList<u64> = OwnedList::with_capacity(len);
            for i in 0..len as u64 {
                list.try_push_back(i).unwrap();
            }
            let needle = (len as u64) - 1;

            b.iter(|| black_box(list.find_key(|v| *v == black_box(needle))));
        });
    }

    group.finish();
}

fn bench_vectorize(c: &mut Criterion) {
    c.bench_function("vectorize/256", |b| {
        let mut list: OwnedList<u64> = OwnedList::with_capacity(256);
        for i in 0..256u64 {
            list.try_push_back(i).unwrap();
        }
        let mut dst = vec![0u64; 256];

        b.iter(|| {
            black_box(list.vectorize(black_box(&mut dst)));
        });
    });
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_remove_middle,
    bench_find,
    bench_vectorize
);
criterion_main!(benches);
