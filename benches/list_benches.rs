use adt_collections::linked_list::arena::list::SingleList;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::prelude::SliceRandom;
use rand::thread_rng;

const SAMPLE_SIZE: usize = 10_000;

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_list_push");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("head_insert", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = SingleList::with_capacity(SAMPLE_SIZE);
            for i in 0..SAMPLE_SIZE {
                list.push(black_box(i)).unwrap();
            }
            list
        });
    });

    group.finish();
}

fn append_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_list_append");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("tail_insert", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = SingleList::with_capacity(SAMPLE_SIZE);
            for i in 0..SAMPLE_SIZE {
                list.append(black_box(i)).unwrap();
            }
            list
        });
    });

    group.finish();
}

// Steady-state queue: every dequeue vacates a slot that the next enqueue
// recycles, so the store never grows past the warm-up high-water mark.
fn queue_churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_list_queue");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("churn", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                let mut queue = SingleList::with_capacity(64);
                for i in 0..64 {
                    queue.enqueue(i).unwrap();
                }
                queue
            },
            |mut queue| {
                for i in 0..SAMPLE_SIZE {
                    queue.enqueue(black_box(i)).unwrap();
                    black_box(queue.dequeue());
                }
                queue
            },
        );
    });

    group.finish();
}

fn insert_after_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_list_insert_after");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("random_position", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                let mut list = SingleList::with_capacity(SAMPLE_SIZE * 2);
                let mut handles = Vec::with_capacity(SAMPLE_SIZE);
                for i in 0..SAMPLE_SIZE {
                    handles.push(list.append(i).unwrap());
                }
                handles.shuffle(&mut thread_rng());
                (list, handles)
            },
            |(mut list, handles)| {
                for (i, node) in handles.into_iter().enumerate() {
                    list.insert_after(node, black_box(i)).unwrap();
                }
                list
            },
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    push_benchmark,
    append_benchmark,
    queue_churn_benchmark,
    insert_after_benchmark
);
criterion_main!(benches);
