use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tokio::time::Duration;

use rotapool_storage::{Clock, ExpiringRotationStore, ManualClock};

fn bench_insert_sequential(c: &mut Criterion) {
    c.bench_function("insert_sequential_1k", |b| {
        b.iter(|| {
            let clock = ManualClock::default();
            let mut store = ExpiringRotationStore::with_clock(Duration::from_secs(10), clock);
            for i in 0..1_000 {
                store.insert(black_box(i));
            }
            black_box(store.len());
        })
    });
}

fn bench_rotate_all_valid(c: &mut Criterion) {
    let clock = ManualClock::default();
    let mut store = ExpiringRotationStore::with_clock(Duration::from_secs(10), clock);
    for i in 0..1_000 {
        store.insert(i);
    }

    c.bench_function("next_valid_1k_pool_10k_calls", |b| {
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(store.next_valid());
            }
        })
    });
}

fn bench_rotate_with_expiry(c: &mut Criterion) {
    c.bench_function("next_valid_interlaced_expired_1k", |b| {
        b.iter(|| {
            let clock = ManualClock::default();
            let mut store =
                ExpiringRotationStore::with_clock(Duration::from_secs(10), clock.clone());
            let now = clock.now();
            // Metade dos elementos expira após o avanço de 5s.
            for i in 0..1_000u64 {
                let age = if i % 2 == 0 { 0 } else { 6 };
                store.insert_at(i, now - Duration::from_secs(age));
            }
            clock.advance(Duration::from_secs(5));
            for _ in 0..1_000 {
                black_box(store.next_valid());
            }
        })
    });
}

fn bench_clear_expired(c: &mut Criterion) {
    c.bench_function("clear_expired_1k", |b| {
        b.iter(|| {
            let clock = ManualClock::default();
            let mut store =
                ExpiringRotationStore::with_clock(Duration::from_secs(10), clock.clone());
            let now = clock.now();
            for i in 0..1_000u64 {
                store.insert_at(i, now - Duration::from_millis(i * 10));
            }
            clock.advance(Duration::from_secs(5));
            store.clear_expired();
            black_box(store.len());
        })
    });
}

criterion_group!(
    benches,
    bench_insert_sequential,
    bench_rotate_all_valid,
    bench_rotate_with_expiry,
    bench_clear_expired,
);
criterion_main!(benches);
