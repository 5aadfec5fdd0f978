use criterion::{criterion_group, criterion_main, Criterion};

use fillbench::{fill_ones, BUFFER_SLOTS, PROBE_INDEX};

/// Benchmark: allocate a fresh 100k-slot buffer, fill it, probe one slot
fn bench_fill(c: &mut Criterion) {
    c.bench_function("fill_100k", |b| {
        b.iter(|| {
            let mut buf = vec![0i32; BUFFER_SLOTS];
            fill_ones(&mut buf);
            std::hint::black_box(buf[PROBE_INDEX]);
        })
    });
}

criterion_group!(fill, bench_fill);
criterion_main!(fill);
