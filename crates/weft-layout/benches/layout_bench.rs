use criterion::{Criterion, black_box, criterion_group, criterion_main};
use weft_layout::{Bucket, distribute};

fn bench_distribute(c: &mut Criterion) {
    let mixed: Vec<Bucket> = (0..16)
        .map(|i| {
            if i % 4 == 0 {
                Bucket::fixed(1)
            } else {
                Bucket::flexible(i as u16 % 7, i as u16 % 3)
            }
        })
        .collect();

    c.bench_function("distribute_mixed_16", |b| {
        b.iter(|| distribute(black_box(240), black_box(&mixed)))
    });

    let overflow: Vec<Bucket> = (0..16).map(|_| Bucket::flexible(20, 1)).collect();
    c.bench_function("distribute_overflow_16", |b| {
        b.iter(|| distribute(black_box(100), black_box(&overflow)))
    });
}

criterion_group!(benches, bench_distribute);
criterion_main!(benches);
