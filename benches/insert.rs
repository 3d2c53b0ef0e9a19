use criterion::*;
use hf_trie::{Entry, Hwt};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bench_insert(c: &mut Criterion) {
    let mut rng = SmallRng::from_seed([5; 32]);
    let codes: Vec<u64> = (0..1 << 16).map(|_| rng.gen()).collect();

    let mut group = c.benchmark_group("insert");
    group.throughput(Throughput::Elements(codes.len() as u64));
    group.bench_function("insert_2^16_entries", |bencher| {
        bencher.iter(|| {
            let mut hwt = Hwt::new();
            for (i, &code) in codes.iter().enumerate() {
                hwt.insert(Entry::new(i as i64, code));
            }
            black_box(hwt.len());
        });
    });
    group.finish();
}

fn config() -> Criterion {
    Criterion::default().sample_size(32)
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_insert
}
