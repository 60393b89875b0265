use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine_log_bridge::{codec, severity::Severity};

fn bench_codec(c: &mut Criterion) {
    let levels: Vec<Severity> = (0..codec::MAX_LOGGERS)
        .map(|i| Severity::from_ordinal((i % 8) as u8).unwrap())
        .collect();
    let word = codec::encode(&levels).unwrap();

    c.bench_function("encode_full_registry", |b| {
        b.iter(|| codec::encode(black_box(&levels)).unwrap())
    });

    c.bench_function("decode_single_logger", |b| {
        b.iter(|| codec::decode(black_box(word), black_box(7)).unwrap())
    });

    // The per-statement check the engine runs on its hot path.
    c.bench_function("statement_enabled", |b| {
        b.iter(|| codec::statement_enabled(black_box(word), black_box(7), black_box(Severity::Warn)))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
