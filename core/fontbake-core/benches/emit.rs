//! Criterion benchmark for initializer emission (made by FontLab https://www.fontlab.com/)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fontbake_core::output::write_entries;
use fontbake_core::record::FontRecord;

fn bench_write_entries(c: &mut Criterion) {
    let data: Vec<u8> = (0..256 * 1024).map(|i| (i % 251) as u8).collect();
    let records = vec![FontRecord::new("Bench.ttf", data)];

    c.bench_function("write_entries 256 KiB font", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(6 * 256 * 1024 + 128);
            write_entries(black_box(&records), &mut buf).unwrap();
            buf
        })
    });
}

criterion_group!(benches, bench_write_entries);
criterion_main!(benches);
