use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use initials_core::{keyed_index, select_background, Palette};

fn bench_keyed_index(c: &mut Criterion) {
    c.bench_function("keyed_index_16", |b| {
        b.iter(|| keyed_index(black_box(16), black_box("someone@example.com")));
    });
}

fn bench_select_keyed(c: &mut Criterion) {
    let palette = Palette::default();

    c.bench_function("select_background_keyed", |b| {
        let mut i = 0u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            let key = format!("user-{i}");
            select_background(black_box(palette.colors()), &key)
        });
    });
}

fn bench_select_random(c: &mut Criterion) {
    let palette = Palette::default();

    c.bench_function("select_background_random", |b| {
        b.iter(|| select_background(black_box(palette.colors()), ""));
    });
}

criterion_group!(benches, bench_keyed_index, bench_select_keyed, bench_select_random);
criterion_main!(benches);
