use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use initials_render::{new_canvas, render_avatar, render_initials, AvatarOptions, Color};

fn bench_new_canvas(c: &mut Criterion) {
    c.bench_function("new_canvas_256", |b| {
        b.iter(|| new_canvas(black_box(256), black_box(256), Color::BLACK));
    });
}

fn bench_render_single_letter(c: &mut Criterion) {
    let options = AvatarOptions::default().with_palette_key("bench");

    c.bench_function("render_avatar_64_single", |b| {
        b.iter(|| render_avatar(black_box(64), black_box(&['A']), &options));
    });
}

fn bench_render_initials(c: &mut Criterion) {
    let options = AvatarOptions::default();

    c.bench_function("render_initials_128_random", |b| {
        b.iter(|| render_initials(black_box(128), black_box("JD"), &options));
    });
}

criterion_group!(benches, bench_new_canvas, bench_render_single_letter, bench_render_initials);
criterion_main!(benches);
