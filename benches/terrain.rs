use criterion::{criterion_group, criterion_main, Criterion, black_box};

use glade::scene::{Scene, SceneConfig};
use glade::terrain::noise::fractal_noise;
use glade::terrain::{generate_terrain, terrain_height, TerrainGenerator, TerrainParams};

fn bench_fractal_noise(c: &mut Criterion) {
    c.bench_function("fractal_noise_5_octaves", |b| {
        let mut i = 0u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            let x = (i % 1000) as f32 * 0.013;
            fractal_noise(black_box(x), black_box(x * 0.7), 5, 0.45)
        });
    });
}

fn bench_generate_terrain_50(c: &mut Criterion) {
    c.bench_function("generate_terrain_50x50", |b| {
        b.iter(|| generate_terrain(black_box(50), black_box(50)));
    });
}

fn bench_generate_terrain_256(c: &mut Criterion) {
    let generator = TerrainGenerator::new(TerrainParams {
        width: 256,
        depth: 256,
        ..Default::default()
    });

    c.bench_function("generate_terrain_256x256", |b| {
        b.iter(|| black_box(&generator).generate());
    });
}

fn bench_terrain_height(c: &mut Criterion) {
    c.bench_function("terrain_height_query", |b| {
        let mut frame = 0u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            let t = frame as f32 * 0.01;
            terrain_height(black_box(t.sin() * 20.0), black_box(t.cos() * 20.0))
        });
    });
}

fn bench_scene_build(c: &mut Criterion) {
    let config = SceneConfig::default();

    c.bench_function("scene_build_default", |b| {
        b.iter(|| Scene::build(black_box(&config)));
    });
}

criterion_group!(
    benches,
    bench_fractal_noise,
    bench_generate_terrain_50,
    bench_generate_terrain_256,
    bench_terrain_height,
    bench_scene_build,
);
criterion_main!(benches);
