//! Hot paths of the frame loop: easing, layout, phase ticking and picking.

#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{UVec2, Vec2, Vec3};
use reactor_view::engine::{disassembly_phases, AssemblyEngine};
use reactor_view::loader::MemoryLoader;
use reactor_view::options::Options;
use reactor_view::parts::{MeshNode, MeshShape, PartInfo, PartSubtree};
use reactor_view::picking::Picker;
use reactor_view::util::easing::EasingFunction;
use reactor_view::{animation::Sequence, layout};
use web_time::{Duration, Instant};

fn subtree(title: &str, shape: MeshShape) -> PartSubtree {
    PartSubtree {
        info: PartInfo {
            title: title.to_owned(),
            ..PartInfo::default()
        },
        meshes: vec![MeshNode {
            name: title.to_owned(),
            shape,
        }],
    }
}

fn engine(fuel_units: usize) -> AssemblyEngine {
    let mut loader = MemoryLoader::new()
        .with_part(
            "housing",
            subtree(
                "housing",
                MeshShape::Box {
                    min: Vec3::new(-1.0, 0.0, -1.0),
                    max: Vec3::new(1.0, 1.5, 1.0),
                },
            ),
        )
        .with_part(
            "lid",
            subtree(
                "lid",
                MeshShape::Box {
                    min: Vec3::new(-0.8, 0.0, -0.8),
                    max: Vec3::new(0.8, 0.2, 0.8),
                },
            ),
        )
        .with_part(
            "fuel_unit",
            subtree(
                "fuel",
                MeshShape::Sphere {
                    center: Vec3::ZERO,
                    radius: 0.1,
                },
            ),
        );
    let mut options = Options::default();
    options.layout.fuel_units = fuel_units;
    AssemblyEngine::load(&mut loader, options).unwrap()
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.3))))
    });
}

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_generate");
    for count in [7, 64, 1024] {
        group.bench_function(format!("{count}_slots"), |b| {
            b.iter(|| black_box(layout::generate(black_box(count), 1.1, 30.0)))
        });
    }
    group.finish();
}

fn sequence_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_tick");
    for count in [7, 64, 256] {
        let engine = engine(count);
        let phases = disassembly_phases(engine.registry(), engine.options());
        group.bench_function(format!("{count}_fuel_units"), |b| {
            b.iter_batched(
                || (engine.registry().clone(), Sequence::new(phases.clone())),
                |(mut registry, mut sequence)| {
                    let t0 = Instant::now();
                    let _ = sequence.tick(&mut registry, t0);
                    black_box(sequence.tick(&mut registry, t0 + Duration::from_millis(300)))
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn pick_benchmark(c: &mut Criterion) {
    let engine = engine(64);
    let mut picker = Picker::new();
    picker.set_enabled(true);
    let candidates: Vec<_> = engine.registry().all().map(|p| p.id).collect();
    c.bench_function("pick_64_fuel_units", |b| {
        b.iter(|| {
            black_box(picker.pick_at(
                black_box(Vec2::new(640.0, 360.0)),
                UVec2::new(1280, 720),
                engine.camera(),
                engine.registry(),
                &candidates,
            ))
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    layout_benchmark,
    sequence_tick_benchmark,
    pick_benchmark
);
criterion_main!(benches);
