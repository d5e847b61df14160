#![allow(missing_docs, unused_results)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Vec2};
use viewport_samples::{
    camera::{TrackballController, ViewCamera},
    engine::ViewState,
    input::{InputEvent, MouseButton},
    options::Options,
};

fn trackball_move_benchmark(c: &mut Criterion) {
    c.bench_function("trackball_on_move", |b| {
        let mut trackball = TrackballController::new();
        trackball.on_press(Vec2::ZERO);
        let mut x = 0.0_f32;
        b.iter(|| {
            x += 1.0;
            black_box(trackball.on_move(black_box(Vec2::new(x, x * 0.5))))
        });
    });
}

fn drag_sequence_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_through_view_state");

    for moves in [10_u32, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(moves),
            &moves,
            |b, &moves| {
                b.iter(|| {
                    let mut view =
                        ViewState::new(&Options::default(), (1280, 720), true);
                    view.handle_input(InputEvent::MouseButton {
                        button: MouseButton::Left,
                        pressed: true,
                    });
                    for i in 0..moves {
                        view.handle_input(InputEvent::CursorMoved {
                            x: i as f32,
                            y: (i % 7) as f32,
                        });
                    }
                    black_box(view.orientation())
                });
            },
        );
    }

    group.finish();
}

fn view_matrix_benchmark(c: &mut Criterion) {
    let camera = ViewCamera::default();
    let mut trackball = TrackballController::new();
    trackball.on_press(Vec2::ZERO);
    let orientation = trackball.on_move(Vec2::new(30.0, 12.0));

    c.bench_function("view_projection", |b| {
        b.iter(|| {
            let view: Mat4 = camera.view_matrix(black_box(orientation));
            black_box(camera.projection() * view)
        });
    });
}

criterion_group!(
    benches,
    trackball_move_benchmark,
    drag_sequence_benchmark,
    view_matrix_benchmark
);
criterion_main!(benches);
