// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use lightbox::{MediaItem, PointerButton, RawInput, Viewer};
use lightbox_gesture::GestureClassifier;

fn gallery(n: usize) -> Vec<MediaItem> {
    (0..n)
        .map(|i| MediaItem::image(format!("{i}"), format!("https://cdn.example/{i}.jpg")))
        .collect()
}

/// A zoom-in, a long mouse drag, then a pinch out back to unit scale.
fn drag_and_pinch_stream(moves: usize) -> Vec<RawInput> {
    let mut inputs = Vec::with_capacity(moves * 2 + 8);
    inputs.push(RawInput::DoubleActivate);
    inputs.push(RawInput::PointerDown {
        position: Point::new(0.0, 0.0),
        button: PointerButton::Primary,
    });
    for i in 0..moves {
        let t = i as f64;
        inputs.push(RawInput::PointerMove {
            position: Point::new(t.sin() * 200.0, t.cos() * 150.0),
        });
    }
    inputs.push(RawInput::PointerUp {
        position: Point::new(0.0, 0.0),
    });
    inputs.push(RawInput::pinch_start(
        Point::new(0.0, 0.0),
        Point::new(400.0, 0.0),
        0,
    ));
    for i in 0..moves {
        let spread = 400.0 - (i as f64 / moves as f64) * 300.0;
        inputs.push(RawInput::pinch_move(
            Point::new(0.0, 0.0),
            Point::new(spread, 0.0),
            i as u64,
        ));
    }
    inputs
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/classify");

    for moves in [64usize, 512, 4_096] {
        let inputs = drag_and_pinch_stream(moves);
        group.throughput(Throughput::Elements(inputs.len() as u64));

        group.bench_with_input(BenchmarkId::new("zoomed", moves), &inputs, |b, inputs| {
            b.iter(|| {
                let mut classifier = GestureClassifier::new();
                for input in inputs {
                    black_box(classifier.classify(input, true));
                }
            });
        });
    }

    group.finish();
}

fn bench_viewer_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer/feed");

    for moves in [64usize, 512, 4_096] {
        let inputs = drag_and_pinch_stream(moves);
        group.throughput(Throughput::Elements(inputs.len() as u64));

        group.bench_with_input(BenchmarkId::new("drag_pinch", moves), &inputs, |b, inputs| {
            b.iter_batched(
                || Viewer::new(gallery(16), 0),
                |mut viewer| {
                    for input in inputs {
                        black_box(viewer.feed(input));
                    }
                    black_box(viewer);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer/navigate");

    for len in [16usize, 1_024, 65_536] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("go_next_full_cycle", len), &len, |b, &len| {
            b.iter_batched(
                || Viewer::new(gallery(len), 0),
                |mut viewer| {
                    for _ in 0..len {
                        viewer.go_next();
                    }
                    black_box(viewer.take_preload_requests());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classifier, bench_viewer_feed, bench_navigation);
criterion_main!(benches);
