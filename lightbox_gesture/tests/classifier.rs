// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lightbox_gesture` crate.
//!
//! These feed realistic event streams through a [`GestureClassifier`] and
//! check the emitted primitive sequences.

use kurbo::Point;
use lightbox_gesture::{Gesture, GestureClassifier, GestureSession, PointerButton, RawInput};
use smallvec::smallvec;

fn run(classifier: &mut GestureClassifier, zoomed: bool, inputs: &[RawInput]) -> Vec<Gesture> {
    inputs
        .iter()
        .filter_map(|input| classifier.classify(input, zoomed))
        .collect()
}

#[test]
fn mouse_drag_stream() {
    let mut classifier = GestureClassifier::new();
    let inputs = [
        RawInput::PointerMove {
            position: Point::new(0.0, 0.0),
        },
        RawInput::PointerDown {
            position: Point::new(10.0, 10.0),
            button: PointerButton::Primary,
        },
        RawInput::PointerMove {
            position: Point::new(12.0, 10.0),
        },
        RawInput::PointerMove {
            position: Point::new(15.0, 11.0),
        },
        RawInput::PointerUp {
            position: Point::new(15.0, 11.0),
        },
        RawInput::PointerMove {
            position: Point::new(20.0, 20.0),
        },
    ];
    assert_eq!(
        run(&mut classifier, true, &inputs),
        vec![
            Gesture::PanStart(Point::new(10.0, 10.0)),
            Gesture::PanMove(Point::new(12.0, 10.0)),
            Gesture::PanMove(Point::new(15.0, 11.0)),
            Gesture::PanEnd,
        ]
    );
    assert!(classifier.is_idle());
}

#[test]
fn unzoomed_mouse_drag_emits_nothing() {
    let mut classifier = GestureClassifier::new();
    let inputs = [
        RawInput::PointerDown {
            position: Point::new(10.0, 10.0),
            button: PointerButton::Primary,
        },
        RawInput::PointerMove {
            position: Point::new(80.0, 10.0),
        },
        RawInput::PointerUp {
            position: Point::new(80.0, 10.0),
        },
    ];
    assert!(run(&mut classifier, false, &inputs).is_empty());
}

#[test]
fn swipe_stream_with_intermediate_moves() {
    let mut classifier = GestureClassifier::new();
    let inputs = [
        RawInput::touch_start(Point::new(300.0, 100.0), 1_000),
        RawInput::TouchMove {
            touches: smallvec![Point::new(280.0, 101.0)],
            timestamp: 1_016,
        },
        RawInput::TouchMove {
            touches: smallvec![Point::new(240.0, 103.0)],
            timestamp: 1_032,
        },
        RawInput::touch_end(Point::new(220.0, 104.0), 1_048),
    ];
    assert_eq!(
        run(&mut classifier, false, &inputs),
        vec![
            Gesture::SwipeCandidateStart {
                point: Point::new(300.0, 100.0),
                timestamp: 1_000,
            },
            Gesture::SwipeCandidateEnd {
                point: Point::new(220.0, 104.0),
                timestamp: 1_048,
            },
        ]
    );
}

#[test]
fn pinch_stream_is_incremental() {
    let mut classifier = GestureClassifier::new();
    let origin = Point::new(0.0, 0.0);
    let inputs = [
        RawInput::pinch_start(origin, Point::new(0.0, 100.0), 0),
        RawInput::pinch_move(origin, Point::new(0.0, 120.0), 16),
        RawInput::pinch_move(origin, Point::new(0.0, 150.0), 32),
        RawInput::pinch_move(origin, Point::new(0.0, 300.0), 48),
    ];
    let ratios: Vec<f64> = run(&mut classifier, false, &inputs)
        .into_iter()
        .map(|g| match g {
            Gesture::PinchUpdate(ratio) => ratio,
            other => panic!("unexpected gesture {other:?}"),
        })
        .collect();
    assert_eq!(ratios.len(), 3);
    assert!((ratios[0] - 1.2).abs() < 1e-12);
    assert!((ratios[1] - 1.25).abs() < 1e-12);
    assert!((ratios[2] - 2.0).abs() < 1e-12);

    // The product of the incremental ratios is the overall spread.
    let product: f64 = ratios.iter().product();
    assert!((product - 3.0).abs() < 1e-12);
}

#[test]
fn pinch_then_lift_then_single_touch_starts_fresh() {
    let mut classifier = GestureClassifier::new();
    classifier.classify(
        &RawInput::pinch_start(Point::new(0.0, 0.0), Point::new(50.0, 0.0), 0),
        true,
    );
    classifier.classify(
        &RawInput::TouchEnd {
            changed: smallvec![Point::new(50.0, 0.0)],
            remaining: 1,
            timestamp: 10,
        },
        true,
    );
    assert_eq!(classifier.session(), GestureSession::Idle);

    // The remaining finger lifting emits nothing.
    assert_eq!(
        classifier.classify(&RawInput::touch_end(Point::new(0.0, 0.0), 20), true),
        None
    );

    assert_eq!(
        classifier.classify(&RawInput::touch_start(Point::new(5.0, 5.0), 30), true),
        Some(Gesture::PanStart(Point::new(5.0, 5.0)))
    );
}

#[test]
fn mouse_down_during_touch_pan_is_ignored() {
    let mut classifier = GestureClassifier::new();
    classifier.classify(&RawInput::touch_start(Point::new(1.0, 1.0), 0), true);
    assert_eq!(
        classifier.classify(
            &RawInput::PointerDown {
                position: Point::new(9.0, 9.0),
                button: PointerButton::Primary,
            },
            true,
        ),
        None
    );
    assert_eq!(classifier.session(), GestureSession::TouchPan);
}
