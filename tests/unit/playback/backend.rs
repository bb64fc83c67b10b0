use std::{cell::Cell, rc::Rc};

use super::*;
use crate::{
    animation::{ease::Ease, value::AnimValue},
    compose::timeline::{KeyframeAnimation, Timing},
};

fn opacity(begin: f64, duration: f64) -> Animation {
    KeyframeAnimation {
        key_path: "opacity",
        values: vec![AnimValue::Scalar(1.0), AnimValue::Scalar(0.0)],
        ease: Ease::Linear,
        timing: Timing::held(begin, duration),
    }
    .into()
}

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    (count, move || c.set(c.get() + 1))
}

#[test]
fn end_time_accounts_for_repeats_and_reversal() {
    let mut anim = TargetAnimation {
        target: TargetId(1),
        animation: opacity(2.0, 1.5),
    };
    assert_eq!(anim.end_time(), 3.5);

    anim.animation.timing_mut().repeat_count = 2.0;
    anim.animation.timing_mut().autoreverses = true;
    assert_eq!(anim.end_time(), 8.0);
}

#[test]
fn transaction_end_time_is_latest_member() {
    let (_count, done) = counter();
    let tx = Transaction::new(
        vec![
            TargetAnimation {
                target: TargetId(1),
                animation: opacity(0.0, 1.0),
            },
            TargetAnimation {
                target: TargetId(2),
                animation: opacity(0.5, 2.0),
            },
        ],
        done,
    );
    assert_eq!(tx.end_time(), 2.5);
    assert_eq!(tx.animations().len(), 2);
    assert!(format!("{tx:?}").starts_with("Transaction"));

    let (_count, done) = counter();
    assert_eq!(Transaction::new(Vec::new(), done).end_time(), 0.0);
}

#[test]
fn recording_backend_defers_completion() {
    let mut backend = RecordingBackend::at(10.0);
    let (count, done) = counter();
    backend
        .submit(Transaction::new(
            vec![TargetAnimation {
                target: TargetId(7),
                animation: opacity(10.0, 2.0),
            }],
            done,
        ))
        .unwrap();

    assert_eq!(backend.pending.len(), 1);
    assert_eq!(count.get(), 0);

    assert_eq!(backend.finish_all(), 1);
    assert_eq!(count.get(), 1);
    assert_eq!(backend.current_time(), 12.0);
    assert_eq!(backend.completed(), 1);

    assert_eq!(backend.finish_all(), 0);
    assert_eq!(count.get(), 1);
}

#[test]
fn infinite_repeat_leaves_clock_alone() {
    let mut backend = RecordingBackend::new();
    backend.advance(1.0);
    let mut animation = opacity(1.0, 1.0);
    animation.timing_mut().repeat_count = f64::INFINITY;
    let (count, done) = counter();
    backend
        .submit(Transaction::new(
            vec![TargetAnimation {
                target: TargetId(1),
                animation,
            }],
            done,
        ))
        .unwrap();
    backend.finish_all();
    assert_eq!(backend.current_time(), 1.0);
    assert_eq!(count.get(), 1);
}
