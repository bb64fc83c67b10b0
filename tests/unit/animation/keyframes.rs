use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    foundation::core::{Color, Point, Rect, Size},
    state::target::{AnimationTarget, TargetRef},
};

struct Layer(LayerSnapshot);

impl AnimationTarget for Layer {
    fn snapshot(&self) -> LayerSnapshot {
        self.0.clone()
    }

    fn apply_snapshot(&mut self, snapshot: &LayerSnapshot) {
        self.0 = snapshot.clone();
    }
}

fn fixture() -> (Rc<RefCell<Layer>>, TargetRef, LayerSnapshot) {
    let mut s = LayerSnapshot::with_frame(Rect::new(0.0, 0.0, 100.0, 50.0));
    s.background_color = Some(Color::new(0.2, 0.4, 0.6, 0.8));
    s.border_color = Some(Color::BLACK);
    s.shadow_color = Some(Color::new(0.0, 0.0, 0.0, 0.5));
    s.shadow_offset = Size::new(0.0, -3.0);
    let layer = Rc::new(RefCell::new(Layer(s.clone())));
    let target = TargetRef::new(&layer);
    (layer, target, s)
}

fn generator() -> KeyframeGenerator {
    KeyframeGenerator::new(&KeyframeSettings::default()).unwrap()
}

#[test]
fn frame_count_is_floor_plus_one() {
    assert_eq!(frame_count(0.0, 60.0), 1);
    assert_eq!(frame_count(1.0, 60.0), 61);
    assert_eq!(frame_count(2.5, 60.0), 151);
    assert_eq!(frame_count(0.01, 60.0), 1);
    assert_eq!(frame_count(0.5, 30.0), 16);
}

#[test]
fn zero_duration_yields_single_start_sample() {
    let v = sample(&2.0, &8.0, 0.0, Ease::Linear, 60.0);
    assert_eq!(v, vec![2.0]);
    assert_eq!(sample_ratio(0, 0), 0.0);
}

#[test]
fn samples_are_evenly_spaced_and_end_on_target() {
    let v = sample(&0.0, &60.0, 1.0, Ease::Linear, 60.0);
    assert_eq!(v.len(), 61);
    assert_eq!(v[0], 0.0);
    assert!((v[30] - 30.0).abs() < 1e-9);
    assert_eq!(v[60], 60.0);
}

#[test]
fn eased_samples_follow_curve() {
    let v = sample(&0.0, &1.0, 1.0, Ease::InQuad, 4.0);
    assert_eq!(v.len(), 5);
    assert!((v[2] - 0.25).abs() < 1e-12);
}

#[test]
fn color_channels_are_eased_independently() {
    let a = Color::new(0.0, 1.0, 0.0, 1.0);
    let b = Color::new(1.0, 0.0, 0.5, 1.0);
    let v = sample_values(
        &AnimValue::Color(a),
        &AnimValue::Color(b),
        1.0,
        Ease::Linear,
        2.0,
    )
    .unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v[1], AnimValue::Color(Color::new(0.5, 0.5, 0.25, 1.0)));
}

#[test]
fn mixed_kinds_cannot_be_sampled() {
    let err = sample_values(
        &AnimValue::Scalar(0.0),
        &AnimValue::Point(Point::ZERO),
        1.0,
        Ease::Linear,
        60.0,
    )
    .unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));
}

#[test]
fn identical_endpoints_stay_constant_for_every_property_and_ease() {
    let (_layer, target, base) = fixture();
    let props = [
        AnimatableProperty::Origin,
        AnimatableProperty::OriginX,
        AnimatableProperty::OriginY,
        AnimatableProperty::Size,
        AnimatableProperty::SizeWidth,
        AnimatableProperty::SizeHeight,
        AnimatableProperty::Center,
        AnimatableProperty::CenterX,
        AnimatableProperty::CenterY,
        AnimatableProperty::Position,
        AnimatableProperty::PositionX,
        AnimatableProperty::PositionY,
        AnimatableProperty::BackgroundColor,
        AnimatableProperty::BorderColor,
        AnimatableProperty::BorderWidth,
        AnimatableProperty::CornerRadius,
        AnimatableProperty::Opacity,
        AnimatableProperty::Alpha,
        AnimatableProperty::ShadowColor,
        AnimatableProperty::ShadowOffset,
        AnimatableProperty::ShadowOpacity,
        AnimatableProperty::ShadowRadius,
        AnimatableProperty::ScaleX,
        AnimatableProperty::ScaleY,
    ];
    let g = generator();
    for p in props {
        let current = base.get(p).unwrap();
        for ease in Ease::ALL {
            let mut s = base.clone();
            let desc = AnimationDescriptor::new(&target, p, current.clone(), 0.5).with_ease(ease);
            let anim = g.keyframe_animation(&desc, &mut s, true).unwrap();
            assert_eq!(anim.values.len(), 31);
            let first = anim.values[0].clone();
            assert!(
                anim.values.iter().all(|v| *v == first),
                "{p:?} with {ease:?} is not constant"
            );
            assert_eq!(s, base, "{p:?} changed the snapshot");
        }
    }
}

#[test]
fn keyframe_animation_carries_timing() {
    let (_layer, target, mut s) = fixture();
    let desc = AnimationDescriptor::new(&target, AnimatableProperty::Opacity, 0.0, 2.0)
        .with_delay(0.75)
        .with_ease(Ease::OutCubic);
    let g = generator();

    let delayed = g.keyframe_animation(&desc, &mut s.clone(), true).unwrap();
    assert_eq!(delayed.key_path, "opacity");
    assert_eq!(delayed.timing.begin_time, 0.75);
    assert_eq!(delayed.timing.duration, 2.0);
    assert_eq!(delayed.timing.fill_mode, crate::compose::timeline::FillMode::Forwards);
    assert!(!delayed.timing.removed_on_completion);
    assert_eq!(delayed.ease, Ease::OutCubic);
    assert_eq!(delayed.values.len(), 121);
    assert_eq!(delayed.values[0], AnimValue::Scalar(1.0));
    assert_eq!(delayed.values[120], AnimValue::Scalar(0.0));

    let undelayed = g.keyframe_animation(&desc, &mut s, false).unwrap();
    assert_eq!(undelayed.timing.begin_time, 0.0);
    assert_eq!(s.opacity, 0.0);
}

#[test]
fn frame_is_rejected_for_direct_sampling() {
    let (_layer, target, mut s) = fixture();
    let desc = AnimationDescriptor::new(
        &target,
        AnimatableProperty::Frame,
        Rect::new(0.0, 0.0, 1.0, 1.0),
        1.0,
    );
    let err = generator()
        .keyframe_animation(&desc, &mut s, true)
        .unwrap_err();
    assert!(matches!(err, MotionError::FrameNotSampleable));
}

#[test]
fn unsupported_property_is_rejected() {
    let (_layer, target, mut s) = fixture();
    let desc = AnimationDescriptor::new(&target, AnimatableProperty::ZPosition, 3.0, 1.0);
    let err = generator().animation(&desc, &mut s, true).unwrap_err();
    assert!(matches!(
        err,
        MotionError::UnsupportedProperty(AnimatableProperty::ZPosition)
    ));
}

#[test]
fn frame_decomposes_into_origin_and_size() {
    let (_layer, target, mut s) = fixture();
    let frame = Rect::from_origin_size((10.0, 20.0), (30.0, 40.0));
    let desc = AnimationDescriptor::new(&target, AnimatableProperty::Frame, frame, 1.0)
        .with_delay(0.5);
    let anim = generator().animation(&desc, &mut s, true).unwrap();

    let Animation::Group(group) = &anim else {
        panic!("frame should produce a group");
    };
    assert_eq!(group.timing.begin_time, 0.5);
    assert_eq!(group.timing.duration, 1.0);

    let keys = anim.keyframes();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].key_path, "position");
    assert_eq!(keys[1].key_path, "bounds.size");
    for k in &keys {
        assert_eq!(k.timing.begin_time, 0.0);
        assert_eq!(k.values.len(), 61);
    }
    assert_eq!(keys[0].values[0], AnimValue::Point(Point::new(50.0, 25.0)));
    assert_eq!(keys[0].values[60], AnimValue::Point(Point::new(25.0, 40.0)));
    assert_eq!(keys[1].values[0], AnimValue::Size(Size::new(100.0, 50.0)));
    assert_eq!(keys[1].values[60], AnimValue::Size(Size::new(30.0, 40.0)));

    assert_eq!(s.frame(), frame);
}

#[test]
fn zero_rate_settings_are_rejected() {
    let err = KeyframeGenerator::new(&KeyframeSettings {
        samples_per_second: 0,
    })
    .unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));
}

#[test]
fn frame_count_saturates_for_huge_durations() {
    assert_eq!(frame_count(1e18, 60.0), MAX_FRAMES + 1);
    assert_eq!(frame_count(f64::MAX, 60.0), MAX_FRAMES + 1);
}

#[test]
fn overlong_duration_is_rejected_before_sampling() {
    let (_layer, target, mut s) = fixture();
    let before = s.clone();
    let g = generator();
    for p in [AnimatableProperty::Opacity, AnimatableProperty::Frame] {
        let end = match p {
            AnimatableProperty::Frame => AnimValue::Rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
            _ => AnimValue::Scalar(0.0),
        };
        let desc = AnimationDescriptor::new(&target, p, end, 1e18);
        let err = g.animation(&desc, &mut s, true).unwrap_err();
        assert!(matches!(err, MotionError::Validation(_)), "{p:?}: {err:?}");
    }
    assert_eq!(s, before);
}
