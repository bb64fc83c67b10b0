use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    foundation::core::{Point, Rect, Size},
    state::{snapshot::LayerSnapshot, target::AnimationTarget},
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

fn layer() -> Rc<RefCell<Layer>> {
    Rc::new(RefCell::new(Layer(LayerSnapshot::default())))
}

#[test]
fn builder_sets_defaults_and_overrides() {
    let l = layer();
    let t = TargetRef::new(&l);
    let d = AnimationDescriptor::new(&t, AnimatableProperty::Opacity, 0.5, 2.0);
    assert_eq!(d.delay(), 0.0);
    assert_eq!(d.ease(), Ease::Linear);
    assert_eq!(d.span(), 2.0);

    let d = d.with_delay(0.5).with_ease(Ease::OutBounce);
    assert_eq!(d.delay(), 0.5);
    assert_eq!(d.ease(), Ease::OutBounce);
    assert_eq!(d.span(), 2.5);
    assert_eq!(d.end_value(), &AnimValue::Scalar(0.5));
    assert_eq!(d.target(), &t);
}

#[test]
fn validate_rejects_bad_timing() {
    let l = layer();
    let t = TargetRef::new(&l);
    let base = AnimationDescriptor::new(&t, AnimatableProperty::Opacity, 0.5, 1.0);
    base.validate().unwrap();

    for d in [
        AnimationDescriptor::new(&t, AnimatableProperty::Opacity, 0.5, -1.0),
        AnimationDescriptor::new(&t, AnimatableProperty::Opacity, 0.5, f64::NAN),
        base.clone().with_delay(-0.1),
        base.clone().with_delay(f64::INFINITY),
    ] {
        assert!(matches!(d.validate(), Err(MotionError::Validation(_))));
    }
}

#[test]
fn validate_reports_unsupported_before_type() {
    let l = layer();
    let t = TargetRef::new(&l);
    let d = AnimationDescriptor::new(&t, AnimatableProperty::Rotation, 1.0, 1.0);
    assert!(matches!(
        d.validate(),
        Err(MotionError::UnsupportedProperty(AnimatableProperty::Rotation))
    ));

    let d = AnimationDescriptor::new(&t, AnimatableProperty::Center, Size::new(1.0, 1.0), 1.0);
    assert!(matches!(d.validate(), Err(MotionError::TypeMismatch { .. })));
}

#[test]
fn frame_splits_into_origin_and_size() {
    let l = layer();
    let t = TargetRef::new(&l);
    let d = AnimationDescriptor::new(
        &t,
        AnimatableProperty::Frame,
        Rect::from_origin_size((10.0, 20.0), (30.0, 40.0)),
        1.5,
    )
    .with_delay(0.25)
    .with_ease(Ease::InOutSine);

    let (origin, size) = d.frame_parts().unwrap();
    assert_eq!(origin.property(), AnimatableProperty::Origin);
    assert_eq!(origin.end_value(), &AnimValue::Point(Point::new(10.0, 20.0)));
    assert_eq!(size.property(), AnimatableProperty::Size);
    assert_eq!(size.end_value(), &AnimValue::Size(Size::new(30.0, 40.0)));
    for part in [&origin, &size] {
        assert_eq!(part.delay(), 0.25);
        assert_eq!(part.duration(), 1.5);
        assert_eq!(part.ease(), Ease::InOutSine);
        assert_eq!(part.target(), &t);
    }
}

#[test]
fn frame_parts_requires_frame_rect() {
    let l = layer();
    let t = TargetRef::new(&l);
    let d = AnimationDescriptor::new(&t, AnimatableProperty::Size, Size::new(1.0, 1.0), 1.0);
    assert!(d.frame_parts().is_err());

    let d = AnimationDescriptor::new(&t, AnimatableProperty::Frame, Point::new(1.0, 1.0), 1.0);
    assert!(matches!(
        d.frame_parts(),
        Err(MotionError::TypeMismatch { .. })
    ));
}
