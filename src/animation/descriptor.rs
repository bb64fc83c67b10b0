use crate::{
    animation::{ease::Ease, property::AnimatableProperty, value::AnimValue},
    foundation::error::{MotionError, MotionResult},
    state::target::TargetRef,
};

/// One "animate property P of object O to value V" request.
///
/// Descriptors are immutable once built; the builder methods consume and return `self`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDescriptor {
    target: TargetRef,
    delay: f64,
    property: AnimatableProperty,
    end_value: AnimValue,
    duration: f64,
    ease: Ease,
}

impl AnimationDescriptor {
    /// Animate `property` of `target` to `end_value` over `duration` seconds, linearly and
    /// without delay.
    pub fn new(
        target: &TargetRef,
        property: AnimatableProperty,
        end_value: impl Into<AnimValue>,
        duration: f64,
    ) -> Self {
        Self {
            target: target.clone(),
            delay: 0.0,
            property,
            end_value: end_value.into(),
            duration,
            ease: Ease::Linear,
        }
    }

    /// Start delay in seconds.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Easing function.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Animated object.
    pub fn target(&self) -> &TargetRef {
        &self.target
    }

    /// Start delay in seconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Animated property.
    pub fn property(&self) -> AnimatableProperty {
        self.property
    }

    /// Requested end value.
    pub fn end_value(&self) -> &AnimValue {
        &self.end_value
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Easing function.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// `delay + duration`, the span this descriptor occupies inside a group.
    pub fn span(&self) -> f64 {
        self.delay + self.duration
    }

    /// Check timing values and the property/end-value pairing.
    pub fn validate(&self) -> MotionResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(MotionError::validation(format!(
                "duration must be finite and >= 0, got {}",
                self.duration
            )));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(MotionError::validation(format!(
                "delay must be finite and >= 0, got {}",
                self.delay
            )));
        }
        if !self.property.is_supported() {
            return Err(MotionError::UnsupportedProperty(self.property));
        }
        self.property.check_value(&self.end_value)
    }

    /// Split a `Frame` descriptor into its `Origin` and `Size` parts.
    ///
    /// Both parts keep the target, delay, duration and easing of `self`.
    pub fn frame_parts(&self) -> MotionResult<(AnimationDescriptor, AnimationDescriptor)> {
        if self.property != AnimatableProperty::Frame {
            return Err(MotionError::validation(format!(
                "frame_parts called on {:?}",
                self.property
            )));
        }
        self.property.check_value(&self.end_value)?;
        let AnimValue::Rect(frame) = self.end_value else {
            return Err(MotionError::validation("Frame end value must be a rect"));
        };

        let part = |property, end_value| AnimationDescriptor {
            target: self.target.clone(),
            delay: self.delay,
            property,
            end_value,
            duration: self.duration,
            ease: self.ease,
        };
        Ok((
            part(AnimatableProperty::Origin, AnimValue::Point(frame.origin())),
            part(AnimatableProperty::Size, AnimValue::Size(frame.size())),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/descriptor.rs"]
mod tests;
