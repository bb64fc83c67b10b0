use crate::{
    animation::{
        descriptor::AnimationDescriptor,
        ease::Ease,
        property::AnimatableProperty,
        value::{AnimValue, Lerp},
    },
    compose::timeline::{Animation, AnimationGroup, KeyframeAnimation, Timing},
    foundation::error::{MotionError, MotionResult},
    foundation::settings::KeyframeSettings,
    state::snapshot::LayerSnapshot,
};

/// Upper bound on the number of sampling intervals in one keyframe animation.
pub const MAX_FRAMES: usize = 1 << 24;

/// Number of samples for `duration` seconds at `rate` samples per second: `floor(rate * d) + 1`.
///
/// The interval count saturates at [`MAX_FRAMES`].
pub fn frame_count(duration: f64, rate: f64) -> usize {
    let intervals = (rate * duration).floor().clamp(0.0, MAX_FRAMES as f64);
    intervals as usize + 1
}

/// Normalized time of sample `i` out of `total_frames` intervals.
///
/// A zero-length animation has a single sample at `t = 0`.
pub fn sample_ratio(i: usize, total_frames: usize) -> f64 {
    if total_frames == 0 {
        return 0.0;
    }
    i as f64 / total_frames as f64
}

/// Sample `start -> end` with `ease`, one value per frame, last frame inclusive.
pub fn sample<T: Lerp>(start: &T, end: &T, duration: f64, ease: Ease, rate: f64) -> Vec<T> {
    let total_frames = frame_count(duration, rate) - 1;
    (0..=total_frames)
        .map(|i| {
            let scale = ease.apply_for_duration(sample_ratio(i, total_frames), duration);
            T::lerp(start, end, scale)
        })
        .collect()
}

/// [`sample`] over dynamically typed endpoints of the same interpolable kind.
pub fn sample_values(
    start: &AnimValue,
    end: &AnimValue,
    duration: f64,
    ease: Ease,
    rate: f64,
) -> MotionResult<Vec<AnimValue>> {
    let values = match (start, end) {
        (AnimValue::Scalar(a), AnimValue::Scalar(b)) => sample(a, b, duration, ease, rate)
            .into_iter()
            .map(AnimValue::Scalar)
            .collect(),
        (AnimValue::Point(a), AnimValue::Point(b)) => sample(a, b, duration, ease, rate)
            .into_iter()
            .map(AnimValue::Point)
            .collect(),
        (AnimValue::Size(a), AnimValue::Size(b)) => sample(a, b, duration, ease, rate)
            .into_iter()
            .map(AnimValue::Size)
            .collect(),
        (AnimValue::Color(a), AnimValue::Color(b)) => sample(a, b, duration, ease, rate)
            .into_iter()
            .map(AnimValue::Color)
            .collect(),
        (a, b) => {
            return Err(MotionError::validation(format!(
                "cannot interpolate {:?} -> {:?}",
                a.kind(),
                b.kind()
            )));
        }
    };
    Ok(values)
}

/// Turns descriptors into keyframe animations, advancing the target's snapshot as it goes.
#[derive(Clone, Debug)]
pub struct KeyframeGenerator {
    rate: f64,
}

impl KeyframeGenerator {
    /// Create a generator sampling at `settings.samples_per_second`.
    pub fn new(settings: &KeyframeSettings) -> MotionResult<Self> {
        settings.validate()?;
        Ok(Self {
            rate: settings.rate(),
        })
    }

    /// Samples per second of animation.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Keyframe animation for a single non-`Frame` descriptor.
    ///
    /// With `with_delay` the descriptor's delay becomes the begin time; otherwise the
    /// animation starts at 0 relative to its parent.
    pub fn keyframe_animation(
        &self,
        desc: &AnimationDescriptor,
        snapshot: &mut LayerSnapshot,
        with_delay: bool,
    ) -> MotionResult<KeyframeAnimation> {
        desc.validate()?;
        if self.rate * desc.duration() > MAX_FRAMES as f64 {
            return Err(MotionError::validation(format!(
                "duration {}s needs more than {MAX_FRAMES} keyframes at {} samples/s",
                desc.duration(),
                self.rate
            )));
        }
        let resolved = desc.property().resolve()?;
        let (start, end) = resolved.endpoints(snapshot, desc.end_value())?;
        let values = sample_values(&start, &end, desc.duration(), desc.ease(), self.rate)?;

        tracing::trace!(
            key_path = resolved.key_path,
            frames = values.len(),
            ease = ?desc.ease(),
            "generated keyframes"
        );

        let begin_time = if with_delay { desc.delay() } else { 0.0 };
        Ok(KeyframeAnimation {
            key_path: resolved.key_path,
            values,
            ease: desc.ease(),
            timing: Timing::held(begin_time, desc.duration()),
        })
    }

    /// Animation for any supported descriptor.
    ///
    /// `Frame` becomes a group of an origin and a size animation. The size part is generated
    /// first so that the origin's target position is computed against the new size.
    pub fn animation(
        &self,
        desc: &AnimationDescriptor,
        snapshot: &mut LayerSnapshot,
        with_delay: bool,
    ) -> MotionResult<Animation> {
        if desc.property() != AnimatableProperty::Frame {
            return Ok(self.keyframe_animation(desc, snapshot, with_delay)?.into());
        }

        desc.validate()?;
        let (origin, size) = desc.frame_parts()?;
        let size = self.keyframe_animation(&size, snapshot, false)?;
        let origin = self.keyframe_animation(&origin, snapshot, false)?;

        let begin_time = if with_delay { desc.delay() } else { 0.0 };
        Ok(AnimationGroup {
            animations: vec![origin.into(), size.into()],
            timing: Timing::held(begin_time, desc.duration()),
        }
        .into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
