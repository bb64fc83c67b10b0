//! motionkit is a declarative keyframe animation engine.
//!
//! Callers describe "animate property P of object O to value V over D seconds with easing F".
//! The engine turns those descriptions into pre-sampled keyframe values and timing metadata and
//! hands them to an [`AnimationBackend`] for playback:
//!
//! - Build [`AnimationDescriptor`]s against [`TargetRef`]s
//! - Play one with [`Animator::animate`], or several in sequence with [`Animator::chain`]
//! - Observe the call through its [`PlaybackHandle`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing, values, property resolution and keyframe sampling.
pub mod animation;
/// Timeline model and chain/animate composition.
pub mod compose;
mod foundation;
/// Backend seam and playback dispatch.
pub mod playback;
/// Per-object state and the object seam.
pub mod state;

pub use crate::foundation::core::{BezPath, Color, Point, Rect, Size, Transform3D, Vec2};
pub use crate::foundation::error::{MotionError, MotionResult};
pub use crate::foundation::settings::{KeyframeSettings, PlaybackOptions};

pub use crate::animation::descriptor::AnimationDescriptor;
pub use crate::animation::ease::Ease;
pub use crate::animation::property::AnimatableProperty;
pub use crate::animation::value::{AnimValue, Lerp, ValueKind};
pub use crate::compose::composer::{ChainStep, ComposedBatch, Composer, simultaneous};
pub use crate::compose::timeline::{Animation, AnimationGroup, FillMode, KeyframeAnimation, Timing};
pub use crate::playback::backend::{
    AnimationBackend, Completion, RecordingBackend, TargetAnimation, Transaction,
};
pub use crate::playback::dispatcher::{Animator, PlaybackHandle, PlaybackState};
pub use crate::state::snapshot::LayerSnapshot;
pub use crate::state::target::{AnimationTarget, TargetId, TargetRef};
