use crate::animation::{property::AnimatableProperty, value::ValueKind};

/// Convenience result type used across motionkit.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for animation construction.
///
/// Every variant is raised while a call is being composed, before anything is handed to the
/// backend, so a failing call never leaves a half-submitted animation behind.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// The property has no backend key path or interpolation rule.
    #[error("unsupported property: {0:?}")]
    UnsupportedProperty(AnimatableProperty),

    /// Members of one simultaneous group disagree on `delay + duration`.
    #[error("group duration mismatch: expected {expected}s, found {found}s")]
    GroupDurationMismatch {
        /// `delay + duration` of the first group member.
        expected: f64,
        /// `delay + duration` of the offending member.
        found: f64,
    },

    /// The end value does not have the kind the property expects.
    #[error("type mismatch for {property:?}: expected {expected:?}, found {found:?}")]
    TypeMismatch {
        /// Property being animated or accessed.
        property: AnimatableProperty,
        /// Kind the property expects.
        expected: ValueKind,
        /// Kind that was supplied.
        found: ValueKind,
    },

    /// `Frame` was sampled directly instead of through its origin/size parts.
    #[error("keyframes for `Frame` are unavailable; animate `Origin` and `Size` separately")]
    FrameNotSampleable,

    /// Invalid timing, options or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// The animated object could not be read.
    #[error("target error: {0}")]
    Target(String),

    /// Catch-all for errors from collaborators.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Target`].
    pub fn target(msg: impl Into<String>) -> Self {
        Self::Target(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
