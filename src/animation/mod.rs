/// Animation requests.
pub mod descriptor;
/// Easing curves.
pub mod ease;
/// Keyframe sampling.
pub mod keyframes;
/// Property resolution.
pub mod property;
/// Typed animation values.
pub mod value;
