/// Backend seam.
pub mod backend;
/// Animator and playback lifecycle.
pub mod dispatcher;
