/// Chain and single-animation composition.
pub mod composer;
/// Backend-facing timeline model.
pub mod timeline;
