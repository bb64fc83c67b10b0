/// Layer state snapshot.
pub mod snapshot;
/// Animated object seam.
pub mod target;
