use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    foundation::error::{MotionError, MotionResult},
    state::snapshot::LayerSnapshot,
};

/// An object whose visible attributes can be animated.
///
/// The engine reads the current attributes once per call, and writes the final attributes back
/// when playback of that call completes.
pub trait AnimationTarget {
    /// Read the current attributes.
    fn snapshot(&self) -> LayerSnapshot;

    /// Write final attributes after a non-reversing playback.
    fn apply_snapshot(&mut self, snapshot: &LayerSnapshot);

    /// Drop any transient animation state attached to this object.
    fn remove_all_animations(&mut self) {}
}

/// Identity of an animated object, stable for as long as the object is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TargetId(pub usize);

/// Non-owning handle to an animated object.
///
/// Descriptors hold `TargetRef`s, so the engine never extends an object's lifetime.
#[derive(Clone)]
pub struct TargetRef {
    id: TargetId,
    target: Weak<RefCell<dyn AnimationTarget>>,
}

impl TargetRef {
    /// Create a handle to `target`.
    pub fn new<T: AnimationTarget + 'static>(target: &Rc<RefCell<T>>) -> Self {
        let id = TargetId(Rc::as_ptr(target) as *const () as usize);
        let shared: Rc<RefCell<dyn AnimationTarget>> = target.clone();
        Self {
            id,
            target: Rc::downgrade(&shared),
        }
    }

    /// Identity of the referenced object.
    pub fn id(&self) -> TargetId {
        self.id
    }

    /// Return `true` while the referenced object is alive.
    pub fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// Upgrade to a strong handle, if the object is still alive.
    pub fn upgrade(&self) -> Option<Rc<RefCell<dyn AnimationTarget>>> {
        self.target.upgrade()
    }

    /// Read the object's current attributes.
    pub fn read_snapshot(&self) -> MotionResult<LayerSnapshot> {
        let target = self
            .upgrade()
            .ok_or_else(|| MotionError::target(format!("target {:?} was dropped", self.id)))?;
        let guard = target.try_borrow().map_err(|_| {
            MotionError::target(format!("target {:?} is mutably borrowed", self.id))
        })?;
        Ok(guard.snapshot())
    }
}

impl fmt::Debug for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRef")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl PartialEq for TargetRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TargetRef {}

#[cfg(test)]
#[path = "../../tests/unit/state/target.rs"]
mod tests;
