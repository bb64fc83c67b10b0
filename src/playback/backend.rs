use std::fmt;

use crate::{
    compose::timeline::Animation, foundation::error::MotionResult, state::target::TargetId,
};

/// Callback run once when every animation of a transaction has finished.
pub type Completion = Box<dyn FnOnce()>;

/// Top-level animation attached to one object.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetAnimation {
    /// Object the animation is attached to.
    pub target: TargetId,
    /// Top-level animation.
    pub animation: Animation,
}

impl TargetAnimation {
    /// Time at which this animation stops changing, repeats and reversal included.
    pub fn end_time(&self) -> f64 {
        let t = self.animation.timing();
        let passes = if t.autoreverses { 2.0 } else { 1.0 };
        t.begin_time + t.duration * t.repeat_count * passes
    }
}

/// Animations committed together, with the callback to run when all of them finish.
pub struct Transaction {
    animations: Vec<TargetAnimation>,
    completion: Completion,
}

impl Transaction {
    /// Bundle `animations` with `completion`.
    pub fn new(animations: Vec<TargetAnimation>, completion: impl FnOnce() + 'static) -> Self {
        Self {
            animations,
            completion: Box::new(completion),
        }
    }

    /// Animations in submission order.
    pub fn animations(&self) -> &[TargetAnimation] {
        &self.animations
    }

    /// Latest [`TargetAnimation::end_time`]; `0` for an empty transaction.
    pub fn end_time(&self) -> f64 {
        self.animations
            .iter()
            .map(TargetAnimation::end_time)
            .fold(0.0, f64::max)
    }

    /// Report that every animation finished. Consumes the transaction, so the callback runs
    /// exactly once.
    pub fn complete(self) {
        (self.completion)();
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("animations", &self.animations)
            .finish_non_exhaustive()
    }
}

/// Host animation system the engine hands timelines to.
///
/// The backend owns playback: it interpolates the keyframe values, and calls
/// [`Transaction::complete`] once all animations of a transaction have finished.
pub trait AnimationBackend {
    /// Current time of the backend clock, in seconds.
    fn current_time(&self) -> f64;

    /// Start playing `transaction`.
    fn submit(&mut self, transaction: Transaction) -> MotionResult<()>;
}

/// Backend that records transactions and finishes them on demand.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    clock: f64,
    /// Submitted transactions that have not completed yet.
    pub pending: Vec<Transaction>,
    completed: usize,
}

impl RecordingBackend {
    /// Backend with its clock at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend with its clock at `time`.
    pub fn at(time: f64) -> Self {
        Self {
            clock: time,
            ..Self::default()
        }
    }

    /// Move the clock forward by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.clock += dt;
    }

    /// Number of transactions completed so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Complete every pending transaction in submission order.
    ///
    /// The clock moves to the latest finite end time. Returns how many transactions completed.
    pub fn finish_all(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let n = pending.len();
        for tx in pending {
            let end = tx.end_time();
            if end.is_finite() {
                self.clock = self.clock.max(end);
            }
            tx.complete();
        }
        self.completed += n;
        n
    }
}

impl AnimationBackend for RecordingBackend {
    fn current_time(&self) -> f64 {
        self.clock
    }

    fn submit(&mut self, transaction: Transaction) -> MotionResult<()> {
        self.pending.push(transaction);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/backend.rs"]
mod tests;
