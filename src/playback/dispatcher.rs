use std::{cell::Cell, rc::Rc};

use crate::{
    animation::descriptor::AnimationDescriptor,
    compose::composer::{ChainStep, ComposedBatch, Composer},
    foundation::error::MotionResult,
    foundation::settings::{KeyframeSettings, PlaybackOptions},
    playback::backend::{AnimationBackend, TargetAnimation, Transaction},
    state::snapshot::LayerSnapshot,
    state::target::TargetRef,
};

/// Lifecycle of one `chain`/`animate` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Composed, not yet accepted by the backend.
    Pending,
    /// Handed to the backend.
    Playing,
    /// The backend reported completion.
    Completed,
    /// Final state written to the objects and their animations removed.
    Finalized,
}

/// Observes the playback of one call.
#[derive(Clone, Debug)]
pub struct PlaybackHandle {
    state: Rc<Cell<PlaybackState>>,
    total_duration: f64,
}

impl PlaybackHandle {
    fn new(total_duration: f64) -> Self {
        Self {
            state: Rc::new(Cell::new(PlaybackState::Pending)),
            total_duration,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state.get()
    }

    /// Return `true` once the objects hold their final state.
    pub fn is_finished(&self) -> bool {
        self.state() == PlaybackState::Finalized
    }

    /// Length of one forward pass, in seconds.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }
}

/// Front door of the engine: composes calls and dispatches them to a backend.
#[derive(Debug)]
pub struct Animator<B: AnimationBackend> {
    backend: B,
    composer: Composer,
}

impl<B: AnimationBackend> Animator<B> {
    /// Animator sampling keyframes with the default settings.
    pub fn new(backend: B) -> MotionResult<Self> {
        Self::with_settings(backend, &KeyframeSettings::default())
    }

    /// Animator sampling keyframes with `settings`.
    pub fn with_settings(backend: B, settings: &KeyframeSettings) -> MotionResult<Self> {
        Ok(Self {
            backend,
            composer: Composer::new(settings)?,
        })
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Play `steps` one after another, starting now.
    ///
    /// `completion` runs once after the whole chain finished. Unless `options.reverses` is set,
    /// every touched object keeps the end values of its animations.
    #[tracing::instrument(skip(self, steps, completion), fields(steps = steps.len()))]
    pub fn chain(
        &mut self,
        steps: &[ChainStep],
        options: PlaybackOptions,
        completion: impl FnOnce() + 'static,
    ) -> MotionResult<PlaybackHandle> {
        let now = self.backend.current_time();
        let batch = self.composer.chain(steps, now, options)?;
        self.dispatch(batch, options, completion)
    }

    /// Play a single animation, starting `desc.delay()` seconds from now.
    #[tracing::instrument(skip(self, desc, completion), fields(property = ?desc.property()))]
    pub fn animate(
        &mut self,
        desc: &AnimationDescriptor,
        options: PlaybackOptions,
        completion: impl FnOnce() + 'static,
    ) -> MotionResult<PlaybackHandle> {
        let now = self.backend.current_time();
        let batch = self.composer.animate(desc, now, options)?;
        self.dispatch(batch, options, completion)
    }

    fn dispatch(
        &mut self,
        batch: ComposedBatch,
        options: PlaybackOptions,
        completion: impl FnOnce() + 'static,
    ) -> MotionResult<PlaybackHandle> {
        let handle = PlaybackHandle::new(batch.total_duration);

        let mut animations = Vec::with_capacity(batch.timelines.len());
        let mut finals = Vec::with_capacity(batch.timelines.len());
        for timeline in batch.timelines {
            animations.push(TargetAnimation {
                target: timeline.target.id(),
                animation: timeline.animation,
            });
            finals.push((timeline.target, timeline.snapshot));
        }

        let state = Rc::clone(&handle.state);
        let reverses = options.reverses;
        let transaction = Transaction::new(animations, move || {
            state.set(PlaybackState::Completed);
            finalize_targets(&finals, reverses);
            state.set(PlaybackState::Finalized);
            completion();
        });

        tracing::debug!(
            targets = transaction.animations().len(),
            total_duration = batch.total_duration,
            "submitting transaction"
        );
        self.backend.submit(transaction)?;

        // A backend may complete synchronously inside `submit`.
        if handle.state() == PlaybackState::Pending {
            handle.state.set(PlaybackState::Playing);
        }
        Ok(handle)
    }
}

fn finalize_targets(finals: &[(TargetRef, LayerSnapshot)], reverses: bool) {
    for (target, snapshot) in finals {
        let Some(shared) = target.upgrade() else {
            tracing::warn!(target_id = ?target.id(), "target dropped before playback completed");
            continue;
        };
        let Ok(mut object) = shared.try_borrow_mut() else {
            tracing::warn!(target_id = ?target.id(), "target borrowed during completion; skipped");
            continue;
        };
        if !reverses {
            object.apply_snapshot(snapshot);
        }
        object.remove_all_animations();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/dispatcher.rs"]
mod tests;
