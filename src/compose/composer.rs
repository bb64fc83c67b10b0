use std::collections::HashMap;

use crate::{
    animation::{descriptor::AnimationDescriptor, keyframes::KeyframeGenerator},
    compose::timeline::{Animation, AnimationGroup, FillMode, Timing},
    foundation::error::{MotionError, MotionResult},
    foundation::settings::{KeyframeSettings, PlaybackOptions},
    state::snapshot::LayerSnapshot,
    state::target::{TargetId, TargetRef},
};

// Group members are compared on `delay + duration` with this slack (seconds).
const SPAN_TOLERANCE: f64 = 1e-9;

/// One entry of a chain: a lone animation, or animations that start together.
#[derive(Clone, Debug, PartialEq)]
pub enum ChainStep {
    /// A single animation.
    Single(AnimationDescriptor),
    /// Animations on one or more targets sharing one begin time and one `delay + duration`.
    Simultaneous(Vec<AnimationDescriptor>),
}

impl ChainStep {
    /// Descriptors of this step.
    pub fn descriptors(&self) -> &[AnimationDescriptor] {
        match self {
            Self::Single(d) => std::slice::from_ref(d),
            Self::Simultaneous(v) => v,
        }
    }
}

impl From<AnimationDescriptor> for ChainStep {
    fn from(d: AnimationDescriptor) -> Self {
        Self::Single(d)
    }
}

impl From<Vec<AnimationDescriptor>> for ChainStep {
    fn from(v: Vec<AnimationDescriptor>) -> Self {
        Self::Simultaneous(v)
    }
}

/// Build a [`ChainStep::Simultaneous`].
pub fn simultaneous(descs: impl IntoIterator<Item = AnimationDescriptor>) -> ChainStep {
    ChainStep::Simultaneous(descs.into_iter().collect())
}

/// Values keyed by target, in first-touch order.
#[derive(Debug)]
struct ByTarget<T> {
    entries: Vec<(TargetRef, T)>,
    index: HashMap<TargetId, usize>,
}

impl<T> Default for ByTarget<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> ByTarget<T> {
    fn get_or_try_insert_with(
        &mut self,
        target: &TargetRef,
        init: impl FnOnce() -> MotionResult<T>,
    ) -> MotionResult<&mut T> {
        let idx = match self.index.get(&target.id()) {
            Some(&idx) => idx,
            None => {
                let value = init()?;
                self.entries.push((target.clone(), value));
                self.index.insert(target.id(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        Ok(&mut self.entries[idx].1)
    }

    fn get(&self, id: TargetId) -> Option<&T> {
        self.index.get(&id).map(|&idx| &self.entries[idx].1)
    }
}

/// The one live snapshot per target for the duration of a call.
#[derive(Debug, Default)]
pub struct SnapshotMap {
    inner: ByTarget<LayerSnapshot>,
}

impl SnapshotMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for `target`, reading the object on first access.
    pub fn get_or_read(&mut self, target: &TargetRef) -> MotionResult<&mut LayerSnapshot> {
        self.inner
            .get_or_try_insert_with(target, || target.read_snapshot())
    }

    /// Snapshot for `id`, if the target was touched.
    pub fn get(&self, id: TargetId) -> Option<&LayerSnapshot> {
        self.inner.get(id)
    }

    /// Number of targets touched.
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Return `true` when no target was touched.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }
}

/// Top-level animation for one target plus the state it ends in.
#[derive(Clone, Debug)]
pub struct TargetTimeline {
    /// Animated object.
    pub target: TargetRef,
    /// Top-level animation handed to the backend.
    pub animation: Animation,
    /// State to apply once playback completes.
    pub snapshot: LayerSnapshot,
}

/// Everything one `chain`/`animate` call produced.
#[derive(Clone, Debug)]
pub struct ComposedBatch {
    /// Per-target timelines in first-touch order.
    pub timelines: Vec<TargetTimeline>,
    /// Length of one forward pass, in seconds.
    pub total_duration: f64,
}

/// Assembles descriptors into per-target timelines.
#[derive(Clone, Debug)]
pub struct Composer {
    generator: KeyframeGenerator,
}

impl Composer {
    /// Create a composer sampling keyframes with `settings`.
    pub fn new(settings: &KeyframeSettings) -> MotionResult<Self> {
        Ok(Self {
            generator: KeyframeGenerator::new(settings)?,
        })
    }

    /// Lay `steps` out back-to-back.
    ///
    /// Each target's segments are wrapped in one group starting at `start_time` and lasting
    /// the whole chain; `options` apply to that group.
    pub fn chain(
        &self,
        steps: &[ChainStep],
        start_time: f64,
        options: PlaybackOptions,
    ) -> MotionResult<ComposedBatch> {
        options.validate()?;

        let mut snapshots = SnapshotMap::new();
        let mut segments: ByTarget<Vec<Animation>> = ByTarget::default();
        let mut total = 0.0;

        for step in steps {
            match step.descriptors() {
                [] => return Err(MotionError::validation("simultaneous step is empty")),
                [desc] => {
                    let snapshot = snapshots.get_or_read(desc.target())?;
                    let mut anim = self.generator.animation(desc, snapshot, true)?;
                    anim.timing_mut().begin_time += total;
                    total = anim.timing().end_time();
                    segments
                        .get_or_try_insert_with(desc.target(), || Ok(Vec::new()))?
                        .push(anim);
                }
                group => {
                    let span = check_group_spans(group)?;
                    let mut groups: ByTarget<AnimationGroup> = ByTarget::default();
                    for desc in group {
                        let snapshot = snapshots.get_or_read(desc.target())?;
                        let anim = self.generator.animation(desc, snapshot, false)?;
                        groups
                            .get_or_try_insert_with(desc.target(), || {
                                Ok(AnimationGroup {
                                    animations: Vec::new(),
                                    timing: Timing::held(total + desc.delay(), desc.duration()),
                                })
                            })?
                            .animations
                            .push(anim);
                    }
                    for (target, g) in groups.entries {
                        segments
                            .get_or_try_insert_with(&target, || Ok(Vec::new()))?
                            .push(g.into());
                    }
                    total += span;
                }
            }
        }

        let timelines = segments
            .entries
            .into_iter()
            .map(|(target, animations)| {
                let snapshot = final_snapshot(&snapshots, &target)?;
                let timing = Timing {
                    begin_time: start_time,
                    duration: total,
                    repeat_count: options.repeat_count,
                    autoreverses: options.reverses,
                    fill_mode: FillMode::Forwards,
                    removed_on_completion: false,
                };
                Ok(TargetTimeline {
                    target,
                    animation: AnimationGroup { animations, timing }.into(),
                    snapshot,
                })
            })
            .collect::<MotionResult<Vec<_>>>()?;

        tracing::debug!(
            steps = steps.len(),
            targets = timelines.len(),
            total_duration = total,
            "composed chain"
        );
        Ok(ComposedBatch {
            timelines,
            total_duration: total,
        })
    }

    /// A single animation starting `delay` seconds after `start_time`.
    pub fn animate(
        &self,
        desc: &AnimationDescriptor,
        start_time: f64,
        options: PlaybackOptions,
    ) -> MotionResult<ComposedBatch> {
        options.validate()?;

        let mut snapshot = desc.target().read_snapshot()?;
        let mut animation = self.generator.animation(desc, &mut snapshot, true)?;
        let timing = animation.timing_mut();
        timing.begin_time += start_time;
        timing.autoreverses = options.reverses;
        timing.repeat_count = options.repeat_count;

        tracing::debug!(
            property = ?desc.property(),
            duration = desc.duration(),
            "composed animation"
        );
        Ok(ComposedBatch {
            timelines: vec![TargetTimeline {
                target: desc.target().clone(),
                animation,
                snapshot,
            }],
            total_duration: desc.span(),
        })
    }
}

fn check_group_spans(group: &[AnimationDescriptor]) -> MotionResult<f64> {
    let Some(first) = group.first() else {
        return Err(MotionError::validation("simultaneous step is empty"));
    };
    let expected = first.span();
    if let Some(bad) = group
        .iter()
        .find(|d| (d.span() - expected).abs() > SPAN_TOLERANCE)
    {
        return Err(MotionError::GroupDurationMismatch {
            expected,
            found: bad.span(),
        });
    }
    Ok(expected)
}

fn final_snapshot(snapshots: &SnapshotMap, target: &TargetRef) -> MotionResult<LayerSnapshot> {
    snapshots
        .get(target.id())
        .cloned()
        .ok_or_else(|| MotionError::target(format!("no snapshot for target {:?}", target.id())))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
