use crate::animation::{ease::Ease, value::AnimValue};

/// What an animation shows outside its active interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Nothing is held; the model value shows through.
    #[default]
    Removed,
    /// The last value is held after the animation ends.
    Forwards,
}

/// Timing attributes shared by keyframe animations and groups.
///
/// `begin_time` is relative to the enclosing group, or to the backend clock at the top level.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timing {
    /// Start offset in seconds.
    pub begin_time: f64,
    /// Active duration in seconds (one iteration, one direction).
    pub duration: f64,
    /// Number of iterations; `f64::INFINITY` repeats forever.
    pub repeat_count: f64,
    /// Play backwards after each forward iteration.
    pub autoreverses: bool,
    /// Fill behaviour outside the active interval.
    pub fill_mode: FillMode,
    /// Whether the backend detaches the animation once it finishes.
    pub removed_on_completion: bool,
}

impl Timing {
    /// Single forward iteration that holds its final value and stays attached.
    pub fn held(begin_time: f64, duration: f64) -> Self {
        Self {
            begin_time,
            duration,
            repeat_count: 1.0,
            autoreverses: false,
            fill_mode: FillMode::Forwards,
            removed_on_completion: false,
        }
    }

    /// `begin_time + duration`.
    pub fn end_time(&self) -> f64 {
        self.begin_time + self.duration
    }
}

/// Backend animation driven by an explicit value array.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct KeyframeAnimation {
    /// Backend key path.
    pub key_path: &'static str,
    /// Pre-sampled values, evenly spaced over `timing.duration`.
    pub values: Vec<AnimValue>,
    /// Easing the values were sampled with.
    pub ease: Ease,
    /// Timing attributes.
    pub timing: Timing,
}

/// Animations sharing one time base.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationGroup {
    /// Member animations; their `begin_time`s are relative to the group.
    pub animations: Vec<Animation>,
    /// Timing attributes.
    pub timing: Timing,
}

/// Node of a per-object timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Animation {
    /// A single keyframe animation.
    Keyframe(KeyframeAnimation),
    /// A group of animations.
    Group(AnimationGroup),
}

impl Animation {
    /// Timing attributes of this node.
    pub fn timing(&self) -> &Timing {
        match self {
            Self::Keyframe(k) => &k.timing,
            Self::Group(g) => &g.timing,
        }
    }

    /// Mutable timing attributes of this node.
    pub fn timing_mut(&mut self) -> &mut Timing {
        match self {
            Self::Keyframe(k) => &mut k.timing,
            Self::Group(g) => &mut g.timing,
        }
    }

    /// Member animations of a group; empty for keyframe nodes.
    pub fn children(&self) -> &[Animation] {
        match self {
            Self::Keyframe(_) => &[],
            Self::Group(g) => &g.animations,
        }
    }

    /// Every keyframe animation below this node, depth-first.
    pub fn keyframes(&self) -> Vec<&KeyframeAnimation> {
        let mut out = Vec::new();
        self.collect_keyframes(&mut out);
        out
    }

    fn collect_keyframes<'a>(&'a self, out: &mut Vec<&'a KeyframeAnimation>) {
        match self {
            Self::Keyframe(k) => out.push(k),
            Self::Group(g) => {
                for a in &g.animations {
                    a.collect_keyframes(out);
                }
            }
        }
    }
}

impl From<KeyframeAnimation> for Animation {
    fn from(k: KeyframeAnimation) -> Self {
        Self::Keyframe(k)
    }
}

impl From<AnimationGroup> for Animation {
    fn from(g: AnimationGroup) -> Self {
        Self::Group(g)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/timeline.rs"]
mod tests;
