use crate::foundation::error::{MotionError, MotionResult};

/// Keyframe sampling configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeSettings {
    /// Nominal sampling rate, in samples per second of animation duration.
    #[serde(default = "default_samples_per_second")]
    pub samples_per_second: u32,
}

fn default_samples_per_second() -> u32 {
    60
}

impl Default for KeyframeSettings {
    fn default() -> Self {
        Self {
            samples_per_second: default_samples_per_second(),
        }
    }
}

impl KeyframeSettings {
    /// Validate the settings.
    pub fn validate(&self) -> MotionResult<()> {
        if self.samples_per_second == 0 {
            return Err(MotionError::validation(
                "KeyframeSettings samples_per_second must be > 0",
            ));
        }
        Ok(())
    }

    /// Sampling rate as `f64`.
    pub fn rate(&self) -> f64 {
        f64::from(self.samples_per_second)
    }
}

/// Options applied to a whole `chain`/`animate` timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaybackOptions {
    /// Play the timeline forwards then backwards; the object keeps its pre-call state.
    #[serde(default)]
    pub reverses: bool,
    /// How many times the timeline plays. `f64::INFINITY` repeats forever.
    #[serde(default = "default_repeat_count")]
    pub repeat_count: f64,
}

fn default_repeat_count() -> f64 {
    1.0
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            reverses: false,
            repeat_count: default_repeat_count(),
        }
    }
}

impl PlaybackOptions {
    /// Set whether the timeline autoreverses.
    pub fn reverses(mut self, reverses: bool) -> Self {
        self.reverses = reverses;
        self
    }

    /// Set the repeat count.
    pub fn repeat_count(mut self, repeat_count: f64) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Validate the options.
    pub fn validate(&self) -> MotionResult<()> {
        if self.repeat_count.is_nan() || self.repeat_count < 0.0 {
            return Err(MotionError::validation(
                "PlaybackOptions repeat_count must be >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
