//! Animation timings shared by the hero and the jargon list.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timer::MAX_TIMER_MS;
use crate::{CoreError, CoreResult};

/// CSS cubic-bezier control points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Easing(pub [f32; 4]);

impl Easing {
    pub const EASE_OUT_QUINT: Easing = Easing([0.23, 1.0, 0.32, 1.0]);
    pub const EASE_OUT_CUBIC: Easing = Easing([0.215, 0.61, 0.355, 1.0]);

    pub fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.0;
        format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }
}

/// Motion timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Exit and entrance of a rotating word (ms)
    pub word_transition_ms: u64,
    pub word_easing: Easing,
    /// Vertical travel of the rotating word, percent of its height
    pub word_travel_pct: u8,
    /// Crossfade between the jargon layers (ms)
    pub reveal_transition_ms: u64,
    /// Hero line entrance (ms)
    pub entrance_ms: u64,
    pub entrance_easing: Easing,
    /// Delay before the first hero line enters (ms)
    pub entrance_delay_ms: u64,
    /// Gap between consecutive hero lines (ms)
    pub entrance_stagger_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            word_transition_ms: 600,
            word_easing: Easing::EASE_OUT_QUINT,
            word_travel_pct: 60,
            reveal_transition_ms: 500,
            entrance_ms: 800,
            entrance_easing: Easing::EASE_OUT_CUBIC,
            entrance_delay_ms: 300,
            entrance_stagger_ms: 200,
        }
    }
}

impl MotionConfig {
    /// Every duration must fit a browser timer.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("word_transition_ms", self.word_transition_ms),
            ("reveal_transition_ms", self.reveal_transition_ms),
            ("entrance_ms", self.entrance_ms),
            ("entrance_delay_ms", self.entrance_delay_ms),
            ("entrance_stagger_ms", self.entrance_stagger_ms),
        ];
        for (name, value) in fields {
            if value > MAX_TIMER_MS {
                return Err(CoreError::Config(format!(
                    "motion.{} is {} ms, above {} ms",
                    name, value, MAX_TIMER_MS
                )));
            }
        }
        Ok(())
    }

    pub fn word_transition(&self) -> Duration {
        Duration::from_millis(self.word_transition_ms)
    }

    /// Delay before hero line `index` starts its entrance.
    pub fn stagger_delay(&self, index: usize) -> Duration {
        let offset = self.entrance_stagger_ms.saturating_mul(index as u64);
        Duration::from_millis(self.entrance_delay_ms.saturating_add(offset))
    }

    /// Inline style for a staggered hero line.
    pub fn entrance_style(&self, index: usize) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms; transition-timing-function: {};",
            self.entrance_ms,
            self.stagger_delay(index).as_millis(),
            self.entrance_easing.css()
        )
    }

    /// Inline style for the rotating word's keyframe animation.
    pub fn word_style(&self) -> String {
        format!(
            "animation-duration: {}ms; animation-timing-function: {}; --word-travel: {}%;",
            self.word_transition_ms,
            self.word_easing.css(),
            self.word_travel_pct
        )
    }
}
