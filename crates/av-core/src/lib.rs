//! Awkward Ventures Site Core
//!
//! Target-independent state for the landing page: the static content,
//! site configuration, the hero word rotator, per-entry reveal flags, and
//! the timer abstraction that ties repeating work to a view's lifetime.

pub mod config;
pub mod content;
pub mod hero;
pub mod motion;
pub mod presence;
pub mod reveal;
pub mod rotator;
pub mod timer;

#[cfg(test)]
mod proptests;

use thiserror::Error;

pub use config::SiteConfig;
pub use content::{JargonEntry, Service, SiteContent, WordList};
pub use hero::HeroWord;
pub use motion::MotionConfig;
pub use presence::{Phase, Presence, PresenceStep};
pub use reveal::{LayerPose, RevealBoard, RevealEvent, RevealState};
pub use rotator::{start_rotation, Rotation, WordRotator};
pub use timer::{check_period, ManualClock, ManualHandle, Scheduler, TimerGuard, TimerHandle, MAX_TIMER_MS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Content error: word list must contain at least one word")]
    EmptyWordList,

    #[error("Reveal error: unknown jargon entry {0}")]
    UnknownEntry(usize),

    #[error("Timer error: period must be between 1 and {} ms", MAX_TIMER_MS)]
    InvalidPeriod,

    #[error("Timer error: {0}")]
    Timer(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Footer line shown under the call-to-action.
pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {} {} — NO FLUFF.", year, brand.to_uppercase())
}
