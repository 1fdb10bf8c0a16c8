//! Hero word rotation

use std::time::Duration;

use tracing::trace;

use crate::content::WordList;
use crate::timer::{Scheduler, TimerGuard};
use crate::CoreResult;

/// Default cadence of the hero word rotation
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(2500);

/// Wrap-around step over a list of fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
}

impl Rotation {
    /// `len` must be non-zero; [`WordList`] guarantees this.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "rotation over an empty list");
        Self { len: len.max(1) }
    }

    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.len
    }
}

/// Current position in the hero word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRotator {
    words: WordList,
    rotation: Rotation,
    index: usize,
}

impl WordRotator {
    pub fn new(words: WordList) -> Self {
        let rotation = Rotation::new(words.len());
        Self {
            words,
            rotation,
            index: 0,
        }
    }

    pub fn advance(&mut self) {
        self.index = self.rotation.next(self.index);
        trace!(index = self.index, word = self.current(), "rotated hero word");
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        self.words.get(self.index)
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }
}

/// Start the repeating rotation timer. The returned guard is the only way
/// to keep it running: cancel or drop it when the hosting view goes away.
pub fn start_rotation<S, F>(
    scheduler: &S,
    period: Duration,
    on_tick: F,
) -> CoreResult<TimerGuard<S::Handle>>
where
    S: Scheduler,
    F: Fn() + 'static,
{
    let handle = scheduler.set_interval(period, Box::new(on_tick))?;
    Ok(TimerGuard::new(handle, "word-rotation"))
}
