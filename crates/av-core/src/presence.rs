//! Keyed replacement for the rotating hero word.
//!
//! Only one key is ever on screen. When a different key is requested the
//! shown one plays its exit first; the caller reports the end of the exit
//! with [`Presence::finish_exit`] and the queued key then enters. Keys are
//! compared by value, so requesting the key already on screen is a no-op.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStep {
    /// Requested key is already on screen
    Unchanged,
    /// The shown key started exiting; schedule `finish_exit`
    ExitStarted,
    /// An exit is already running; the requested key will enter after it
    Queued,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence<K> {
    shown: K,
    phase: Phase,
    queued: Option<K>,
}

impl<K: Clone + PartialEq> Presence<K> {
    pub fn new(key: K) -> Self {
        Self {
            shown: key,
            phase: Phase::Entering,
            queued: None,
        }
    }

    pub fn shown(&self) -> &K {
        &self.shown
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn queued(&self) -> Option<&K> {
        self.queued.as_ref()
    }

    pub fn request(&mut self, key: K) -> PresenceStep {
        match self.phase {
            Phase::Exiting => {
                self.queued = Some(key);
                PresenceStep::Queued
            }
            Phase::Entering if key == self.shown => PresenceStep::Unchanged,
            Phase::Entering => {
                self.phase = Phase::Exiting;
                self.queued = Some(key);
                PresenceStep::ExitStarted
            }
        }
    }

    pub fn finish_exit(&mut self) -> bool {
        match (self.phase, self.queued.take()) {
            (Phase::Exiting, Some(next)) => {
                self.shown = next;
                self.phase = Phase::Entering;
                true
            }
            (_, queued) => {
                self.queued = queued;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_is_unchanged() {
        let mut presence = Presence::new("Growth");
        assert_eq!(presence.request("Growth"), PresenceStep::Unchanged);
        assert_eq!(presence.phase(), Phase::Entering);
    }

    #[test]
    fn test_equal_text_is_unchanged() {
        // Same word reached through a different list position
        let mut presence = Presence::new(String::from("Same"));
        assert_eq!(presence.request(String::from("Same")), PresenceStep::Unchanged);
        assert_eq!(presence.queued(), None);
    }

    #[test]
    fn test_waits_for_exit_before_entering() {
        let mut presence = Presence::new("Growth");
        assert_eq!(presence.request("Design"), PresenceStep::ExitStarted);
        assert_eq!(*presence.shown(), "Growth");
        assert_eq!(presence.phase(), Phase::Exiting);

        assert!(presence.finish_exit());
        assert_eq!(*presence.shown(), "Design");
        assert_eq!(presence.phase(), Phase::Entering);
        assert_eq!(presence.queued(), None);
    }

    #[test]
    fn test_request_during_exit_replaces_queue() {
        let mut presence = Presence::new("Growth");
        presence.request("Design");
        assert_eq!(presence.request("Scaling"), PresenceStep::Queued);
        assert!(presence.finish_exit());
        assert_eq!(*presence.shown(), "Scaling");
    }

    #[test]
    fn test_finish_exit_without_exit_is_noop() {
        let mut presence = Presence::new("Starting");
        assert!(!presence.finish_exit());
        assert_eq!(*presence.shown(), "Starting");
        assert_eq!(presence.phase(), Phase::Entering);
    }

    #[test]
    fn test_returning_to_shown_key_still_replays() {
        let mut presence = Presence::new("Growth");
        presence.request("Design");
        presence.request("Growth");
        assert!(presence.finish_exit());
        assert_eq!(*presence.shown(), "Growth");
        assert_eq!(presence.phase(), Phase::Entering);
    }
}
