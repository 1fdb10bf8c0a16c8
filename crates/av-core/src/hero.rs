//! Rotating hero word driver
//!
//! Ties the rotation interval, keyed presence and the exit timeout together
//! for one mounted hero. The listener hears about a word only when what is
//! on screen changes: the shown word starting its exit, or the next word
//! entering. A rotation that lands on the same text is silent.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::warn;

use crate::content::WordList;
use crate::presence::{Phase, Presence, PresenceStep};
use crate::rotator::{start_rotation, WordRotator};
use crate::timer::{Scheduler, TimerGuard, TimerHandle};
use crate::CoreResult;

type Listener = Rc<dyn Fn(&str, Phase)>;

struct HeroState<H: TimerHandle> {
    rotator: WordRotator,
    presence: Presence<String>,
    exit_timer: Option<TimerGuard<H>>,
}

/// A mounted hero word. Dropping or cancelling it stops every timer it owns.
pub struct HeroWord<H: TimerHandle> {
    rotation: TimerGuard<H>,
    state: Rc<RefCell<HeroState<H>>>,
}

impl<H: TimerHandle + 'static> HeroWord<H> {
    pub fn mount<S, F>(
        scheduler: S,
        words: WordList,
        period: Duration,
        exit_after: Duration,
        on_change: F,
    ) -> CoreResult<Self>
    where
        S: Scheduler<Handle = H> + Clone + 'static,
        F: Fn(&str, Phase) + 'static,
    {
        let first = words.get(0).to_string();
        let state = Rc::new(RefCell::new(HeroState {
            rotator: WordRotator::new(words),
            presence: Presence::new(first),
            exit_timer: None,
        }));

        let listener: Listener = Rc::new(on_change);
        let weak = Rc::downgrade(&state);
        let ticker = scheduler.clone();
        let rotation = start_rotation(&scheduler, period, move || {
            if let Some(state) = weak.upgrade() {
                tick(&ticker, &state, exit_after, &listener);
            }
        })?;

        Ok(Self { rotation, state })
    }

    /// Word on screen and its animation phase.
    pub fn shown(&self) -> (String, Phase) {
        let state = self.state.borrow();
        (state.presence.shown().clone(), state.presence.phase())
    }

    pub fn index(&self) -> usize {
        self.state.borrow().rotator.index()
    }

    pub fn cancel(self) {
        let HeroWord { rotation, state } = self;
        rotation.cancel();
        let pending_exit = state.borrow_mut().exit_timer.take();
        if let Some(exit) = pending_exit {
            exit.cancel();
        }
    }
}

fn tick<S>(
    scheduler: &S,
    state: &Rc<RefCell<HeroState<S::Handle>>>,
    exit_after: Duration,
    listener: &Listener,
) where
    S: Scheduler,
{
    let (step, leaving) = {
        let mut hero = state.borrow_mut();
        hero.rotator.advance();
        let next = hero.rotator.current().to_string();
        let step = hero.presence.request(next);
        (step, hero.presence.shown().clone())
    };
    if step != PresenceStep::ExitStarted {
        return;
    }
    listener(&leaving, Phase::Exiting);

    let weak = Rc::downgrade(state);
    let notify = Rc::clone(listener);
    let fire = move || {
        if let Some(state) = weak.upgrade() {
            complete_exit(&state, &notify);
        }
    };
    match scheduler.set_timeout(exit_after, Box::new(fire)) {
        Ok(handle) => {
            let previous = state
                .borrow_mut()
                .exit_timer
                .replace(TimerGuard::new(handle, "word-exit"));
            drop(previous);
        }
        Err(err) => {
            warn!(%err, "word exit timer failed, swapping immediately");
            complete_exit(state, listener);
        }
    }
}

fn complete_exit<H: TimerHandle>(state: &Rc<RefCell<HeroState<H>>>, listener: &Listener) {
    let entered = {
        let mut hero = state.borrow_mut();
        if hero.presence.finish_exit() {
            Some(hero.presence.shown().clone())
        } else {
            None
        }
    };
    if let Some(word) = entered {
        listener(&word, Phase::Entering);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ManualClock, ManualHandle};

    const PERIOD: Duration = Duration::from_millis(2500);
    const EXIT: Duration = Duration::from_millis(600);

    type Events = Rc<RefCell<Vec<(String, Phase)>>>;

    fn mount(
        clock: &ManualClock,
        words: WordList,
        exit_after: Duration,
    ) -> (HeroWord<ManualHandle>, Events) {
        let events: Events = Rc::default();
        let log = Rc::clone(&events);
        let record = move |word: &str, phase: Phase| log.borrow_mut().push((word.to_string(), phase));
        let hero = HeroWord::mount(clock.clone(), words, PERIOD, exit_after, record).unwrap();
        (hero, events)
    }

    fn event(word: &str, phase: Phase) -> (String, Phase) {
        (word.to_string(), phase)
    }

    #[test]
    fn test_exit_then_enter() {
        let clock = ManualClock::new();
        let (hero, events) = mount(&clock, WordList::default(), EXIT);
        assert_eq!(hero.shown(), event("Growth", Phase::Entering));

        clock.advance(PERIOD);
        assert_eq!(*events.borrow(), vec![event("Growth", Phase::Exiting)]);
        assert_eq!(hero.shown(), event("Growth", Phase::Exiting));

        clock.advance(EXIT);
        assert_eq!(
            *events.borrow(),
            vec![event("Growth", Phase::Exiting), event("Design", Phase::Entering)]
        );
        assert_eq!(hero.shown(), event("Design", Phase::Entering));
    }

    #[test]
    fn test_full_cycle_returns_to_first_word() {
        let clock = ManualClock::new();
        let (hero, _events) = mount(&clock, WordList::default(), EXIT);

        clock.advance(PERIOD * 4 + EXIT);
        assert_eq!(hero.index(), 0);
        assert_eq!(hero.shown(), event("Growth", Phase::Entering));

        clock.advance(PERIOD);
        clock.advance(EXIT);
        assert_eq!(hero.shown(), event("Design", Phase::Entering));
    }

    #[test]
    fn test_single_word_never_replays() {
        let clock = ManualClock::new();
        let (hero, events) = mount(&clock, WordList::new(["Only"]).unwrap(), EXIT);

        clock.advance(PERIOD * 10);
        assert!(events.borrow().is_empty());
        assert_eq!(hero.shown(), event("Only", Phase::Entering));
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_repeated_word_never_replays() {
        let clock = ManualClock::new();
        let (hero, events) = mount(&clock, WordList::new(["Same", "Same"]).unwrap(), EXIT);

        clock.advance(PERIOD * 7);
        assert_eq!(hero.index(), 1);
        assert!(events.borrow().is_empty());
        assert_eq!(hero.shown(), event("Same", Phase::Entering));
    }

    #[test]
    fn test_adjacent_duplicates_skip_only_the_repeat() {
        let clock = ManualClock::new();
        let words = WordList::new(["Growth", "Growth", "Design"]).unwrap();
        let (hero, events) = mount(&clock, words, EXIT);

        clock.advance(PERIOD + EXIT);
        assert!(events.borrow().is_empty());

        clock.advance(PERIOD);
        clock.advance(EXIT);
        assert_eq!(hero.shown(), event("Design", Phase::Entering));
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_slow_exit_queues_latest_word() {
        let clock = ManualClock::new();
        let exit = Duration::from_millis(3000);
        let (hero, events) = mount(&clock, WordList::default(), exit);

        clock.advance(PERIOD * 2);
        assert_eq!(hero.shown(), event("Growth", Phase::Exiting));

        clock.advance(Duration::from_millis(500));
        assert_eq!(hero.shown(), event("Scaling", Phase::Entering));
        assert_eq!(
            *events.borrow(),
            vec![event("Growth", Phase::Exiting), event("Scaling", Phase::Entering)]
        );
    }

    #[test]
    fn test_cancel_mid_exit_stops_everything() {
        let clock = ManualClock::new();
        let (hero, events) = mount(&clock, WordList::default(), EXIT);

        clock.advance(PERIOD);
        assert_eq!(clock.pending(), 2);
        hero.cancel();
        assert_eq!(clock.pending(), 0);

        clock.advance(PERIOD * 5);
        assert_eq!(*events.borrow(), vec![event("Growth", Phase::Exiting)]);
    }

    #[test]
    fn test_drop_releases_timers() {
        let clock = ManualClock::new();
        let (hero, events) = mount(&clock, WordList::default(), EXIT);
        clock.advance(PERIOD);
        drop(hero);

        assert_eq!(clock.pending(), 0);
        clock.advance(PERIOD * 3);
        assert_eq!(events.borrow().len(), 1);
    }
}
