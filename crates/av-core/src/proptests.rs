//! Property-based tests for rotation, the hero word and reveal flags.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;

use crate::content::WordList;
use crate::hero::HeroWord;
use crate::presence::{Phase, Presence};
use crate::reveal::{RevealBoard, RevealEvent, RevealState};
use crate::rotator::{start_rotation, WordRotator};
use crate::timer::ManualClock;

fn word_list(len: usize) -> WordList {
    WordList::new((0..len).map(|i| format!("word-{i}"))).unwrap()
}

fn event() -> impl Strategy<Value = RevealEvent> {
    prop_oneof![
        Just(RevealEvent::PointerEnter),
        Just(RevealEvent::PointerLeave),
        Just(RevealEvent::Click),
    ]
}

fn state() -> impl Strategy<Value = RevealState> {
    prop_oneof![
        Just(RevealState::CorporateShown),
        Just(RevealState::RealityShown),
    ]
}

proptest! {
    #[test]
    fn test_index_after_n_firings(len in 1usize..12, firings in 0usize..200) {
        let mut rotator = WordRotator::new(word_list(len));
        for _ in 0..firings {
            rotator.advance();
            prop_assert!(rotator.index() < len);
        }
        prop_assert_eq!(rotator.index(), firings % len);
    }

    #[test]
    fn test_timer_firings_match_elapsed(len in 1usize..8, period_ms in 1u64..5_000, ticks in 0u32..40) {
        let clock = ManualClock::new();
        let rotator = Rc::new(RefCell::new(WordRotator::new(word_list(len))));
        let ticking = Rc::clone(&rotator);
        let _guard = start_rotation(&clock, Duration::from_millis(period_ms), move || {
            ticking.borrow_mut().advance()
        })
        .unwrap();

        clock.advance(Duration::from_millis(period_ms) * ticks);
        prop_assert_eq!(rotator.borrow().index(), ticks as usize % len);
    }

    #[test]
    fn test_no_mutation_after_teardown(len in 1usize..8, before in 0u32..10, after in 1u32..10) {
        let clock = ManualClock::new();
        let period = Duration::from_millis(2500);
        let rotator = Rc::new(RefCell::new(WordRotator::new(word_list(len))));
        let ticking = Rc::clone(&rotator);
        let guard = start_rotation(&clock, period, move || ticking.borrow_mut().advance()).unwrap();

        clock.advance(period * before);
        let frozen = rotator.borrow().index();
        drop(guard);
        clock.advance(period * after);
        prop_assert_eq!(rotator.borrow().index(), frozen);
    }

    #[test]
    fn test_enter_always_reveals(start in state()) {
        prop_assert_eq!(start.apply(RevealEvent::PointerEnter), RevealState::RealityShown);
    }

    #[test]
    fn test_leave_always_hides(start in state()) {
        prop_assert_eq!(start.apply(RevealEvent::PointerLeave), RevealState::CorporateShown);
    }

    #[test]
    fn test_even_clicks_restore(start in state(), pairs in 0usize..20) {
        let mut current = start;
        for _ in 0..pairs * 2 {
            current = current.apply(RevealEvent::Click);
        }
        prop_assert_eq!(current, start);
    }

    #[test]
    fn test_board_matches_independent_flags(
        events in prop::collection::vec((0usize..5, event()), 0..60)
    ) {
        let mut board = RevealBoard::new(5);
        let mut expected = [RevealState::default(); 5];
        for (id, ev) in events {
            board.apply(id, ev).unwrap();
            expected[id] = expected[id].apply(ev);
        }
        for (id, want) in expected.iter().enumerate() {
            prop_assert_eq!(board.state(id), Some(*want));
        }
    }

    #[test]
    fn test_presence_never_skips_exit(keys in prop::collection::vec(0usize..4, 1..30)) {
        let mut presence = Presence::new(0);
        for key in keys {
            let shown_before = *presence.shown();
            presence.request(key);
            prop_assert_eq!(*presence.shown(), shown_before);
            if presence.phase() == Phase::Exiting {
                presence.finish_exit();
                prop_assert_eq!(*presence.shown(), key);
                prop_assert_eq!(presence.phase(), Phase::Entering);
            }
        }
    }

    #[test]
    fn test_hero_notifies_only_on_text_change(
        words in prop::collection::vec(prop::sample::select(vec!["Same", "Other"]), 1..6),
        ticks in 1u32..20,
    ) {
        let clock = ManualClock::new();
        let period = Duration::from_millis(2500);
        let exit = Duration::from_millis(600);
        let seen: Rc<RefCell<Vec<(String, Phase)>>> = Rc::default();
        let log = Rc::clone(&seen);
        let record = move |w: &str, p: Phase| log.borrow_mut().push((w.to_string(), p));
        let words = WordList::new(words).unwrap();
        let _hero = HeroWord::mount(clock.clone(), words, period, exit, record).unwrap();

        clock.advance(period * ticks);
        for pair in seen.borrow().windows(2) {
            prop_assert_ne!(&pair[0], &pair[1]);
            if pair[1].1 == Phase::Entering {
                prop_assert_ne!(&pair[0].0, &pair[1].0);
            }
        }
    }
}
