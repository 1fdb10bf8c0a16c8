//! Rotating hero word
//!
//! [`HeroWord`] owns the rotation and exit timers for as long as the
//! component lives and reports only real changes of the shown word, so a
//! list that repeats a word never replays the animation.

use std::time::Duration;

use av_core::{HeroWord, MotionConfig, Phase, WordList};
use leptos::*;

use crate::timer::BrowserScheduler;

pub fn phase_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Entering => "hero-word-enter",
        Phase::Exiting => "hero-word-exit",
    }
}

#[component]
pub fn RotatingWord(words: WordList, interval: Duration, motion: MotionConfig) -> impl IntoView {
    let placeholder = words.longest().to_string();
    let (display, set_display) = create_signal((words.get(0).to_string(), Phase::Entering));

    let on_change = move |word: &str, phase: Phase| {
        set_display.try_set((word.to_string(), phase));
    };
    match HeroWord::mount(BrowserScheduler, words, interval, motion.word_transition(), on_change) {
        Ok(hero) => on_cleanup(move || hero.cancel()),
        Err(err) => tracing::error!(%err, "hero word rotation not started"),
    }

    let word_style = motion.word_style();
    let word = move || {
        let (text, phase) = display.get();
        view! {
            <span
                class=format!(
                    "absolute left-0 right-0 whitespace-nowrap text-center {}",
                    phase_class(phase)
                )
                style=word_style.clone()
            >
                {text}
            </span>
        }
    };

    view! {
        <div class="relative h-[1.2em] flex items-center justify-center overflow-visible">
            // Reserves the width of the longest word so the sentence stays put
            <span class="opacity-0 invisible whitespace-nowrap" aria-hidden="true">
                {placeholder}
            </span>
            {word}
        </div>
    }
}
