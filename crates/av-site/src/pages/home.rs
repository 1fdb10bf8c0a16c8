//! Home page

use std::time::Duration;

use av_core::{copyright_line, JargonEntry, MotionConfig, RevealBoard, Service, SiteConfig, WordList};
use chrono::Datelike;
use leptos::*;

use crate::components::*;

/// Year for the footer, in the visitor's own time zone.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Hero line classes before and after the entrance.
pub fn entrance_class(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-5"
    }
}

#[component]
pub fn HomePage(config: SiteConfig) -> impl IntoView {
    let interval = config.rotation_interval();
    let mailto = config.mailto();
    let footer = copyright_line(current_year(), &config.brand);
    let reveal_ms = config.motion.reveal_transition_ms;
    let SiteConfig {
        motion, content, ..
    } = config;

    view! {
        <div>
            <HeroSection words=content.words interval=interval motion=motion/>
            <RealitySection truths=content.truths reveal_ms=reveal_ms/>
            <PhilosophySection/>
            <FocusSection services=content.services/>
            <CtaSection mailto=mailto footer=footer/>
        </div>
    }
}

#[component]
fn HeroSection(words: WordList, interval: Duration, motion: MotionConfig) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    // Flip after the first paint so the entrance transitions actually run
    request_animation_frame(move || {
        set_visible.try_set(true);
    });

    let line_class = move |base: &'static str| {
        move || format!("{} transition-all {}", base, entrance_class(visible.get()))
    };
    let styles: Vec<String> = (0..3).map(|i| motion.entrance_style(i)).collect();

    view! {
        <Section class="items-center text-center">
            <div class="max-w-4xl">
                <div
                    class=line_class("text-5xl md:text-8xl font-bold tracking-tight leading-[0.9] mb-8 flex flex-col md:flex-row items-center justify-center md:gap-x-4")
                    style=styles[0].clone()
                >
                    <RotatingWord words=words interval=interval motion=motion/>
                    <span class="whitespace-nowrap">
                        "is " <span class="text-[#A2D149] italic">"awkward."</span>
                    </span>
                </div>
                <p class=line_class("text-xl md:text-3xl font-light mb-4") style=styles[1].clone()>
                    "Success is rarely linear."
                </p>
                <p class=line_class("text-xl md:text-3xl font-light opacity-60") style=styles[2].clone()>
                    "We’re here for the messy parts."
                </p>
            </div>
        </Section>
    }
}

#[component]
fn RealitySection(truths: Vec<JargonEntry>, reveal_ms: u64) -> impl IntoView {
    let (board, set_board) = create_signal(RevealBoard::new(truths.len()));

    view! {
        <Section class="bg-white">
            <div class="grid grid-cols-1 md:grid-cols-12 gap-12 items-start">
                <div class="md:col-span-4 sticky top-24">
                    <h2 class="text-sm font-mono uppercase tracking-widest text-[#A2D149] mb-4">
                        "01 // The Reality"
                    </h2>
                    <p class="text-2xl font-medium max-w-xs">
                        "We trade in honesty. Hover to reveal the truth behind the jargon."
                    </p>
                </div>
                <div class="md:col-span-8 md:col-start-6">
                    {truths.into_iter().enumerate().map(|(index, entry)| view! {
                        <TruthHover
                            index=index
                            entry=entry
                            board=board
                            set_board=set_board
                            reveal_ms=reveal_ms
                        />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn PhilosophySection() -> impl IntoView {
    view! {
        <Section class="bg-[#111111] text-white">
            <div class="grid grid-cols-1 md:grid-cols-12 gap-8">
                <div class="md:col-span-7">
                    <h2 class="text-sm font-mono uppercase tracking-widest text-[#A2D149] mb-8">
                        "02 // Philosophy"
                    </h2>
                    <p class="text-3xl md:text-5xl font-bold leading-tight mb-12">
                        "Most consultancies sell you a polished version of the future. "
                        <br/>
                        <span class="opacity-40">"We prefer the raw version of the present."</span>
                    </p>
                </div>
                <div class="md:col-span-5 md:mt-40 space-y-8 text-lg font-light leading-relaxed opacity-80">
                    <p>
                        "Awkward Ventures was built on the belief that the most valuable insights "
                        "live in the gaps: the uncomfortable conversations and non-scalable ideas."
                    </p>
                    <p>"We don't just advise; we incubate the friction required for real innovation."</p>
                    <p class="text-[#A2D149] font-medium italic">
                        "Because if it isn't a little awkward, you probably aren't growing."
                    </p>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn FocusSection(services: Vec<Service>) -> impl IntoView {
    view! {
        <Section>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-20">
                <div>
                    <h2 class="text-sm font-mono uppercase tracking-widest text-[#A2D149] mb-12">
                        "03 // Focus"
                    </h2>
                    <div class="space-y-16">
                        {services.into_iter().enumerate().map(|(index, service)| view! {
                            <ServiceCard service=service index=index/>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="hidden md:flex items-center justify-center">
                    <FocusGlyph/>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn CtaSection(mailto: String, footer: String) -> impl IntoView {
    view! {
        <Section class="bg-white items-center text-center overflow-hidden">
            <div class="group transition-transform duration-300 hover:scale-[1.02]">
                <a
                    href=mailto
                    class="text-4xl md:text-7xl font-bold tracking-tighter hover:text-[#A2D149] transition-colors duration-300"
                >
                    "Start the awkward conversation."
                    <span class="block h-1 w-0 group-hover:w-full bg-[#A2D149] transition-all duration-500 mt-2 mx-auto"></span>
                </a>
            </div>
            <div class="mt-24 text-sm font-mono opacity-30">{footer}</div>
        </Section>
    }
}
