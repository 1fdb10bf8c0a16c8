//! Decorative layers: background rules, film grain, focus glyph

use leptos::*;

#[component]
pub fn BackgroundLines() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none z-0 opacity-[0.03]" aria-hidden="true">
            <svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
                <line x1="10%" y1="0" x2="10%" y2="100%" stroke="black" stroke-width="1"/>
                <line x1="90%" y1="0" x2="90%" y2="100%" stroke="black" stroke-width="1"/>
                <circle
                    cx="50%" cy="50%" r="40%"
                    fill="none" stroke="black" stroke-width="0.5" stroke-dasharray="10 20"
                />
            </svg>
        </div>
    }
}

#[component]
pub fn NoiseLayer() -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 pointer-events-none z-[100] opacity-[0.015] bg-[url('/assets/noise.svg')]"
            aria-hidden="true"
        ></div>
    }
}

#[component]
pub fn FocusGlyph() -> impl IntoView {
    view! {
        <svg viewBox="0 0 200 200" class="w-full max-w-md opacity-20" aria-hidden="true">
            <path d="M10,10 L190,190 M10,190 L190,10" stroke="currentColor" stroke-width="0.5" fill="none"/>
            <circle cx="100" cy="100" r="80" stroke="currentColor" stroke-width="0.5" fill="none"/>
            <rect
                x="40" y="40" width="120" height="120"
                stroke="currentColor" stroke-width="0.5" fill="none"
                transform="rotate(45 100 100)"
            />
        </svg>
    }
}
