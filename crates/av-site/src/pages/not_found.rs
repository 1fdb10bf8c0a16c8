//! Fallback for unknown paths

use leptos::*;

use crate::components::Section;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Section class="items-center text-center">
            <h1 class="text-5xl md:text-8xl font-bold tracking-tight mb-8">
                "This is " <span class="text-[#A2D149] italic">"awkward."</span>
            </h1>
            <p class="text-xl md:text-3xl font-light mb-12">"There is nothing at this address."</p>
            <a href="/" class="text-sm font-mono uppercase tracking-widest hover:text-[#A2D149] transition-colors">
                "Back to the start"
            </a>
        </Section>
    }
}
