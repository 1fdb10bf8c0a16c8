//! Awkward Ventures Landing Page
//!
//! A Leptos client-side rendered single-page site.

mod app;
mod components;
mod config;
mod pages;
mod timer;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = config::load();
    tracing::info!(
        brand = %config.brand,
        words = config.content.words.len(),
        truths = config.content.truths.len(),
        "mounting landing page"
    );

    mount_to_body(move || {
        view! {
            <app::App config=config/>
        }
    });
}
