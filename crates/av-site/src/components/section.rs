//! Full-height page section shared by every block of the home page.

use leptos::*;

/// Full-height page section
#[component]
pub fn Section(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class=format!(
            "min-h-screen flex flex-col justify-center px-6 md:px-24 py-20 {}",
            class
        )>
            {children()}
        </section>
    }
}
