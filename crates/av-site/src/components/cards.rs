//! Service card for the focus grid

use av_core::Service;
use leptos::*;

/// Odd positions in the grid sit indented on wide screens.
pub fn service_offset(index: usize) -> &'static str {
    if index % 2 != 0 {
        "md:pl-12"
    } else {
        ""
    }
}

#[component]
pub fn ServiceCard(service: Service, index: usize) -> impl IntoView {
    view! {
        <div class=service_offset(index)>
            <h3 class="text-3xl font-bold mb-2">{service.title}</h3>
            <p class="text-xl opacity-60 max-w-sm">{service.description}</p>
        </div>
    }
}
