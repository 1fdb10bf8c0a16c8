//! Main application component

use av_core::SiteConfig;
use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::{Route, Router, Routes};

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let brand = config.brand.clone();
    let established = config.established;
    let title = format!("{} | Success is rarely linear", brand);

    view! {
        <Title text=title/>
        <Meta
            name="description"
            content="A consultancy for the messy parts: venture incubation, radical leadership and operational friction."
        />
        <Router>
            <div class="bg-[#F9F9F9] text-[#111111] selection:bg-[#A2D149] selection:text-black font-sans scroll-smooth">
                <BackgroundLines/>
                <MarketingNav brand=brand established=established/>
                <main class="relative z-10">
                    <Routes>
                        <Route path="/" view=move || view! { <HomePage config=config.clone()/> }/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
                <NoiseLayer/>
            </div>
        </Router>
    }
}
