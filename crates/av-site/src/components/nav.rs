//! Fixed navigation bar

use leptos::*;

#[component]
pub fn MarketingNav(brand: String, established: u16) -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 w-full p-6 md:p-10 flex justify-between items-start z-50 mix-blend-difference text-white">
            <a href="/" class="font-bold text-lg tracking-tighter">{brand.to_uppercase()}</a>
            <div class="text-sm font-mono tracking-widest uppercase rotate-90 origin-right translate-y-12">
                {format!("EST. {}", established)}
            </div>
        </nav>
    }
}
