//! Jargon entry that reveals its reality on hover or tap

use av_core::{JargonEntry, LayerPose, RevealBoard, RevealEvent};
use leptos::*;

/// Tailwind classes placing a text layer for its pose.
pub fn pose_class(pose: LayerPose) -> &'static str {
    match pose {
        LayerPose::Shown => "opacity-100 translate-y-0",
        LayerPose::HiddenAbove => "opacity-0 -translate-y-4",
        LayerPose::HiddenBelow => "opacity-0 translate-y-4",
    }
}

#[component]
pub fn TruthHover(
    index: usize,
    entry: JargonEntry,
    board: ReadSignal<RevealBoard>,
    set_board: WriteSignal<RevealBoard>,
    reveal_ms: u64,
) -> impl IntoView {
    let state = move || board.with(|b| b.state(index).unwrap_or_default());
    let dispatch = move |event: RevealEvent| {
        set_board.update(|b| {
            if let Err(err) = b.apply(index, event) {
                tracing::warn!(%err, "reveal event dropped");
            }
        })
    };

    let layer_style = format!("transition-duration: {}ms;", reveal_ms);
    let caption = entry.reality_caption();

    // Both layers share one box: the reality line is absolutely positioned
    // over the corporate phrase.
    view! {
        <div
            class="relative cursor-help py-4 border-b border-black/10 group overflow-hidden"
            on:mouseenter=move |_| dispatch(RevealEvent::PointerEnter)
            on:mouseleave=move |_| dispatch(RevealEvent::PointerLeave)
            on:click=move |_| dispatch(RevealEvent::Click)
        >
            <div class="flex justify-between items-center">
                <span
                    class=move || format!(
                        "text-xl md:text-2xl font-medium tracking-tight transition-all {}",
                        pose_class(state().poses().0)
                    )
                    style=layer_style.clone()
                >
                    {entry.corporate}
                </span>
                <div
                    class=move || format!(
                        "absolute left-0 right-0 transition-all {}",
                        pose_class(state().poses().1)
                    )
                    style=layer_style
                >
                    <span class="text-xl md:text-2xl italic text-[#A2D149] font-mono">
                        {caption}
                    </span>
                </div>
            </div>
        </div>
    }
}
