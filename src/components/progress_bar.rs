//! Progress Bar Component
//!
//! Gradient completion bar used on cards, the dashboard and roadmap pages.

use leptos::*;

/// Horizontal progress bar, 0-100 percent
#[component]
pub fn ProgressBar(
    #[prop(into)]
    percent: Signal<u8>,
    /// Tailwind height class for the track
    #[prop(default = "h-2")]
    height: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("w-full bg-gray-200/80 rounded-full {} overflow-hidden", height)>
            <div
                class="h-full bg-gradient-to-r from-primary to-secondary rounded-full transition-all duration-1000 ease-out"
                style=move || format!("width: {}%", percent.get().min(100))
            />
        </div>
    }
}
