//! Loading Component
//!
//! Loading overlay and skeleton states.

use leptos::*;

/// Blocking overlay used while a roadmap loads
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-white/80 backdrop-blur-sm flex items-center justify-center z-50">
            <div class="bg-white border border-primary/20 rounded-2xl p-8 flex items-center gap-4 shadow-xl">
                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-primary" />
                <p class="text-text font-medium">"Loading..."</p>
            </div>
        </div>
    }
}

/// Skeleton loader for cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white/60 border border-gray-200/80 rounded-xl p-6 animate-pulse">
            <div class="h-4 bg-gray-200 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-200 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-200 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-200 rounded-xl h-16" />
            }).collect_view()}
        </div>
    }
}
