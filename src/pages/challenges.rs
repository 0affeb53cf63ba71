//! Challenges Page
//!
//! Grid of all roadmaps with completion badges, skeleton loading and an
//! error banner with retry.

use leptos::*;

use crate::api;
use crate::components::{CardSkeleton, ChallengeCard};
use crate::state::auth::AuthState;
use crate::state::global::{sort_completed_first, Roadmap};

/// Challenges page component
#[component]
pub fn Challenges() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let (roadmaps, set_roadmaps) = create_signal(Vec::<Roadmap>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    // Fetch on mount and whenever a retry bumps the reload counter
    create_effect(move |_| {
        reload.track();
        let Some(token) = auth.token() else { return };

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_roadmaps(&token).await {
                Ok(mut list) => {
                    sort_completed_first(&mut list, |r| r.completed);
                    set_roadmaps.set(list);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="p-6">
            <div class="flex items-center justify-between mb-6">
                <div>
                    <h1 class="text-3xl font-bold text-text mb-2">"Challenges"</h1>
                    <p class="text-gray-600">"Choose your next adventure and level up your skills"</p>
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-6">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view()
                } else if let Some(msg) = error.get() {
                    view! {
                        <div class="bg-accent/10 border border-accent/30 rounded-xl p-6 text-center">
                            <p class="text-accent font-medium mb-4">{msg}</p>
                            <button
                                on:click=move |_| set_reload.update(|n| *n += 1)
                                class="px-6 py-2 bg-primary text-white rounded-lg font-medium hover:bg-primary/90 transition-colors"
                            >
                                "Retry"
                            </button>
                        </div>
                    }.into_view()
                } else {
                    let list = roadmaps.get();
                    if list.is_empty() {
                        view! {
                            <div class="text-center py-20 bg-white/50 border border-gray-200/60 rounded-xl">
                                <span class="text-5xl block mb-4">"🎯"</span>
                                <h3 class="text-xl font-semibold text-gray-600 mb-2">"No challenges yet"</h3>
                                <p class="text-gray-500">"New challenges will show up here as they open."</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-6">
                                {list.into_iter().map(|roadmap| view! {
                                    <ChallengeCard roadmap=roadmap />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
