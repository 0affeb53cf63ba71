//! Leaderboard Page
//!
//! Top-three podium, full rankings with the current user highlighted, and
//! a stats footer.

use leptos::*;

use crate::api;
use crate::components::ListSkeleton;
use crate::state::auth::AuthState;
use crate::state::global::LeaderboardEntry;

/// Leaderboard page component
#[component]
pub fn Leaderboard() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let (entries, set_entries) = create_signal(Vec::<LeaderboardEntry>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.track();
        let Some(token) = auth.token() else { return };

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_leaderboard(&token).await {
                Ok(list) => set_entries.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let current_user_id = move || auth.user().map(|u| u.id).unwrap_or_default();

    view! {
        <div class="p-6">
            <div class="flex items-center justify-between mb-6">
                <div>
                    <h1 class="text-3xl font-bold text-text mb-2">"Leaderboard"</h1>
                    <p class="text-gray-600">"See how you rank against other recruits"</p>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=6 /> }.into_view();
                }
                if let Some(msg) = error.get() {
                    return view! {
                        <div class="bg-accent/10 border border-accent/30 rounded-xl p-6 text-center">
                            <p class="text-accent font-medium mb-4">{msg}</p>
                            <button
                                on:click=move |_| set_reload.update(|n| *n += 1)
                                class="px-6 py-2 bg-primary text-white rounded-lg font-medium hover:bg-primary/90 transition-colors"
                            >
                                "Retry"
                            </button>
                        </div>
                    }.into_view();
                }

                let list = entries.get();
                let me = current_user_id();
                let my_rank = list
                    .iter()
                    .find(|e| e.id == me)
                    .map(|e| e.rank)
                    .or_else(|| auth.user().map(|u| u.rank))
                    .unwrap_or(0);
                let highest = list.first().map(|e| e.total_points).unwrap_or(0);
                let participants = list.len();

                view! {
                    // Top 3 podium
                    <div class="mb-8 grid grid-cols-3 gap-4 max-w-4xl mx-auto items-end">
                        {list.get(1).cloned().map(|e| view! { <PodiumCard entry=e place=2 /> })}
                        {list.first().cloned().map(|e| view! { <PodiumCard entry=e place=1 /> })}
                        {list.get(2).cloned().map(|e| view! { <PodiumCard entry=e place=3 /> })}
                    </div>

                    // Full rankings
                    <div class="bg-white/60 backdrop-blur-md border border-gray-200/80 rounded-2xl overflow-hidden">
                        <div class="p-6 border-b border-gray-200/80">
                            <h2 class="text-xl font-semibold text-text">"Full Rankings"</h2>
                        </div>

                        <div class="divide-y divide-gray-200/80">
                            {list.iter().cloned().map(|entry| {
                                let is_me = entry.id == me;
                                view! { <RankingRow entry=entry is_me=is_me /> }
                            }).collect_view()}
                        </div>
                    </div>

                    // Stats footer
                    <div class="mt-6 grid grid-cols-1 md:grid-cols-3 gap-4">
                        <FooterStat value=participants.to_string() label="Total Participants" color="text-text" />
                        <FooterStat value=highest.to_string() label="Highest Score" color="text-secondary" />
                        <FooterStat value=format!("#{}", my_rank) label="Your Rank" color="text-primary" />
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Podium card for one of the top three entries
#[component]
fn PodiumCard(entry: LeaderboardEntry, place: u32) -> impl IntoView {
    let (border, badge_bg, base_height) = match place {
        1 => ("border-secondary/50", "bg-secondary", "h-20"),
        2 => ("border-gray-300/80", "bg-gray-400", "h-16"),
        _ => ("border-gray-300/80", "bg-primary", "h-12"),
    };

    view! {
        <div class=format!("flex flex-col items-center {}", if place == 1 { "order-2" } else if place == 2 { "order-1 mt-4" } else { "order-3 mt-4" })>
            <div class=format!(
                "bg-white/60 backdrop-blur-md border {} rounded-2xl p-6 w-full text-center
                 transform hover:scale-105 transition-all",
                border
            )>
                <div class="relative mb-4">
                    {entry.avatar.clone().map(|src| view! {
                        <img src=src class="w-20 h-20 rounded-full mx-auto border-4 border-primary" />
                    })}
                    <div class=format!(
                        "absolute -bottom-2 left-1/2 -translate-x-1/2 w-8 h-8 {} rounded-full
                         flex items-center justify-center",
                        badge_bg
                    )>
                        <span class="text-white font-bold text-sm">
                            {if place == 1 { "🏆".to_string() } else { place.to_string() }}
                        </span>
                    </div>
                </div>
                <h3 class="text-lg font-semibold text-text mb-1">{entry.name.clone()}</h3>
                <p class="text-gray-500 text-sm mb-2">"Level "{entry.level}</p>
                <div class="flex items-center justify-center gap-1 text-gray-500">
                    <span class="text-secondary">"★"</span>
                    <span class="font-bold">{entry.total_points}</span>
                </div>
            </div>
            <div class=format!("w-full {} bg-gradient-to-t from-primary/60 to-primary/30 rounded-b-lg -mt-2", base_height) />
        </div>
    }
}

/// One row in the full rankings list
#[component]
fn RankingRow(entry: LeaderboardEntry, is_me: bool) -> impl IntoView {
    let rank_badge = match entry.rank {
        1 => "bg-gradient-to-r from-secondary to-pink-500 text-white",
        2 => "bg-gradient-to-r from-gray-400 to-gray-500 text-white",
        3 => "bg-gradient-to-r from-primary to-purple-700 text-white",
        _ => "bg-gray-200 text-text",
    };

    view! {
        <div class=format!(
            "p-4 md:p-6 hover:bg-primary/5 transition-all {}",
            if is_me { "bg-primary/10 border-l-4 border-primary" } else { "" }
        )>
            <div class="flex items-center gap-4">
                <span class="w-8 text-center text-gray-500 font-bold">"#"{entry.rank}</span>
                {entry.avatar.clone().map(|src| view! {
                    <img src=src class="w-12 h-12 rounded-full border-2 border-gray-300" />
                })}
                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-3">
                        <h3 class=format!("font-semibold {}", if is_me { "text-primary" } else { "text-text" })>
                            {entry.name.clone()}
                        </h3>
                        {is_me.then(|| view! {
                            <span class="px-2 py-1 bg-primary/20 text-primary text-xs rounded-full">"You"</span>
                        })}
                    </div>
                    <p class="text-gray-500 text-sm">"Level "{entry.level}</p>
                </div>
                <div class="flex items-center gap-2 md:gap-6">
                    <div class="hidden md:block text-right">
                        <div class="flex items-center gap-1 text-secondary justify-end">
                            <span>"★"</span>
                            <span class="font-bold">{entry.total_points}</span>
                        </div>
                        <p class="text-gray-500 text-xs">"Total Points"</p>
                    </div>
                    <div class=format!("px-3 py-1 rounded-full text-sm font-semibold {}", rank_badge)>
                        "#"{entry.rank}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Stats footer tile
#[component]
fn FooterStat(value: String, label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white/60 backdrop-blur-md border border-gray-200/80 rounded-xl p-4 text-center">
            <p class=format!("text-2xl font-bold {}", color)>{value}</p>
            <p class="text-gray-500 text-sm">{label}</p>
        </div>
    }
}
