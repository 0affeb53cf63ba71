//! Dashboard Page
//!
//! Landing view after login: welcome banner, headline stats, recent
//! challenges and quick actions.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::ProgressBar;
use crate::state::auth::AuthState;
use crate::state::global::{level_progress, Roadmap, POINTS_PER_LEVEL};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let (roadmaps, set_roadmaps) = create_signal(Vec::<Roadmap>::new());

    // Fetch roadmaps on mount; failures only lose the "recent challenges"
    // section so they are logged rather than surfaced
    create_effect(move |_| {
        let Some(token) = auth.token() else { return };
        spawn_local(async move {
            match api::fetch_roadmaps(&token).await {
                Ok(list) => set_roadmaps.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch roadmaps: {}", e).into());
                }
            }
        });
    });

    let user = move || auth.user();

    view! {
        <div class="p-6 space-y-6">
            // Welcome banner
            <div class="bg-gradient-to-r from-primary/10 to-secondary/10 backdrop-blur-sm border border-primary/20 rounded-2xl p-6">
                <div class="flex items-center gap-4">
                    {move || user().and_then(|u| u.avatar).map(|src| view! {
                        <img src=src class="w-16 h-16 rounded-full border-2 border-primary" />
                    })}
                    <div>
                        <h1 class="text-2xl font-bold text-text">
                            "Welcome back, "
                            {move || user().map(|u| u.name).unwrap_or_default()}
                            "!"
                        </h1>
                        <p class="text-primary">"Ready to tackle new challenges today?"</p>
                    </div>
                </div>
            </div>

            // Stats grid
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    label="Challenges"
                    value=Signal::derive(move || {
                        roadmaps.with(|r| r.iter().filter(|c| c.completed).count().to_string())
                    })
                    caption="Completed"
                    icon="🎯"
                />
                <StatCard
                    label="Total Points"
                    value=Signal::derive(move || {
                        user().map(|u| u.total_points.to_string()).unwrap_or_default()
                    })
                    caption="Earned"
                    icon="★"
                />
                <StatCard
                    label="Current Level"
                    value=Signal::derive(move || {
                        user().map(|u| u.level.to_string()).unwrap_or_default()
                    })
                    caption="Keep going"
                    icon="📈"
                />
                <StatCard
                    label="Global Rank"
                    value=Signal::derive(move || {
                        user().map(|u| format!("#{}", u.rank)).unwrap_or_default()
                    })
                    caption="Leaderboard"
                    icon="🏆"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                // Level progress
                <div class="bg-white/60 backdrop-blur-sm border border-gray-200/80 rounded-xl p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold text-text">"Level Progress"</h2>
                        <span class="text-sm text-gray-500">
                            "Level "{move || user().map(|u| u.level).unwrap_or(0)}
                        </span>
                    </div>
                    {move || {
                        let points = user().map(|u| u.total_points).unwrap_or(0);
                        let level = user().map(|u| u.level).unwrap_or(0);
                        let lp = level_progress(points);
                        view! {
                            <div class="mb-4">
                                <div class="flex justify-between text-sm text-gray-600 mb-2">
                                    <span>{lp.into_level}" / "{POINTS_PER_LEVEL}" XP"</span>
                                    <span>{lp.percent}"%"</span>
                                </div>
                                <ProgressBar percent=Signal::derive(move || lp.percent) height="h-3" />
                            </div>
                            <p class="text-gray-500 text-sm">
                                {format!("{} XP to reach Level {}!", lp.to_next, level + 1)}
                            </p>
                        }
                    }}
                </div>

                // Recent challenges
                <div class="bg-white/60 backdrop-blur-sm border border-gray-200/80 rounded-xl p-6">
                    <h2 class="text-xl font-semibold text-text mb-4">"Recent Challenges"</h2>
                    <div class="space-y-3">
                        {move || {
                            let recent: Vec<_> = roadmaps.get().into_iter().take(3).collect();
                            if recent.is_empty() {
                                view! {
                                    <p class="text-gray-500 text-sm">"No challenges yet"</p>
                                }.into_view()
                            } else {
                                recent.into_iter().map(|roadmap| {
                                    let dot = if roadmap.completed { "bg-primary" } else { "bg-secondary" };
                                    view! {
                                        <A
                                            href=format!("/challenges/{}", roadmap.id)
                                            class="flex items-center gap-3 p-3 bg-gray-100/70 rounded-lg hover:bg-gray-200/90 transition-all"
                                        >
                                            <div class=format!("w-2 h-2 rounded-full {}", dot) />
                                            <div class="flex-1">
                                                <p class="text-text text-sm font-medium">{roadmap.title.clone()}</p>
                                                <p class="text-gray-500 text-xs">
                                                    {roadmap.progress_percentage()}"% complete"
                                                </p>
                                            </div>
                                            <span class="text-xs px-2 py-1 font-medium rounded-full bg-primary/10 text-primary">
                                                {roadmap.difficulty.clone()}
                                            </span>
                                        </A>
                                    }
                                }).collect_view()
                            }
                        }}
                    </div>
                </div>
            </div>

            // Quick actions
            <div class="bg-white/60 backdrop-blur-sm border border-gray-200/80 rounded-xl p-6">
                <h2 class="text-xl font-semibold text-text mb-4">"Quick Actions"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <QuickAction
                        href="/challenges"
                        icon="⚡"
                        title="Start New Challenge"
                        subtitle="Begin your next adventure"
                    />
                    <QuickAction
                        href="/leaderboard"
                        icon="🏆"
                        title="View Leaderboard"
                        subtitle="See your ranking"
                    />
                    <QuickAction
                        href="/notifications"
                        icon="🔔"
                        title="Notifications"
                        subtitle="Check what's new"
                    />
                </div>
            </div>
        </div>
    }
}

/// Single stat tile in the dashboard grid
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    caption: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white/60 backdrop-blur-sm border border-gray-200/80 rounded-xl p-6 hover:border-primary/50 transition-all">
            <div class="flex items-center gap-3 mb-2">
                <div class="w-10 h-10 bg-primary/10 rounded-lg flex items-center justify-center">
                    <span class="text-lg">{icon}</span>
                </div>
                <span class="text-gray-600 text-sm">{label}</span>
            </div>
            <p class="text-2xl font-bold text-text">{move || value.get()}</p>
            <p class="text-primary text-sm font-medium">{caption}</p>
        </div>
    }
}

/// Navigation shortcut card
#[component]
fn QuickAction(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex items-center gap-3 p-4 bg-primary/5 border border-primary/20 rounded-lg
                   hover:bg-primary/10 transition-all group"
        >
            <span class="text-2xl group-hover:scale-110 transition-transform">{icon}</span>
            <div class="text-left">
                <p class="text-text font-medium">{title}</p>
                <p class="text-gray-500 text-sm">{subtitle}</p>
            </div>
        </A>
    }
}
