//! Profile Page
//!
//! Account card, headline stats with completion rate, and the
//! achievements grid derived from those stats.

use leptos::*;

use crate::api;
use crate::state::auth::AuthState;
use crate::state::global::{progress_percentage, Roadmap};

/// An achievement unlocked by reaching a stat threshold
struct Achievement {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    unlocked: bool,
}

fn achievements(completed: u32, level: u32, rank: u32) -> Vec<Achievement> {
    vec![
        Achievement {
            icon: "🏆",
            title: "First Challenge",
            description: "Complete your first challenge",
            unlocked: completed >= 1,
        },
        Achievement {
            icon: "⭐",
            title: "Quick Learner",
            description: "Reach Level 10",
            unlocked: level >= 10,
        },
        Achievement {
            icon: "🎯",
            title: "Challenge Master",
            description: "Complete 10 challenges",
            unlocked: completed >= 10,
        },
        Achievement {
            icon: "📈",
            title: "Top Performer",
            description: "Reach top 3 on the leaderboard",
            unlocked: rank > 0 && rank <= 3,
        },
    ]
}

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let (roadmaps, set_roadmaps) = create_signal(Vec::<Roadmap>::new());

    // Completion rate needs the roadmap list; a fetch failure just leaves
    // the rate at zero
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

    let completed = create_memo(move |_| {
        roadmaps.with(|r| r.iter().filter(|c| c.completed).count() as u32)
    });
    let completion_rate = create_memo(move |_| {
        roadmaps.with(|r| progress_percentage(completed.get(), r.len() as u32))
    });

    view! {
        <div class="p-6">
            <div class="flex items-center justify-between mb-6">
                <div>
                    <h1 class="text-3xl font-bold text-text mb-2">"Profile"</h1>
                    <p class="text-gray-600">"Manage your account and view your achievements"</p>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                // Account card
                <div class="lg:col-span-1">
                    <div class="bg-white/60 backdrop-blur-md border border-gray-200/80 rounded-2xl p-6">
                        <div class="text-center mb-6">
                            {move || user().and_then(|u| u.avatar).map(|src| view! {
                                <img src=src class="w-24 h-24 rounded-full mx-auto mb-4 border-4 border-primary" />
                            })}
                            <h2 class="text-2xl font-bold text-text mb-1">
                                {move || user().map(|u| u.name).unwrap_or_default()}
                            </h2>
                            <p class="text-gray-500 mb-4">
                                {move || user().map(|u| u.email).unwrap_or_default()}
                            </p>

                            <div class="inline-flex items-center gap-2 px-4 py-2 bg-primary/20 text-primary rounded-full">
                                <span>"🏆"</span>
                                <span class="font-semibold">
                                    "Level "{move || user().map(|u| u.level).unwrap_or(0)}
                                </span>
                            </div>
                        </div>

                        <div class="space-y-4">
                            <InfoRow
                                label="Email"
                                value=Signal::derive(move || user().map(|u| u.email).unwrap_or_default())
                            />
                            <InfoRow
                                label="Global Rank"
                                value=Signal::derive(move || {
                                    user().map(|u| format!("#{}", u.rank)).unwrap_or_default()
                                })
                            />
                        </div>
                    </div>
                </div>

                // Stats and achievements
                <div class="lg:col-span-2 space-y-6">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatTile
                            icon="★"
                            value=Signal::derive(move || {
                                user().map(|u| u.total_points.to_string()).unwrap_or_default()
                            })
                            label="Total Points"
                        />
                        <StatTile
                            icon="🎯"
                            value=Signal::derive(move || completed.get().to_string())
                            label="Completed"
                        />
                        <StatTile
                            icon="🏆"
                            value=Signal::derive(move || {
                                user().map(|u| u.level.to_string()).unwrap_or_default()
                            })
                            label="Current Level"
                        />
                        <StatTile
                            icon="📈"
                            value=Signal::derive(move || format!("{}%", completion_rate.get()))
                            label="Completion"
                        />
                    </div>

                    // Achievements
                    <div class="bg-white/60 backdrop-blur-md border border-gray-200/80 rounded-xl p-6">
                        <h3 class="text-xl font-semibold text-text mb-4">"Achievements"</h3>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                            {move || {
                                let u = user();
                                let level = u.as_ref().map(|u| u.level).unwrap_or(0);
                                let rank = u.as_ref().map(|u| u.rank).unwrap_or(0);

                                achievements(completed.get(), level, rank)
                                    .into_iter()
                                    .map(|a| {
                                        let card = if a.unlocked {
                                            "bg-secondary/10 border-secondary/20"
                                        } else {
                                            "bg-gray-200/60 border-gray-300/60 opacity-60"
                                        };
                                        view! {
                                            <div class=format!("flex items-center gap-3 p-3 border rounded-lg {}", card)>
                                                <span class="text-2xl">{a.icon}</span>
                                                <div>
                                                    <p class="text-text font-medium">{a.title}</p>
                                                    <p class="text-gray-500 text-sm">{a.description}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Labeled info row in the account card
#[component]
fn InfoRow(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 p-3 bg-gray-100/80 rounded-lg">
            <div>
                <p class="text-sm text-gray-500">{label}</p>
                <p class="text-text font-medium">{move || value.get()}</p>
            </div>
        </div>
    }
}

/// Small stat tile
#[component]
fn StatTile(
    icon: &'static str,
    #[prop(into)]
    value: Signal<String>,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white/60 backdrop-blur-md border border-gray-200/80 rounded-xl p-4 text-center">
            <span class="text-2xl block mb-2">{icon}</span>
            <p class="text-2xl font-bold text-text">{move || value.get()}</p>
            <p class="text-gray-500 text-sm">{label}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievements_unlock_thresholds() {
        let locked = achievements(0, 1, 0);
        assert!(locked.iter().all(|a| !a.unlocked));

        let unlocked = achievements(10, 10, 3);
        assert!(unlocked.iter().all(|a| a.unlocked));
    }

    #[test]
    fn test_top_performer_requires_a_rank() {
        // rank 0 means "unranked", not first place
        let a = achievements(0, 0, 0);
        assert!(!a.iter().find(|a| a.title == "Top Performer").unwrap().unlocked);
    }
}
