//! Roadmap Detail Page
//!
//! Timeline of quests for one challenge: progress stats, per-quest status,
//! document links and the submission flow. Re-fetches after a successful
//! submission instead of patching local state.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::RoadmapDetail;
use crate::components::{LoadingOverlay, SubmissionModal};
use crate::state::auth::AuthState;
use crate::state::global::{sort_completed_first, GlobalState, QuestEvent, RoadmapProgress};

/// Badge and dot classes for a quest status color from the API
fn status_classes(color: &str) -> (&'static str, &'static str) {
    match color {
        "green" => ("bg-green-100 text-green-700 border-green-300", "bg-green-500"),
        "yellow" => ("bg-yellow-100 text-yellow-700 border-yellow-300", "bg-yellow-500"),
        "red" => ("bg-accent/10 text-accent border-accent/30", "bg-accent"),
        "blue" => ("bg-primary/10 text-primary border-primary/30", "bg-primary/40"),
        _ => ("bg-gray-100 text-gray-600 border-gray-300", "bg-gray-400"),
    }
}

/// Roadmap detail page component
#[component]
pub fn RoadmapView() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let roadmap_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let (detail, set_detail) = create_signal(None::<RoadmapDetail>);
    let (progress, set_progress) = create_signal(RoadmapProgress::default());
    let (loading, set_loading) = create_signal(true);
    let (active_submission, set_active_submission) = create_signal(None::<QuestEvent>);
    let (reload, set_reload) = create_signal(0u32);

    // Fetch the roadmap and the caller's progress on mount and after each
    // successful submission
    create_effect(move |_| {
        reload.track();
        let id = roadmap_id();
        let Some(token) = auth.token() else { return };
        if id.is_empty() {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_roadmap(&token, &id).await {
                Ok(mut fetched) => {
                    sort_completed_first(&mut fetched.events, |e| e.is_completed);
                    set_detail.set(Some(fetched));
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }

            // Progress is a separate endpoint; a failure here falls back to
            // counts derived from the events list
            match api::fetch_progress(&token, &id).await {
                Ok(p) => set_progress.set(p),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch progress: {}", e).into());
                }
            }

            set_loading.set(false);
        });
    });

    // Stats row falls back to event-derived counts when the progress
    // endpoint returned nothing
    let stats = create_memo(move |_| {
        let p = progress.get();
        if p.total_count > 0 {
            return p;
        }
        detail.with(|d| {
            d.as_ref()
                .map(|d| RoadmapProgress {
                    completed_count: d.events.iter().filter(|e| e.is_completed).count() as u32,
                    total_count: d.events.len() as u32,
                    points: d.events.iter().map(|e| e.points_earned).sum(),
                })
                .unwrap_or_default()
        })
    });

    let on_submit = move |text: String, file: Option<web_sys::File>| {
        let Some(event) = active_submission.get() else { return };
        let Some(token) = auth.token() else { return };
        let id = roadmap_id();

        set_active_submission.set(None);

        spawn_local(async move {
            match api::submit_event(&token, &id, &event.id, &text, file).await {
                Ok(()) => {
                    state.show_success("Solution submitted for review");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen relative p-4 sm:p-6 lg:p-8">
            {move || loading.get().then(|| view! { <LoadingOverlay /> })}

            <div class="flex items-center gap-4 mb-8">
                <A
                    href="/challenges"
                    class="flex items-center gap-2 border border-primary/30 px-4 py-2 rounded-xl
                           text-primary bg-white hover:bg-primary/10 transition-colors"
                >
                    "← Back to Challenges"
                </A>
            </div>

            {move || {
                let Some(d) = detail.get() else {
                    return view! { <div /> }.into_view();
                };

                if d.events.is_empty() && !loading.get() {
                    return view! {
                        <div class="flex items-center justify-center py-24">
                            <div class="text-center">
                                <h2 class="text-2xl font-bold mb-2 text-primary">"Nothing Available Right Now"</h2>
                                <p class="text-gray-500 mb-6">"No quests are currently available for this challenge."</p>
                            </div>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="text-center mb-12">
                        <h1 class="text-2xl sm:text-4xl md:text-5xl font-bold mb-4 text-primary">
                            {d.roadmap.title.clone()}
                        </h1>
                        <p class="text-base sm:text-lg max-w-3xl mx-auto mb-8 text-gray-600 px-4">
                            {d.roadmap.description.clone()}
                        </p>

                        // Completed : remaining : total : XP
                        <p class="text-lg mb-4 font-semibold text-primary">"Challenge Progress:"</p>
                        <div class="flex items-center justify-center gap-4 lg:gap-8 flex-wrap">
                            {move || {
                                let s = stats.get();
                                view! {
                                    <StatBlock value=s.completed_count.to_string() label="COMPLETED" />
                                    <span class="text-2xl font-bold text-primary">":"</span>
                                    <StatBlock value=s.remaining().to_string() label="REMAINING" />
                                    <span class="text-2xl font-bold text-primary">":"</span>
                                    <StatBlock value=s.total_count.to_string() label="TOTAL" />
                                    <span class="text-2xl font-bold text-primary">":"</span>
                                    <StatBlock value=s.points.to_string() label="XP" accent=true />
                                }
                            }}
                        </div>
                    </div>

                    // Quest timeline, completed quests first
                    <div class="max-w-3xl mx-auto relative">
                        <div class="absolute left-5 top-0 bottom-0 w-1 bg-gradient-to-b from-secondary via-primary to-cyan-500 opacity-30 rounded-full" />

                        <div class="space-y-8">
                            {d.events.iter().cloned().map(|quest| {
                                view! {
                                    <QuestCard
                                        quest=quest
                                        on_open_submission=move |q| set_active_submission.set(Some(q))
                                    />
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }.into_view()
            }}

            // Submission modal
            {move || {
                active_submission.get().map(|event| view! {
                    <SubmissionModal
                        event=event
                        on_close=move || set_active_submission.set(None)
                        on_submit=on_submit
                    />
                })
            }}
        </div>
    }
}

/// One figure in the progress stats row
#[component]
fn StatBlock(
    value: String,
    label: &'static str,
    #[prop(default = false)]
    accent: bool,
) -> impl IntoView {
    let color = if accent { "text-accent" } else { "text-primary" };
    let label_color = if accent { "text-accent" } else { "text-gray-500" };

    view! {
        <div class="text-center">
            <div class=format!("text-2xl sm:text-3xl font-bold {}", color)>{value}</div>
            <div class=format!("text-xs sm:text-sm font-semibold {}", label_color)>{label}</div>
        </div>
    }
}

/// A single quest entry on the roadmap timeline
#[component]
fn QuestCard(
    quest: QuestEvent,
    on_open_submission: impl Fn(QuestEvent) + 'static,
) -> impl IntoView {
    let (badge, dot) = status_classes(&quest.status_color);
    let dot = if quest.is_completed { "bg-green-400" } else { dot };

    let quest_for_submit = quest.clone();

    view! {
        <div class="relative pl-16">
            // Timeline dot
            <div class="absolute left-0 top-6 z-10">
                <div class=format!(
                    "w-11 h-11 rounded-full border-4 border-white flex items-center justify-center shadow-lg {}",
                    dot
                )>
                    <span class="text-white text-lg">
                        {if quest.is_completed { "✓" } else { "•" }}
                    </span>
                </div>
            </div>

            // Quest card
            <div class="bg-white/90 backdrop-blur-md p-4 sm:p-6 shadow-xl border-2 border-primary/20 rounded-2xl">
                <h3 class="text-lg sm:text-xl font-bold text-text mb-3">{quest.title.clone()}</h3>
                <p class="text-gray-600 text-sm mb-4 leading-relaxed">{quest.description.clone()}</p>

                // Attached document
                {quest.event_image.clone().map(|path| {
                    let url = api::event_document_url(&path);
                    let download_url = url.clone();
                    view! {
                        <div class="flex flex-row gap-4 justify-start mb-4 text-primary text-sm">
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-1 hover:text-primary/80 transition-colors"
                            >
                                "View File 👁"
                            </a>
                            <a href=download_url download="" class="hover:text-primary/80 transition-colors">
                                "⬇ Download"
                            </a>
                        </div>
                    }
                })}

                // Status and points
                <div class="flex items-center justify-between mb-4 flex-wrap gap-2">
                    <span class=format!("px-3 py-1 rounded-full text-xs font-medium border {}", badge)>
                        {quest.status_text.clone()}
                    </span>
                    <div class="flex items-center gap-1 text-gray-600">
                        <span class="text-secondary">"★"</span>
                        <span class="font-semibold">{quest.points}" XP"</span>
                    </div>
                </div>

                // Submit / resubmit
                {quest.can_submit.then(|| {
                    let label = if quest.is_rejected() { "Resubmit" } else { "Get Started" };
                    view! {
                        <button
                            on:click=move |_| on_open_submission(quest_for_submit.clone())
                            class="w-full bg-gradient-to-r from-secondary to-primary hover:opacity-90
                                   text-white py-3 px-4 rounded-xl font-semibold transition-all
                                   flex items-center justify-center gap-2 shadow-lg"
                        >
                            "⚡ "{label}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes_known_colors() {
        assert_eq!(status_classes("green").1, "bg-green-500");
        assert_eq!(status_classes("yellow").1, "bg-yellow-500");
        assert_eq!(status_classes("red").1, "bg-accent");
        assert_eq!(status_classes("blue").1, "bg-primary/40");
    }

    #[test]
    fn test_status_classes_unknown_falls_back_to_gray() {
        assert_eq!(status_classes("magenta").1, "bg-gray-400");
        assert_eq!(status_classes("").1, "bg-gray-400");
    }
}
