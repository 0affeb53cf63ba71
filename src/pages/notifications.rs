//! Notifications Page
//!
//! List of notifications with unread indicators, relative timestamps,
//! local mark-all-read and per-item dismissal.

use leptos::*;

use crate::api;
use crate::components::ListSkeleton;
use crate::state::auth::AuthState;
use crate::state::global::{GlobalState, Notification};

fn kind_icon(kind: &str) -> &'static str {
    match kind {
        "challenge" => "🎯",
        "achievement" => "🏆",
        "system" => "⚙",
        _ => "🔔",
    }
}

fn kind_classes(kind: &str, read: bool) -> &'static str {
    if read {
        return "bg-white/50 border-gray-200/50";
    }
    match kind {
        "challenge" => "bg-primary/10 border-primary/20",
        "achievement" => "bg-secondary/10 border-secondary/20",
        "system" => "bg-gray-200/80 border-gray-300/80",
        _ => "bg-white/60 border-gray-200/80",
    }
}

/// Notifications page component
#[component]
pub fn Notifications() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (notifications, set_notifications) = create_signal(Vec::<Notification>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let Some(token) = auth.token() else { return };

        spawn_local(async move {
            match api::fetch_notifications(&token).await {
                Ok(list) => {
                    let unread = list.iter().filter(|n| !n.read).count() as u32;
                    state.unread_notifications.set(unread);
                    set_notifications.set(list);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_loading.set(false);
        });
    });

    let mark_all_read = move |_| {
        set_notifications.update(|list| {
            for n in list.iter_mut() {
                n.read = true;
            }
        });
        state.unread_notifications.set(0);
    };

    let dismiss = move |id: String| {
        set_notifications.update(|list| {
            if let Some(pos) = list.iter().position(|n| n.id == id) {
                let removed = list.remove(pos);
                if !removed.read {
                    state.unread_notifications.update(|c| *c = c.saturating_sub(1));
                }
            }
        });
    };

    view! {
        <div class="p-6">
            <div class="flex items-center justify-between mb-6">
                <div>
                    <h1 class="text-3xl font-bold text-text mb-2">"Notifications"</h1>
                    <p class="text-gray-600">"Stay updated with your progress and new challenges"</p>
                </div>
                <button
                    on:click=mark_all_read
                    class="flex items-center gap-2 px-4 py-2 bg-primary/10 text-primary rounded-lg
                           hover:bg-primary/20 transition-all font-medium"
                >
                    "✓ Mark all read"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=4 /> }.into_view();
                }

                let list = notifications.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-20 bg-white/50 border border-gray-200/60 rounded-xl">
                            <span class="text-5xl block mb-4">"🔔"</span>
                            <h3 class="text-xl font-semibold text-gray-600 mb-2">"No notifications yet"</h3>
                            <p class="text-gray-500 max-w-md mx-auto">
                                "We'll notify you when there are updates on your challenges and achievements."
                            </p>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="space-y-4">
                        {list.into_iter().map(|notification| {
                            let id = notification.id.clone();
                            view! {
                                <div class=format!(
                                    "p-6 rounded-xl border transition-all hover:shadow-lg {}",
                                    kind_classes(&notification.kind, notification.read)
                                )>
                                    <div class="flex items-start gap-4">
                                        <div class="flex-shrink-0 w-10 h-10 rounded-lg bg-gray-200/80 flex items-center justify-center">
                                            <span class="text-lg">{kind_icon(&notification.kind)}</span>
                                        </div>

                                        <div class="flex-1 min-w-0">
                                            <div class="flex items-start justify-between gap-4">
                                                <div>
                                                    <h3 class=format!(
                                                        "font-semibold mb-1 {}",
                                                        if notification.read { "text-gray-600" } else { "text-text" }
                                                    )>
                                                        {notification.title.clone()}
                                                    </h3>
                                                    <p class="text-sm text-gray-600">{notification.message.clone()}</p>
                                                    <div class="flex items-center gap-4 mt-2">
                                                        <span class="text-xs text-gray-500">
                                                            {notification.relative_time()}
                                                        </span>
                                                        <span class="px-2 py-1 rounded-full text-xs font-medium bg-gray-200 text-gray-600">
                                                            {notification.kind.clone()}
                                                        </span>
                                                    </div>
                                                </div>

                                                <div class="flex items-center gap-3 flex-shrink-0">
                                                    {(!notification.read).then(|| view! {
                                                        <div class="w-2 h-2 bg-primary rounded-full animate-pulse" />
                                                    })}
                                                    <button
                                                        on:click=move |_| dismiss(id.clone())
                                                        class="text-gray-400 hover:text-accent transition-colors"
                                                    >
                                                        "✕"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes_read_wins_over_kind() {
        assert_eq!(kind_classes("challenge", true), "bg-white/50 border-gray-200/50");
        assert_eq!(kind_classes("achievement", true), "bg-white/50 border-gray-200/50");
    }

    #[test]
    fn test_kind_icon_fallback() {
        assert_eq!(kind_icon("challenge"), "🎯");
        assert_eq!(kind_icon("something-new"), "🔔");
    }
}
