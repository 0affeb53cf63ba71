//! Navigation Component
//!
//! Sidebar navigation with brand, route links, unread badge and logout.

use leptos::*;
use leptos_router::*;

use crate::state::auth::AuthState;
use crate::state::global::GlobalState;

/// Sidebar navigation component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-white/80 backdrop-blur-md border-r border-gray-200/80 w-64 min-h-screen p-6 flex flex-col">
            // Logo and brand
            <div class="flex items-center gap-3 mb-10">
                <div class="w-10 h-10 bg-gradient-to-br from-primary to-secondary rounded-lg flex items-center justify-center shadow-md shadow-primary/20">
                    <span class="text-xl">"🎯"</span>
                </div>
                <h1 class="text-xl font-bold text-text">"TechRecruit"</h1>
            </div>

            // Main navigation links
            <div class="flex-grow space-y-2">
                // Only the root link matches exactly; section links stay
                // highlighted on nested routes like /challenges/:id
                <NavLink href="/" label="Dashboard" icon="🏠" exact=true />
                <NavLink href="/challenges" label="Challenges" icon="🎯" />
                <NavLink href="/leaderboard" label="Leaderboard" icon="🏆" />
            </div>

            // Secondary links and logout
            <div class="space-y-2 border-t border-gray-200/80 pt-6">
                <A
                    href="/notifications"
                    class="relative w-full flex items-center gap-3 px-4 py-3 rounded-lg text-gray-600 hover:text-primary hover:bg-primary/5 transition-colors"
                    active_class="bg-primary/10 text-primary font-semibold"
                >
                    <span class="w-5 text-center">"🔔"</span>
                    <span class="font-medium">"Notifications"</span>
                    {move || {
                        let unread = state.unread_notifications.get();
                        (unread > 0).then(|| view! {
                            <span class="absolute right-3 top-1/2 -translate-y-1/2 bg-accent text-white text-xs font-bold rounded-full w-5 h-5 flex items-center justify-center">
                                {unread}
                            </span>
                        })
                    }}
                </A>

                <NavLink href="/profile" label="Profile" icon="👤" />

                <button
                    on:click=move |_| auth.logout()
                    class="w-full flex items-center gap-3 px-4 py-3 rounded-lg text-accent hover:text-white hover:bg-accent transition-colors"
                >
                    <span class="w-5 text-center">"🚪"</span>
                    <span class="font-medium">"Logout"</span>
                </button>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    #[prop(default = false)]
    exact: bool,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="w-full flex items-center gap-3 px-4 py-3 rounded-lg text-gray-600 hover:text-primary hover:bg-primary/5 transition-colors"
            active_class="bg-primary/10 text-primary font-semibold"
            exact=exact
        >
            <span class="w-5 text-center">{icon}</span>
            <span class="font-medium">{label}</span>
        </A>
    }
}
