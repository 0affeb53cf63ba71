//! App Root Component
//!
//! Main application component with routing, the auth gate and global
//! providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{
    Challenges, Dashboard, Leaderboard, Login, Notifications, Profile, RoadmapView,
};
use crate::state::auth::{provide_auth_state, AuthState};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global and auth state to all components
    provide_global_state();
    provide_auth_state();

    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <Router>
            <div class="min-h-screen bg-background text-text">
                // Without a session the login page renders regardless of URL
                <Show
                    when=move || auth.session.with(|s| s.is_some())
                    fallback=|| view! { <Login /> }
                >
                    <AppLayout />
                </Show>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Logged-in layout: sidebar navigation plus the routed page
#[component]
fn AppLayout() -> impl IntoView {
    view! {
        <div class="relative z-10 flex">
            <Nav />

            // Main content area
            <main class="flex-1 overflow-y-auto h-screen">
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/challenges" view=Challenges />
                    <Route path="/challenges/:id" view=RoadmapView />
                    <Route path="/leaderboard" view=Leaderboard />
                    <Route path="/notifications" view=Notifications />
                    <Route path="/profile" view=Profile />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary hover:bg-primary/90 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
