//! Login Page
//!
//! Sign-in / sign-up form shown whenever no session is active. On success
//! the token/user pair is persisted and the router takes over.

use leptos::*;

use crate::api;
use crate::state::auth::AuthState;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (mode, set_mode) = create_signal(AuthMode::SignIn);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let m = mode.get();
        let n = name.get();
        let e = email.get();
        let p = password.get();

        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let result = match m {
                AuthMode::SignIn => api::login(&e, &p).await,
                AuthMode::SignUp => api::signup(&n, &e, &p).await,
            };

            match result {
                Ok(response) => {
                    auth.login(response.token, response.user);
                }
                Err(err) => {
                    set_error.set(Some(err));
                }
            }
            set_submitting.set(false);
        });
    };

    let on_forgot_password = move |_| {
        let e = email.get();
        if e.is_empty() {
            set_error.set(Some("Enter your email first".to_string()));
            return;
        }

        spawn_local(async move {
            match api::request_password_reset(&e).await {
                Ok(()) => state.show_success("Check your email for a reset link"),
                Err(err) => state.show_error(&err),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-background flex items-center justify-center p-4 relative overflow-hidden">
            <div class="bg-white/60 backdrop-blur-xl border border-gray-200/80 rounded-2xl p-8 w-full max-w-md relative shadow-2xl shadow-primary/10">
                <div class="flex items-center justify-center mb-6">
                    <div class="w-16 h-16 bg-gradient-to-br from-primary to-secondary rounded-2xl flex items-center justify-center shadow-lg shadow-primary/30">
                        <span class="text-3xl">"🎯"</span>
                    </div>
                </div>

                <h1 class="text-3xl font-bold text-text text-center mb-2">
                    {move || match mode.get() {
                        AuthMode::SignIn => "Welcome Back",
                        AuthMode::SignUp => "Create Account",
                    }}
                </h1>
                <p class="text-gray-600 text-center mb-8">
                    {move || match mode.get() {
                        AuthMode::SignIn => "Sign in to continue your journey",
                        AuthMode::SignUp => "Join the challenge and start earning XP",
                    }}
                </p>

                <form on:submit=on_submit class="space-y-6">
                    // Name (sign-up only)
                    {move || (mode.get() == AuthMode::SignUp).then(|| view! {
                        <div>
                            <label class="block text-sm font-semibold text-gray-700 mb-2">"Name"</label>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                placeholder="Enter your name"
                                required
                                class="w-full px-4 py-3 bg-white/50 border border-gray-300/80 rounded-lg text-text
                                       placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-primary/50
                                       focus:border-primary transition-all"
                            />
                        </div>
                    })}

                    // Email
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            placeholder="Enter your email"
                            required
                            class="w-full px-4 py-3 bg-white/50 border border-gray-300/80 rounded-lg text-text
                                   placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-primary/50
                                   focus:border-primary transition-all"
                        />
                    </div>

                    // Password with visibility toggle
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">"Password"</label>
                        <div class="relative">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                placeholder="Enter your password"
                                required
                                class="w-full px-4 py-3 pr-12 bg-white/50 border border-gray-300/80 rounded-lg text-text
                                       placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-primary/50
                                       focus:border-primary transition-all"
                            />
                            <button
                                type="button"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-500 hover:text-text transition-colors"
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                    </div>

                    // Inline error
                    {move || error.get().map(|msg| view! {
                        <p class="text-accent text-sm font-medium">{msg}</p>
                    })}

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-gradient-to-r from-primary to-secondary text-white py-3 rounded-lg
                               font-semibold hover:opacity-90 disabled:opacity-60 transition-all"
                    >
                        {move || match (submitting.get(), mode.get()) {
                            (true, _) => "Please wait...",
                            (false, AuthMode::SignIn) => "Sign In",
                            (false, AuthMode::SignUp) => "Sign Up",
                        }}
                    </button>
                </form>

                <div class="mt-6 text-center">
                    <button
                        on:click=on_forgot_password
                        class="text-sm text-primary hover:text-secondary font-medium transition-colors"
                    >
                        "Forgot your password?"
                    </button>
                </div>

                <div class="mt-8 pt-6 border-t border-gray-200/80 text-center">
                    <p class="text-gray-500 text-sm">
                        {move || match mode.get() {
                            AuthMode::SignIn => "Don't have an account? ",
                            AuthMode::SignUp => "Already have an account? ",
                        }}
                        <button
                            on:click=move |_| {
                                set_error.set(None);
                                set_mode.update(|m| {
                                    *m = match *m {
                                        AuthMode::SignIn => AuthMode::SignUp,
                                        AuthMode::SignUp => AuthMode::SignIn,
                                    }
                                });
                            }
                            class="font-semibold text-primary hover:text-secondary transition-colors"
                        >
                            {move || match mode.get() {
                                AuthMode::SignIn => "Sign up",
                                AuthMode::SignUp => "Sign in",
                            }}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
