//! TechRecruit Portal
//!
//! Student recruitment challenge portal built with Leptos (WASM).
//!
//! # Features
//!
//! - Challenges (roadmaps) composed of ordered quests
//! - Solution submission with text and file attachments
//! - Progress tracking and leaderboard standings
//! - Session persistence via browser local storage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic lives behind the remote LMS API; this
//! crate is the presentation layer.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
