//! State Management
//!
//! Global application state and the persistent auth session.

pub mod auth;
pub mod global;

pub use auth::{provide_auth_state, AuthState, AuthUser, Session};
pub use global::{provide_global_state, GlobalState, Notification, QuestEvent, Roadmap};
