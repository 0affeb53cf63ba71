//! UI Components
//!
//! Reusable Leptos components for the portal.

pub mod challenge_card;
pub mod loading;
pub mod nav;
pub mod progress_bar;
pub mod submission_modal;
pub mod toast;

pub use challenge_card::ChallengeCard;
pub use loading::{CardSkeleton, ListSkeleton, LoadingOverlay};
pub use nav::Nav;
pub use progress_bar::ProgressBar;
pub use submission_modal::SubmissionModal;
pub use toast::Toast;
