//! Pages
//!
//! Top-level page components for each route.

pub mod challenges;
pub mod dashboard;
pub mod leaderboard;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod roadmap;

pub use challenges::Challenges;
pub use dashboard::Dashboard;
pub use leaderboard::Leaderboard;
pub use login::Login;
pub use notifications::Notifications;
pub use profile::Profile;
pub use roadmap::RoadmapView;
