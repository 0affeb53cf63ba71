//! Global Application State
//!
//! Domain DTOs mirrored from the remote API plus reactive state shared
//! across pages (toasts, unread notification counter).

use leptos::*;

/// Points needed to advance one level.
pub const POINTS_PER_LEVEL: u32 = 250;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Unread notification count shown in the sidebar badge
    pub unread_notifications: RwSignal<u32>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Challenge (roadmap) summary from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Roadmap {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_count: u32,
    #[serde(default)]
    pub total_count: u32,
}

impl Roadmap {
    /// Percentage of quests completed, 0 when the roadmap has no quests.
    pub fn progress_percentage(&self) -> u8 {
        progress_percentage(self.completed_count, self.total_count)
    }
}

/// A single quest (event) within a roadmap
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct QuestEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub points_earned: u32,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub can_submit: bool,
    #[serde(default)]
    pub submission_status: Option<String>,
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub status_color: String,
    #[serde(default)]
    pub event_image: Option<String>,
}

impl QuestEvent {
    /// A rejected submission may be re-submitted with a different label.
    pub fn is_rejected(&self) -> bool {
        self.submission_status.as_deref() == Some("rejected")
    }
}

/// Aggregate progress for a user on one roadmap
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct RoadmapProgress {
    #[serde(default)]
    pub completed_count: u32,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub points: u32,
}

impl RoadmapProgress {
    pub fn percentage(&self) -> u8 {
        progress_percentage(self.completed_count, self.total_count)
    }

    pub fn remaining(&self) -> u32 {
        self.total_count.saturating_sub(self.completed_count)
    }
}

/// One row of the leaderboard
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub rank: u32,
}

/// Notification from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    /// "challenge", "achievement" or "system"
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub read: bool,
    /// Unix timestamp in milliseconds
    #[serde(default)]
    pub timestamp: i64,
}

impl Notification {
    /// Relative age against the current wall clock.
    pub fn relative_time(&self) -> String {
        format_relative_time(self.timestamp, chrono::Utc::now().timestamp_millis())
    }
}

/// Percentage of `completed` out of `total`, rounded to the nearest integer
/// and capped at 100. An empty total yields 0 rather than dividing by zero.
pub fn progress_percentage(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round().min(100.0) as u8
}

/// Stable sort placing completed items first. Items with equal completion
/// status keep their original relative order.
pub fn sort_completed_first<T>(items: &mut [T], is_completed: impl Fn(&T) -> bool) {
    items.sort_by_key(|item| !is_completed(item));
}

/// Position within the current level for a running point total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelProgress {
    /// XP earned into the current level
    pub into_level: u32,
    /// Percent of the way to the next level
    pub percent: u8,
    /// XP still needed to reach the next level
    pub to_next: u32,
}

/// Levels advance every [`POINTS_PER_LEVEL`] XP.
pub fn level_progress(total_points: u32) -> LevelProgress {
    let into_level = total_points % POINTS_PER_LEVEL;
    LevelProgress {
        into_level,
        percent: progress_percentage(into_level, POINTS_PER_LEVEL),
        to_next: POINTS_PER_LEVEL - into_level,
    }
}

/// "Just now" under an hour, then whole hours, then whole days.
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let hours = (now_ms - timestamp_ms) / (1000 * 60 * 60);
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        unread_notifications: create_rw_signal(0),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(id: &str, completed: bool) -> QuestEvent {
        QuestEvent {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            points: 0,
            points_earned: 0,
            order: 0,
            is_completed: completed,
            can_submit: false,
            submission_status: None,
            status_text: String::new(),
            status_color: String::new(),
            event_image: None,
        }
    }

    #[test]
    fn test_progress_percentage_zero_total() {
        assert_eq!(progress_percentage(0, 0), 0);
        assert_eq!(progress_percentage(5, 0), 0);
    }

    #[test]
    fn test_progress_percentage_rounds() {
        assert_eq!(progress_percentage(1, 3), 33);
        assert_eq!(progress_percentage(2, 3), 67);
        assert_eq!(progress_percentage(3, 4), 75);
        assert_eq!(progress_percentage(4, 4), 100);
    }

    #[test]
    fn test_progress_percentage_caps_at_100() {
        // The API promises completed <= total, but a stale cache can break
        // that; the bar must not overflow
        assert_eq!(progress_percentage(7, 4), 100);
        assert_eq!(progress_percentage(300, 100), 100);
    }

    #[test]
    fn test_sort_completed_first_is_stable() {
        let mut quests = vec![
            quest("a", false),
            quest("b", true),
            quest("c", false),
            quest("d", true),
            quest("e", false),
        ];
        sort_completed_first(&mut quests, |q| q.is_completed);

        let order: Vec<&str> = quests.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(order, ["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_sort_completed_first_all_equal_keeps_order() {
        let mut quests = vec![quest("a", false), quest("b", false), quest("c", false)];
        sort_completed_first(&mut quests, |q| q.is_completed);

        let order: Vec<&str> = quests.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn test_level_progress() {
        let lp = level_progress(2847);
        assert_eq!(lp.into_level, 97);
        assert_eq!(lp.percent, 39);
        assert_eq!(lp.to_next, 153);

        let fresh = level_progress(0);
        assert_eq!(fresh.into_level, 0);
        assert_eq!(fresh.percent, 0);
        assert_eq!(fresh.to_next, POINTS_PER_LEVEL);
    }

    #[test]
    fn test_format_relative_time() {
        let hour = 1000 * 60 * 60;
        assert_eq!(format_relative_time(hour, hour), "Just now");
        assert_eq!(format_relative_time(0, hour * 3), "3h ago");
        assert_eq!(format_relative_time(0, hour * 24), "1d ago");
        assert_eq!(format_relative_time(0, hour * 50), "2d ago");
    }

    #[test]
    fn test_roadmap_progress_remaining() {
        let progress = RoadmapProgress {
            completed_count: 3,
            total_count: 5,
            points: 450,
        };
        assert_eq!(progress.remaining(), 2);
        assert_eq!(progress.percentage(), 60);
    }
}
