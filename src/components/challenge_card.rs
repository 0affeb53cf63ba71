//! Challenge Card Component
//!
//! Summary card for one roadmap in the challenges grid.

use leptos::*;
use leptos_router::*;

use crate::components::ProgressBar;
use crate::state::global::Roadmap;

/// Badge classes for a difficulty label
fn difficulty_classes(difficulty: &str) -> &'static str {
    match difficulty {
        "easy" => "text-green-600 bg-green-500/20 border-green-500/30",
        "medium" => "text-secondary bg-secondary/20 border-secondary/30",
        "hard" => "text-accent bg-accent/20 border-accent/30",
        _ => "text-gray-500 bg-gray-500/20 border-gray-500/30",
    }
}

/// Badge classes for a category label
fn category_classes(category: &str) -> &'static str {
    match category {
        "Development" => "text-primary bg-primary/20",
        "Algorithms" => "text-purple-500 bg-purple-500/20",
        _ => "text-gray-500 bg-gray-500/20",
    }
}

/// Clickable roadmap summary card
#[component]
pub fn ChallengeCard(roadmap: Roadmap) -> impl IntoView {
    let percent = roadmap.progress_percentage();
    let href = format!("/challenges/{}", roadmap.id);

    view! {
        <A
            href=href
            class="block bg-white/60 backdrop-blur-sm border border-gray-200/80 rounded-xl p-6
                   hover:border-primary/50 transition-all duration-300 cursor-pointer group
                   transform hover:scale-[1.02]"
        >
            <div class="flex items-start justify-between mb-4">
                <div class="flex-1">
                    <h3 class="text-xl font-semibold text-text mb-2 group-hover:text-primary transition-colors">
                        {roadmap.title.clone()}
                    </h3>
                    <p class="text-gray-500 text-sm mb-3">{roadmap.description.clone()}</p>
                    <div class="flex items-center gap-2 mb-3">
                        <span class=format!(
                            "px-2 py-1 rounded-full text-xs font-medium border {}",
                            difficulty_classes(&roadmap.difficulty)
                        )>
                            {roadmap.difficulty.clone()}
                        </span>
                        <span class=format!(
                            "px-2 py-1 rounded-full text-xs font-medium {}",
                            category_classes(&roadmap.category)
                        )>
                            {roadmap.category.clone()}
                        </span>
                    </div>
                </div>
                {roadmap.completed.then(|| view! {
                    <span class="text-2xl flex-shrink-0" title="Completed">"🏆"</span>
                })}
            </div>

            // Completion bar
            <div class="mb-4">
                <div class="flex justify-between text-sm text-gray-500 mb-1">
                    <span>"Progress"</span>
                    <span>{percent}"%"</span>
                </div>
                <ProgressBar percent=Signal::derive(move || percent) />
            </div>

            <div class="flex items-center justify-between text-sm text-gray-500">
                <div class="flex items-center gap-4">
                    <span class="flex items-center gap-1">
                        <span class="text-secondary">"★"</span>
                        {roadmap.points}" pts"
                    </span>
                    <span>{roadmap.total_count}" tasks"</span>
                </div>
                <span>{roadmap.completed_count}" / "{roadmap.total_count}</span>
            </div>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_classes_known_and_fallback() {
        assert_eq!(difficulty_classes("easy"), "text-green-600 bg-green-500/20 border-green-500/30");
        assert_eq!(difficulty_classes("medium"), "text-secondary bg-secondary/20 border-secondary/30");
        assert_eq!(difficulty_classes("hard"), "text-accent bg-accent/20 border-accent/30");
        assert_eq!(difficulty_classes("expert"), "text-gray-500 bg-gray-500/20 border-gray-500/30");
    }

    #[test]
    fn test_category_classes_known_and_fallback() {
        assert_eq!(category_classes("Development"), "text-primary bg-primary/20");
        assert_eq!(category_classes("Algorithms"), "text-purple-500 bg-purple-500/20");
        assert_eq!(category_classes("Security"), "text-gray-500 bg-gray-500/20");
    }
}
