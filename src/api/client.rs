//! HTTP API Client
//!
//! Functions for communicating with the remote LMS REST API. The API owns
//! all business logic; this client only consumes it.

use gloo_net::http::Request;

use crate::state::auth::AuthUser;
use crate::state::global::{LeaderboardEntry, Notification, QuestEvent, Roadmap, RoadmapProgress};

/// Remote API base URL
pub const API_BASE: &str = "https://aseam.acm.org/LMS";

/// Base URL for quest documents uploaded alongside events
pub const ROADMAP_FILES_BASE: &str = "https://aseam.acm.org/LMS/roadmaps";

/// Absolute URL for a quest's attached document
pub fn event_document_url(path: &str) -> String {
    format!("{}/{}", ROADMAP_FILES_BASE, path.trim_start_matches('/'))
}

// ============ Response Types ============

/// Error body returned by the API on non-2xx responses. Extra wire fields
/// are ignored; only the message is surfaced.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, serde::Deserialize)]
struct RoadmapListResponse {
    roadmaps: Vec<Roadmap>,
}

/// A roadmap together with its ordered quests
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RoadmapDetail {
    #[serde(flatten)]
    pub roadmap: Roadmap,
    #[serde(default)]
    pub events: Vec<QuestEvent>,
}

#[derive(Debug, serde::Deserialize)]
struct LeaderboardResponse {
    leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct NotificationListResponse {
    notifications: Vec<Notification>,
}

// ============ Auth ============

/// Sign in with email and password
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let response = Request::post(&format!("{}/auth/login", API_BASE))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Invalid email or password".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new account
pub async fn signup(name: &str, email: &str, password: &str) -> Result<LoginResponse, String> {
    #[derive(serde::Serialize)]
    struct SignupRequest {
        name: String,
        email: String,
        password: String,
    }

    let response = Request::post(&format!("{}/auth/signup", API_BASE))
        .json(&SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Sign up failed".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Request a password reset email
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct ResetRequest {
        email: String,
    }

    let response = Request::post(&format!("{}/auth/password-reset", API_BASE))
        .json(&ResetRequest {
            email: email.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Password reset request failed".to_string(),
        });
        return Err(error.error);
    }

    Ok(())
}

// ============ Roadmaps ============

/// Fetch all roadmaps with the caller's per-roadmap completion counts
pub async fn fetch_roadmaps(token: &str) -> Result<Vec<Roadmap>, String> {
    let response = Request::get(&format!("{}/roadmaps", API_BASE))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    let result: RoadmapListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.roadmaps)
}

/// Fetch a single roadmap and its quests
pub async fn fetch_roadmap(token: &str, roadmap_id: &str) -> Result<RoadmapDetail, String> {
    let response = Request::get(&format!("{}/roadmaps/{}", API_BASE, roadmap_id))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the caller's aggregate progress for one roadmap
pub async fn fetch_progress(token: &str, roadmap_id: &str) -> Result<RoadmapProgress, String> {
    let response = Request::get(&format!("{}/roadmaps/{}/progress", API_BASE, roadmap_id))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Leaderboard & Notifications ============

/// Fetch the global leaderboard
pub async fn fetch_leaderboard(token: &str) -> Result<Vec<LeaderboardEntry>, String> {
    let response = Request::get(&format!("{}/leaderboard", API_BASE))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    let result: LeaderboardResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.leaderboard)
}

/// Fetch the caller's notifications
pub async fn fetch_notifications(token: &str) -> Result<Vec<Notification>, String> {
    let response = Request::get(&format!("{}/notifications", API_BASE))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    let result: NotificationListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.notifications)
}

// ============ Submissions ============

/// Submit a solution for a quest as multipart form data. Text and file are
/// both optional on the wire but the caller must provide at least one.
pub async fn submit_event(
    token: &str,
    roadmap_id: &str,
    event_id: &str,
    text: &str,
    file: Option<web_sys::File>,
) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;

    form.append_with_str("roadmap_id", roadmap_id)
        .map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_str("event_id", event_id)
        .map_err(|_| "Failed to build form data".to_string())?;

    if !text.trim().is_empty() {
        form.append_with_str("submission_text", text)
            .map_err(|_| "Failed to build form data".to_string())?;
    }

    if let Some(file) = file {
        form.append_with_blob_and_filename("submission_file", &file, &file.name())
            .map_err(|_| "Failed to attach file".to_string())?;
    }

    let response = Request::post(&format!("{}/events/{}/submissions", API_BASE, event_id))
        .header("Authorization", &format!("Bearer {}", token))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Submission failed".to_string(),
        });
        return Err(error.error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_document_url() {
        assert_eq!(
            event_document_url("uploads/task1.pdf"),
            "https://aseam.acm.org/LMS/roadmaps/uploads/task1.pdf"
        );
        assert_eq!(
            event_document_url("/uploads/task1.pdf"),
            "https://aseam.acm.org/LMS/roadmaps/uploads/task1.pdf"
        );
    }

    #[test]
    fn test_api_error_ignores_extra_wire_fields() {
        let err: ApiError =
            serde_json::from_str(r#"{"error":"Invalid token","code":"AUTH_401"}"#).unwrap();
        assert_eq!(err.error, "Invalid token");
    }

    #[test]
    fn test_roadmap_detail_flattens_summary_fields() {
        let json = r#"{
            "id": "1",
            "title": "Web Development Fundamentals",
            "description": "HTML, CSS and JavaScript",
            "points": 500,
            "events": [
                {"id": "1-1", "title": "HTML Structure", "points": 100, "is_completed": true},
                {"id": "1-2", "title": "CSS Styling", "points": 150}
            ]
        }"#;

        let detail: RoadmapDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.roadmap.title, "Web Development Fundamentals");
        assert_eq!(detail.events.len(), 2);
        assert!(detail.events[0].is_completed);
        assert!(!detail.events[1].is_completed);
    }
}
