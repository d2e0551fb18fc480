//! Test utilities and module declarations for storage tests.

use quizlink_core::{ProfilePayload, QuizResult};
use serde_json::json;

pub fn create_test_profile(facebook_id: &str) -> ProfilePayload {
    ProfilePayload {
        facebook_id: Some(facebook_id.to_owned()),
        name: Some("Test User".to_owned()),
        email: Some("test@example.com".to_owned()),
        likes: json!([{"id": "1", "name": "Rust"}, {"id": "2", "name": "Chess"}]),
    }
}

pub fn create_test_quiz_result(facebook_id: &str, quiz_id: &str) -> QuizResult {
    QuizResult {
        facebook_id: facebook_id.to_owned(),
        raw_payload: json!({"event_name": "QUIZ_FINISHED", "data": {"id": quiz_id}}),
        quiz_id: Some(quiz_id.to_owned()),
        result_url: Some(format!("https://quiz.example/results/{quiz_id}")),
        finished_at: None,
    }
}
