use std::sync::Arc;

use quizlink_core::{EventKind, PayloadError, UpsertOutcome, parse_finished_at};
use quizlink_storage::{StorageBackend, UserResponseStore};
use serde_json::{Value, json};

use crate::{IngestService, ServiceError, WebhookOutcome};

fn memory_service() -> IngestService {
    IngestService::new(Arc::new(StorageBackend::new_memory()))
}

fn webhook(event_name: &str, facebook_id: &str, quiz_id: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "event_name": event_name,
        "data": {
            "lead_form_questions": [
                {"question": "Email", "answers": [{"answer": "lead@example.com"}]},
                {"question": "Facebook ID", "answers": [{"answer": facebook_id}]}
            ],
            "result_url": format!("https://quiz.example/r/{quiz_id}"),
            "finished_at": "2024-01-01T00:00:00",
            "id": quiz_id
        }
    }))
    .unwrap()
}

async fn rows_for(service: &IngestService, facebook_id: &str) -> Vec<quizlink_core::UserResponse> {
    service.storage().find_by_facebook_id(facebook_id).await.unwrap()
}

#[tokio::test]
async fn save_profile_creates_one_row_with_likes() {
    let service = memory_service();
    let likes = json!([{"name": "Rust", "id": "1"}, {"name": "Chess", "id": "2"}, "opaque"]);
    let body = serde_json::to_vec(&json!({
        "id": "1001", "name": "Ada", "email": "ada@example.com", "likes": likes
    }))
    .unwrap();

    let user_id = service.save_profile(&body).await.unwrap();

    let rows = rows_for(&service, "1001").await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, user_id);
    assert_eq!(rows[0].facebook_likes, Some(likes));
    assert_eq!(rows[0].scoreapp_data, None);
}

#[tokio::test]
async fn save_profile_rejects_empty_bodies() {
    let service = memory_service();
    for body in [&b""[..], &b"{}"[..], &b"not json"[..], &b"[]"[..]] {
        let err = service.save_profile(body).await.unwrap_err();
        assert!(matches!(err, ServiceError::Payload(PayloadError::Empty)), "body {body:?}");
    }
}

#[tokio::test]
async fn save_profile_reports_unconfigured_database() {
    let service = IngestService::new(Arc::new(StorageBackend::new_postgres(None)));
    let err = service.save_profile(br#"{"id": "1"}"#).await.unwrap_err();
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn unknown_event_is_ignored_without_writes() {
    let service = memory_service();
    let outcome = service.handle_webhook(&webhook("QUIZ_STARTED", "1001", "q")).await.unwrap();
    assert_eq!(outcome, WebhookOutcome::Ignored { event_name: Some("QUIZ_STARTED".to_owned()) });
    assert!(rows_for(&service, "1001").await.is_empty());
}

#[tokio::test]
async fn ignored_event_does_not_need_storage() {
    let service = IngestService::new(Arc::new(StorageBackend::new_postgres(None)));
    let outcome = service.handle_webhook(br#"{"event_name": "PAGE_VIEW"}"#).await.unwrap();
    assert!(matches!(outcome, WebhookOutcome::Ignored { .. }));
}

#[tokio::test]
async fn quiz_finished_for_unseen_id_inserts_quiz_only_row() {
    let service = memory_service();
    let body = br#"{"event_name":"QUIZ_FINISHED","data":{"lead_form_questions":[{"question":"Facebook ID","answers":[{"answer":"1001"}]}],"result_url":"http://x/r","finished_at":"2024-01-01T00:00:00","id":"quiz42"}}"#;

    let outcome = service.handle_webhook(body).await.unwrap();
    let WebhookOutcome::Stored { kind, facebook_id, outcome } = outcome else {
        panic!("expected stored outcome");
    };
    assert_eq!(kind, EventKind::QuizFinished);
    assert_eq!(facebook_id, "1001");
    assert!(matches!(outcome, UpsertOutcome::Inserted(_)));

    let rows = rows_for(&service, "1001").await;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.scoreapp_quiz_id.as_deref(), Some("quiz42"));
    assert_eq!(row.scoreapp_result_url.as_deref(), Some("http://x/r"));
    assert_eq!(row.scoreapp_finished_at, Some(parse_finished_at("2024-01-01T00:00:00").unwrap()));
    assert_eq!(row.scoreapp_data, Some(serde_json::from_slice::<Value>(body).unwrap()));
    assert_eq!(row.facebook_name, None);
    assert_eq!(row.facebook_email, None);
    assert_eq!(row.facebook_likes, None);
}

#[tokio::test]
async fn second_webhook_overwrites_quiz_fields_and_keeps_profile() {
    let service = memory_service();
    service
        .save_profile(br#"{"id": "2002", "name": "Grace", "email": "g@example.com", "likes": [1]}"#)
        .await
        .unwrap();

    service.handle_webhook(&webhook("QUIZ_FINISHED", "2002", "first")).await.unwrap();
    let outcome = service.handle_webhook(&webhook("QUIZ_FINISHED", "2002", "second")).await.unwrap();
    assert!(matches!(outcome, WebhookOutcome::Stored { outcome: UpsertOutcome::Updated(_), .. }));

    let rows = rows_for(&service, "2002").await;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.scoreapp_quiz_id.as_deref(), Some("second"));
    assert_eq!(row.scoreapp_result_url.as_deref(), Some("https://quiz.example/r/second"));
    assert_eq!(row.facebook_name.as_deref(), Some("Grace"));
    assert_eq!(row.facebook_email.as_deref(), Some("g@example.com"));
    assert_eq!(row.facebook_likes, Some(json!([1])));
}

#[tokio::test]
async fn lead_signed_up_clears_result_url_and_finished_at() {
    let service = memory_service();
    service.handle_webhook(&webhook("QUIZ_FINISHED", "3003", "q1")).await.unwrap();
    service.handle_webhook(&webhook("LEAD_SIGNED_UP", "3003", "q1")).await.unwrap();

    let rows = rows_for(&service, "3003").await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].scoreapp_result_url, None);
    assert_eq!(rows[0].scoreapp_finished_at, None);
    assert_eq!(rows[0].scoreapp_quiz_id.as_deref(), Some("q1"));
}

#[tokio::test]
async fn missing_facebook_id_is_rejected_without_writes() {
    let service = memory_service();
    let body = serde_json::to_vec(&json!({
        "event_name": "QUIZ_FINISHED",
        "data": {"lead_form_questions": [{"question": "Name", "answers": [{"answer": "Ada"}]}]}
    }))
    .unwrap();

    let err = service.handle_webhook(&body).await.unwrap_err();
    assert!(matches!(err, ServiceError::Payload(PayloadError::MissingFacebookId)));
    let StorageBackend::Memory(memory) = service.storage().as_ref() else {
        panic!("expected memory backend");
    };
    assert!(memory.is_empty().await);
}

#[tokio::test]
async fn invalid_finished_at_is_rejected() {
    let service = memory_service();
    let body = serde_json::to_vec(&json!({
        "event_name": "QUIZ_FINISHED",
        "data": {
            "lead_form_questions": [{"question": "Facebook ID", "answers": [{"answer": "4004"}]}],
            "finished_at": "not a date"
        }
    }))
    .unwrap();
    let err = service.handle_webhook(&body).await.unwrap_err();
    assert!(matches!(err, ServiceError::Payload(PayloadError::InvalidTimestamp(_))));
    assert!(rows_for(&service, "4004").await.is_empty());
}

#[tokio::test]
async fn webhook_rejects_empty_body() {
    let service = memory_service();
    let err = service.handle_webhook(b"").await.unwrap_err();
    assert!(matches!(err, ServiceError::Payload(PayloadError::Empty)));
}

#[tokio::test]
async fn tracked_webhook_reports_unconfigured_database() {
    let service = IngestService::new(Arc::new(StorageBackend::new_postgres(None)));
    let err = service.handle_webhook(&webhook("QUIZ_FINISHED", "5005", "q")).await.unwrap_err();
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn concurrent_replays_for_unseen_id_create_one_row() {
    let service = Arc::new(memory_service());
    let body = webhook("QUIZ_FINISHED", "6006", "replay");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        let body = body.clone();
        handles.push(tokio::spawn(async move { service.handle_webhook(&body).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(rows_for(&service, "6006").await.len(), 1);
}

#[tokio::test]
async fn date_only_finished_at_is_stored() {
    let service = memory_service();
    let body = serde_json::to_vec(&json!({
        "event_name": "QUIZ_FINISHED",
        "data": {
            "lead_form_questions": [{"question": "Facebook ID", "answers": [{"answer": "7007"}]}],
            "finished_at": "2024-01-01",
            "id": "q"
        }
    }))
    .unwrap();

    service.handle_webhook(&body).await.unwrap();

    let rows = rows_for(&service, "7007").await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].scoreapp_finished_at, Some(parse_finished_at("2024-01-01 00:00").unwrap()));
}

#[tokio::test]
async fn finished_at_offset_keeps_wall_clock_time() {
    let service = memory_service();
    let body = serde_json::to_vec(&json!({
        "event_name": "QUIZ_FINISHED",
        "data": {
            "lead_form_questions": [{"question": "Facebook ID", "answers": [{"answer": "8008"}]}],
            "finished_at": "2024-01-01 12:30:00+02"
        }
    }))
    .unwrap();

    service.handle_webhook(&body).await.unwrap();

    let rows = rows_for(&service, "8008").await;
    assert_eq!(rows[0].scoreapp_finished_at, Some(parse_finished_at("2024-01-01T12:30:00").unwrap()));
}
