//! Tests for the response handlers against a mocked repository.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockResponseRepository, ResponseRepositoryError};
use crate::domain::{ANONYMOUS_PARTICIPANT, DEFAULT_QUESTIONNAIRE_VERSION};
use crate::inbound::http::error::{json_error_handler, path_error_handler};

fn test_app(
    repository: MockResponseRepository,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(repository));
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .service(submit_response)
                .service(list_responses)
                .service(get_response),
        )
}

fn summary_fixture(id: i32) -> ResponseSummary {
    ResponseSummary {
        id,
        participant_id: "p1".to_owned(),
        timestamp: Some("2026-08-06T10:00:00".to_owned()),
        scores_by_category: json!({"exaustao": 3.5}),
        total_questions: 2,
        questionnaire_version: DEFAULT_QUESTIONNAIRE_VERSION.to_owned(),
        created_at: NaiveDate::from_ymd_opt(2026, 8, 6)
            .expect("valid date")
            .and_hms_opt(10, 0, 0)
            .expect("valid time"),
    }
}

#[actix_web::test]
async fn submit_resolves_defaults_before_saving() {
    let mut repository = MockResponseRepository::new();
    repository
        .expect_save()
        .withf(|submission| {
            submission.participant_id == ANONYMOUS_PARTICIPANT
                && submission.timestamp.is_none()
                && submission.answers == json!([])
                && submission.scores_by_category == json!({})
                && submission.total_questions == 0
                && submission.questionnaire_version == DEFAULT_QUESTIONNAIRE_VERSION
        })
        .returning(|_| Ok(1));
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/bat-responses")
        .set_json(json!({}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("sucesso"), Some(&Value::from(true)));
    assert_eq!(body.get("mensagem"), Some(&Value::from(SAVED_MESSAGE)));
    assert_eq!(body.get("id"), Some(&Value::from(1)));
    assert!(body.get("timestamp").is_some());
}

#[actix_web::test]
async fn submit_without_body_is_rejected_with_the_envelope() {
    let mut repository = MockResponseRepository::new();
    repository.expect_save().never();
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/bat-responses")
        .insert_header(("content-type", "application/json"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("erro"),
        Some(&Value::from("Dados não fornecidos"))
    );
}

#[actix_web::test]
async fn storage_failure_surfaces_the_message_as_500() {
    let mut repository = MockResponseRepository::new();
    repository
        .expect_save()
        .returning(|_| Err(ResponseRepositoryError::query("disk I/O error")));
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/bat-responses")
        .set_json(json!({"participante_id": "p1"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = actix_test::read_body_json(response).await;
    assert!(
        body.get("erro")
            .and_then(Value::as_str)
            .is_some_and(|message| message.contains("disk I/O error"))
    );
}

#[actix_web::test]
async fn listing_projects_summaries_without_answers() {
    let mut repository = MockResponseRepository::new();
    repository
        .expect_list_summaries()
        .returning(|| Ok(vec![summary_fixture(2), summary_fixture(1)]));
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/bat-responses")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("total"), Some(&Value::from(2)));
    let entries = body
        .get("respostas")
        .and_then(Value::as_array)
        .expect("summary array");
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert!(entry.get("respostas").is_none());
        assert_eq!(entry.get("scores"), Some(&json!({"exaustao": 3.5})));
    }
}

#[actix_web::test]
async fn unknown_id_maps_to_not_found() {
    let mut repository = MockResponseRepository::new();
    repository.expect_find_by_id().returning(|_| Ok(None));
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/bat-responses/999")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("erro"), Some(&Value::from(NOT_FOUND_MESSAGE)));
}

#[actix_web::test]
async fn non_integer_id_segment_is_a_client_error() {
    let mut repository = MockResponseRepository::new();
    repository.expect_find_by_id().never();
    let app = actix_test::init_service(test_app(repository)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/bat-responses/abc")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("erro"), Some(&Value::from("Identificador inválido")));
}
