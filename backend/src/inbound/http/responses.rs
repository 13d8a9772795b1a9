//! Questionnaire response HTTP handlers.
//!
//! ```text
//! POST /api/bat-responses
//! GET  /api/bat-responses
//! GET  /api/bat-responses/{id}
//! ```
//!
//! The wire vocabulary keeps the legacy Portuguese field names so existing
//! clients and analysis notebooks keep working unchanged; Rust-side names
//! map onto them through explicit serde renames.

use actix_web::{HttpResponse, get, post, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{ResponseDraft, ResponseRecord, ResponseSubmission, ResponseSummary};
use crate::inbound::http::error::{ApiError, ApiResult, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Confirmation message returned after a successful submit.
pub const SAVED_MESSAGE: &str = "Respostas salvas com sucesso";

/// Message returned when no record matches the requested id.
pub const NOT_FOUND_MESSAGE: &str = "Resposta não encontrada";

/// Request payload for submitting a questionnaire response.
///
/// Every field is optional; defaults are resolved by
/// [`ResponseSubmission::from_draft`] before the record reaches storage.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct SubmitResponseRequestBody {
    /// Participant identifier; defaults to the anonymous sentinel.
    #[serde(rename = "participante_id")]
    pub participant_id: Option<String>,
    /// Client-side timestamp, stored verbatim and never validated.
    pub timestamp: Option<String>,
    /// Answer sequence; any JSON value, round-tripped untouched.
    #[serde(rename = "respostas")]
    #[schema(value_type = Option<Object>)]
    pub answers: Option<Value>,
    /// Per-category scores; any JSON value, round-tripped untouched.
    #[serde(rename = "scores_por_categoria")]
    #[schema(value_type = Option<Object>)]
    pub scores_by_category: Option<Value>,
    /// Number of questions presented to the participant.
    #[serde(rename = "total_questoes")]
    pub total_questions: Option<i32>,
    /// Questionnaire revision the answers belong to.
    #[serde(rename = "versao_questionario")]
    pub questionnaire_version: Option<String>,
}

impl From<SubmitResponseRequestBody> for ResponseDraft {
    fn from(body: SubmitResponseRequestBody) -> Self {
        Self {
            participant_id: body.participant_id,
            timestamp: body.timestamp,
            answers: body.answers,
            scores_by_category: body.scores_by_category,
            total_questions: body.total_questions,
            questionnaire_version: body.questionnaire_version,
        }
    }
}

/// Acknowledgement returned after persisting a submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponseBody {
    /// Always `true` on the 201 path.
    #[serde(rename = "sucesso")]
    pub success: bool,
    /// Human-readable confirmation.
    #[serde(rename = "mensagem")]
    pub message: String,
    /// Identifier assigned to the stored response.
    pub id: i32,
    /// Server time of the acknowledgement (RFC 3339).
    pub timestamp: String,
}

/// List-view projection of a stored response; never carries raw answers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResponseSummaryBody {
    /// Server-assigned identifier.
    pub id: i32,
    /// Participant identifier.
    #[serde(rename = "participante_id")]
    pub participant_id: String,
    /// Client-side timestamp as submitted.
    pub timestamp: Option<String>,
    /// Decoded scores-by-category value.
    #[serde(rename = "scores")]
    #[schema(value_type = Object)]
    pub scores_by_category: Value,
    /// Number of questions presented.
    #[serde(rename = "total_questoes")]
    pub total_questions: i32,
    /// Questionnaire revision.
    #[serde(rename = "versao_questionario")]
    pub questionnaire_version: String,
    /// Server insert time.
    pub created_at: String,
}

impl From<ResponseSummary> for ResponseSummaryBody {
    fn from(summary: ResponseSummary) -> Self {
        Self {
            id: summary.id,
            participant_id: summary.participant_id,
            timestamp: summary.timestamp,
            scores_by_category: summary.scores_by_category,
            total_questions: summary.total_questions,
            questionnaire_version: summary.questionnaire_version,
            created_at: summary.created_at.to_string(),
        }
    }
}

/// Full stored response returned by get-by-id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResponseDetailBody {
    /// Server-assigned identifier.
    pub id: i32,
    /// Participant identifier.
    #[serde(rename = "participante_id")]
    pub participant_id: String,
    /// Client-side timestamp as submitted.
    pub timestamp: Option<String>,
    /// Decoded answers value.
    #[serde(rename = "respostas")]
    #[schema(value_type = Object)]
    pub answers: Value,
    /// Decoded scores-by-category value.
    #[serde(rename = "scores")]
    #[schema(value_type = Object)]
    pub scores_by_category: Value,
    /// Number of questions presented.
    #[serde(rename = "total_questoes")]
    pub total_questions: i32,
    /// Questionnaire revision.
    #[serde(rename = "versao_questionario")]
    pub questionnaire_version: String,
    /// Server insert time.
    pub created_at: String,
}

impl From<ResponseRecord> for ResponseDetailBody {
    fn from(record: ResponseRecord) -> Self {
        Self {
            id: record.id,
            participant_id: record.participant_id,
            timestamp: record.timestamp,
            answers: record.answers,
            scores_by_category: record.scores_by_category,
            total_questions: record.total_questions,
            questionnaire_version: record.questionnaire_version,
            created_at: record.created_at.to_string(),
        }
    }
}

/// Listing payload: the count plus the summary rows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponsesBody {
    /// Number of stored responses.
    pub total: usize,
    /// Summaries, most recent first.
    #[serde(rename = "respostas")]
    pub responses: Vec<ResponseSummaryBody>,
}

/// Persist a questionnaire submission.
#[utoipa::path(
    post,
    path = "/api/bat-responses",
    request_body = SubmitResponseRequestBody,
    responses(
        (status = 201, description = "Response stored", body = SubmitResponseBody),
        (status = 400, description = "Missing or malformed body", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["responses"],
    operation_id = "submitResponse"
)]
#[post("/bat-responses")]
pub async fn submit_response(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitResponseRequestBody>,
) -> ApiResult<HttpResponse> {
    let submission = ResponseSubmission::from_draft(payload.into_inner().into());
    let id = state.responses.save(submission).await?;

    Ok(HttpResponse::Created().json(SubmitResponseBody {
        success: true,
        message: SAVED_MESSAGE.to_owned(),
        id,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// List stored responses, most recent first.
#[utoipa::path(
    get,
    path = "/api/bat-responses",
    responses(
        (status = 200, description = "Stored responses", body = ListResponsesBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["responses"],
    operation_id = "listResponses"
)]
#[get("/bat-responses")]
pub async fn list_responses(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ListResponsesBody>> {
    let summaries = state.responses.list_summaries().await?;
    let responses: Vec<ResponseSummaryBody> = summaries
        .into_iter()
        .map(ResponseSummaryBody::from)
        .collect();

    Ok(web::Json(ListResponsesBody {
        total: responses.len(),
        responses,
    }))
}

/// Fetch one stored response with its full answers.
#[utoipa::path(
    get,
    path = "/api/bat-responses/{id}",
    params(
        ("id" = i32, Path, description = "Identifier assigned at submit time")
    ),
    responses(
        (status = 200, description = "Stored response", body = ResponseDetailBody),
        (status = 404, description = "No record with that id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["responses"],
    operation_id = "getResponse"
)]
#[get("/bat-responses/{id}")]
pub async fn get_response(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<ResponseDetailBody>> {
    let record = state
        .responses
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(web::Json(ResponseDetailBody::from(record)))
}

#[cfg(test)]
#[path = "responses_tests.rs"]
mod tests;
