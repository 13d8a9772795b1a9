//! Questionnaire response entities and the defaulting policy applied to
//! submissions before they reach storage.
//!
//! The BAT front-end sends partially-populated payloads; every optional
//! field is resolved in [`ResponseSubmission::from_draft`] so persistence
//! code only ever sees complete records.

use chrono::NaiveDateTime;
use serde_json::Value;

/// Sentinel participant identifier recorded when a submission omits one.
pub const ANONYMOUS_PARTICIPANT: &str = "anonimo";

/// Questionnaire revision recorded when a submission does not name one.
pub const DEFAULT_QUESTIONNAIRE_VERSION: &str = "BAT-v1.0";

/// Raw submission fields as they arrive from the client, before defaulting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseDraft {
    /// Participant identifier, if the client supplied one.
    pub participant_id: Option<String>,
    /// Client-side timestamp, free-form and never validated.
    pub timestamp: Option<String>,
    /// Submitted answers; any JSON value.
    pub answers: Option<Value>,
    /// Per-category scores; any JSON value.
    pub scores_by_category: Option<Value>,
    /// Number of questions presented to the participant.
    pub total_questions: Option<i32>,
    /// Questionnaire revision the answers belong to.
    pub questionnaire_version: Option<String>,
}

/// Fully-populated submission ready to be persisted.
///
/// `answers` and `scores_by_category` are opaque to the service: they are
/// stored as serialized JSON text and round-tripped without inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSubmission {
    /// Participant identifier, [`ANONYMOUS_PARTICIPANT`] when not supplied.
    pub participant_id: String,
    /// Client-side timestamp, stored verbatim (absent stays absent).
    pub timestamp: Option<String>,
    /// Submitted answers; defaults to an empty sequence.
    pub answers: Value,
    /// Per-category scores; defaults to an empty mapping.
    pub scores_by_category: Value,
    /// Number of questions presented; defaults to zero.
    pub total_questions: i32,
    /// Questionnaire revision; defaults to [`DEFAULT_QUESTIONNAIRE_VERSION`].
    pub questionnaire_version: String,
}

impl ResponseSubmission {
    /// Resolve a draft into a complete submission by filling defaults.
    #[must_use]
    pub fn from_draft(draft: ResponseDraft) -> Self {
        Self {
            participant_id: draft
                .participant_id
                .unwrap_or_else(|| ANONYMOUS_PARTICIPANT.to_owned()),
            timestamp: draft.timestamp,
            answers: draft.answers.unwrap_or_else(|| Value::Array(Vec::new())),
            scores_by_category: draft
                .scores_by_category
                .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
            total_questions: draft.total_questions.unwrap_or(0),
            questionnaire_version: draft
                .questionnaire_version
                .unwrap_or_else(|| DEFAULT_QUESTIONNAIRE_VERSION.to_owned()),
        }
    }
}

/// A stored response, as returned by the get-by-id operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    /// Server-assigned identifier, unique and immutable.
    pub id: i32,
    /// Participant identifier.
    pub participant_id: String,
    /// Client-side timestamp as submitted.
    pub timestamp: Option<String>,
    /// Decoded answers value.
    pub answers: Value,
    /// Decoded scores-by-category value.
    pub scores_by_category: Value,
    /// Number of questions presented.
    pub total_questions: i32,
    /// Questionnaire revision.
    pub questionnaire_version: String,
    /// Server insert time, independent of the client `timestamp`.
    pub created_at: NaiveDateTime,
}

/// List-view projection of a stored response.
///
/// Deliberately omits the raw answers: listings expose only scores and
/// metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSummary {
    /// Server-assigned identifier.
    pub id: i32,
    /// Participant identifier.
    pub participant_id: String,
    /// Client-side timestamp as submitted.
    pub timestamp: Option<String>,
    /// Decoded scores-by-category value.
    pub scores_by_category: Value,
    /// Number of questions presented.
    pub total_questions: i32,
    /// Questionnaire revision.
    pub questionnaire_version: String,
    /// Server insert time.
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    //! Defaulting policy coverage.

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn empty_draft_resolves_every_default() {
        let submission = ResponseSubmission::from_draft(ResponseDraft::default());

        assert_eq!(submission.participant_id, ANONYMOUS_PARTICIPANT);
        assert_eq!(submission.timestamp, None);
        assert_eq!(submission.answers, json!([]));
        assert_eq!(submission.scores_by_category, json!({}));
        assert_eq!(submission.total_questions, 0);
        assert_eq!(
            submission.questionnaire_version,
            DEFAULT_QUESTIONNAIRE_VERSION
        );
    }

    #[rstest]
    fn populated_draft_is_preserved_verbatim() {
        let draft = ResponseDraft {
            participant_id: Some("p1".to_owned()),
            timestamp: Some("2026-08-06T10:00:00".to_owned()),
            answers: Some(json!(["a", {"texto": "não concordo"}])),
            scores_by_category: Some(json!({"exaustao": 3.5})),
            total_questions: Some(2),
            questionnaire_version: Some("BAT-v2.1".to_owned()),
        };

        let submission = ResponseSubmission::from_draft(draft);

        assert_eq!(submission.participant_id, "p1");
        assert_eq!(submission.timestamp.as_deref(), Some("2026-08-06T10:00:00"));
        assert_eq!(submission.answers, json!(["a", {"texto": "não concordo"}]));
        assert_eq!(submission.scores_by_category, json!({"exaustao": 3.5}));
        assert_eq!(submission.total_questions, 2);
        assert_eq!(submission.questionnaire_version, "BAT-v2.1");
    }

    #[rstest]
    fn answers_may_be_any_json_value() {
        let draft = ResponseDraft {
            answers: Some(json!({"1": "sempre"})),
            ..ResponseDraft::default()
        };

        let submission = ResponseSubmission::from_draft(draft);

        assert_eq!(submission.answers, json!({"1": "sempre"}));
    }
}
