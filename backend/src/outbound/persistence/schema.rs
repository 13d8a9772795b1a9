//! Diesel table definition and bootstrap DDL for the response store.
//!
//! Column names match the legacy `bat_responses.db` files so databases
//! written by earlier deployments stay readable.

diesel::table! {
    /// Stored questionnaire responses.
    bat_responses (id) {
        /// Server-assigned, strictly increasing identifier.
        id -> Integer,
        /// Participant identifier, the anonymous sentinel when not supplied.
        participante_id -> Text,
        /// Client-side timestamp, stored verbatim.
        timestamp -> Nullable<Text>,
        /// Answers, serialized JSON text.
        respostas -> Text,
        /// Scores by category, serialized JSON text.
        scores -> Text,
        /// Number of questions presented.
        total_questoes -> Integer,
        /// Questionnaire revision.
        versao_questionario -> Text,
        /// Server insert time.
        created_at -> Timestamp,
    }
}

/// Idempotent bootstrap DDL, executed once before the server accepts
/// traffic. `AUTOINCREMENT` keeps identifiers strictly increasing even
/// across deletes at the SQL level.
pub(crate) const BOOTSTRAP_DDL: &str = "\
CREATE TABLE IF NOT EXISTS bat_responses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    participante_id TEXT NOT NULL,
    timestamp TEXT,
    respostas TEXT NOT NULL,
    scores TEXT NOT NULL,
    total_questoes INTEGER NOT NULL,
    versao_questionario TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
";
