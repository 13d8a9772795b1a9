//! SQLite-backed `ResponseRepository` implementation using Diesel.
//!
//! Each operation establishes a short-lived connection on the blocking
//! thread pool and drops it before returning; the handle itself holds only
//! the database path, so there is no shared mutable state between requests
//! beyond the durable file. Concurrent writers are serialized by SQLite.

use async_trait::async_trait;
use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use serde_json::Value;

use crate::domain::ports::{ResponseRepository, ResponseRepositoryError};
use crate::domain::{ResponseRecord, ResponseSubmission, ResponseSummary};

use super::models::{BatResponseRow, BatResponseSummaryRow, NewBatResponseRow};
use super::schema::{BOOTSTRAP_DDL, bat_responses};

/// Diesel/SQLite adapter for the response repository port.
#[derive(Debug, Clone)]
pub struct SqliteResponseRepository {
    database_path: String,
}

impl SqliteResponseRepository {
    /// Create a repository handle for the given database file.
    ///
    /// No connection is opened here; call [`Self::init_schema`] before
    /// serving traffic.
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// Path of the backing database file.
    #[must_use]
    pub fn database_path(&self) -> &str {
        &self.database_path
    }

    /// Create the `bat_responses` table when absent. Safe to call
    /// repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseRepositoryError::Connection`] when the database
    /// file cannot be opened and [`ResponseRepositoryError::Query`] when
    /// the DDL fails.
    pub async fn init_schema(&self) -> Result<(), ResponseRepositoryError> {
        self.run(|conn| {
            conn.batch_execute(BOOTSTRAP_DDL)
                .map_err(map_diesel_error)
        })
        .await
    }

    /// Run one storage operation on a fresh connection on the blocking
    /// thread pool.
    async fn run<T, F>(&self, operation: F) -> Result<T, ResponseRepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, ResponseRepositoryError> + Send + 'static,
    {
        let database_path = self.database_path.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            let mut conn = establish(&database_path)?;
            operation(&mut conn)
        })
        .await;

        outcome
            .map_err(|err| ResponseRepositoryError::query(format!("blocking task failed: {err}")))?
    }
}

fn establish(database_path: &str) -> Result<SqliteConnection, ResponseRepositoryError> {
    SqliteConnection::establish(database_path)
        .map_err(|err| ResponseRepositoryError::connection(err.to_string()))
}

fn map_diesel_error(err: diesel::result::Error) -> ResponseRepositoryError {
    ResponseRepositoryError::query(err.to_string())
}

fn encode_json(field_name: &str, value: &Value) -> Result<String, ResponseRepositoryError> {
    // serde_json leaves non-ASCII characters unescaped, so the stored text
    // round-trips Unicode content byte-for-byte.
    serde_json::to_string(value)
        .map_err(|err| ResponseRepositoryError::query(format!("encode {field_name}: {err}")))
}

fn decode_json(field_name: &str, text: &str) -> Result<Value, ResponseRepositoryError> {
    serde_json::from_str(text)
        .map_err(|err| ResponseRepositoryError::query(format!("decode {field_name}: {err}")))
}

fn row_to_record(row: BatResponseRow) -> Result<ResponseRecord, ResponseRepositoryError> {
    Ok(ResponseRecord {
        id: row.id,
        participant_id: row.participante_id,
        timestamp: row.timestamp,
        answers: decode_json("respostas", &row.respostas)?,
        scores_by_category: decode_json("scores", &row.scores)?,
        total_questions: row.total_questoes,
        questionnaire_version: row.versao_questionario,
        created_at: row.created_at,
    })
}

fn row_to_summary(row: BatResponseSummaryRow) -> Result<ResponseSummary, ResponseRepositoryError> {
    Ok(ResponseSummary {
        id: row.id,
        participant_id: row.participante_id,
        timestamp: row.timestamp,
        scores_by_category: decode_json("scores", &row.scores)?,
        total_questions: row.total_questoes,
        questionnaire_version: row.versao_questionario,
        created_at: row.created_at,
    })
}

#[async_trait]
impl ResponseRepository for SqliteResponseRepository {
    async fn save(&self, submission: ResponseSubmission) -> Result<i32, ResponseRepositoryError> {
        let row = NewBatResponseRow {
            participante_id: submission.participant_id,
            timestamp: submission.timestamp,
            respostas: encode_json("respostas", &submission.answers)?,
            scores: encode_json("scores", &submission.scores_by_category)?,
            total_questoes: submission.total_questions,
            versao_questionario: submission.questionnaire_version,
            created_at: Utc::now().naive_utc(),
        };

        self.run(move |conn| {
            diesel::insert_into(bat_responses::table)
                .values(&row)
                .returning(bat_responses::id)
                .get_result::<i32>(conn)
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn list_summaries(&self) -> Result<Vec<ResponseSummary>, ResponseRepositoryError> {
        let rows = self
            .run(|conn| {
                bat_responses::table
                    .order((
                        bat_responses::created_at.desc(),
                        bat_responses::id.desc(),
                    ))
                    .select(BatResponseSummaryRow::as_select())
                    .load::<BatResponseSummaryRow>(conn)
                    .map_err(map_diesel_error)
            })
            .await?;

        rows.into_iter().map(row_to_summary).collect()
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ResponseRecord>, ResponseRepositoryError> {
        let row = self
            .run(move |conn| {
                bat_responses::table
                    .find(id)
                    .select(BatResponseRow::as_select())
                    .first::<BatResponseRow>(conn)
                    .optional()
                    .map_err(map_diesel_error)
            })
            .await?;

        row.map(row_to_record).transpose()
    }
}
