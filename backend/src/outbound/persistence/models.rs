//! Diesel row models for the `bat_responses` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::bat_responses;

/// Insertable row for a new questionnaire response.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bat_responses)]
pub(crate) struct NewBatResponseRow {
    pub participante_id: String,
    pub timestamp: Option<String>,
    pub respostas: String,
    pub scores: String,
    pub total_questoes: i32,
    pub versao_questionario: String,
    pub created_at: NaiveDateTime,
}

/// Full queryable row, used by the get-by-id operation.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bat_responses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct BatResponseRow {
    pub id: i32,
    pub participante_id: String,
    pub timestamp: Option<String>,
    pub respostas: String,
    pub scores: String,
    pub total_questoes: i32,
    pub versao_questionario: String,
    pub created_at: NaiveDateTime,
}

/// Summary row: every column except the raw answers.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bat_responses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct BatResponseSummaryRow {
    pub id: i32,
    pub participante_id: String,
    pub timestamp: Option<String>,
    pub scores: String,
    pub total_questoes: i32,
    pub versao_questionario: String,
    pub created_at: NaiveDateTime,
}
