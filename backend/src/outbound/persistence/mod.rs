//! SQLite persistence adapter for questionnaire responses.

mod models;
mod schema;
mod sqlite_response_repository;

pub use sqlite_response_repository::SqliteResponseRepository;
