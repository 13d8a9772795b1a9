//! Port for questionnaire response persistence.
//!
//! Inbound adapters (HTTP handlers) depend on this trait object so they can
//! be exercised against mocks without touching a real database file.

use async_trait::async_trait;

use crate::domain::{ResponseRecord, ResponseSubmission, ResponseSummary};

/// Errors raised by response repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseRepositoryError {
    /// Repository connection could not be established.
    #[error("response store connection failed: {message}")]
    Connection {
        /// Underlying driver message.
        message: String,
    },

    /// Query or mutation failed during execution.
    #[error("response store query failed: {message}")]
    Query {
        /// Underlying driver message.
        message: String,
    },
}

impl ResponseRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing and reading stored questionnaire responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Persist a complete submission and return the assigned identifier.
    ///
    /// Identifiers are strictly increasing across the lifetime of the
    /// backing store; an id is never reassigned.
    async fn save(&self, submission: ResponseSubmission) -> Result<i32, ResponseRepositoryError>;

    /// List stored responses, most recent first, projected to summaries.
    async fn list_summaries(&self) -> Result<Vec<ResponseSummary>, ResponseRepositoryError>;

    /// Fetch a full response by identifier, `None` when no record matches.
    async fn find_by_id(&self, id: i32)
    -> Result<Option<ResponseRecord>, ResponseRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn constructors_accept_str_for_message_fields() {
        let connection = ResponseRepositoryError::connection("unable to open database file");
        let query = ResponseRepositoryError::query("no such table: bat_responses");

        assert!(matches!(
            connection,
            ResponseRepositoryError::Connection { .. }
        ));
        assert!(
            connection
                .to_string()
                .contains("unable to open database file")
        );
        assert!(matches!(query, ResponseRepositoryError::Query { .. }));
        assert!(query.to_string().contains("no such table"));
    }
}
