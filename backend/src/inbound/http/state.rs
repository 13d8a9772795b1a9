//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the repository port and stay testable without real storage.

use std::sync::Arc;

use crate::domain::ports::ResponseRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Persistence port for questionnaire responses.
    pub responses: Arc<dyn ResponseRepository>,
}

impl HttpState {
    /// Bundle the repository port for handler injection.
    #[must_use]
    pub fn new(responses: Arc<dyn ResponseRepository>) -> Self {
        Self { responses }
    }
}
