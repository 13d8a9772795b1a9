//! HTTP inbound adapter exposing the questionnaire REST endpoints.

pub mod error;
pub mod health;
pub mod responses;
pub mod state;

pub use error::{ApiError, ApiResult};
