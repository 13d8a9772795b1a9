//! Domain entities and ports for questionnaire responses.
//!
//! Types here are transport and storage agnostic: inbound adapters build a
//! [`ResponseDraft`] from the wire payload, the defaulting step turns it
//! into a complete [`ResponseSubmission`], and outbound adapters persist it
//! behind the [`ports::ResponseRepository`] port.

pub mod ports;
pub mod response;

pub use response::{
    ANONYMOUS_PARTICIPANT, DEFAULT_QUESTIONNAIRE_VERSION, ResponseDraft, ResponseRecord,
    ResponseSubmission, ResponseSummary,
};
