//! BAT questionnaire response service.
//!
//! Accepts, stores, and lists responses to the Burnout Assessment Tool
//! survey over a small REST surface, persisting them in a local SQLite
//! file. Layout follows the hexagonal split: [`domain`] owns the entities
//! and the repository port, [`inbound`] adapts HTTP onto the domain, and
//! [`outbound`] implements the port with Diesel/SQLite.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
