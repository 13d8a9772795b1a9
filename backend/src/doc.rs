//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the HTTP paths and payload schemas of the
//! questionnaire API. The generated document is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::health::HealthStatusBody;
use crate::inbound::http::responses::{
    ListResponsesBody, ResponseDetailBody, ResponseSummaryBody, SubmitResponseBody,
    SubmitResponseRequestBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BAT questionnaire API",
        description = "Accepts, stores, and lists Burnout Assessment Tool survey responses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::responses::submit_response,
        crate::inbound::http::responses::list_responses,
        crate::inbound::http::responses::get_response,
        crate::inbound::http::health::health,
        crate::inbound::http::health::index,
    ),
    components(schemas(
        SubmitResponseRequestBody,
        SubmitResponseBody,
        ResponseSummaryBody,
        ResponseDetailBody,
        ListResponsesBody,
        HealthStatusBody,
        ErrorBody,
    )),
    tags(
        (name = "responses", description = "Operations on stored questionnaire responses"),
        (name = "health", description = "Service status and endpoint directory")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Sanity checks on the generated document.

    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn document_registers_every_route() {
        let document = ApiDoc::openapi();

        let paths = &document.paths.paths;
        assert!(paths.contains_key("/api/bat-responses"));
        assert!(paths.contains_key("/api/bat-responses/{id}"));
        assert!(paths.contains_key("/api/health"));
        assert!(paths.contains_key("/"));
    }
}
