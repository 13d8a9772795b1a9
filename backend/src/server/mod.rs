//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use bat_api::inbound::http::error::{json_error_handler, path_error_handler};
use bat_api::inbound::http::health::{health, index};
use bat_api::inbound::http::responses::{get_response, list_responses, submit_response};
use bat_api::inbound::http::state::HttpState;
use bat_api::outbound::persistence::SqliteResponseRepository;

fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .service(submit_response)
                .service(list_responses)
                .service(get_response)
                .service(health),
        )
        .service(index)
}

/// Construct an Actix HTTP server for the given configuration and store.
///
/// The repository handle is created once by the caller, schema-bootstrapped,
/// and shared with every worker through app data.
///
/// # Errors
/// Propagates `std::io::Error` when binding the socket fails.
pub fn create_server(
    config: &ServerConfig,
    repository: SqliteResponseRepository,
) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::new(Arc::new(repository)));

    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(("0.0.0.0", config.port))?
        .run();

    Ok(server)
}
