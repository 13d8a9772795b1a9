//! Service entry point: wires configuration, storage, and the HTTP server.

mod server;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bat_api::outbound::persistence::SqliteResponseRepository;
use server::ServerConfig;

/// Database file in the working directory, matching the legacy deployment.
const DATABASE_FILE: &str = "bat_responses.db";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing(ServerConfig::debug_from_env());
    let config = ServerConfig::from_env();

    let repository = SqliteResponseRepository::new(DATABASE_FILE);
    repository
        .init_schema()
        .await
        .map_err(|err| std::io::Error::other(format!("schema bootstrap failed: {err}")))?;

    info!(
        port = config.port,
        database = repository.database_path(),
        "BAT questionnaire API listening"
    );
    server::create_server(&config, repository)?.await
}

fn init_tracing(debug: bool) {
    let default_directive = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    if let Err(err) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %err, "tracing init failed");
    }
}
