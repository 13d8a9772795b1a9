//! Service health and endpoint directory handlers.
//!
//! Neither endpoint touches storage; the health check reports 200 for as
//! long as the process is serving requests.

use actix_web::{get, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// Version tag reported by the health endpoint.
pub const SERVICE_VERSION: &str = "1.0";

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatusBody {
    /// Service status indicator, always `ativo` while the process serves.
    pub status: String,
    /// Server time of the check (RFC 3339).
    pub timestamp: String,
    /// Service version tag.
    pub versao: String,
}

/// Report service liveness.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatusBody)
    ),
    tags = ["health"],
    operation_id = "healthCheck"
)]
#[get("/health")]
pub async fn health() -> web::Json<HealthStatusBody> {
    web::Json(HealthStatusBody {
        status: "ativo".to_owned(),
        timestamp: Utc::now().to_rfc3339(),
        versao: SERVICE_VERSION.to_owned(),
    })
}

/// Describe the available endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Endpoint directory")
    ),
    tags = ["health"],
    operation_id = "endpointDirectory"
)]
#[get("/")]
pub async fn index() -> web::Json<Value> {
    web::Json(json!({
        "mensagem": "API do Questionário BAT",
        "endpoints": {
            "POST /api/bat-responses": "Salvar respostas",
            "GET /api/bat-responses": "Listar respostas",
            "GET /api/bat-responses/{id}": "Obter resposta específica",
            "GET /api/health": "Verificação de saúde",
        },
    }))
}
