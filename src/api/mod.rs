//! REST API layer: route handlers, DTOs, and router composition.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

/// OpenAPI document for the service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "pinforge",
        description = "Issues and lists four-digit numeric PINs."
    ),
    paths(
        handlers::pins::issue_pins,
        handlers::pins::list_pins,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Pins", description = "PIN issuance and listing"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
