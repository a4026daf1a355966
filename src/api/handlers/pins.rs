//! PIN endpoints: bulk issuance and full listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{IssuePinsRequest, IssuedPinDto, PinRecordDto};
use crate::app_state::AppState;
use crate::error::ServiceError;

/// `POST /pincount` — Issue a batch of PINs.
///
/// Generates, uniqueness-checks, and persists `count` PINs one at a
/// time, returning the issued values in creation order.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidCount`] (400, plain text) when
/// `count <= 0`, or an opaque 500 when persistence fails mid-batch.
#[utoipa::path(
    post,
    path = "/pincount",
    tag = "Pins",
    summary = "Issue a batch of PINs",
    description = "Generates and persists the requested number of four-digit PINs, returning them in creation order.",
    request_body = IssuePinsRequest,
    responses(
        (status = 200, description = "PINs issued", body = Vec<IssuedPinDto>),
        (status = 400, description = "Count is not a positive integer", body = String),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn issue_pins(
    State(state): State<AppState>,
    Json(req): Json<IssuePinsRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let issued = state.pin_service.issue(req.count).await?;
    let body: Vec<IssuedPinDto> = issued.into_iter().map(|pin| IssuedPinDto { pin }).collect();
    Ok(Json(body))
}

/// `GET /pins` — List every issued PIN.
///
/// # Errors
///
/// Returns an opaque 500 when the storage scan fails.
#[utoipa::path(
    get,
    path = "/pins",
    tag = "Pins",
    summary = "List all issued PINs",
    description = "Returns every persisted PIN record with its storage-assigned ID. No filtering or pagination.",
    responses(
        (status = 200, description = "All issued PINs", body = Vec<PinRecordDto>),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn list_pins(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let records = state.pin_service.list_all().await?;
    let body: Vec<PinRecordDto> = records.into_iter().map(PinRecordDto::from).collect();
    Ok(Json(body))
}

/// PIN routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pincount", post(issue_pins))
        .route("/pins", get(list_pins))
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::app_state::AppState;
    use crate::domain::RandomPinGenerator;
    use crate::persistence::{MemoryPinStore, PinStore};
    use crate::service::PinService;

    fn test_app(seed: u64) -> (Router, Arc<MemoryPinStore>) {
        let store = Arc::new(MemoryPinStore::new());
        let service = PinService::new(
            Arc::clone(&store) as Arc<dyn PinStore>,
            Arc::new(RandomPinGenerator::seeded(seed)),
        );
        let state = AppState {
            pin_service: Arc::new(service),
        };
        (crate::api::build_router().with_state(state), store)
    }

    fn post_pincount(count: i64) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/pincount")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!("{{\"count\":{count}}}")))
            .unwrap()
    }

    fn get_pins() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/pins")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn issuing_three_pins_then_listing_matches_in_order() {
        let (app, _store) = test_app(42);

        let response = app.clone().oneshot(post_pincount(3)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let issued = body_json(response).await;
        let issued = issued.as_array().unwrap();
        assert_eq!(issued.len(), 3);
        let issued_pins: Vec<i64> = issued
            .iter()
            .map(|obj| obj.get("pin").and_then(|p| p.as_i64()).unwrap())
            .collect();

        let response = app.oneshot(get_pins()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(response).await;
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 3);
        let listed_pins: Vec<i64> = listed
            .iter()
            .map(|obj| obj.get("pin").and_then(|p| p.as_i64()).unwrap())
            .collect();
        assert_eq!(listed_pins, issued_pins);

        let mut ids: Vec<i64> = listed
            .iter()
            .map(|obj| obj.get("id").and_then(|i| i.as_i64()).unwrap())
            .collect();
        ids.dedup();
        assert_eq!(ids.len(), 3, "ids must be unique");
    }

    #[tokio::test]
    async fn zero_count_returns_400_without_mutation() {
        let (app, store) = test_app(1);

        let response = app.oneshot(post_pincount(0)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes.as_ref(), b"invalid count specified".as_slice());

        assert_eq!(store.list_all().await.map(|r| r.len()).ok(), Some(0));
    }

    #[tokio::test]
    async fn negative_count_returns_400_without_mutation() {
        let (app, store) = test_app(1);

        let response = app.oneshot(post_pincount(-5)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.list_all().await.map(|r| r.len()).ok(), Some(0));
    }

    #[tokio::test]
    async fn listing_an_empty_store_returns_empty_array() {
        let (app, _store) = test_app(1);

        let response = app.oneshot(get_pins()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(response).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn health_endpoint_reports_healthy() {
        let (app, _store) = test_app(1);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.get("status").and_then(|s| s.as_str()), Some("healthy"));
    }
}
