//! HTTP/JSON API server implementation.
//!
//! Exposes the batch aggregation endpoint consumed by dashboard clients,
//! answering CORS preflight permissively so browsers can call it directly.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::application::services::{AggregatedRate, RateAggregator};

/// Shared state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Batch aggregator over the full provider chain.
    pub aggregator: Arc<RateAggregator>,
}

impl AppState {
    /// Create the server state.
    #[must_use]
    pub fn new(aggregator: RateAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

/// Create the Axum router with all endpoints.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/forex-prices", get(forex_prices))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Query parameters for the aggregation endpoint.
#[derive(Debug, Deserialize)]
pub struct ForexPricesQuery {
    /// Comma-separated pair codes.
    pairs: Option<String>,
}

/// Response from the aggregation endpoint.
#[derive(Debug, Serialize)]
pub struct ForexPricesResponse {
    /// Resolved rates keyed by canonical pair code.
    pub rates: HashMap<String, AggregatedRate>,
    /// Unix timestamp of the response.
    pub timestamp: i64,
}

/// Batch forex price resolution endpoint.
///
/// `GET /forex-prices?pairs=EURUSD,GBPUSD` resolves each pair through the
/// provider chain and annotates it with the tier that satisfied it. A pair
/// that cannot be resolved at all is omitted; the batch itself never fails.
async fn forex_prices(
    State(state): State<AppState>,
    Query(query): Query<ForexPricesQuery>,
) -> Result<Json<ForexPricesResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let Some(raw_pairs) = query.pairs else {
        return Err(ApiError::new("pairs query parameter is required"));
    };

    let codes: Vec<&str> = raw_pairs
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .collect();

    tracing::info!(
        request_id = %request_id,
        requested = codes.len(),
        "Resolving forex prices"
    );

    let rates = state.aggregator.aggregate(&codes).await;

    tracing::info!(
        request_id = %request_id,
        resolved = rates.len(),
        "Forex prices resolved"
    );

    Ok(Json(ForexPricesResponse {
        rates,
        timestamp: Utc::now().timestamp(),
    }))
}

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// API error returned as a 500 with a JSON body.
#[derive(Debug)]
pub struct ApiError {
    message: String,
}

impl ApiError {
    /// Create an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
