//! HTTP server for the aggregation API.

mod http;

pub use http::{ApiError, AppState, ErrorBody, ForexPricesResponse, create_router};
