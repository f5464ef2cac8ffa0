mod parks;

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use parkhound_core::{AppConfig, FacilityLexicon, Park};
use parkhound_ingest::DatasetClient;

/// Shared server state. The park collection is rebuilt wholesale on
/// reload; readers only ever see a complete collection.
#[derive(Clone)]
pub struct AppState {
    pub parks: Arc<RwLock<Vec<Park>>>,
    pub config: Arc<AppConfig>,
    pub lexicon: Arc<FacilityLexicon>,
    pub client: Arc<DatasetClient>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub timestamp: DateTime<Utc>,
    pub count: usize,
}

impl ResponseMeta {
    pub(super) fn new(count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

async fn not_found() -> ApiError {
    ApiError::new("not_found", "route not found")
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(parks::health))
        .route("/api/parks", get(parks::list_parks))
        .route("/api/parks/nearby", get(parks::nearby_parks))
        .route("/api/reload", post(parks::reload_parks))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}
