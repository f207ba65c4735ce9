//! HTTP endpoints
//!
//! - `/api/{section}`: GET returns the section's bundled document, POST
//!   acknowledges without storing anything, other methods get 405
//! - `POST /api/enquiries`: validates and stores a form submission
//! - `GET /health`

use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use institute_core::{NewEnquiry, Section, Storage, StorageError};

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub storage: Arc<Mutex<Storage>>,
    pub start_time: Instant,
}

impl HttpState {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
            start_time: Instant::now(),
        }
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// Creates the HTTP router.
pub fn create_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/enquiries", post(enquiry_handler))
        .route("/api/:section", any(section_handler))
        .with_state(state)
}

/// JSON response with the permissive CORS header the site expects
fn json_response(status: StatusCode, body: serde_json::Value) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

async fn health_handler(State(state): State<HttpState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

async fn section_handler(method: Method, Path(key): Path<String>) -> Response {
    let Ok(section) = key.parse::<Section>() else {
        return json_response(
            StatusCode::NOT_FOUND,
            json!({ "error": format!("Unknown section: {}", key) }),
        );
    };

    match method {
        Method::GET => json_response(StatusCode::OK, section.default_document()),
        Method::POST => {
            info!(section = %section, "Content update acknowledged");
            json_response(
                StatusCode::OK,
                json!({
                    "success": true,
                    "message": format!("{} content updated successfully", section.label()),
                }),
            )
        }
        _ => json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({ "error": "Method not allowed" }),
        ),
    }
}

async fn enquiry_handler(
    State(state): State<HttpState>,
    payload: Result<Json<NewEnquiry>, JsonRejection>,
) -> Response {
    let enquiry = match payload {
        Ok(Json(enquiry)) => enquiry,
        Err(rejection) => {
            return json_response(rejection.status(), json!({ "error": rejection.body_text() }));
        }
    };

    let result = match state.storage.lock() {
        Ok(storage) => storage.submit_enquiry(&enquiry),
        Err(_) => {
            warn!("Enquiry storage lock poisoned");
            return json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Storage unavailable" }),
            );
        }
    };

    match result {
        Ok(stored) => {
            info!(id = stored.id, "Enquiry received");
            match serde_json::to_value(&stored) {
                Ok(body) => json_response(StatusCode::CREATED, body),
                Err(e) => json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.to_string() }),
                ),
            }
        }
        Err(StorageError::Validation(e)) => {
            json_response(StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
        }
        Err(e) => {
            warn!(error = %e, "Failed to store enquiry");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to store enquiry" }),
            )
        }
    }
}
