//! HTTP API layer: routing, request decoding, and status mapping

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use hsn_core::{ReferenceIndex, Validator};

use crate::response::ValidationResponse;

/// Shared handler state.
///
/// The index is read-only after startup, so handlers share it through a
/// plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<ReferenceIndex>,
    pub max_batch_size: usize,
}

/// Build the service router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/validate", post(validate))
        .route("/validate_batch", post(validate_batch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Json<Value> {
    Json(json!({
        "message": "HSN Code Validation API is running.",
        "endpoints": {
            "/validate": "POST - Validate a single HSN code",
            "/validate_batch": "POST - Validate multiple HSN codes"
        },
        "status": "OK"
    }))
}

#[derive(Debug, Deserialize)]
struct ValidateRequest {
    hsn_code: Option<Value>,
}

async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Response {
    let Some(input) = request.hsn_code.filter(|value| !value.is_null()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "hsn_code parameter is required"})),
        )
            .into_response();
    };

    let validator = Validator::new(&state.index);
    let response = ValidationResponse::for_input(&validator, &input);
    let status = if response.is_valid() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response)).into_response()
}

#[derive(Debug, Deserialize)]
struct BatchRequest {
    hsn_codes: Option<Value>,
}

async fn validate_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Response {
    // Absent field defaults to an empty batch; a present non-array is a
    // request-shape error
    let items = match request.hsn_codes {
        None => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "hsn_codes must be an array"})),
            )
                .into_response();
        }
    };

    if items.len() > state.max_batch_size {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("batch size exceeds maximum of {}", state.max_batch_size)
            })),
        )
            .into_response();
    }

    let validator = Validator::new(&state.index);
    let results: Vec<ValidationResponse> = items
        .iter()
        .map(|item| ValidationResponse::for_input(&validator, item))
        .collect();

    (StatusCode::OK, Json(json!({ "results": results }))).into_response()
}
