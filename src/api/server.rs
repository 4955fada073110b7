//! HTTP server implementation for the API

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::error::SkillWeaveError;
use crate::pipeline::CourseGenerator;

use super::{handlers, models::ErrorResponse};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<CourseGenerator>,
}

/// Configure and start the HTTP server
pub async fn start_http_server(generator: Arc<CourseGenerator>, port: u16) -> Result<()> {
    info!("🚀 Starting HTTP server on port {}", port);

    let app_state = AppState { generator };

    // Configure CORS to allow browser access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        .route("/api/courses", post(generate_course_handler))
        .with_state(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("🌐 API server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(handlers::health_check().await))
}

/// Course generation handler
async fn generate_course_handler(
    State(state): State<AppState>,
    Json(payload): Json<super::models::GenerateCourseRequest>,
) -> Response {
    match handlers::generate_course(&state.generator, payload).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Map a service error onto its coded response; quota errors carry a
/// Retry-After header
fn error_response(err: SkillWeaveError) -> Response {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let retry_after = err.retry_after_secs();

    let mut body = ErrorResponse::new(err.to_string(), err.code());
    body.retry_after = retry_after;

    let mut response = (status, Json(body)).into_response();
    if let Some(secs) = retry_after {
        if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
            response.headers_mut().insert(header::RETRY_AFTER, value);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_quota_error_carries_retry_after() {
        let response = error_response(SkillWeaveError::QuotaExceeded {
            retry_after_secs: 1800,
        });
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "1800"
        );
    }

    #[tokio::test]
    async fn test_invalid_query_maps_to_400() {
        let response = error_response(SkillWeaveError::InvalidQuery);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
