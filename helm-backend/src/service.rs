///! HTTP surface: routes the wire contract onto the manager and oracle.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use helm_common::{ActionRequest, ActionResponse, ErrorResponse};

use crate::config::BackendConfig;
use crate::module::craft::CraftManager;
use crate::module::oracle::SensorOracle;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub manager: CraftManager,
    pub oracle: SensorOracle,
}

/// Build the application router.
///
/// The static control panel is the fallback, so `/` serves its index while
/// the API routes take precedence.
pub fn build_router(manager: CraftManager, oracle: SensorOracle, config: &BackendConfig) -> Router {
    let state = AppState { manager, oracle };

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/status", get(spacecraft_status))
        .route("/action", post(submit_action))
        .route("/random-sensor", get(random_sensor))
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }
    app
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// `GET /status` – full status snapshot.
async fn spacecraft_status(State(state): State<AppState>) -> Response {
    Json(state.manager.status().await).into_response()
}

/// `POST /action` – validate and apply one action.
async fn submit_action(
    State(state): State<AppState>,
    Json(request): Json<ActionRequest>,
) -> Response {
    match state.manager.execute(&request).await {
        Ok(snapshot) => Json(ActionResponse {
            message: format!("Action {} executed successfully!", request.action),
            spacecraft_status: snapshot,
        })
        .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// `GET /random-sensor` – one synthetic reading from the oracle.
async fn random_sensor(State(state): State<AppState>) -> Response {
    match state.oracle.read() {
        Ok(reading) => Json(reading).into_response(),
        Err(e) => {
            error!("Sensor oracle failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Error generating random sensor data".to_string(),
                }),
            )
                .into_response()
        },
    }
}
