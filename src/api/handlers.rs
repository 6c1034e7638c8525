//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    error::AppError,
    state::{AppState, Settings},
};
use super::responses::{ApiResponse, ErrorResponse, HealthResponse, RunningRequest, StatusResponse};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a state error onto a status code and error body
fn api_error(e: AppError) -> ApiError {
    let status = match e {
        AppError::InvalidSettings(_) => {
            warn!("Rejected request: {}", e);
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AppError::LockPoisoned(_) => {
            error!("Request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}

/// Handle POST /start - Start or resume the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let timer = state.start().map_err(api_error)?;
    info!("Start endpoint called");
    Ok(Json(ApiResponse::ok("Timer started".to_string(), timer)))
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let timer = state.pause().map_err(api_error)?;
    info!("Pause endpoint called");
    Ok(Json(ApiResponse::ok("Timer paused".to_string(), timer)))
}

/// Handle POST /reset - Reset to the first work round
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let timer = state.reset().map_err(api_error)?;
    info!("Reset endpoint called");
    Ok(Json(ApiResponse::ok("Timer reset".to_string(), timer)))
}

/// Handle PUT /running - Set the run state directly
pub async fn running_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RunningRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let timer = state.set_running(request.running).map_err(api_error)?;
    let message = if timer.running { "Timer running" } else { "Timer paused" };
    Ok(Json(ApiResponse::ok(message.to_string(), timer)))
}

/// Handle POST /skip - Jump to the final second of the current phase
pub async fn skip_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let timer = state.skip().map_err(api_error)?;
    info!("Skip endpoint called");
    Ok(Json(ApiResponse::ok("Skipped to the final second".to_string(), timer)))
}

/// Handle GET /settings - Return the current settings
pub async fn get_settings_handler(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.get_settings())
}

/// Handle PUT /settings - Replace the settings, resetting the timer on change
pub async fn update_settings_handler(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<Settings>,
) -> Result<Json<ApiResponse>, ApiError> {
    let timer = state.update_settings(settings).map_err(api_error)?;
    info!("Settings endpoint called");
    Ok(Json(ApiResponse::ok("Settings applied".to_string(), timer)))
}

/// Handle GET /status - Return the current timer view
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let timer = state.get_timer_snapshot().map_err(api_error)?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        settings: state.get_settings(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
