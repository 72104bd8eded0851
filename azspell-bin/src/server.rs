use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use azspell::config::Config;
use azspell::corrector::spellfix;
use azspell::engine::Engine;
use azspell::error::SpellfixError;

/// Everything a request needs, built once before the listener starts.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub engine: Option<Engine>,
}

#[derive(Debug, Deserialize)]
pub struct SpellRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpellResponse {
    pub corrected: String,
}

pub struct ApiError(SpellfixError);

impl From<SpellfixError> for ApiError {
    fn from(err: SpellfixError) -> ApiError {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            SpellfixError::ServiceDisabled => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(serde_json::json!({ "detail": self.0.to_string() }))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/spellfix", post(spellfix_handler))
        .with_state(state)
}

async fn spellfix_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpellRequest>,
) -> Result<Json<SpellResponse>, ApiError> {
    let corrected = spellfix(&state.config, state.engine.as_ref(), &req.text).map_err(|e| {
        log::debug!("rejected request: {}", e);
        e
    })?;

    Ok(Json(SpellResponse { corrected }))
}
