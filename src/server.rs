//! JSON HTTP API around a single game session.

use crate::controller::{GameController, Suggestion};
use crate::error::GameError;
use crate::roster::RosterProvider;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dexdle_core::{CreatureRecord, SessionSnapshot, VerdictSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

/// Controller shared between request handlers. One operation runs at a time.
pub type SharedController = Arc<Mutex<GameController<Box<dyn RosterProvider>>>>;

/// Body of `POST /api/session/guess`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    /// Creature name as typed.
    pub name: String,
}

/// Error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&GameError> for ErrorBody {
    fn from(err: &GameError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Response of `POST /api/session/guess`.
#[derive(Debug, Clone, Serialize)]
pub struct GuessResponse {
    /// True if the guess charged an attempt.
    pub accepted: bool,
    /// Per-attribute feedback, when the guess was compared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<VerdictSet>,
    /// The guessed record, when it was fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<CreatureRecord>,
    /// Why the guess was rejected or could not be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    /// Session state after the guess.
    pub snapshot: SessionSnapshot,
}

/// Query of `GET /api/roster/suggestions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionQuery {
    /// Name prefix.
    #[serde(default)]
    pub prefix: String,
}

/// Builds the API router.
#[instrument(skip_all)]
pub fn router(controller: SharedController) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/session", get(get_session).post(start_session))
        .route("/api/session/guess", post(submit_guess))
        .route("/api/roster/suggestions", get(suggestions))
        .with_state(controller)
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip_all)]
async fn get_session(State(controller): State<SharedController>) -> Json<SessionSnapshot> {
    Json(controller.lock().await.snapshot())
}

#[instrument(skip_all)]
async fn start_session(State(controller): State<SharedController>) -> Response {
    let mut controller = controller.lock().await;
    match controller.reset_session().await {
        Ok(snapshot) => {
            info!(attempt_limit = snapshot.attempt_limit, "Session started via API");
            (StatusCode::CREATED, Json(snapshot)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Session start failed");
            let status = match e {
                GameError::RosterUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::BAD_GATEWAY,
            };
            (status, Json(ErrorBody::from(&e))).into_response()
        }
    }
}

#[instrument(skip(controller), fields(guess = %request.name))]
async fn submit_guess(
    State(controller): State<SharedController>,
    Json(request): Json<GuessRequest>,
) -> Response {
    // Runs detached: the fetch completes even if the client disconnects.
    let task = tokio::spawn(async move {
        controller.lock().await.submit_guess(&request.name).await
    });
    match task.await {
        Ok(report) => Json(GuessResponse {
            accepted: report.accepted(),
            verdict: report.verdict().copied(),
            guess: report.guess().cloned(),
            error: report.error().map(ErrorBody::from),
            snapshot: report.snapshot,
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "Guess task failed");
            let body = ErrorBody {
                code: "internal".to_string(),
                message: "Guess could not be processed".to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[instrument(skip(controller))]
async fn suggestions(
    State(controller): State<SharedController>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Vec<Suggestion>> {
    Json(controller.lock().await.suggestions(&query.prefix))
}

/// Binds `host:port` and serves the API until the process exits.
#[instrument(skip(controller))]
pub async fn serve(controller: SharedController, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Server ready at http://{}:{}/", host, port);
    axum::serve(listener, router(controller)).await?;
    Ok(())
}
