//! Tool-call HTTP handlers.
//!
//! Two entry points reach the same dispatch path:
//! - `POST /v1/tools/:tool` with the arguments object as body
//! - `POST /v1/call` with a versioned `{v, tool, args}` envelope

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use dorametrics_core::error::{ClientCode, DoraError, Result};
use dorametrics_core::protocol::call;

use crate::app_state::AppState;
use crate::dispatch::RegisteredTool;

/// Error body: `{"error": {"code": "...", "msg": "..."}}`.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DoraError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::UnknownTool | ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({
            "error": {
                "code": code.as_str(),
                "msg": self.0.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<RegisteredTool>> {
    Json(state.dispatcher().registered_tools())
}

pub async fn call_tool(
    State(state): State<AppState>,
    Path(tool): Path<String>,
    body: String,
) -> std::result::Result<Json<Value>, ApiError> {
    let args = if body.trim().is_empty() { "{}" } else { body.as_str() };
    Ok(Json(invoke(&state, &tool, args).await?))
}

pub async fn call_envelope(
    State(state): State<AppState>,
    body: String,
) -> std::result::Result<Json<Value>, ApiError> {
    let call = call::decode(&body)?;
    Ok(Json(invoke(&state, &call.tool, call.args_json()).await?))
}

pub async fn static_asset(
    State(state): State<AppState>,
    Path((plugin, version, file)): Path<(String, String, String)>,
) -> std::result::Result<Response, ApiError> {
    let asset = state.dispatcher().asset(&plugin, &version, &file)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, asset.content_type)],
        asset.body,
    )
        .into_response())
}

async fn invoke(state: &AppState, tool: &str, args: &str) -> Result<Value> {
    let started = Instant::now();
    let res = state.dispatcher().dispatch(tool, args).await;

    // unknown names are not echoed into labels
    let label = match &res {
        Err(DoraError::UnknownTool(_)) => "unknown",
        _ => tool,
    };
    let outcome = match &res {
        Ok(_) => "ok",
        Err(e) => e.client_code().as_str(),
    };

    let metrics = state.metrics();
    metrics.tool_calls.inc(&[("tool", label), ("outcome", outcome)]);
    metrics.call_duration.observe(&[("tool", label)], started.elapsed());

    match &res {
        Ok(_) => tracing::debug!(tool = %tool, "tool call ok"),
        Err(e) => tracing::warn!(tool = %tool, error = %e, "tool call rejected"),
    }
    res
}
