//! Generic action endpoint: any registered action, as the signed-in user.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::context::ExecutionContext;
use crate::router::ActionCall;
use crate::server::error::{Result, ServerError};
use crate::server::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub result: Value,
}

/// `POST /api/actions` with `{ action, data?, options? }`.
pub async fn execute_action(
    State(state): State<AppState>,
    Extension(context): Extension<ExecutionContext>,
    body: std::result::Result<Json<ActionCall>, JsonRejection>,
) -> Result<Json<ActionResponse>> {
    let Json(call) = body.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let result = state.actions(context).execute(call).await?;
    Ok(Json(ActionResponse { result }))
}
