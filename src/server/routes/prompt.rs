//! `POST /api/prompt/execute`: queue a run of a rule against some of its prompts.
//!
//! Everything goes through the action router under the caller's context, so a
//! rule or prompt of another tenant is simply not found.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::context::ExecutionContext;
use crate::model::{Execution, ExecutionStatus, Prompt, Rule};
use crate::router::ActionCall;
use crate::server::error::{Result, ServerError};
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutePromptRequest {
    pub rule_name: String,
    pub prompt_names: Vec<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    pub id: String,
    pub status: ExecutionStatus,
    pub execution_url: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExecutePromptResponse {
    pub execution: ExecutionSummary,
}

fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ServerError::Internal(e.to_string()))
}

pub async fn execute_prompt(
    State(state): State<AppState>,
    Extension(context): Extension<ExecutionContext>,
    body: std::result::Result<Json<ExecutePromptRequest>, JsonRejection>,
) -> Result<Json<ExecutePromptResponse>> {
    let Json(request) = body.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    if request.prompt_names.is_empty() {
        return Err(ServerError::BadRequest(
            "promptNames must not be empty".to_string(),
        ));
    }
    let actions = state.actions(context);

    let rules: Vec<Rule> = decode(
        actions
            .execute(ActionCall::new("rule.list", json!({ "name": request.rule_name })))
            .await?,
    )?;
    // Rule names are not unique; refuse to guess which one to run.
    if rules.len() > 1 {
        return Err(ServerError::Conflict(format!(
            "Rule name is ambiguous: {} rules are named {:?}",
            rules.len(),
            request.rule_name
        )));
    }
    let rule = rules
        .into_iter()
        .next()
        .ok_or_else(|| ServerError::NotFound("Rule not found".to_string()))?;

    let prompts: Vec<Prompt> = decode(
        actions
            .execute(ActionCall::new(
                "prompt.list",
                json!({ "ruleId": rule.id, "names": request.prompt_names }),
            ))
            .await?,
    )?;
    let all_found = request
        .prompt_names
        .iter()
        .all(|name| prompts.iter().any(|prompt| &prompt.name == name));
    if prompts.is_empty() || !all_found {
        return Err(ServerError::NotFound("Prompts not found".to_string()));
    }

    let prompt_ids: Vec<_> = prompts.into_iter().map(|prompt| prompt.id).collect();
    let mut create = json!({
        "ruleId": rule.id,
        "promptIds": prompt_ids,
        "ttlSeconds": state.config.execution_ttl_seconds,
    });
    if let Some(session_id) = request.session_id {
        create["sessionId"] = json!(session_id);
    }
    let execution: Execution = decode(
        actions
            .execute(ActionCall::new("execution.create", create))
            .await?,
    )?;

    info!(execution = %execution.id, rule = %rule.id, "Execution queued");
    Ok(Json(ExecutePromptResponse {
        execution: ExecutionSummary {
            execution_url: state.config.execution_url(execution.id.as_str()),
            id: execution.id.0,
            status: execution.status,
            expires_at: execution.expires_at,
        },
    }))
}
