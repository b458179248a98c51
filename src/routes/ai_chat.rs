use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::extractor::AuthUser;
use crate::error::AppError;
use crate::state::SharedState;

const SYSTEM_PROMPT: &str = "You are a helpful HR assistant for a project management tool. \
    You help users understand their projects, tasks, and provide guidance on project \
    management best practices.";

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub projects: Value,
    #[serde(default)]
    pub tasks: Value,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Proxy a question to the configured chat-completions upstream, embedding
/// the caller-supplied project/task context in the prompt.
pub async fn chat(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    let ai = state
        .ai
        .as_ref()
        .ok_or_else(|| AppError::Internal("AI assistant is not configured".to_string()))?;

    let prompt = format!(
        "You are an HR assistant for a project management tool. Here is the current context:\n\n\
         Projects: {}\n\
         Tasks: {}\n\n\
         User question: {}\n\n\
         Please provide a helpful and concise response as an HR assistant. \
         Focus on being informative and professional.",
        serde_json::to_string_pretty(&req.projects).unwrap_or_else(|_| "null".to_string()),
        serde_json::to_string_pretty(&req.tasks).unwrap_or_else(|_| "null".to_string()),
        req.message,
    );

    let reply = ai
        .chat(SYSTEM_PROMPT, &prompt)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(ChatResponse { reply }))
}
