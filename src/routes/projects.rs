use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Project, ProjectDetail, ProjectWithTaskCount};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ProjectRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectWithTaskCount>,
}

#[derive(Serialize)]
pub struct ProjectResponse {
    pub project: ProjectDetail,
}

#[derive(Serialize)]
pub struct SavedProjectResponse {
    pub message: String,
    pub project: Project,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let projects = db::projects::list_with_task_count(&state.pool, auth.user_id).await?;
    Ok(Json(ProjectListResponse { projects }))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<ProjectRequest>,
) -> Result<(StatusCode, Json<SavedProjectResponse>), AppError> {
    if req.name.is_empty() {
        return Err(AppError::BadRequest(
            "Project name is required".to_string(),
        ));
    }

    let project = db::projects::create(
        &state.pool,
        auth.user_id,
        &req.name,
        req.description.as_deref().unwrap_or(""),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SavedProjectResponse {
            message: "Project created successfully".to_string(),
            project,
        }),
    ))
}

/// Project detail: the project plus its tasks, newest first.
pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = db::projects::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let tasks = db::tasks::list_by_project(&state.pool, project.id).await?;

    Ok(Json(ProjectResponse {
        project: ProjectDetail { project, tasks },
    }))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProjectRequest>,
) -> Result<Json<SavedProjectResponse>, AppError> {
    if req.name.is_empty() {
        return Err(AppError::BadRequest(
            "Project name is required".to_string(),
        ));
    }

    let existing = db::projects::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let description = req
        .description
        .unwrap_or(existing.description);

    let project = db::projects::update(&state.pool, id, auth.user_id, &req.name, &description)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(SavedProjectResponse {
        message: "Project updated successfully".to_string(),
        project,
    }))
}

/// Deleting a project removes all of its tasks.
pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = db::projects::delete(&state.pool, id, auth.user_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
