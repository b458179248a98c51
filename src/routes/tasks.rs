use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::tasks::TaskFilter;
use crate::error::AppError;
use crate::models::{TaskDetail, TaskPriority, TaskStatus};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub project_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
}

/// Tri-state partial update. A field left out of the JSON body stays
/// untouched (outer `None`); an explicit `null` clears it (`Some(None)`);
/// a value sets it. The distinction only matters for nullable columns, but
/// `title` uses it too so an explicit `"title": null` can be rejected.
#[derive(Deserialize, Default)]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub assignee_id: Option<Option<Uuid>>,
}

/// Wraps a deserialized value in `Some` so a present-but-null field becomes
/// `Some(None)` while serde's default keeps an absent field at `None`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[derive(Deserialize)]
pub struct ListTasksQuery {
    pub project_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub assignee_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskDetail>,
}

#[derive(Serialize)]
pub struct TaskResponse {
    pub task: TaskDetail,
}

#[derive(Serialize)]
pub struct SavedTaskResponse {
    pub message: String,
    pub task: TaskDetail,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Resolve an assignee id to an employee of the caller, or 404.
async fn check_assignee(
    state: &SharedState,
    user_id: Uuid,
    assignee_id: Uuid,
) -> Result<(), AppError> {
    db::employees::find_by_id(&state.pool, assignee_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
    Ok(())
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<TaskListResponse>, AppError> {
    let filter = TaskFilter {
        project_id: query.project_id,
        status: query.status,
        assignee_id: query.assignee_id,
    };
    let tasks = db::tasks::list(&state.pool, auth.user_id, filter).await?;
    Ok(Json(TaskListResponse { tasks }))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<SavedTaskResponse>), AppError> {
    let project_id = match req.project_id {
        Some(id) if !req.title.is_empty() => id,
        _ => {
            return Err(AppError::BadRequest(
                "Title and project ID are required".to_string(),
            ));
        }
    };

    db::projects::find_by_id(&state.pool, project_id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    if let Some(assignee_id) = req.assignee_id {
        check_assignee(&state, auth.user_id, assignee_id).await?;
    }

    let task = db::tasks::create(
        &state.pool,
        project_id,
        req.assignee_id,
        &req.title,
        req.description.as_deref().unwrap_or(""),
        req.priority.unwrap_or(TaskPriority::Medium),
        req.status.unwrap_or(TaskStatus::Backlog),
    )
    .await?;

    let task = db::tasks::find_by_id(&state.pool, task.id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(SavedTaskResponse {
            message: "Task created successfully".to_string(),
            task,
        }),
    ))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = db::tasks::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
    Ok(Json(TaskResponse { task }))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<SavedTaskResponse>, AppError> {
    let title = match req.title {
        None => None,
        Some(Some(title)) if !title.is_empty() => Some(title),
        // Explicit null or empty title is never valid
        Some(_) => return Err(AppError::BadRequest("Title is required".to_string())),
    };

    let existing = db::tasks::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    let assignee_id = match req.assignee_id {
        None => existing.task.assignee_id,
        Some(None) => None,
        Some(Some(assignee_id)) => {
            check_assignee(&state, auth.user_id, assignee_id).await?;
            Some(assignee_id)
        }
    };

    let task = db::tasks::update(
        &state.pool,
        id,
        auth.user_id,
        &title.unwrap_or(existing.task.title),
        &req.description.unwrap_or(existing.task.description),
        req.priority.unwrap_or(existing.task.priority),
        req.status.unwrap_or(existing.task.status),
        assignee_id,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    let task = db::tasks::find_by_id(&state.pool, task.id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    Ok(Json(SavedTaskResponse {
        message: "Task updated successfully".to_string(),
        task,
    }))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = db::tasks::delete(&state.pool, id, auth.user_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Task not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
