use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{EmployeeWithTaskCount, ProjectWithTaskCount, TaskDetail};
use crate::state::SharedState;

const RECENT_TASKS: i64 = 5;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub employees: Vec<EmployeeWithTaskCount>,
    pub projects: Vec<ProjectWithTaskCount>,
    pub tasks: Vec<TaskDetail>,
}

/// Everything the dashboard page needs in one round trip: employees and
/// projects with task counts, plus a bounded preview of the newest tasks.
pub async fn summary(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let employees = db::employees::list_with_task_count(&state.pool, auth.user_id).await?;
    let projects = db::projects::list_with_task_count(&state.pool, auth.user_id).await?;
    let tasks = db::tasks::list_recent(&state.pool, auth.user_id, RECENT_TASKS).await?;

    Ok(Json(DashboardResponse {
        employees,
        projects,
        tasks,
    }))
}
