use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TaskDetail;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project plus its task count, as returned by list endpoints.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ProjectWithTaskCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub task_count: i64,
}

/// Project with its tasks expanded, as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<TaskDetail>,
}
