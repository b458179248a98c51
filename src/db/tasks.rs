use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Task, TaskAssignee, TaskDetail, TaskPriority, TaskStatus};

const DETAIL_COLUMNS: &str = "t.*, p.name AS project_name,
     e.employee_code AS assignee_code, e.name AS assignee_name";

#[derive(sqlx::FromRow)]
struct TaskDetailRow {
    #[sqlx(flatten)]
    task: Task,
    project_name: String,
    assignee_code: Option<String>,
    assignee_name: Option<String>,
}

impl TaskDetailRow {
    fn into_detail(self) -> TaskDetail {
        let assignee = match (self.task.assignee_id, self.assignee_code, self.assignee_name) {
            (Some(id), Some(employee_code), Some(name)) => Some(TaskAssignee {
                id,
                employee_code,
                name,
            }),
            _ => None,
        };
        TaskDetail {
            task: self.task,
            project_name: self.project_name,
            assignee,
        }
    }
}

/// Optional narrowing for task listings. `None` fields match everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskFilter {
    pub project_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub assignee_id: Option<Uuid>,
}

pub async fn list(
    pool: &PgPool,
    user_id: Uuid,
    filter: TaskFilter,
) -> Result<Vec<TaskDetail>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TaskDetailRow>(&format!(
        "SELECT {DETAIL_COLUMNS}
         FROM tasks t
         JOIN projects p ON t.project_id = p.id
         LEFT JOIN employees e ON t.assignee_id = e.id
         WHERE p.user_id = $1
           AND ($2::uuid IS NULL OR t.project_id = $2)
           AND ($3::task_status IS NULL OR t.status = $3)
           AND ($4::uuid IS NULL OR t.assignee_id = $4)
         ORDER BY t.created_at DESC",
    ))
    .bind(user_id)
    .bind(filter.project_id)
    .bind(filter.status)
    .bind(filter.assignee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(TaskDetailRow::into_detail).collect())
}

pub async fn list_by_project(
    pool: &PgPool,
    project_id: Uuid,
) -> Result<Vec<TaskDetail>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TaskDetailRow>(&format!(
        "SELECT {DETAIL_COLUMNS}
         FROM tasks t
         JOIN projects p ON t.project_id = p.id
         LEFT JOIN employees e ON t.assignee_id = e.id
         WHERE t.project_id = $1
         ORDER BY t.created_at DESC",
    ))
    .bind(project_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(TaskDetailRow::into_detail).collect())
}

/// Newest tasks across all the caller's projects, for the dashboard preview.
pub async fn list_recent(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<TaskDetail>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TaskDetailRow>(&format!(
        "SELECT {DETAIL_COLUMNS}
         FROM tasks t
         JOIN projects p ON t.project_id = p.id
         LEFT JOIN employees e ON t.assignee_id = e.id
         WHERE p.user_id = $1
         ORDER BY t.created_at DESC
         LIMIT $2",
    ))
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(TaskDetailRow::into_detail).collect())
}

/// Ownership-scoped lookup via the owning project.
pub async fn find_by_id(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<TaskDetail>, sqlx::Error> {
    let row = sqlx::query_as::<_, TaskDetailRow>(&format!(
        "SELECT {DETAIL_COLUMNS}
         FROM tasks t
         JOIN projects p ON t.project_id = p.id
         LEFT JOIN employees e ON t.assignee_id = e.id
         WHERE t.id = $1 AND p.user_id = $2",
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(TaskDetailRow::into_detail))
}

pub async fn create(
    pool: &PgPool,
    project_id: Uuid,
    assignee_id: Option<Uuid>,
    title: &str,
    description: &str,
    priority: TaskPriority,
    status: TaskStatus,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (project_id, assignee_id, title, description, priority, status)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(project_id)
    .bind(assignee_id)
    .bind(title)
    .bind(description)
    .bind(priority)
    .bind(status)
    .fetch_one(pool)
    .await
}

/// Full-row write; the handler resolves the tri-state partial update into
/// final field values before calling this.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    title: &str,
    description: &str,
    priority: TaskPriority,
    status: TaskStatus,
    assignee_id: Option<Uuid>,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "UPDATE tasks SET title = $3, description = $4, priority = $5, status = $6,
                assignee_id = $7, updated_at = now()
         WHERE id = $1 AND project_id IN (SELECT id FROM projects WHERE user_id = $2)
         RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(description)
    .bind(priority)
    .bind(status)
    .bind(assignee_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM tasks WHERE id = $1
         AND project_id IN (SELECT id FROM projects WHERE user_id = $2)",
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
