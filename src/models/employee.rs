use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Human-readable sequential code, `EMP001` upward, unique per owner.
    pub employee_code: String,
    pub name: String,
    pub joining_date: NaiveDate,
    pub basic_salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee plus the number of tasks currently assigned to them.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct EmployeeWithTaskCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub employee: Employee,
    pub task_count: i64,
}
