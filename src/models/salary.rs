use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One monthly salary ledger row. At most one row exists per
/// (employee_id, month, year); writes go through the batch upsert.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Salary {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub basic_salary: f64,
    pub bonus: f64,
    pub deduction: f64,
    pub net_salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Salary row with the owning employee's display fields expanded.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct SalaryDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub salary: Salary,
    pub employee_code: String,
    pub employee_name: String,
}
