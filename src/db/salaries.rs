use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Salary, SalaryDetail};

/// Atomic update-or-insert keyed on (employee_id, month, year). Concurrent
/// submissions for the same key resolve inside Postgres instead of racing a
/// separate existence check.
pub async fn upsert(
    pool: &PgPool,
    employee_id: Uuid,
    month: i32,
    year: i32,
    basic_salary: f64,
    bonus: f64,
    deduction: f64,
    net_salary: f64,
) -> Result<Salary, sqlx::Error> {
    sqlx::query_as::<_, Salary>(
        "INSERT INTO salaries (employee_id, month, year, basic_salary, bonus, deduction, net_salary)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (employee_id, month, year) DO UPDATE
         SET basic_salary = EXCLUDED.basic_salary,
             bonus = EXCLUDED.bonus,
             deduction = EXCLUDED.deduction,
             net_salary = EXCLUDED.net_salary,
             updated_at = now()
         RETURNING *",
    )
    .bind(employee_id)
    .bind(month)
    .bind(year)
    .bind(basic_salary)
    .bind(bonus)
    .bind(deduction)
    .bind(net_salary)
    .fetch_one(pool)
    .await
}

pub async fn list(
    pool: &PgPool,
    user_id: Uuid,
    month: i32,
    year: i32,
    employee_id: Option<Uuid>,
) -> Result<Vec<SalaryDetail>, sqlx::Error> {
    sqlx::query_as::<_, SalaryDetail>(
        "SELECT s.*, e.employee_code AS employee_code, e.name AS employee_name
         FROM salaries s
         JOIN employees e ON s.employee_id = e.id
         WHERE e.user_id = $1 AND s.month = $2 AND s.year = $3
           AND ($4::uuid IS NULL OR s.employee_id = $4)
         ORDER BY e.employee_code",
    )
    .bind(user_id)
    .bind(month)
    .bind(year)
    .bind(employee_id)
    .fetch_all(pool)
    .await
}
