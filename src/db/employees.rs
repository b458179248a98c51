use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Employee, EmployeeWithTaskCount};

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT * FROM employees WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn list_with_task_count(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<EmployeeWithTaskCount>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeWithTaskCount>(
        "SELECT e.*, COUNT(t.id) AS task_count
         FROM employees e
         LEFT JOIN tasks t ON t.assignee_id = e.id
         WHERE e.user_id = $1
         GROUP BY e.id
         ORDER BY e.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Create an employee, allocating the next sequential `EMP###` code for this
/// owner. The advisory xact lock serializes concurrent creations per owner so
/// the read-then-insert cannot allocate duplicate codes; the unique constraint
/// on (user_id, employee_code) backstops it.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    joining_date: NaiveDate,
    basic_salary: f64,
) -> Result<Employee, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1::text, 0))")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    let highest: i32 = sqlx::query_scalar(
        "SELECT COALESCE(MAX(CAST(SUBSTRING(employee_code FROM 4) AS INTEGER)), 0)
         FROM employees WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(&mut *tx)
    .await?;

    let code = next_code(highest);

    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (user_id, employee_code, name, joining_date, basic_salary)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(user_id)
    .bind(&code)
    .bind(name)
    .bind(joining_date)
    .bind(basic_salary)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(employee)
}

/// Zero-padded to three digits; widens naturally past 999 (`EMP1000`).
fn next_code(highest: i32) -> String {
    format!("EMP{:03}", highest + 1)
}


pub async fn find_by_id(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    name: &str,
    joining_date: NaiveDate,
    basic_salary: f64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "UPDATE employees SET name = $3, joining_date = $4, basic_salary = $5, updated_at = now()
         WHERE id = $1 AND user_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(name)
    .bind(joining_date)
    .bind(basic_salary)
    .fetch_optional(pool)
    .await
}

/// Deletes cascade to salary rows; task assignees referencing the employee
/// are set to NULL by the foreign key.
pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
