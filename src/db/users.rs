use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NotificationSettings, User};

pub async fn create(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    name: &str,
    company_name: &str,
    job_title: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash, name, company_name, job_title, notification_settings)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(company_name)
    .bind(job_title)
    .bind(sqlx::types::Json(NotificationSettings::default()))
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    email: &str,
    company_name: &str,
    job_title: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET name = $2, email = $3, company_name = $4, job_title = $5
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(company_name)
    .bind(job_title)
    .fetch_optional(pool)
    .await
}

pub async fn update_notification_settings(
    pool: &PgPool,
    id: Uuid,
    settings: &NotificationSettings,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET notification_settings = $2 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(sqlx::types::Json(settings))
    .fetch_optional(pool)
    .await
}

pub async fn update_password(
    pool: &PgPool,
    id: Uuid,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
    Ok(())
}
