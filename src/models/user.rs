use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub company_name: String,
    pub job_title: Option<String>,
    pub notification_settings: sqlx::types::Json<NotificationSettings>,
    pub created_at: DateTime<Utc>,
}

/// Per-user notification flag set, stored as a JSONB blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub task_updates: bool,
    pub project_updates: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            task_updates: true,
            project_updates: true,
            weekly_reports: false,
        }
    }
}
