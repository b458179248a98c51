use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{NotificationSettings, User};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_name: String,
    pub job_title: Option<String>,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: User,
}

#[derive(Serialize)]
pub struct UpdatedProfileResponse {
    pub message: String,
    pub user: User,
}

#[derive(Serialize)]
pub struct SettingsResponse {
    pub message: String,
    pub settings: NotificationSettings,
}

pub async fn get_profile(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;
    Ok(Json(ProfileResponse { user }))
}

pub async fn update_profile(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UpdatedProfileResponse>, AppError> {
    if req.name.is_empty() || req.email.is_empty() {
        return Err(AppError::BadRequest(
            "Name and email are required".to_string(),
        ));
    }

    let user = db::users::update_profile(
        &state.pool,
        auth.user_id,
        &req.name,
        &req.email,
        &req.company_name,
        req.job_title.as_deref(),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("An account with this email already exists".to_string())
        }
        _ => AppError::Database(e),
    })?
    .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    Ok(Json(UpdatedProfileResponse {
        message: "Profile updated successfully".to_string(),
        user,
    }))
}

pub async fn update_notification_settings(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(settings): Json<NotificationSettings>,
) -> Result<Json<SettingsResponse>, AppError> {
    let user = db::users::update_notification_settings(&state.pool, auth.user_id, &settings)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    Ok(Json(SettingsResponse {
        message: "Notification settings updated successfully".to_string(),
        settings: user.notification_settings.0,
    }))
}
