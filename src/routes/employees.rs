use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::Employee;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct EmployeeRequest {
    pub name: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub basic_salary: Option<f64>,
}

impl EmployeeRequest {
    /// All three fields are required, both on create and update.
    fn validate(self) -> Result<(String, NaiveDate, f64), AppError> {
        let (Some(name), Some(joining_date), Some(basic_salary)) =
            (self.name, self.joining_date, self.basic_salary)
        else {
            return Err(AppError::BadRequest("All fields are required".to_string()));
        };
        if name.is_empty() {
            return Err(AppError::BadRequest("All fields are required".to_string()));
        }
        if basic_salary < 0.0 {
            return Err(AppError::BadRequest(
                "Basic salary must not be negative".to_string(),
            ));
        }
        Ok((name, joining_date, basic_salary))
    }
}

#[derive(Serialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
}

#[derive(Serialize)]
pub struct EmployeeResponse {
    pub employee: Employee,
}

#[derive(Serialize)]
pub struct SavedEmployeeResponse {
    pub message: String,
    pub employee: Employee,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<EmployeeListResponse>, AppError> {
    let employees = db::employees::list(&state.pool, auth.user_id).await?;
    Ok(Json(EmployeeListResponse { employees }))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<SavedEmployeeResponse>), AppError> {
    let (name, joining_date, basic_salary) = req.validate()?;

    let employee =
        db::employees::create(&state.pool, auth.user_id, &name, joining_date, basic_salary)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(SavedEmployeeResponse {
            message: "Employee created successfully".to_string(),
            employee,
        }),
    ))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = db::employees::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
    Ok(Json(EmployeeResponse { employee }))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EmployeeRequest>,
) -> Result<Json<SavedEmployeeResponse>, AppError> {
    let (name, joining_date, basic_salary) = req.validate()?;

    let employee = db::employees::update(
        &state.pool,
        id,
        auth.user_id,
        &name,
        joining_date,
        basic_salary,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    Ok(Json(SavedEmployeeResponse {
        message: "Employee updated successfully".to_string(),
        employee,
    }))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = db::employees::delete(&state.pool, id, auth.user_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}
