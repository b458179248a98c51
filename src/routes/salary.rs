use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Salary, SalaryDetail};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct UpsertSalariesRequest {
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub salaries: Option<Vec<SalaryRecord>>,
}

#[derive(Deserialize)]
pub struct SalaryRecord {
    pub employee_id: Uuid,
    pub basic_salary: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub deduction: f64,
    /// Accepted for wire compatibility; the stored value is always
    /// recomputed as basic_salary + bonus - deduction.
    #[serde(default)]
    pub net_salary: Option<f64>,
}

/// Per-record outcome of the batch upsert, in input order. A bad record
/// reports inline instead of aborting the batch.
#[derive(Serialize)]
#[serde(untagged)]
pub enum SalaryOutcome {
    Saved(Salary),
    Failed { error: String },
}

#[derive(Deserialize)]
pub struct ListSalariesQuery {
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub employee_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct SalaryListResponse {
    pub salaries: Vec<SalaryDetail>,
}

#[derive(Serialize)]
pub struct UpsertSalariesResponse {
    pub message: String,
    pub results: Vec<SalaryOutcome>,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListSalariesQuery>,
) -> Result<Json<SalaryListResponse>, AppError> {
    let (Some(month), Some(year)) = (query.month, query.year) else {
        return Err(AppError::BadRequest(
            "Month and year are required".to_string(),
        ));
    };
    if month == 0 || year == 0 {
        return Err(AppError::BadRequest(
            "Month and year are required".to_string(),
        ));
    }

    let salaries =
        db::salaries::list(&state.pool, auth.user_id, month, year, query.employee_id).await?;
    Ok(Json(SalaryListResponse { salaries }))
}

pub async fn upsert(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<UpsertSalariesRequest>,
) -> Result<Json<UpsertSalariesResponse>, AppError> {
    let (Some(month), Some(year), Some(salaries)) = (req.month, req.year, req.salaries) else {
        return Err(AppError::BadRequest("Invalid data format".to_string()));
    };
    if !(1..=12).contains(&month) || year == 0 {
        return Err(AppError::BadRequest("Invalid data format".to_string()));
    }

    let mut results = Vec::with_capacity(salaries.len());
    for record in salaries {
        results.push(upsert_record(&state, auth.user_id, month, year, record).await);
    }

    Ok(Json(UpsertSalariesResponse {
        message: "Salary records saved successfully".to_string(),
        results,
    }))
}

async fn upsert_record(
    state: &SharedState,
    user_id: Uuid,
    month: i32,
    year: i32,
    record: SalaryRecord,
) -> SalaryOutcome {
    let employee =
        match db::employees::find_by_id(&state.pool, record.employee_id, user_id).await {
            Ok(Some(employee)) => employee,
            Ok(None) => {
                return SalaryOutcome::Failed {
                    error: format!("Employee not found: {}", record.employee_id),
                };
            }
            Err(e) => {
                tracing::error!("Salary upsert lookup failed: {e}");
                return SalaryOutcome::Failed {
                    error: format!("Employee not found: {}", record.employee_id),
                };
            }
        };

    if record.basic_salary < 0.0 || record.bonus < 0.0 || record.deduction < 0.0 {
        return SalaryOutcome::Failed {
            error: format!("Invalid salary amounts for employee: {}", employee.id),
        };
    }

    // The client may send its own net_salary; the ledger never trusts it.
    let net_salary = record.basic_salary + record.bonus - record.deduction;

    match db::salaries::upsert(
        &state.pool,
        employee.id,
        month,
        year,
        record.basic_salary,
        record.bonus,
        record.deduction,
        net_salary,
    )
    .await
    {
        Ok(salary) => SalaryOutcome::Saved(salary),
        Err(e) => {
            tracing::error!("Salary upsert failed for employee {}: {e}", employee.id);
            SalaryOutcome::Failed {
                error: format!("Failed to save salary for employee: {}", employee.id),
            }
        }
    }
}
