pub mod account;
pub mod ai_chat;
pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod projects;
pub mod salary;
pub mod tasks;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        // Account
        .route(
            "/api/v1/profile",
            get(account::get_profile).put(account::update_profile),
        )
        .route(
            "/api/v1/settings/notifications",
            put(account::update_notification_settings),
        )
        // Employees
        .route(
            "/api/v1/employees",
            get(employees::list).post(employees::create),
        )
        .route(
            "/api/v1/employees/{id}",
            get(employees::get)
                .patch(employees::update)
                .delete(employees::delete),
        )
        // Projects
        .route(
            "/api/v1/projects",
            get(projects::list).post(projects::create),
        )
        .route(
            "/api/v1/projects/{id}",
            get(projects::get)
                .patch(projects::update)
                .delete(projects::delete),
        )
        // Tasks
        .route("/api/v1/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/v1/tasks/{id}",
            get(tasks::get).patch(tasks::update).delete(tasks::delete),
        )
        // Salary ledger
        .route("/api/v1/salary", get(salary::list).post(salary::upsert))
        // Dashboard
        .route("/api/v1/dashboard", get(dashboard::summary))
        // AI chat
        .route("/api/v1/ai-chat", post(ai_chat::chat))
}
