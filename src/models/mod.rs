pub mod employee;
pub mod project;
pub mod refresh_token;
pub mod salary;
pub mod task;
pub mod user;

pub use employee::{Employee, EmployeeWithTaskCount};
pub use project::{Project, ProjectDetail, ProjectWithTaskCount};
pub use refresh_token::RefreshToken;
pub use salary::{Salary, SalaryDetail};
pub use task::{Task, TaskAssignee, TaskDetail, TaskPriority, TaskStatus};
pub use user::{NotificationSettings, User};
