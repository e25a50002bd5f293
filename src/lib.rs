//! Learnnest: student records REST backend over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::AppError;
pub use model::{NewStudent, Student, StudentPatch};
pub use routes::{common_routes, common_routes_with_ready, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_students_table};
