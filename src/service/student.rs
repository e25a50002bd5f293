//! Student CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::model::{NewStudent, Student, StudentPatch};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, age, email";

pub struct StudentService;

impl StudentService {
    /// Insert one student; the store assigns the id. Returns the created row.
    pub async fn create(pool: &PgPool, payload: NewStudent) -> Result<Student, AppError> {
        let sql = format!(
            "INSERT INTO students (name, age, email) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "create student");
        let student = sqlx::query_as::<_, Student>(&sql)
            .bind(&payload.name)
            .bind(payload.age)
            .bind(&payload.email)
            .fetch_one(pool)
            .await?;
        Ok(student)
    }

    /// All students in insertion order. An empty table yields an empty vec.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {} FROM students ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "list students");
        let students = sqlx::query_as::<_, Student>(&sql).fetch_all(pool).await?;
        Ok(students)
    }

    /// Fetch one student by id, or `NotFound`.
    pub async fn find_one(pool: &PgPool, id: i64) -> Result<Student, AppError> {
        let sql = format!("SELECT {} FROM students WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "read student");
        sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("student with id {} not found", id)))
    }

    /// Apply a partial update, then re-read the row. The UPDATE matching no
    /// row is a silent no-op; `NotFound` comes only from the re-read, so an
    /// update racing a delete reports the same as an update of a missing id.
    pub async fn update(pool: &PgPool, id: i64, patch: StudentPatch) -> Result<Student, AppError> {
        if !patch.is_empty() {
            let sql = update_sql(&patch);
            tracing::debug!(sql = %sql, id, "update student");
            let mut query = sqlx::query(&sql);
            if let Some(name) = &patch.name {
                query = query.bind(name);
            }
            if let Some(age) = patch.age {
                query = query.bind(age);
            }
            if let Some(email) = &patch.email {
                query = query.bind(email);
            }
            query.bind(id).execute(pool).await?;
        }
        Self::find_one(pool, id).await
    }

    /// Delete by id. Idempotent: a missing id is not an error.
    pub async fn remove(pool: &PgPool, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete student");
        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// Build the UPDATE statement for the fields present in the patch.
/// Placeholders run in field order with the id last. Callers must not pass
/// an empty patch.
fn update_sql(patch: &StudentPatch) -> String {
    let mut sets = Vec::new();
    let mut n = 1;
    if patch.name.is_some() {
        sets.push(format!("name = ${}", n));
        n += 1;
    }
    if patch.age.is_some() {
        sets.push(format!("age = ${}", n));
        n += 1;
    }
    if patch.email.is_some() {
        sets.push(format!("email = ${}", n));
        n += 1;
    }
    format!("UPDATE students SET {} WHERE id = ${}", sets.join(", "), n)
}
