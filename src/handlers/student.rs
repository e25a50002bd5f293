//! Student CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::service::{RequestValidator, StudentService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let payload = RequestValidator::validate_create(&body)?;
    let student = StudentService::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let students = StudentService::find_all(&state.pool).await?;
    Ok(Json(students))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let student = StudentService::find_one(&state.pool, id).await?;
    Ok(Json(student))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let body = body_to_map(body)?;
    let patch = RequestValidator::validate_patch(&body)?;
    let student = StudentService::update(&state.pool, id, patch).await?;
    Ok(Json(student))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    StudentService::remove(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
