//! Request validation for student payloads.

use crate::error::AppError;
use crate::model::{NewStudent, StudentPatch};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Writable columns. Anything else in a body (including `id`) is rejected.
const FIELDS: &[&str] = &["name", "age", "email"];

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
    })
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a creation body: all three fields must be present and
    /// well-formed. Returns the typed payload.
    pub fn validate_create(body: &Map<String, Value>) -> Result<NewStudent, AppError> {
        check_known_fields(body)?;
        let name = string_value("name", require(body, "name")?)?;
        let age = int_value("age", require(body, "age")?)?;
        let email = email_value(require(body, "email")?)?;
        Ok(NewStudent { name, age, email })
    }

    /// Validate an update body: any subset of the fields, each checked
    /// against the same per-field rule. An empty body is a valid patch.
    pub fn validate_patch(body: &Map<String, Value>) -> Result<StudentPatch, AppError> {
        check_known_fields(body)?;
        let mut patch = StudentPatch::default();
        if let Some(v) = body.get("name") {
            patch.name = Some(string_value("name", v)?);
        }
        if let Some(v) = body.get("age") {
            patch.age = Some(int_value("age", v)?);
        }
        if let Some(v) = body.get("email") {
            patch.email = Some(email_value(v)?);
        }
        Ok(patch)
    }
}

fn check_known_fields(body: &Map<String, Value>) -> Result<(), AppError> {
    for key in body.keys() {
        if !FIELDS.contains(&key.as_str()) {
            return Err(AppError::Validation(format!("unknown field '{}'", key)));
        }
    }
    Ok(())
}

fn require<'a>(body: &'a Map<String, Value>, col: &str) -> Result<&'a Value, AppError> {
    match body.get(col) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", col))),
        Some(v) => Ok(v),
    }
}

fn string_value(col: &str, v: &Value) -> Result<String, AppError> {
    let s = v
        .as_str()
        .ok_or_else(|| AppError::Validation(format!("{} must be a string", col)))?;
    if s.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", col)));
    }
    Ok(s.to_string())
}

fn int_value(col: &str, v: &Value) -> Result<i32, AppError> {
    let n = v
        .as_i64()
        .ok_or_else(|| AppError::Validation(format!("{} must be an integer", col)))?;
    i32::try_from(n).map_err(|_| AppError::Validation(format!("{} is out of range", col)))
}

fn email_value(v: &Value) -> Result<String, AppError> {
    let s = string_value("email", v)?;
    if !email_regex().is_match(&s) {
        return Err(AppError::Validation("email must be a valid email".into()));
    }
    Ok(s)
}
