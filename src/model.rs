//! Student row and payload types.

use serde::Serialize;

/// A persisted student row. `id` is assigned by the store on insert and
/// never changes afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// A validated creation payload. Carries all three writable fields.
#[derive(Clone, Debug)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// A validated partial update. Fields left `None` keep their stored value.
#[derive(Clone, Debug, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_serializes_flat() {
        let s = Student {
            id: 1,
            name: "Ada".into(),
            age: 30,
            email: "ada@example.com".into(),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Ada",
                "age": 30,
                "email": "ada@example.com"
            })
        );
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(StudentPatch::default().is_empty());
        let patch = StudentPatch {
            age: Some(31),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
