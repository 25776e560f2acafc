use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::storage::Entity;

/// Oldest accepted age.
pub const MAX_AGE: u32 = 150;

/// Domain fields of a user; the id is owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// A stored user: `{"id", "name", "email", "age"}`.
pub type User = Entity<UserFields>;

/// Create payload as received on the wire; every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Any JSON number; `22` and `22.0` are both accepted, `22.5` is not.
    pub age: Option<f64>,
}

impl NewUserInput {
    /// Turn the raw payload into validated fields.
    pub fn validate(self) -> Result<UserFields, ServiceError> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ServiceError::validation("name is required"))?;

        let email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ServiceError::validation("email is required"))?;
        validate_email(&email)?;

        let age = self.age.ok_or_else(|| ServiceError::validation("age is required"))?;
        let age = whole_age(age)?;

        Ok(UserFields { name, email, age })
    }
}

fn whole_age(age: f64) -> Result<u32, ServiceError> {
    if age.is_finite() && age.fract() == 0.0 && (0.0..=f64::from(MAX_AGE)).contains(&age) {
        Ok(age as u32)
    } else {
        Err(ServiceError::validation(format!("age must be a whole number between 0 and {MAX_AGE}")))
    }
}

/// Minimal shape check: one `@` with something on both sides.
pub fn validate_email(email: &str) -> Result<(), ServiceError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(ServiceError::validation("invalid email")),
    }
}

/// Users present at startup when seeding is enabled.
pub fn demo_users() -> Vec<UserFields> {
    vec![
        UserFields { name: "Alice".into(), email: "alice@example.com".into(), age: 28 },
        UserFields { name: "Bob".into(), email: "bob@example.com".into(), age: 34 },
        UserFields { name: "Charlie".into(), email: "charlie@example.com".into(), age: 25 },
    ]
}
