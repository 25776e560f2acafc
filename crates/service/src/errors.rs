use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("id space exhausted")]
    IdsExhausted,
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("User").to_string(), "User not found");
    }

    #[test]
    fn validation_message_is_prefixed() {
        assert_eq!(ServiceError::validation("name is required").to_string(), "validation error: name is required");
    }
}
