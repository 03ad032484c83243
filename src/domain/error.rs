use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Data source error: {message}")]
    DataSource { message: String },

    #[error("Chart error: {message}")]
    Chart { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
        }
    }

    pub fn chart(message: impl Into<String>) -> Self {
        Self::Chart {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Student S9 not found");
        assert_eq!(error.to_string(), "Not found: Student S9 not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Please enter an ID value");
        assert_eq!(
            error.to_string(),
            "Validation error: Please enter an ID value"
        );
    }

    #[test]
    fn test_data_source_error() {
        let error = DomainError::data_source("row 3: invalid marks");
        assert_eq!(error.to_string(), "Data source error: row 3: invalid marks");
    }
}
