use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// No threshold setting exists for the field statistics are computed on.
    #[error("{0} color settings not found")]
    ConfigurationMissing(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid ID format: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_missing_message() {
        let err = DashboardError::ConfigurationMissing("finalScore".to_owned());
        assert_eq!(err.to_string(), "finalScore color settings not found");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(DashboardError::NotFound("Project").to_string(), "Project not found");
    }
}
