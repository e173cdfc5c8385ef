use sea_orm::DbErr;
use thiserror::Error;

/// Message returned when a report id is unknown.
pub const REPORT_NOT_FOUND: &str = "Reporte no encontrado";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn report_not_found() -> Self { Self::NotFound(REPORT_NOT_FOUND.to_string()) }

    /// True for input problems, including model-level validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Model(models::errors::ModelError::Validation(_)))
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn not_found_displays_plain_message() {
        assert_eq!(ServiceError::report_not_found().to_string(), "Reporte no encontrado");
    }

    #[test]
    fn model_validation_counts_as_validation() {
        assert!(ServiceError::from(ModelError::Validation("tipo: x".into())).is_validation());
        assert!(!ServiceError::from(ModelError::Db("boom".into())).is_validation());
        assert!(!ServiceError::Db("boom".into()).is_validation());
    }
}
