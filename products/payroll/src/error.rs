use platform_api::ApiError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::seed::SeedLoadError;

pub type PayrollResult<T> = Result<T, PayrollError>;

#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("could not find employee {0}")]
    EmployeeNotFound(i64),
    #[error(transparent)]
    SeedLoad(#[from] SeedLoadError),
    #[error("employee store failure: {0}")]
    Store(#[from] DbErr),
}

impl From<PayrollError> for ApiError {
    fn from(value: PayrollError) -> Self {
        match value {
            PayrollError::EmployeeNotFound(_) => ApiError::not_found(value.to_string()),
            other => ApiError::internal(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_surfaces_the_requested_id() {
        let err = ApiError::from(PayrollError::EmployeeNotFound(42));
        assert!(matches!(&err, ApiError::NotFound(msg) if msg == "could not find employee 42"));
    }

    #[test]
    fn store_failures_become_internal() {
        let err = ApiError::from(PayrollError::Store(DbErr::Custom("disk full".into())));
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.to_string(), "internal server error");
    }
}
