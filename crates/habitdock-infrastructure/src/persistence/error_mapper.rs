use habitdock_domain::shared::DomainError;
use tracing::warn;

/// Translates storage errors into domain errors, tagging them with the operation
pub struct RepositoryErrorMapper;

impl RepositoryErrorMapper {
    pub fn map_sqlx_error(error: sqlx::Error, context: &str) -> DomainError {
        match &error {
            sqlx::Error::RowNotFound => DomainError::NotFound(context.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::ConstraintViolation(format!("{}: {}", context, db_err.message()))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                DomainError::DataIntegrity(format!("{}: {}", context, db_err.message()))
            }
            _ => {
                warn!(context, error = %error, "Repository operation failed");
                DomainError::Repository(format!("{}: {}", context, error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RepositoryErrorMapper::map_sqlx_error(sqlx::Error::RowNotFound, "Find habit");
        match err {
            DomainError::NotFound(msg) => assert_eq!(msg, "Find habit"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_other_errors_map_to_repository() {
        let err = RepositoryErrorMapper::map_sqlx_error(sqlx::Error::PoolClosed, "List logs");
        assert!(matches!(err, DomainError::Repository(msg) if msg.starts_with("List logs")));
    }
}
