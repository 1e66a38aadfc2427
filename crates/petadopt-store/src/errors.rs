//! Error handling for petadopt-store
//!
//! Wraps the core `ExError` with store-specific constructors and classifies
//! SQLite constraint failures into the canonical kinds.

use petadopt_core::errors::{ExError, ExErrorKind, PetAdoptError};
use petadopt_core::EntityKind;
use rusqlite::ffi;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::MigrationFailed)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ChecksumMismatch)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Classify a failed write against `entity`
///
/// `key` is the primary key involved, when the caller knows it. A uniqueness
/// failure without a known key is reported as a plain constraint violation.
pub fn classify_write_error(
    entity: EntityKind,
    op: &str,
    key: Option<&str>,
    err: rusqlite::Error,
) -> ExError {
    let extended_code = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            e.extended_code
        }
        _ => {
            return ExError::new(ExErrorKind::Persistence)
                .with_op(op.to_string())
                .with_entity(entity)
                .with_message(err.to_string())
        }
    };

    let classified = match (extended_code, key) {
        (ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE, Some(key)) => {
            PetAdoptError::DuplicateKey {
                entity,
                key: key.to_string(),
            }
        }
        (ffi::SQLITE_CONSTRAINT_FOREIGNKEY, _) => PetAdoptError::ReferenceViolation {
            entity,
            reason: err.to_string(),
        },
        _ => PetAdoptError::ConstraintViolation {
            entity,
            reason: err.to_string(),
        },
    };

    let ex = ExError::from(classified).with_op(op.to_string());
    match key {
        Some(key) => ex.with_entity_id(key),
        None => ex,
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(extended_code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            ffi::Error {
                code: rusqlite::ErrorCode::ConstraintViolation,
                extended_code,
            },
            Some("constraint failed".to_string()),
        )
    }

    #[test]
    fn test_primary_key_is_duplicate() {
        let err = classify_write_error(
            EntityKind::Pet,
            "insert",
            Some("P1"),
            constraint(ffi::SQLITE_CONSTRAINT_PRIMARYKEY),
        );
        assert_eq!(err.kind(), ExErrorKind::DuplicateKey);
        assert_eq!(err.entity_id(), Some("P1"));
    }

    #[test]
    fn test_foreign_key_is_reference_violation() {
        let err = classify_write_error(
            EntityKind::Adoption,
            "insert",
            None,
            constraint(ffi::SQLITE_CONSTRAINT_FOREIGNKEY),
        );
        assert_eq!(err.kind(), ExErrorKind::ReferenceViolation);
        assert_eq!(err.entity(), Some(EntityKind::Adoption));
        assert_eq!(
            err.message(),
            "Reference violation on Adoption: constraint failed"
        );
    }

    #[test]
    fn test_duplicate_message_names_key() {
        let err = classify_write_error(
            EntityKind::Adopter,
            "update",
            Some("A1"),
            constraint(ffi::SQLITE_CONSTRAINT_UNIQUE),
        );
        assert_eq!(err.kind(), ExErrorKind::DuplicateKey);
        assert_eq!(err.op(), Some("update"));
        assert_eq!(err.message(), "Adopter with key A1 already exists");
    }

    #[test]
    fn test_unique_without_key_is_constraint_violation() {
        let err = classify_write_error(
            EntityKind::Payment,
            "insert",
            None,
            constraint(ffi::SQLITE_CONSTRAINT_UNIQUE),
        );
        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert_eq!(err.entity_id(), None);
    }

    #[test]
    fn test_not_null_is_constraint_violation() {
        let err = classify_write_error(
            EntityKind::Pet,
            "insert",
            None,
            constraint(ffi::SQLITE_CONSTRAINT_NOTNULL),
        );
        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert_eq!(
            err.message(),
            "Constraint violation on Pet: constraint failed"
        );
    }

    #[test]
    fn test_other_failures_are_persistence() {
        let err = classify_write_error(
            EntityKind::Pet,
            "insert",
            None,
            rusqlite::Error::QueryReturnedNoRows,
        );
        assert_eq!(err.kind(), ExErrorKind::Persistence);
    }
}
