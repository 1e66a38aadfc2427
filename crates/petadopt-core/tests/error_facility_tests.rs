use petadopt_core::errors::{ExError, ExErrorKind, PetAdoptError};
use petadopt_core::EntityKind;
use petadopt_core_types::RequestId;

#[test]
fn test_missing_field_maps_to_missing_field_kind() {
    let err = PetAdoptError::MissingField {
        entity: EntityKind::Pet,
        field: "Age".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MissingField);
    assert_eq!(ex_err.code(), "ERR_MISSING_FIELD");
    assert_eq!(ex_err.entity(), Some(EntityKind::Pet));
    assert_eq!(ex_err.field(), Some("Age"));
    assert!(ex_err.message().contains("Missing required field Age"));
}

#[test]
fn test_duplicate_key_carries_key() {
    let err = PetAdoptError::DuplicateKey {
        entity: EntityKind::Adopter,
        key: "A1".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::DuplicateKey);
    assert_eq!(ex_err.code(), "ERR_DUPLICATE_KEY");
    assert_eq!(ex_err.entity_id(), Some("A1"));
}

#[test]
fn test_unknown_field_is_invalid_input() {
    let err = PetAdoptError::UnknownField {
        entity: EntityKind::Pet,
        field: "Owner".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.field(), Some("Owner"));
}

#[test]
fn test_not_found_distinct_from_duplicate() {
    let not_found: ExError = PetAdoptError::NotFound {
        entity: EntityKind::Payment,
        key: "9".to_string(),
    }
    .into();

    assert_eq!(not_found.kind(), ExErrorKind::NotFound);
    assert_ne!(not_found.kind(), ExErrorKind::DuplicateKey);
}

#[test]
fn test_error_kind_codes_are_unique() {
    let kinds = [
        ExErrorKind::InvalidInput,
        ExErrorKind::MissingField,
        ExErrorKind::InvalidField,
        ExErrorKind::NotFound,
        ExErrorKind::DuplicateKey,
        ExErrorKind::ReferenceViolation,
        ExErrorKind::ConstraintViolation,
        ExErrorKind::MigrationFailed,
        ExErrorKind::ChecksumMismatch,
        ExErrorKind::Io,
        ExErrorKind::Persistence,
        ExErrorKind::Config,
        ExErrorKind::Internal,
    ];

    let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
    assert!(codes.iter().all(|c| c.starts_with("ERR_")));
}

#[test]
fn test_request_id_attaches() {
    let request_id = RequestId::from_string("req-42".to_string());
    let err = ExError::new(ExErrorKind::Persistence).with_request_id(request_id.clone());

    assert_eq!(err.request_id(), Some(&request_id));
}
