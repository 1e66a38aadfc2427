#![allow(clippy::unwrap_used, clippy::expect_used)]

// Boundary logging emitted by the record commands.

use petadopt_core::logging_facility::test_capture::init_test_capture;
use petadopt_core::{Adopter, FormFields, Pet};
use petadopt_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ENTITY, FIELD_ERR_CODE, FIELD_KEY,
};
use petadopt_service::CrudService;
use petadopt_store::StoreConfig;
use tempfile::TempDir;

fn setup_service() -> (TempDir, CrudService) {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path().join("logging.db"));
    (temp_dir, CrudService::open(config).unwrap())
}

#[test]
fn test_create_emits_start_and_end() {
    let capture = init_test_capture();
    let (_tmp, service) = setup_service();

    let form = FormFields::new()
        .with("PetID", "LOG-P1")
        .with("PetName", "Rex")
        .with("Breed", "Lab")
        .with("Age", "3")
        .with("HealthStatus", "Healthy");
    service.create::<Pet>(&form).unwrap();

    capture.assert_event_exists("record_create", EVENT_START);
    capture.assert_event_exists("record_create", EVENT_END);

    service.get::<Pet>("LOG-P1").unwrap();
    let keyed = capture.count_events(|e| {
        e.op.as_deref() == Some("record_get")
            && e.fields.get(FIELD_KEY).map(String::as_str) == Some("LOG-P1")
    });
    assert_eq!(keyed, 1);
}

#[test]
fn test_failed_get_emits_error_code() {
    let capture = init_test_capture();
    let (_tmp, service) = setup_service();

    service.get::<Pet>("LOG-MISSING").unwrap_err();

    capture.assert_event_exists("record_get", EVENT_END_ERROR);
    let not_found = capture.count_events(|e| {
        e.op.as_deref() == Some("record_get")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get(FIELD_ERR_CODE).map(String::as_str) == Some("ERR_NOT_FOUND")
            && e.fields.get(FIELD_ENTITY).map(String::as_str) == Some("Pet")
    });
    assert!(not_found >= 1);
}

#[test]
fn test_adopter_personal_data_never_logged() {
    let capture = init_test_capture();
    let (_tmp, service) = setup_service();

    let form = FormFields::new()
        .with("AdopterID", "LOG-A1")
        .with("FirstName", "Jane")
        .with("LastName", "Doe")
        .with("Contact", "555-867-5309")
        .with("Address", "742 Evergreen Terrace")
        .with("City", "Springfield")
        .with("State", "IL")
        .with("Country", "USA");
    service.create::<Adopter>(&form).unwrap();

    let leaked = capture.count_events(|e| {
        e.fields
            .values()
            .any(|v| v.contains("555-867-5309") || v.contains("742 Evergreen Terrace"))
    });
    assert_eq!(leaked, 0);
    let redacted = capture.count_events(|e| {
        e.op.as_deref() == Some("record_create")
            && e.fields.get("form").is_some_and(|f| f.contains("LOG-A1"))
    });
    assert_eq!(redacted, 1);
}
