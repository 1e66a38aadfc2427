#![allow(clippy::unwrap_used, clippy::expect_used)]

use petadopt_core::logging_facility::test_capture::init_test_capture;
use petadopt_core::{log_op_end, log_op_error, log_op_start, EntityKind, PetAdoptError};
use petadopt_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ENTITY, FIELD_ERR_CODE,
    FIELD_ERR_KIND,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, entity = "Pet");

    capture.assert_event_exists(op_name, EVENT_START);
    let matching = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.fields.get(FIELD_ENTITY) == Some(&"Pet".to_string())
    });
    assert_eq!(matching, 1);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42u64);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get(FIELD_DURATION_MS),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = PetAdoptError::DuplicateKey {
        entity: EntityKind::Pet,
        key: "P1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10u64);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event captured");

    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_DUPLICATE_KEY".to_string())
    );
    assert_eq!(
        error_event.fields.get(FIELD_ERR_KIND),
        Some(&"DuplicateKey".to_string())
    );
    assert_eq!(error_event.level, tracing::Level::ERROR);
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_4";

    log_op_start!(op_name);

    let events = capture.events();
    let event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("start event captured");
    assert_eq!(
        event.component.as_deref(),
        Some("logging_facility_tests")
    );
}
