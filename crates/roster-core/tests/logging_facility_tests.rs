#![allow(clippy::unwrap_used, clippy::expect_used)]

use roster_core::errors::{ExError, ExErrorKind, RosterError, Step};
use roster_core::logging_facility::test_capture::init_test_capture;
use roster_core::roster_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use roster_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_step() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err: ExError = RosterError::DepartmentNotFound { department_id: 9 }.into();
    log_op_error!(op_name, err.with_step(Step::Persist), duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1);
    let event = &error_events[0];
    assert_eq!(event.level, tracing::Level::ERROR);
    assert_eq!(event.field("err_code"), Some(ExErrorKind::NotFound.code()));
    assert_eq!(event.field("step"), Some("persist"));
}

#[test]
fn test_extra_fields_are_captured() {
    let capture = init_test_capture();
    let op_name = "test_log_op_fields_unique_4";

    log_op_start!(op_name, department_id = 3_i64);

    let events = capture.events_for_op(op_name);
    assert_eq!(events[0].field("department_id"), Some("3"));
}
