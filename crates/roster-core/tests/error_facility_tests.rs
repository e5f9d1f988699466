use roster_core::errors::{ExError, ExErrorKind, RosterError, Step};

#[test]
fn test_empty_field_is_invalid_input() {
    let err: ExError = RosterError::EmptyField {
        field: "Last name".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.code(), "ERR_INVALID_INPUT");
    assert_eq!(err.op(), Some("validate_last_name"));
    assert_eq!(err.message(), "Last name cannot be empty");
}

#[test]
fn test_not_found_carries_entity_id() {
    let err: ExError = RosterError::RoleNotFound { role_id: 12 }.into();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("12"));
}

#[test]
fn test_unresolved_label_distinct_from_persistence_failure() {
    let err: ExError = RosterError::UnresolvedLabel {
        label: "Ghost".to_string(),
        candidate_count: 2,
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::ResolutionMismatch);
    assert_ne!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.step(), Some(Step::Resolve));
    assert_eq!(
        err.user_message(),
        "Resolving the selection failed: 'Ghost' does not match any of the 2 offered choices"
    );
}

#[test]
fn test_no_choices_surfaces_at_prompt() {
    let err: ExError = RosterError::NoChoices {
        what: "departments".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::NoChoices);
    assert_eq!(
        err.user_message(),
        "Reading input failed: No departments exist yet; add one first"
    );
}

#[test]
fn test_with_step_overrides_previous_step() {
    let err = ExError::new(ExErrorKind::Persistence)
        .with_step(Step::Fetch)
        .with_step(Step::Persist);
    assert_eq!(err.step(), Some(Step::Persist));
}

#[test]
fn test_error_carries_no_lower_level_source() {
    let err: ExError = RosterError::DepartmentNotFound { department_id: 3 }.into();
    assert!(std::error::Error::source(&err).is_none());
    assert!(err.to_string().contains("ERR_NOT_FOUND"));
}
