use classroom_core::{ClassroomRegistry, RegistryError};

#[test]
fn create_list_remove_roundtrip() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.create_classroom("Bio202").unwrap();
    assert_eq!(
        registry.classroom_names(),
        vec!["Bio202".to_string(), "Math101".to_string()]
    );

    registry.remove_classroom("Bio202").unwrap();
    assert_eq!(registry.classroom_names(), vec!["Math101".to_string()]);
}

#[test]
fn duplicate_create_leaves_existing_state_unchanged() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();
    registry.schedule_assignment("Math101", "HW1").unwrap();

    let err = registry.create_classroom("Math101").unwrap_err();
    assert_eq!(err, RegistryError::DuplicateClassroom("Math101".into()));

    assert_eq!(registry.student_ids("Math101").unwrap(), vec!["S1".to_string()]);
    registry.submit_assignment("S1", "Math101", "HW1").unwrap();
}

#[test]
fn removed_classroom_is_gone_for_lookups() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();
    registry.remove_classroom("Math101").unwrap();

    let err = registry.student_ids("Math101").unwrap_err();
    assert_eq!(err, RegistryError::ClassroomNotFound("Math101".into()));
}

#[test]
fn recreated_classroom_starts_empty() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();
    registry.remove_classroom("Math101").unwrap();

    registry.create_classroom("Math101").unwrap();
    assert!(registry.student_ids("Math101").unwrap().is_empty());
}

#[test]
fn repeated_enrollment_lists_single_occurrence() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();

    assert_eq!(registry.student_ids("Math101").unwrap(), vec!["S1".to_string()]);
}

#[test]
fn enrollment_into_unknown_classroom_fails() {
    let mut registry = ClassroomRegistry::new();
    let err = registry.enroll_student("S1", "Ghost").unwrap_err();
    assert_eq!(err, RegistryError::ClassroomNotFound("Ghost".into()));
}

#[test]
fn listing_students_of_unknown_classroom_is_an_error_not_empty() {
    let registry = ClassroomRegistry::new();
    let err = registry.student_ids("Unknown").unwrap_err();
    assert_eq!(err, RegistryError::ClassroomNotFound("Unknown".into()));
}

#[test]
fn submission_is_idempotent_in_state_effect() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();
    registry.schedule_assignment("Math101", "HW1").unwrap();

    let first = registry.submit_assignment("S1", "Math101", "HW1").unwrap();
    assert!(first.newly_recorded);

    let second = registry.submit_assignment("S1", "Math101", "HW1").unwrap();
    assert!(!second.newly_recorded);
    assert_eq!(second.assignment_id, first.assignment_id);
}

#[test]
fn submission_without_enrollment_is_invalid_context() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.schedule_assignment("Math101", "HW1").unwrap();

    let err = registry.submit_assignment("S1", "Math101", "HW1").unwrap_err();
    assert_eq!(
        err,
        RegistryError::InvalidSubmissionContext {
            student_id: "S1".into(),
            class_name: "Math101".into(),
        }
    );
}

#[test]
fn submission_against_unknown_prompt_is_assignment_not_found() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();

    let err = registry.submit_assignment("S1", "Math101", "HW9").unwrap_err();
    assert_eq!(
        err,
        RegistryError::AssignmentNotFound {
            class_name: "Math101".into(),
            prompt: "HW9".into(),
        }
    );
}

#[test]
fn duplicate_prompts_resolve_to_first_scheduled_assignment() {
    let mut registry = ClassroomRegistry::new();
    registry.create_classroom("Math101").unwrap();
    registry.enroll_student("S1", "Math101").unwrap();

    let first = registry.schedule_assignment("Math101", "HW1").unwrap();
    let second = registry.schedule_assignment("Math101", "HW1").unwrap();
    assert_ne!(first, second);

    let outcome = registry.submit_assignment("S1", "Math101", "HW1").unwrap();
    assert_eq!(outcome.assignment_id, first);
}

#[test]
fn registry_error_display_is_operator_readable() {
    assert_eq!(
        RegistryError::DuplicateClassroom("Math101".into()).to_string(),
        "classroom already exists: Math101"
    );
    assert_eq!(
        RegistryError::ClassroomNotFound("Math101".into()).to_string(),
        "classroom not found: Math101"
    );
    assert_eq!(
        RegistryError::AssignmentNotFound {
            class_name: "Math101".into(),
            prompt: "HW1".into(),
        }
        .to_string(),
        "assignment not found in Math101: HW1"
    );
}
