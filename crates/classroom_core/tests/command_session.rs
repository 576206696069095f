use classroom_core::{ClassroomRegistry, CommandDispatcher, Dispatch};

fn session() -> CommandDispatcher {
    CommandDispatcher::new(ClassroomRegistry::new())
}

fn reply(dispatcher: &mut CommandDispatcher, line: &str) -> String {
    match dispatcher.dispatch_line(line) {
        Dispatch::Reply(text) => text,
        other => panic!("expected reply for `{line}`, got {other:?}"),
    }
}

#[test]
fn happy_path_scenario_yields_four_success_lines() {
    let mut dispatcher = session();

    assert_eq!(
        reply(&mut dispatcher, "add_classroom Math101"),
        "Classroom Math101 has been created."
    );
    assert_eq!(
        reply(&mut dispatcher, "add_student S1 Math101"),
        "Student S1 has been enrolled in Math101."
    );
    assert_eq!(
        reply(&mut dispatcher, "schedule_assignment Math101 HW1"),
        "Assignment for Math101 has been scheduled."
    );
    assert_eq!(
        reply(&mut dispatcher, "submit_assignment S1 Math101 HW1"),
        "Assignment submitted by Student S1 in Math101."
    );

    // Resubmission succeeds again without duplicating the submitter.
    assert_eq!(
        reply(&mut dispatcher, "submit_assignment S1 Math101 HW1"),
        "Assignment submitted by Student S1 in Math101."
    );
    let room = dispatcher
        .registry()
        .get_classroom("Math101")
        .expect("classroom should exist");
    let assignment = &room.assignments()[0];
    assert_eq!(assignment.submitters.len(), 1);
    assert!(assignment.has_submission("S1"));
}

#[test]
fn list_students_on_unknown_classroom_is_a_diagnostic_not_an_empty_list() {
    let mut dispatcher = session();
    assert_eq!(
        reply(&mut dispatcher, "list_students Unknown"),
        "classroom not found: Unknown"
    );
}

#[test]
fn empty_and_populated_listings_render_as_specified() {
    let mut dispatcher = session();
    assert_eq!(reply(&mut dispatcher, "list_classrooms"), "No classrooms available.");

    reply(&mut dispatcher, "add_classroom Math101");
    reply(&mut dispatcher, "add_classroom Bio202");
    assert_eq!(reply(&mut dispatcher, "list_classrooms"), "Bio202\nMath101");

    assert_eq!(
        reply(&mut dispatcher, "list_students Math101"),
        "No students in Math101"
    );
    reply(&mut dispatcher, "add_student S2 Math101");
    reply(&mut dispatcher, "add_student S1 Math101");
    assert_eq!(reply(&mut dispatcher, "list_students Math101"), "S1\nS2");
}

#[test]
fn domain_errors_never_end_the_session() {
    let mut dispatcher = session();

    assert_eq!(
        reply(&mut dispatcher, "remove_classroom Ghost"),
        "classroom not found: Ghost"
    );
    assert_eq!(
        reply(&mut dispatcher, "submit_assignment S1 Ghost HW1"),
        "invalid classroom or student for submission: student S1 in Ghost"
    );

    // The interpreter keeps accepting commands after diagnostics.
    assert_eq!(
        reply(&mut dispatcher, "add_classroom Ghost"),
        "Classroom Ghost has been created."
    );
}

#[test]
fn malformed_input_is_rejected_before_reaching_the_registry() {
    let mut dispatcher = session();

    let text = reply(&mut dispatcher, "add_student S1");
    assert!(text.contains("Malformed command"), "got `{text}`");
    let text = reply(&mut dispatcher, "schedule_assignment Math101");
    assert!(text.contains("Malformed command"), "got `{text}`");

    // No classroom sprang into existence from a half-parsed command.
    assert_eq!(reply(&mut dispatcher, "list_classrooms"), "No classrooms available.");
}

#[test]
fn classroom_names_may_contain_spaces_where_the_grammar_allows() {
    let mut dispatcher = session();
    assert_eq!(
        reply(&mut dispatcher, "add_classroom Intro to Rust"),
        "Classroom Intro to Rust has been created."
    );
    assert_eq!(
        reply(&mut dispatcher, "list_students Intro to Rust"),
        "No students in Intro to Rust"
    );
}

#[test]
fn assignment_details_with_spaces_round_trip_through_submission() {
    let mut dispatcher = session();
    reply(&mut dispatcher, "add_classroom Math101");
    reply(&mut dispatcher, "add_student S1 Math101");
    reply(&mut dispatcher, "schedule_assignment Math101 Read chapter 4");
    assert_eq!(
        reply(&mut dispatcher, "submit_assignment S1 Math101 Read chapter 4"),
        "Assignment submitted by Student S1 in Math101."
    );
}
