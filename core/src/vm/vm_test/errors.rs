use super::*;

#[test]
fn test_step_limit_stops_endless_loop() {
    let config = VmConfig::default().with_max_steps(Some(100));
    let run = run_with(config, "[]", "a");
    let err = run.error();
    assert_eq!(err.kind, ErrorKind::StepLimit);
    assert_eq!(err.message, "Step limit (100) exceeded");
}

#[test]
fn test_step_limit_not_hit() {
    let config = VmConfig::default().with_max_steps(Some(3));
    let run = run_with(config, "a_b\nc", "");
    // Skipped bytes do not count as steps
    assert!(run.result.is_ok());
    assert_eq!(run.vm.context().steps(), 3);
}

#[test]
fn test_pop_empty_reports_position() {
    let run = run("ab,,,", "");
    let err = run.error();
    assert_eq!(err.kind, ErrorKind::EmptyData);
    assert_eq!(err.to_string(), "Character 5 (','): Data empty");
}

#[test]
fn test_output_before_error_is_kept() {
    let run = run("ih;;,", "");
    assert_eq!(run.output(), "hi");
    assert_eq!(run.error().kind, ErrorKind::EmptyData);
}

#[test]
fn test_escape_at_end() {
    let run = run("\\", "");
    let err = run.error();
    assert_eq!(err.kind, ErrorKind::UnexpectedEnd);
    assert_eq!(err.to_string(), "Character 1 ('\\'): Expected a character to escape, got EOF");
}

#[test]
fn test_skip_needs_two_items() {
    assert_eq!(run("1?", "").error().kind, ErrorKind::EmptyData);
    assert_eq!(run("?", "").error().kind, ErrorKind::EmptyData);
}

#[test]
fn test_skip_past_end() {
    let run = run("11?", "");
    let err = run.error();
    assert_eq!(err.kind, ErrorKind::NoInstructionToSkip);
    assert_eq!(err.location, Some(Location::new(2, b'?')));
    // The compared item was already popped
    assert_eq!(run.bytes(), b"1");
}

#[test]
fn test_arithmetic_needs_two_items() {
    let run = run("a+", "");
    assert_eq!(run.error().kind, ErrorKind::EmptyData);
    assert_eq!(run.bytes(), b"a");
}

#[test]
fn test_print_and_dup_on_empty_stack() {
    for program in [";", ":", "&", ","] {
        assert_eq!(run(program, "").error().kind, ErrorKind::EmptyData, "program {program:?}");
    }
}

#[test]
fn test_error_kind_through_anyhow() {
    let run = run("\\1\\", "");
    let err = run.result.as_ref().unwrap_err();
    assert_eq!(error_kind(err), Some(ErrorKind::UnexpectedEnd));
    assert_eq!(run.bytes(), [1]);
}

#[test]
fn test_nested_error_keeps_inner_location() {
    // The failing `,` is at index 3 of the body, not of the caller
    let run = run("%e\\1,,^$e", "");
    let err = run.error();
    assert_eq!(err.kind, ErrorKind::EmptyData);
    assert_eq!(err.location, Some(Location::new(3, b',')));
}

#[test]
fn test_vm_usable_after_error() {
    let mut run = run(",", "");
    assert!(run.result.is_err());
    let mut out: Vec<u8> = Vec::new();
    run.vm.exec(b"ok", b"", &mut out).unwrap();
    assert_eq!(run.bytes(), b"ok");
}
