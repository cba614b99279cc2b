use super::*;

#[test]
fn test_input_loop_visits_every_byte() {
    let run = run_ok("[.>]", "abc");
    assert_eq!(run.bytes(), b"abc");
}

#[test]
fn test_input_loop_echo() {
    let run = run_ok("[.;>]", "hey");
    assert_eq!(run.output(), "hey");
}

#[test]
fn test_input_loop_pass_count() {
    // One push per pass; the pass that moves the cursor onto the end is the last
    for input in ["x", "ab", "hello"] {
        let run = run_ok("[1>]", input);
        assert_eq!(run.bytes().len(), input.len(), "input {input:?}");
    }
    // The body always runs once, even with nothing to read
    assert_eq!(run_ok("[.>]", "").bytes(), [0]);
}

#[test]
fn test_data_loop_countdown() {
    let run = run_ok("\\3{&:\\1-}", "");
    assert_eq!(run.output(), "321");
    assert_eq!(run.vals(), vec![Val::Byte(0)]);
}

#[test]
fn test_data_loop_exits_on_empty_stack() {
    let run = run_ok("{}a", "");
    assert_eq!(run.bytes(), b"a");
}

#[test]
fn test_nested_data_loops() {
    // The inner loop's waypoint is dropped when it finishes, so the outer `}`
    // returns to the outer `{`
    let run = run_ok("\\2{\\3{&:\\1-},\\1-}", "");
    assert_eq!(run.output(), "321321");
    assert_eq!(run.vals(), vec![Val::Byte(0)]);
}

#[test]
fn test_data_loop_inside_input_loop() {
    let run = run_ok("[.\\2{\\1-},>]", "ab");
    assert_eq!(run.bytes(), b"ab");
}

#[test]
fn test_comment_skips_to_newline() {
    assert_eq!(run_ok("a#bc\nd", "").bytes(), b"ad");
    assert_eq!(run_ok("a#bc", "").bytes(), b"a");
    assert!(run_ok("#\n", "").bytes().is_empty());
}

#[test]
fn test_comment_hides_opcodes() {
    let run = run_ok("#,,,;\nx", "");
    assert_eq!(run.bytes(), b"x");
    assert!(run.output().is_empty());
}

#[test]
fn test_skip_can_jump_over_opcode() {
    // The skipped `,` never runs, so the remaining 'a' survives
    let run = run_ok("aa?,", "");
    assert_eq!(run.bytes(), b"a");
}

#[test]
fn test_input_loop_close_without_open() {
    let run = run("]", "a");
    let err = run.error();
    assert_eq!(err.kind, ErrorKind::MissingWaypoint);
    assert_eq!(err.location, Some(Location::new(0, b']')));

    // Nothing left to read: `]` just falls through
    assert!(run_ok("]", "").bytes().is_empty());
}

#[test]
fn test_data_loop_close_without_open() {
    let run = run("a}", "");
    assert_eq!(run.error().kind, ErrorKind::MissingWaypoint);
    assert_eq!(run.error().to_string(), "Character 2 ('}'): No waypoint to return to");
}
