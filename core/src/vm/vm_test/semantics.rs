use super::*;

#[test]
fn test_literals_push_in_order() {
    let run = run_ok("abc", "");
    assert_eq!(run.bytes(), b"abc");
    assert_eq!(run.vals()[0], Val::Byte(97));
}

#[test]
fn test_digits_are_literals() {
    let run = run_ok("19", "");
    assert_eq!(run.vals(), vec![Val::Byte(49), Val::Byte(57)]);
}

#[test]
fn test_newline_and_underscore_are_skipped() {
    let run = run_ok("a_b\nc_", "");
    assert_eq!(run.bytes(), b"abc");
}

#[test]
fn test_reverse() {
    assert_eq!(run_ok("abc!", "").bytes(), b"cba");
    assert_eq!(run_ok("abc!!", "").bytes(), b"abc");
    assert!(run_ok("!", "").bytes().is_empty());
}

#[test]
fn test_rotate() {
    assert_eq!(run_ok("abc@", "").bytes(), b"bca");
    assert_eq!(run_ok("abc@@@", "").bytes(), b"abc");
    assert!(run_ok("@", "").bytes().is_empty());
}

#[test]
fn test_dup_and_pop() {
    assert_eq!(run_ok("x&", "").bytes(), b"xx");
    assert_eq!(run_ok("x&,", "").bytes(), b"x");
}

#[test]
fn test_escapes_push_values() {
    let run = run_ok("\\1\\n\\\\", "");
    assert_eq!(run.vals(), vec![Val::Byte(1), Val::Byte(10), Val::Byte(b'\\' as i8)]);
}

#[test]
fn test_arithmetic_operand_order() {
    assert_eq!(run_ok("\\1\\2+", "").vals(), vec![Val::Byte(3)]);
    assert_eq!(run_ok("\\2\\7-", "").vals(), vec![Val::Byte(-5)]);
    assert_eq!(run_ok("\\3\\4*", "").vals(), vec![Val::Byte(12)]);
    assert_eq!(run_ok("\\7\\2/", "").vals(), vec![Val::Byte(3)]);
}

#[test]
fn test_division_by_zero_divides_by_one() {
    assert_eq!(run_ok("\\7\\0/", "").vals(), vec![Val::Byte(7)]);

    let run = run_with(VmConfig::new(Mode::Double), "\\7\\0/", "");
    assert_eq!(run.vals(), vec![Val::Double(7.0)]);
}

#[test]
fn test_byte_arithmetic_wraps() {
    let run = run_ok("zz*:", "");
    assert_eq!(run.output(), "36");
}

#[test]
fn test_skip_when_equal() {
    // `?` pops the duplicate, skips '2', then pushes '3'
    let run = run_ok("1&?23", "");
    assert_eq!(run.vals(), vec![Val::Byte(49), Val::Byte(51)]);
}

#[test]
fn test_no_skip_when_different() {
    let run = run_ok("12?34", "");
    assert_eq!(run.bytes(), b"134");
}

#[test]
fn test_skip_compares_in_float_modes() {
    let run = run_with(VmConfig::new(Mode::Double), "1&?23", "");
    assert!(run.result.is_ok());
    assert_eq!(run.vals(), vec![Val::Double(49.0), Val::Double(51.0)]);
}

#[test]
fn test_input_cursor() {
    assert_eq!(run_ok(".>.>.", "ab").bytes(), [b'a', b'b', 0]);
    assert_eq!(run_ok("<.", "ab").bytes(), b"a");
    assert_eq!(run_ok(">>>>.<.", "ab").bytes(), [0, b'b']);
    assert_eq!(run_ok(".", "").bytes(), [0]);
}

#[test]
fn test_input_cast_to_mode() {
    let run = run_with(VmConfig::new(Mode::Float), ".", "A");
    assert_eq!(run.vals(), vec![Val::Float(65.0)]);
}

#[test]
fn test_print_char() {
    let run = run_ok("ih;;", "");
    assert_eq!(run.output(), "hi");
    assert!(run.bytes().is_empty());
}

#[test]
fn test_print_number_byte_mode() {
    assert_eq!(run_ok("\\7:", "").output(), "7");
    assert_eq!(run_ok("\\2\\7-:", "").output(), "-5");
}

#[test]
fn test_print_number_float_modes() {
    let run = run_with(VmConfig::new(Mode::Double), "\\1\\2/:", "");
    assert_eq!(run.output(), "0.500000");

    let run = run_with(VmConfig::new(Mode::Float), "\\3\\2*:", "");
    assert_eq!(run.output(), "6.000000");
}

#[test]
fn test_print_number_scientific() {
    let run = run_with(VmConfig::new(Mode::Double), "zzz**:", "");
    assert_eq!(run.output(), "1.815848e+06");

    let run = run_with(VmConfig::new(Mode::Float), "zzz**:", "");
    assert_eq!(run.output(), "1.815848e+06");
}

#[test]
fn test_non_ascii_bytes_round_trip() {
    // 'é' is two bytes, both pushed as negative signed bytes
    let run = run_ok("é", "");
    assert_eq!(run.vals(), vec![Val::Byte(0xC3u8 as i8), Val::Byte(0xA9u8 as i8)]);

    let run = run_ok("é!;;", "");
    assert_eq!(run.output(), "é");
}

#[test]
fn test_stack_persists_across_exec() {
    let mut vm = Vm::default();
    let mut out: Vec<u8> = Vec::new();
    vm.exec(b"ab", b"", &mut out).unwrap();
    vm.exec(b"c", b"", &mut out).unwrap();
    let bytes: Vec<u8> = vm.stack().as_slice().iter().map(Val::to_byte).collect();
    assert_eq!(bytes, b"abc");
    assert_eq!(vm.into_stack().len(), 3);
}
