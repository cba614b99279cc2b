use std::io::{self, Write};

use super::Val;

/// Values above this print in scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 1e6;
const FRACTION_DIGITS: usize = 6;

/// Render a value the way `:` prints it.
///
/// Bytes print as signed integers. Floats print like C's `%f`, switching to
/// `%e` (`1.500000e+07`) once they exceed one million.
pub fn format_number(val: Val) -> String {
    match val {
        Val::Byte(b) => {
            let mut buf = itoa::Buffer::new();
            buf.format(b).to_string()
        }
        Val::Float(_) | Val::Double(_) => format_float(val.as_f64()),
    }
}

fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if n > SCIENTIFIC_THRESHOLD {
        format_scientific(n)
    } else {
        format!("{:.*}", FRACTION_DIGITS, n)
    }
}

fn format_scientific(n: f64) -> String {
    let raw = format!("{:.*e}", FRACTION_DIGITS, n);
    // Rust writes `1.5e7`; C wants a signed exponent of at least two digits.
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        None => raw,
    }
}

pub fn write_number<W: Write + ?Sized>(out: &mut W, val: Val) -> io::Result<()> {
    out.write_all(format_number(val).as_bytes())
}

pub fn write_char<W: Write + ?Sized>(out: &mut W, val: Val) -> io::Result<()> {
    out.write_all(&[val.to_byte()])
}
