/// Value pushed by `\x`, indexed by `x`.
///
/// Digits escape to their numeric value and a few letters name control
/// characters (`\a` bell, `\b` backspace, `\f`, `\n`, `\r`, `\t`, `\v`).
/// Codes below the space cycle through the digit characters. This is a
/// compatibility table; keep it byte-exact.
#[rustfmt::skip]
pub const ESCAPED: [u8; 128] = [
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1',
    b' ', b'!', b'"', b'#', b'$', b'%', b'&', b'\'', b'(', b')', b'*', b'+', b',', b'-', b'.', b'/',
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
    b':', b';', b'<', b'=', b'>', b'?', b'@',
    b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M',
    b'N', b'O', b'P', b'Q', b'R', b'S', b'T', b'U', b'V', b'W', b'X', b'Y', b'Z',
    b'[', b'\\', b']', b'^', b'_', b'`',
    // a      b     c     d     e     f     g     h     i     j     k     l     m
    0x07, 0x08, b'c', b'd', 0x17, 0x0c, b'g', b'h', b'i', b'j', b'k', b'l', b'm',
    // n      o     p     q     r     s     t     u     v     w     x     y     z
    b'\n', b'o', b'p', b'q', b'\r', b's', b'\t', b'u', 0x0b, b'w', b'x', b'y', b'z',
    b'{', b'|', b'}', b'~', b'H',
];

/// Escape one byte. Bytes outside the table escape to themselves.
#[inline]
pub fn escape(byte: u8) -> u8 {
    ESCAPED.get(byte as usize).copied().unwrap_or(byte)
}
