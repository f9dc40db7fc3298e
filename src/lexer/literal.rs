//! # Literal helpers
//!
//! Shared, pure routines used inline by the tokenizer while it scans number,
//! string, and character literals.

use crate::error::{AssemblerError, ErrorKind};

pub const SHRT_MIN: i64 = -32768;
pub const USHRT_MAX: i64 = 65535;
pub const CHAR_MIN: i32 = -128;
pub const UCHAR_MAX: i32 = 255;
pub const MAX_STRING_LEN: usize = 255;
pub const MAX_IDENTIFIER_LEN: usize = 31;

pub fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_digit() || (b'a'..=b'f').contains(&c) || (b'A'..=b'F').contains(&c)
}

pub fn hex_digit_value(c: u8) -> u32 {
    match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'a'..=b'f' => 10 + (c - b'a') as u32,
        b'A'..=b'F' => 10 + (c - b'A') as u32,
        _ => unreachable!("caller must check is_hex_digit first"),
    }
}

pub fn is_terminator(c: u8, comma_ok: bool) -> bool {
    c == b';' || c.is_ascii_whitespace() || (comma_ok && c == b',')
}

/// Decodes one escape sequence, given that the leading `\` has already been
/// consumed by the caller. Returns the single decoded byte.
pub fn decode_escape(
    cursor: &mut crate::lexer::cursor::Cursor,
    line: usize,
) -> Result<u8, AssemblerError> {
    let c = cursor
        .advance()
        .ok_or_else(|| AssemblerError::new(ErrorKind::UnterminatedString, line))?;
    match c {
        b'n' | b'N' => Ok(b'\n'),
        b't' | b'T' => Ok(b'\t'),
        b'r' | b'R' => Ok(b'\r'),
        b'\'' | b'"' | b'\\' => Ok(c),
        b'x' | b'X' => {
            let h1 = cursor
                .advance()
                .ok_or_else(|| AssemblerError::new(ErrorKind::UnterminatedString, line))?;
            let h2 = cursor
                .advance()
                .ok_or_else(|| AssemblerError::new(ErrorKind::UnterminatedString, line))?;
            if !is_hex_digit(h1) || !is_hex_digit(h2) {
                return Err(AssemblerError::new(ErrorKind::InvalidEscapeSequence, line));
            }
            Ok(((hex_digit_value(h1) << 4) | hex_digit_value(h2)) as u8)
        }
        _ => Err(AssemblerError::new(ErrorKind::InvalidEscapeSequence, line)),
    }
}
