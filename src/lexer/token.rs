//! # Token Types
//!
//! Defines all token kinds produced by the W16 tokenizer.

/// A single lexical token. Diagnostics in this format carry only a line
/// number, never a column or byte span, so `Token` is correspondingly
/// small.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub line: usize,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A bare name: an instruction mnemonic, or a label reference. A label
    /// reference may carry a `+`/`-` offset suffix absorbed verbatim (e.g.
    /// `target+2`), split and re-parsed later by the statement parser.
    Identifier(String),
    /// `.` followed by one or more letters, e.g. `.ORG`.
    Directive(String),
    /// A fully decoded, range-checked (`SHRT_MIN..=USHRT_MAX`) numeric
    /// literal.
    NumberLiteral(i32),
    /// The decoded bytes of a `"..."` literal, escapes already expanded.
    StringLiteral(Vec<u8>),
    /// The decoded bytes of a `'...'` literal — zero, one (optionally
    /// offset and byte-range-checked), or more bytes.
    CharacterLiteral(Vec<u8>),
    /// `#` followed by a nested number-or-character literal. Decoded
    /// eagerly, but range-checked against the byte range only at resolve
    /// time. `raw` is the original `#...` text, used to name the
    /// synthesized backing label if one is minted.
    ImmediateRef {
        raw: String,
        value: i32,
        is_char: bool,
    },
    /// An identifier immediately followed by `:`.
    LabelDefinition(String),
    EndOfFile,
}
