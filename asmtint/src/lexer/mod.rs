//!
//! Lexer Module - Zero-Copy Tokenization
//!
//! This module splits an assembly listing into a flat sequence of tokens.
//! Unlike a parser front end it keeps everything: whitespace, punctuation
//! and newlines become tokens too, so the tokens of one run concatenate back
//! to the exact input.
//!
//! Key design decisions:
//! - Zero-copy: Tokens are (position, length) pairs into the listing
//! - Single pass with one byte of lookahead, no backtracking
//! - Lenient: every byte sequence tokenizes, malformed numbers included
//! - Identifier-like tokens are refined by the architecture's keyword table
//!
//! Token classes, by first byte:
//! - `.`: Directive
//! - letter, `_`, `@`: Identifier (or Register/Instruction/Qualifier)
//! - digit, `-`: Number
//! - `"`: String
//! - `#` (x86, Wasm) or `;` (ARM): Comment to end of line
//! - `\r`, `\n`, `\r\n`: NewLine
//! - anything else: Other, up to the next byte that starts a class above
//!

use std::fmt;

use memchr::memchr2;
use serde::Serialize;

use crate::keywords::{Architecture, KeywordTable};
use crate::source::StringSlice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    EndOfInput,
    Directive,
    Identifier,
    Qualifier,
    Instruction,
    InstructionSimd,
    Register,
    Number,
    String,
    Comment,
    NewLine,
    Other,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Directive => "Directive",
            TokenKind::Identifier => "Identifier",
            TokenKind::Qualifier => "Qualifier",
            TokenKind::Instruction => "Instruction",
            TokenKind::InstructionSimd => "InstructionSimd",
            TokenKind::Register => "Register",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Comment => "Comment",
            TokenKind::NewLine => "NewLine",
            TokenKind::Other => "Other",
        }
    }

    pub fn is_instruction(self) -> bool {
        matches!(self, TokenKind::Instruction | TokenKind::InstructionSimd)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified run of bytes in the listing. The text is not stored; use
/// [`Token::text`] with the buffer the token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
    pub length: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, position: usize, length: usize) -> Self {
        Self {
            kind,
            position,
            length,
        }
    }

    pub fn end(&self) -> usize {
        self.position + self.length
    }

    /// The token text, or `""` if `source` is not the buffer it came from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.position..self.end()).unwrap_or_default()
    }

    pub fn slice<'a>(&self, source: &'a str) -> Option<StringSlice<'a>> {
        StringSlice::from_range(source, self.position, self.length)
    }

    /// `text : Kind`, with control characters escaped. Used by token dumps.
    pub fn to_friendly_text(&self, source: &str) -> String {
        format!("{} : {}", self.text(source).escape_debug(), self.kind)
    }

    /// Whitespace and punctuation between the interesting tokens.
    pub fn is_filler(&self) -> bool {
        self.kind == TokenKind::Other
    }

    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::NewLine
    }
}

pub fn tokenize(source: &str, arch: Architecture) -> Vec<Token> {
    let mut tokens = Vec::new();
    tokenize_into(source, arch, &mut tokens);
    tokens
}

/// Appends the tokens of `source` to `tokens`, reusing its allocation.
pub fn tokenize_into(source: &str, arch: Architecture, tokens: &mut Vec<Token>) {
    // Compiler listings average a little under one token per 7 bytes
    tokens.reserve(source.len() / 7);
    tokens.extend(Lexer::new(source, arch));
}

#[inline(always)]
fn is_ident_start(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'@')
}

#[inline(always)]
fn is_ident_continue(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'@')
}

#[inline(always)]
fn is_directive_continue(b: u8) -> bool {
    is_ident_continue(b) || b == b'.'
}

#[inline(always)]
fn is_number_start(b: u8) -> bool {
    b.is_ascii_digit() || b == b'-'
}

#[inline(always)]
fn is_number_continue(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F' | b'x' | b'.')
}

pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    table: &'static KeywordTable,
    comment: u8,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, arch: Architecture) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            table: arch.keyword_table(),
            comment: arch.comment_byte(),
        }
    }

    #[inline(always)]
    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline(always)]
    fn advance_byte(&mut self) -> Option<u8> {
        let b = self.peek_byte()?;
        self.pos += 1;
        Some(b)
    }

    #[inline(always)]
    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let rest = &self.bytes[self.pos..];
        self.pos += rest.iter().position(|&b| !pred(b)).unwrap_or(rest.len());
    }

    /// Whether `b` begins any class other than Other.
    #[inline(always)]
    fn starts_token(&self, b: u8) -> bool {
        b == b'.'
            || is_ident_start(b)
            || is_number_start(b)
            || b == b'"'
            || b == self.comment
            || b == b'\r'
            || b == b'\n'
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let start = self.pos;
        let b = self.advance_byte()?;

        let kind = match b {
            b'.' => {
                self.eat_while(is_directive_continue);
                TokenKind::Directive
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'@' => self.scan_identifier(start),
            b'0'..=b'9' | b'-' => {
                self.eat_while(is_number_continue);
                TokenKind::Number
            }
            b'"' => self.scan_string(),
            b'\r' => {
                if self.peek_byte() == Some(b'\n') {
                    self.pos += 1;
                }
                TokenKind::NewLine
            }
            b'\n' => TokenKind::NewLine,
            b if b == self.comment => self.scan_comment(),
            _ => self.scan_other(),
        };

        Some(Token::new(kind, start, self.pos - start))
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.eat_while(is_ident_continue);

        if let Some(b) = self.peek_byte() {
            if b.is_ascii() && self.table.accepts_trailing_char(char::from(b)) {
                self.pos += 1;
            }
        }

        // Only ASCII bytes were consumed, so the range is on char boundaries
        match StringSlice::from_range(self.source, start, self.pos - start) {
            Some(slice) => self.table.classify(&slice),
            None => TokenKind::Identifier,
        }
    }

    fn scan_string(&mut self) -> TokenKind {
        loop {
            match memchr2(b'"', b'\\', &self.bytes[self.pos..]) {
                Some(offset) => {
                    self.pos += offset + 1;
                    if self.bytes[self.pos - 1] == b'"' {
                        return TokenKind::String;
                    }
                    if self.peek_byte() == Some(b'"') {
                        self.pos += 1;
                    }
                }
                None => {
                    // Unterminated: the string runs to the end of the listing
                    self.pos = self.bytes.len();
                    return TokenKind::String;
                }
            }
        }
    }

    fn scan_comment(&mut self) -> TokenKind {
        match memchr2(b'\n', b'\r', &self.bytes[self.pos..]) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.bytes.len(),
        }
        TokenKind::Comment
    }

    fn scan_other(&mut self) -> TokenKind {
        while let Some(b) = self.peek_byte() {
            if self.starts_token(b) {
                break;
            }
            self.pos += 1;
        }
        TokenKind::Other
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
