//!
//! Keyword Tables - Per-Architecture Token Classification
//!
//! The lexer only knows the shape of an identifier. Which identifiers are
//! registers, mnemonics or operand qualifiers depends on the target, and is
//! answered by the `KeywordTable` of the active `Architecture`.
//!
//! Tables are built once from constant word lists the first time an
//! architecture is used and are shared read-only afterwards. Lookups borrow
//! the listing text directly, so classifying never allocates.
//!

mod arm;
mod wasm;
mod x86;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::AnnotateError;
use crate::lexer::TokenKind;
use crate::source::StringSlice;

static X86_TABLE: LazyLock<KeywordTable> = LazyLock::new(x86::table);
static ARM_TABLE: LazyLock<KeywordTable> = LazyLock::new(arm::table);
static WASM_TABLE: LazyLock<KeywordTable> = LazyLock::new(wasm::table);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X86,
    Arm,
    Wasm,
}

impl Architecture {
    pub const ALL: [Architecture; 3] = [Architecture::X86, Architecture::Arm, Architecture::Wasm];

    pub fn keyword_table(self) -> &'static KeywordTable {
        match self {
            Architecture::X86 => &*X86_TABLE,
            Architecture::Arm => &*ARM_TABLE,
            Architecture::Wasm => &*WASM_TABLE,
        }
    }

    /// The byte that opens a line comment in this dialect.
    pub fn comment_byte(self) -> u8 {
        match self {
            Architecture::X86 | Architecture::Wasm => b'#',
            Architecture::Arm => b';',
        }
    }

    /// Only Intel listings get their operands lined up after the mnemonic.
    pub fn aligns_instructions(self) -> bool {
        self == Architecture::X86
    }

    pub fn name(self) -> &'static str {
        match self {
            Architecture::X86 => "x86",
            Architecture::Arm => "arm",
            Architecture::Wasm => "wasm",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Architecture {
    type Err = AnnotateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x86" | "x64" | "x86_64" | "intel" => Ok(Architecture::X86),
            "arm" | "arm32" | "arm64" | "aarch64" => Ok(Architecture::Arm),
            "wasm" | "webassembly" => Ok(Architecture::Wasm),
            _ => Err(AnnotateError::UnknownArchitecture(s.to_string())),
        }
    }
}

/// Maps identifier text to a more specific token kind.
///
/// Anything the table does not know, or anything longer than its longest
/// key, stays an `Identifier`.
pub struct KeywordTable {
    kinds: HashMap<Box<str>, TokenKind>,
    max_key_length: usize,
    trailing_char: Option<char>,
}

impl KeywordTable {
    fn builder() -> KeywordTableBuilder {
        KeywordTableBuilder {
            kinds: HashMap::new(),
            max_key_length: 0,
            trailing_char: None,
        }
    }

    #[inline]
    pub fn classify(&self, slice: &StringSlice<'_>) -> TokenKind {
        self.classify_str(slice.as_str())
    }

    #[inline]
    pub fn classify_str(&self, text: &str) -> TokenKind {
        if text.len() > self.max_key_length {
            return TokenKind::Identifier;
        }
        self.kinds.get(text).copied().unwrap_or(TokenKind::Identifier)
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Whether `c` may close an identifier that would otherwise stop before
    /// it. Wasm uses this to keep `i32.` together as one token.
    #[inline]
    pub fn accepts_trailing_char(&self, c: char) -> bool {
        self.trailing_char == Some(c)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(|k| &**k)
    }
}

impl fmt::Debug for KeywordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordTable")
            .field("len", &self.kinds.len())
            .field("max_key_length", &self.max_key_length)
            .field("trailing_char", &self.trailing_char)
            .finish()
    }
}

struct KeywordTableBuilder {
    kinds: HashMap<Box<str>, TokenKind>,
    max_key_length: usize,
    trailing_char: Option<char>,
}

impl KeywordTableBuilder {
    /// First insertion wins, so a word listed under several kinds keeps the
    /// kind of the group added first.
    fn insert(&mut self, word: &str, kind: TokenKind) {
        if self.kinds.contains_key(word) {
            return;
        }
        self.max_key_length = self.max_key_length.max(word.len());
        self.kinds.insert(word.into(), kind);
    }

    fn words(mut self, words: &[&str], kind: TokenKind) -> Self {
        for word in words {
            self.insert(word, kind);
        }
        self
    }

    /// `{prefix}{n}{suffix}` for every `n` in `range` and every suffix.
    fn numbered(mut self, prefix: &str, range: std::ops::Range<u32>, suffixes: &[&str], kind: TokenKind) -> Self {
        for n in range {
            for suffix in suffixes {
                self.insert(&format!("{prefix}{n}{suffix}"), kind);
            }
        }
        self
    }

    fn trailing_char(mut self, c: char) -> Self {
        self.trailing_char = Some(c);
        self
    }

    fn build(self) -> KeywordTable {
        KeywordTable {
            kinds: self.kinds,
            max_key_length: self.max_key_length,
            trailing_char: self.trailing_char,
        }
    }
}
