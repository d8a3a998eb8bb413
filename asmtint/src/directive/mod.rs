//!
//! Directive Interpreter - `.file` / `.loc` Resolution
//!
//! Second pass over the token stream. Ordinary tokens pass through
//! untouched; the two debug-line directives are consumed and turned into
//! line markers that interleave the original source with the listing:
//!
//! ```text
//!     .file   1 "src/main.cs"            (registers file 1, no output)
//!     .loc    1 5 3 prologue_end         =>  === main.cs(5, 4)<line 5 of main.cs>
//! ```
//!
//! Source files are read when their `.file` directive is seen, relative to
//! the working directory. A file that cannot be read still gets markers,
//! just without the source text.
//!

use std::fmt;
use std::fs;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::AnnotateError;
use crate::lexer::{Token, TokenKind};

/// One render item: an input token, or a marker synthesized from `.loc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Token(Token),
    LineMarker(LineMarker),
}

/// `=== name` or `=== name(line, column)source text`. The trailing newline
/// is added by the renderer, outside any color markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMarker {
    pub file_name: String,
    /// Line and zero-based column, absent for `.loc N 0`.
    pub location: Option<(u32, u32)>,
    pub source_line: Option<String>,
}

impl fmt::Display for LineMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "=== {}", self.file_name)?;
        if let Some((line, column)) = self.location {
            write!(f, "({}, {})", line, u64::from(column) + 1)?;
        }
        if let Some(text) = &self.source_line {
            f.write_str(text)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SourceFileEntry {
    pub path: String,
    /// `None` when the file could not be read.
    pub lines: Option<Vec<String>>,
}

impl SourceFileEntry {
    pub fn load(path: &str) -> Self {
        let lines = match fs::read(path) {
            Ok(bytes) => Some(
                String::from_utf8_lossy(&bytes)
                    .lines()
                    .map(str::to_string)
                    .collect(),
            ),
            Err(e) => {
                debug!(path, error = %e, "source file unavailable, markers will omit text");
                None
            }
        };
        Self {
            path: path.to_string(),
            lines,
        }
    }

    /// The last path component, splitting on both `/` and `\`.
    pub fn file_name(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path)
    }

    /// One-based line lookup.
    pub fn line(&self, line: u32) -> Option<&str> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.lines.as_ref()?.get(index).map(String::as_str)
    }
}

/// Files declared by `.file` during one run, in declaration order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: IndexMap<u32, SourceFileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `path` and records it under `index`.
    pub fn register(&mut self, index: u32, path: &str) -> Result<&SourceFileEntry, AnnotateError> {
        if self.files.contains_key(&index) {
            return Err(AnnotateError::DuplicateFile {
                index,
                path: path.to_string(),
            });
        }
        let entry = SourceFileEntry::load(path);
        debug!(index, path, readable = entry.lines.is_some(), "registered source file");
        Ok(self.files.entry(index).or_insert(entry))
    }

    pub fn get(&self, index: u32) -> Option<&SourceFileEntry> {
        self.files.get(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &SourceFileEntry)> {
        self.files.iter().map(|(index, entry)| (*index, entry))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Resolves `.file`/`.loc` in `tokens` (which must come from `source`).
pub fn interpret(
    source: &str,
    tokens: &[Token],
    registry: &mut FileRegistry,
) -> Result<Vec<Segment>, AnnotateError> {
    let mut interpreter = Interpreter {
        source,
        tokens,
        pos: 0,
        registry,
        segments: Vec::with_capacity(tokens.len()),
    };
    interpreter.run()?;
    Ok(interpreter.segments)
}

struct Interpreter<'a, 'r> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    registry: &'r mut FileRegistry,
    segments: Vec<Segment>,
}

impl Interpreter<'_, '_> {
    fn run(&mut self) -> Result<(), AnnotateError> {
        while let Some(&token) = self.tokens.get(self.pos) {
            self.pos += 1;
            if token.kind == TokenKind::Directive {
                let handled = match token.text(self.source) {
                    ".file" => self.file_directive()?,
                    ".loc" => {
                        self.loc_directive()?;
                        true
                    }
                    _ => false,
                };
                if handled {
                    continue;
                }
            }
            self.segments.push(Segment::Token(token));
        }
        Ok(())
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn skip_filler(&mut self) {
        while self.peek().is_some_and(|t| t.is_filler()) {
            self.pos += 1;
        }
    }

    /// Skips filler, then takes a Number token if one is next.
    fn take_number(&mut self) -> Option<u32> {
        self.skip_filler();
        let token = self.peek().filter(|t| t.kind == TokenKind::Number)?;
        self.pos += 1;
        Some(parse_number(token.text(self.source)))
    }

    /// Returns false when no path follows; the directive then passes through
    /// as an ordinary token and nothing after it is consumed.
    fn file_directive(&mut self) -> Result<bool, AnnotateError> {
        let start = self.pos;
        let index = self.take_number().unwrap_or(0);
        self.skip_filler();

        let Some(path) = self.peek().filter(|t| t.kind == TokenKind::String) else {
            self.pos = start;
            return Ok(false);
        };
        self.pos += 1;

        let path = path.slice(self.source).map_or("", |s| s.trim_quotes());
        self.registry.register(index, path)?;
        Ok(true)
    }

    fn loc_directive(&mut self) -> Result<(), AnnotateError> {
        let file = self.take_number().unwrap_or(0);
        let line = self.take_number().unwrap_or(0);
        let column = self.take_number().unwrap_or(0);

        // Options such as `prologue_end` or `is_stmt 0` are dropped with the newline
        while let Some(token) = self.peek() {
            self.pos += 1;
            if token.is_newline() {
                break;
            }
        }

        if file == 0 {
            return Ok(());
        }
        let entry = self
            .registry
            .get(file)
            .ok_or(AnnotateError::UnknownFile { index: file })?;

        let marker = if line == 0 {
            LineMarker {
                file_name: entry.file_name().to_string(),
                location: None,
                source_line: None,
            }
        } else {
            LineMarker {
                file_name: entry.file_name().to_string(),
                location: Some((line, column)),
                source_line: entry.line(line).map(str::to_string),
            }
        };
        self.segments.push(Segment::LineMarker(marker));
        Ok(())
    }
}

/// Lenient decimal parse: anything that is not a `u32` reads as 0.
fn parse_number(text: &str) -> u32 {
    text.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::Architecture;
    use crate::lexer::tokenize;

    fn run(source: &str) -> Result<(Vec<Segment>, FileRegistry), AnnotateError> {
        let tokens = tokenize(source, Architecture::X86);
        let mut registry = FileRegistry::new();
        let segments = interpret(source, &tokens, &mut registry)?;
        Ok((segments, registry))
    }

    fn markers(segments: &[Segment]) -> Vec<String> {
        segments
            .iter()
            .filter_map(|s| match s {
                Segment::LineMarker(m) => Some(m.to_string()),
                Segment::Token(_) => None,
            })
            .collect()
    }

    fn passthrough(source: &str, segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| match s {
                Segment::Token(t) => t.text(source).to_string(),
                Segment::LineMarker(m) => format!("[{m}]"),
            })
            .collect()
    }

    #[test]
    fn test_missing_source_file_marker() {
        let (segments, registry) =
            run(".file 1 \"does/not/exist.cs\"\n.loc 1 5 3\nnop\n").unwrap();
        assert_eq!(markers(&segments), vec!["=== exist.cs(5, 4)"]);
        assert!(registry.get(1).unwrap().lines.is_none());
    }

    #[test]
    fn test_file_zero_produces_nothing() {
        let source = ".loc 0 5 3\nret\n";
        let (segments, _) = run(source).unwrap();
        assert!(markers(&segments).is_empty());
        assert_eq!(passthrough(source, &segments), "ret\n");
    }

    #[test]
    fn test_line_zero_has_no_location() {
        let (segments, _) = run(".file 2 \"C:\\\\src\\\\Program.cs\"\n.loc 2 0 0\n").unwrap();
        assert_eq!(markers(&segments), vec!["=== Program.cs"]);
    }

    #[test]
    fn test_present_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lib.rs");
        fs::write(&path, "fn main() {\r\n    let x = 1;\r\n}\r\n").unwrap();
        let source = format!(
            "\t.file\t1 \"{}\"\n\t.loc\t1 2 5 prologue_end\n\tmov\teax, 1\n",
            path.display()
        );

        let (segments, registry) = run(&source).unwrap();
        assert_eq!(markers(&segments), vec!["=== lib.rs(2, 6)    let x = 1;"]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(1).unwrap().lines.as_ref().unwrap().len(), 3);
        assert_eq!(
            passthrough(&source, &segments),
            "\t\n\t[=== lib.rs(2, 6)    let x = 1;]\tmov\teax, 1\n"
        );
    }

    #[test]
    fn test_line_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.c");
        fs::write(&path, "int x;\n").unwrap();
        let source = format!(".file 1 \"{}\"\n.loc 1 9 0\n", path.display());

        let (segments, _) = run(&source).unwrap();
        assert_eq!(markers(&segments), vec!["=== short.c(9, 1)"]);
    }

    #[test]
    fn test_unknown_file_index() {
        let err = run(".loc 7 5 3\n").unwrap_err();
        assert!(matches!(err, AnnotateError::UnknownFile { index: 7 }));
    }

    #[test]
    fn test_duplicate_file_index() {
        let err = run(".file 1 \"a.c\"\n.file 1 \"b.c\"\n").unwrap_err();
        assert!(matches!(err, AnnotateError::DuplicateFile { index: 1, .. }));
    }

    #[test]
    fn test_file_without_index_is_zero() {
        let (_, registry) = run(".file \"unit.c\"\n").unwrap();
        assert_eq!(registry.get(0).unwrap().path, "unit.c");
    }

    #[test]
    fn test_file_without_path_passes_through() {
        let source = ".file 3\nret\n";
        let (segments, registry) = run(source).unwrap();
        assert!(registry.is_empty());
        assert_eq!(passthrough(source, &segments), source);
    }

    #[test]
    fn test_operands_after_path_pass_through() {
        let source = ".file 1 \"dir\" \"x.c\" md5 0x00ff\n";
        let (segments, registry) = run(source).unwrap();
        assert_eq!(registry.get(1).unwrap().path, "dir");
        assert_eq!(passthrough(source, &segments), " \"x.c\" md5 0x00ff\n");
    }

    #[test]
    fn test_malformed_numbers_read_as_zero() {
        // `0x1` is not decimal, so the file index is 0 and nothing is emitted
        let source = ".file 1 \"a.c\"\n.loc 0x1 4 2\n";
        let (segments, _) = run(source).unwrap();
        assert!(markers(&segments).is_empty());
    }

    #[test]
    fn test_loc_at_end_of_input() {
        let (segments, _) = run(".file 1 \"a/b/c.s\"\n.loc 1 3").unwrap();
        assert_eq!(markers(&segments), vec!["=== c.s(3, 1)"]);
    }

    #[test]
    fn test_other_directives_untouched() {
        let source = ".text\n.p2align 4\n.Lfile:\n";
        let (segments, _) = run(source).unwrap();
        assert_eq!(passthrough(source, &segments), source);
    }

    #[test]
    fn test_registry_keeps_declaration_order() {
        let (_, registry) = run(".file 5 \"e.c\"\n.file 2 \"b.c\"\n.file 9 \"i.c\"\n").unwrap();
        let order: Vec<_> = registry.iter().map(|(index, _)| index).collect();
        assert_eq!(order, vec![5, 2, 9]);
    }

    #[test]
    fn test_file_name_splits_both_separators() {
        let entry = SourceFileEntry {
            path: "C:\\work/src\\main.cs".to_string(),
            lines: None,
        };
        assert_eq!(entry.file_name(), "main.cs");
        assert_eq!(entry.line(1), None);
    }
}
