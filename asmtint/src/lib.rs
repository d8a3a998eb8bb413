///
/// asmtint - Assembly Listing Annotator
///
/// Turns the raw assembly a native code generator prints (x86, ARM or
/// WebAssembly text) into an annotated listing for a code viewer:
///
/// - source: Zero-copy string slices
/// - keywords: Per-architecture mnemonic/register/qualifier tables
/// - lexer: Lossless tokenization of assembly text
/// - directive: `.file`/`.loc` resolution into source line markers
/// - theme: Dark and light color themes, TOML palettes
/// - render: Colored, column-aligned output
/// - engine: The `Annotator` facade tying the pipeline together
///
/// Entry points:
/// - `Annotator::process`: Annotate a listing, falling back to the input
/// - `tokenize`: Split a listing into classified tokens
///

pub mod directive;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod render;
pub mod source;
pub mod theme;

pub use engine::{AnnotateOptions, Annotator};
pub use error::AnnotateError;
pub use keywords::Architecture;
pub use lexer::{Token, TokenKind, tokenize};
pub use render::Markup;
pub use theme::{Palette, Theme};
