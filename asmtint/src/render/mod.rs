///
/// Renderer - Annotated Text Output
///
/// Walks the interpreted segments once and writes the final text: token
/// text optionally wrapped in color markup, line markers in the
/// line-directive color, and (x86 only) spaces after each mnemonic so the
/// operand column lines up:
///
/// ```text
/// mulps     xmm0, xmm1
/// shufps    xmm0, xmm0, 27
/// ```
///
/// Mnemonics of `INSTRUCTION_ALIGNMENT` characters or more are not padded.
///

use std::fmt::Write;

use crate::directive::{LineMarker, Segment};
use crate::keywords::Architecture;
use crate::lexer::Token;
use crate::theme::{Color, Theme};

/// Column at which x86 operands start.
pub const INSTRUCTION_ALIGNMENT: usize = 10;

/// How colored spans are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
    /// `<color=#RRGGBB>text</color>`, for rich-text views.
    #[default]
    RichText,
    /// 24-bit SGR escapes, for terminals.
    Ansi,
}

impl Markup {
    fn open(self, color: Color, out: &mut String) {
        match self {
            Markup::RichText => {
                out.push_str("<color=");
                color.push_hex(out);
                out.push('>');
            }
            Markup::Ansi => {
                let _ = write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
            }
        }
    }

    fn close(self, out: &mut String) {
        match self {
            Markup::RichText => out.push_str("</color>"),
            Markup::Ansi => out.push_str("\x1b[0m"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub architecture: Architecture,
    pub theme: Theme,
    pub colorize: bool,
    pub markup: Markup,
    /// Pad mnemonics to the operand column (only where the architecture
    /// supports it).
    pub align: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            architecture: Architecture::X86,
            theme: Theme::dark(),
            colorize: true,
            markup: Markup::RichText,
            align: true,
        }
    }
}

pub fn render(segments: &[Segment], source: &str, options: &RenderOptions) -> String {
    let mut renderer = Renderer::new(source, options);
    for segment in segments {
        match segment {
            Segment::Token(token) => renderer.token(token),
            Segment::LineMarker(marker) => renderer.marker(marker),
        }
    }
    renderer.out
}

/// Renders tokens directly, with no directive interpretation.
pub fn render_tokens(tokens: &[Token], source: &str, options: &RenderOptions) -> String {
    let mut renderer = Renderer::new(source, options);
    for token in tokens {
        renderer.token(token);
    }
    renderer.out
}

struct Renderer<'a> {
    source: &'a str,
    options: &'a RenderOptions,
    align: bool,
    out: String,
}

impl<'a> Renderer<'a> {
    fn new(source: &'a str, options: &'a RenderOptions) -> Self {
        let extra = if options.colorize { source.len() } else { source.len() / 8 };
        Self {
            source,
            options,
            align: options.align && options.architecture.aligns_instructions(),
            out: String::with_capacity(source.len() + extra),
        }
    }

    fn token(&mut self, token: &Token) {
        let text = token.text(self.source);
        match self.options.theme.color_for(token.kind) {
            Some(color) if self.options.colorize => self.colored(color, text),
            _ => self.out.push_str(text),
        }
        if self.align && token.kind.is_instruction() {
            self.pad(token.length);
        }
    }

    fn marker(&mut self, marker: &LineMarker) {
        let text = marker.to_string();
        if self.options.colorize {
            self.colored(self.options.theme.line_directive, &text);
        } else {
            self.out.push_str(&text);
        }
        self.out.push('\n');
    }

    fn colored(&mut self, color: Color, text: &str) {
        self.options.markup.open(color, &mut self.out);
        self.out.push_str(text);
        self.options.markup.close(&mut self.out);
    }

    fn pad(&mut self, width: usize) {
        if width < INSTRUCTION_ALIGNMENT {
            self.out
                .extend(std::iter::repeat_n(' ', INSTRUCTION_ALIGNMENT - width));
        }
    }
}
