///
/// Annotation engine facade.
///
/// Ties the pipeline together: tokenize, resolve `.file`/`.loc`, render.
/// Annotation is best effort, so `process` never fails: any internal error
/// or panic is logged and the input comes back unchanged.
///
/// An `Annotator` keeps its token buffer between calls to avoid
/// reallocating for every listing. It takes `&mut self`, so one instance
/// serves one thread at a time.
///

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{trace, warn};

use crate::directive::{FileRegistry, interpret};
use crate::error::AnnotateError;
use crate::keywords::Architecture;
use crate::lexer::{Token, tokenize_into};
use crate::render::{Markup, RenderOptions, render};
use crate::theme::{Palette, Theme};

#[derive(Debug, Clone)]
pub struct AnnotateOptions {
    pub architecture: Architecture,
    pub dark_theme: bool,
    pub colorize: bool,
    pub markup: Markup,
    pub align: bool,
    pub palette: Palette,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            architecture: Architecture::X86,
            dark_theme: true,
            colorize: true,
            markup: Markup::RichText,
            align: true,
            palette: Palette::default(),
        }
    }
}

impl AnnotateOptions {
    pub fn new(architecture: Architecture) -> Self {
        Self {
            architecture,
            ..Self::default()
        }
    }

    pub fn dark_theme(mut self, dark: bool) -> Self {
        self.dark_theme = dark;
        self
    }

    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    pub fn align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn theme(&self) -> Theme {
        self.palette.theme(self.dark_theme)
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            architecture: self.architecture,
            theme: self.theme(),
            colorize: self.colorize,
            markup: self.markup,
            align: self.align,
        }
    }
}

#[derive(Debug, Default)]
pub struct Annotator {
    options: AnnotateOptions,
    tokens: Vec<Token>,
}

impl Annotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AnnotateOptions) -> Self {
        Self {
            options,
            tokens: Vec::new(),
        }
    }

    pub fn options(&self) -> &AnnotateOptions {
        &self.options
    }

    /// Annotates `input` for `architecture`, keeping this annotator's
    /// markup, alignment and palette settings.
    pub fn process(
        &mut self,
        input: &str,
        architecture: Architecture,
        dark_theme: bool,
        colorize: bool,
    ) -> String {
        let options = AnnotateOptions {
            architecture,
            dark_theme,
            colorize,
            ..self.options.clone()
        };
        self.annotate_with(input, &options)
    }

    /// Annotates `input` with the options given at construction.
    pub fn annotate(&mut self, input: &str) -> String {
        let options = self.options.clone();
        self.annotate_with(input, &options)
    }

    fn annotate_with(&mut self, input: &str, options: &AnnotateOptions) -> String {
        let result = self.try_process(input, options);
        output_or_input(result, input, options.architecture)
    }

    /// Like [`Annotator::process`], but reports failures instead of falling
    /// back to the input.
    pub fn try_process(
        &mut self,
        input: &str,
        options: &AnnotateOptions,
    ) -> Result<String, AnnotateError> {
        let tokens = &mut self.tokens;
        guarded(|| run(input, options, tokens))
    }

    /// Tokens of the most recent run.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

fn run(
    input: &str,
    options: &AnnotateOptions,
    tokens: &mut Vec<Token>,
) -> Result<String, AnnotateError> {
    tokens.clear();
    tokenize_into(input, options.architecture, tokens);
    trace!(bytes = input.len(), tokens = tokens.len(), "tokenized listing");

    let mut registry = FileRegistry::new();
    let segments = interpret(input, tokens, &mut registry)?;
    trace!(segments = segments.len(), files = registry.len(), "resolved line directives");

    Ok(render(&segments, input, &options.render_options()))
}

/// Runs `f`, turning a panic into `AnnotateError::Panicked`.
fn guarded<F>(f: F) -> Result<String, AnnotateError>
where
    F: FnOnce() -> Result<String, AnnotateError>,
{
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(AnnotateError::Panicked(panic_message(payload.as_ref()))))
}

fn output_or_input(
    result: Result<String, AnnotateError>,
    input: &str,
    architecture: Architecture,
) -> String {
    match result {
        Ok(output) => output,
        Err(e) => {
            warn!(error = %e, arch = %architecture, "annotation failed, returning input unchanged");
            input.to_string()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;

    #[test]
    fn test_process_colorizes() {
        let mut annotator = Annotator::new();
        let out = annotator.process("\tret\n", Architecture::X86, true, true);
        assert_eq!(out, "\t<color=#4EC9B0>ret</color>       \n");
    }

    #[test]
    fn test_light_theme() {
        let mut annotator = Annotator::new();
        let out = annotator.process("x0", Architecture::Arm, false, true);
        assert_eq!(out, "<color=#811F3F>x0</color>");
    }

    #[test]
    fn test_unresolvable_loc_falls_back() {
        let input = "\tmov eax, 1\n\t.loc 7 5 3\n\tret\n";
        let mut annotator = Annotator::new();
        assert_eq!(annotator.process(input, Architecture::X86, true, true), input);
    }

    #[test]
    fn test_try_process_reports_error() {
        let mut annotator = Annotator::new();
        let err = annotator
            .try_process(".loc 7 5 3\n", &AnnotateOptions::default())
            .unwrap_err();
        assert!(matches!(err, AnnotateError::UnknownFile { index: 7 }));
    }

    #[test]
    fn test_duplicate_file_falls_back() {
        let input = ".file 1 \"a.c\"\n.file 1 \"b.c\"\nnop\n";
        let mut annotator = Annotator::new();
        assert_eq!(annotator.process(input, Architecture::X86, false, false), input);
    }

    #[test]
    fn test_empty_input() {
        let mut annotator = Annotator::new();
        for arch in Architecture::ALL {
            assert_eq!(annotator.process("", arch, true, true), "");
        }
    }

    #[test]
    fn test_state_reset_between_calls() {
        let mut annotator = Annotator::new();
        let first = annotator.process(
            ".file 1 \"gone.c\"\n.loc 1 2 0\n",
            Architecture::X86,
            true,
            false,
        );
        assert_eq!(first, "\n=== gone.c(2, 1)\n");

        // File 1 belonged to the previous run
        let second = ".loc 1 2 0\n";
        assert_eq!(annotator.process(second, Architecture::X86, true, false), second);
        assert_eq!(annotator.tokens().len(), 8);
    }

    #[test]
    fn test_options_builder() {
        let mut palette = Palette::default();
        palette.light.instruction = Color::rgb(1, 2, 3);
        let options = AnnotateOptions::new(Architecture::Wasm)
            .dark_theme(false)
            .markup(Markup::Ansi)
            .align(false)
            .palette(palette);
        assert_eq!(options.theme().instruction, Color::rgb(1, 2, 3));

        let mut annotator = Annotator::with_options(options);
        assert_eq!(annotator.annotate("nop"), "\x1b[38;2;1;2;3mnop\x1b[0m");
        assert_eq!(annotator.options().architecture, Architecture::Wasm);
    }

    #[test]
    fn test_panic_during_annotation_returns_input() {
        let input = "\tvmulps\tymm0, ymm1, ymm2\n";
        let result = guarded(|| panic!("segment index {} out of range", 3));
        assert!(matches!(
            &result,
            Err(AnnotateError::Panicked(message)) if message == "segment index 3 out of range"
        ));
        assert_eq!(output_or_input(result, input, Architecture::X86), input);
    }

    #[test]
    fn test_guarded_passes_results_through() {
        assert_eq!(guarded(|| Ok("ok".to_string())).unwrap(), "ok");
        let err = guarded(|| Err(AnnotateError::UnknownFile { index: 4 })).unwrap_err();
        assert!(matches!(err, AnnotateError::UnknownFile { index: 4 }));
    }

    #[test]
    fn test_panic_message_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }
}
