///
/// asmtint CLI - Annotate assembly listings from the command line
///
/// - asmtint annotate <file>: Print the annotated listing
/// - asmtint tokens <file>: Dump the token stream (text or JSON)
///
/// `-` reads the listing from stdin.
///

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use asmtint::{AnnotateError, AnnotateOptions, Annotator, Architecture, Markup, Palette, TokenKind, tokenize};

#[derive(Parser)]
#[command(name = "asmtint")]
#[command(author, version, about = "Annotate and colorize assembly listings", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the listing with source markers, colors and aligned operands
    Annotate {
        /// Listing to annotate, or - for stdin
        file: PathBuf,

        /// Target architecture (x86, arm, wasm)
        #[arg(long, default_value = "x86")]
        arch: Architecture,

        /// Use the light theme
        #[arg(long)]
        light: bool,

        /// Do not colorize
        #[arg(long)]
        plain: bool,

        /// Color markup style
        #[arg(long, value_enum, default_value_t = MarkupArg::Rich)]
        markup: MarkupArg,

        /// Do not pad x86 mnemonics
        #[arg(long)]
        no_align: bool,

        /// TOML file overriding theme colors
        #[arg(long)]
        palette: Option<PathBuf>,
    },

    /// Dump tokens one per line
    Tokens {
        /// Listing to tokenize, or - for stdin
        file: PathBuf,

        /// Target architecture (x86, arm, wasm)
        #[arg(long, default_value = "x86")]
        arch: Architecture,

        /// Print JSON instead of `text : Kind` lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MarkupArg {
    Rich,
    Ansi,
}

impl From<MarkupArg> for Markup {
    fn from(arg: MarkupArg) -> Self {
        match arg {
            MarkupArg::Rich => Markup::RichText,
            MarkupArg::Ansi => Markup::Ansi,
        }
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    position: usize,
    length: usize,
    text: &'a str,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Annotate {
            file,
            arch,
            light,
            plain,
            markup,
            no_align,
            palette,
        } => {
            let palette = match palette {
                Some(path) => Palette::load(&path).unwrap_or_else(|e| fail(e)),
                None => Palette::default(),
            };
            let options = AnnotateOptions::new(arch)
                .dark_theme(!light)
                .colorize(!plain)
                .markup(markup.into())
                .align(!no_align)
                .palette(palette);
            annotate(&file, options);
        }
        Commands::Tokens { file, arch, json } => {
            dump_tokens(&file, arch, json);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn read_listing(file: &Path) -> Result<String, AnnotateError> {
    let io_error = |source| AnnotateError::Io {
        path: file.to_path_buf(),
        source,
    };
    if file == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(file).map_err(io_error)
    }
}

fn annotate(file: &Path, options: AnnotateOptions) {
    let text = read_listing(file).unwrap_or_else(|e| fail(e));
    let mut annotator = Annotator::with_options(options);
    print!("{}", annotator.annotate(&text));
}

fn dump_tokens(file: &Path, arch: Architecture, json: bool) {
    let text = read_listing(file).unwrap_or_else(|e| fail(e));
    let tokens = tokenize(&text, arch);

    if json {
        let records: Vec<TokenRecord> = tokens
            .iter()
            .map(|t| TokenRecord {
                kind: t.kind,
                position: t.position,
                length: t.length,
                text: t.text(&text),
            })
            .collect();
        match serde_json::to_string_pretty(&records) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for token in &tokens {
            println!("{}", token.to_friendly_text(&text));
        }
    }
}

fn fail(error: AnnotateError) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}
