///
/// # Integration Tests for asmtint
///
/// End-to-end annotation of realistic listings: source markers backed by real
/// files, colorized output per architecture, custom palettes, and the
/// return-the-input fallback.
///

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use asmtint::render::{RenderOptions, render_tokens};
use asmtint::{AnnotateOptions, Annotator, Architecture, Markup, Palette, TokenKind, tokenize};

fn write_source(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write source file");
    path.display().to_string()
}

#[test]
fn test_x86_listing_with_source_markers() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(
        temp_dir.path(),
        "Kernel.cs",
        "float Scale(float x)\n{\n    var y = x * 2;\n    return y;\n}\n",
    );
    let listing = format!(
        "\t.text\n\t.file\t1 \"{path}\"\n\t.loc\t1 3 8\n\tvmulps\tymm0, ymm1, ymm2\n\t.loc\t1 4 0 is_stmt 0\n\tret\n"
    );

    let mut annotator = Annotator::new();
    let out = annotator.process(&listing, Architecture::X86, true, false);

    assert_eq!(
        out,
        "\t.text\n\
         \t\n\
         \t=== Kernel.cs(3, 9)    var y = x * 2;\n\
         \tvmulps    \tymm0, ymm1, ymm2\n\
         \t=== Kernel.cs(4, 1)    return y;\n\
         \tret       \n"
    );
}

#[test]
fn test_missing_source_marker() {
    let listing = ".file 1 \"does/not/exist.cs\"\n.loc 1 5 3\n";
    let mut annotator = Annotator::new();
    let out = annotator.process(listing, Architecture::X86, true, false);
    assert_eq!(out, "\n=== exist.cs(5, 4)\n");

    let colored = annotator.process(listing, Architecture::X86, true, true);
    assert!(colored.contains("<color=#FFFF00>=== exist.cs(5, 4)</color>\n"));
}

#[test]
fn test_loc_file_zero_is_silent() {
    let mut annotator = Annotator::new();
    assert_eq!(annotator.process(".loc 0 5 3\n", Architecture::Arm, true, true), "");
}

#[test]
fn test_crlf_listing() {
    let listing = ".file 1 \"x.cs\"\r\n.loc 1 1 0\r\nnop\r\n";
    let mut annotator = Annotator::new();
    let out = annotator.process(listing, Architecture::X86, true, false);
    assert_eq!(out, "\r\n=== x.cs(1, 1)\nnop       \r\n");
}

#[test]
fn test_fallback_returns_input() {
    let listings = [
        "\tmov\teax, 1\n\t.loc\t3 10 2\n\tret\n",
        ".file 2 \"a.c\"\n.file 2 \"a.c\"\n",
    ];
    let mut annotator = Annotator::new();
    for listing in listings {
        for arch in Architecture::ALL {
            let out = annotator.process(listing, arch, false, true);
            assert!(!out.is_empty());
            assert_eq!(out, listing);
        }
    }
}

#[test]
fn test_round_trip_without_color_or_alignment() {
    let listings = [
        "\t.globl\tmain\nmain:\n\tpush\trbp\n\tmov\trbp, rsp\n\tmovss\txmm0, dword ptr [rip + .LCPI0_0]\n\tpop\trbp\n\tret\n",
        "\tstp\tx29, x30, [sp, #-16]!\n\tfmadd\ts0, s1, s2, s3\n\tldp\tx29, x30, [sp], #16 ; restore\n\tret\n",
        "\tlocal.get\t0\n\ti32.const\t-1\n\ti32.xor\n\tend_function\n",
        "weird \u{0} bytes \"unterminated",
    ];
    for listing in listings {
        for arch in Architecture::ALL {
            let options = RenderOptions {
                architecture: arch,
                colorize: false,
                align: false,
                ..RenderOptions::default()
            };
            let tokens = tokenize(listing, arch);
            assert_eq!(render_tokens(&tokens, listing, &options), listing);
            assert_eq!(tokens.iter().map(|t| t.length).sum::<usize>(), listing.len());
        }
    }
}

#[test]
fn test_keyword_bound_per_architecture() {
    for arch in Architecture::ALL {
        let table = arch.keyword_table();
        let long = "a".repeat(table.max_key_length() + 1);
        assert_eq!(table.classify_str(&long), TokenKind::Identifier);
        assert_eq!(tokenize(&long, arch)[0].kind, TokenKind::Identifier);
    }
}

#[test]
fn test_arm_colorized_snapshot() {
    let mut annotator = Annotator::new();
    let out = annotator.process("ldr x0, [sp, #16] ; reload", Architecture::Arm, true, true);
    insta::assert_snapshot!(out, @"<color=#4EC9B0>ldr</color> <color=#D7BA7D>x0</color>, [<color=#D7BA7D>sp</color>, #<color=#9CDCFE>16</color>] <color=#6A9955>; reload</color>");
}

#[test]
fn test_wasm_light_snapshot() {
    let mut annotator = Annotator::new();
    let out = annotator.process("i32.const -1", Architecture::Wasm, false, true);
    insta::assert_snapshot!(out, @"<color=#811F3F>i32.</color><color=#0451A5>const</color> <color=#007ACC>-1</color>");
}

#[test]
fn test_x86_aligned_snapshot() {
    let mut annotator = Annotator::new();
    let out = annotator.process("mulps xmm0,xmm1\nshufps xmm0,xmm0,27\n", Architecture::X86, true, false);
    insta::assert_snapshot!(format!("{out:?}"), @r#""mulps      xmm0,xmm1\nshufps     xmm0,xmm0,27\n""#);
}

#[test]
fn test_palette_file_and_ansi_markup() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let palette_path = temp_dir.path().join("colors.toml");
    fs::write(&palette_path, "[dark]\nregister = \"#010203\"\n").expect("Failed to write palette");

    let palette = Palette::load(&palette_path).expect("Failed to load palette");
    let options = AnnotateOptions::new(Architecture::X86)
        .markup(Markup::Ansi)
        .palette(palette);
    let mut annotator = Annotator::with_options(options);

    assert_eq!(annotator.annotate("rax"), "\x1b[38;2;1;2;3mrax\x1b[0m");
}
