///
/// Color Themes
///
/// A `Theme` assigns one color to each renderable token kind plus one to
/// the synthesized `.loc` line markers. Two built-in themes exist (dark and
/// light editor skins); a TOML palette file can override any of the ten
/// colors of either.
///
/// Palette file format:
///
/// ```toml
/// [dark]
/// instruction = "#4EC9B0"
/// comment = "#6A9955"
///
/// [light]
/// register = "#811F3F"
/// ```
///

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::AnnotateError;
use crate::lexer::TokenKind;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn hex(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::hex)
    }

    /// Appends `#RRGGBB` to `out`.
    pub fn push_hex(&self, out: &mut String) {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
        out.push('#');
        for byte in [self.r, self.g, self.b] {
            out.push(DIGITS[(byte >> 4) as usize] as char);
            out.push(DIGITS[(byte & 0xF) as usize] as char);
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub line_directive: Color,
    pub directive: Color,
    pub identifier: Color,
    pub qualifier: Color,
    pub instruction: Color,
    pub instruction_simd: Color,
    pub register: Color,
    pub number: Color,
    pub string: Color,
    pub comment: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        line_directive: Color::hex(0xFFFF00),
        directive: Color::hex(0xCCCCCC),
        identifier: Color::hex(0xD4D4D4),
        qualifier: Color::hex(0xDCDCAA),
        instruction: Color::hex(0x4EC9B0),
        instruction_simd: Color::hex(0xC586C0),
        register: Color::hex(0xD7BA7D),
        number: Color::hex(0x9CDCFE),
        string: Color::hex(0xCE9178),
        comment: Color::hex(0x6A9955),
    };

    pub const LIGHT: Theme = Theme {
        line_directive: Color::hex(0x888800),
        directive: Color::hex(0x444444),
        identifier: Color::hex(0x1C1C1C),
        qualifier: Color::hex(0x267F99),
        instruction: Color::hex(0x0451A5),
        instruction_simd: Color::hex(0x0000FF),
        register: Color::hex(0x811F3F),
        number: Color::hex(0x007ACC),
        string: Color::hex(0xA31515),
        comment: Color::hex(0x008000),
    };

    pub fn dark() -> Self {
        Self::DARK
    }

    pub fn light() -> Self {
        Self::LIGHT
    }

    pub fn select(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }

    /// The color for a token kind, or `None` for kinds emitted verbatim.
    pub fn color_for(&self, kind: TokenKind) -> Option<Color> {
        match kind {
            TokenKind::Directive => Some(self.directive),
            TokenKind::Identifier => Some(self.identifier),
            TokenKind::Qualifier => Some(self.qualifier),
            TokenKind::Instruction => Some(self.instruction),
            TokenKind::InstructionSimd => Some(self.instruction_simd),
            TokenKind::Register => Some(self.register),
            TokenKind::Number => Some(self.number),
            TokenKind::String => Some(self.string),
            TokenKind::Comment => Some(self.comment),
            TokenKind::EndOfInput | TokenKind::NewLine | TokenKind::Other => None,
        }
    }

    fn apply(&mut self, overrides: &ThemeOverrides) -> Result<(), String> {
        let slots = [
            ("line_directive", &overrides.line_directive, &mut self.line_directive),
            ("directive", &overrides.directive, &mut self.directive),
            ("identifier", &overrides.identifier, &mut self.identifier),
            ("qualifier", &overrides.qualifier, &mut self.qualifier),
            ("instruction", &overrides.instruction, &mut self.instruction),
            ("instruction_simd", &overrides.instruction_simd, &mut self.instruction_simd),
            ("register", &overrides.register, &mut self.register),
            ("number", &overrides.number, &mut self.number),
            ("string", &overrides.string, &mut self.string),
            ("comment", &overrides.comment, &mut self.comment),
        ];
        for (name, value, slot) in slots {
            if let Some(text) = value {
                *slot = Color::parse(text).ok_or_else(|| format!("{name}: '{text}' is not a #RRGGBB color"))?;
            }
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeOverrides {
    line_directive: Option<String>,
    directive: Option<String>,
    identifier: Option<String>,
    qualifier: Option<String>,
    instruction: Option<String>,
    instruction_simd: Option<String>,
    register: Option<String>,
    number: Option<String>,
    string: Option<String>,
    comment: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    #[serde(default)]
    dark: ThemeOverrides,
    #[serde(default)]
    light: ThemeOverrides,
}

/// A dark/light theme pair, possibly customized from a palette file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: Theme,
    pub light: Theme,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: Theme::DARK,
            light: Theme::LIGHT,
        }
    }
}

impl Palette {
    pub fn load(path: &Path) -> Result<Self, AnnotateError> {
        let text = std::fs::read_to_string(path).map_err(|source| AnnotateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|reason| AnnotateError::Palette {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        let file: PaletteFile = toml::from_str(text).map_err(|e| e.to_string())?;
        let mut palette = Palette::default();
        palette.dark.apply(&file.dark)?;
        palette.light.apply(&file.light)?;
        Ok(palette)
    }

    pub fn theme(&self, dark: bool) -> Theme {
        if dark { self.dark } else { self.light }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#4EC9B0"), Some(Color::rgb(0x4E, 0xC9, 0xB0)));
        assert_eq!(Color::parse("d4d4d4"), Some(Color::rgb(0xD4, 0xD4, 0xD4)));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#GG0000"), None);
        assert_eq!(Color::parse("#+12345"), None);
    }

    #[test]
    fn test_color_hex_output() {
        let mut out = String::new();
        Color::rgb(0x0A, 0xFF, 0x00).push_hex(&mut out);
        assert_eq!(out, "#0AFF00");
        assert_eq!(Color::rgb(0x0A, 0xFF, 0x00).to_string(), "#0AFF00");
    }

    #[test]
    fn test_select() {
        assert_eq!(Theme::select(true), Theme::dark());
        assert_eq!(Theme::select(false), Theme::light());
        assert_ne!(Theme::dark(), Theme::light());
    }

    #[test]
    fn test_structural_kinds_have_no_color() {
        let theme = Theme::dark();
        assert_eq!(theme.color_for(TokenKind::Other), None);
        assert_eq!(theme.color_for(TokenKind::NewLine), None);
        assert_eq!(theme.color_for(TokenKind::Register), Some(theme.register));
    }

    #[test]
    fn test_palette_overrides() {
        let palette = Palette::from_toml_str(
            r##"
[dark]
instruction = "#FF0000"

[light]
comment = "00ff00"
"##,
        )
        .unwrap();
        assert_eq!(palette.dark.instruction, Color::rgb(0xFF, 0, 0));
        assert_eq!(palette.dark.comment, Theme::DARK.comment);
        assert_eq!(palette.light.comment, Color::rgb(0, 0xFF, 0));
        assert_eq!(palette.theme(false).register, Theme::LIGHT.register);
    }

    #[test]
    fn test_palette_rejects_bad_color() {
        let err = Palette::from_toml_str("[dark]\nregister = \"red\"\n").unwrap_err();
        assert!(err.contains("register"));
    }

    #[test]
    fn test_palette_rejects_unknown_key() {
        assert!(Palette::from_toml_str("[dark]\nopcode = \"#000000\"\n").is_err());
        assert!(Palette::from_toml_str("[sepia]\n").is_err());
    }

    #[test]
    fn test_palette_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.toml");
        std::fs::write(&path, "[light]\nnumber = \"#123456\"\n").unwrap();
        let palette = Palette::load(&path).unwrap();
        assert_eq!(palette.light.number, Color::rgb(0x12, 0x34, 0x56));

        let missing = Palette::load(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(AnnotateError::Io { .. })));
    }
}
