//! Colors a text character can carry: the renderer's default, the 16
//! named palette entries, a 256-color index or 24-bit RGB.

use serde::{Deserialize, Serialize};

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read `rrggbb` hex digits, with or without a leading `#`
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}

/// The 16 palette entries every terminal agrees on.
/// Declaration order is the palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    const PALETTE: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    const BASE_NAMES: [&'static str; 8] = [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::PALETTE.get(usize::from(index)).copied()
    }

    /// Upper half of the palette; bright colors map to themselves
    pub fn bright(self) -> Self {
        Self::PALETTE[usize::from(self.index() | 8)]
    }

    /// Look up `red`, `bright_red` and so on
    pub fn from_name(name: &str) -> Option<Self> {
        let (base, bright) = match name.strip_prefix("bright_") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let index = Self::BASE_NAMES.iter().position(|&n| n == base)?;
        let color = Self::PALETTE[index];
        Some(if bright { color.bright() } else { color })
    }
}

/// Color of a text character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Whatever the renderer uses as its default
    #[default]
    Default,
    /// One of the 16 ANSI colors
    Ansi(AnsiColor),
    /// 256-color palette index (0-255)
    Indexed(u8),
    /// 24-bit true color
    Rgb(Rgb),
}

impl Color {
    /// Parse a user-facing color string.
    ///
    /// Accepts `default`, ANSI names (`red`, `bright_cyan`), palette
    /// indices (`idx:42`) and hex (`#ff8800`).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_ascii_lowercase();
        if text == "default" {
            return Some(Self::Default);
        }
        if let Some(index) = text.strip_prefix("idx:") {
            return index.parse().ok().map(Self::Indexed);
        }
        if text.starts_with('#') {
            return Rgb::from_hex(&text).map(Self::Rgb);
        }
        AnsiColor::from_name(&text).map(Self::Ansi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("00ff00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(Rgb::from_hex("#invalid"), None);
        assert_eq!(Rgb::from_hex("+fffff"), None);
    }

    #[test]
    fn test_ansi_bright() {
        assert_eq!(AnsiColor::Cyan.bright(), AnsiColor::BrightCyan);
        assert_eq!(AnsiColor::BrightCyan.bright(), AnsiColor::BrightCyan);
        assert_eq!(AnsiColor::BrightWhite.index(), 15);
    }

    #[test]
    fn test_ansi_from_index() {
        assert_eq!(AnsiColor::from_index(1), Some(AnsiColor::Red));
        assert_eq!(AnsiColor::from_index(15), Some(AnsiColor::BrightWhite));
        assert_eq!(AnsiColor::from_index(16), None);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("default"), Some(Color::Default));
        assert_eq!(Color::parse("Red"), Some(Color::Ansi(AnsiColor::Red)));
        assert_eq!(
            Color::parse("bright_blue"),
            Some(Color::Ansi(AnsiColor::BrightBlue))
        );
        assert_eq!(Color::parse("idx:200"), Some(Color::Indexed(200)));
        assert_eq!(Color::parse("#102030"), Some(Color::Rgb(Rgb::new(0x10, 0x20, 0x30))));
        assert_eq!(Color::parse("idx:300"), None);
        assert_eq!(Color::parse("mauve"), None);
    }
}
