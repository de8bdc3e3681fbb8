// SPDX-License-Identifier: MIT
//
// The eight standard ANSI colors.
//
// SGR numbers them contiguously: foreground 30–37, background 40–47, in the
// fixed order black, red, green, yellow, blue, magenta, cyan, white. The enum
// discriminant is that offset, so both codes are one addition away.

use std::fmt;

/// One of the eight standard terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// All colors in SGR order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Offset within the standard palette (0–7).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// SGR foreground code (30–37).
    #[inline]
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        30 + self.index()
    }

    /// SGR background code (40–47).
    #[inline]
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        40 + self.index()
    }

    /// Lowercase name, also the `Display` form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_sgr_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(usize::from(color.index()), i);
        }
    }

    #[test]
    fn foreground_codes_are_contiguous() {
        let codes: Vec<u8> = Color::ALL.iter().map(|c| c.fg_code()).collect();
        assert_eq!(codes, (30..=37).collect::<Vec<u8>>());
    }

    #[test]
    fn background_codes_are_contiguous() {
        let codes: Vec<u8> = Color::ALL.iter().map(|c| c.bg_code()).collect();
        assert_eq!(codes, (40..=47).collect::<Vec<u8>>());
    }

    #[test]
    fn endpoints() {
        assert_eq!(Color::Black.fg_code(), 30);
        assert_eq!(Color::Black.bg_code(), 40);
        assert_eq!(Color::White.fg_code(), 37);
        assert_eq!(Color::White.bg_code(), 47);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Color::Magenta.to_string(), "magenta");
    }

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("{:<6}|", Color::Red), "red   |");
    }
}
