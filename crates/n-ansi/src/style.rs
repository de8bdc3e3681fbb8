// SPDX-License-Identifier: MIT
//
// Text styles as a compact bitfield.
//
// Each flag maps to one SGR parameter. A set of flags can be emitted as a
// single CSI sequence (`\x1b[1;3;9m`) instead of one sequence per style.
// Reset (SGR 0) is not a flag: it is the absence of all of them, and the
// emitter exposes it separately as `clear`.

bitflags::bitflags! {
    /// Text styles, combinable with bitwise OR.
    ///
    /// ```
    /// use n_ansi::Style;
    ///
    /// let style = Style::BOLD | Style::UNDERLINE;
    /// assert!(style.contains(Style::BOLD));
    /// assert!(!style.contains(Style::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Style: u8 {
        /// SGR 1 — increased intensity.
        const BOLD          = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM           = 1 << 1;
        /// SGR 3 — italic.
        const ITALIC        = 1 << 2;
        /// SGR 4 — single underline.
        const UNDERLINE     = 1 << 3;
        /// SGR 5 — slow blink.
        const BLINKING      = 1 << 4;
        /// SGR 7 — swap foreground and background.
        const INVERSE       = 1 << 5;
        /// SGR 8 — concealed text.
        const INVISIBLE     = 1 << 6;
        /// SGR 9 — crossed-out text.
        const STRIKETHROUGH = 1 << 7;
    }
}

/// Flag → SGR code, in ascending code order.
const CODES: [(Style, u8); 8] = [
    (Style::BOLD, 1),
    (Style::DIM, 2),
    (Style::ITALIC, 3),
    (Style::UNDERLINE, 4),
    (Style::BLINKING, 5),
    (Style::INVERSE, 7),
    (Style::INVISIBLE, 8),
    (Style::STRIKETHROUGH, 9),
];

impl Style {
    /// SGR codes for every set flag, ascending.
    pub fn sgr_codes(self) -> impl Iterator<Item = u8> {
        CODES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, code)| code)
    }
}
