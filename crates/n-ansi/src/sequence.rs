// SPDX-License-Identifier: MIT
//
// ANSI escape sequence encoding.
//
// Pure functions that write one escape sequence to any `impl Write`. No state,
// no policy about errors: that's the `Cursor`'s job. This module only knows
// the byte-level encoding of each command.
//
// Each function issues exactly one `write_all`. Parameterized sequences are
// formatted into a small scratch buffer first so the introducer and body
// never reach the sink as separate writes.
//
// Numeric parameters are not validated. Zero and negative values are
// formatted as-is; what the terminal makes of `\x1b[-3A` is its business.

use std::fmt;
use std::io::{self, Write};

use crate::color::Color;
use crate::style::Style;

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

/// Write `CSI` + formatted body in a single `write_all`.
fn csi(w: &mut impl Write, body: fmt::Arguments<'_>) -> io::Result<()> {
    let mut seq = Vec::with_capacity(16);
    seq.extend_from_slice(CSI.as_bytes());
    seq.write_fmt(body)?;
    w.write_all(&seq)
}

// ─── Visibility ──────────────────────────────────────────────────────────────

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Alternate Screen ────────────────────────────────────────────────────────

/// Switch to the alternate screen buffer (DEC Private Mode 1049).
///
/// The original screen contents are preserved and come back on
/// [`exit_alt_screen`].
#[inline]
pub fn enter_alt_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?1049h")
}

/// Return to the original screen buffer.
#[inline]
pub fn exit_alt_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?1049l")
}

// ─── Movement ────────────────────────────────────────────────────────────────

/// Move the cursor up `n` rows (CUU).
#[inline]
pub fn cursor_up(w: &mut impl Write, n: i64) -> io::Result<()> {
    csi(w, format_args!("{n}A"))
}

/// Move the cursor down `n` rows (CUD).
#[inline]
pub fn cursor_down(w: &mut impl Write, n: i64) -> io::Result<()> {
    csi(w, format_args!("{n}B"))
}

/// Move the cursor right `n` columns (CUF).
#[inline]
pub fn cursor_right(w: &mut impl Write, n: i64) -> io::Result<()> {
    csi(w, format_args!("{n}C"))
}

/// Move the cursor left `n` columns (CUB).
#[inline]
pub fn cursor_left(w: &mut impl Write, n: i64) -> io::Result<()> {
    csi(w, format_args!("{n}D"))
}

/// Move the cursor to column `col` of the current row (CHA).
///
/// Passed through unchanged: terminals count columns from 1.
#[inline]
pub fn cursor_to_col(w: &mut impl Write, col: i64) -> io::Result<()> {
    csi(w, format_args!("{col}G"))
}

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Emit a single SGR parameter: `\x1b[{code}m`.
#[inline]
pub fn sgr(w: &mut impl Write, code: u8) -> io::Result<()> {
    csi(w, format_args!("{code}m"))
}

/// Reset all attributes and colors (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set the foreground color (SGR 30–37).
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    sgr(w, color.fg_code())
}

/// Set the background color (SGR 40–47).
#[inline]
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    sgr(w, color.bg_code())
}

/// Emit every style in `style` as one semicolon-separated SGR sequence.
///
/// `BOLD | ITALIC` becomes `\x1b[1;3m`. Writes nothing for an empty set.
pub fn attrs(w: &mut impl Write, style: Style) -> io::Result<()> {
    if style.is_empty() {
        return Ok(());
    }

    let mut seq = Vec::with_capacity(24);
    seq.extend_from_slice(CSI.as_bytes());
    for (i, code) in style.sgr_codes().enumerate() {
        if i > 0 {
            seq.push(b';');
        }
        write!(seq, "{code}")?;
    }
    seq.push(b'm');
    w.write_all(&seq)
}

// ─── Erase ───────────────────────────────────────────────────────────────────

/// Extent of an erase (ED / EL parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Erase {
    /// No parameter. Terminals treat it like [`ToEnd`](Erase::ToEnd).
    #[default]
    Implicit,
    /// From the cursor to the end (0).
    ToEnd,
    /// From the start to the cursor (1).
    ToStart,
    /// Everything (2).
    All,
}

impl Erase {
    const fn param(self) -> &'static str {
        match self {
            Self::Implicit => "",
            Self::ToEnd => "0",
            Self::ToStart => "1",
            Self::All => "2",
        }
    }
}

/// Erase part of the display (ED).
#[inline]
pub fn erase_display(w: &mut impl Write, extent: Erase) -> io::Result<()> {
    csi(w, format_args!("{}J", extent.param()))
}

/// Erase part of the current line (EL).
#[inline]
pub fn erase_line(w: &mut impl Write, extent: Erase) -> io::Result<()> {
    csi(w, format_args!("{}K", extent.param()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
