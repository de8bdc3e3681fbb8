// SPDX-License-Identifier: MIT
//
// Cursor — the fluent sequence emitter.
//
// Wraps one sink and turns each method call into one escape sequence,
// written immediately. Every method returns `&mut Self`, so a whole frame
// of control reads as a chain:
//
//     cursor.hide().to_col(1).clear_entire_line().bold().red();
//
// Nothing is buffered and nothing is flushed. The sink belongs to the
// caller: pass `&mut sink` to keep it, or hand it over and get it back with
// `into_inner`.
//
// Write failures never interrupt a chain. The first one is kept for
// `take_error`, and under `ErrorPolicy::Warn` each one is also logged.

use std::io::{self, Write};

use crate::color::Color;
use crate::sequence::{self, Erase};
use crate::style::Style;

// ─── Error Policy ────────────────────────────────────────────────────────────

/// What the emitter does when the sink rejects a write.
///
/// Neither policy stops the chain or panics. The first failure is always
/// retained for [`Cursor::take_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Drop the failure silently.
    Ignore,
    /// Log the failure as a `tracing` warning.
    #[default]
    Warn,
}

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Fluent ANSI escape sequence emitter over a caller-supplied sink.
///
/// ```
/// use n_ansi::Cursor;
///
/// let mut out = Vec::new();
/// Cursor::new(&mut out).hide().up(2).bold();
/// assert_eq!(out, b"\x1b[?25l\x1b[2A\x1b[1m");
/// ```
#[derive(Debug)]
pub struct Cursor<W: Write> {
    out: W,
    policy: ErrorPolicy,
    error: Option<io::Error>,
}

impl Cursor<io::Stderr> {
    /// Emitter bound to the process's standard error, looked up now.
    ///
    /// `Stderr` is unbuffered, so every sequence reaches the terminal as soon
    /// as it is emitted.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Cursor<W> {
    /// Wrap `out` with the default [`ErrorPolicy`].
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self::with_policy(out, ErrorPolicy::Warn)
    }

    /// Wrap `out` with an explicit error policy.
    #[must_use]
    pub const fn with_policy(out: W, policy: ErrorPolicy) -> Self {
        Self {
            out,
            policy,
            error: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub const fn set_policy(&mut self, policy: ErrorPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Take the first write failure since construction or the last call.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Borrow the sink.
    #[inline]
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Mutably borrow the sink, e.g. to write plain text between sequences.
    #[inline]
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Give the sink back. Any retained error is dropped.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run one sequence function against the sink and apply the error policy.
    fn emit<F>(&mut self, name: &'static str, f: F) -> &mut Self
    where
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        if let Err(err) = f(&mut self.out) {
            if self.policy == ErrorPolicy::Warn {
                tracing::warn!(sequence = name, error = %err, "escape sequence write failed");
            }
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
        self
    }

    // ── Visibility ──────────────────────────────────────────────────────

    /// Hide the cursor: `ESC[?25l`.
    pub fn hide(&mut self) -> &mut Self {
        self.emit("hide", sequence::cursor_hide)
    }

    /// Show the cursor: `ESC[?25h`.
    pub fn show(&mut self) -> &mut Self {
        self.emit("show", sequence::cursor_show)
    }

    // ── Buffer ──────────────────────────────────────────────────────────

    /// Switch to the alternate screen: `ESC[?1049h`.
    pub fn alt_buffer(&mut self) -> &mut Self {
        self.emit("alt_buffer", sequence::enter_alt_screen)
    }

    /// Switch back to the original screen: `ESC[?1049l`.
    pub fn original_buffer(&mut self) -> &mut Self {
        self.emit("original_buffer", sequence::exit_alt_screen)
    }

    // ── Movement ────────────────────────────────────────────────────────
    //
    // Counts are written as given. No clamping, no rejection of zero or
    // negative values.

    /// `ESC[{lines}A`
    pub fn up(&mut self, lines: i64) -> &mut Self {
        self.emit("up", |w| sequence::cursor_up(w, lines))
    }

    /// `ESC[{lines}B`
    pub fn down(&mut self, lines: i64) -> &mut Self {
        self.emit("down", |w| sequence::cursor_down(w, lines))
    }

    /// `ESC[{cols}C`
    pub fn right(&mut self, cols: i64) -> &mut Self {
        self.emit("right", |w| sequence::cursor_right(w, cols))
    }

    /// `ESC[{cols}D`
    pub fn left(&mut self, cols: i64) -> &mut Self {
        self.emit("left", |w| sequence::cursor_left(w, cols))
    }

    /// Jump to an absolute column (1-based on the terminal side): `ESC[{col}G`.
    pub fn to_col(&mut self, col: i64) -> &mut Self {
        self.emit("to_col", |w| sequence::cursor_to_col(w, col))
    }

    // ── Formatting ──────────────────────────────────────────────────────

    /// Reset every style and color: `ESC[0m`.
    pub fn clear(&mut self) -> &mut Self {
        self.emit("clear", sequence::reset)
    }

    /// `ESC[1m`
    pub fn bold(&mut self) -> &mut Self {
        self.style(Style::BOLD)
    }

    /// `ESC[2m`
    pub fn dim(&mut self) -> &mut Self {
        self.style(Style::DIM)
    }

    /// `ESC[3m`
    pub fn italic(&mut self) -> &mut Self {
        self.style(Style::ITALIC)
    }

    /// `ESC[4m`
    pub fn underline(&mut self) -> &mut Self {
        self.style(Style::UNDERLINE)
    }

    /// `ESC[5m`
    pub fn blinking(&mut self) -> &mut Self {
        self.style(Style::BLINKING)
    }

    /// `ESC[7m`
    pub fn inverse(&mut self) -> &mut Self {
        self.style(Style::INVERSE)
    }

    /// `ESC[8m`
    pub fn invisible(&mut self) -> &mut Self {
        self.style(Style::INVISIBLE)
    }

    /// `ESC[9m`
    pub fn strikethrough(&mut self) -> &mut Self {
        self.style(Style::STRIKETHROUGH)
    }

    /// Apply several styles in one sequence (`BOLD | ITALIC` → `ESC[1;3m`).
    ///
    /// An empty set writes nothing.
    pub fn style(&mut self, style: Style) -> &mut Self {
        self.emit("style", |w| sequence::attrs(w, style))
    }

    // ── Colors ──────────────────────────────────────────────────────────

    /// Set the foreground color: `ESC[30m` … `ESC[37m`.
    pub fn fg(&mut self, color: Color) -> &mut Self {
        self.emit("fg", |w| sequence::fg(w, color))
    }

    /// Set the background color: `ESC[40m` … `ESC[47m`.
    pub fn bg(&mut self, color: Color) -> &mut Self {
        self.emit("bg", |w| sequence::bg(w, color))
    }

    /// `ESC[30m`
    pub fn black(&mut self) -> &mut Self {
        self.fg(Color::Black)
    }

    /// `ESC[40m`
    pub fn black_bg(&mut self) -> &mut Self {
        self.bg(Color::Black)
    }

    /// `ESC[31m`
    pub fn red(&mut self) -> &mut Self {
        self.fg(Color::Red)
    }

    /// `ESC[41m`
    pub fn red_bg(&mut self) -> &mut Self {
        self.bg(Color::Red)
    }

    /// `ESC[32m`
    pub fn green(&mut self) -> &mut Self {
        self.fg(Color::Green)
    }

    /// `ESC[42m`
    pub fn green_bg(&mut self) -> &mut Self {
        self.bg(Color::Green)
    }

    /// `ESC[33m`
    pub fn yellow(&mut self) -> &mut Self {
        self.fg(Color::Yellow)
    }

    /// `ESC[43m`
    pub fn yellow_bg(&mut self) -> &mut Self {
        self.bg(Color::Yellow)
    }

    /// `ESC[34m`
    pub fn blue(&mut self) -> &mut Self {
        self.fg(Color::Blue)
    }

    /// `ESC[44m`
    pub fn blue_bg(&mut self) -> &mut Self {
        self.bg(Color::Blue)
    }

    /// `ESC[35m`
    pub fn magenta(&mut self) -> &mut Self {
        self.fg(Color::Magenta)
    }

    /// `ESC[45m`
    pub fn magenta_bg(&mut self) -> &mut Self {
        self.bg(Color::Magenta)
    }

    /// `ESC[36m`
    pub fn cyan(&mut self) -> &mut Self {
        self.fg(Color::Cyan)
    }

    /// `ESC[46m`
    pub fn cyan_bg(&mut self) -> &mut Self {
        self.bg(Color::Cyan)
    }

    /// `ESC[37m`
    pub fn white(&mut self) -> &mut Self {
        self.fg(Color::White)
    }

    /// `ESC[47m`
    pub fn white_bg(&mut self) -> &mut Self {
        self.bg(Color::White)
    }

    // ── Erasing ─────────────────────────────────────────────────────────

    /// `ESC[J`
    pub fn clear_screen(&mut self) -> &mut Self {
        self.emit("clear_screen", |w| sequence::erase_display(w, Erase::Implicit))
    }

    /// `ESC[0J`
    pub fn clear_to_end_of_screen(&mut self) -> &mut Self {
        self.emit("clear_to_end_of_screen", |w| {
            sequence::erase_display(w, Erase::ToEnd)
        })
    }

    /// `ESC[1J`
    pub fn clear_to_start_of_screen(&mut self) -> &mut Self {
        self.emit("clear_to_start_of_screen", |w| {
            sequence::erase_display(w, Erase::ToStart)
        })
    }

    /// `ESC[2J`. The cursor does not move.
    pub fn clear_entire_screen(&mut self) -> &mut Self {
        self.emit("clear_entire_screen", |w| {
            sequence::erase_display(w, Erase::All)
        })
    }

    /// `ESC[K`
    pub fn clear_current_line(&mut self) -> &mut Self {
        self.emit("clear_current_line", |w| {
            sequence::erase_line(w, Erase::Implicit)
        })
    }

    /// `ESC[0K`
    pub fn clear_to_end_of_line(&mut self) -> &mut Self {
        self.emit("clear_to_end_of_line", |w| {
            sequence::erase_line(w, Erase::ToEnd)
        })
    }

    /// `ESC[1K`
    pub fn clear_to_start_of_line(&mut self) -> &mut Self {
        self.emit("clear_to_start_of_line", |w| {
            sequence::erase_line(w, Erase::ToStart)
        })
    }

    /// `ESC[2K`
    pub fn clear_entire_line(&mut self) -> &mut Self {
        self.emit("clear_entire_line", |w| sequence::erase_line(w, Erase::All))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
