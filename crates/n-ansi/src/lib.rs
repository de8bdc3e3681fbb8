// SPDX-License-Identifier: MIT
//
// n-ansi — ANSI escape sequence emitter for n-cursor.
//
// A fluent `Cursor` that writes cursor movement, visibility, erase, style,
// color and alternate-screen sequences straight to any `io::Write`. One call,
// one sequence, one write. No buffering, no flushing, no terminal state
// tracking: the sink and its lifecycle stay with the caller.
//
// The byte-level encodings live in `sequence` as plain functions for callers
// that would rather not hold an emitter.

pub mod color;
pub mod cursor;
pub mod sequence;
pub mod style;
pub mod terminal;

pub use color::Color;
pub use cursor::{Cursor, ErrorPolicy};
pub use style::Style;
