// SPDX-License-Identifier: MIT
//
// n-cursor — drive the n-ansi emitter against standard error.
//
// Three demos, each a straight chain of emitter calls:
//
//   progress → hidden cursor, one line redrawn in place with to_col + erase
//   palette  → every foreground and background color
//   styles   → every text style, then all of them at once
//
// Escape sequences go to stderr. Logs go to stdout (filter: N_CURSOR_LOG,
// default `warn`) so the two never interleave on the same stream.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use n_ansi::{Color, Cursor, ErrorPolicy, Style, terminal};

/// Width of the progress bar in cells.
const BAR_WIDTH: u64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    Progress,
    Palette,
    Styles,
}

impl Demo {
    /// Redraws in place, so only meaningful on a terminal.
    const fn animated(self) -> bool {
        matches!(self, Self::Progress)
    }
}

#[derive(Debug, Parser)]
#[command(name = "n-cursor", version, about = "Fluent ANSI escape sequences on stderr")]
struct Cli {
    /// Which demo to run.
    #[arg(value_enum, default_value_t = Demo::Progress)]
    demo: Demo,

    /// Run inside the alternate screen buffer.
    #[arg(long)]
    alt_screen: bool,

    /// Discard write failures instead of logging them.
    #[arg(long)]
    ignore_errors: bool,

    /// Animate even when stderr is not a terminal.
    #[arg(long, env = "N_CURSOR_FORCE")]
    force: bool,

    /// Number of progress steps.
    #[arg(long, default_value_t = 20)]
    steps: u32,

    /// Delay between progress steps, in milliseconds.
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("N_CURSOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .with_ansi(false)
        .init();

    if cli.demo.animated() && !cli.force && !terminal::stderr_is_tty() {
        bail!("stderr is not a terminal (use --force to animate anyway)");
    }

    let policy = if cli.ignore_errors {
        ErrorPolicy::Ignore
    } else {
        ErrorPolicy::Warn
    };
    let mut cursor = Cursor::with_policy(io::stderr(), policy);
    info!(demo = ?cli.demo, alt_screen = cli.alt_screen, "starting");

    run(&mut cursor, cli.alt_screen, |cursor| match cli.demo {
        Demo::Progress => progress(cursor, cli.steps, Duration::from_millis(cli.delay_ms)),
        Demo::Palette => palette(cursor),
        Demo::Styles => styles(cursor),
    })?;

    if let Some(err) = cursor.take_error() {
        bail!("terminal output failed: {err}");
    }
    Ok(())
}

/// Run `demo`, then reset styles and show the cursor whatever it returned.
fn run<W, F>(cursor: &mut Cursor<W>, alt_screen: bool, demo: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut Cursor<W>) -> Result<()>,
{
    if alt_screen {
        cursor.alt_buffer().clear_entire_screen();
    }

    let outcome = demo(cursor);

    cursor.clear().show();
    if alt_screen {
        cursor.original_buffer();
    }
    outcome
}

/// Filled and empty cell counts for `step` of `steps`. `steps` must be non-zero.
fn bar_cells(step: u32, steps: u32) -> (u64, u64) {
    let filled = BAR_WIDTH * u64::from(step) / u64::from(steps);
    (filled, BAR_WIDTH - filled)
}

/// Redraw a single line in place until `steps` is reached.
fn progress<W: Write>(cursor: &mut Cursor<W>, steps: u32, delay: Duration) -> Result<()> {
    let steps = steps.max(1);
    cursor.hide();

    for step in 0..=steps {
        let (filled, empty) = bar_cells(step, steps);
        debug!(step, filled, "progress");

        cursor.to_col(1).clear_entire_line().bold();
        write!(cursor.get_mut(), "{:>3}% ", u64::from(step) * 100 / u64::from(steps))?;
        cursor.clear().green_bg();
        write!(cursor.get_mut(), "{}", " ".repeat(usize::try_from(filled)?))?;
        cursor.clear().white_bg();
        write!(cursor.get_mut(), "{}", " ".repeat(usize::try_from(empty)?))?;
        cursor.clear();

        if step < steps {
            thread::sleep(delay);
        }
    }

    writeln!(cursor.get_mut())?;
    Ok(())
}

/// One row of foregrounds, one row of backgrounds.
fn palette<W: Write>(cursor: &mut Cursor<W>) -> Result<()> {
    for color in Color::ALL {
        cursor.fg(color);
        write!(cursor.get_mut(), "{color:<8}")?;
    }
    cursor.clear();
    writeln!(cursor.get_mut())?;

    for color in Color::ALL {
        // Keep the label readable on its own background.
        let label = if color == Color::White { Color::Black } else { Color::White };
        cursor.bg(color).fg(label);
        write!(cursor.get_mut(), "{color:<8}")?;
    }
    cursor.clear();
    writeln!(cursor.get_mut())?;
    Ok(())
}

fn styles<W: Write>(cursor: &mut Cursor<W>) -> Result<()> {
    let named: [(&str, fn(&mut Cursor<W>) -> &mut Cursor<W>); 8] = [
        ("bold", Cursor::bold),
        ("dim", Cursor::dim),
        ("italic", Cursor::italic),
        ("underline", Cursor::underline),
        ("blinking", Cursor::blinking),
        ("inverse", Cursor::inverse),
        ("invisible", Cursor::invisible),
        ("strikethrough", Cursor::strikethrough),
    ];

    for (name, apply) in named {
        apply(cursor);
        write!(cursor.get_mut(), "{name}")?;
        cursor.clear();
        writeln!(cursor.get_mut())?;
    }

    cursor.style(Style::BOLD | Style::ITALIC | Style::UNDERLINE).cyan();
    write!(cursor.get_mut(), "bold + italic + underline")?;
    cursor.clear();
    writeln!(cursor.get_mut())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    /// Helper: run a demo against a fresh buffer and return its output.
    fn capture<F>(f: F) -> String
    where
        F: FnOnce(&mut Cursor<Vec<u8>>) -> Result<()>,
    {
        let mut cursor = Cursor::new(Vec::new());
        f(&mut cursor).unwrap();
        String::from_utf8(cursor.into_inner()).unwrap()
    }

    // ── Progress ────────────────────────────────────────────────────────

    #[test]
    fn bar_cells_always_fill_the_width() {
        for steps in [1, 3, 7, 20, 40, 1000] {
            for step in 0..=steps {
                let (filled, empty) = bar_cells(step, steps);
                assert_eq!(filled + empty, BAR_WIDTH, "step {step} of {steps}");
            }
        }
    }

    #[test]
    fn bar_cells_endpoints() {
        assert_eq!(bar_cells(0, 20), (0, BAR_WIDTH));
        assert_eq!(bar_cells(20, 20), (BAR_WIDTH, 0));
        assert_eq!(bar_cells(10, 20), (BAR_WIDTH / 2, BAR_WIDTH / 2));
    }

    #[test]
    fn progress_with_zero_steps_draws_start_and_end() {
        let out = capture(|c| progress(c, 0, Duration::ZERO));
        assert!(out.starts_with("\x1b[?25l"));
        assert_eq!(out.matches("\x1b[1G\x1b[2K").count(), 2);
        assert!(out.contains("  0% "));
        assert!(out.contains("100% "));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn progress_final_frame_is_fully_filled() {
        let out = capture(|c| progress(c, 4, Duration::ZERO));
        let last = out.rsplit("\x1b[1G\x1b[2K").next().unwrap();
        let full = format!("\x1b[42m{}\x1b[0m\x1b[47m\x1b[0m", " ".repeat(40));
        assert!(last.contains(&full), "last frame: {last:?}");
    }

    // ── Palette & Styles ────────────────────────────────────────────────

    #[test]
    fn palette_rows() {
        let out = capture(palette);
        assert!(out.starts_with("\x1b[30mblack   \x1b[31mred     "));
        assert!(out.contains("\x1b[41m\x1b[37mred     "));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn palette_uses_black_label_on_white() {
        let out = capture(palette);
        assert!(out.contains("\x1b[47m\x1b[30mwhite   "));
        assert!(!out.contains("\x1b[47m\x1b[37m"));
    }

    #[test]
    fn styles_reset_after_each_name() {
        let out = capture(styles);
        assert!(out.starts_with("\x1b[1mbold\x1b[0m\n\x1b[2mdim\x1b[0m\n"));
        assert!(out.contains("\x1b[9mstrikethrough\x1b[0m\n"));
        assert!(out.ends_with("\x1b[1;3;4m\x1b[36mbold + italic + underline\x1b[0m\n"));
    }

    // ── Run ─────────────────────────────────────────────────────────────

    #[test]
    fn run_restores_after_success() {
        let mut cursor = Cursor::new(Vec::new());
        run(&mut cursor, false, |c| {
            c.red();
            Ok(())
        })
        .unwrap();
        assert_eq!(cursor.into_inner(), b"\x1b[31m\x1b[0m\x1b[?25h");
    }

    #[test]
    fn run_restores_after_failure() {
        let mut cursor = Cursor::new(Vec::new());
        let outcome = run(&mut cursor, false, |c| {
            c.hide();
            Err(anyhow!("demo failed"))
        });
        assert!(outcome.is_err());
        assert_eq!(cursor.into_inner(), b"\x1b[?25l\x1b[0m\x1b[?25h");
    }

    #[test]
    fn run_leaves_alt_screen_after_failure() {
        let mut cursor = Cursor::new(Vec::new());
        let outcome = run(&mut cursor, true, |_| Err(anyhow!("demo failed")));
        assert!(outcome.is_err());
        assert_eq!(
            cursor.into_inner(),
            b"\x1b[?1049h\x1b[2J\x1b[0m\x1b[?25h\x1b[?1049l"
        );
    }

    // ── CLI ─────────────────────────────────────────────────────────────

    #[test]
    fn only_progress_is_animated() {
        assert!(Demo::Progress.animated());
        assert!(!Demo::Palette.animated());
        assert!(!Demo::Styles.animated());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["n-cursor"]).unwrap();
        assert_eq!(cli.demo, Demo::Progress);
        assert_eq!(cli.steps, 20);
        assert!(!cli.alt_screen);
    }

    #[test]
    fn cli_parses_demo_and_flags() {
        let cli =
            Cli::try_parse_from(["n-cursor", "palette", "--alt-screen", "--ignore-errors"]).unwrap();
        assert_eq!(cli.demo, Demo::Palette);
        assert!(cli.alt_screen);
        assert!(cli.ignore_errors);
    }
}
