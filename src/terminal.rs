//! Terminal front end - typewriter on a single terminal line
//!
//! [`TerminalSink`] redraws one line in place. [`run_typewriter`] puts the
//! terminal in raw mode and ticks a cycler until `q`, `Esc` or `Ctrl+C`.
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::terminal::run_typewriter;
//!
//! let cycler = FolioConfig::default().typewriter.build()?;
//! run_typewriter(cycler, "I'm a ")?;
//! ```

use std::io::{self, Write};
use std::time::Instant;

use crossterm::cursor::{Hide, MoveToColumn, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use crate::cycler::{TextCycler, TextSink};

// =============================================================================
// TERMINAL SINK
// =============================================================================

/// Caret drawn after the typed text.
pub const CARET: char = '|';

/// Redraws `prefix + text + caret` on the current line.
///
/// Write errors cannot travel through [`TextSink`]; the first one is kept
/// and later writes are skipped until it is taken.
pub struct TerminalSink<W: Write> {
    out: W,
    prefix: String,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, prefix: impl Into<String>) -> Self {
        Self {
            out,
            prefix: prefix.into(),
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(&self.prefix),
            Print(text),
            Print(CARET)
        )?;
        self.out.flush()
    }
}

impl<W: Write> TextSink for TerminalSink<W> {
    fn set_text(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.draw(text) {
            tracing::warn!(error = %err, "terminal write failed");
            self.error = Some(err);
        }
    }
}

// =============================================================================
// EVENT LOOP
// =============================================================================

/// Whether an input event ends the loop: `q`, `Esc` or `Ctrl+C`.
pub fn should_quit(event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Run the typewriter on stdout until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run_typewriter(cycler: TextCycler, prefix: &str) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    tracing::debug!("terminal raw mode enabled");

    let result = with_hidden_cursor(&mut io::stdout(), || {
        event_loop(cycler, TerminalSink::new(io::stdout(), prefix))
    });

    let restore = terminal::disable_raw_mode();
    tracing::debug!("terminal restored");

    result.and(restore)
}

/// Run `body` with the cursor hidden. The cursor is shown again even when
/// hiding it or `body` fails.
fn with_hidden_cursor<W, F>(out: &mut W, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let result = execute!(out, Hide).and_then(|_| body());
    let restore = execute!(out, Show, Print("\r\n"));
    result.and(restore)
}

fn event_loop<W: Write>(mut cycler: TextCycler, mut sink: TerminalSink<W>) -> io::Result<()> {
    loop {
        let next = cycler.tick(Instant::now(), &mut sink);
        if let Some(err) = sink.take_error() {
            return Err(err);
        }

        let timeout = next.saturating_duration_since(Instant::now());
        if event::poll(timeout)? && should_quit(&event::read()?) {
            return Ok(());
        }
    }
}
