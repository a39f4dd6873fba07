//! Typewriter - types and deletes a list of words, forever
//!
//! Types each word one character at a time, holds it, deletes it one
//! character at a time, then moves on to the next word (wrapping around).
//!
//! # Drivers
//!
//! - [`TextCycler::tick`] - poll from your own event loop; returns the next
//!   deadline so the loop can sleep until then.
//! - [`spawn`] - background timer chain; the returned [`CyclerHandle`] stops
//!   it for good.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Instant;
//! use spark_folio::cycler::{TextCycler, CyclerTiming};
//!
//! let mut cycler = TextCycler::new(vec!["Go".into()], CyclerTiming::default())?;
//! let mut text = String::new();
//!
//! let next = cycler.tick(Instant::now(), &mut text);
//! assert_eq!(text, "G");
//! ```

mod runner;
mod sink;
mod state;

pub use runner::{spawn, CyclerHandle};
pub use sink::TextSink;
pub use state::{advance, CyclerState, CyclerTiming, Pace, Phase, Step, WordList};

use std::time::Instant;

use crate::error::Result;

/// Owned typewriter: word list, timing, current state and next deadline.
#[derive(Debug, Clone)]
pub struct TextCycler {
    words: WordList,
    timing: CyclerTiming,
    state: CyclerState,
    next_at: Option<Instant>,
}

impl TextCycler {
    /// Fails with a configuration error on an empty list or an empty word.
    pub fn new(words: Vec<String>, timing: CyclerTiming) -> Result<Self> {
        Ok(Self {
            words: WordList::new(words)?,
            timing,
            state: CyclerState::default(),
            next_at: None,
        })
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn timing(&self) -> CyclerTiming {
        self.timing
    }

    pub fn state(&self) -> CyclerState {
        self.state
    }

    /// Deadline of the next step, `None` before the first tick.
    pub fn next_at(&self) -> Option<Instant> {
        self.next_at
    }

    /// Advance one character, ignoring the schedule.
    pub fn step(&mut self) -> Step {
        let step = advance(&self.words, self.state);

        if step.state.phase() != self.state.phase() {
            match step.pace {
                Pace::Hold => tracing::trace!(word = %step.text, "word typed, holding"),
                _ => tracing::trace!(
                    next_word = step.state.word_index(),
                    "word deleted, advancing"
                ),
            }
        }

        self.state = step.state;
        step
    }

    /// Step if the deadline has passed, writing the new text to `sink`.
    ///
    /// The first tick always steps. Returns the deadline of the next step.
    pub fn tick<S: TextSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> Instant {
        if let Some(at) = self.next_at {
            if now < at {
                return at;
            }
        }

        let step = self.step();
        sink.set_text(&step.text);

        let next = now + self.timing.delay(step.pace);
        self.next_at = Some(next);
        next
    }
}
