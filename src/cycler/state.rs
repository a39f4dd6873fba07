//! Typewriter state machine.
//!
//! Two phases, no terminal state:
//!
//! ```text
//!   Typing ──(char_index == len)──▶ Deleting
//!     ▲                               │
//!     └──(char_index == 0, next word)─┘
//! ```
//!
//! [`advance`] is a pure function: the same word list and state always yield
//! the same [`Step`].

use std::time::Duration;

use crate::error::{FolioError, Result};

// =============================================================================
// WORD LIST
// =============================================================================

/// Non-empty list of non-empty words. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    /// Length of each word in chars, cached for the hot path.
    lengths: Vec<usize>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(FolioError::EmptyWordList);
        }
        if let Some(index) = words.iter().position(|w| w.is_empty()) {
            return Err(FolioError::EmptyWord { index });
        }
        let lengths = words.iter().map(|w| w.chars().count()).collect();
        Ok(Self { words, lengths })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    fn char_len(&self, index: usize) -> usize {
        self.lengths[index]
    }
}

// =============================================================================
// TIMING
// =============================================================================

/// Which delay follows a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// A character was typed.
    Type,
    /// A character was deleted.
    Delete,
    /// The word is complete; pause before deleting.
    Hold,
}

/// The three delays of the effect. Always non-zero and distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclerTiming {
    type_delay: Duration,
    delete_delay: Duration,
    hold_delay: Duration,
}

impl CyclerTiming {
    pub fn new(type_delay: Duration, delete_delay: Duration, hold_delay: Duration) -> Result<Self> {
        let delays = [type_delay, delete_delay, hold_delay];
        let non_zero = delays.iter().all(|d| !d.is_zero());
        let distinct =
            type_delay != delete_delay && type_delay != hold_delay && delete_delay != hold_delay;

        if !(non_zero && distinct) {
            return Err(FolioError::InvalidDelays {
                type_ms: type_delay.as_millis() as u64,
                delete_ms: delete_delay.as_millis() as u64,
                hold_ms: hold_delay.as_millis() as u64,
            });
        }

        Ok(Self {
            type_delay,
            delete_delay,
            hold_delay,
        })
    }

    pub fn delay(&self, pace: Pace) -> Duration {
        match pace {
            Pace::Type => self.type_delay,
            Pace::Delete => self.delete_delay,
            Pace::Hold => self.hold_delay,
        }
    }
}

impl Default for CyclerTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(crate::config::DEFAULT_TYPE_DELAY_MS),
            delete_delay: Duration::from_millis(crate::config::DEFAULT_DELETE_DELAY_MS),
            hold_delay: Duration::from_millis(crate::config::DEFAULT_HOLD_DELAY_MS),
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Typing,
    Deleting,
}

/// Position of the effect within the word list.
///
/// Only [`CyclerState::default`] and [`advance`] produce states, so
/// `char_index` never exceeds the current word's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CyclerState {
    word_index: usize,
    char_index: usize,
    phase: Phase,
}

impl CyclerState {
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// Number of characters currently displayed.
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }
}

/// Outcome of one step: the new state, the text to render, and which delay
/// to wait before the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: CyclerState,
    pub text: String,
    pub pace: Pace,
}

// =============================================================================
// ADVANCE
// =============================================================================

/// First `n` characters of `word`.
fn prefix(word: &str, n: usize) -> &str {
    match word.char_indices().nth(n) {
        Some((byte, _)) => &word[..byte],
        None => word,
    }
}

/// Advance the effect by one character.
pub fn advance(words: &WordList, state: CyclerState) -> Step {
    // States from another list are folded back into range.
    let word_index = state.word_index % words.len();
    let len = words.char_len(word_index);
    let word = &words.words[word_index];

    let (char_index, mut pace) = match state.phase {
        Phase::Deleting => (state.char_index.min(len).saturating_sub(1), Pace::Delete),
        Phase::Typing => ((state.char_index + 1).min(len), Pace::Type),
    };
    let text = prefix(word, char_index).to_string();

    let mut next = CyclerState {
        word_index,
        char_index,
        phase: state.phase,
    };

    match state.phase {
        Phase::Typing if char_index == len => {
            next.phase = Phase::Deleting;
            pace = Pace::Hold;
        }
        Phase::Deleting if char_index == 0 => {
            next.phase = Phase::Typing;
            next.word_index = (word_index + 1) % words.len();
            pace = Pace::Type;
        }
        _ => {}
    }

    Step {
        state: next,
        text,
        pace,
    }
}
