//! Error types for spark-folio.
//!
//! Every failure the library can report is a configuration or startup
//! problem. Runtime behaviors (typing, toggling, filtering) never fail once
//! mounted.

use std::path::PathBuf;

use thiserror::Error;

use crate::page::Anchor;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Debug, Error)]
pub enum FolioError {
    /// The typewriter was given nothing to type.
    #[error("typewriter word list is empty")]
    EmptyWordList,

    /// A word with no characters would never reach its typing peak.
    #[error("typewriter word at index {index} is empty")]
    EmptyWord { index: usize },

    /// Typing, deleting and hold delays must be non-zero and distinct.
    #[error(
        "typewriter delays must be non-zero and distinct (type {type_ms}ms, delete {delete_ms}ms, hold {hold_ms}ms)"
    )]
    InvalidDelays {
        type_ms: u64,
        delete_ms: u64,
        hold_ms: u64,
    },

    #[error("reveal threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),

    /// Menu link fade timings must be finite and non-negative, with a
    /// positive stagger divisor.
    #[error(
        "nav timings are invalid (fade {fade_secs}s, stagger divisor {stagger_divisor}, base delay {base_delay_secs}s)"
    )]
    InvalidNav {
        fade_secs: f64,
        stagger_divisor: f64,
        base_delay_secs: f64,
    },

    /// The host page lacks an element a behavior binds to.
    #[error("page is missing required anchor `{0}`")]
    MissingAnchor(Anchor),

    #[error("no filter control for project tag `{0}`")]
    UnknownTag(String),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {origin}: {source}")]
    ConfigParse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}
