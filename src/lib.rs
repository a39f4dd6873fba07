//! # spark-folio
//!
//! Reactive behaviors for a personal portfolio page.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! observable UI state. Every behavior is headless: the host (a browser
//! binding, a terminal, a test) feeds events in and renders the resulting
//! state.
//!
//! ## Architecture
//!
//! ```text
//! host events → Page → { NavMenu, RevealObserver, ContactForm, TagFilter, ScrollProgress }
//! host clock  → Page::tick → TextCycler → TextSink
//! ```
//!
//! ## Modules
//!
//! - [`cycler`] - Typewriter state machine, tick driver, cancellable runner
//! - [`nav`] - Burger menu, link fade-in, anchor scrolling
//! - [`reveal`] - One-shot scroll reveal observers
//! - [`form`] - Contact form validation and success banner
//! - [`filter`] - Project tag filter
//! - [`progress`] - Scroll progress indicator
//! - [`page`] - Mounting and event routing
//! - [`config`] - TOML configuration
//! - [`terminal`] - crossterm front end for the typewriter

pub mod config;
pub mod cycler;
pub mod error;
pub mod filter;
pub mod form;
pub mod nav;
pub mod page;
pub mod progress;
pub mod reveal;
pub mod terminal;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{FolioError, Result};

pub use config::FolioConfig;

pub use cycler::{
    advance, spawn, CyclerHandle, CyclerState, CyclerTiming, Pace, Phase, Step, TextCycler,
    TextSink, WordList,
};

pub use nav::{ClickTarget, NavMenu, ScrollBehavior, ScrollBlock, ScrollRequest};

pub use reveal::{IntersectionEntry, RevealObserver};

pub use form::{is_valid_email, ContactForm, Field, FieldError, SubmitOutcome, SuccessBanner};

pub use filter::{Filter, FilterControl, ProjectCard, TagFilter};

pub use progress::{scroll_progress, ScrollMetrics, ScrollProgress};

pub use page::{Anchor, Page, PageDocument, PageLayout};
