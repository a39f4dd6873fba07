//! Configuration - TOML settings with the page's stock constants as defaults
//!
//! Every field is optional; a missing file section falls back to the values
//! the portfolio page ships with.
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::config::FolioConfig;
//!
//! let config = FolioConfig::from_toml_str(
//!     r#"
//!     [typewriter]
//!     words = ["Rustacean", "Builder"]
//!     hold_delay_ms = 1500
//!     "#,
//!     "inline",
//! )?;
//! let cycler = config.typewriter.build()?;
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cycler::{CyclerTiming, TextCycler};
use crate::error::{FolioError, Result};

// =============================================================================
// DEFAULTS
// =============================================================================

/// Words cycled by the hero typewriter.
pub const DEFAULT_WORDS: [&str; 3] = ["Student", "Developer", "Creator"];

/// Delay after typing a character.
pub const DEFAULT_TYPE_DELAY_MS: u64 = 200;

/// Delay after deleting a character.
pub const DEFAULT_DELETE_DELAY_MS: u64 = 50;

/// Pause once a word is fully typed.
pub const DEFAULT_HOLD_DELAY_MS: u64 = 1000;

/// Visible fraction at which a page section is revealed.
pub const DEFAULT_SECTION_THRESHOLD: f64 = 0.1;

/// Visible fraction at which a skill item animates.
pub const DEFAULT_SKILL_THRESHOLD: f64 = 0.5;

/// How long the "message sent" banner stays up.
pub const DEFAULT_BANNER_MS: u64 = 3000;

// =============================================================================
// SECTIONS
// =============================================================================

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
    pub nav: NavConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypewriterConfig {
    pub words: Vec<String>,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub hold_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            type_delay_ms: DEFAULT_TYPE_DELAY_MS,
            delete_delay_ms: DEFAULT_DELETE_DELAY_MS,
            hold_delay_ms: DEFAULT_HOLD_DELAY_MS,
        }
    }
}

impl TypewriterConfig {
    /// Validated delay set.
    pub fn timing(&self) -> Result<CyclerTiming> {
        CyclerTiming::new(
            Duration::from_millis(self.type_delay_ms),
            Duration::from_millis(self.delete_delay_ms),
            Duration::from_millis(self.hold_delay_ms),
        )
    }

    /// Build a cycler, failing fast on an empty word list or bad delays.
    pub fn build(&self) -> Result<TextCycler> {
        TextCycler::new(self.words.clone(), self.timing()?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub section_threshold: f64,
    pub skill_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_threshold: DEFAULT_SECTION_THRESHOLD,
            skill_threshold: DEFAULT_SKILL_THRESHOLD,
        }
    }
}

/// Stagger of the menu link fade-in: link `i` starts after
/// `i / stagger_divisor + base_delay_secs` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    pub fade_secs: f64,
    pub stagger_divisor: f64,
    pub base_delay_secs: f64,
}

impl NavConfig {
    /// Timings must be finite and non-negative; the divisor strictly positive.
    pub fn validate(&self) -> Result<()> {
        let timings = [self.fade_secs, self.stagger_divisor, self.base_delay_secs];
        if timings.iter().any(|t| !t.is_finite() || *t < 0.0) || self.stagger_divisor == 0.0 {
            return Err(FolioError::InvalidNav {
                fade_secs: self.fade_secs,
                stagger_divisor: self.stagger_divisor,
                base_delay_secs: self.base_delay_secs,
            });
        }
        Ok(())
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            fade_secs: 0.5,
            stagger_divisor: 7.0,
            base_delay_secs: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub banner_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            banner_ms: DEFAULT_BANNER_MS,
        }
    }
}

impl FormConfig {
    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl FolioConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, &path.display().to_string())
    }

    /// Parse and validate TOML text. `origin` names the source in errors.
    pub fn from_toml_str(contents: &str, origin: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|source| FolioError::ConfigParse {
            origin: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the behaviors rely on.
    pub fn validate(&self) -> Result<()> {
        self.typewriter.build()?;
        for threshold in [self.reveal.section_threshold, self.reveal.skill_threshold] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(FolioError::InvalidThreshold(threshold));
            }
        }
        self.nav.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = FolioConfig::default();
        assert_eq!(config.typewriter.words, vec!["Student", "Developer", "Creator"]);
        assert_eq!(config.typewriter.type_delay_ms, 200);
        assert_eq!(config.typewriter.delete_delay_ms, 50);
        assert_eq!(config.typewriter.hold_delay_ms, 1000);
        assert_eq!(config.reveal.section_threshold, 0.1);
        assert_eq!(config.reveal.skill_threshold, 0.5);
        assert_eq!(config.form.banner_ms, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = FolioConfig::from_toml_str(
            r#"
            [typewriter]
            words = ["Rustacean"]
            hold_delay_ms = 1500
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.typewriter.words, vec!["Rustacean"]);
        assert_eq!(config.typewriter.hold_delay_ms, 1500);
        assert_eq!(config.typewriter.type_delay_ms, DEFAULT_TYPE_DELAY_MS);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let err = FolioConfig::from_toml_str("[typewriter]\nwords = []\n", "inline").unwrap_err();
        assert!(matches!(err, FolioError::EmptyWordList));
    }

    #[test]
    fn test_equal_delays_rejected() {
        let err = FolioConfig::from_toml_str(
            "[typewriter]\ntype_delay_ms = 50\ndelete_delay_ms = 50\n",
            "inline",
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::InvalidDelays { .. }));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = FolioConfig::from_toml_str("[reveal]\nskill_threshold = 1.5\n", "inline")
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidThreshold(t) if t == 1.5));
    }

    #[test]
    fn test_zero_stagger_divisor_rejected() {
        let err = FolioConfig::from_toml_str(
            "[nav]\nstagger_divisor = 0.0\nfade_secs = -1.0\n",
            "inline",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FolioError::InvalidNav { stagger_divisor, .. } if stagger_divisor == 0.0
        ));
    }

    #[test]
    fn test_negative_nav_timings_rejected() {
        let nav = NavConfig {
            base_delay_secs: -0.1,
            ..NavConfig::default()
        };
        assert!(matches!(nav.validate(), Err(FolioError::InvalidNav { .. })));

        let nav = NavConfig {
            fade_secs: f64::INFINITY,
            ..NavConfig::default()
        };
        assert!(matches!(nav.validate(), Err(FolioError::InvalidNav { .. })));

        assert!(NavConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = FolioConfig::from_toml_str("[typewriter]\nspeed = 3\n", "inline").unwrap_err();
        match err {
            FolioError::ConfigParse { origin, .. } => assert_eq!(origin, "inline"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[form]\nbanner_ms = 500").unwrap();

        let config = FolioConfig::load(file.path()).unwrap();
        assert_eq!(config.form.banner_duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FolioConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, FolioError::ConfigRead { .. }));
    }
}
