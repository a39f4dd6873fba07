//! Core types shared by every page behavior.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Element identity
// =============================================================================

/// Opaque id of an element on the host page (`"about"`, `"skill-rust"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Class list (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Visual states the page toggles on its elements.
    ///
    /// Combine with bitwise OR: `ClassList::NAV_ACTIVE | ClassList::TOGGLE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClassList: u8 {
        const NONE = 0;
        /// Navigation menu is open.
        const NAV_ACTIVE = 1 << 0;
        /// Burger icon shows its "close" shape.
        const TOGGLE = 1 << 1;
        /// Section has scrolled into view.
        const REVEAL = 1 << 2;
        /// Skill item has played its entrance animation.
        const ANIMATE = 1 << 3;
        /// Form field failed validation.
        const ERROR = 1 << 4;
        /// Selected filter control.
        const ACTIVE = 1 << 5;
        /// Element is not displayed.
        const HIDDEN = 1 << 6;
    }
}

impl ClassList {
    /// CSS class names for the set flags, in declaration order.
    pub fn class_names(&self) -> Vec<&'static str> {
        const NAMES: [(ClassList, &str); 7] = [
            (ClassList::NAV_ACTIVE, "nav-active"),
            (ClassList::TOGGLE, "toggle"),
            (ClassList::REVEAL, "reveal"),
            (ClassList::ANIMATE, "animate"),
            (ClassList::ERROR, "error"),
            (ClassList::ACTIVE, "active"),
            (ClassList::HIDDEN, "hidden"),
        ];
        NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}
