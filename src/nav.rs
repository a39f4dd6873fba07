//! Navigation - burger menu, link fade-in, outside click, anchor scrolling
//!
//! - `toggle()` opens/closes the menu and re-arms the staggered link fade
//! - A click outside both the menu and the burger closes the menu
//! - In-page `#id` links resolve to a smooth scroll request and close the menu
//!
//! The open state is a reactive signal so a renderer can follow it.
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::nav::{NavMenu, ClickTarget};
//!
//! let mut nav = NavMenu::new(4, NavConfig::default());
//! nav.toggle();
//! assert!(nav.is_open());
//!
//! nav.on_document_click(ClickTarget::Outside);
//! assert!(!nav.is_open());
//! ```

use spark_signals::{signal, Signal};

use crate::config::NavConfig;
use crate::page::PageDocument;
use crate::types::{ClassList, ElementId};

// =============================================================================
// TYPES
// =============================================================================

/// Where a document click landed, relative to the navigation elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the menu (links included).
    Menu,
    /// On the burger trigger.
    Burger,
    /// Anywhere else on the page.
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Vertical alignment of the scroll target in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
}

/// Request for the host to scroll an element into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ElementId,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

// =============================================================================
// NAV MENU
// =============================================================================

pub struct NavMenu {
    menu: ClassList,
    burger: ClassList,
    /// Inline animation per link; `None` when cleared.
    link_animations: Vec<Option<String>>,
    open: Signal<bool>,
    config: NavConfig,
}

impl NavMenu {
    pub fn new(link_count: usize, config: NavConfig) -> Self {
        Self {
            menu: ClassList::NONE,
            burger: ClassList::NONE,
            link_animations: vec![None; link_count],
            open: signal(false),
            config,
        }
    }

    pub fn is_open(&self) -> bool {
        self.menu.contains(ClassList::NAV_ACTIVE)
    }

    /// Reactive open state.
    pub fn open_signal(&self) -> Signal<bool> {
        self.open.clone()
    }

    pub fn menu_classes(&self) -> ClassList {
        self.menu
    }

    pub fn burger_classes(&self) -> ClassList {
        self.burger
    }

    pub fn link_count(&self) -> usize {
        self.link_animations.len()
    }

    /// Current inline animation of link `index`.
    pub fn link_animation(&self, index: usize) -> Option<&str> {
        self.link_animations.get(index)?.as_deref()
    }

    /// Start delay of link `index` in seconds.
    pub fn link_delay_secs(&self, index: usize) -> f64 {
        index as f64 / self.config.stagger_divisor + self.config.base_delay_secs
    }

    /// Burger click: flip the menu and burger, re-arm or clear each link fade.
    pub fn toggle(&mut self) {
        self.menu.toggle(ClassList::NAV_ACTIVE);
        self.burger.toggle(ClassList::TOGGLE);

        for index in 0..self.link_animations.len() {
            let next = match self.link_animations[index] {
                Some(_) => None,
                None => Some(format!(
                    "navLinkFade {}s ease forwards {}s",
                    self.config.fade_secs,
                    self.link_delay_secs(index)
                )),
            };
            self.link_animations[index] = next;
        }

        self.sync_open();
        tracing::debug!(open = self.is_open(), "nav toggled");
    }

    /// Document-level click. Closes the menu unless it hit the menu or burger.
    pub fn on_document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.close();
        }
    }

    /// In-page link click.
    ///
    /// Returns a scroll request when `href` is `#id` and the page has that
    /// element; the menu closes in that case. Anything else is left alone.
    pub fn follow_anchor<D: PageDocument + ?Sized>(
        &mut self,
        href: &str,
        doc: &D,
    ) -> Option<ScrollRequest> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }

        let target = ElementId::new(id);
        if !doc.contains_element(&target) {
            tracing::debug!(href, "anchor target not on page");
            return None;
        }

        self.close();
        Some(ScrollRequest {
            target,
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        })
    }

    fn close(&mut self) {
        self.menu.remove(ClassList::NAV_ACTIVE);
        self.burger.remove(ClassList::TOGGLE);
        self.sync_open();
    }

    fn sync_open(&self) {
        let open = self.is_open();
        if self.open.get() != open {
            self.open.set(open);
        }
    }
}
