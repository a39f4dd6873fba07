//! Page - mounts every behavior onto a host document
//!
//! The host describes its document through [`PageDocument`]. Mounting checks
//! that every element a behavior binds to exists, and fails with
//! [`FolioError::MissingAnchor`] otherwise.
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::page::{Page, PageLayout};
//!
//! let layout = PageLayout::from_toml_str(include_str!("page.toml"), "page.toml")?;
//! let mut page = Page::mount(&FolioConfig::default(), &layout, String::new())?;
//!
//! page.click_burger();
//! let next = page.tick(Instant::now());
//! ```

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::FolioConfig;
use crate::cycler::{TextCycler, TextSink};
use crate::error::{FolioError, Result};
use crate::filter::{Filter, ProjectCard, TagFilter};
use crate::form::{ContactForm, SubmitOutcome};
use crate::nav::{ClickTarget, NavMenu, ScrollRequest};
use crate::progress::{ScrollMetrics, ScrollProgress};
use crate::reveal::{IntersectionEntry, RevealObserver};
use crate::types::ElementId;

// =============================================================================
// ANCHORS
// =============================================================================

/// Elements the page behaviors cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Hero text the typewriter writes into.
    TypingText,
    /// Menu toggle.
    Burger,
    /// Navigation menu.
    NavLinks,
    ContactForm,
    /// Container the filter controls are inserted before.
    ProjectsGrid,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::TypingText,
        Anchor::Burger,
        Anchor::NavLinks,
        Anchor::ContactForm,
        Anchor::ProjectsGrid,
    ];

    /// CSS class of the anchor element.
    pub fn class_name(self) -> &'static str {
        match self {
            Anchor::TypingText => "typing-text",
            Anchor::Burger => "burger",
            Anchor::NavLinks => "nav-links",
            Anchor::ContactForm => "contact-form",
            Anchor::ProjectsGrid => "projects-grid",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.class_name())
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// What the behaviors need to know about the host document.
pub trait PageDocument {
    fn has_anchor(&self, anchor: Anchor) -> bool;

    /// Whether an element with this id exists (anchor link targets).
    fn contains_element(&self, id: &ElementId) -> bool;

    fn nav_link_count(&self) -> usize;

    /// Page sections, observed for reveal.
    fn sections(&self) -> Vec<ElementId>;

    /// Skill items, observed for their entrance animation.
    fn skills(&self) -> Vec<ElementId>;

    fn project_cards(&self) -> Vec<ProjectCard>;
}

/// Static description of a page, loadable from TOML.
///
/// ```toml
/// anchors = ["typing-text", "burger", "nav-links", "contact-form", "projects-grid"]
/// nav_links = 4
/// sections = ["about", "skills", "projects", "contact"]
/// skills = ["skill-rust"]
///
/// [[projects]]
/// title = "Parser"
/// tags = ["Rust", "CLI"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageLayout {
    pub anchors: Vec<Anchor>,
    pub nav_links: usize,
    pub sections: Vec<ElementId>,
    pub skills: Vec<ElementId>,
    pub projects: Vec<ProjectCard>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(contents: &str, origin: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| FolioError::ConfigParse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn with_anchors(mut self, anchors: impl IntoIterator<Item = Anchor>) -> Self {
        self.anchors.extend(anchors);
        self
    }

    pub fn with_nav_links(mut self, count: usize) -> Self {
        self.nav_links = count;
        self
    }

    pub fn with_section(mut self, id: impl Into<ElementId>) -> Self {
        self.sections.push(id.into());
        self
    }

    pub fn with_skill(mut self, id: impl Into<ElementId>) -> Self {
        self.skills.push(id.into());
        self
    }

    pub fn with_project(mut self, card: ProjectCard) -> Self {
        self.projects.push(card);
        self
    }
}

impl PageDocument for PageLayout {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.anchors.contains(&anchor)
    }

    fn contains_element(&self, id: &ElementId) -> bool {
        self.sections.contains(id) || self.skills.contains(id)
    }

    fn nav_link_count(&self) -> usize {
        self.nav_links
    }

    fn sections(&self) -> Vec<ElementId> {
        self.sections.clone()
    }

    fn skills(&self) -> Vec<ElementId> {
        self.skills.clone()
    }

    fn project_cards(&self) -> Vec<ProjectCard> {
        self.projects.clone()
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// Every behavior, mounted and ready for host events.
pub struct Page<S: TextSink> {
    nav: NavMenu,
    sections: RevealObserver,
    skills: RevealObserver,
    form: ContactForm,
    filter: TagFilter,
    progress: ScrollProgress,
    typewriter: TextCycler,
    sink: S,
}

impl<S: TextSink> Page<S> {
    /// Bind all behaviors. `sink` renders the typewriter.
    pub fn mount<D: PageDocument + ?Sized>(config: &FolioConfig, doc: &D, sink: S) -> Result<Self> {
        if let Some(missing) = Anchor::ALL.into_iter().find(|a| !doc.has_anchor(*a)) {
            tracing::error!(anchor = %missing, "page anchor missing");
            return Err(FolioError::MissingAnchor(missing));
        }

        let typewriter = config.typewriter.build()?;
        config.nav.validate()?;

        let mut sections = RevealObserver::sections(config.reveal.section_threshold)?;
        for id in doc.sections() {
            sections.observe(id);
        }
        let mut skills = RevealObserver::skills(config.reveal.skill_threshold)?;
        for id in doc.skills() {
            skills.observe(id);
        }

        let page = Self {
            nav: NavMenu::new(doc.nav_link_count(), config.nav.clone()),
            sections,
            skills,
            form: ContactForm::new(config.form.banner_duration()),
            filter: TagFilter::new(doc.project_cards()),
            progress: ScrollProgress::new(),
            typewriter,
            sink,
        };

        tracing::info!(
            sections = page.sections.observed_count(),
            skills = page.skills.observed_count(),
            tags = page.filter.controls().len() - 1,
            "page mounted"
        );
        Ok(page)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn click_burger(&mut self) {
        self.nav.toggle();
    }

    pub fn click(&mut self, target: ClickTarget) {
        self.nav.on_document_click(target);
    }

    pub fn follow_anchor<D: PageDocument + ?Sized>(
        &mut self,
        href: &str,
        doc: &D,
    ) -> Option<ScrollRequest> {
        self.nav.follow_anchor(href, doc)
    }

    /// Feed visibility reports to both reveal observers.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<ElementId> {
        let mut revealed = self.sections.on_intersections(entries);
        revealed.extend(self.skills.on_intersections(entries));
        revealed
    }

    pub fn on_scroll(&self, metrics: ScrollMetrics) -> f64 {
        self.progress.on_scroll(metrics)
    }

    pub fn submit_form(&mut self, now: Instant) -> SubmitOutcome {
        self.form.submit(now)
    }

    pub fn select_filter(&mut self, filter: &Filter) -> Result<()> {
        self.filter.select(filter)
    }

    /// Drive timers: typewriter steps and banner expiry.
    ///
    /// Returns the typewriter's next deadline.
    pub fn tick(&mut self, now: Instant) -> Instant {
        self.form.tick(now);
        self.typewriter.tick(now, &mut self.sink)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    pub fn section_reveal(&self) -> &RevealObserver {
        &self.sections
    }

    pub fn skill_reveal(&self) -> &RevealObserver {
        &self.skills
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn filter(&self) -> &TagFilter {
        &self.filter
    }

    pub fn progress(&self) -> &ScrollProgress {
        &self.progress
    }

    pub fn typewriter(&self) -> &TextCycler {
        &self.typewriter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use std::time::Duration;

    fn full_layout() -> PageLayout {
        PageLayout::new()
            .with_anchors(Anchor::ALL)
            .with_nav_links(4)
            .with_section("about")
            .with_section("contact")
            .with_skill("skill-rust")
            .with_project(ProjectCard::new("Parser", ["Rust"]))
            .with_project(ProjectCard::new("Site", ["Web"]))
    }

    fn mount(layout: &PageLayout) -> Result<Page<String>> {
        Page::mount(&FolioConfig::default(), layout, String::new())
    }

    #[test]
    fn test_mount_full_page() {
        let page = mount(&full_layout()).unwrap();
        assert_eq!(page.nav().link_count(), 4);
        assert_eq!(page.section_reveal().observed_count(), 2);
        assert_eq!(page.skill_reveal().observed_count(), 1);
        assert_eq!(page.filter().controls().len(), 3);
    }

    #[test]
    fn test_each_missing_anchor_fails() {
        for missing in Anchor::ALL {
            let mut layout = full_layout();
            layout.anchors.retain(|a| *a != missing);

            match mount(&layout) {
                Err(FolioError::MissingAnchor(anchor)) => assert_eq!(anchor, missing),
                Err(other) => panic!("unexpected error: {other}"),
                Ok(_) => panic!("mount succeeded without {missing}"),
            }
        }
    }

    #[test]
    fn test_mount_rejects_empty_words() {
        let mut config = FolioConfig::default();
        config.typewriter.words.clear();

        let err = Page::mount(&config, &full_layout(), String::new())
            .err()
            .unwrap();
        assert!(matches!(err, FolioError::EmptyWordList));
    }

    #[test]
    fn test_mount_rejects_zero_stagger_divisor() {
        let mut config = FolioConfig::default();
        config.nav.stagger_divisor = 0.0;

        let err = Page::mount(&config, &full_layout(), String::new())
            .err()
            .unwrap();
        assert!(matches!(err, FolioError::InvalidNav { .. }));
    }

    #[test]
    fn test_tick_drives_typewriter() {
        let mut page = mount(&full_layout()).unwrap();
        let start = Instant::now();

        let next = page.tick(start);
        assert_eq!(page.sink(), "S");

        page.tick(next);
        assert_eq!(page.sink(), "St");
    }

    #[test]
    fn test_tick_expires_banner() {
        let mut page = mount(&full_layout()).unwrap();
        let form = page.form_mut();
        form.set_value(Field::Name, "Ada");
        form.set_value(Field::Email, "ada@example.com");
        form.set_value(Field::Subject, "Hi");
        form.set_value(Field::Message, "Hello");

        let now = Instant::now();
        assert_eq!(page.submit_form(now), SubmitOutcome::Sent);
        assert!(page.form().banner().is_some());

        page.tick(now + Duration::from_secs(3));
        assert!(page.form().banner().is_none());
    }

    #[test]
    fn test_intersections_reach_both_observers() {
        let mut page = mount(&full_layout()).unwrap();
        let revealed = page.on_intersections(&[
            IntersectionEntry::new("about", 0.2),
            IntersectionEntry::new("skill-rust", 0.2),
        ]);
        // Skills need half visibility.
        assert_eq!(revealed, vec![ElementId::new("about")]);

        let revealed = page.on_intersections(&[IntersectionEntry::new("skill-rust", 0.6)]);
        assert_eq!(revealed, vec![ElementId::new("skill-rust")]);
    }

    #[test]
    fn test_anchor_and_click_routing() {
        let layout = full_layout();
        let mut page = mount(&layout).unwrap();

        page.click_burger();
        assert!(page.nav().is_open());
        let request = page.follow_anchor("#contact", &layout).unwrap();
        assert_eq!(request.target.as_str(), "contact");
        assert!(!page.nav().is_open());

        page.click_burger();
        page.click(ClickTarget::Outside);
        assert!(!page.nav().is_open());
    }

    #[test]
    fn test_scroll_and_filter_routing() {
        let mut page = mount(&full_layout()).unwrap();

        assert_eq!(page.on_scroll(ScrollMetrics::new(300.0, 1600.0, 400.0)), 25.0);
        assert_eq!(page.progress().percent(), 25.0);

        page.select_filter(&Filter::tag("Web")).unwrap();
        assert_eq!(page.filter().visible_titles(), vec!["Site"]);
    }

    #[test]
    fn test_layout_from_toml() {
        let layout = PageLayout::from_toml_str(
            r#"
            anchors = ["typing-text", "burger", "nav-links", "contact-form", "projects-grid"]
            nav_links = 3
            sections = ["about"]

            [[projects]]
            title = "Parser"
            tags = ["Rust", "CLI"]
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(layout.nav_link_count(), 3);
        assert!(layout.contains_element(&"about".into()));
        assert_eq!(layout.project_cards()[0].tags, vec!["Rust", "CLI"]);
        assert!(mount(&layout).is_ok());
    }

    #[test]
    fn test_anchor_display() {
        assert_eq!(Anchor::ProjectsGrid.to_string(), ".projects-grid");
    }
}
