//! Project tag filter.
//!
//! Collects the unique tags of every project card (first-seen order), offers
//! an "All" control plus one control per tag, and hides the cards that do not
//! carry the selected tag.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::types::ClassList;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectCard {
    pub fn new<I, T>(title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    All,
    Tag(String),
}

impl Filter {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Value of the control's `data-filter` attribute.
    pub fn key(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, card: &ProjectCard) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(tag) => card.has_tag(tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub label: String,
    pub filter: Filter,
    pub classes: ClassList,
}

impl FilterControl {
    pub fn is_active(&self) -> bool {
        self.classes.contains(ClassList::ACTIVE)
    }
}

#[derive(Debug, Clone)]
pub struct TagFilter {
    cards: Vec<ProjectCard>,
    card_classes: Vec<ClassList>,
    controls: Vec<FilterControl>,
}

impl TagFilter {
    pub fn new(cards: Vec<ProjectCard>) -> Self {
        let mut seen = HashSet::new();
        let mut controls = vec![FilterControl {
            label: "All".to_string(),
            filter: Filter::All,
            classes: ClassList::ACTIVE,
        }];

        for tag in cards.iter().flat_map(|card| card.tags.iter()) {
            if seen.insert(tag.as_str()) {
                controls.push(FilterControl {
                    label: tag.clone(),
                    filter: Filter::Tag(tag.clone()),
                    classes: ClassList::NONE,
                });
            }
        }

        let card_classes = vec![ClassList::NONE; cards.len()];
        Self {
            cards,
            card_classes,
            controls,
        }
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    /// Unique tags in first-seen order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().filter_map(|c| match &c.filter {
            Filter::Tag(tag) => Some(tag.as_str()),
            Filter::All => None,
        })
    }

    pub fn active(&self) -> &Filter {
        static ALL: Filter = Filter::All;
        self.controls
            .iter()
            .find(|c| c.is_active())
            .map(|c| &c.filter)
            .unwrap_or(&ALL)
    }

    pub fn is_visible(&self, card: usize) -> bool {
        self.card_classes
            .get(card)
            .is_some_and(|classes| !classes.contains(ClassList::HIDDEN))
    }

    /// Titles of the cards currently shown.
    pub fn visible_titles(&self) -> Vec<&str> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_visible(*i))
            .map(|(_, card)| card.title.as_str())
            .collect()
    }

    /// Activate the control for `filter` and update card visibility.
    pub fn select(&mut self, filter: &Filter) -> Result<()> {
        if !self.controls.iter().any(|c| &c.filter == filter) {
            tracing::warn!(filter = filter.key(), "no control for filter");
            return Err(FolioError::UnknownTag(filter.key().to_string()));
        }

        for control in &mut self.controls {
            control.classes.set(ClassList::ACTIVE, &control.filter == filter);
        }
        for (card, classes) in self.cards.iter().zip(&mut self.card_classes) {
            classes.set(ClassList::HIDDEN, !filter.matches(card));
        }

        tracing::debug!(filter = filter.key(), "project filter selected");
        Ok(())
    }
}
