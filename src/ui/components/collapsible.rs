//! Expand/collapse state of a navigation section.

use crate::icons::IconService;
use crate::models::NavItem;

/// Disclosure state for one navigation item that has children.
///
/// A section starts expanded only when its item is marked active. The state
/// is owned by the sidebar and lives as long as the sidebar does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsibleSection {
    title: &'static str,
    expanded: bool,
}

impl CollapsibleSection {
    #[must_use]
    pub fn new(item: &NavItem) -> Self {
        Self {
            title: item.title,
            expanded: item.is_active,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the state; returns the new value
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Disclosure glyph for the current state
    #[must_use]
    pub fn chevron(&self, icons: &IconService) -> &'static str {
        icons.chevron(self.expanded)
    }
}
