//! Tab selection for tabbed pages.

use serde::{Deserialize, Serialize};

/// Tab selected when the path names none.
pub const DEFAULT_TAB_ID: &str = "overview";

/// A navigable tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub href: String,
    pub number: u64,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
            number: 0,
        }
    }

    /// Set the counter badge.
    pub fn with_number(mut self, number: u64) -> Self {
        self.number = number;
        self
    }
}

/// Index of the tab to select for `path`.
///
/// The first tab, in tab order, whose id is a path segment wins. Without a
/// match the tab with `fallback_id` is used, and failing that index 0.
pub fn initial_tab_index(tabs: &[Tab], path: &str, fallback_id: &str) -> usize {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mount_id = tabs
        .iter()
        .map(|tab| tab.id.as_str())
        .find(|id| segments.contains(id))
        .unwrap_or(fallback_id);

    tabs.iter().position(|tab| tab.id == mount_id).unwrap_or(0)
}

/// Props for the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabProps<'a> {
    pub tabs: &'a [Tab],
    pub selected_tab_index: usize,
}

/// Props for the panel under the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentProps {
    pub direction: i32,
    pub selected_tab_index: usize,
}

/// Selection state of a tab strip.
///
/// The selection is derived from the path once, at mount. Navigation
/// afterwards does not change it; only an explicit selection does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabs {
    tabs: Vec<Tab>,
    path: String,
    selected_tab_index: usize,
}

impl Tabs {
    pub fn mount(tabs: Vec<Tab>, path: impl Into<String>) -> Self {
        let path = path.into();
        let selected_tab_index = initial_tab_index(&tabs, &path, DEFAULT_TAB_ID);
        tracing::trace!(path = %path, selected_tab_index, "Tabs mounted");
        Self {
            tabs,
            path,
            selected_tab_index,
        }
    }

    /// Record a path change. The selection is kept.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Current path.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn selected_tab_index(&self) -> usize {
        self.selected_tab_index
    }

    /// Select a tab. Out-of-range indices are ignored.
    pub fn set_selected_tab_index(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.selected_tab_index = index;
        }
    }

    /// The selected tab, `None` for an empty strip.
    pub fn selected_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.selected_tab_index)
    }

    pub fn tab_props(&self) -> TabProps<'_> {
        TabProps {
            tabs: &self.tabs,
            selected_tab_index: self.selected_tab_index,
        }
    }

    pub fn content_props(&self) -> ContentProps {
        ContentProps {
            direction: 0,
            selected_tab_index: self.selected_tab_index,
        }
    }
}
