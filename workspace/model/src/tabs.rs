use tracing::{debug, trace};

use crate::error::{ModelError, SelectionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabConfig {
    pub id: &'static str,
    pub label: &'static str,
}

impl TabConfig {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Ordered, non-empty set of mutually exclusive tabs with exactly one active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<TabConfig>,
    active: usize,
}

impl TabSet {
    /// Builds a tab set whose first tab is active.
    pub fn new(tabs: impl IntoIterator<Item = TabConfig>) -> Result<Self, ModelError> {
        let tabs: Vec<TabConfig> = tabs.into_iter().collect();
        if tabs.is_empty() {
            return Err(ModelError::EmptyTabs);
        }
        for (i, tab) in tabs.iter().enumerate() {
            if tabs[..i].iter().any(|t| t.id == tab.id) {
                return Err(ModelError::DuplicateTab(tab.id));
            }
        }
        Ok(Self { tabs, active: 0 })
    }

    /// Activates `id`. Unknown ids leave the current tab active.
    pub fn select(&mut self, id: &str) -> Result<(), SelectionError> {
        match self.position(id) {
            Some(index) => {
                if index != self.active {
                    trace!(from = self.active_id(), to = id, "switching tab");
                }
                self.active = index;
                Ok(())
            }
            None => {
                debug!(id, active = self.active_id(), "ignoring unknown tab");
                Err(SelectionError::UnknownTab(id.to_string()))
            }
        }
    }

    pub fn active(&self) -> &TabConfig {
        &self.tabs[self.active]
    }

    pub fn active_id(&self) -> &'static str {
        self.active().id
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabConfig> {
        self.tabs.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview_performance() -> TabSet {
        TabSet::new([
            TabConfig::new("overview", "Overview"),
            TabConfig::new("performance", "Performance & Rankings"),
        ])
        .unwrap()
    }

    fn active_count(tabs: &TabSet) -> usize {
        tabs.iter().filter(|t| tabs.is_active(t.id)).count()
    }

    #[test]
    fn defaults_to_first_tab() {
        let tabs = overview_performance();
        assert_eq!(tabs.active_id(), "overview");
        assert_eq!(active_count(&tabs), 1);
    }

    #[test]
    fn unknown_tab_leaves_selection_unchanged() {
        let mut tabs = overview_performance();
        tabs.select("performance").unwrap();
        assert_eq!(tabs.active_id(), "performance");

        let err = tabs.select("bogus").unwrap_err();
        assert_eq!(err, SelectionError::UnknownTab("bogus".into()));
        assert_eq!(tabs.active_id(), "performance");
    }

    #[test]
    fn exactly_one_tab_active_after_any_sequence() {
        let mut tabs = TabSet::new([
            TabConfig::new("a", "A"),
            TabConfig::new("b", "B"),
            TabConfig::new("c", "C"),
        ])
        .unwrap();
        for id in ["c", "a", "zzz", "b", "b", "", "c"] {
            let _ = tabs.select(id);
            assert_eq!(active_count(&tabs), 1);
        }
        assert_eq!(tabs.active_id(), "c");
    }

    #[test]
    fn rejects_empty_and_duplicate_sets() {
        assert_eq!(TabSet::new(Vec::new()), Err(ModelError::EmptyTabs));
        assert_eq!(
            TabSet::new([TabConfig::new("x", "X"), TabConfig::new("x", "Again")]),
            Err(ModelError::DuplicateTab("x"))
        );
    }
}
