use tracing::{debug, warn};

use crate::error::ModelError;
use crate::page::{NavGroup, NavItem, PageId};

/// Sidebar entry together with its activation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub item: NavItem,
    pub active: bool,
}

/// Selected-page state of the application shell.
///
/// Only registered pages can become selected; anything else resolves to the
/// default page, which is the first registered one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationShell {
    registered: Vec<PageId>,
    selected: PageId,
}

impl NavigationShell {
    pub fn new(pages: impl IntoIterator<Item = PageId>) -> Result<Self, ModelError> {
        let mut registered: Vec<PageId> = Vec::new();
        for page in pages {
            if !registered.contains(&page) {
                registered.push(page);
            }
        }
        let selected = *registered.first().ok_or(ModelError::NoPages)?;
        Ok(Self {
            registered,
            selected,
        })
    }

    pub fn default_page(&self) -> PageId {
        self.registered[0]
    }

    pub fn selected(&self) -> PageId {
        self.selected
    }

    pub fn is_registered(&self, page: PageId) -> bool {
        self.registered.contains(&page)
    }

    pub fn registered(&self) -> &[PageId] {
        &self.registered
    }

    /// Selects `page`, or the default page when `page` has no composer.
    /// Returns the page that ended up selected.
    pub fn select_page(&mut self, page: PageId) -> PageId {
        self.selected = if self.is_registered(page) {
            page
        } else {
            debug!(%page, fallback = %self.default_page(), "page has no composer");
            self.default_page()
        };
        self.selected
    }

    /// Resolves a URL slug or label; unknown input selects the default page.
    pub fn select_slug(&mut self, slug: &str) -> PageId {
        match slug.parse::<PageId>() {
            Ok(page) => self.select_page(page),
            Err(e) => {
                warn!("{e}, showing {}", self.default_page());
                self.selected = self.default_page();
                self.selected
            }
        }
    }

    /// All sidebar entries in display order; exactly one is active.
    pub fn entries(&self) -> Vec<NavEntry> {
        PageId::ALL
            .into_iter()
            .map(|page| NavEntry {
                item: page.nav_item(),
                active: page == self.selected,
            })
            .collect()
    }

    /// Entries bucketed by sidebar section, skipping empty sections.
    pub fn groups(&self) -> Vec<(NavGroup, Vec<NavEntry>)> {
        let entries = self.entries();
        NavGroup::ALL
            .into_iter()
            .map(|group| {
                let members = entries
                    .iter()
                    .filter(|e| e.item.group == group)
                    .copied()
                    .collect::<Vec<_>>();
                (group, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_pages(shell: &NavigationShell) -> Vec<PageId> {
        shell
            .entries()
            .into_iter()
            .filter(|e| e.active)
            .map(|e| e.item.page)
            .collect()
    }

    #[test]
    fn defaults_to_first_registered_page() {
        let shell = NavigationShell::new([PageId::Dashboard, PageId::Reports]).unwrap();
        assert_eq!(shell.selected(), PageId::Dashboard);
        assert_eq!(active_pages(&shell), vec![PageId::Dashboard]);
    }

    #[test]
    fn select_page_swaps_selection() {
        let mut shell = NavigationShell::new([PageId::Dashboard, PageId::Reports]).unwrap();
        assert_eq!(shell.select_page(PageId::Reports), PageId::Reports);
        assert_eq!(active_pages(&shell), vec![PageId::Reports]);
    }

    #[test]
    fn unregistered_page_falls_back_to_default() {
        let mut shell = NavigationShell::new([PageId::Dashboard, PageId::Reports]).unwrap();
        shell.select_page(PageId::Reports);
        assert_eq!(shell.select_page(PageId::Learn), PageId::Dashboard);
        assert_eq!(active_pages(&shell), vec![PageId::Dashboard]);
    }

    #[test]
    fn slugs_resolve_or_fall_back() {
        let mut shell =
            NavigationShell::new([PageId::Sentiment, PageId::Intelligence]).unwrap();
        assert_eq!(shell.select_slug("intelligence"), PageId::Intelligence);
        assert_eq!(shell.select_slug("not-a-page"), PageId::Sentiment);
        assert_eq!(active_pages(&shell), vec![PageId::Sentiment]);
    }

    #[test]
    fn exactly_one_entry_active_for_every_selection() {
        let mut shell = NavigationShell::new(PageId::ALL).unwrap();
        for page in PageId::ALL {
            shell.select_page(page);
            assert_eq!(active_pages(&shell), vec![page]);
        }
    }

    #[test]
    fn groups_keep_sidebar_sections() {
        let shell = NavigationShell::new([PageId::Dashboard]).unwrap();
        let groups = shell.groups();
        let names: Vec<_> = groups.iter().map(|(g, _)| *g).collect();
        assert_eq!(names, NavGroup::ALL.to_vec());
        assert_eq!(groups[2].1.len(), 2);
        assert_eq!(groups[2].1[1].item.label, "LLM Traffic");
    }

    #[test]
    fn empty_registry_is_rejected() {
        assert_eq!(
            NavigationShell::new(Vec::<PageId>::new()),
            Err(ModelError::NoPages)
        );
    }
}
