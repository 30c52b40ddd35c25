use std::fmt;
use std::str::FromStr;

use crate::error::ParseIdError;
use crate::theme::Icon;

/// Every entry of the sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Dashboard,
    Reports,
    Prompts,
    Optimize,
    Intelligence,
    Sentiment,
    Citations,
    Crawlers,
    LlmTraffic,
    Learn,
    Integrations,
    MyAccount,
}

impl PageId {
    pub const ALL: [PageId; 12] = [
        PageId::Dashboard,
        PageId::Reports,
        PageId::Prompts,
        PageId::Optimize,
        PageId::Intelligence,
        PageId::Sentiment,
        PageId::Citations,
        PageId::Crawlers,
        PageId::LlmTraffic,
        PageId::Learn,
        PageId::Integrations,
        PageId::MyAccount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Reports => "Reports",
            PageId::Prompts => "Prompts",
            PageId::Optimize => "Optimize",
            PageId::Intelligence => "Intelligence",
            PageId::Sentiment => "Sentiment",
            PageId::Citations => "Citations",
            PageId::Crawlers => "Crawlers",
            PageId::LlmTraffic => "LLM Traffic",
            PageId::Learn => "Learn",
            PageId::Integrations => "Integrations",
            PageId::MyAccount => "My Account",
        }
    }

    /// Path segment used in the browser URL.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Reports => "reports",
            PageId::Prompts => "prompts",
            PageId::Optimize => "optimize",
            PageId::Intelligence => "intelligence",
            PageId::Sentiment => "sentiment",
            PageId::Citations => "citations",
            PageId::Crawlers => "crawlers",
            PageId::LlmTraffic => "llm-traffic",
            PageId::Learn => "learn",
            PageId::Integrations => "integrations",
            PageId::MyAccount => "my-account",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            PageId::Dashboard => Icon::BarChart,
            PageId::Reports => Icon::FileText,
            PageId::Prompts => Icon::Lightbulb,
            PageId::Optimize => Icon::Settings,
            PageId::Intelligence => Icon::Brain,
            PageId::Sentiment => Icon::Heart,
            PageId::Citations => Icon::Quote,
            PageId::Crawlers => Icon::Search,
            PageId::LlmTraffic => Icon::Zap,
            PageId::Learn => Icon::BookOpen,
            PageId::Integrations => Icon::Puzzle,
            PageId::MyAccount => Icon::User,
        }
    }

    pub fn group(self) -> NavGroup {
        match self {
            PageId::Dashboard | PageId::Reports | PageId::Prompts | PageId::Optimize => {
                NavGroup::Main
            }
            PageId::Intelligence | PageId::Sentiment | PageId::Citations => NavGroup::Insight,
            PageId::Crawlers | PageId::LlmTraffic => NavGroup::Analytics,
            PageId::Learn | PageId::Integrations | PageId::MyAccount => NavGroup::Other,
        }
    }

    pub fn nav_item(self) -> NavItem {
        NavItem {
            page: self,
            label: self.label(),
            icon: self.icon(),
            group: self.group(),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PageId {
    type Err = ParseIdError;

    /// Accepts the display label or the slug, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PageId::ALL
            .into_iter()
            .find(|page| {
                page.slug().eq_ignore_ascii_case(needle) || page.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseIdError::new("page", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavGroup {
    Main,
    Insight,
    Analytics,
    Other,
}

impl NavGroup {
    pub const ALL: [NavGroup; 4] = [
        NavGroup::Main,
        NavGroup::Insight,
        NavGroup::Analytics,
        NavGroup::Other,
    ];

    /// Section heading; the main group is rendered without one.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            NavGroup::Main => None,
            NavGroup::Insight => Some("Insight"),
            NavGroup::Analytics => Some("Analytics"),
            NavGroup::Other => Some("Other"),
        }
    }

    pub fn icon(self) -> Option<Icon> {
        match self {
            NavGroup::Insight => Some(Icon::Brain),
            NavGroup::Analytics => Some(Icon::TrendingUp),
            NavGroup::Main | NavGroup::Other => None,
        }
    }
}

/// Sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub icon: Icon,
    pub group: NavGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_slugs() {
        assert_eq!("LLM Traffic".parse::<PageId>(), Ok(PageId::LlmTraffic));
        assert_eq!("llm-traffic".parse::<PageId>(), Ok(PageId::LlmTraffic));
        assert_eq!("my account".parse::<PageId>(), Ok(PageId::MyAccount));
        assert_eq!(" Sentiment ".parse::<PageId>(), Ok(PageId::Sentiment));
    }

    #[test]
    fn rejects_unknown_page() {
        let err = "bogus".parse::<PageId>().unwrap_err();
        assert_eq!(err.kind, "page");
        assert_eq!(err.to_string(), "'bogus' is not a known page");
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = PageId::ALL.iter().map(|p| p.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), PageId::ALL.len());
    }

    #[test]
    fn groups_follow_sidebar_order() {
        let groups: Vec<_> = PageId::ALL.iter().map(|p| p.group()).collect();
        let mut sorted = groups.clone();
        sorted.sort_by_key(|g| NavGroup::ALL.iter().position(|x| x == g));
        assert_eq!(groups, sorted);
    }
}
