//! Per-page state of the composers.
//!
//! Filters only feed descriptive text and never reshape the datasets.

use tracing::debug;

use crate::filter::{
    CategoryFilter, CompetitorFilter, FilterConfig, FilterValue, ModelFilter, SentimentFilter,
    TimeRange, VisibilityFilter,
};
use crate::tabs::{TabConfig, TabSet};
use crate::theme::Icon;

/// How long the cosmetic "Updating data..." overlay stays up by default.
pub const DEFAULT_LOADING_DELAY_MS: u32 = 800;

fn tab_set(tabs: &[TabConfig]) -> TabSet {
    TabSet::new(tabs.iter().copied()).unwrap_or_else(|e| unreachable!("static tab list: {e}"))
}

const DASHBOARD_TABS: &[TabConfig] = &[
    TabConfig::new("overview", "Overview"),
    TabConfig::new("performance", "Performance & Rankings"),
    TabConfig::new("trends", "Trends"),
    TabConfig::new("models", "Model Breakdown"),
];

const INTELLIGENCE_TABS: &[TabConfig] = &[
    TabConfig::new("summary", "Summary"),
    TabConfig::new("rankings", "Rankings & Performance"),
    TabConfig::new("prompts", "Prompt Analysis"),
    TabConfig::new("models", "Model Comparison"),
    TabConfig::new("competitive", "Competitive Intelligence"),
];

const SENTIMENT_TABS: &[TabConfig] = &[
    TabConfig::new("overview", "Overview"),
    TabConfig::new("trends", "Sentiment Trends"),
    TabConfig::new("categories", "By Category"),
    TabConfig::new("keywords", "Keyword Analysis"),
    TabConfig::new("competitive", "Competitive Sentiment"),
];

const PLACEHOLDER_TABS: &[TabConfig] = &[
    TabConfig::new("overview", "Overview"),
    TabConfig::new("details", "Details"),
];

/// Button shown in a header's action slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAction {
    pub icon: Icon,
    pub label: &'static str,
}

impl HeaderAction {
    /// Used by headers whose page supplies no action of its own.
    pub const EXPORT_REPORT: HeaderAction = HeaderAction {
        icon: Icon::Download,
        label: "Export Report",
    };
}

/// Dashboard composer: owns its sub-tabs and header filters directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub tabs: TabSet,
    pub visibility: VisibilityFilter,
    pub time_range: TimeRange,
    loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tabs: tab_set(DASHBOARD_TABS),
            visibility: VisibilityFilter::default(),
            time_range: TimeRange::default(),
            loading: false,
        }
    }
}

impl DashboardState {
    pub fn set_visibility(&mut self, value: &str) {
        self.visibility = VisibilityFilter::parse_or_first(value);
        self.begin_loading();
    }

    pub fn set_time_range(&mut self, value: &str) {
        self.time_range = TimeRange::parse_or_first(value);
        self.begin_loading();
    }

    pub fn filters(&self) -> Vec<FilterConfig> {
        vec![
            FilterConfig::of(self.visibility),
            FilterConfig::of(self.time_range),
        ]
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Called by the UI timer once the cosmetic delay has elapsed.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    fn begin_loading(&mut self) {
        debug!(
            visibility = self.visibility.value(),
            period = self.time_range.value(),
            "dashboard filters changed"
        );
        self.loading = true;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntelligenceState {
    pub model: ModelFilter,
    pub competitor: CompetitorFilter,
    pub time_range: TimeRange,
}

impl IntelligenceState {
    pub const HEADER_ACTION: HeaderAction = HeaderAction {
        icon: Icon::Brain,
        label: "Generate Report",
    };

    pub fn header_tabs() -> TabSet {
        tab_set(INTELLIGENCE_TABS)
    }

    pub fn set_model(&mut self, value: &str) {
        self.model = ModelFilter::parse_or_first(value);
    }

    pub fn set_competitor(&mut self, value: &str) {
        self.competitor = CompetitorFilter::parse_or_first(value);
    }

    pub fn set_time_range(&mut self, value: &str) {
        self.time_range = TimeRange::parse_or_first(value);
    }

    pub fn filters(&self) -> Vec<FilterConfig> {
        vec![
            FilterConfig::of(self.model),
            FilterConfig::of(self.competitor),
            FilterConfig::of(self.time_range),
        ]
    }

    pub fn rankings_caption(&self) -> String {
        format!(
            "Detailed ranking analysis filtered by: {}, {}, {}",
            self.model, self.competitor, self.time_range
        )
    }

    pub fn prompts_caption(&self) -> String {
        format!(
            "Individual prompt analytics for {} models over {}",
            self.model, self.time_range
        )
    }

    pub fn models_caption(&self) -> String {
        format!("Detailed model comparison filtered by {}", self.model)
    }

    pub fn competitive_caption(&self) -> String {
        format!(
            "Competitive analysis against {} competitors",
            self.competitor
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentState {
    pub sentiment: SentimentFilter,
    pub category: CategoryFilter,
    pub time_range: TimeRange,
}

impl SentimentState {
    pub const HEADER_ACTION: HeaderAction = HeaderAction {
        icon: Icon::Heart,
        label: "Download Report",
    };

    pub fn header_tabs() -> TabSet {
        tab_set(SENTIMENT_TABS)
    }

    pub fn set_sentiment(&mut self, value: &str) {
        self.sentiment = SentimentFilter::parse_or_first(value);
    }

    pub fn set_category(&mut self, value: &str) {
        self.category = CategoryFilter::parse_or_first(value);
    }

    pub fn set_time_range(&mut self, value: &str) {
        self.time_range = TimeRange::parse_or_first(value);
    }

    pub fn filters(&self) -> Vec<FilterConfig> {
        vec![
            FilterConfig::of(self.sentiment),
            FilterConfig::of(self.category),
            FilterConfig::of(self.time_range),
        ]
    }

    pub fn over_time_caption(&self) -> String {
        format!("Brand sentiment {} period", self.time_range)
    }

    pub fn improvement_caption(&self) -> String {
        format!(
            "Areas needing attention based on {} sentiment",
            self.sentiment
        )
    }

    pub fn trends_caption(&self) -> String {
        format!(
            "Analyzing {} sentiment in {} category over {}",
            self.sentiment, self.category, self.time_range
        )
    }

    pub fn categories_caption(&self) -> String {
        format!(
            "Category breakdown for {} filtered by {}",
            self.category, self.sentiment
        )
    }
}

/// State behind the pages that only have a summary placeholder so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderState {
    pub time_range: TimeRange,
}

impl PlaceholderState {
    pub fn header_tabs() -> TabSet {
        tab_set(PLACEHOLDER_TABS)
    }

    pub fn set_time_range(&mut self, value: &str) {
        self.time_range = TimeRange::parse_or_first(value);
    }

    pub fn filters(&self) -> Vec<FilterConfig> {
        vec![FilterConfig::of(self.time_range)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_starts_on_overview_with_defaults() {
        let state = DashboardState::default();
        assert_eq!(state.tabs.active_id(), "overview");
        assert_eq!(state.visibility, VisibilityFilter::All);
        assert_eq!(state.time_range, TimeRange::SevenDays);
        assert!(!state.is_loading());
    }

    #[test]
    fn dashboard_filter_change_raises_loading_until_timer_fires() {
        let mut state = DashboardState::default();
        state.set_visibility("top-tier");
        assert_eq!(state.visibility, VisibilityFilter::TopTier);
        assert_eq!(state.time_range, TimeRange::SevenDays);
        assert!(state.is_loading());

        state.finish_loading();
        assert!(!state.is_loading());

        state.set_time_range("90d");
        assert_eq!(state.time_range, TimeRange::NinetyDays);
        assert_eq!(state.visibility, VisibilityFilter::TopTier);
    }

    #[test]
    fn dashboard_filters_expose_current_values() {
        let mut state = DashboardState::default();
        state.set_time_range("30d");
        let filters = state.filters();
        assert_eq!(filters[0].value, "all");
        assert_eq!(filters[1].heading, "Period");
        assert_eq!(filters[1].value, "30d");
    }

    #[test]
    fn changing_one_filter_leaves_the_others() {
        let mut state = IntelligenceState::default();
        state.set_competitor("direct");
        assert_eq!(state.model, ModelFilter::All);
        assert_eq!(state.competitor, CompetitorFilter::Direct);
        assert_eq!(state.time_range, TimeRange::SevenDays);
    }

    #[test]
    fn intelligence_captions_thread_raw_values() {
        let mut state = IntelligenceState::default();
        state.set_model("claude");
        state.set_time_range("30d");
        assert_eq!(
            state.rankings_caption(),
            "Detailed ranking analysis filtered by: claude, all, 30d"
        );
        assert_eq!(
            state.prompts_caption(),
            "Individual prompt analytics for claude models over 30d"
        );
        assert_eq!(
            state.competitive_caption(),
            "Competitive analysis against all competitors"
        );
    }

    #[test]
    fn sentiment_unknown_value_falls_back_to_first_option() {
        let mut state = SentimentState::default();
        state.set_sentiment("negative");
        state.set_category("bogus");
        assert_eq!(state.category, CategoryFilter::All);
        assert_eq!(
            state.trends_caption(),
            "Analyzing negative sentiment in all category over 7d"
        );
        assert_eq!(state.over_time_caption(), "Brand sentiment 7d period");
    }

    #[test]
    fn insight_pages_bring_their_own_header_action() {
        assert_eq!(IntelligenceState::HEADER_ACTION.icon, Icon::Brain);
        assert_eq!(IntelligenceState::HEADER_ACTION.label, "Generate Report");
        assert_eq!(SentimentState::HEADER_ACTION.icon, Icon::Heart);
        assert_eq!(SentimentState::HEADER_ACTION.label, "Download Report");
        assert_ne!(IntelligenceState::HEADER_ACTION, HeaderAction::EXPORT_REPORT);
    }

    #[test]
    fn header_tab_sets_start_on_first_tab() {
        assert_eq!(IntelligenceState::header_tabs().active_id(), "summary");
        assert_eq!(SentimentState::header_tabs().len(), 5);
        assert_eq!(PlaceholderState::header_tabs().active_id(), "overview");
    }
}
