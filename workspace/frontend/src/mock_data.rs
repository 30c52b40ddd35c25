//! Constant display data. Every delta, rank and percentage here is an
//! authored literal; nothing is computed from the series.

use model::theme::{Accent, Brand, ChartColor, Icon};
use model::{ChartKind, ChartView, Dataset, MetricDescriptor, MetricDetail, SeriesPoint, SeriesSpec};

// ===================== Dashboard =====================

pub static DASHBOARD_METRICS: [MetricDescriptor; 4] = [
    MetricDescriptor {
        label: "Visibility Score",
        value: "8.4",
        delta: "+12.5%",
        is_positive: true,
        icon: Icon::Eye,
        accent: Accent::Primary,
        description: "Overall brand visibility across AI models",
        detail: MetricDetail {
            title: "Visibility Score Improvement",
            description: "Your brand's visibility increased by 12.5% compared to the previous 7-day period",
            details: &[
                "This represents improved ranking positions across all AI models",
                "Based on 1,247 total mentions analyzed",
                "Strong performance indicates effective brand positioning",
            ],
            period: "vs last 7 days",
        },
    },
    MetricDescriptor {
        label: "Presence Score",
        value: "74%",
        delta: "+8.2%",
        is_positive: true,
        icon: Icon::Target,
        accent: Accent::Secondary,
        description: "Frequency of brand mentions in responses",
        detail: MetricDetail {
            title: "Presence Score Growth",
            description: "Your brand presence improved by 8.2% in AI model responses",
            details: &[
                "74% of relevant queries now mention your brand",
                "Significant improvement in brand recall rates",
                "Indicates stronger market positioning vs competitors",
            ],
            period: "vs last 7 days",
        },
    },
    MetricDescriptor {
        label: "Average Rank",
        value: "2.3",
        delta: "-0.4",
        is_positive: false,
        icon: Icon::Trophy,
        accent: Accent::Warm,
        description: "Mean ranking position when mentioned",
        detail: MetricDetail {
            title: "Average Ranking Improvement",
            description: "Your average ranking improved by 0.4 positions (lower numbers are better)",
            details: &[
                "Now ranking at position 2.3 vs 2.7 previously",
                "Improvement across OpenAI, Claude, and Gemini models",
                "Getting closer to consistent #1 rankings",
            ],
            period: "vs last 7 days",
        },
    },
    MetricDescriptor {
        label: "Total Mentions",
        value: "1,247",
        delta: "+23.1%",
        is_positive: true,
        icon: Icon::Message,
        accent: Accent::Violet,
        description: "Total brand mentions across all models",
        detail: MetricDetail {
            title: "Mention Volume Surge",
            description: "Brand mentions increased by 23.1% with 235 additional mentions",
            details: &[
                "Strong growth across all 6 monitored AI models",
                "Highest weekly growth rate in the last month",
                "Indicates increasing brand awareness and relevance",
            ],
            period: "vs last 7 days",
        },
    },
];

pub static VISIBILITY_TREND: Dataset = Dataset {
    category_axis: "date",
    series: &[
        SeriesSpec { key: "visibility", name: "Visibility Score", color: ChartColor::Blue },
        SeriesSpec { key: "presence", name: "Presence %", color: ChartColor::Green },
    ],
    points: &[
        SeriesPoint { category: "Jan 18", values: &[6.8, 68.0] },
        SeriesPoint { category: "Jan 19", values: &[7.2, 71.0] },
        SeriesPoint { category: "Jan 20", values: &[6.9, 69.0] },
        SeriesPoint { category: "Jan 21", values: &[7.8, 73.0] },
        SeriesPoint { category: "Jan 22", values: &[8.1, 76.0] },
        SeriesPoint { category: "Jan 23", values: &[8.4, 74.0] },
        SeriesPoint { category: "Jan 24", values: &[8.4, 74.0] },
    ],
};

pub static MENTIONS_TREND: Dataset = Dataset {
    category_axis: "date",
    series: &[
        SeriesSpec { key: "mentions", name: "Total Mentions", color: ChartColor::Green },
        SeriesSpec { key: "citations", name: "Citations", color: ChartColor::Purple },
    ],
    points: &[
        SeriesPoint { category: "Jan 18", values: &[156.0, 89.0] },
        SeriesPoint { category: "Jan 19", values: &[203.0, 112.0] },
        SeriesPoint { category: "Jan 20", values: &[178.0, 95.0] },
        SeriesPoint { category: "Jan 21", values: &[234.0, 134.0] },
        SeriesPoint { category: "Jan 22", values: &[289.0, 167.0] },
        SeriesPoint { category: "Jan 23", values: &[312.0, 189.0] },
        SeriesPoint { category: "Jan 24", values: &[298.0, 172.0] },
    ],
};

/// Legend deltas shown under the trend chart, keyed by series name.
pub static TREND_DELTAS: &[(&str, &str)] = &[
    ("Visibility Score", "+15.2%"),
    ("Presence %", "+8.9%"),
    ("Total Mentions", "+23.1%"),
    ("Citations", "+17.4%"),
];

pub fn trend_views() -> Vec<ChartView> {
    vec![
        ChartView {
            id: "visibility",
            label: "Visibility & Presence",
            kind: ChartKind::Area,
            dataset: &VISIBILITY_TREND,
        },
        ChartView {
            id: "mentions",
            label: "Mentions & Citations",
            kind: ChartKind::Line,
            dataset: &MENTIONS_TREND,
        },
    ]
}

pub static OPTIMIZATION_SHARE: Dataset = Dataset {
    category_axis: "status",
    series: &[SeriesSpec { key: "share", name: "Share of prompts", color: ChartColor::Blue }],
    points: &[
        SeriesPoint { category: "Optimized", values: &[68.0] },
        SeriesPoint { category: "In Progress", values: &[20.0] },
        SeriesPoint { category: "Needs Work", values: &[12.0] },
    ],
};

pub fn optimization_views() -> Vec<ChartView> {
    vec![ChartView {
        id: "share",
        label: "Optimization Status",
        kind: ChartKind::Donut,
        dataset: &OPTIMIZATION_SHARE,
    }]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPerformance {
    pub model: &'static str,
    pub visibility: &'static str,
    pub mentions: u32,
    pub rank: f64,
    pub delta: &'static str,
    pub is_positive: bool,
}

pub static MODEL_PERFORMANCE: [ModelPerformance; 6] = [
    ModelPerformance { model: "OpenAI GPT-4", visibility: "8.7", mentions: 324, rank: 1.8, delta: "+14.2%", is_positive: true },
    ModelPerformance { model: "Claude", visibility: "8.5", mentions: 298, rank: 2.1, delta: "+11.8%", is_positive: true },
    ModelPerformance { model: "Gemini", visibility: "8.1", mentions: 267, rank: 2.3, delta: "+9.4%", is_positive: true },
    ModelPerformance { model: "Meta AI", visibility: "7.6", mentions: 234, rank: 2.5, delta: "+6.1%", is_positive: true },
    ModelPerformance { model: "Perplexity", visibility: "7.2", mentions: 71, rank: 2.9, delta: "-2.3%", is_positive: false },
    ModelPerformance { model: "Copilot", visibility: "6.9", mentions: 53, rank: 3.2, delta: "-4.0%", is_positive: false },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptPerformance {
    pub prompt: &'static str,
    pub mentions: u32,
    pub visibility: &'static str,
}

pub static TOP_PROMPTS: [PromptPerformance; 4] = [
    PromptPerformance { prompt: "What are the best project management tools for remote teams?", mentions: 142, visibility: "9.1" },
    PromptPerformance { prompt: "How to implement AI chatbots for customer service?", mentions: 118, visibility: "8.8" },
    PromptPerformance { prompt: "Software development lifecycle management", mentions: 97, visibility: "8.2" },
    PromptPerformance { prompt: "Best practices for digital marketing automation", mentions: 84, visibility: "7.9" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompetitorShare {
    pub brand: Brand,
    pub mentions: u32,
    pub share: &'static str,
}

pub static COMPETITOR_RANKING: [CompetitorShare; 5] = [
    CompetitorShare { brand: Brand::Ai8Digital, mentions: 1247, share: "30.1%" },
    CompetitorShare { brand: Brand::Soroco, mentions: 892, share: "21.5%" },
    CompetitorShare { brand: Brand::Mixpanel, mentions: 756, share: "18.3%" },
    CompetitorShare { brand: Brand::Nintex, mentions: 634, share: "15.3%" },
    CompetitorShare { brand: Brand::CompetitorE, mentions: 523, share: "12.6%" },
];

// ===================== Widget dashboard =====================

pub static WIDGET_METRICS: [MetricDescriptor; 4] = [
    MetricDescriptor {
        label: "Visibility Score",
        value: "8.4",
        delta: "+12.5% vs last week",
        is_positive: true,
        icon: Icon::Eye,
        accent: Accent::Primary,
        description: "",
        detail: MetricDetail {
            title: "Weekly Visibility Growth",
            description: "Significant improvement in brand visibility across all AI models",
            details: &[
                "Increased from 7.5 to 8.4 visibility score",
                "Best weekly performance in the last month",
                "Driven by improved rankings in OpenAI and Claude",
            ],
            period: "Last 7 days",
        },
    },
    MetricDescriptor {
        label: "Presence Score",
        value: "74%",
        delta: "+8.2% vs last week",
        is_positive: true,
        icon: Icon::Target,
        accent: Accent::Secondary,
        description: "",
        detail: MetricDetail {
            title: "Presence Rate Improvement",
            description: "Higher frequency of brand mentions in AI responses",
            details: &[
                "Increased from 68% to 74% presence rate",
                "Strong growth in competitive queries",
                "Indicates improved brand recall",
            ],
            period: "Last 7 days",
        },
    },
    MetricDescriptor {
        label: "Average Rank",
        value: "2.3",
        delta: "-0.4 vs last week",
        is_positive: true,
        icon: Icon::Trophy,
        accent: Accent::Warm,
        description: "",
        detail: MetricDetail {
            title: "Ranking Position Improvement",
            description: "Better average ranking across all mentions (lower is better)",
            details: &[
                "Improved from position 2.7 to 2.3",
                "Consistent progress toward #1 rankings",
                "Strong performance in product comparison queries",
            ],
            period: "Last 7 days",
        },
    },
    MetricDescriptor {
        label: "Total Mentions",
        value: "1,247",
        delta: "+23.1% vs last week",
        is_positive: true,
        icon: Icon::Message,
        accent: Accent::Violet,
        description: "Across 6 AI models",
        detail: MetricDetail {
            title: "Mention Volume Surge",
            description: "Substantial increase in total brand mentions",
            details: &[
                "Added 235 new mentions this week",
                "Growth across all monitored AI models",
                "Strong momentum in brand awareness",
            ],
            period: "Last 7 days",
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub model: &'static str,
    pub content: &'static str,
    pub time: &'static str,
    pub positive: bool,
}

pub static RECENT_ACTIVITY: [Activity; 4] = [
    Activity { model: "OpenAI GPT-4", content: "New mention in response about project management tools", time: "2 min ago", positive: true },
    Activity { model: "Claude", content: "Ranking improved to #1 for customer service queries", time: "5 min ago", positive: true },
    Activity { model: "Gemini", content: "Cited as source for AI implementation best practices", time: "12 min ago", positive: true },
    Activity { model: "Meta AI", content: "Mentioned in comparison with competitors", time: "18 min ago", positive: false },
];

pub static RECENT_IMPROVEMENTS: &[(&str, &str)] = &[
    ("Sentiment", "+15.2%"),
    ("Citations", "+8.9%"),
    ("Rankings", "+12.4%"),
];

// ===================== Intelligence =====================

pub static TOTAL_MENTIONS: Dataset = Dataset {
    category_axis: "brand",
    series: &[SeriesSpec { key: "mentions", name: "Mentions", color: ChartColor::Blue }],
    points: &[
        SeriesPoint { category: "AI8 Digital", values: &[1247.0] },
        SeriesPoint { category: "Soroco", values: &[892.0] },
        SeriesPoint { category: "Mixpanel", values: &[756.0] },
        SeriesPoint { category: "Nintex", values: &[634.0] },
        SeriesPoint { category: "Competitor E", values: &[523.0] },
    ],
};

pub static AVERAGE_RANK: Dataset = Dataset {
    category_axis: "date",
    series: &[SeriesSpec { key: "rank", name: "Rank", color: ChartColor::Green }],
    points: &[
        SeriesPoint { category: "Jun 17", values: &[2.8] },
        SeriesPoint { category: "Jun 18", values: &[2.6] },
        SeriesPoint { category: "Jun 19", values: &[2.4] },
        SeriesPoint { category: "Jun 20", values: &[2.1] },
        SeriesPoint { category: "Jun 21", values: &[1.9] },
        SeriesPoint { category: "Jun 22", values: &[2.0] },
        SeriesPoint { category: "Jun 23", values: &[1.8] },
    ],
};

pub fn total_mentions_views() -> Vec<ChartView> {
    vec![ChartView { id: "mentions", label: "Total Mentions", kind: ChartKind::Bar, dataset: &TOTAL_MENTIONS }]
}

pub fn average_rank_views() -> Vec<ChartView> {
    vec![ChartView { id: "rank", label: "Average Rank", kind: ChartKind::Line, dataset: &AVERAGE_RANK }]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptWinner {
    pub prompt: &'static str,
    pub top_brand: Brand,
    pub number_ones: u32,
    pub rank_one_rate: &'static str,
}

pub static PROMPT_WINNERS: [PromptWinner; 4] = [
    PromptWinner { prompt: "What are the best project management tools for remote teams?", top_brand: Brand::Ai8Digital, number_ones: 42, rank_one_rate: "89%" },
    PromptWinner { prompt: "How to implement AI chatbots for customer service?", top_brand: Brand::Ai8Digital, number_ones: 38, rank_one_rate: "76%" },
    PromptWinner { prompt: "Best practices for digital marketing automation", top_brand: Brand::Mixpanel, number_ones: 34, rank_one_rate: "68%" },
    PromptWinner { prompt: "Software development lifecycle management", top_brand: Brand::Ai8Digital, number_ones: 29, rank_one_rate: "72%" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelComparison {
    pub model: &'static str,
    pub your_mentions: u32,
    pub their_mentions: u32,
    pub your_rank: f64,
    pub their_rank: f64,
}

pub static MODEL_COMPARISON: [ModelComparison; 4] = [
    ModelComparison { model: "OpenAI", your_mentions: 324, their_mentions: 189, your_rank: 1.8, their_rank: 2.4 },
    ModelComparison { model: "Claude", your_mentions: 298, their_mentions: 156, your_rank: 2.1, their_rank: 2.8 },
    ModelComparison { model: "Gemini", your_mentions: 267, their_mentions: 203, your_rank: 2.3, their_rank: 2.6 },
    ModelComparison { model: "Meta AI", your_mentions: 234, their_mentions: 178, your_rank: 2.5, their_rank: 3.1 },
];

// ===================== Sentiment =====================

pub static SENTIMENT_OVER_TIME: Dataset = Dataset {
    category_axis: "date",
    series: &[
        SeriesSpec { key: "positive", name: "positive", color: ChartColor::Green },
        SeriesSpec { key: "neutral", name: "neutral", color: ChartColor::Amber },
        SeriesSpec { key: "negative", name: "negative", color: ChartColor::Red },
    ],
    points: &[
        SeriesPoint { category: "Jun 17", values: &[68.0, 25.0, 7.0] },
        SeriesPoint { category: "Jun 18", values: &[72.0, 22.0, 6.0] },
        SeriesPoint { category: "Jun 19", values: &[75.0, 20.0, 5.0] },
        SeriesPoint { category: "Jun 20", values: &[78.0, 18.0, 4.0] },
        SeriesPoint { category: "Jun 21", values: &[74.0, 21.0, 5.0] },
        SeriesPoint { category: "Jun 22", values: &[79.0, 17.0, 4.0] },
        SeriesPoint { category: "Jun 23", values: &[82.0, 15.0, 3.0] },
    ],
};

pub static SENTIMENT_BY_CATEGORY: Dataset = Dataset {
    category_axis: "category",
    series: &[SeriesSpec { key: "score", name: "Sentiment Score", color: ChartColor::Blue }],
    points: &[
        SeriesPoint { category: "Trust", values: &[85.0] },
        SeriesPoint { category: "Innovation", values: &[92.0] },
        SeriesPoint { category: "Value", values: &[78.0] },
        SeriesPoint { category: "Quality", values: &[88.0] },
        SeriesPoint { category: "Support", values: &[76.0] },
        SeriesPoint { category: "Reliability", values: &[90.0] },
    ],
};

pub fn sentiment_over_time_views() -> Vec<ChartView> {
    vec![ChartView { id: "over-time", label: "Sentiment Over Time", kind: ChartKind::StackedArea, dataset: &SENTIMENT_OVER_TIME }]
}

pub fn sentiment_by_category_views() -> Vec<ChartView> {
    vec![ChartView { id: "by-category", label: "Sentiment by Category", kind: ChartKind::Radar, dataset: &SENTIMENT_BY_CATEGORY }]
}

pub static TOP_SENTIMENTS: [&str; 6] = [
    "Transparency",
    "Problem resolution",
    "Innovation leadership",
    "Customer support",
    "Product quality",
    "Market expertise",
];

pub static LOWEST_SENTIMENTS: [&str; 4] = [
    "Overall quality",
    "Super shoe range",
    "Pricing concerns",
    "Documentation gaps",
];

#[cfg(test)]
mod tests {
    use super::*;
    use model::ChartPanelState;

    #[test]
    fn every_dataset_is_rectangular() {
        for dataset in [
            &VISIBILITY_TREND,
            &MENTIONS_TREND,
            &OPTIMIZATION_SHARE,
            &TOTAL_MENTIONS,
            &AVERAGE_RANK,
            &SENTIMENT_OVER_TIME,
            &SENTIMENT_BY_CATEGORY,
        ] {
            assert_eq!(dataset.validate(), Ok(()), "{}", dataset.category_axis);
        }
    }

    #[test]
    fn every_view_list_builds_a_panel() {
        for views in [
            trend_views(),
            optimization_views(),
            total_mentions_views(),
            average_rank_views(),
            sentiment_over_time_views(),
            sentiment_by_category_views(),
        ] {
            assert!(ChartPanelState::new(views).is_ok());
        }
    }

    #[test]
    fn rank_card_is_authored_negative_on_classic_dashboard() {
        let rank = DASHBOARD_METRICS.iter().find(|m| m.label == "Average Rank").unwrap();
        assert!(!rank.is_positive);
        assert!(WIDGET_METRICS.iter().all(|m| m.is_positive));
    }

    #[test]
    fn every_trend_series_has_a_legend_delta() {
        for dataset in [&VISIBILITY_TREND, &MENTIONS_TREND] {
            for series in dataset.series {
                assert!(TREND_DELTAS.iter().any(|(name, _)| *name == series.name));
            }
        }
    }

    #[test]
    fn competitor_ranking_matches_mention_chart() {
        for (row, point) in COMPETITOR_RANKING.iter().zip(TOTAL_MENTIONS.points) {
            assert_eq!(row.brand.name(), point.category);
            assert_eq!(f64::from(row.mentions), point.values[0]);
        }
    }
}
