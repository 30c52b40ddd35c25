use model::composer::SentimentState;
use model::theme::{Icon, Tone};
use yew::prelude::*;

use super::{TabPlaceholder, UpgradePanel};
use crate::components::chart_panel::ChartPanel;
use crate::components::header::{action_button, AnalyticsHeader, FilterBinding};
use crate::components::tables::TagCloud;
use crate::mock_data;

#[function_component(SentimentPage)]
pub fn sentiment_page() -> Html {
    let state = use_state(SentimentState::default);

    let setter = |apply: fn(&mut SentimentState, &str)| {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut next = *state;
            apply(&mut next, &value);
            state.set(next);
        })
    };
    let handlers = [
        setter(SentimentState::set_sentiment),
        setter(SentimentState::set_category),
        setter(SentimentState::set_time_range),
    ];
    let filters = state
        .filters()
        .into_iter()
        .zip(handlers)
        .map(|(config, on_change)| FilterBinding::new(config, on_change))
        .collect::<Vec<_>>();

    let current = *state;
    let content = Callback::from(move |tab: &'static str| match tab {
        "trends" => html! {
            <TabPlaceholder title="Sentiment Trends" caption={current.trends_caption()} />
        },
        "categories" => html! {
            <TabPlaceholder title="Category Analysis" caption={current.categories_caption()} />
        },
        "keywords" => html! {
            <TabPlaceholder title="Keyword Analysis" caption="Keyword sentiment analysis coming soon" />
        },
        "competitive" => html! {
            <TabPlaceholder title="Competitive Sentiment" caption="Competitive sentiment comparison coming soon" />
        },
        _ => overview(&current),
    });

    html! {
        <AnalyticsHeader
            title="Sentiment"
            subtitle="Monitor brand sentiment across AI responses"
            tabs={SentimentState::header_tabs()}
            {filters}
            actions={Some(action_button(SentimentState::HEADER_ACTION))}
            {content}
        />
    }
}

fn overview(state: &SentimentState) -> Html {
    html! {
        <div class="flex flex-col gap-8">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <ChartPanel
                    title="Sentiment Over Time"
                    subtitle={state.over_time_caption()}
                    views={mock_data::sentiment_over_time_views()}
                />
                <ChartPanel
                    title="Sentiment by Category"
                    subtitle="Performance across different brand attributes"
                    views={mock_data::sentiment_by_category_views()}
                />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <TagCloud
                    title="Top Sentiments"
                    subtitle="Most positive mentions and associations"
                    icon={Icon::Star}
                    tags={&mock_data::TOP_SENTIMENTS[..]}
                    tone={Tone::Positive}
                />
                <TagCloud
                    title="Areas for Improvement"
                    subtitle={state.improvement_caption()}
                    icon={Icon::Alert}
                    tags={&mock_data::LOWEST_SENTIMENTS[..]}
                    tone={Tone::Negative}
                />
            </div>
            <UpgradePanel
                title="Unlock Advanced Sentiment Analytics"
                description="Get detailed sentiment breakdown, competitor comparisons, and actionable insights"
            />
        </div>
    }
}
