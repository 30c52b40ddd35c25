use model::composer::IntelligenceState;
use yew::prelude::*;

use super::TabPlaceholder;
use crate::components::chart_panel::ChartPanel;
use crate::components::header::{action_button, AnalyticsHeader, FilterBinding};
use crate::components::tables::{ModelComparisonTable, PromptWinnersTable};
use crate::mock_data;

#[function_component(IntelligencePage)]
pub fn intelligence_page() -> Html {
    let state = use_state(IntelligenceState::default);

    let setter = |apply: fn(&mut IntelligenceState, &str)| {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut next = *state;
            apply(&mut next, &value);
            state.set(next);
        })
    };
    let handlers = [
        setter(IntelligenceState::set_model),
        setter(IntelligenceState::set_competitor),
        setter(IntelligenceState::set_time_range),
    ];
    let filters = state
        .filters()
        .into_iter()
        .zip(handlers)
        .map(|(config, on_change)| FilterBinding::new(config, on_change))
        .collect::<Vec<_>>();

    let current = *state;
    let content = Callback::from(move |tab: &'static str| match tab {
        "rankings" => html! {
            <TabPlaceholder title="Rankings Analysis" caption={current.rankings_caption()} />
        },
        "prompts" => html! {
            <TabPlaceholder title="Prompt Performance" caption={current.prompts_caption()} />
        },
        "models" => html! {
            <TabPlaceholder title="Model Analytics" caption={current.models_caption()} />
        },
        "competitive" => html! {
            <TabPlaceholder title="Competitive Intelligence" caption={current.competitive_caption()} />
        },
        _ => summary(),
    });

    html! {
        <AnalyticsHeader
            title="Intelligence"
            subtitle="AI model insights and competitive intelligence"
            tabs={IntelligenceState::header_tabs()}
            {filters}
            actions={Some(action_button(IntelligenceState::HEADER_ACTION))}
            {content}
        />
    }
}

fn summary() -> Html {
    html! {
        <div class="flex flex-col gap-8">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <ChartPanel
                    title="Total Mentions"
                    subtitle="Brand comparison across all AI models"
                    views={mock_data::total_mentions_views()}
                />
                <ChartPanel
                    title="Average Rank Over Time"
                    subtitle="Your ranking performance trend"
                    views={mock_data::average_rank_views()}
                />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <PromptWinnersTable rows={&mock_data::PROMPT_WINNERS[..]} />
                <ModelComparisonTable rows={&mock_data::MODEL_COMPARISON[..]} />
            </div>
        </div>
    }
}
