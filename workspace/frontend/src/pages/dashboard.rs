use std::rc::Rc;

use gloo_timers::callback::Timeout;
use model::composer::DashboardState;
use model::theme::{Icon, Token};
use yew::prelude::*;

use crate::common::loading::LoadingOverlay;
use crate::components::chart_panel::ChartPanel;
use crate::components::header::{FilterBinding, HeaderFrame};
use crate::components::metric_card::MetricCard;
use crate::components::tables::{CompetitorRankingTable, ModelPerformanceGrid, TopPromptsTable};
use crate::mock_data;
use crate::settings;

#[derive(Clone, PartialEq)]
struct DashboardModel(DashboardState);

enum DashboardAction {
    SelectTab(&'static str),
    Visibility(String),
    TimeRange(String),
    FinishLoading,
}

impl Reducible for DashboardModel {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            DashboardAction::SelectTab(id) => {
                if let Err(e) = next.tabs.select(id) {
                    log::warn!("Dashboard tab ignored: {}", e);
                    return self;
                }
            }
            DashboardAction::Visibility(value) => next.set_visibility(&value),
            DashboardAction::TimeRange(value) => next.set_time_range(&value),
            DashboardAction::FinishLoading => next.finish_loading(),
        }
        Rc::new(DashboardModel(next))
    }
}

/// Classic dashboard: its header is controlled by this composer rather than
/// owning the tabs itself.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_reducer(|| DashboardModel(DashboardState::default()));
    let delay = settings::get_settings().loading_delay_ms;

    let on_tab = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(DashboardAction::SelectTab(id)))
    };

    let filter_change = |action: fn(String) -> DashboardAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| {
            dispatcher.dispatch(action(value));
            let dispatcher = dispatcher.clone();
            Timeout::new(delay, move || dispatcher.dispatch(DashboardAction::FinishLoading)).forget();
        })
    };
    let handlers = [
        filter_change(DashboardAction::Visibility),
        filter_change(DashboardAction::TimeRange),
    ];
    let filters = state
        .0
        .filters()
        .into_iter()
        .zip(handlers)
        .map(|(config, on_change)| FilterBinding::new(config, on_change))
        .collect::<Vec<_>>();

    let body = match state.0.tabs.active_id() {
        "performance" => html! {
            <div class="flex flex-col gap-8">
                <ModelPerformanceGrid rows={&mock_data::MODEL_PERFORMANCE[..]} />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <TopPromptsTable rows={&mock_data::TOP_PROMPTS[..]} />
                    <CompetitorRankingTable rows={&mock_data::COMPETITOR_RANKING[..]} />
                </div>
            </div>
        },
        "trends" => html! {
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <ChartPanel title="Performance Trends" views={mock_data::trend_views()} deltas={mock_data::TREND_DELTAS} />
                <div class={Token::CardSurface.class()}>
                    <div class="card-body items-center text-center py-16">
                        <div class="w-16 h-16 rounded-2xl bg-secondary flex items-center justify-center text-secondary-content mb-4">
                            <i class={classes!(Icon::TrendingUp.class(), "text-2xl")}></i>
                        </div>
                        <h3 class={classes!("text-xl", "font-bold", Token::PrimaryText.class())}>{"Advanced Trend Analysis"}</h3>
                        <p class={classes!("max-w-sm", Token::SecondaryText.class())}>
                            {"Detailed trend breakdowns, predictions, and pattern recognition powered by AI"}
                        </p>
                        <button class="btn btn-primary mt-4">{"Coming Soon"}</button>
                    </div>
                </div>
            </div>
        },
        "models" => html! {
            <ModelPerformanceGrid rows={&mock_data::MODEL_PERFORMANCE[..]} />
        },
        _ => html! {
            <div class="flex flex-col gap-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    { for mock_data::DASHBOARD_METRICS.iter().map(|metric| html! {
                        <MetricCard key={metric.label} metric={*metric} />
                    }) }
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2">
                        <ChartPanel title="Performance Trends" views={mock_data::trend_views()} deltas={mock_data::TREND_DELTAS} />
                    </div>
                    <ChartPanel
                        title="Optimization Opportunities"
                        subtitle="Share of tracked prompts by optimization status"
                        views={mock_data::optimization_views()}
                    />
                </div>
            </div>
        },
    };

    html! {
        <>
            <HeaderFrame
                title="Dashboard"
                subtitle="Monitor your brand's visibility across AI models"
                tabs={state.0.tabs.clone()}
                {on_tab}
                {filters}
            />
            <div class="relative">
                <LoadingOverlay active={state.0.is_loading()} />
                {body}
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> Rc<DashboardModel> {
        Rc::new(DashboardModel(DashboardState::default()))
    }

    #[test]
    fn filter_change_raises_loading_until_timer_fires() {
        let changed = initial().reduce(DashboardAction::TimeRange("30d".into()));
        assert!(changed.0.is_loading());
        assert_eq!(changed.0.time_range.to_string(), "30d");

        let settled = changed.reduce(DashboardAction::FinishLoading);
        assert!(!settled.0.is_loading());
        assert_eq!(settled.0.time_range.to_string(), "30d");
    }

    #[test]
    fn unknown_tab_keeps_model() {
        let before = initial();
        let after = before.clone().reduce(DashboardAction::SelectTab("bogus"));
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.0.tabs.active_id(), "overview");
    }

    #[test]
    fn tab_switch_leaves_filters_alone() {
        let state = initial()
            .reduce(DashboardAction::Visibility("top-tier".into()))
            .reduce(DashboardAction::SelectTab("models"));
        assert_eq!(state.0.tabs.active_id(), "models");
        assert_eq!(state.0.visibility.to_string(), "top-tier");
    }
}
