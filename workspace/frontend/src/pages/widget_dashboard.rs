use model::theme::{Icon, Token, Tone};
use yew::prelude::*;

use crate::components::metric_card::MetricCard;
use crate::mock_data::{self, Activity};

/// Compact widget board, the alternative dashboard layout.
#[function_component(WidgetDashboardPage)]
pub fn widget_dashboard_page() -> Html {
    let top_model = &mock_data::MODEL_PERFORMANCE[0];

    html! {
        <div class="flex flex-col gap-6">
            <div class={Token::GlassSurface.class()}>
                <div class="card-body py-3 flex-row flex-wrap items-center gap-6">
                    <span class="flex items-center gap-2 text-sm font-semibold">
                        <span class="w-2 h-2 rounded-full bg-success animate-pulse"></span>
                        {"System Healthy"}
                    </span>
                    <span class={classes!("text-sm", Token::SecondaryText.class())}>
                        <i class={classes!(Icon::Clock.class(), "mr-1")}></i>
                        {"Last updated: 2 min ago"}
                    </span>
                    <span class="text-sm font-medium text-info">
                        <i class={classes!(Icon::Globe.class(), "mr-1")}></i>
                        {"6 Models Active"}
                    </span>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                { for mock_data::WIDGET_METRICS.iter().map(|metric| html! {
                    <MetricCard key={metric.label} metric={*metric} compact=true />
                }) }
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class={classes!(Token::CardSurface.class(), "lg:col-span-2")}>
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <h3 class={classes!("card-title", "text-lg", Token::PrimaryText.class())}>
                                <i class={Icon::Activity.class()}></i>
                                {"Recent Activity"}
                            </h3>
                            <span class={classes!("text-xs", Token::SecondaryText.class())}>{"Live updates"}</span>
                        </div>
                        <ul class="flex flex-col gap-3 mt-2">
                            { for mock_data::RECENT_ACTIVITY.iter().map(activity_row) }
                        </ul>
                    </div>
                </div>

                <div class="flex flex-col gap-6">
                    <div class={Token::CardSurface.class()}>
                        <div class="card-body p-5">
                            <h4 class={classes!("text-sm", "font-semibold", Token::PrimaryText.class())}>{"Top Performing Model"}</h4>
                            <div class="flex items-center gap-3">
                                <div class="w-10 h-10 rounded-xl bg-primary flex items-center justify-center text-primary-content">
                                    <i class={Icon::Brain.class()}></i>
                                </div>
                                <div>
                                    <h5 class="font-semibold">{top_model.model}</h5>
                                    <p class={classes!("text-xs", Token::PositiveIndicator.class())}>
                                        {format!("Visibility: {}/10", top_model.visibility)}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class={Token::CardSurface.class()}>
                        <div class="card-body p-5">
                            <h4 class={classes!("text-sm", "font-semibold", Token::PrimaryText.class())}>{"Recent Improvements"}</h4>
                            { for mock_data::RECENT_IMPROVEMENTS.iter().map(|(label, delta)| html! {
                                <div class="flex justify-between items-center">
                                    <span class={classes!("text-sm", Token::SecondaryText.class())}>{*label}</span>
                                    <span class={classes!("text-sm", "font-semibold", Token::PositiveIndicator.class())}>{*delta}</span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class={Token::CardSurface.class()}>
                        <div class="card-body p-5 gap-2">
                            <h4 class={classes!("text-sm", "font-semibold", Token::PrimaryText.class())}>{"Quick Actions"}</h4>
                            <button class="btn btn-outline btn-sm w-full">
                                <i class={Icon::FileText.class()}></i>
                                {" Generate Report"}
                            </button>
                            <button class="btn btn-outline btn-sm w-full">
                                <i class={Icon::Download.class()}></i>
                                {" Export Data"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn activity_row(activity: &Activity) -> Html {
    let tone = if activity.positive { Tone::Positive } else { Tone::Warning };
    html! {
        <li class="flex items-start gap-3 p-3 rounded-lg bg-base-200">
            <span class={classes!("mt-1", tone.text().class())}>
                <i class={Icon::Message.class()}></i>
            </span>
            <div class="flex-1">
                <div class="flex justify-between">
                    <span class="text-sm font-semibold">{activity.model}</span>
                    <span class={classes!("text-xs", Token::SecondaryText.class())}>{activity.time}</span>
                </div>
                <p class={classes!("text-sm", Token::SecondaryText.class())}>{activity.content}</p>
            </div>
        </li>
    }
}
