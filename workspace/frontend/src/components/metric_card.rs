use model::theme::{Icon, Token};
use model::{MetricCardState, MetricDescriptor};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub metric: MetricDescriptor,
    /// Widget board style: no progress bar, delta shown under the value
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let state = use_state(MetricCardState::default);
    let metric = &props.metric;
    let tone = metric.delta_tone();

    let update = |f: fn(&mut MetricCardState)| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            f(&mut next);
            state.set(next);
        })
    };
    let onmouseenter = update(MetricCardState::pointer_enter);
    let onmouseleave = update(MetricCardState::pointer_leave);
    let onclick = update(MetricCardState::toggle);

    let detail = if state.is_detail_open() {
        html! {
            <div class="absolute left-0 right-0 top-full mt-2 z-40 card bg-base-100 shadow-xl border border-base-300">
                <div class="card-body p-4 gap-2">
                    <h4 class={classes!("font-semibold", Token::PrimaryText.class())}>{metric.detail.title}</h4>
                    <p class={classes!("text-sm", Token::SecondaryText.class())}>{metric.detail.description}</p>
                    <ul class="list-disc list-inside text-sm space-y-1">
                        { for metric.detail.details.iter().map(|d| html! { <li>{*d}</li> }) }
                    </ul>
                    <div class={classes!("text-xs", "pt-2", "border-t", "border-base-200", Token::SecondaryText.class())}>
                        <i class={classes!(Icon::Clock.class(), "mr-1")}></i>
                        {metric.detail.period}
                    </div>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class={classes!(Token::CardSurface.class(), "relative", "hover:shadow-lg", "transition-shadow")}
            {onmouseenter} {onmouseleave}>
            <div class="card-body p-5 gap-3">
                <div class="flex items-start justify-between">
                    <div class="flex items-center gap-3">
                        <div class={classes!("w-10", "h-10", "rounded-lg", "flex", "items-center", "justify-center", "text-white", metric.accent.class())}>
                            <i class={metric.icon.class()}></i>
                        </div>
                        <div>
                            <p class={classes!("text-sm", "font-medium", Token::SecondaryText.class())}>{metric.label}</p>
                            if !metric.description.is_empty() {
                                <p class={classes!("text-xs", Token::SecondaryText.class())}>{metric.description}</p>
                            }
                        </div>
                    </div>
                    if !props.compact {
                        <span class={tone.badge().class()}>{metric.delta}</span>
                    }
                    <button class="btn btn-ghost btn-xs btn-circle" aria-label="details" {onclick}>
                        <i class={Icon::Info.class()}></i>
                    </button>
                </div>

                <div class={classes!("text-3xl", "font-bold", Token::PrimaryText.class())}>{metric.value}</div>

                if props.compact {
                    <p class={classes!("text-sm", tone.text().class())}>
                        <i class={classes!(Icon::TrendingUp.class(), "mr-1")}></i>
                        {metric.delta}
                    </p>
                } else {
                    <>
                    <p class={classes!("text-xs", Token::SecondaryText.class())}>
                        <span class={tone.text().class()}>{metric.delta}</span>
                        {" vs last period"}
                    </p>
                    <div>
                        <div class={classes!("flex", "justify-between", "text-xs", "mb-1", Token::SecondaryText.class())}>
                            <span>{"Target progress"}</span>
                            <span>{format!("{}%", metric.target_progress())}</span>
                        </div>
                        <progress class="progress progress-primary w-full" value={metric.target_progress().to_string()} max="100"></progress>
                    </div>
                    </>
                }
            </div>
            {detail}
        </div>
    }
}
