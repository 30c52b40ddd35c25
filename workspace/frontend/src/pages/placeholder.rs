use model::composer::PlaceholderState;
use model::theme::Token;
use model::PageId;
use yew::prelude::*;

use super::{TabPlaceholder, UpgradePanel};
use crate::components::header::{AnalyticsHeader, FilterBinding};

#[derive(Properties, PartialEq)]
pub struct PlaceholderPageProps {
    pub page: PageId,
}

/// Header plus summary cards for pages whose analytics are not built out.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderPageProps) -> Html {
    let state = use_state(PlaceholderState::default);
    let page = props.page;

    let on_period = {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut next = *state;
            next.set_time_range(&value);
            state.set(next);
        })
    };
    let filters = state
        .filters()
        .into_iter()
        .map(|config| FilterBinding::new(config, on_period.clone()))
        .collect::<Vec<_>>();

    let period = state.time_range;
    let content = Callback::from(move |tab: &'static str| match tab {
        "details" => html! {
            <TabPlaceholder
                title={format!("{} Details", page.label())}
                caption={format!("Detailed {} data for the {} period", page.label().to_lowercase(), period)}
            />
        },
        _ => html! {
            <div class="flex flex-col gap-8">
                <div class={Token::CardSurface.class()}>
                    <div class="card-body items-center text-center py-16">
                        <div class="w-16 h-16 rounded-2xl bg-primary flex items-center justify-center text-primary-content mb-4">
                            <i class={classes!(page.icon().class(), "text-2xl")}></i>
                        </div>
                        <h3 class={classes!("text-xl", "font-bold", Token::PrimaryText.class())}>{page.label()}</h3>
                        <p class={classes!("max-w-md", Token::SecondaryText.class())}>
                            {format!("{} insights are being prepared for your workspace", page.label())}
                        </p>
                    </div>
                </div>
                <UpgradePanel
                    title={format!("Unlock {}", page.label())}
                    description="Upgrade to get full access to every analytics module"
                    button="Upgrade Now"
                />
            </div>
        },
    });

    html! {
        <AnalyticsHeader
            title={page.label()}
            subtitle={format!("{} across AI models", page.label())}
            tabs={PlaceholderState::header_tabs()}
            {filters}
            {content}
        />
    }
}
