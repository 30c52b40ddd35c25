mod dashboard;
mod intelligence;
mod placeholder;
mod sentiment;
mod widget_dashboard;

use model::theme::{Icon, Token};
use model::PageId;
use yew::prelude::*;

use crate::settings::DashboardLayout;
use dashboard::DashboardPage;
use intelligence::IntelligencePage;
use placeholder::PlaceholderPage;
use sentiment::SentimentPage;
use widget_dashboard::WidgetDashboardPage;

#[derive(Properties, PartialEq)]
pub struct PageContentProps {
    pub page: PageId,
    pub layout: DashboardLayout,
}

/// Maps the selected page to its composer.
#[function_component(PageContent)]
pub fn page_content(props: &PageContentProps) -> Html {
    log::debug!("Rendering composer for {}", props.page);
    match props.page {
        PageId::Dashboard => match props.layout {
            DashboardLayout::Classic => html! { <DashboardPage /> },
            DashboardLayout::Widgets => html! { <WidgetDashboardPage /> },
        },
        PageId::Intelligence => html! { <IntelligencePage /> },
        PageId::Sentiment => html! { <SentimentPage /> },
        page => html! { <PlaceholderPage {page} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct TabPlaceholderProps {
    pub title: AttrValue,
    pub caption: AttrValue,
}

/// Body shown for header tabs that only describe the current filters.
#[function_component(TabPlaceholder)]
pub fn tab_placeholder(props: &TabPlaceholderProps) -> Html {
    html! {
        <div class={Token::CardSurface.class()}>
            <div class="card-body items-center text-center py-16">
                <h3 class={classes!("text-lg", "font-medium", Token::PrimaryText.class())}>{&props.title}</h3>
                <p class={Token::SecondaryText.class()}>{&props.caption}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct UpgradePanelProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or(AttrValue::Static("Upgrade"))]
    pub button: AttrValue,
}

#[function_component(UpgradePanel)]
pub fn upgrade_panel(props: &UpgradePanelProps) -> Html {
    html! {
        <div class={classes!(Token::CardSurface.class(), "bg-gradient-to-r", "from-base-100", "to-base-200")}>
            <div class="card-body flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-4">
                    <div class="w-12 h-12 rounded-xl bg-primary flex items-center justify-center text-primary-content">
                        <i class={Icon::TrendingUp.class()}></i>
                    </div>
                    <div>
                        <h3 class={classes!("font-semibold", Token::PrimaryText.class())}>{&props.title}</h3>
                        <p class={classes!("text-sm", Token::SecondaryText.class())}>{&props.description}</p>
                    </div>
                </div>
                <button class="btn btn-primary px-8">{&props.button}</button>
            </div>
        </div>
    }
}
