use model::composer::HeaderAction;
use model::theme::{Icon, Token};
use model::{FilterConfig, TabSet};
use yew::prelude::*;

use super::filter_select::FilterSelect;

/// A filter description paired with the owner's change handler.
#[derive(Clone, PartialEq)]
pub struct FilterBinding {
    pub config: FilterConfig,
    pub on_change: Callback<String>,
}

impl FilterBinding {
    pub fn new(config: FilterConfig, on_change: Callback<String>) -> Self {
        Self { config, on_change }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderFrameProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub tabs: TabSet,
    pub on_tab: Callback<&'static str>,
    #[prop_or_default]
    pub filters: Vec<FilterBinding>,
    /// Replaces the default "Export Report" button
    #[prop_or_default]
    pub actions: Option<Html>,
}

pub fn action_button(action: HeaderAction) -> Html {
    html! {
        <button class="btn btn-primary btn-sm">
            <i class={action.icon.class()}></i>
            {format!(" {}", action.label)}
        </button>
    }
}

/// Stateless header markup: whoever renders it owns the tab set.
#[function_component(HeaderFrame)]
pub fn header_frame(props: &HeaderFrameProps) -> Html {
    let actions = props
        .actions
        .clone()
        .unwrap_or_else(|| action_button(HeaderAction::EXPORT_REPORT));

    html! {
        <div class={classes!(Token::GlassSurface.class(), "mb-6")}>
            <div class="card-body gap-4">
                <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4">
                    <div>
                        <div class="flex items-center gap-3">
                            <h1 class={classes!("text-2xl", "font-bold", Token::PrimaryText.class())}>{&props.title}</h1>
                            <span class={classes!(Token::PositiveBadge.class(), "gap-1")}>
                                <span class="w-2 h-2 rounded-full bg-success animate-pulse"></span>
                                {"Live Data"}
                            </span>
                        </div>
                        <p class={classes!("mt-1", Token::SecondaryText.class())}>{&props.subtitle}</p>
                    </div>
                    <div class="flex items-center gap-2">{actions}</div>
                </div>

                <div class="flex flex-col lg:flex-row lg:items-end lg:justify-between gap-4">
                    <div role="tablist" class="tabs tabs-boxed bg-base-200 w-fit">
                        { for props.tabs.iter().map(|tab| {
                            let id = tab.id;
                            let on_tab = props.on_tab.clone();
                            let token = if props.tabs.is_active(id) { Token::ActiveTab } else { Token::IdleTab };
                            html! {
                                <a role="tab" class={token.class()} onclick={Callback::from(move |_| on_tab.emit(id))}>
                                    {tab.label}
                                </a>
                            }
                        }) }
                    </div>
                    if !props.filters.is_empty() {
                        <div class="flex flex-wrap items-end gap-3">
                            <i class={classes!(Icon::Filter.class(), "mb-3", Token::SecondaryText.class())}></i>
                            { for props.filters.iter().map(|binding| html! {
                                <FilterSelect
                                    key={binding.config.heading}
                                    config={binding.config.clone()}
                                    on_change={binding.on_change.clone()}
                                />
                            }) }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
