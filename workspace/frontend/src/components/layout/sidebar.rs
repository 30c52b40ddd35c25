use model::theme::{Icon, Token};
use model::{NavEntry, NavGroup, PageId};
use yew::prelude::*;

use crate::settings::DashboardLayout;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub groups: Vec<(NavGroup, Vec<NavEntry>)>,
    pub on_select: Callback<PageId>,
    pub layout: DashboardLayout,
    pub on_toggle_layout: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let nav_entry = |entry: &NavEntry| {
        let page = entry.item.page;
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(page);
        });
        let token = if entry.active { Token::ActiveNav } else { Token::IdleNav };
        html! {
            <li>
                <a href={format!("/{}", page.slug())} class={classes!("nav-link", token.class())} {onclick}>
                    <i class={classes!(entry.item.icon.class(), "w-5")}></i>
                    {entry.item.label}
                </a>
            </li>
        }
    };

    let on_toggle = {
        let on_toggle_layout = props.on_toggle_layout.clone();
        Callback::from(move |_| on_toggle_layout.emit(()))
    };

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="app-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-gradient-to-br from-blue-500 to-purple-500 flex items-center justify-center text-white font-bold text-xl">
                            <i class={Icon::Sparkles.class()}></i>
                        </div>
                        <div>
                            <span class="text-xl font-bold tracking-tight">{"AI8 Digital"}</span>
                            <p class={classes!("text-xs", Token::SecondaryText.class())}>{"AI Visibility Analytics"}</p>
                        </div>
                    </div>
                </li>

                { for props.groups.iter().map(|(group, entries)| html! {
                    <>
                        if let Some(heading) = group.heading() {
                            <li class="menu-title flex flex-row items-center gap-2 mt-2">
                                if let Some(icon) = group.icon() {
                                    <i class={icon.class()}></i>
                                }
                                <span>{heading}</span>
                            </li>
                        }
                        { for entries.iter().map(&nav_entry) }
                    </>
                }) }

                <div class="divider"></div>

                <li>
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="toggle toggle-sm toggle-primary"
                            checked={props.layout == DashboardLayout::Widgets}
                            onchange={on_toggle}
                        />
                        <span class="text-sm">{"Widget dashboard"}</span>
                    </label>
                </li>

                <li class="mt-4">
                    <div class="card bg-gradient-to-br from-blue-500/10 to-purple-500/10 border border-primary/20 p-4 flex flex-col items-start gap-2">
                        <span class="font-semibold">
                            <i class={classes!(Icon::Zap.class(), "mr-2", Token::WarningIndicator.class())}></i>
                            {"Upgrade to Pro"}
                        </span>
                        <span class={classes!("text-xs", Token::SecondaryText.class())}>
                            {"Unlock advanced analytics and unlimited AI model tracking"}
                        </span>
                        <button class="btn btn-primary btn-sm w-full">{"Upgrade Now"}</button>
                    </div>
                </li>
            </ul>
        </div>
    }
}
