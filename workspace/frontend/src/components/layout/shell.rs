use model::{NavigationShell, PageId};
use yew::prelude::*;
use yew_router::prelude::*;

use super::sidebar::Sidebar;
use crate::common::error::ErrorDisplay;
use crate::pages::PageContent;
use crate::router::Route;
use crate::settings::{self, DashboardLayout};

/// Pages with a composer, in sidebar order. The first one is the default.
pub const REGISTERED_PAGES: [PageId; 10] = [
    PageId::Dashboard,
    PageId::Reports,
    PageId::Prompts,
    PageId::Optimize,
    PageId::Intelligence,
    PageId::Sentiment,
    PageId::Citations,
    PageId::Crawlers,
    PageId::LlmTraffic,
    PageId::Integrations,
];

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    /// Path segment from the router; `None` on the root path
    #[prop_or_default]
    pub slug: Option<AttrValue>,
}

/// Sidebar plus content region. The selected page is derived from the URL
/// and the content is keyed by it, so composer state starts over whenever
/// another page is shown.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let navigator = use_navigator();
    let layout = use_state(|| settings::get_settings().dashboard_layout);

    let mut nav = match NavigationShell::new(REGISTERED_PAGES) {
        Ok(nav) => nav,
        Err(e) => return html! { <ErrorDisplay message={e.to_string()} /> },
    };
    if let Some(slug) = &props.slug {
        nav.select_slug(slug);
    }
    let page = nav.selected();
    log::trace!("Shell showing {}", page);

    let on_select = {
        let nav = nav.clone();
        Callback::from(move |page: PageId| {
            let mut nav = nav.clone();
            let selected = nav.select_page(page);
            log::debug!("Navigating to {}", selected);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Page {
                    page: selected.slug().to_string(),
                });
            }
        })
    };

    let on_toggle_layout = {
        let layout = layout.clone();
        Callback::from(move |_| {
            let next = match *layout {
                DashboardLayout::Classic => DashboardLayout::Widgets,
                DashboardLayout::Widgets => DashboardLayout::Classic,
            };
            settings::update_settings(|s| s.dashboard_layout = next);
            if let Err(e) = settings::get_settings().save_to_storage() {
                log::warn!("Could not persist settings: {:?}", e);
            }
            log::info!("Dashboard layout switched to {:?}", next);
            layout.set(next);
        })
    };

    html! {
        <div class="drawer lg:drawer-open">
            <input id="app-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <div class="navbar bg-base-100 shadow-sm lg:hidden">
                    <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="app-drawer">
                        <i class="fas fa-bars text-xl"></i>
                    </label>
                    <span class="text-lg font-bold px-2">{page.label()}</span>
                </div>
                <main class="flex-1 p-6 overflow-y-auto">
                    <PageContent key={page.slug()} {page} layout={*layout} />
                </main>
            </div>
            <Sidebar
                groups={nav.groups()}
                {on_select}
                layout={*layout}
                {on_toggle_layout}
            />
        </div>
    }
}
