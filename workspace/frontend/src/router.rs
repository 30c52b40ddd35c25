use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::shell::Shell;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:page")]
    Page { page: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => html! { <Shell /> },
        Route::Page { page } => html! { <Shell slug={page} /> },
        Route::NotFound => {
            log::warn!("404 - Route not found, showing default page");
            html! { <Shell /> }
        }
    }
}
