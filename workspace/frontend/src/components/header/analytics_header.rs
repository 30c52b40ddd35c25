use model::TabSet;
use yew::prelude::*;

use super::header_frame::{FilterBinding, HeaderFrame};

#[derive(Properties, PartialEq)]
pub struct AnalyticsHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Initial tab set; the first tab starts active
    pub tabs: TabSet,
    #[prop_or_default]
    pub filters: Vec<FilterBinding>,
    #[prop_or_default]
    pub actions: Option<Html>,
    /// Renders the body below the header for the active tab id
    #[prop_or_default]
    pub content: Option<Callback<&'static str, Html>>,
}

/// Page header that owns its tab selection.
///
/// Tab changes stay local: the parent only sees them through `content`.
/// Filter values are never stored here; each change goes straight to the
/// binding's callback.
#[function_component(AnalyticsHeader)]
pub fn analytics_header(props: &AnalyticsHeaderProps) -> Html {
    let tabs = {
        let initial = props.tabs.clone();
        use_state(move || initial)
    };

    let on_tab = {
        let tabs = tabs.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*tabs).clone();
            match next.select(id) {
                Ok(()) => tabs.set(next),
                Err(e) => log::warn!("Header tab ignored: {}", e),
            }
        })
    };

    let body = props
        .content
        .as_ref()
        .map(|render| render.emit(tabs.active_id()))
        .unwrap_or_else(|| html! {});

    html! {
        <>
            <HeaderFrame
                title={props.title.clone()}
                subtitle={props.subtitle.clone()}
                tabs={(*tabs).clone()}
                {on_tab}
                filters={props.filters.clone()}
                actions={props.actions.clone()}
            />
            {body}
        </>
    }
}
