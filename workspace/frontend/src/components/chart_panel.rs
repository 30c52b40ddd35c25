use std::rc::Rc;

use model::theme::Token;
use model::{ChartPanelState, ChartView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::plotly::{self, PlotlyDiv};

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub views: Vec<ChartView>,
    /// Legend deltas keyed by series name; series without one get no legend entry
    #[prop_or_default]
    pub deltas: &'static [(&'static str, &'static str)],
    #[prop_or(300)]
    pub height: u32,
}

/// Card with a Plotly chart, an optional view switch and a hover tooltip.
#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    let built = use_memo(props.views.clone(), |views| {
        ChartPanelState::new(views.iter().copied())
    });

    let body = match &*built {
        Ok(state) => {
            let key = props.views.iter().map(|v| v.id).collect::<Vec<_>>().join(",");
            html! {
                <ChartCanvas
                    {key}
                    initial={state.clone()}
                    deltas={props.deltas}
                    height={props.height}
                />
            }
        }
        Err(e) => html! { <ErrorDisplay message={e.to_string()} /> },
    };

    html! {
        <div class={Token::CardSurface.class()}>
            <div class="card-body p-5">
                <h3 class={classes!("card-title", "text-lg", Token::PrimaryText.class())}>{&props.title}</h3>
                if let Some(subtitle) = &props.subtitle {
                    <p class={classes!("text-sm", Token::SecondaryText.class())}>{subtitle}</p>
                }
                {body}
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct PanelModel(ChartPanelState);

enum PanelAction {
    SetView(&'static str),
    Hover(usize),
    Unhover,
}

impl Reducible for PanelModel {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            PanelAction::SetView(id) => {
                if let Err(e) = next.set_view(id) {
                    log::warn!("Chart view ignored: {}", e);
                    return self;
                }
            }
            PanelAction::Hover(index) => next.hover(index),
            PanelAction::Unhover => next.clear_hover(),
        }
        if next == self.0 {
            return self;
        }
        Rc::new(PanelModel(next))
    }
}

#[derive(Properties, PartialEq)]
struct ChartCanvasProps {
    initial: ChartPanelState,
    deltas: &'static [(&'static str, &'static str)],
    height: u32,
}

#[function_component(ChartCanvas)]
fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let model = {
        let initial = props.initial.clone();
        use_reducer(move || PanelModel(initial))
    };
    let chart_ref = use_node_ref();
    let view = *model.0.active_view();

    {
        let dispatcher = model.dispatcher();
        use_effect_with((chart_ref.clone(), view.id), move |(chart_ref, _)| {
            let element = chart_ref.cast::<Element>();
            let mut listeners: Vec<Closure<dyn FnMut(JsValue)>> = Vec::new();

            if let Some(element) = &element {
                match plotly::render(element, &view) {
                    Ok(()) => {
                        log::trace!("Rendered chart view '{}'", view.id);
                        let div: &PlotlyDiv = element.unchecked_ref();

                        let hover = dispatcher.clone();
                        let on_hover = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                            if let Some(point) = plotly::hovered_index(&event) {
                                hover.dispatch(PanelAction::Hover(plotly::category_index(&view, point)));
                            }
                        });
                        let unhover = dispatcher.clone();
                        let on_unhover = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
                            unhover.dispatch(PanelAction::Unhover);
                        });

                        div.on("plotly_hover", &on_hover);
                        div.on("plotly_unhover", &on_unhover);
                        listeners.push(on_hover);
                        listeners.push(on_unhover);
                    }
                    Err(e) => log::error!("Failed to render chart view '{}': {:?}", view.id, e),
                }
            }

            move || {
                if let Some(element) = element {
                    plotly::release(&element);
                }
                drop(listeners);
            }
        });
    }

    let switch = if model.0.has_view_switch() {
        html! {
            <div role="tablist" class="tabs tabs-boxed tabs-sm bg-base-200 w-fit">
                { for model.0.tabs().iter().map(|tab| {
                    let id = tab.id;
                    let dispatcher = model.dispatcher();
                    let token = if model.0.tabs().is_active(id) { Token::ActiveTab } else { Token::IdleTab };
                    html! {
                        <a role="tab" class={token.class()}
                            onclick={Callback::from(move |_| dispatcher.dispatch(PanelAction::SetView(id)))}>
                            {tab.label}
                        </a>
                    }
                }) }
            </div>
        }
    } else {
        html! {}
    };

    let tooltip = match model.0.tooltip() {
        Some(tooltip) => html! {
            <div class="absolute top-2 right-2 z-10 card bg-base-100 shadow-lg border border-base-300 pointer-events-none">
                <div class="card-body p-3 gap-1 text-sm">
                    <p class={classes!("font-semibold", Token::PrimaryText.class())}>{tooltip.category}</p>
                    { for tooltip.entries.iter().map(|entry| html! {
                        <div class="flex items-center gap-2">
                            <span class="w-2 h-2 rounded-full" style={format!("background-color: {}", entry.color.hex())}></span>
                            <span class={Token::SecondaryText.class()}>{format!("{}:", entry.name)}</span>
                            <span class="font-medium">{entry.value.to_string()}</span>
                        </div>
                    }) }
                </div>
            </div>
        },
        None => html! {},
    };

    let legend = view
        .dataset
        .series
        .iter()
        .filter_map(|series| {
            let (_, delta) = props.deltas.iter().find(|(name, _)| *name == series.name)?;
            Some(html! {
                <div class="flex items-center gap-2 text-sm">
                    <span class="w-3 h-3 rounded-full" style={format!("background-color: {}", series.color.hex())}></span>
                    <span class={Token::SecondaryText.class()}>{series.name}</span>
                    <span class={Token::PositiveIndicator.class()}>{*delta}</span>
                </div>
            })
        })
        .collect::<Html>();

    html! {
        <div class="flex flex-col gap-3 mt-2">
            {switch}
            <div class="relative">
                <div ref={chart_ref} class="w-full" style={format!("height: {}px;", props.height)}></div>
                {tooltip}
            </div>
            <div class="flex flex-wrap gap-4">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    fn panel() -> Rc<PanelModel> {
        Rc::new(PanelModel(ChartPanelState::new(mock_data::trend_views()).unwrap()))
    }

    #[test]
    fn unknown_view_keeps_the_same_model() {
        let before = panel();
        let after = before.clone().reduce(PanelAction::SetView("bogus"));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn switching_view_drops_hover() {
        let hovered = panel().reduce(PanelAction::Hover(3));
        assert_eq!(hovered.0.hovered(), Some(3));

        let switched = hovered.reduce(PanelAction::SetView("mentions"));
        assert_eq!(switched.0.active_view().id, "mentions");
        assert_eq!(switched.0.hovered(), None);
    }

    #[test]
    fn hover_out_of_range_is_a_no_op() {
        let before = panel();
        let after = before.clone().reduce(PanelAction::Hover(99));
        assert!(Rc::ptr_eq(&before, &after));
    }
}
