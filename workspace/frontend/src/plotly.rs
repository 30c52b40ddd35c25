//! Thin bridge to the Plotly bundle loaded by `index.html`.
//!
//! Figures are built as `serde_json` values so they can be checked natively;
//! only [`render`] and [`PlotlyDiv`] touch the browser.

use model::{ChartColor, ChartKind, ChartView};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(root: &Element, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(root: &Element) -> Result<(), JsValue>;

    /// A div after Plotly has attached its event emitter to it.
    #[wasm_bindgen(extends = Element)]
    pub type PlotlyDiv;

    #[wasm_bindgen(method)]
    pub fn on(this: &PlotlyDiv, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(method, js_name = removeAllListeners)]
    pub fn remove_all_listeners(this: &PlotlyDiv, event: &str);
}

const HOVER_EVENTS: [&str; 2] = ["plotly_hover", "plotly_unhover"];

/// Draws `view` into `root`, replacing whatever was plotted there.
pub fn render(root: &Element, view: &ChartView) -> Result<(), JsValue> {
    let data = to_js(&traces(view))?;
    let layout = to_js(&layout(view))?;
    let config = to_js(&config())?;
    new_plot(root, data, layout, config)?;
    Ok(())
}

/// Converts a figure fragment into plain JS objects and arrays.
///
/// Plotly reads properties off its arguments, so JSON objects must not
/// become ES `Map`s.
pub fn to_js(value: &Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Detaches hover listeners and frees the figure.
pub fn release(root: &Element) {
    let div: &PlotlyDiv = root.unchecked_ref();
    for event in HOVER_EVENTS {
        div.remove_all_listeners(event);
    }
    if let Err(err) = purge(root) {
        log::warn!("Plotly.purge failed: {:?}", err);
    }
}

/// Category index of the first point in a `plotly_hover` payload.
///
/// Cartesian and polar traces report `pointIndex`, pie slices `pointNumber`.
pub fn hovered_index(event: &JsValue) -> Option<usize> {
    let points = js_sys::Reflect::get(event, &JsValue::from_str("points")).ok()?;
    let first = js_sys::Reflect::get(&points, &JsValue::from_f64(0.0)).ok()?;
    ["pointIndex", "pointNumber"].iter().find_map(|key| {
        js_sys::Reflect::get(&first, &JsValue::from_str(key))
            .ok()?
            .as_f64()
            .filter(|n| *n >= 0.0)
            .map(|n| n as usize)
    })
}

/// Maps a hovered point back to its category.
///
/// Radar traces repeat their first vertex to close the polygon, so the
/// closing point stands for the first category.
pub fn category_index(view: &ChartView, point: usize) -> usize {
    let len = view.dataset.points.len();
    match view.kind {
        ChartKind::Radar if len > 0 => point % len,
        _ => point,
    }
}

pub fn traces(view: &ChartView) -> Value {
    let dataset = view.dataset;
    let categories: Vec<&str> = dataset.categories().collect();

    let traces: Vec<Value> = match view.kind {
        ChartKind::Donut => vec![json!({
            "type": "pie",
            "hole": 0.6,
            "labels": categories,
            "values": dataset.column(0),
            "marker": {
                "colors": (0..categories.len()).map(|i| ChartColor::cycle(i).hex()).collect::<Vec<_>>()
            },
            "textinfo": "none",
            "hoverinfo": "none",
            "sort": false,
        })],
        ChartKind::Radar => dataset
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                let mut r = dataset.column(i);
                let mut theta = categories.clone();
                // close the polygon
                if let (Some(&r0), Some(&t0)) = (r.first(), theta.first()) {
                    r.push(r0);
                    theta.push(t0);
                }
                json!({
                    "type": "scatterpolar",
                    "r": r,
                    "theta": theta,
                    "fill": "toself",
                    "name": series.name,
                    "line": {"color": series.color.hex()},
                    "hoverinfo": "none",
                })
            })
            .collect(),
        kind => dataset
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                let mut trace = json!({
                    "x": categories,
                    "y": dataset.column(i),
                    "name": series.name,
                    "hoverinfo": "none",
                });
                let style = match kind {
                    ChartKind::Bar => json!({
                        "type": "bar",
                        "marker": {"color": series.color.hex()},
                    }),
                    ChartKind::Line => json!({
                        "type": "scatter",
                        "mode": "lines+markers",
                        "line": {"color": series.color.hex(), "shape": "spline", "width": 3},
                    }),
                    ChartKind::StackedArea => json!({
                        "type": "scatter",
                        "mode": "lines",
                        "stackgroup": "one",
                        "line": {"color": series.color.hex(), "shape": "spline"},
                    }),
                    _ => json!({
                        "type": "scatter",
                        "mode": "lines",
                        "fill": "tozeroy",
                        "line": {"color": series.color.hex(), "shape": "spline"},
                    }),
                };
                merge(&mut trace, style);
                trace
            })
            .collect(),
    };
    Value::Array(traces)
}

pub fn layout(view: &ChartView) -> Value {
    let mut layout = json!({
        "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false,
        "hovermode": "closest",
    });
    let axes = match view.kind {
        ChartKind::Donut => json!({}),
        ChartKind::Radar => json!({
            "polar": {"radialaxis": {"visible": true, "range": [0, 100]}},
        }),
        ChartKind::Line | ChartKind::Area | ChartKind::StackedArea | ChartKind::Bar => json!({
            "hovermode": "x",
            "xaxis": {"showgrid": false},
            "yaxis": {"showgrid": true, "gridcolor": "#eee"},
        }),
    };
    merge(&mut layout, axes);
    layout
}

pub fn config() -> Value {
    json!({"responsive": true, "displayModeBar": false})
}

fn merge(target: &mut Value, extra: Value) {
    if let (Value::Object(target), Value::Object(extra)) = (target, extra) {
        target.extend(extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn area_view_emits_one_filled_trace_per_series() {
        let views = mock_data::trend_views();
        let traces = traces(&views[0]);
        let traces = traces.as_array().unwrap();

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["fill"], "tozeroy");
        assert_eq!(traces[0]["name"], "Visibility Score");
        assert_eq!(traces[1]["y"][6], 74.0);
        assert!(traces.iter().all(|t| t["hoverinfo"] == "none"));
    }

    #[test]
    fn stacked_area_shares_a_stack_group() {
        let traces = traces(&mock_data::sentiment_over_time_views()[0]);
        let traces = traces.as_array().unwrap();

        assert_eq!(traces.len(), 3);
        assert!(traces.iter().all(|t| t["stackgroup"] == "one"));
        assert_eq!(traces[2]["line"]["color"], ChartColor::Red.hex());
    }

    #[test]
    fn radar_closes_its_polygon() {
        let traces = traces(&mock_data::sentiment_by_category_views()[0]);
        let radar = &traces[0];

        assert_eq!(radar["type"], "scatterpolar");
        assert_eq!(radar["theta"].as_array().unwrap().len(), 7);
        assert_eq!(radar["theta"][6], "Trust");
        assert_eq!(radar["r"][6], 85.0);
    }

    #[test]
    fn radar_closing_vertex_hovers_the_first_category() {
        let radar = mock_data::sentiment_by_category_views()[0];
        assert_eq!(category_index(&radar, 6), 0);
        assert_eq!(category_index(&radar, 2), 2);

        let mut panel = model::ChartPanelState::new([radar]).unwrap();
        panel.hover(category_index(&radar, 6));
        assert_eq!(panel.tooltip().unwrap().category, "Trust");

        let bar = mock_data::total_mentions_views()[0];
        assert_eq!(category_index(&bar, 9), 9);
    }

    #[test]
    fn donut_colours_each_slice() {
        let traces = traces(&mock_data::optimization_views()[0]);
        let pie = &traces[0];

        assert_eq!(pie["type"], "pie");
        assert_eq!(pie["labels"][1], "In Progress");
        assert_eq!(pie["marker"]["colors"][2], ChartColor::Purple.hex());
    }

    #[test]
    fn cartesian_layout_hovers_by_category() {
        let layout = layout(&mock_data::average_rank_views()[0]);
        assert_eq!(layout["hovermode"], "x");
        assert_eq!(layout["xaxis"]["showgrid"], false);

        let donut = super::layout(&mock_data::optimization_views()[0]);
        assert_eq!(donut["hovermode"], "closest");
        assert!(donut.get("xaxis").is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::mock_data;

    fn get(target: &JsValue, key: &str) -> JsValue {
        js_sys::Reflect::get(target, &JsValue::from_str(key)).unwrap()
    }

    #[wasm_bindgen_test]
    fn figures_reach_plotly_as_plain_objects() {
        let view = mock_data::total_mentions_views()[0];

        let data = to_js(&traces(&view)).unwrap();
        assert!(js_sys::Array::is_array(&data));
        let first = get(&data, "0");
        assert!(!first.is_instance_of::<js_sys::Map>());
        assert_eq!(get(&first, "type").as_string().as_deref(), Some("bar"));
        assert!(js_sys::Array::is_array(&get(&first, "x")));

        let layout = to_js(&layout(&view)).unwrap();
        assert!(!layout.is_instance_of::<js_sys::Map>());
        assert_eq!(get(&layout, "hovermode").as_string().as_deref(), Some("x"));
        assert_eq!(get(&get(&layout, "xaxis"), "showgrid").as_bool(), Some(false));

        let config = to_js(&config()).unwrap();
        assert_eq!(get(&config, "displayModeBar").as_bool(), Some(false));
    }
}
