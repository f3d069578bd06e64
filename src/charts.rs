//! Chart.js Bindings
//!
//! Chart drawing is delegated to Chart.js loaded by the host page; this module
//! shapes the stats series into Chart.js configs and owns the instances.

use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

use goalboard_core::models::Series;
use goalboard_core::palette::{self, BAR_COLOR};

#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(catch, constructor)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub data: Vec<f64>,
    pub background_color: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

fn legend_right() -> Value {
    json!({ "responsive": true, "plugins": { "legend": { "position": "right" } } })
}

/// Goals per category
pub fn category_doughnut(series: &Series) -> ChartConfig {
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![Dataset {
                label: None,
                data: series.data.clone(),
                background_color: palette::category_colors(series.labels.len()),
                border_radius: None,
            }],
        },
        options: legend_right(),
    }
}

/// Goals per status, colored by label
pub fn status_pie(series: &Series) -> ChartConfig {
    ChartConfig {
        kind: "pie",
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![Dataset {
                label: None,
                data: series.data.clone(),
                background_color: palette::status_label_colors(&series.labels),
                border_radius: None,
            }],
        },
        options: legend_right(),
    }
}

/// Completions over the last seven days
pub fn momentum_bar(series: &Series) -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![Dataset {
                label: Some("Tasks Completed"),
                data: series.data.clone(),
                background_color: vec![BAR_COLOR],
                border_radius: Some(4),
            }],
        },
        options: json!({
            "scales": { "y": { "beginAtZero": true, "ticks": { "stepSize": 1 } } },
            "plugins": { "legend": { "display": false } }
        }),
    }
}

/// Draw `config` on `canvas`. Fails if Chart.js is missing or rejects the config.
pub fn render(canvas: &web_sys::HtmlCanvasElement, config: &ChartConfig) -> Result<Chart, String> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let js_config = config.serialize(&serializer).map_err(|e| e.to_string())?;
    Chart::new(canvas, &js_config).map_err(|e| format!("{:?}", e))
}
