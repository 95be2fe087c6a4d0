//! Binding to the page's global `Plotly` object.

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::application::ports::ChartRenderer;
use crate::domain::chart::Figure;
use crate::domain::errors::{AppResult, RenderingError};
use crate::domain::logging::LogComponent;
use crate::log_trace;

/// Looks up `globalThis.Plotly` and its `newPlot` function.
fn plotly_new_plot() -> AppResult<(JsValue, Function)> {
    let missing = || RenderingError::ChartLibraryFailed("Plotly is not loaded".to_string());
    let plotly = Reflect::get(&js_sys::global(), &JsValue::from_str("Plotly")).map_err(|_| missing())?;
    if plotly.is_undefined() || plotly.is_null() {
        return Err(missing().into());
    }
    let new_plot = Reflect::get(&plotly, &JsValue::from_str("newPlot"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| RenderingError::ChartLibraryFailed("Plotly.newPlot is not a function".to_string()))?;
    Ok((plotly, new_plot))
}

/// Serializes through JSON so `None` becomes `null` and field names are kept verbatim.
pub fn to_js_value<T: Serialize>(value: &T) -> AppResult<JsValue> {
    let json = serde_json::to_string(value).map_err(|e| RenderingError::Serialization(e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|e| RenderingError::Serialization(describe_js_error(&e)).into())
}

pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Renders figures into one container with `Plotly.newPlot`, which creates or
/// replaces the plot.
pub struct PlotlyRenderer {
    container: Element,
}

impl PlotlyRenderer {
    pub fn new(container: Element) -> Self {
        Self { container }
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render(&self, figure: &Figure) -> AppResult<()> {
        let data = to_js_value(&figure.data)?;
        let layout = to_js_value(&figure.layout)?;
        let config = to_js_value(&figure.config)?;

        let (plotly, new_plot) = plotly_new_plot()?;
        new_plot
            .apply(&plotly, &Array::of4(&self.container, &data, &layout, &config))
            .map_err(|e| RenderingError::ChartLibraryFailed(describe_js_error(&e)))?;

        log_trace!(
            LogComponent::Infrastructure("Plotly"),
            "newPlot with {} traces into #{}",
            figure.data.len(),
            self.container.id()
        );
        Ok(())
    }
}
