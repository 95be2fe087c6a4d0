//! Typed handles to the dashboard's page elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDetailsElement, HtmlElement, HtmlSelectElement};

use crate::application::ports::DashboardView;
use crate::config::ElementIds;
use crate::domain::errors::{AppResult, UiError};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Every element the dashboard touches, resolved once at mount.
#[derive(Debug, Clone)]
pub struct DashboardElements {
    pub chart: Element,
    pub as_of: Element,
    pub filters: Vec<HtmlSelectElement>,
    pub filters_panel: HtmlDetailsElement,
    pub toggle: HtmlElement,
    pub reset: HtmlElement,
}

impl DashboardElements {
    /// Fails on the first id that is missing or of the wrong element type.
    pub fn resolve(document: &Document, ids: &ElementIds) -> AppResult<Self> {
        let filters = ids
            .filters
            .iter()
            .map(|id| lookup::<HtmlSelectElement>(document, id, "<select>"))
            .collect::<AppResult<Vec<_>>>()?;

        let elements = Self {
            chart: lookup::<Element>(document, &ids.chart, "element")?,
            as_of: lookup::<Element>(document, &ids.as_of, "element")?,
            filters,
            filters_panel: lookup::<HtmlDetailsElement>(document, &ids.filters_panel, "<details>")?,
            toggle: lookup::<HtmlElement>(document, &ids.toggle_filters, "HTML element")?,
            reset: lookup::<HtmlElement>(document, &ids.reset, "HTML element")?,
        };

        log_debug!(
            LogComponent::Infrastructure("Dom"),
            "Resolved dashboard elements ({} filters)",
            elements.filters.len()
        );
        Ok(elements)
    }
}

fn lookup<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> AppResult<T> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::ElementNotFound(id.to_string()))?;
    element
        .dyn_into::<T>()
        .map_err(|_| UiError::ElementTypeMismatch { id: id.to_string(), expected }.into())
}

/// [`DashboardView`] over real DOM elements.
pub struct DomDashboardView {
    elements: DashboardElements,
}

impl DomDashboardView {
    pub fn new(elements: DashboardElements) -> Self {
        Self { elements }
    }
}

impl DashboardView for DomDashboardView {
    fn set_as_of_text(&self, text: &str) {
        self.elements.as_of.set_text_content(Some(text));
    }

    fn set_panel_open(&self, open: bool) {
        self.elements.filters_panel.set_open(open);
    }

    fn set_toggle_label(&self, label: &str) {
        self.elements.toggle.set_text_content(Some(label));
    }

    fn reset_filters(&self) {
        for select in &self.elements.filters {
            select.set_selected_index(0);
        }
    }
}
