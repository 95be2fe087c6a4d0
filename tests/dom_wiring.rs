#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use revenue_kpi_wasm::application::ports::{ChartRenderer, Clock};
use revenue_kpi_wasm::config::{DashboardConfig, ElementIds};
use revenue_kpi_wasm::domain::chart::Figure;
use revenue_kpi_wasm::domain::errors::{AppError, AppResult, RenderingError, UiError};
use revenue_kpi_wasm::domain::revenue::CalendarDate;
use revenue_kpi_wasm::infrastructure::services::BrowserClock;
use revenue_kpi_wasm::presentation::listeners::{DashboardSlot, MountedDashboard};
use revenue_kpi_wasm::PanelState;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlDetailsElement, HtmlElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct CountingRenderer {
    renders: Cell<u32>,
}

impl ChartRenderer for CountingRenderer {
    fn render(&self, figure: &Figure) -> AppResult<()> {
        assert_eq!(figure.data.len(), 3);
        self.renders.set(self.renders.get() + 1);
        Ok(())
    }
}

/// Fails its first render, as when Plotly has not loaded yet.
#[derive(Default)]
struct LateRenderer {
    attempts: Cell<u32>,
    renders: Cell<u32>,
}

impl ChartRenderer for LateRenderer {
    fn render(&self, _figure: &Figure) -> AppResult<()> {
        self.attempts.set(self.attempts.get() + 1);
        if self.attempts.get() == 1 {
            return Err(RenderingError::ChartLibraryFailed("Plotly is not loaded".into()).into());
        }
        self.renders.set(self.renders.get() + 1);
        Ok(())
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn today(&self) -> AppResult<CalendarDate> {
        CalendarDate::new(2026, 10, 19).map_err(Into::into)
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Builds the dashboard markup with ids prefixed by `p` and returns the matching config.
fn build_page(p: &str) -> DashboardConfig {
    let doc = document();
    let body = doc.body().unwrap();
    let ids = ElementIds {
        chart: format!("{p}chart"),
        as_of: format!("{p}asOf"),
        filters: (0..9).map(|i| format!("{p}filter{i}")).collect(),
        filters_panel: format!("{p}filtersBlock"),
        toggle_filters: format!("{p}toggleFilters"),
        reset: format!("{p}resetBtn"),
    };

    let add = |tag: &str, id: &str| {
        let el = doc.create_element(tag).unwrap();
        el.set_id(id);
        body.append_child(&el).unwrap();
        el
    };

    add("div", &ids.chart);
    add("span", &ids.as_of);
    let panel = add("details", &ids.filters_panel);
    panel.unchecked_ref::<HtmlDetailsElement>().set_open(true);
    for id in &ids.filters {
        let select = add("select", id);
        for label in ["All", "A", "B"] {
            let option = doc.create_element("option").unwrap();
            option.set_text_content(Some(label));
            select.append_child(&option).unwrap();
        }
        select.unchecked_ref::<HtmlSelectElement>().set_selected_index(2);
    }
    add("button", &ids.toggle_filters).set_text_content(Some("Show filters"));
    add("button", &ids.reset);

    DashboardConfig { elements: ids, ..DashboardConfig::default() }
}

fn element<T: JsCast>(id: &str) -> T {
    document().get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

type TestDashboard = MountedDashboard<Rc<CountingRenderer>, FixedClock>;

fn mount_into(config: &DashboardConfig, renderer: &Rc<CountingRenderer>) -> AppResult<TestDashboard> {
    let handle = renderer.clone();
    MountedDashboard::mount_with(&document(), config, move |_| handle, FixedClock)
}

fn mount(config: &DashboardConfig) -> (TestDashboard, Rc<CountingRenderer>) {
    let renderer = Rc::new(CountingRenderer::default());
    let mounted = mount_into(config, &renderer).unwrap();
    (mounted, renderer)
}

#[wasm_bindgen_test]
fn mount_draws_once_and_closes_panel() {
    let config = build_page("mount-");
    let (mounted, renderer) = mount(&config);

    assert_eq!(renderer.renders.get(), 1);
    assert_eq!(mounted.listener_count(), 11);
    assert_eq!(mounted.panel_state(), PanelState::Closed);
    assert!(!element::<HtmlDetailsElement>("mount-filtersBlock").open());
    assert_eq!(
        element::<HtmlElement>("mount-asOf").text_content().as_deref(),
        Some("As of 19 October 2026")
    );
}

#[wasm_bindgen_test]
fn each_filter_change_redraws_once() {
    let config = build_page("change-");
    let (_mounted, renderer) = mount(&config);

    for (i, id) in config.elements.filters.iter().enumerate() {
        let event = Event::new("change").unwrap();
        element::<HtmlSelectElement>(id).dispatch_event(&event).unwrap();
        assert_eq!(renderer.renders.get(), 2 + i as u32);
    }
}

#[wasm_bindgen_test]
fn toggle_click_flips_panel_and_label() {
    let config = build_page("toggle-");
    let (mounted, _) = mount(&config);
    let toggle = element::<HtmlElement>("toggle-toggleFilters");
    let panel = element::<HtmlDetailsElement>("toggle-filtersBlock");

    toggle.click();
    assert!(panel.open());
    assert_eq!(toggle.text_content().as_deref(), Some("Hide filters"));
    assert_eq!(mounted.panel_state(), PanelState::Open);

    toggle.click();
    assert!(!panel.open());
    assert_eq!(toggle.text_content().as_deref(), Some("Show filters"));
}

#[wasm_bindgen_test]
fn reset_click_zeroes_filters_and_redraws_once() {
    let config = build_page("reset-");
    let (_mounted, renderer) = mount(&config);

    element::<HtmlElement>("reset-resetBtn").click();

    assert_eq!(renderer.renders.get(), 2);
    for id in &config.elements.filters {
        assert_eq!(element::<HtmlSelectElement>(id).selected_index(), 0);
    }
}

#[wasm_bindgen_test]
fn destroy_detaches_listeners() {
    let config = build_page("destroy-");
    let (mounted, renderer) = mount(&config);
    mounted.destroy();

    element::<HtmlElement>("destroy-resetBtn").click();
    element::<HtmlElement>("destroy-toggleFilters").click();

    assert_eq!(renderer.renders.get(), 1);
    assert!(!element::<HtmlDetailsElement>("destroy-filtersBlock").open());
}

#[wasm_bindgen_test]
fn missing_element_fails_whole_mount() {
    let mut config = build_page("missing-");
    config.elements.reset = "missing-nowhere".to_string();
    let renderer = Rc::new(CountingRenderer::default());
    let handle = renderer.clone();

    let err = MountedDashboard::mount_with(&document(), &config, move |_| handle, FixedClock)
        .err()
        .unwrap();

    assert_eq!(err, AppError::Ui(UiError::ElementNotFound("missing-nowhere".to_string())));
    assert_eq!(renderer.renders.get(), 0);
}

#[wasm_bindgen_test]
fn wrong_element_type_is_reported() {
    let mut config = build_page("mismatch-");
    config.elements.filters_panel = config.elements.chart.clone();

    let err = MountedDashboard::mount_with(&document(), &config, |_| CountingRenderer::default(), FixedClock)
        .err()
        .unwrap();

    assert!(matches!(err, AppError::Ui(UiError::ElementTypeMismatch { expected: "<details>", .. })));
}

#[wasm_bindgen_test]
fn browser_clock_formats_long_date() {
    let clock = BrowserClock::new("en-SG");
    let label = clock.format_long(CalendarDate::new(2026, 10, 19).unwrap());
    assert!(label.contains("October"));
    assert!(label.contains("2026"));
    assert!(label.contains("19"));
}

#[wasm_bindgen_test]
fn browser_clock_reads_a_valid_today() {
    let today = BrowserClock::new("en-SG").today().unwrap();
    assert!(today.year() >= 2024);
    assert!(today.day() <= today.days_in_month());
}

#[wasm_bindgen_test]
fn failed_first_draw_keeps_listeners() {
    let config = build_page("late-");
    let renderer = Rc::new(LateRenderer::default());
    let handle = renderer.clone();

    let mounted = MountedDashboard::mount_with(&document(), &config, move |_| handle, FixedClock).unwrap();
    assert_eq!(mounted.listener_count(), 11);
    assert_eq!(mounted.redraw_count(), 0);
    assert!(!element::<HtmlDetailsElement>("late-filtersBlock").open());

    let event = Event::new("change").unwrap();
    element::<HtmlSelectElement>(&config.elements.filters[0]).dispatch_event(&event).unwrap();

    assert_eq!(renderer.renders.get(), 1);
    assert_eq!(mounted.redraw_count(), 1);
}

#[wasm_bindgen_test]
fn remount_replaces_previous_listeners() {
    let config = build_page("remount-");
    let renderer = Rc::new(CountingRenderer::default());
    let slot = DashboardSlot::new();

    let first = slot.replace(|| mount_into(&config, &renderer)).unwrap();
    let second = slot.replace(|| mount_into(&config, &renderer)).unwrap();
    assert_ne!(first, second);
    assert_eq!(renderer.renders.get(), 2);

    let event = Event::new("change").unwrap();
    element::<HtmlSelectElement>(&config.elements.filters[0]).dispatch_event(&event).unwrap();
    assert_eq!(renderer.renders.get(), 3);

    element::<HtmlElement>("remount-toggleFilters").click();
    assert!(element::<HtmlDetailsElement>("remount-filtersBlock").open());

    assert_eq!(
        slot.with_active(first, |m| m.redraw_count()),
        Err(AppError::Ui(UiError::DashboardDestroyed))
    );
    assert_eq!(slot.with_active(second, |m| m.panel_state()), Ok(PanelState::Open));
}

#[wasm_bindgen_test]
fn stale_release_keeps_current_dashboard() {
    let config = build_page("stale-");
    let renderer = Rc::new(CountingRenderer::default());
    let slot = DashboardSlot::new();

    let first = slot.replace(|| mount_into(&config, &renderer)).unwrap();
    let second = slot.replace(|| mount_into(&config, &renderer)).unwrap();
    slot.release(first);
    assert!(slot.with_active(second, |_| ()).is_ok());

    element::<HtmlElement>("stale-resetBtn").click();
    assert_eq!(renderer.renders.get(), 3);

    slot.release(second);
    assert!(slot.with_active(second, |_| ()).is_err());
    element::<HtmlElement>("stale-resetBtn").click();
    assert_eq!(renderer.renders.get(), 3);
}
