//! Event wiring between page controls and the dashboard controller.
//!
//! Every function returns the [`EventListener`] handles it registered;
//! dropping a handle removes its listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, HtmlElement, HtmlSelectElement};

use crate::application::controller::{DashboardController, PanelState};
use crate::application::ports::{ChartRenderer, Clock};
use crate::config::DashboardConfig;
use crate::domain::errors::{AppResult, UiError};
use crate::domain::logging::LogComponent;
use crate::infrastructure::dom::{DashboardElements, DomDashboardView};
use crate::infrastructure::plotly::PlotlyRenderer;
use crate::infrastructure::services::BrowserClock;
use crate::{log_error, log_info};

pub type DomController<R, C> = DashboardController<DomDashboardView, R, C>;

/// Calls `on_change` once per `change` event on any filter.
pub fn attach_filter_listeners<F>(filters: &[HtmlSelectElement], on_change: F) -> Vec<EventListener>
where
    F: Fn() + Clone + 'static,
{
    filters
        .iter()
        .map(|select| {
            let on_change = on_change.clone();
            EventListener::new(select, "change", move |_| on_change())
        })
        .collect()
}

/// Closes the panel, then flips it on every click of `toggle`.
pub fn attach_panel_toggle<R, C>(toggle: &HtmlElement, controller: &Rc<DomController<R, C>>) -> EventListener
where
    R: ChartRenderer + 'static,
    C: Clock + 'static,
{
    controller.init_panel();
    let controller = Rc::clone(controller);
    EventListener::new(toggle, "click", move |_| {
        controller.toggle_panel();
    })
}

/// Resets every filter to its first option and redraws once per click.
pub fn attach_reset<R, C>(reset: &HtmlElement, controller: &Rc<DomController<R, C>>) -> EventListener
where
    R: ChartRenderer + 'static,
    C: Clock + 'static,
{
    let controller = Rc::clone(controller);
    EventListener::new(reset, "click", move |_| {
        if let Err(e) = controller.reset_filters() {
            log_error!(LogComponent::Presentation("Reset"), "Redraw after reset failed: {}", e);
        }
    })
}

/// A wired dashboard. Dropping it detaches every listener.
pub struct MountedDashboard<R = PlotlyRenderer, C = BrowserClock> {
    controller: Rc<DomController<R, C>>,
    listeners: Vec<EventListener>,
}

impl MountedDashboard {
    /// Mounts on the current document with Plotly and the browser clock.
    pub fn mount(config: &DashboardConfig) -> AppResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(UiError::DocumentUnavailable)?;
        Self::mount_with(
            &document,
            config,
            |elements| PlotlyRenderer::new(elements.chart.clone()),
            BrowserClock::new(config.locale.clone()),
        )
    }
}

impl<R, C> MountedDashboard<R, C>
where
    R: ChartRenderer + 'static,
    C: Clock + 'static,
{
    /// Resolves all elements, wires filters, panel toggle and reset, then draws once.
    ///
    /// A missing or mistyped element fails the mount before the page is touched.
    /// A failed first draw is logged and the mount is kept, so the next filter
    /// change or reset tries again.
    pub fn mount_with(
        document: &Document,
        config: &DashboardConfig,
        make_renderer: impl FnOnce(&DashboardElements) -> R,
        clock: C,
    ) -> AppResult<Self> {
        config.validate()?;
        let elements = DashboardElements::resolve(document, &config.elements)?;
        let renderer = make_renderer(&elements);
        let controller = Rc::new(DashboardController::new(
            DomDashboardView::new(elements.clone()),
            renderer,
            clock,
            config,
        )?);

        let redraw = {
            let controller = Rc::clone(&controller);
            move || {
                if let Err(e) = controller.draw() {
                    log_error!(LogComponent::Presentation("Filters"), "Redraw failed: {}", e);
                }
            }
        };

        let mut listeners = attach_filter_listeners(&elements.filters, redraw);
        listeners.push(attach_panel_toggle(&elements.toggle, &controller));
        listeners.push(attach_reset(&elements.reset, &controller));

        let mounted = Self { controller, listeners };
        if let Err(e) = mounted.controller.draw() {
            log_error!(LogComponent::Presentation("Mount"), "Initial draw failed: {}", e);
        }

        log_info!(
            LogComponent::Presentation("Mount"),
            "Dashboard mounted with {} listeners",
            mounted.listeners.len()
        );
        Ok(mounted)
    }

    pub fn redraw(&self) -> AppResult<()> {
        self.controller.draw()
    }

    pub fn panel_state(&self) -> PanelState {
        self.controller.panel_state()
    }

    pub fn redraw_count(&self) -> u64 {
        self.controller.redraw_count()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Detaches every listener.
    pub fn destroy(self) {
        log_info!(
            LogComponent::Presentation("Mount"),
            "Dashboard destroyed, removing {} listeners",
            self.listeners.len()
        );
    }
}

/// Holds at most one mounted dashboard.
///
/// Each successful mount gets a new generation number; handles keyed by an older
/// generation see [`UiError::DashboardDestroyed`].
pub struct DashboardSlot<R = PlotlyRenderer, C = BrowserClock> {
    active: RefCell<Option<MountedDashboard<R, C>>>,
    generation: Cell<u32>,
}

impl<R, C> DashboardSlot<R, C>
where
    R: ChartRenderer + 'static,
    C: Clock + 'static,
{
    pub fn new() -> Self {
        Self {
            active: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    /// Destroys the current dashboard, if any, then stores the result of `mount`.
    ///
    /// The previous dashboard is gone even when `mount` fails.
    pub fn replace(&self, mount: impl FnOnce() -> AppResult<MountedDashboard<R, C>>) -> AppResult<u32> {
        self.clear();
        let mounted = mount()?;
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        *self.active.borrow_mut() = Some(mounted);
        Ok(generation)
    }

    pub fn with_active<T>(&self, generation: u32, f: impl FnOnce(&MountedDashboard<R, C>) -> T) -> AppResult<T> {
        let active = self.active.borrow();
        match active.as_ref() {
            Some(mounted) if self.generation.get() == generation => Ok(f(mounted)),
            _ => Err(UiError::DashboardDestroyed.into()),
        }
    }

    /// Destroys the dashboard if it is still the one mounted as `generation`.
    pub fn release(&self, generation: u32) {
        if self.generation.get() == generation {
            self.clear();
        }
    }

    fn clear(&self) {
        let previous = self.active.borrow_mut().take();
        if let Some(mounted) = previous {
            mounted.destroy();
        }
    }
}

impl<R, C> Default for DashboardSlot<R, C>
where
    R: ChartRenderer + 'static,
    C: Clock + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
