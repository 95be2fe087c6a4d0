use std::cell::Cell;

use derive_more::Display;

use crate::application::ports::{ChartRenderer, Clock, DashboardView};
use crate::config::DashboardConfig;
use crate::domain::chart::FigureBuilder;
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::revenue::MockSeriesGenerator;
use crate::log_debug;

/// Open/closed state of the collapsible filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PanelState {
    #[display(fmt = "open")]
    Open,
    #[display(fmt = "closed")]
    Closed,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    /// Text for the toggle button while the panel is in this state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            PanelState::Open => "Hide filters",
            PanelState::Closed => "Show filters",
        }
    }
}

/// Drives the KPI chart: redraws on demand and owns the panel state.
///
/// Filters are wired to redraws but do not influence the generated series.
pub struct DashboardController<V, R, C> {
    view: V,
    renderer: R,
    clock: C,
    generator: MockSeriesGenerator,
    figures: FigureBuilder,
    panel: Cell<PanelState>,
    redraws: Cell<u64>,
}

impl<V, R, C> DashboardController<V, R, C>
where
    V: DashboardView,
    R: ChartRenderer,
    C: Clock,
{
    pub fn new(view: V, renderer: R, clock: C, config: &DashboardConfig) -> AppResult<Self> {
        Ok(Self {
            view,
            renderer,
            clock,
            generator: config.generator()?,
            figures: config.figure_builder(),
            panel: Cell::new(PanelState::Closed),
            redraws: Cell::new(0),
        })
    }

    /// Closes the panel without touching the toggle label.
    pub fn init_panel(&self) {
        self.panel.set(PanelState::Closed);
        self.view.set_panel_open(false);
    }

    pub fn toggle_panel(&self) -> PanelState {
        let next = self.panel.get().toggled();
        self.panel.set(next);
        self.view.set_panel_open(next.is_open());
        self.view.set_toggle_label(next.toggle_label());
        log_debug!(LogComponent::Application("Dashboard"), "Filter panel {}", next);
        next
    }

    /// Puts every filter back on its first option, then redraws once.
    pub fn reset_filters(&self) -> AppResult<()> {
        self.view.reset_filters();
        self.draw()
    }

    pub fn draw(&self) -> AppResult<()> {
        let today = self.clock.today()?;
        self.view.set_as_of_text(&format!("As of {}", self.clock.format_long(today)));

        let series = self.generator.generate(today);
        let figure = self.figures.build(&series);
        self.renderer.render(&figure)?;

        let count = self.redraws.get() + 1;
        self.redraws.set(count);
        log_debug!(
            LogComponent::Application("Dashboard"),
            "Redraw #{} for {}: {}/{} days observed, projected {:.0}",
            count,
            series.label,
            series.observed_days(),
            series.len(),
            series.projected_total().unwrap_or_default()
        );
        Ok(())
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel.get()
    }

    pub fn redraw_count(&self) -> u64 {
        self.redraws.get()
    }
}
