use crate::domain::chart::entities::{
    Axis, Figure, Font, Layout, Legend, LineStyle, Margin, MarkerStyle, PlotConfig, Title, Trace,
};
use crate::domain::chart::value_objects::{ChartTheme, DashStyle, LegendOrientation, TraceMode, TraceType};
use crate::domain::revenue::MonthlySeries;

pub const X_AXIS_TITLE: &str = "Created Day of Month";
pub const Y_AXIS_TITLE: &str = "Cumulative Net Revenue";

/// Maps a [`MonthlySeries`] onto the target/actual/projection figure.
#[derive(Debug, Clone)]
pub struct FigureBuilder {
    theme: ChartTheme,
    currency_prefix: String,
    height: u32,
}

impl FigureBuilder {
    pub fn new(currency_prefix: impl Into<String>, height: u32) -> Self {
        Self {
            theme: ChartTheme::default(),
            currency_prefix: currency_prefix.into(),
            height,
        }
    }

    pub fn build(&self, series: &MonthlySeries) -> Figure {
        Figure {
            data: self.traces(series),
            layout: self.layout(),
            config: PlotConfig::default(),
        }
    }

    /// Actual (solid, markers), target (dash), projection (dot), in that order.
    pub fn traces(&self, series: &MonthlySeries) -> Vec<Trace> {
        vec![
            Trace {
                trace_type: TraceType::Scatter,
                mode: TraceMode::LinesAndMarkers,
                name: "Actual (MTD)".to_string(),
                x: series.x.clone(),
                y: series.actual_y.clone(),
                line: LineStyle { dash: None, width: 3 },
                marker: Some(MarkerStyle { size: 4 }),
                hovertemplate: self.hover_template("Actual"),
            },
            Trace {
                trace_type: TraceType::Scatter,
                mode: TraceMode::Lines,
                name: "Target (Month)".to_string(),
                x: series.x.clone(),
                y: series.target_y.iter().copied().map(Some).collect(),
                line: LineStyle { dash: Some(DashStyle::Dash), width: 2 },
                marker: None,
                hovertemplate: self.hover_template("Target"),
            },
            Trace {
                trace_type: TraceType::Scatter,
                mode: TraceMode::Lines,
                name: "Projection (Run-rate)".to_string(),
                x: series.x.clone(),
                y: series.proj_y.iter().copied().map(Some).collect(),
                line: LineStyle { dash: Some(DashStyle::Dot), width: 2 },
                marker: None,
                hovertemplate: self.hover_template("Projection"),
            },
        ]
    }

    pub fn layout(&self) -> Layout {
        let font = |color: &str| Font { color: color.to_string() };
        let axis = |title: &str| Axis {
            title: title.to_string(),
            gridcolor: self.theme.grid.to_string(),
            tickfont: font(self.theme.muted),
            titlefont: font(self.theme.muted),
            tickprefix: None,
            separatethousands: None,
        };

        Layout {
            title: Title { text: String::new(), font: font(self.theme.text) },
            paper_bgcolor: self.theme.background.to_string(),
            plot_bgcolor: self.theme.background.to_string(),
            margin: Margin { l: 60, r: 20, t: 10, b: 40 },
            xaxis: axis(X_AXIS_TITLE),
            yaxis: Axis {
                tickprefix: Some(format!("{} ", self.currency_prefix)),
                separatethousands: Some(true),
                ..axis(Y_AXIS_TITLE)
            },
            legend: Legend {
                orientation: LegendOrientation::Horizontal,
                y: 1.12,
                x: 0.0,
                font: font(self.theme.text),
            },
            height: self.height,
        }
    }

    /// Plotly hover template showing the day and a whole-currency amount.
    pub fn hover_template(&self, series_name: &str) -> String {
        format!(
            "Day %{{x}}<br>{}<br>{} %{{y:,.0f}}<extra></extra>",
            series_name, self.currency_prefix
        )
    }
}

impl Default for FigureBuilder {
    fn default() -> Self {
        Self::new("S$", 420)
    }
}
