use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumIter};

/// Value Object - Plotly trace type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    #[display(fmt = "scatter")]
    #[strum(serialize = "scatter")]
    Scatter,
}

/// Value Object - how a scatter trace draws its points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter, Serialize)]
pub enum TraceMode {
    #[display(fmt = "lines")]
    #[strum(serialize = "lines")]
    #[serde(rename = "lines")]
    Lines,
    #[display(fmt = "lines+markers")]
    #[strum(serialize = "lines+markers")]
    #[serde(rename = "lines+markers")]
    LinesAndMarkers,
}

/// Value Object - line dash pattern (solid is the Plotly default, left unset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    #[display(fmt = "dash")]
    #[strum(serialize = "dash")]
    Dash,
    #[display(fmt = "dot")]
    #[strum(serialize = "dot")]
    Dot,
}

/// Value Object - legend layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegendOrientation {
    #[serde(rename = "h")]
    Horizontal,
}

/// Dashboard dark theme colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTheme {
    pub text: &'static str,
    pub muted: &'static str,
    pub grid: &'static str,
    pub background: &'static str,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            text: "#e6eaf2",
            muted: "#b9c6dd",
            grid: "rgba(255,255,255,.07)",
            background: "rgba(0,0,0,0)",
        }
    }
}
