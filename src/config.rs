use serde::Deserialize;

use crate::domain::chart::FigureBuilder;
use crate::domain::errors::{AppResult, ConfigurationError};
use crate::domain::revenue::{
    ActualFactor, DEFAULT_ACTUAL_FACTOR, DEFAULT_MONTHLY_TARGET, MockSeriesGenerator, MonthlyTarget,
};

/// Ids of the filter `<select>` controls, in page order.
pub const DEFAULT_FILTER_IDS: [&str; 9] = [
    "f_country",
    "f_partnerCat",
    "f_agreement",
    "f_industry",
    "f_cpm",
    "f_product",
    "f_lead",
    "f_mkt",
    "f_age",
];

/// Ids of the page elements the dashboard binds to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub chart: String,
    pub as_of: String,
    pub filters: Vec<String>,
    pub filters_panel: String,
    pub toggle_filters: String,
    pub reset: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            chart: "chart".to_string(),
            as_of: "asOf".to_string(),
            filters: DEFAULT_FILTER_IDS.iter().map(|id| id.to_string()).collect(),
            filters_panel: "filtersBlock".to_string(),
            toggle_filters: "toggleFilters".to_string(),
            reset: "resetBtn".to_string(),
        }
    }
}

/// Dashboard settings. Every field is optional when parsed from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub elements: ElementIds,
    pub monthly_target: f64,
    pub actual_factor: f64,
    pub currency_prefix: String,
    pub locale: String,
    pub chart_height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            monthly_target: DEFAULT_MONTHLY_TARGET,
            actual_factor: DEFAULT_ACTUAL_FACTOR,
            currency_prefix: "S$".to_string(),
            locale: "en-SG".to_string(),
            chart_height: 420,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the constants and the element id set.
    pub fn validate(&self) -> AppResult<()> {
        self.generator()?;
        if self.elements.filters.is_empty() {
            return Err(ConfigurationError::InvalidConfig("no filter ids configured".to_string()).into());
        }
        if self.chart_height == 0 {
            return Err(ConfigurationError::InvalidConfig("chart height must be positive".to_string()).into());
        }
        Ok(())
    }

    pub fn generator(&self) -> AppResult<MockSeriesGenerator> {
        Ok(MockSeriesGenerator::new(
            MonthlyTarget::new(self.monthly_target)?,
            ActualFactor::new(self.actual_factor)?,
        ))
    }

    pub fn figure_builder(&self) -> FigureBuilder {
        FigureBuilder::new(self.currency_prefix.clone(), self.chart_height)
    }
}
