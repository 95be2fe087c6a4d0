use serde::Serialize;

/// Three day-aligned cumulative series for one calendar month.
///
/// `x` runs `1..=days_in_month`. `actual_y` holds a value only for days that
/// have been observed (up to and including the current day).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub label: String,
    pub x: Vec<u32>,
    pub actual_y: Vec<Option<f64>>,
    pub target_y: Vec<f64>,
    pub proj_y: Vec<f64>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of observed days.
    pub fn observed_days(&self) -> usize {
        self.actual_y.iter().take_while(|v| v.is_some()).count()
    }

    /// Projected month-end total at the current run rate.
    pub fn projected_total(&self) -> Option<f64> {
        self.proj_y.last().copied()
    }
}
