use crate::domain::revenue::{ActualFactor, CalendarDate, MonthlySeries, MonthlyTarget};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Domain service producing deterministic mock revenue for a month.
///
/// The output depends only on the date and the two constants; calling it twice
/// with the same date yields identical series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockSeriesGenerator {
    monthly_target: MonthlyTarget,
    actual_factor: ActualFactor,
}

impl MockSeriesGenerator {
    pub fn new(monthly_target: MonthlyTarget, actual_factor: ActualFactor) -> Self {
        Self { monthly_target, actual_factor }
    }

    pub fn monthly_target(&self) -> MonthlyTarget {
        self.monthly_target
    }

    pub fn actual_factor(&self) -> ActualFactor {
        self.actual_factor
    }

    pub fn generate(&self, today: CalendarDate) -> MonthlySeries {
        let dim = today.days_in_month();
        let current_day = today.day();

        let per_day_target = self.monthly_target.value() / dim as f64;
        let per_day_actual = per_day_target * self.actual_factor.value();

        let x: Vec<u32> = (1..=dim).collect();
        let actual_y = x
            .iter()
            .map(|&d| (d <= current_day).then(|| per_day_actual * d as f64))
            .collect();
        let target_y = x.iter().map(|&d| per_day_target * d as f64).collect();
        let proj_y = x.iter().map(|&d| per_day_actual * d as f64).collect();

        log_debug!(
            LogComponent::Domain("MockSeries"),
            "Generated {} days for {} (observed through day {})",
            dim,
            today.month_label(),
            current_day
        );

        MonthlySeries {
            label: today.month_label(),
            x,
            actual_y,
            target_y,
            proj_y,
        }
    }
}

impl Default for MockSeriesGenerator {
    fn default() -> Self {
        Self::new(MonthlyTarget::default(), ActualFactor::default())
    }
}
