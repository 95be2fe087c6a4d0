//! Seams between the dashboard controller and the browser.

use crate::domain::chart::Figure;
use crate::domain::errors::AppResult;
use crate::domain::revenue::CalendarDate;

/// Page surface the controller writes to.
pub trait DashboardView {
    fn set_as_of_text(&self, text: &str);
    fn set_panel_open(&self, open: bool);
    fn set_toggle_label(&self, label: &str);
    /// Select the first option of every filter control.
    fn reset_filters(&self);
}

/// External chart library: create or replace the plot in its container.
pub trait ChartRenderer {
    fn render(&self, figure: &Figure) -> AppResult<()>;
}

pub trait Clock {
    fn today(&self) -> AppResult<CalendarDate>;

    /// Long, human-readable form of `date` for the "as of" line.
    fn format_long(&self, date: CalendarDate) -> String {
        date.long_label()
    }
}

impl<T: DashboardView + ?Sized> DashboardView for std::rc::Rc<T> {
    fn set_as_of_text(&self, text: &str) {
        (**self).set_as_of_text(text)
    }

    fn set_panel_open(&self, open: bool) {
        (**self).set_panel_open(open)
    }

    fn set_toggle_label(&self, label: &str) {
        (**self).set_toggle_label(label)
    }

    fn reset_filters(&self) {
        (**self).reset_filters()
    }
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for std::rc::Rc<T> {
    fn render(&self, figure: &Figure) -> AppResult<()> {
        (**self).render(figure)
    }
}

impl<T: Clock + ?Sized> Clock for std::rc::Rc<T> {
    fn today(&self) -> AppResult<CalendarDate> {
        (**self).today()
    }

    fn format_long(&self, date: CalendarDate) -> String {
        (**self).format_long(date)
    }
}
