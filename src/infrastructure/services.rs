//! Browser-backed implementations of the logging, time and clock seams.

use js_sys::Date;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::application::ports::Clock;
use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, TimeProvider};
use crate::domain::revenue::CalendarDate;
use crate::infrastructure::plotly::to_js_value;
use crate::log_warn;

/// Logger writing formatted lines to the browser console.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    /// Debug builds log at DEBUG, release builds at INFO.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::new_development()
        } else {
            Self::new_production()
        }
    }

    fn format_log_entry(&self, entry: &LogEntry) -> String {
        format!("[{}] {}", BrowserTimeProvider.format_timestamp(entry.timestamp), entry)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = JsValue::from_str(&self.format_log_entry(&entry));
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// Millisecond timestamps from `Date.now()`.
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// `Intl.DateTimeFormat` options for a long day-month-year date.
#[derive(Serialize)]
struct LongDateOptions {
    year: &'static str,
    month: &'static str,
    day: &'static str,
}

const LONG_DATE: LongDateOptions = LongDateOptions { year: "numeric", month: "long", day: "numeric" };

/// Local calendar date from the browser clock, formatted with `Intl`.
pub struct BrowserClock {
    locale: String,
}

impl BrowserClock {
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }

    fn localized(&self, date: CalendarDate) -> AppResult<String> {
        let options = to_js_value(&LONG_DATE)?;
        let js_date = Date::new_with_year_month_day(date.year() as u32, date.month() as i32 - 1, date.day() as i32);
        Ok(js_date.to_locale_date_string(&self.locale, &options).into())
    }
}

impl Clock for BrowserClock {
    fn today(&self) -> AppResult<CalendarDate> {
        let now = Date::new_0();
        let (year, month, day) = (now.get_full_year() as i32, now.get_month() + 1, now.get_date());
        Ok(CalendarDate::new(year, month, day)?)
    }

    fn format_long(&self, date: CalendarDate) -> String {
        match self.localized(date) {
            Ok(formatted) if !formatted.is_empty() => formatted,
            Ok(_) => {
                log_warn!(LogComponent::Infrastructure("Clock"), "Intl returned no text for {}", date);
                date.long_label()
            }
            Err(e) => {
                log_warn!(LogComponent::Infrastructure("Clock"), "Intl unavailable for {}: {}", date, e);
                date.long_label()
            }
        }
    }
}
