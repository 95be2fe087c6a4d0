use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{DashboardController, PanelState};
pub use config::DashboardConfig;
pub use domain::revenue::{CalendarDate, MockSeriesGenerator, MonthlySeries};

/// Installs logging and mounts the dashboard once the page is ready.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::for_build());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    log_info!(LogComponent::Presentation("Initialize"), "Revenue KPI dashboard module loaded");

    presentation::wasm_api::on_document_ready(presentation::wasm_api::auto_mount);
}
