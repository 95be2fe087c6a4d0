use wasm_bindgen::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::errors::{AppResult, ConfigurationError, UiError};
use crate::domain::logging::LogComponent;
use crate::presentation::listeners::{DashboardSlot, MountedDashboard};
use crate::{log_error, log_info};

thread_local! {
    /// The one dashboard wired to this page, whether mounted by the start hook or by JS.
    static ACTIVE: DashboardSlot = DashboardSlot::new();
}

/// Handle returned to JavaScript by `mountDashboard`.
///
/// Goes stale once another mount replaces the dashboard it refers to.
#[wasm_bindgen]
pub struct DashboardHandle {
    generation: u32,
}

#[wasm_bindgen]
impl DashboardHandle {
    pub fn redraw(&self) -> Result<(), JsValue> {
        self.with_mounted(|m| m.redraw())??;
        Ok(())
    }

    #[wasm_bindgen(js_name = isPanelOpen)]
    pub fn is_panel_open(&self) -> bool {
        self.with_mounted(|m| m.panel_state().is_open()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = redrawCount)]
    pub fn redraw_count(&self) -> u32 {
        let count = self.with_mounted(|m| m.redraw_count()).unwrap_or(0);
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Detaches all listeners. A no-op once this handle is stale.
    pub fn destroy(&self) {
        ACTIVE.with(|slot| slot.release(self.generation));
    }
}

impl DashboardHandle {
    fn with_mounted<T>(&self, f: impl FnOnce(&MountedDashboard) -> T) -> AppResult<T> {
        ACTIVE.with(|slot| slot.with_active(self.generation, f))
    }
}

/// Mounts the dashboard, replacing whichever one is currently wired.
///
/// `config` is an optional plain object; omitted fields keep their defaults.
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard(config: JsValue) -> Result<DashboardHandle, JsValue> {
    let config = parse_config(&config)?;
    let generation = ACTIVE.with(|slot| slot.replace(|| MountedDashboard::mount(&config)))?;
    Ok(DashboardHandle { generation })
}

fn parse_config(value: &JsValue) -> AppResult<DashboardConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(DashboardConfig::default());
    }
    let json = js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .ok_or_else(|| ConfigurationError::InvalidConfig("config is not JSON-serializable".to_string()))?;
    DashboardConfig::from_json(&json)
}

/// Mounts with the default config and keeps the result for the page lifetime.
pub(crate) fn auto_mount() {
    let mounted = ACTIVE.with(|slot| slot.replace(|| MountedDashboard::mount(&DashboardConfig::default())));
    if let Err(e) = mounted {
        log_error!(LogComponent::Presentation("Mount"), "Dashboard not mounted: {}", e);
    }
}

/// Runs `f` once the DOM is parsed.
pub(crate) fn on_document_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log_error!(LogComponent::Presentation("Mount"), "{}", UiError::DocumentUnavailable);
        return;
    };
    if document.ready_state() == "loading" {
        log_info!(LogComponent::Presentation("Mount"), "Waiting for DOMContentLoaded");
        gloo::events::EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}
