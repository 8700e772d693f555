pub mod settings_panel;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use settings_panel::{PanelConfig, SettingsPanel};

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Mount the settings panel into the element with id `host_id`.
///
/// Called once by the hosting page after the module is loaded. The host may
/// carry a `data-panel-config` JSON attribute to override panel defaults.
#[wasm_bindgen]
pub fn mount_settings_panel(host_id: &str) -> Result<(), JsValue> {
    let host = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(host_id))
        .ok_or_else(|| JsValue::from_str(&format!("Settings panel host #{} not found", host_id)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("Settings panel host #{} is not an HTML element", host_id)))?;

    let config = PanelConfig::from_element(&host);
    log::info!("Mounting settings panel into #{} ({})", host_id, config.endpoint_url());

    leptos::mount::mount_to(host, move || view! { <SettingsPanel config=config /> }).forget();
    Ok(())
}
