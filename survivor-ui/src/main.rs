mod app;
mod bridge;
mod store;

pub mod components {
    pub mod header;
    pub mod infection_chart;
    pub mod intake_form;
    pub mod survivor_grid;
}

use leptos::*;
use survivor_model::config::{API_BASE_KEY, LOG_LEVEL_KEY, PANELS_KEY};
use survivor_model::UiConfig;

// Values are baked in when the bundle is built (e.g. by `trunk build`).
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_KEY => option_env!("SURVIVORS_API_BASE"),
        PANELS_KEY => option_env!("SURVIVORS_UI_PANELS"),
        LOG_LEVEL_KEY => option_env!("SURVIVORS_UI_LOG"),
        _ => None,
    };
    value.map(String::from)
}

fn main() {
    console_error_panic_hook::set_once();
    // Start verbose so config warnings show, then narrow to the configured level.
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!(
            "console logger unavailable: {e}"
        )));
    }
    let config = UiConfig::from_lookup(build_env);
    log::set_max_level(config.log_level.to_level_filter());
    log::info!(
        "survivors api at {}, panels {:?}",
        config.api.base_url,
        config.panels
    );

    mount_to_body(move || view! { <app::App config=config/> });
}
