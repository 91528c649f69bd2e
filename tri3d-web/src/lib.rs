/// TRI3D Web - WASM entry point for the rotating triangle
///
/// Binds the core renderer to a WebGL2 canvas, drives it from
/// `requestAnimationFrame` and wires keyboard, click and resize events.

pub mod backend;
pub mod context;
pub mod fullscreen;
pub mod runtime;

use tri3d_core::AppConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use backend::WebGlBackend;
pub use context::RenderContext;
pub use runtime::{FrameScheduler, WebApp};

/// Shows a blocking alert; logs instead when no window is available.
pub fn alert(message: &str) {
    let shown = web_sys::window().map(|window| window.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::error!("could not show alert: {message}");
    }
}

fn init(config: AppConfig) {
    if let Err(e) = runtime::run(config) {
        log::error!("initialization failed: {e}");
        alert(&e.to_string());
    }
}

// Runs as soon as the module is instantiated; setup waits for page load
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let config = AppConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let loaded = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);

    if loaded {
        init(config);
    } else {
        let on_load = Closure::once(move || init(config));
        window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
        on_load.forget();
    }

    Ok(())
}
