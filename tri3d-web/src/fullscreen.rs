/// Fullscreen requests as typed async tasks
use js_sys::{Function, Promise, Reflect};
use tri3d_core::FullscreenError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlCanvasElement;

/// Asks the browser to put `canvas` in fullscreen.
///
/// The browser settles the promise after the user-activation checks, so
/// the result only arrives once control has returned to the event loop.
pub async fn request_fullscreen(canvas: HtmlCanvasElement) -> Result<(), FullscreenError> {
    // web-sys drops the promise returned by requestFullscreen, so call it by hand
    let method = Reflect::get(&canvas, &JsValue::from_str("requestFullscreen"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(FullscreenError::Unsupported)?;

    let returned = method.call0(&canvas).map_err(rejection)?;
    if let Ok(promise) = returned.dyn_into::<Promise>() {
        JsFuture::from(promise).await.map_err(rejection)?;
    }
    Ok(())
}

/// Whether the document currently shows an element fullscreen
pub fn is_fullscreen() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.fullscreen_element())
        .is_some()
}

pub fn exit_fullscreen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else {
        log::debug!("exit requested while not fullscreen");
    }
}

fn rejection(err: JsValue) -> FullscreenError {
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => FullscreenError::Rejected {
            name: String::from(error.name()),
            message: String::from(error.message()),
        },
        None => FullscreenError::Rejected {
            name: "Error".to_string(),
            message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        },
    }
}
