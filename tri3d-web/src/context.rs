/// Canvas lookup and WebGL context acquisition
use tri3d_core::{InitError, Size};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use crate::backend::WebGlBackend;

/// The drawing surface and the context created from it
pub struct RenderContext {
    pub canvas: HtmlCanvasElement,
    pub gl: WebGl2RenderingContext,
}

impl RenderContext {
    /// Finds the canvas matching `selector` and asks it for a WebGL2 context.
    ///
    /// There is no fallback: a missing canvas or context ends the session.
    pub fn acquire(selector: &str) -> Result<Self, InitError> {
        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(selector).ok().flatten())
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| InitError::SurfaceNotFound(selector.to_string()))?;

        let gl = canvas
            .get_context("webgl2")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<WebGl2RenderingContext>().ok())
            .ok_or(InitError::ContextUnavailable)?;

        Ok(Self { canvas, gl })
    }

    /// Canvas size at acquisition; becomes the windowed baseline
    pub fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    pub fn into_parts(self) -> (HtmlCanvasElement, WebGlBackend) {
        (self.canvas, WebGlBackend::new(self.gl))
    }
}
