/// Frame loop and DOM event wiring around the core `App`
use std::cell::RefCell;
use std::rc::Rc;

use tri3d_core::{App, AppConfig, AppEvent, HostCommand, InitError, ShaderSources, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

use crate::backend::WebGlBackend;
use crate::context::RenderContext;
use crate::fullscreen;

/// Application plus the canvas it resizes
pub struct WebApp {
    app: App<WebGlBackend>,
    canvas: HtmlCanvasElement,
}

type Shared = Rc<RefCell<WebApp>>;
type FrameCallback = Closure<dyn FnMut(f64)>;

/// Acquires the context, builds the pipeline, then starts the frame loop
/// and registers listeners. Nothing is scheduled if setup fails.
pub fn run(config: AppConfig) -> Result<(), InitError> {
    let window = web_sys::window().ok_or_else(|| InitError::Host("no window".to_string()))?;

    let context = RenderContext::acquire(&config.canvas_selector)?;
    let initial = context.size();
    let (canvas, backend) = context.into_parts();

    let app = App::init(backend, initial, ShaderSources::default(), config)?;
    let shared = Rc::new(RefCell::new(WebApp { app, canvas }));

    FrameScheduler::start(&window, shared.clone()).map_err(host_error)?;
    register_listeners(&window, shared).map_err(host_error)?;

    log::info!("render loop started");
    Ok(())
}

/// Routes one event through the app and carries out what it asks for.
///
/// The borrow ends before any host command runs, so callbacks triggered
/// by that command can dispatch again.
fn dispatch(shared: &Shared, event: AppEvent) {
    let (command, canvas) = {
        let mut state = shared.borrow_mut();
        let command = state.app.handle(event);
        if let AppEvent::Resize { .. } | AppEvent::FullscreenChanged { .. } = event {
            state.sync_canvas();
        }
        (command, state.canvas.clone())
    };

    match command {
        HostCommand::None => {}
        HostCommand::RequestFullscreen => {
            let shared = shared.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fullscreen::request_fullscreen(canvas).await {
                    Ok(()) => log::debug!("entered fullscreen"),
                    Err(e) => {
                        log::warn!("{e}");
                        crate::alert(&e.to_string());
                        dispatch(&shared, AppEvent::FullscreenChanged { active: false });
                    }
                }
            });
        }
        HostCommand::ExitFullscreen => fullscreen::exit_fullscreen(),
    }
}

impl WebApp {
    fn sync_canvas(&self) {
        let size = self.app.viewport().current();
        if self.canvas.width() != size.width || self.canvas.height() != size.height {
            self.canvas.set_width(size.width);
            self.canvas.set_height(size.height);
        }
    }
}

/// Drives `AppEvent::Frame` from `requestAnimationFrame`.
///
/// Runs until the page goes away; there is no pause or frame cap.
pub struct FrameScheduler;

impl FrameScheduler {
    pub fn start(window: &Window, shared: Shared) -> Result<(), JsValue> {
        // The callback re-registers itself, so it has to reach its own
        // `Closure`; the Rc cycle keeps it alive for the page's lifetime.
        let f: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        let next_window = window.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            dispatch(&shared, AppEvent::Frame { timestamp_ms });

            if let Some(callback) = f.borrow().as_ref() {
                if let Err(e) = next_window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    log::error!("failed to schedule frame: {e:?}");
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = g.borrow();
        let callback = first
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(())
    }
}

fn register_listeners(window: &Window, shared: Shared) -> Result<(), JsValue> {
    {
        let shared = shared.clone();
        let keydown = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            dispatch(&shared, AppEvent::KeyDown { key_code: ev.key_code() });
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        keydown.forget();
    }

    {
        let shared = shared.clone();
        let click = Closure::wrap(Box::new(move || {
            dispatch(&shared, AppEvent::Click);
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    {
        let shared = shared.clone();
        let resize_window = window.clone();
        let resize = Closure::wrap(Box::new(move || {
            let inner = inner_size(&resize_window);
            dispatch(
                &shared,
                AppEvent::Resize {
                    inner_width: inner.width,
                    inner_height: inner.height,
                },
            );
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        resize.forget();
    }

    if let Some(document) = window.document() {
        let change = Closure::wrap(Box::new(move || {
            dispatch(
                &shared,
                AppEvent::FullscreenChanged {
                    active: fullscreen::is_fullscreen(),
                },
            );
        }) as Box<dyn FnMut()>);
        document.add_event_listener_with_callback("fullscreenchange", change.as_ref().unchecked_ref())?;
        change.forget();
    }

    Ok(())
}

fn inner_size(window: &Window) -> Size {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(to_pixels(width), to_pixels(height))
}

/// CSS pixels to a canvas dimension, saturating at what GL accepts;
/// negative or NaN becomes zero
fn to_pixels(value: f64) -> u32 {
    if value > 0.0 {
        value.min(i32::MAX as f64) as u32
    } else {
        0
    }
}

fn host_error(err: JsValue) -> InitError {
    InitError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels() {
        assert_eq!(to_pixels(1920.0), 1920);
        assert_eq!(to_pixels(799.6), 799);
        assert_eq!(to_pixels(-4.0), 0);
        assert_eq!(to_pixels(f64::NAN), 0);
        assert_eq!(to_pixels(1e12), i32::MAX as u32);
        assert_eq!(to_pixels(f64::INFINITY), i32::MAX as u32);
    }
}
