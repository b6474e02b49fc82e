//! Browser platform: DOM canvas, `requestAnimationFrame`, window key listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, Window};

use super::{FrameCallback, KeyHandler, Platform};
use crate::error::GameError;
use crate::input::KeyEvent;
use crate::surface::{CanvasSurface, Dimensions};

pub struct BrowserPlatform {
    window: Window,
    document: Document,
}

impl BrowserPlatform {
    /// Bind to the global `window` and its `document`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoWindow`] or [`GameError::NoDocument`] outside a
    /// browser main thread.
    pub fn new() -> Result<Self, GameError> {
        let window = web_sys::window().ok_or(GameError::NoWindow)?;
        let document = window.document().ok_or(GameError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Platform for BrowserPlatform {
    type Surface = CanvasSurface;

    fn create_surface(&self, dimensions: Dimensions) -> Result<CanvasSurface, GameError> {
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GameError::Js("created element is not a canvas".into()))?;
        let body = self.document.body().ok_or(GameError::NoBody)?;
        body.append_child(&canvas)?;
        canvas.set_width(dimensions.width);
        canvas.set_height(dimensions.height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or(GameError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::NoContext)?;

        log::debug!("canvas attached: {}x{}", dimensions.width, dimensions.height);
        Ok(CanvasSurface::new(canvas, ctx))
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<(), GameError> {
        // Freed by wasm-bindgen after its single invocation.
        let cb = Closure::once_into_js(move |_ts: f64| callback());
        self.window.request_animation_frame(cb.unchecked_ref())?;
        Ok(())
    }

    /// `preventDefault` is called only for events that matched a binding, so
    /// unbound keys keep their browser behaviour.
    fn listen_keys(&self, handler: KeyHandler) -> Result<(), GameError> {
        let cb = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            let event = match ev.type_().as_str() {
                "keydown" => KeyEvent::down(ev.key()),
                "keyup" => KeyEvent::up(ev.key()),
                _ => return,
            };
            if handler(&event) {
                ev.prevent_default();
            }
        });

        // Non-passive so `preventDefault` is honoured.
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        for kind in ["keydown", "keyup"] {
            self.window.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                cb.as_ref().unchecked_ref(),
                &opts,
            )?;
        }

        // Listeners live until the page is torn down.
        cb.forget();
        Ok(())
    }
}
