//! Browser host for the pong match
//!
//! Draws onto the `#game` canvas with the 2D context and runs one core frame
//! per `requestAnimationFrame` callback.

mod overlay;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod input;

pub use overlay::OverlayView;

#[cfg(target_arch = "wasm32")]
pub use app::*;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::canvas::CanvasSurface;
    use crate::input;
    use crate::overlay::{OverlayElements, OverlayView};
    use game_core::{Config, Params, PongMatch};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, HtmlCanvasElement};

    pub struct App {
        pub(crate) game: PongMatch,
        pub(crate) overlay: OverlayElements,
        surface: CanvasSurface,
        view: OverlayView,
        last_time: Option<f64>,
    }

    impl App {
        fn frame(&mut self, timestamp: f64) {
            // rAF timestamps are in milliseconds
            let dt = match self.last_time {
                Some(prev) => ((timestamp - prev) / 1000.0) as f32,
                None => Params::FRAME_DT,
            };
            self.last_time = Some(timestamp);

            let events = self.game.tick(dt);
            if self.view.on_frame(events) {
                if let Some(winner) = events.winner {
                    console::log_1(&format!("Game over, {winner:?} wins").into());
                }
                self.overlay.apply(&self.view);
            }

            self.game.render_to(&mut self.surface);
        }

        pub(crate) fn restart(&mut self) {
            if self.game.restart() {
                self.view.on_restart();
                self.overlay.apply(&self.view);
                console::log_1(&"Starting again".into());
            }
        }
    }

    thread_local! {
        static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |timestamp: f64| {
            app.borrow_mut().frame(timestamp);
            request_animation_frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let canvas = document
            .get_element_by_id("game")
            .ok_or_else(|| JsValue::from_str("Missing canvas #game"))?
            .dyn_into::<HtmlCanvasElement>()?;

        let mut config = Config::new();
        config.width = canvas.width() as f32;
        config.height = canvas.height() as f32;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let view = OverlayView::new();
        let overlay = OverlayElements::find(&document)?;
        overlay.apply(&view);

        let app = Rc::new(RefCell::new(App {
            game: PongMatch::new(config, seed),
            overlay,
            surface: CanvasSurface::new(&canvas)?,
            view,
            last_time: None,
        }));

        input::install(&document, app.clone())?;
        APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

        console::log_1(&format!("Pong started with seed {seed}").into());
        request_animation_frame(app);
        Ok(())
    }

    /// Restart from script, e.g. an inline `onclick` on the play-again screen
    #[wasm_bindgen(js_name = startAgain)]
    pub fn start_again() {
        APP.with(|slot| {
            if let Some(app) = slot.borrow().as_ref() {
                app.borrow_mut().restart();
            }
        });
    }
}
