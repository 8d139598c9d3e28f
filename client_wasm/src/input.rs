//! Keyboard and click listeners

use crate::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, KeyboardEvent};

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(|e| e.key())
}

/// w/s drive the left paddle; clicking the play-again screen restarts
pub fn install(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    {
        let app = app.clone();
        listen(document, "keydown", move |event| {
            if let Some(key) = key_of(&event) {
                app.borrow_mut().game.key_down(&key);
            }
        })?;
    }

    {
        let app = app.clone();
        listen(document, "keyup", move |event| {
            if let Some(key) = key_of(&event) {
                app.borrow_mut().game.key_up(&key);
            }
        })?;
    }

    let play_again = app.borrow().overlay.play_again().clone();
    listen(&play_again, "click", move |_event| {
        app.borrow_mut().restart();
    })?;

    Ok(())
}
