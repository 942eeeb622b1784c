use super::InputWiring;
use crate::keys::{key_action, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    match key_action(&ev.key()) {
        Some(KeyAction::ClosePanel) => w.panel.close(),
        Some(KeyAction::Scroll(dv)) => {
            w.map.borrow_mut().impulse(dv);
            ev.prevent_default();
        }
        None => {}
    }
}

pub fn wire_global_keydown(w: &InputWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
