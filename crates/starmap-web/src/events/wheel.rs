use super::InputWiring;
use crate::constants::PANEL_CLASS;
use crate::dom;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replace native page scrolling with camera scrolling. Wheel events over an
/// info panel keep their default so long descriptions stay scrollable.
pub fn wire_wheel(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let selector = format!(".{}", PANEL_CLASS);
    dom::add_active_listener(&window, "wheel", move |ev: web::WheelEvent| {
        let over_panel = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten())
            .is_some();
        if over_panel {
            return;
        }
        ev.prevent_default();
        let mut map = w.map.borrow_mut();
        let delta = input::wheel_delta_px(&ev, map.viewport.height);
        map.wheel(delta);
    });
}
