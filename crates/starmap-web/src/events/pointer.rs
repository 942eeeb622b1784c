use super::InputWiring;
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Open the panel of the POI under `px`, or close any open panel on a miss.
pub fn select_at(w: &InputWiring, px: Vec2) {
    let hit = w.map.borrow().pick(px);
    match hit {
        Some(hit) => {
            if let Some(poi) = w.map.borrow().registry.get(hit.poi) {
                log::info!("[select] {} at {:.1}", poi.name, hit.distance);
            }
            w.panel.request(hit.poi);
        }
        None => w.panel.close(),
    }
}

pub fn wire_pointer_handlers(w: &InputWiring) {
    wire_pointermove(w);
    wire_pointerleave(w);
    wire_click(w);
}

fn set_cursor(canvas: &web::HtmlCanvasElement, pointer: bool) {
    _ = canvas
        .style()
        .set_property("cursor", if pointer { "pointer" } else { "default" });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Touch hover is meaningless; taps are handled by the touch handlers.
        if ev.pointer_type() != "mouse" {
            return;
        }
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        let hover = w.map.borrow().pick(pos).map(|h| h.poi);
        let changed = {
            let mut map = w.map.borrow_mut();
            let changed = map.hover != hover;
            map.hover = hover;
            changed
        };
        if changed {
            set_cursor(&w.canvas, hover.is_some());
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.map.borrow_mut().hover = None;
        set_cursor(&w.canvas, false);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        select_at(&w, pos);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
