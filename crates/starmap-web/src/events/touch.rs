use super::{select_at, InputWiring};
use crate::dom;
use crate::input;
use starmap_core::Release;
use web_sys as web;

pub fn wire_touch_handlers(w: &InputWiring) {
    let target: &web::EventTarget = &w.canvas;

    let ws = w.clone();
    dom::add_active_listener(target, "touchstart", move |ev: web::TouchEvent| {
        ev.prevent_default();
        let t = ev.time_stamp();
        match input::single_touch_px(&ev, &ws.canvas) {
            Some(px) => {
                ws.map.borrow_mut().touch_start(px, t);
                *ws.touch_point.borrow_mut() = Some(px);
            }
            None => {
                log::debug!("[touch] {} fingers; drag cancelled", ev.touches().length());
                ws.map.borrow_mut().touch_cancel(t);
            }
        }
    });

    let wm = w.clone();
    dom::add_active_listener(target, "touchmove", move |ev: web::TouchEvent| {
        ev.prevent_default();
        let t = ev.time_stamp();
        match input::single_touch_px(&ev, &wm.canvas) {
            Some(px) => {
                wm.map.borrow_mut().touch_move(px, t);
                *wm.touch_point.borrow_mut() = Some(px);
            }
            None => wm.map.borrow_mut().touch_cancel(t),
        }
    });

    let we = w.clone();
    dom::add_active_listener(target, "touchend", move |ev: web::TouchEvent| {
        ev.prevent_default();
        if ev.touches().length() > 0 {
            return;
        }
        let release = we.map.borrow_mut().touch_end(ev.time_stamp());
        match release {
            Release::Tap { at } => select_at(&we, at),
            Release::Fling { velocity } => log::debug!("[touch] fling {:.3}", velocity),
            Release::Idle => {}
        }
    });

    let wc = w.clone();
    dom::add_active_listener(target, "touchcancel", move |ev: web::TouchEvent| {
        wc.map.borrow_mut().touch_cancel(ev.time_stamp());
    });
}
