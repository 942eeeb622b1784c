pub mod keyboard;
pub mod pointer;
pub mod touch;
pub mod wheel;

pub use keyboard::wire_global_keydown;
pub use pointer::{select_at, wire_pointer_handlers};
pub use touch::wire_touch_handlers;
pub use wheel::wire_wheel;

use crate::panel::PanelHandle;
use glam::Vec2;
use starmap_core::StarMap;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub map: Rc<RefCell<StarMap>>,
    pub panel: PanelHandle,
    /// Last touch position, drawn as fading feedback by the frame loop.
    pub touch_point: Rc<RefCell<Option<Vec2>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointer_handlers(&w);
    wire_touch_handlers(&w);
    wire_wheel(&w);
    wire_global_keydown(&w);
}
