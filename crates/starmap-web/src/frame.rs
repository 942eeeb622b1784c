use crate::dom;
use crate::panel::PanelHandle;
use crate::render::{Renderer, SceneView};
use glam::Vec2;
use instant::Instant;
use starmap_core::{StarField, StarMap};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub map: Rc<RefCell<StarMap>>,
    pub panel: PanelHandle,
    pub stars: Rc<StarField>,
    pub renderer: Renderer,
    pub canvas: web::HtmlCanvasElement,
    pub touch_point: Rc<RefCell<Option<Vec2>>>,
    pub started: Instant,
    draw_failed: bool,
}

impl FrameContext {
    pub fn new(
        map: Rc<RefCell<StarMap>>,
        panel: PanelHandle,
        stars: Rc<StarField>,
        renderer: Renderer,
        canvas: web::HtmlCanvasElement,
        touch_point: Rc<RefCell<Option<Vec2>>>,
    ) -> Self {
        Self {
            map,
            panel,
            stars,
            renderer,
            canvas,
            touch_point,
            started: Instant::now(),
            draw_failed: false,
        }
    }

    pub fn frame(&mut self) {
        let time_sec = self.started.elapsed().as_secs_f32();

        // Scroll first, then let a floating panel follow its POI.
        self.map.borrow_mut().step();
        self.panel.reposition();

        let map = self.map.borrow();
        let touch = self.touch_point.borrow().map(|at| {
            let alpha = map.touch_fade.value(dom::now_ms());
            (at, alpha)
        });
        let scene = SceneView {
            map: &map,
            stars: &self.stars,
            time_sec,
            selected: self.panel.current(),
            touch,
        };
        match self.renderer.draw(&self.canvas, &scene) {
            Ok(()) => self.draw_failed = false,
            Err(e) => {
                // Log once per failure streak.
                if !self.draw_failed {
                    log::error!("[render] draw failed: {:?}", e);
                }
                self.draw_failed = true;
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
