//! DOM presenter for the info panel state machine.
//!
//! `PanelHandle` owns the controller and the single panel element. Commands
//! returned by the controller are executed here in order. Completion signals
//! (`transitionend` and the fallback timer) re-enter the controller from a
//! spawned task, after the JS callback that produced them has returned, so the
//! callbacks can be dropped safely when the race is decided.

use crate::constants::{
    DRAGGING_CLASS, PANEL_CLASS, PANEL_CLOSE_SELECTOR, PANEL_FLOATING_CLASS, PANEL_SHEET_CLASS,
    VISIBLE_CLASS,
};
use crate::dom;
use crate::markup;
use crate::overlay;
use starmap_core::{
    floating_rect, AnimationTicket, InfoPanel, PanelCommand, PanelCommands, PanelLayout, PoiId,
    StarMap,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type EventClosure = Closure<dyn FnMut(web::Event)>;

struct PendingCompletion {
    ticket: AnimationTicket,
    timeout_id: Option<i32>,
    _timeout_cb: Closure<dyn FnMut()>,
    transition: Option<(web::HtmlElement, EventClosure)>,
}

#[derive(Default)]
struct PanelDom {
    element: Option<web::HtmlElement>,
    poi: Option<PoiId>,
    layout: Option<PanelLayout>,
    pending: Option<PendingCompletion>,
    listeners: Vec<(web::EventTarget, &'static str, EventClosure)>,
}

struct Inner {
    controller: RefCell<InfoPanel>,
    dom: RefCell<PanelDom>,
    map: Rc<RefCell<StarMap>>,
    document: web::Document,
}

#[derive(Clone)]
pub struct PanelHandle(Rc<Inner>);

impl PanelHandle {
    pub fn new(controller: InfoPanel, map: Rc<RefCell<StarMap>>, document: web::Document) -> Self {
        Self(Rc::new(Inner {
            controller: RefCell::new(controller),
            dom: RefCell::new(PanelDom::default()),
            map,
            document,
        }))
    }

    pub fn request(&self, poi: PoiId) {
        self.dispatch(|p| p.request(poi));
    }

    pub fn close(&self) {
        self.dispatch(|p| p.close());
    }

    pub fn current(&self) -> Option<PoiId> {
        self.0.controller.borrow().current()
    }

    pub fn set_viewport_width(&self, width: f32) {
        self.0.controller.borrow_mut().set_viewport_width(width);
    }

    /// Run one controller operation and execute the commands it emits.
    pub fn dispatch(&self, op: impl FnOnce(&mut InfoPanel) -> PanelCommands) {
        let cmds = {
            let mut controller = self.0.controller.borrow_mut();
            op(&mut controller)
        };
        for cmd in cmds {
            self.execute(cmd);
        }
    }

    fn execute(&self, cmd: PanelCommand) {
        match cmd {
            PanelCommand::RemoveStray => self.remove_stray(),
            PanelCommand::Mount { poi, layout, .. } => self.mount(poi, layout),
            PanelCommand::BeginClose { .. } => self.begin_close(),
            PanelCommand::Unmount => self.unmount(),
            PanelCommand::ArmTimeout { ticket, ms } => self.arm(ticket, ms),
            PanelCommand::CancelTimeout { ticket } => self.cancel(ticket),
            PanelCommand::SetSheetOffset(px) => self.set_sheet_offset(px),
            PanelCommand::SpringBack => self.spring_back(),
        }
    }

    fn remove_stray(&self) {
        self.detach_listeners();
        let removed = dom::remove_all(&self.0.document, &format!(".{}", PANEL_CLASS));
        if removed > 0 {
            log::debug!("[panel] removed {} stray panel element(s)", removed);
        }
        let mut d = self.0.dom.borrow_mut();
        d.element = None;
        d.poi = None;
        d.layout = None;
    }

    fn mount(&self, poi: PoiId, layout: PanelLayout) {
        let doc = &self.0.document;
        let html = {
            let map = self.0.map.borrow();
            match map.registry.get(poi) {
                Some(data) => markup::panel_inner_html(data, layout),
                None => {
                    log::warn!("[panel] unknown POI {:?}; nothing mounted", poi);
                    return;
                }
            }
        };
        let Some(el) = doc
            .create_element("div")
            .ok()
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        else {
            log::warn!("[panel] could not create panel element");
            return;
        };
        let layout_class = match layout {
            PanelLayout::Sheet => PANEL_SHEET_CLASS,
            PanelLayout::Floating => PANEL_FLOATING_CLASS,
        };
        el.set_class_name(&format!("{} {}", PANEL_CLASS, layout_class));
        el.set_inner_html(&html);
        let Some(body) = doc.body() else {
            log::warn!("[panel] document has no body");
            return;
        };
        if body.append_child(&el).is_err() {
            log::warn!("[panel] failed to attach panel element");
            return;
        }
        {
            let mut d = self.0.dom.borrow_mut();
            d.element = Some(el.clone());
            d.poi = Some(poi);
            d.layout = Some(layout);
        }
        match layout {
            PanelLayout::Floating => self.reposition(),
            PanelLayout::Sheet => {
                if !overlay::show(doc) {
                    log::warn!("[panel] backdrop element missing; sheet shown without it");
                }
            }
        }
        self.wire_panel_listeners(&el, layout);
        // Flush styles so adding the class below starts a transition.
        _ = el.offset_height();
        _ = el.class_list().add_1(VISIBLE_CLASS);
    }

    fn wire_panel_listeners(&self, el: &web::HtmlElement, layout: PanelLayout) {
        match el.query_selector(PANEL_CLOSE_SELECTOR) {
            Ok(Some(button)) => {
                let h = self.clone();
                self.listen(&button, "click", move |ev: web::Event| {
                    ev.stop_propagation();
                    h.close();
                });
            }
            _ => log::warn!("[panel] close button not found; panel closes by tap-outside only"),
        }

        if layout == PanelLayout::Sheet {
            let h = self.clone();
            let sheet = el.clone();
            self.listen(el, "touchstart", move |ev: web::Event| {
                let Some(y) = ev
                    .dyn_ref::<web::TouchEvent>()
                    .and_then(crate::input::first_touch_client_y)
                else {
                    return;
                };
                _ = sheet.class_list().add_1(DRAGGING_CLASS);
                h.0.controller.borrow_mut().sheet_drag_start(y);
            });
            let h = self.clone();
            self.listen(el, "touchmove", move |ev: web::Event| {
                let Some(y) = ev
                    .dyn_ref::<web::TouchEvent>()
                    .and_then(crate::input::first_touch_client_y)
                else {
                    return;
                };
                if h.0.controller.borrow().is_sheet_dragging() {
                    ev.prevent_default();
                }
                h.dispatch(|p| p.sheet_drag_move(y));
            });
            let h = self.clone();
            let sheet = el.clone();
            self.listen(el, "touchend", move |_ev: web::Event| {
                _ = sheet.class_list().remove_1(DRAGGING_CLASS);
                h.dispatch(|p| p.sheet_drag_end());
            });
        }
    }

    fn listen(
        &self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        self.0
            .dom
            .borrow_mut()
            .listeners
            .push((target.clone(), event, closure));
    }

    fn detach_listeners(&self) {
        let listeners = std::mem::take(&mut self.0.dom.borrow_mut().listeners);
        for (target, event, closure) in listeners {
            _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }

    fn begin_close(&self) {
        let el = self.0.dom.borrow().element.clone();
        if let Some(el) = el {
            _ = el.class_list().remove_1(DRAGGING_CLASS);
            _ = el.style().remove_property("transform");
            _ = el.class_list().remove_1(VISIBLE_CLASS);
        }
        overlay::hide(&self.0.document);
    }

    fn unmount(&self) {
        self.detach_listeners();
        let el = {
            let mut d = self.0.dom.borrow_mut();
            d.poi = None;
            d.layout = None;
            d.element.take()
        };
        if let Some(el) = el {
            el.remove();
        }
        overlay::hide(&self.0.document);
    }

    /// Race the panel's `transitionend` against a timer; whichever fires
    /// first reports completion for `ticket`.
    fn arm(&self, ticket: AnimationTicket, ms: i32) {
        self.drop_pending();
        let Some(window) = web::window() else {
            return;
        };

        let h = self.clone();
        let timeout_cb = Closure::wrap(Box::new(move || {
            let h = h.clone();
            spawn_local(async move {
                h.dispatch(|p| p.animation_timed_out(ticket));
            });
        }) as Box<dyn FnMut()>);
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                timeout_cb.as_ref().unchecked_ref(),
                ms,
            )
            .ok();

        let element = self.0.dom.borrow().element.clone();
        let transition = element.map(|el| {
            let h = self.clone();
            let panel_target: web::EventTarget = el.clone().into();
            let cb = Closure::wrap(Box::new(move |ev: web::Event| {
                // Transitions of child elements bubble up; only the panel's own count.
                if ev.target().as_ref() != Some(&panel_target) {
                    return;
                }
                let h = h.clone();
                spawn_local(async move {
                    h.dispatch(|p| p.animation_finished(ticket));
                });
            }) as Box<dyn FnMut(web::Event)>);
            _ = el.add_event_listener_with_callback("transitionend", cb.as_ref().unchecked_ref());
            (el, cb)
        });

        self.0.dom.borrow_mut().pending = Some(PendingCompletion {
            ticket,
            timeout_id,
            _timeout_cb: timeout_cb,
            transition,
        });
    }

    fn cancel(&self, ticket: AnimationTicket) {
        let live = self
            .0
            .dom
            .borrow()
            .pending
            .as_ref()
            .map(|p| p.ticket == ticket)
            .unwrap_or(false);
        if live {
            self.drop_pending();
        }
    }

    fn drop_pending(&self) {
        let pending = self.0.dom.borrow_mut().pending.take();
        let Some(p) = pending else {
            return;
        };
        if let (Some(id), Some(window)) = (p.timeout_id, web::window()) {
            window.clear_timeout_with_handle(id);
        }
        if let Some((el, cb)) = &p.transition {
            _ = el.remove_event_listener_with_callback("transitionend", cb.as_ref().unchecked_ref());
        }
    }

    fn set_sheet_offset(&self, px: f32) {
        if let Some(el) = &self.0.dom.borrow().element {
            _ = el
                .style()
                .set_property("transform", &format!("translateY({:.1}px)", px));
        }
    }

    fn spring_back(&self) {
        if let Some(el) = &self.0.dom.borrow().element {
            _ = el.class_list().remove_1(DRAGGING_CLASS);
            _ = el.style().remove_property("transform");
        }
    }

    /// Keep a floating panel next to its POI as the camera moves.
    pub fn reposition(&self) {
        let d = self.0.dom.borrow();
        let (Some(el), Some(poi), Some(PanelLayout::Floating)) = (&d.element, d.poi, d.layout)
        else {
            return;
        };
        let map = self.0.map.borrow();
        let (Some(anchor), Some(data)) = (map.screen_position(poi), map.registry.get(poi)) else {
            return;
        };
        let rect = floating_rect(
            anchor,
            &data.name,
            &data.description,
            &map.viewport,
            &map.config.panel,
        );
        let style = el.style();
        _ = style.set_property("left", &format!("{:.0}px", rect.left));
        _ = style.set_property("top", &format!("{:.0}px", rect.top));
        _ = style.set_property("width", &format!("{:.0}px", rect.width));
    }
}
