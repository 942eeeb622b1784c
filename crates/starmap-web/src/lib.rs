#![cfg(target_arch = "wasm32")]
use starmap_core::constants::MOBILE_BREAKPOINT_PX;
use starmap_core::{default_registry, DeviceClass, InfoPanel, StarField, StarMap, StarMapConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod keys;
mod markup;
mod overlay;
mod panel;
mod render;

use panel::PanelHandle;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starmap-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let width = dom::window_width();
    let config = StarMapConfig::for_viewport_width(width);
    config.validate()?;
    log::info!("[init] device class {:?} at {}px", config.device, width);

    let registry = default_registry()?;
    let stars = {
        let (lo, hi) = registry.vertical_extent().unwrap_or((0.0, 0.0));
        Rc::new(StarField::generate(&config.stars, lo, hi))
    };
    log::info!("[init] {} POIs, {} stars", registry.len(), stars.len());

    let controller = InfoPanel::new(config.panel.clone(), width);
    let map = Rc::new(RefCell::new(StarMap::new(
        registry,
        config,
        dom::canvas_viewport(&canvas),
    )));
    let panel = PanelHandle::new(controller, map.clone(), document.clone());
    let touch_point = Rc::new(RefCell::new(None));

    wire_resize(&window, &canvas, &map, &panel);

    if let Some(backdrop) = document.get_element_by_id(constants::BACKDROP_ID) {
        let p = panel.clone();
        dom::add_click_listener(&backdrop, move || p.close());
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        map: map.clone(),
        panel: panel.clone(),
        touch_point: touch_point.clone(),
    });

    let renderer = render::Renderer::new(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        map,
        panel,
        stars,
        renderer,
        canvas,
        touch_point,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Keep the canvas backing store, camera aspect, scroll range and device
/// tuning in step with the window.
fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    map: &Rc<RefCell<StarMap>>,
    panel: &PanelHandle,
) {
    let canvas = canvas.clone();
    let map = map.clone();
    let panel = panel.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let width = dom::window_width();
        {
            let mut m = map.borrow_mut();
            m.set_device(DeviceClass::from_viewport_width(width, MOBILE_BREAKPOINT_PX));
            m.resize(dom::canvas_viewport(&canvas));
        }
        // Layout of an already open panel is kept; the next request picks it up.
        panel.set_viewport_width(width);
        panel.reposition();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
