use crate::constants::{DOM_DELTA_LINE, DOM_DELTA_PAGE, WHEEL_LINE_PX};
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Client coordinates relative to the canvas' top-left corner, in CSS px.
#[inline]
pub fn client_to_canvas_px(client_x: f64, client_y: f64, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        (client_x - rect.left()) as f32,
        (client_y - rect.top()) as f32,
    )
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_to_canvas_px(ev.client_x() as f64, ev.client_y() as f64, canvas)
}

// ---------------- Touch helpers ----------------

/// Position of the only active touch; `None` for zero or several fingers.
#[inline]
pub fn single_touch_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touches = ev.touches();
    if touches.length() != 1 {
        return None;
    }
    let t = touches.get(0)?;
    Some(client_to_canvas_px(t.client_x() as f64, t.client_y() as f64, canvas))
}

#[inline]
pub fn first_touch_client_y(ev: &web::TouchEvent) -> Option<f32> {
    let t = ev.touches().get(0).or_else(|| ev.changed_touches().get(0))?;
    Some(t.client_y() as f32)
}

// ---------------- Wheel helpers ----------------

/// Wheel delta normalised to CSS px.
#[inline]
pub fn wheel_delta_px(ev: &web::WheelEvent, page_height: f32) -> f32 {
    let dy = ev.delta_y() as f32;
    match ev.delta_mode() {
        DOM_DELTA_LINE => dy * WHEEL_LINE_PX,
        DOM_DELTA_PAGE => dy * page_height,
        _ => dy,
    }
}
