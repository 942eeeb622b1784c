//! Canvas 2D renderer: background star field, POI glyphs with labels, and
//! touch feedback.

use crate::constants::{
    BACKGROUND, GLOW_RADIUS_FACTOR, LABEL_FONT, POI_MIN_RADIUS_PX, TOUCH_RING_RADIUS_PX,
};
use anyhow::anyhow;
use glam::Vec2;
use starmap_core::constants::{HOVER_BRIGHTEN, POI_GLYPH_RADIUS};
use starmap_core::{PoiId, StarField, StarMap};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!(format!("{:?}", e))
}

#[inline]
fn rgba(rgb: [f32; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        (rgb[0].clamp(0.0, 1.0) * 255.0) as u8,
        (rgb[1].clamp(0.0, 1.0) * 255.0) as u8,
        (rgb[2].clamp(0.0, 1.0) * 255.0) as u8,
        alpha.clamp(0.0, 1.0)
    )
}

/// Everything one frame needs to draw.
pub struct SceneView<'a> {
    pub map: &'a StarMap,
    pub stars: &'a StarField,
    pub time_sec: f32,
    pub selected: Option<PoiId>,
    /// Last touch point and its current fade opacity.
    pub touch: Option<(Vec2, f32)>,
}

pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    pub fn draw(&self, canvas: &web::HtmlCanvasElement, scene: &SceneView) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        let vp = scene.map.viewport;
        // Drawing happens in CSS px; the backing store is CSS size * dpr.
        let scale = if vp.width > 0.0 {
            canvas.width() as f64 / vp.width as f64
        } else {
            1.0
        };
        ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)
            .map_err(js_err)?;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, vp.width as f64, vp.height as f64);

        self.draw_stars(scene)?;
        self.draw_pois(scene)?;
        if let Some((at, alpha)) = scene.touch {
            if alpha > 0.0 {
                self.draw_touch_ring(at, alpha)?;
            }
        }
        Ok(())
    }

    fn draw_stars(&self, scene: &SceneView) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        let map = scene.map;
        for star in &scene.stars.stars {
            let world = scene.stars.apparent_position(star, map.camera.y);
            let Some(ndc) = map.camera.project(world) else {
                continue;
            };
            if ndc.x.abs() > 1.05 || ndc.y.abs() > 1.05 {
                continue;
            }
            let px = map.viewport.from_ndc(ndc);
            let b = StarField::brightness(star, scene.time_sec);
            ctx.set_fill_style_str(&rgba(star.color_rgb, b));
            ctx.begin_path();
            ctx.arc(px.x as f64, px.y as f64, star.size.max(0.3) as f64, 0.0, TAU)
                .map_err(js_err)?;
            ctx.fill();
        }
        Ok(())
    }

    fn draw_pois(&self, scene: &SceneView) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        let map = scene.map;
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        for (id, poi) in map.registry.iter() {
            let Some(px) = map.screen_position(id) else {
                continue;
            };
            let wpp = map.camera.world_per_pixel(poi.position.z, &map.viewport);
            let r = if wpp > 0.0 {
                ((POI_GLYPH_RADIUS / wpp) as f64).max(POI_MIN_RADIUS_PX)
            } else {
                POI_MIN_RADIUS_PX
            };
            let (x, y) = (px.x as f64, px.y as f64);
            if y < -r * GLOW_RADIUS_FACTOR || y > map.viewport.height as f64 + r * GLOW_RADIUS_FACTOR
            {
                continue;
            }

            let mut rgb = poi.color_rgb();
            if map.hover == Some(id) {
                rgb = rgb.map(|c| (c * HOVER_BRIGHTEN).min(1.0));
            }

            let glow = ctx
                .create_radial_gradient(x, y, r * 0.5, x, y, r * GLOW_RADIUS_FACTOR)
                .map_err(js_err)?;
            glow.add_color_stop(0.0, &rgba(rgb, 0.55)).map_err(js_err)?;
            glow.add_color_stop(1.0, &rgba(rgb, 0.0)).map_err(js_err)?;
            ctx.set_fill_style_canvas_gradient(&glow);
            ctx.begin_path();
            ctx.arc(x, y, r * GLOW_RADIUS_FACTOR, 0.0, TAU)
                .map_err(js_err)?;
            ctx.fill();

            ctx.set_fill_style_str(&rgba(rgb, 1.0));
            ctx.begin_path();
            ctx.arc(x, y, r, 0.0, TAU).map_err(js_err)?;
            ctx.fill();

            if scene.selected == Some(id) {
                ctx.set_stroke_style_str(&rgba(rgb, 0.9));
                ctx.set_line_width(1.5);
                ctx.begin_path();
                ctx.arc(x, y, r + 6.0, 0.0, TAU).map_err(js_err)?;
                ctx.stroke();
            }

            ctx.set_fill_style_str("rgba(220, 228, 255, 0.85)");
            ctx.fill_text(&poi.name, x, y + r + 16.0).map_err(js_err)?;
        }
        Ok(())
    }

    fn draw_touch_ring(&self, at: Vec2, alpha: f32) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {:.3})", 0.6 * alpha));
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.arc(at.x as f64, at.y as f64, TOUCH_RING_RADIUS_PX, 0.0, TAU)
            .map_err(js_err)?;
        ctx.stroke();
        Ok(())
    }
}
