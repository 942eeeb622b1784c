use crate::camera::Viewport;
use crate::config::PanelConfig;
use crate::constants::{
    PANEL_ANCHOR_GAP, PANEL_BODY_CHAR_PX, PANEL_BODY_LINES, PANEL_EDGE_MARGIN, PANEL_PADDING,
    PANEL_TITLE_CHAR_PX,
};
use glam::Vec2;

const TITLE_LINE_PX: f32 = 28.0;
const BODY_LINE_PX: f32 = 18.0;

/// Placement of a floating panel in CSS px relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    /// Estimated; the DOM decides the real height.
    pub height: f32,
}

/// Size a floating panel to its text and place it beside `anchor`, flipping
/// to the left of the POI when the right side lacks room.
pub fn floating_rect(
    anchor: Vec2,
    title: &str,
    description: &str,
    viewport: &Viewport,
    cfg: &PanelConfig,
) -> PanelRect {
    let title_w = title.chars().count() as f32 * PANEL_TITLE_CHAR_PX + PANEL_PADDING;
    let body_px = description.chars().count() as f32 * PANEL_BODY_CHAR_PX;
    let body_w = body_px / PANEL_BODY_LINES + PANEL_PADDING;
    let room = (viewport.width - 2.0 * PANEL_EDGE_MARGIN).max(0.0);
    let width = title_w.max(body_w).clamp(cfg.min_width, cfg.max_width).min(room);

    let text_w = (width - PANEL_PADDING).max(1.0);
    let body_lines = (body_px / text_w).ceil().max(1.0);
    let height = TITLE_LINE_PX + body_lines * BODY_LINE_PX + PANEL_PADDING;

    let mut left = anchor.x + PANEL_ANCHOR_GAP;
    if left + width > viewport.width - PANEL_EDGE_MARGIN {
        left = anchor.x - PANEL_ANCHOR_GAP - width;
    }
    let left = clamp_span(left, PANEL_EDGE_MARGIN, viewport.width - PANEL_EDGE_MARGIN - width);
    let top = clamp_span(
        anchor.y - height * 0.5,
        PANEL_EDGE_MARGIN,
        viewport.height - PANEL_EDGE_MARGIN - height,
    );
    PanelRect {
        left,
        top,
        width,
        height,
    }
}

// Prefers `lo` when the span is inverted (panel larger than the viewport).
#[inline]
fn clamp_span(v: f32, lo: f32, hi: f32) -> f32 {
    if hi < lo {
        lo
    } else {
        v.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StarMapConfig;

    fn cfg() -> PanelConfig {
        StarMapConfig::default().panel
    }

    #[test]
    fn width_respects_bounds() {
        let vp = Viewport::new(1400.0, 900.0);
        let short = floating_rect(Vec2::new(300.0, 300.0), "Sol", "Hi", &vp, &cfg());
        assert_eq!(short.width, cfg().min_width);
        let long_desc = "x".repeat(2000);
        let long = floating_rect(Vec2::new(300.0, 300.0), "Sol", &long_desc, &vp, &cfg());
        assert_eq!(long.width, cfg().max_width);
    }

    #[test]
    fn flips_left_near_right_edge() {
        let vp = Viewport::new(1000.0, 800.0);
        let r = floating_rect(Vec2::new(900.0, 400.0), "Vega", "A bright star.", &vp, &cfg());
        assert!(r.left + r.width <= 900.0);
        let r = floating_rect(Vec2::new(100.0, 400.0), "Vega", "A bright star.", &vp, &cfg());
        assert_eq!(r.left, 100.0 + PANEL_ANCHOR_GAP);
    }

    #[test]
    fn stays_inside_viewport() {
        let vp = Viewport::new(800.0, 600.0);
        let r = floating_rect(Vec2::new(-50.0, 5000.0), "Sirius", "Dog star", &vp, &cfg());
        assert!(r.left >= PANEL_EDGE_MARGIN);
        assert!(r.top + r.height <= 600.0 - PANEL_EDGE_MARGIN + 1e-3);
    }
}
