//! Camera-Y scrolling driven by wheel, single-finger drag and momentum.

use crate::config::ScrollConfig;
use crate::constants::{FLING_STALE_MS, FRAME_MS};
use crate::poi::PoiRegistry;
use glam::Vec2;

/// Inclusive camera-Y range. `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBounds {
    pub min: f32,
    pub max: f32,
}

impl ScrollBounds {
    /// Inverted or non-finite input collapses to a single value.
    pub fn new(min: f32, max: f32) -> Self {
        match (min.is_finite(), max.is_finite()) {
            (true, true) if min <= max => Self { min, max },
            (true, true) => {
                let mid = 0.5 * (min + max);
                Self { min: mid, max: mid }
            }
            (true, false) => Self { min, max: min },
            (false, true) => Self { min: max, max },
            (false, false) => Self { min: 0.0, max: 0.0 },
        }
    }

    /// Range derived from the POI extremes, inset by a fraction of the half
    /// visible height so the first and last POIs are not pinned to the edges.
    pub fn from_registry(registry: &PoiRegistry, half_visible_height: f32, cfg: &ScrollConfig) -> Self {
        let Some((lo, hi)) = registry.vertical_extent() else {
            return Self { min: 0.0, max: 0.0 };
        };
        let half = if half_visible_height.is_finite() {
            half_visible_height.max(0.0)
        } else {
            0.0
        };
        let max = hi - half * cfg.top_inset;
        let min = lo + half * cfg.bottom_inset;
        if min <= max {
            Self { min, max }
        } else {
            let mid = (0.5 * (min + max)).clamp(lo, hi);
            Self { min: mid, max: mid }
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Clamp that never panics and maps NaN to `min`.
    #[inline]
    pub fn clamp(&self, y: f32) -> f32 {
        if !(y >= self.min) {
            self.min
        } else if y > self.max {
            self.max
        } else {
            y
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start: Vec2,
    start_camera_y: f32,
    start_time_ms: f64,
    last_y: f32,
    last_time_ms: f64,
    /// Vertical finger speed in px/ms from the most recent move.
    speed_px_per_ms: f32,
    max_displacement_px: f32,
    target_y: f32,
}

/// Outcome of lifting the finger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Short, nearly stationary touch; carries the touch-start position.
    Tap { at: Vec2 },
    /// Drag ended; momentum handed over to the frame step.
    Fling { velocity: f32 },
    /// No drag was in progress.
    Idle,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    velocity: f32,
    drag: Option<DragSession>,
}

impl ScrollState {
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Target camera-Y of the active drag.
    pub fn drag_y(&self) -> Option<f32> {
        self.drag.map(|d| d.target_y)
    }

    /// Wheel delta in CSS px; positive scrolls down the page.
    pub fn wheel(&mut self, delta_y: f32, cfg: &ScrollConfig) {
        if self.drag.is_some() || !delta_y.is_finite() {
            return;
        }
        let dv = -delta_y * cfg.wheel_factor * cfg.wheel_multiplier;
        self.velocity = (self.velocity + dv).clamp(-cfg.max_speed, cfg.max_speed);
    }

    /// Direct velocity nudge, e.g. from arrow keys.
    pub fn impulse(&mut self, dv: f32, cfg: &ScrollConfig) {
        if self.drag.is_some() || !dv.is_finite() {
            return;
        }
        self.velocity = (self.velocity + dv).clamp(-cfg.max_speed, cfg.max_speed);
    }

    pub fn touch_start(&mut self, at: Vec2, time_ms: f64, camera_y: f32) {
        self.velocity = 0.0;
        self.drag = Some(DragSession {
            start: at,
            start_camera_y: camera_y,
            start_time_ms: time_ms,
            last_y: at.y,
            last_time_ms: time_ms,
            speed_px_per_ms: 0.0,
            max_displacement_px: 0.0,
            target_y: camera_y,
        });
    }

    /// Track the finger; returns the new clamped target camera-Y.
    pub fn touch_move(
        &mut self,
        at: Vec2,
        time_ms: f64,
        world_per_px: f32,
        bounds: &ScrollBounds,
    ) -> Option<f32> {
        let drag = self.drag.as_mut()?;
        let dt = (time_ms - drag.last_time_ms) as f32;
        if dt > 0.0 {
            drag.speed_px_per_ms = (at.y - drag.last_y) / dt;
        }
        drag.last_y = at.y;
        drag.last_time_ms = time_ms;
        drag.max_displacement_px = drag.max_displacement_px.max((at - drag.start).length());
        let dy_px = at.y - drag.start.y;
        drag.target_y = bounds.clamp(drag.start_camera_y + dy_px * world_per_px);
        self.velocity = 0.0;
        Some(drag.target_y)
    }

    pub fn touch_end(&mut self, time_ms: f64, world_per_px: f32, cfg: &ScrollConfig) -> Release {
        let Some(drag) = self.drag.take() else {
            return Release::Idle;
        };
        let held_ms = time_ms - drag.start_time_ms;
        if drag.max_displacement_px < cfg.tap_slop_px && held_ms < cfg.tap_max_ms {
            self.velocity = 0.0;
            return Release::Tap { at: drag.start };
        }
        let speed = if time_ms - drag.last_time_ms > FLING_STALE_MS {
            0.0
        } else {
            drag.speed_px_per_ms
        };
        let v = speed * world_per_px * FRAME_MS;
        self.velocity = if v.is_finite() {
            v.clamp(-cfg.max_speed, cfg.max_speed)
        } else {
            0.0
        };
        log::debug!("[scroll] fling v={:.3}", self.velocity);
        Release::Fling {
            velocity: self.velocity,
        }
    }

    /// Abandon the drag without momentum (multi-touch, touchcancel).
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.velocity = 0.0;
        }
    }

    /// One animation frame. Returns the new camera-Y, always within `bounds`.
    pub fn step(&mut self, camera_y: f32, bounds: &ScrollBounds, cfg: &ScrollConfig) -> f32 {
        if let Some(drag) = &self.drag {
            self.velocity = 0.0;
            return bounds.clamp(drag.target_y);
        }
        let mut y = camera_y;
        if self.velocity.abs() > cfg.epsilon {
            y += self.velocity;
            self.velocity = (self.velocity * cfg.damping).clamp(-cfg.max_speed, cfg.max_speed);
        } else {
            self.velocity = 0.0;
        }
        let clamped = bounds.clamp(y);
        if clamped != y {
            // Ran into an end of the map; drop momentum pushing further out.
            if (y > clamped && self.velocity > 0.0) || (y < clamped && self.velocity < 0.0) {
                self.velocity = 0.0;
            }
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StarMapConfig;

    fn cfg() -> ScrollConfig {
        StarMapConfig::default().scroll
    }

    #[test]
    fn wheel_down_moves_camera_down() {
        let cfg = cfg();
        let mut s = ScrollState::default();
        s.wheel(100.0, &cfg);
        assert!(s.velocity() < 0.0);
        let b = ScrollBounds::new(-100.0, 100.0);
        assert!(s.step(0.0, &b, &cfg) < 0.0);
    }

    #[test]
    fn wheel_velocity_is_capped() {
        let cfg = cfg();
        let mut s = ScrollState::default();
        for _ in 0..100 {
            s.wheel(-10_000.0, &cfg);
        }
        assert_eq!(s.velocity(), cfg.max_speed);
    }

    #[test]
    fn drag_overrides_momentum() {
        let cfg = cfg();
        let b = ScrollBounds::new(-50.0, 50.0);
        let mut s = ScrollState::default();
        s.impulse(2.0, &cfg);
        s.touch_start(Vec2::new(100.0, 100.0), 0.0, 0.0);
        assert_eq!(s.velocity(), 0.0);
        let target = s.touch_move(Vec2::new(100.0, 140.0), 16.0, 0.1, &b).unwrap();
        assert!((target - 4.0).abs() < 1e-5);
        assert_eq!(s.step(0.0, &b, &cfg), target);
        assert_eq!(s.velocity(), 0.0);
    }

    #[test]
    fn drag_target_is_clamped() {
        let b = ScrollBounds::new(-5.0, 5.0);
        let mut s = ScrollState::default();
        s.touch_start(Vec2::ZERO, 0.0, 0.0);
        assert_eq!(s.touch_move(Vec2::new(0.0, 1000.0), 10.0, 1.0, &b), Some(5.0));
        assert_eq!(s.touch_move(Vec2::new(0.0, -1000.0), 20.0, 1.0, &b), Some(-5.0));
    }

    #[test]
    fn release_converts_speed_to_frame_velocity() {
        let cfg = cfg();
        let b = ScrollBounds::new(-500.0, 500.0);
        let mut s = ScrollState::default();
        s.touch_start(Vec2::ZERO, 0.0, 0.0);
        s.touch_move(Vec2::new(0.0, 30.0), 100.0, 0.05, &b);
        s.touch_move(Vec2::new(0.0, 40.0), 110.0, 0.05, &b);
        // 1 px/ms * 0.05 world/px * 16.67 ms/frame
        match s.touch_end(115.0, 0.05, &cfg) {
            Release::Fling { velocity } => assert!((velocity - 0.05 * FRAME_MS).abs() < 1e-4),
            other => panic!("expected fling, got {:?}", other),
        }
        assert!(!s.is_dragging());
        assert!(s.drag_y().is_none());
    }

    #[test]
    fn release_after_resting_has_no_momentum() {
        let cfg = cfg();
        let b = ScrollBounds::new(-500.0, 500.0);
        let mut s = ScrollState::default();
        s.touch_start(Vec2::ZERO, 0.0, 0.0);
        s.touch_move(Vec2::new(0.0, 80.0), 50.0, 0.05, &b);
        assert_eq!(
            s.touch_end(500.0, 0.05, &cfg),
            Release::Fling { velocity: 0.0 }
        );
    }

    #[test]
    fn short_still_touch_is_a_tap() {
        let cfg = cfg();
        let b = ScrollBounds::new(-5.0, 5.0);
        let mut s = ScrollState::default();
        s.touch_start(Vec2::new(40.0, 60.0), 0.0, 0.0);
        s.touch_move(Vec2::new(42.0, 61.0), 30.0, 0.1, &b);
        assert_eq!(
            s.touch_end(90.0, 0.1, &cfg),
            Release::Tap {
                at: Vec2::new(40.0, 60.0)
            }
        );
        assert_eq!(s.velocity(), 0.0);
    }

    #[test]
    fn release_without_drag_is_idle() {
        let mut s = ScrollState::default();
        assert_eq!(s.touch_end(0.0, 0.1, &cfg()), Release::Idle);
    }

    #[test]
    fn cancel_drops_drag_and_momentum() {
        let b = ScrollBounds::new(-5.0, 5.0);
        let mut s = ScrollState::default();
        s.touch_start(Vec2::ZERO, 0.0, 0.0);
        s.touch_move(Vec2::new(0.0, 30.0), 10.0, 0.1, &b);
        s.cancel_drag();
        assert!(!s.is_dragging());
        assert_eq!(s.velocity(), 0.0);
    }

    #[test]
    fn bounds_clamp_handles_nan_and_inversion() {
        let b = ScrollBounds::new(3.0, -3.0);
        assert!(b.is_degenerate());
        assert_eq!(b.clamp(10.0), 0.0);
        let b = ScrollBounds::new(-1.0, 1.0);
        assert_eq!(b.clamp(f32::NAN), -1.0);
        assert_eq!(b.clamp(f32::INFINITY), 1.0);
        assert_eq!(ScrollBounds::new(f32::NAN, 2.0), ScrollBounds { min: 2.0, max: 2.0 });
    }
}
