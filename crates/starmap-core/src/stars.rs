//! Background star field: seeded generation, twinkle and depth parallax.

use crate::config::StarFieldConfig;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec3,
    /// Radius in CSS px at the reference depth.
    pub size: f32,
    pub color_rgb: [f32; 3],
    pub base_brightness: f32,
    pub twinkle_phase: f32,
    /// Radians per second.
    pub twinkle_speed: f32,
}

pub struct StarField {
    pub stars: Vec<Star>,
    depth_near: f32,
    depth_far: f32,
    parallax: f32,
}

// Rough blackbody tints from hot blue-white to cool orange
const STAR_TINTS: [[f32; 3]; 5] = [
    [0.70, 0.80, 1.00],
    [0.88, 0.92, 1.00],
    [1.00, 1.00, 1.00],
    [1.00, 0.93, 0.80],
    [1.00, 0.78, 0.60],
];

impl StarField {
    /// Scatter stars over `[y_min - margin, y_max + margin]`.
    pub fn generate(cfg: &StarFieldConfig, y_min: f32, y_max: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let (lo, hi) = if y_min <= y_max { (y_min, y_max) } else { (y_max, y_min) };
        let lo = lo - cfg.margin_y;
        let hi = hi + cfg.margin_y;
        let (far, near) = (
            cfg.depth_far.min(cfg.depth_near),
            cfg.depth_far.max(cfg.depth_near),
        );
        let stars = (0..cfg.count)
            .map(|_| {
                let z = if far < near { rng.gen_range(far..near) } else { near };
                // Spread far stars wider so they still fill the frame.
                let depth_t = depth_fraction(z, near, far);
                let half_w = cfg.half_width * (1.0 + depth_t);
                let x = rng.gen_range(-half_w..=half_w);
                let y = rng.gen_range(lo..=hi);
                let tint = STAR_TINTS[rng.gen_range(0..STAR_TINTS.len())];
                Star {
                    position: Vec3::new(x, y, z),
                    size: rng.gen_range(0.4..1.6) * (1.0 - 0.5 * depth_t),
                    color_rgb: tint,
                    base_brightness: rng.gen_range(0.35..1.0),
                    twinkle_phase: rng.gen_range(0.0..TAU),
                    twinkle_speed: rng.gen_range(0.4..2.2),
                }
            })
            .collect();
        Self {
            stars,
            depth_near: near,
            depth_far: far,
            parallax: cfg.parallax,
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Brightness in \[0, 1\] at `time_sec`.
    pub fn brightness(star: &Star, time_sec: f32) -> f32 {
        let tw = 0.5 + 0.5 * (star.twinkle_phase + star.twinkle_speed * time_sec).sin();
        (star.base_brightness * (0.6 + 0.4 * tw)).clamp(0.0, 1.0)
    }

    /// World position including parallax: deeper stars follow the camera
    /// part of the way, so they appear to move slower.
    pub fn apparent_position(&self, star: &Star, camera_y: f32) -> Vec3 {
        let t = depth_fraction(star.position.z, self.depth_near, self.depth_far);
        let follow = self.parallax * t;
        star.position + Vec3::new(0.0, camera_y * follow, 0.0)
    }
}

// 0 at the near plane, 1 at the far plane.
#[inline]
fn depth_fraction(z: f32, near: f32, far: f32) -> f32 {
    let span = near - far;
    if span <= f32::EPSILON {
        return 0.0;
    }
    ((near - z) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StarMapConfig;

    #[test]
    fn generation_is_deterministic_and_bounded() {
        let cfg = StarMapConfig::default().stars;
        let a = StarField::generate(&cfg, -50.0, 60.0);
        let b = StarField::generate(&cfg, -50.0, 60.0);
        assert_eq!(a.len(), cfg.count);
        for (sa, sb) in a.stars.iter().zip(&b.stars) {
            assert_eq!(sa.position, sb.position);
            assert!(sa.position.y >= -50.0 - cfg.margin_y && sa.position.y <= 60.0 + cfg.margin_y);
            assert!(sa.position.z <= cfg.depth_near && sa.position.z >= cfg.depth_far);
        }
    }

    #[test]
    fn far_stars_lag_the_camera() {
        let cfg = StarMapConfig::default().stars;
        let field = StarField::generate(&cfg, 0.0, 0.0);
        let mut near = field.stars[0].clone();
        near.position.z = cfg.depth_near;
        let mut far = near.clone();
        far.position.z = cfg.depth_far;
        assert_eq!(field.apparent_position(&near, 10.0).y, near.position.y);
        let shifted = field.apparent_position(&far, 10.0).y - far.position.y;
        assert!((shifted - 10.0 * cfg.parallax).abs() < 1e-4);
    }

    #[test]
    fn brightness_stays_in_unit_range() {
        let cfg = StarMapConfig::default().stars;
        let field = StarField::generate(&cfg, 0.0, 10.0);
        for s in field.stars.iter().take(50) {
            for t in [0.0, 0.7, 3.3, 100.0] {
                let b = StarField::brightness(s, t);
                assert!((0.0..=1.0).contains(&b));
            }
        }
    }
}
