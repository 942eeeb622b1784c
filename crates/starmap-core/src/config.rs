//! Tuning parameters grouped per subsystem, with desktop and mobile profiles.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn from_viewport_width(width_px: f32, breakpoint_px: f32) -> Self {
        if width_px < breakpoint_px {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub z: f32,
    pub fovy_degrees: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    pub max_speed: f32,
    pub damping: f32,
    pub epsilon: f32,
    pub wheel_factor: f32,
    /// Extra gain applied to wheel input on mobile.
    pub wheel_multiplier: f32,
    pub top_inset: f32,
    pub bottom_inset: f32,
    pub tap_slop_px: f32,
    pub tap_max_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HitTestConfig {
    pub hitbox_scale: f32,
    pub max_distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    pub breakpoint_px: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub open_timeout_ms: i32,
    pub close_timeout_ms: i32,
    pub sheet_dismiss_px: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarFieldConfig {
    pub count: usize,
    pub seed: u64,
    pub half_width: f32,
    pub margin_y: f32,
    pub depth_near: f32,
    pub depth_far: f32,
    pub parallax: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarMapConfig {
    pub device: DeviceClass,
    pub camera: CameraConfig,
    pub scroll: ScrollConfig,
    pub hit_test: HitTestConfig,
    pub panel: PanelConfig,
    pub stars: StarFieldConfig,
}

impl Default for StarMapConfig {
    fn default() -> Self {
        Self::for_device(DeviceClass::Desktop)
    }
}

impl StarMapConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        let mobile = device.is_mobile();
        Self {
            device,
            camera: CameraConfig {
                z: if mobile { CAMERA_Z_MOBILE } else { CAMERA_Z_DESKTOP },
                fovy_degrees: CAMERA_FOVY_DEG,
            },
            scroll: ScrollConfig {
                max_speed: MAX_SCROLL_SPEED,
                damping: SCROLL_DAMPING,
                epsilon: SCROLL_EPSILON,
                wheel_factor: WHEEL_VELOCITY_FACTOR,
                wheel_multiplier: if mobile { MOBILE_SCROLL_MULTIPLIER } else { 1.0 },
                top_inset: SCROLL_TOP_INSET,
                bottom_inset: SCROLL_BOTTOM_INSET,
                tap_slop_px: TAP_SLOP_PX,
                tap_max_ms: TAP_MAX_MS,
            },
            hit_test: HitTestConfig {
                hitbox_scale: if mobile { HITBOX_SCALE_MOBILE } else { HITBOX_SCALE_DESKTOP },
                max_distance: if mobile {
                    HIT_MAX_DISTANCE_MOBILE
                } else {
                    HIT_MAX_DISTANCE_DESKTOP
                },
            },
            panel: PanelConfig {
                breakpoint_px: MOBILE_BREAKPOINT_PX,
                min_width: PANEL_MIN_WIDTH,
                max_width: PANEL_MAX_WIDTH,
                open_timeout_ms: PANEL_OPEN_TIMEOUT_MS,
                close_timeout_ms: PANEL_CLOSE_TIMEOUT_MS,
                sheet_dismiss_px: SHEET_DISMISS_PX,
            },
            stars: StarFieldConfig {
                count: if mobile { STAR_COUNT_MOBILE } else { STAR_COUNT_DESKTOP },
                seed: STAR_SEED,
                half_width: STAR_FIELD_HALF_WIDTH,
                margin_y: STAR_FIELD_MARGIN_Y,
                depth_near: STAR_DEPTH_NEAR,
                depth_far: STAR_DEPTH_FAR,
                parallax: STAR_PARALLAX,
            },
        }
    }

    /// Profile for a viewport of the given CSS width.
    pub fn for_viewport_width(width_px: f32) -> Self {
        Self::for_device(DeviceClass::from_viewport_width(
            width_px,
            MOBILE_BREAKPOINT_PX,
        ))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("camera.z", self.camera.z),
            ("camera.fovy_degrees", self.camera.fovy_degrees),
            ("scroll.max_speed", self.scroll.max_speed),
            ("scroll.epsilon", self.scroll.epsilon),
            ("scroll.wheel_factor", self.scroll.wheel_factor),
            ("hit_test.hitbox_scale", self.hit_test.hitbox_scale),
            ("hit_test.max_distance", self.hit_test.max_distance),
            ("panel.breakpoint_px", self.panel.breakpoint_px),
            ("panel.sheet_dismiss_px", self.panel.sheet_dismiss_px),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        let d = self.scroll.damping;
        if !(d > 0.0 && d < 1.0) {
            return Err(ConfigError::DampingOutOfRange(d));
        }
        if self.panel.min_width > self.panel.max_width {
            return Err(ConfigError::InvertedPanelWidth {
                min: self.panel.min_width,
                max: self.panel.max_width,
            });
        }
        Ok(())
    }
}
