//! Scene state shared by input handlers and the frame loop.

use crate::camera::{CameraRig, Viewport};
use crate::config::{DeviceClass, StarMapConfig};
use crate::fade::TouchFade;
use crate::hit_test::{self, Hit};
use crate::poi::{PoiId, PoiRegistry};
use crate::scroll::{Release, ScrollBounds, ScrollState};
use glam::Vec2;

pub struct StarMap {
    pub registry: PoiRegistry,
    pub config: StarMapConfig,
    pub camera: CameraRig,
    pub viewport: Viewport,
    pub scroll: ScrollState,
    pub bounds: ScrollBounds,
    pub hover: Option<PoiId>,
    pub touch_fade: TouchFade,
    plane_z: f32,
}

impl StarMap {
    /// Camera starts on the top POI (clamped into the scroll range).
    pub fn new(registry: PoiRegistry, config: StarMapConfig, viewport: Viewport) -> Self {
        let plane_z = registry.mean_z();
        let camera = CameraRig {
            y: 0.0,
            z: config.camera.z,
            fovy_radians: config.camera.fovy_degrees.to_radians(),
            aspect: viewport.aspect(),
            znear: crate::constants::CAMERA_ZNEAR,
            zfar: crate::constants::CAMERA_ZFAR,
        };
        let mut map = Self {
            registry,
            config,
            camera,
            viewport,
            scroll: ScrollState::default(),
            bounds: ScrollBounds::new(0.0, 0.0),
            hover: None,
            touch_fade: TouchFade::default(),
            plane_z,
        };
        map.refresh_bounds();
        map.camera.y = map.bounds.max;
        map
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        self.refresh_bounds();
        self.camera.y = self.bounds.clamp(self.camera.y);
    }

    /// Switch tuning when the viewport crosses the mobile breakpoint.
    pub fn set_device(&mut self, device: DeviceClass) {
        if self.config.device == device {
            return;
        }
        log::info!("[map] device class {:?} -> {:?}", self.config.device, device);
        self.config = StarMapConfig::for_device(device);
        self.camera.z = self.config.camera.z;
        self.camera.fovy_radians = self.config.camera.fovy_degrees.to_radians();
        self.refresh_bounds();
        self.camera.y = self.bounds.clamp(self.camera.y);
    }

    fn refresh_bounds(&mut self) {
        let half = self.camera.half_visible_height(self.plane_z);
        self.bounds = ScrollBounds::from_registry(&self.registry, half, &self.config.scroll);
        log::debug!(
            "[scroll] bounds [{:.2}, {:.2}]",
            self.bounds.min,
            self.bounds.max
        );
    }

    pub fn world_per_pixel(&self) -> f32 {
        self.camera.world_per_pixel(self.plane_z, &self.viewport)
    }

    /// POI under a point given relative to the surface's top-left corner.
    pub fn pick(&self, px: Vec2) -> Option<Hit> {
        let ray = self.camera.ray_from_ndc(self.viewport.to_ndc(px));
        hit_test::pick(&self.registry, &ray, &self.config.hit_test)
    }

    /// Screen position (CSS px) of a POI, if in front of the camera.
    pub fn screen_position(&self, id: PoiId) -> Option<Vec2> {
        let poi = self.registry.get(id)?;
        let ndc = self.camera.project(poi.position)?;
        Some(self.viewport.from_ndc(ndc))
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.scroll.wheel(delta_y, &self.config.scroll);
    }

    /// Keyboard scrolling.
    pub fn impulse(&mut self, dv: f32) {
        self.scroll.impulse(dv, &self.config.scroll);
    }

    pub fn touch_start(&mut self, at: Vec2, time_ms: f64) {
        self.touch_fade.touch();
        self.scroll.touch_start(at, time_ms, self.camera.y);
    }

    pub fn touch_move(&mut self, at: Vec2, time_ms: f64) {
        self.touch_fade.touch();
        let wpp = self.world_per_pixel();
        self.scroll.touch_move(at, time_ms, wpp, &self.bounds);
    }

    pub fn touch_end(&mut self, time_ms: f64) -> Release {
        self.touch_fade.release(time_ms);
        let wpp = self.world_per_pixel();
        self.scroll.touch_end(time_ms, wpp, &self.config.scroll)
    }

    pub fn touch_cancel(&mut self, time_ms: f64) {
        self.touch_fade.release(time_ms);
        self.scroll.cancel_drag();
    }

    /// Integrate one frame of scrolling into the camera.
    pub fn step(&mut self) -> f32 {
        self.camera.y = self.scroll.step(self.camera.y, &self.bounds, &self.config.scroll);
        self.camera.y
    }
}
