// Shared interaction and scene tuning constants used by the web frontend.

// Camera
pub const CAMERA_Z_DESKTOP: f32 = 60.0;
pub const CAMERA_Z_MOBILE: f32 = 45.0; // closer so POIs stay legible on narrow screens
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Layout breakpoint (CSS px); narrower viewports are treated as mobile
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Scrolling
pub const MAX_SCROLL_SPEED: f32 = 2.5; // world units per frame
pub const SCROLL_DAMPING: f32 = 0.95; // per-frame velocity multiplier
pub const SCROLL_EPSILON: f32 = 0.001; // below this the camera stops adjusting
pub const WHEEL_VELOCITY_FACTOR: f32 = 0.002; // world units per frame per wheel delta
pub const MOBILE_SCROLL_MULTIPLIER: f32 = 1.6;
pub const KEY_SCROLL_IMPULSE: f32 = 0.8;
pub const FRAME_MS: f32 = 1000.0 / 60.0;
pub const FLING_STALE_MS: f64 = 100.0; // a finger resting this long before release carries no momentum

// Scroll bounds as a fraction of the half visible height at the POI plane.
// The bottom inset is smaller, leaving more headroom below the last POI.
pub const SCROLL_TOP_INSET: f32 = 0.5;
pub const SCROLL_BOTTOM_INSET: f32 = 0.2;

// Tap detection on touch screens
pub const TAP_SLOP_PX: f32 = 10.0;
pub const TAP_MAX_MS: f64 = 300.0;

// Hit-testing
pub const POI_GLYPH_RADIUS: f32 = 1.2; // visible glyph radius in world units
pub const HITBOX_SCALE_DESKTOP: f32 = 1.8;
pub const HITBOX_SCALE_MOBILE: f32 = 3.0;
pub const HIT_MAX_DISTANCE_DESKTOP: f32 = 150.0;
pub const HIT_MAX_DISTANCE_MOBILE: f32 = 300.0;

// Info panel
pub const PANEL_MIN_WIDTH: f32 = 220.0;
pub const PANEL_MAX_WIDTH: f32 = 380.0;
pub const PANEL_PADDING: f32 = 32.0; // horizontal padding inside the panel (both sides)
pub const PANEL_TITLE_CHAR_PX: f32 = 11.0; // rough glyph advance for the title font
pub const PANEL_BODY_CHAR_PX: f32 = 7.0; // rough glyph advance for the body font
pub const PANEL_BODY_LINES: f32 = 4.0; // description wraps to about this many lines before widening stops
pub const PANEL_ANCHOR_GAP: f32 = 24.0; // distance between the POI and the panel edge
pub const PANEL_EDGE_MARGIN: f32 = 12.0; // minimum distance to the viewport edge
pub const PANEL_OPEN_TIMEOUT_MS: i32 = 450;
pub const PANEL_CLOSE_TIMEOUT_MS: i32 = 400;
pub const SHEET_DISMISS_PX: f32 = 80.0;

// Touch fade
pub const TOUCH_FADE_DELAY_MS: f64 = 250.0;
pub const TOUCH_FADE_DURATION_MS: f64 = 600.0;

// Star field
pub const STAR_COUNT_DESKTOP: usize = 1400;
pub const STAR_COUNT_MOBILE: usize = 700;
pub const STAR_FIELD_HALF_WIDTH: f32 = 120.0;
pub const STAR_FIELD_MARGIN_Y: f32 = 80.0; // extra vertical extent beyond the POIs
pub const STAR_DEPTH_NEAR: f32 = -10.0;
pub const STAR_DEPTH_FAR: f32 = -160.0;
pub const STAR_PARALLAX: f32 = 0.35; // fraction of camera travel the farthest stars lag behind
pub const STAR_SEED: u64 = 42;

// Colour adjustments
pub const HOVER_BRIGHTEN: f32 = 1.4;
