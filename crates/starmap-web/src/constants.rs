// DOM contract with index.html

pub const CANVAS_ID: &str = "starmap-canvas";
pub const BACKDROP_ID: &str = "panel-backdrop";

pub const PANEL_CLASS: &str = "info-panel";
pub const PANEL_SHEET_CLASS: &str = "info-panel--sheet";
pub const PANEL_FLOATING_CLASS: &str = "info-panel--floating";
pub const PANEL_CLOSE_SELECTOR: &str = ".info-panel__close";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const DRAGGING_CLASS: &str = "is-dragging";

// Wheel deltaMode values
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;
pub const WHEEL_LINE_PX: f32 = 16.0;

// Rendering
pub const BACKGROUND: &str = "#02030a";
pub const LABEL_FONT: &str = "12px system-ui, sans-serif";
pub const POI_MIN_RADIUS_PX: f64 = 3.0;
pub const GLOW_RADIUS_FACTOR: f64 = 3.5;
pub const TOUCH_RING_RADIUS_PX: f64 = 26.0;
