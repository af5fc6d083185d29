// Scene-entity and palette constants used by the web frontend.

// DOM ids
pub const SCENE_SELECTOR: &str = "a-scene";
pub const MARKER_ROOT_ID: &str = "hand-markers";
pub const TARGET_ROOT_ID: &str = "xr-targets";
pub const MENU_PANEL_ID: &str = "menu-panel";
pub const STATUS_OVERLAY_ID: &str = "xr-status";
pub const STATUS_CLOSE_ID: &str = "xr-status-close";

// Marker look: unit spheres scaled by joint radius
pub const MARKER_COLOR_LEFT: &str = "#7fd1ff";
pub const MARKER_COLOR_RIGHT: &str = "#ffb37f";
pub const MARKER_OPACITY: f32 = 0.85;
pub const MARKER_SEGMENTS: u32 = 8; // low poly, 50 of them per frame

// Target palette by state
pub const TARGET_IDLE_COLOR: &str = "#e0e0e0";
pub const TARGET_HOVER_COLOR: &str = "#fff3a0";
pub const TARGET_ENGAGED_LEFT_COLOR: &str = "#2f9bff";
pub const TARGET_ENGAGED_RIGHT_COLOR: &str = "#ff6a2f";

pub const PLANET_IDLE_COLORS: [&str; 4] = ["#b5a89a", "#e6c87a", "#4f8fe0", "#c1543a"];
pub const SUN_COLOR: &str = "#ffd75e";
pub const SUN_RADIUS: f32 = 0.07;
pub const SLIDER_TRACK_COLOR: &str = "#8a9bb0";

// Frame processing above this budget is logged at debug level
pub const SLOW_FRAME_MS: f64 = 4.0;

// Reference space requested when the scene does not expose its own
pub const FALLBACK_REFERENCE_SPACE: &str = "local-floor";
