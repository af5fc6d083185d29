use glam::Vec3;

// Shared interaction tuning and scene layout used by both web and native frontends.
// Distances are metres in the session's reference space.

// Interaction
pub const TRIGGER_RADIUS_PER_UNIT_SCALE: f32 = 0.5; // unit primitive reaches half its scale
pub const PINCH_START_DISTANCE: f32 = 0.02; // thumb tip to index tip
pub const PINCH_END_DISTANCE: f32 = 0.04; // must exceed start (hysteresis)

// Frame pacing
pub const MAX_FRAME_DT_SEC: f64 = 0.1; // larger gaps (tab hidden, session paused) are clamped

// Demo scene: touch orb in front of the viewer
pub const ORB_POSITION: [f32; 3] = [0.0, 1.3, -0.65];
pub const ORB_SCALE: f32 = 0.5;
pub const ORB_HOVER_RADIUS: f32 = 0.35;

// Demo scene: menu toggle button and pinchable cube
pub const MENU_BUTTON_POSITION: [f32; 3] = [0.35, 1.15, -0.5];
pub const MENU_BUTTON_RADIUS: f32 = 0.05;
pub const MENU_BUTTON_HOVER_RADIUS: f32 = 0.1;
pub const CUBE_POSITION: [f32; 3] = [-0.3, 1.15, -0.5];
pub const CUBE_RADIUS: f32 = 0.08;

// Demo scene: slider under the orb that resizes it
pub const SLIDER_TRACK_START: [f32; 3] = [-0.15, 0.95, -0.45];
pub const SLIDER_TRACK_END: [f32; 3] = [0.15, 0.95, -0.45];
pub const SLIDER_KNOB_RADIUS: f32 = 0.04;
pub const SLIDER_INITIAL_VALUE: f32 = 0.5;
pub const ORB_MIN_SCALE: f32 = 0.5; // relative to the orb's setup size
pub const ORB_MAX_SCALE: f32 = 1.5;
pub const SLIDER_VALUE_EPSILON: f32 = 1e-4; // smaller moves are not reported

// Demo scene: planet system
pub const PLANET_CENTER: [f32; 3] = [0.0, 1.6, -1.4];
pub const PLANET_TOUCH_RADIUS: f32 = 0.06;

/// (name, orbit radius, period seconds, phase radians, size)
pub const DEFAULT_PLANETS: [(&str, f32, f32, f32, f32); 4] = [
    ("mercury", 0.18, 6.0, 0.0, 0.025),
    ("venus", 0.28, 10.0, 1.2, 0.04),
    ("earth", 0.40, 16.0, 2.4, 0.045),
    ("mars", 0.52, 24.0, 4.0, 0.035),
];

#[inline]
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}
