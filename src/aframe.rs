// Attribute formatting for A-Frame entities.
// Pure helpers; the host-side tests include this file directly.

use crate::constants::*;
use glam::{EulerRot, Quat, Vec3};
use xr_core::{Handedness, TargetState};

/// `"x y z"` as A-Frame's vec3 attribute syntax.
#[inline]
pub fn vec3_attr(v: Vec3) -> String {
    format!(
        "{:.4} {:.4} {:.4}",
        unsigned_zero(v.x),
        unsigned_zero(v.y),
        unsigned_zero(v.z)
    )
}

// Values that print as zero (including -0.0) are written without a sign.
#[inline]
fn unsigned_zero(v: f32) -> f32 {
    if v.abs() < 5e-5 {
        0.0
    } else {
        v
    }
}

/// A-Frame rotations are Euler degrees applied in YXZ order.
pub fn rotation_degrees(q: Quat) -> Vec3 {
    let (y, x, z) = q.normalize().to_euler(EulerRot::YXZ);
    Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
}

#[inline]
pub fn rotation_attr(q: Quat) -> String {
    vec3_attr(rotation_degrees(q))
}

pub fn marker_color(hand: Handedness) -> &'static str {
    match hand {
        Handedness::Left => MARKER_COLOR_LEFT,
        Handedness::Right => MARKER_COLOR_RIGHT,
    }
}

/// Color for a target in `state`; idle targets keep their own color.
pub fn state_color(state: TargetState, idle: &'static str) -> &'static str {
    match state {
        TargetState::Idle => idle,
        TargetState::Hovered(_) => TARGET_HOVER_COLOR,
        TargetState::Engaged(Handedness::Left) => TARGET_ENGAGED_LEFT_COLOR,
        TargetState::Engaged(Handedness::Right) => TARGET_ENGAGED_RIGHT_COLOR,
    }
}

/// Value for A-Frame's `line` component between two points.
pub fn line_attr(start: Vec3, end: Vec3, color: &str) -> String {
    format!(
        "start: {}; end: {}; color: {}",
        vec3_attr(start),
        vec3_attr(end),
        color
    )
}

#[inline]
pub fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Entity id for a marker slot, e.g. `marker-left-index-finger-tip`.
pub fn marker_element_id(hand: Handedness, joint: xr_core::HandJoint) -> String {
    format!("marker-{}-{}", hand.as_str(), joint.xr_name())
}

#[inline]
pub fn target_element_id(name: &str) -> String {
    format!("target-{}", name)
}
