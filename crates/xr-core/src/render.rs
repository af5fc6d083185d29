use crate::interaction::{TargetId, TargetState};
use crate::markers::MarkerId;
use glam::{Quat, Vec3};

/// Visual side of the session: the only place marker and target state leaves
/// the core. Implemented over scene entities on the web and over a log in the
/// native harness.
pub trait RenderTarget {
    fn set_transform(&mut self, marker: MarkerId, translation: Vec3, rotation: Quat, scale: Vec3);
    fn set_visible(&mut self, marker: MarkerId, visible: bool);
    fn set_target_state(&mut self, target: TargetId, state: TargetState);
    fn set_target_position(&mut self, target: TargetId, position: Vec3);
    /// Uniform scale relative to the target's size at scene setup.
    fn set_target_scale(&mut self, target: TargetId, scale: f32);
}
