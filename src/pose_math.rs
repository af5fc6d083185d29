// Conversion of `fillPoses` output into joint poses.
// Pure helpers; the host-side tests include this file directly.

use glam::Mat4;
use xr_core::{HandJoint, Handedness, JointPose, JOINT_COUNT};

pub const FLOATS_PER_POSE: usize = 16;
pub const TRANSFORM_BUFFER_LEN: usize = JOINT_COUNT * FLOATS_PER_POSE;

/// Decode one column-major 4x4 rigid transform.
pub fn joint_pose_from_matrix(
    hand: Handedness,
    joint: HandJoint,
    matrix: &[f32],
    radius: f32,
) -> Option<JointPose> {
    let cols: &[f32; 16] = matrix.get(..FLOATS_PER_POSE)?.try_into().ok()?;
    let (_scale, rotation, translation) = Mat4::from_cols_array(cols).to_scale_rotation_translation();
    let pose = JointPose::new(hand, joint, translation, rotation, radius);
    pose.is_valid().then_some(pose)
}

/// Decode a whole hand: `transforms` holds 25 matrices in joint order and
/// `radii` 25 radii. Joints whose matrix does not decode are left out.
pub fn hand_poses_from_buffers(hand: Handedness, transforms: &[f32], radii: &[f32]) -> Vec<JointPose> {
    HandJoint::ALL
        .iter()
        .filter_map(|&joint| {
            let start = joint.index() * FLOATS_PER_POSE;
            let matrix = transforms.get(start..start + FLOATS_PER_POSE)?;
            let radius = *radii.get(joint.index())?;
            joint_pose_from_matrix(hand, joint, matrix, radius)
        })
        .collect()
}
