// Host-side tests for decoding `fillPoses` buffers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod pose_math {
    include!("../src/pose_math.rs");
}

use glam::{Mat4, Quat, Vec3};
use pose_math::*;
use xr_core::{HandJoint, Handedness, JOINT_COUNT};

fn buffers(origin: Vec3, rotation: Quat) -> (Vec<f32>, Vec<f32>) {
    let mut transforms = Vec::with_capacity(TRANSFORM_BUFFER_LEN);
    for joint in HandJoint::ALL {
        let at = origin + Vec3::new(0.0, 0.01 * joint.index() as f32, 0.0);
        transforms.extend_from_slice(&Mat4::from_rotation_translation(rotation, at).to_cols_array());
    }
    let radii = (0..JOINT_COUNT).map(|i| 0.005 + 0.0001 * i as f32).collect();
    (transforms, radii)
}

#[test]
fn buffer_sizes_match_the_joint_count() {
    assert_eq!(TRANSFORM_BUFFER_LEN, 25 * 16);
}

#[test]
fn decodes_translation_rotation_and_radius() {
    let rotation = Quat::from_rotation_y(0.7);
    let matrix = Mat4::from_rotation_translation(rotation, Vec3::new(0.1, 1.2, -0.4)).to_cols_array();
    let pose = joint_pose_from_matrix(Handedness::Left, HandJoint::ThumbTip, &matrix, 0.008)
        .expect("valid pose");
    assert_eq!(pose.hand, Handedness::Left);
    assert_eq!(pose.joint, HandJoint::ThumbTip);
    assert!((pose.translation - Vec3::new(0.1, 1.2, -0.4)).length() < 1e-5);
    assert!(pose.rotation.angle_between(rotation) < 1e-4);
    assert_eq!(pose.radius, 0.008);
}

#[test]
fn rejects_short_or_non_finite_matrices() {
    let short = [0.0f32; 12];
    assert!(joint_pose_from_matrix(Handedness::Right, HandJoint::Wrist, &short, 0.01).is_none());

    let mut bad = Mat4::IDENTITY.to_cols_array();
    bad[12] = f32::NAN;
    assert!(joint_pose_from_matrix(Handedness::Right, HandJoint::Wrist, &bad, 0.01).is_none());
}

#[test]
fn rejects_negative_radius() {
    let m = Mat4::IDENTITY.to_cols_array();
    assert!(joint_pose_from_matrix(Handedness::Left, HandJoint::Wrist, &m, -0.01).is_none());
}

#[test]
fn full_buffers_decode_every_joint_in_order() {
    let (transforms, radii) = buffers(Vec3::new(0.0, 1.0, -0.5), Quat::IDENTITY);
    let poses = hand_poses_from_buffers(Handedness::Right, &transforms, &radii);
    assert_eq!(poses.len(), JOINT_COUNT);
    for (pose, joint) in poses.iter().zip(HandJoint::ALL) {
        assert_eq!(pose.joint, joint);
        assert_eq!(pose.hand, Handedness::Right);
        let expected_y = 1.0 + 0.01 * joint.index() as f32;
        assert!((pose.translation.y - expected_y).abs() < 1e-5);
        assert!((pose.radius - radii[joint.index()]).abs() < 1e-7);
    }
}

#[test]
fn corrupt_joints_are_left_out() {
    let (mut transforms, radii) = buffers(Vec3::ZERO, Quat::IDENTITY);
    let tip = HandJoint::IndexFingerTip.index();
    transforms[tip * FLOATS_PER_POSE + 13] = f32::INFINITY;
    let poses = hand_poses_from_buffers(Handedness::Left, &transforms, &radii);
    assert_eq!(poses.len(), JOINT_COUNT - 1);
    assert!(poses.iter().all(|p| p.joint != HandJoint::IndexFingerTip));
}

#[test]
fn truncated_buffers_keep_the_joints_that_fit() {
    let (transforms, radii) = buffers(Vec3::ZERO, Quat::IDENTITY);
    let poses = hand_poses_from_buffers(Handedness::Left, &transforms[..5 * FLOATS_PER_POSE], &radii);
    assert_eq!(poses.len(), 5);
}
