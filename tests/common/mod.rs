// Shared fakes for host-side session tests: a render target that records
// every call and a pose source fed from per-hand queues.

#![allow(dead_code)]

use glam::{Quat, Vec3};
use std::collections::VecDeque;
use xr_core::*;

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    Transform(MarkerId, Vec3, Quat, Vec3),
    Visible(MarkerId, bool),
    TargetState(TargetId, TargetState),
    TargetPosition(TargetId, Vec3),
    TargetScale(TargetId, f32),
}

#[derive(Default)]
pub struct RecordingTarget {
    pub calls: Vec<RenderCall>,
}

impl RecordingTarget {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn visibility_of(&self, id: MarkerId) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            RenderCall::Visible(m, v) if *m == id => Some(*v),
            _ => None,
        })
    }

    pub fn target_states(&self) -> Vec<(TargetId, TargetState)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RenderCall::TargetState(t, s) => Some((*t, *s)),
                _ => None,
            })
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn set_transform(&mut self, marker: MarkerId, translation: Vec3, rotation: Quat, scale: Vec3) {
        self.calls
            .push(RenderCall::Transform(marker, translation, rotation, scale));
    }

    fn set_visible(&mut self, marker: MarkerId, visible: bool) {
        self.calls.push(RenderCall::Visible(marker, visible));
    }

    fn set_target_state(&mut self, target: TargetId, state: TargetState) {
        self.calls.push(RenderCall::TargetState(target, state));
    }

    fn set_target_position(&mut self, target: TargetId, position: Vec3) {
        self.calls.push(RenderCall::TargetPosition(target, position));
    }

    fn set_target_scale(&mut self, target: TargetId, scale: f32) {
        self.calls.push(RenderCall::TargetScale(target, scale));
    }
}

/// Pose source replaying queued per-hand results. An empty queue reports the
/// hand as unavailable.
pub struct QueuedSource {
    pub supported: bool,
    pub queues: [VecDeque<Result<HandPoses, PoseError>>; 2],
    pub queries: usize,
}

impl QueuedSource {
    pub fn new() -> Self {
        Self {
            supported: true,
            queues: [VecDeque::new(), VecDeque::new()],
            queries: 0,
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub fn push(&mut self, hand: Handedness, result: Result<HandPoses, PoseError>) {
        self.queues[hand.index()].push_back(result);
    }

    pub fn push_tracked(&mut self, hand: Handedness, poses: Vec<JointPose>) {
        self.push(hand, Ok(HandPoses::Tracked(poses)));
    }
}

impl PoseSource for QueuedSource {
    fn supports_joint_poses(&self) -> bool {
        self.supported
    }

    fn joint_poses(&mut self, hand: Handedness) -> Result<HandPoses, PoseError> {
        self.queries += 1;
        self.queues[hand.index()]
            .pop_front()
            .unwrap_or(Ok(HandPoses::Unavailable))
    }
}

pub fn pose(hand: Handedness, joint: HandJoint, at: Vec3) -> JointPose {
    JointPose::new(hand, joint, at, Quat::IDENTITY, 0.01)
}

/// A full 25-joint hand laid out along +x from `origin`.
pub fn full_hand(hand: Handedness, origin: Vec3) -> Vec<JointPose> {
    HandJoint::ALL
        .iter()
        .enumerate()
        .map(|(i, &joint)| {
            JointPose::new(
                hand,
                joint,
                origin + Vec3::new(i as f32 * 0.01, 0.0, 0.0),
                Quat::from_rotation_y(i as f32 * 0.1),
                0.005 + i as f32 * 0.0005,
            )
        })
        .collect()
}

pub fn orb_scene() -> SceneSetup {
    SceneSetup::new().with_target(TargetSpec::new("orb", Vec3::new(0.0, 0.0, -0.65), 0.25))
}
