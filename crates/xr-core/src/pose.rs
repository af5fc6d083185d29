//! Joint poses and the per-frame pose source seam.

use crate::hand::{HandJoint, Handedness};
use glam::{Quat, Vec3};
use std::fmt;

/// Position, orientation and radius of one tracked joint at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointPose {
    pub hand: Handedness,
    pub joint: HandJoint,
    pub translation: Vec3,
    pub rotation: Quat,
    pub radius: f32,
}

impl JointPose {
    pub fn new(
        hand: Handedness,
        joint: HandJoint,
        translation: Vec3,
        rotation: Quat,
        radius: f32,
    ) -> Self {
        Self {
            hand,
            joint,
            translation,
            rotation,
            radius,
        }
    }

    /// A pose the sync can apply: finite components and a non-negative radius.
    pub fn is_valid(&self) -> bool {
        self.translation.is_finite()
            && self.rotation.is_finite()
            && self.radius.is_finite()
            && self.radius >= 0.0
    }
}

/// One hand's pose data for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub enum HandPoses {
    /// Joints tracked this frame. Joints missing from the list are untracked.
    Tracked(Vec<JointPose>),
    /// Hand not in view or tracking lost.
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillKind {
    Poses,
    Radii,
}

impl fmt::Display for FillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillKind::Poses => f.write_str("poses"),
            FillKind::Radii => f.write_str("radii"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error("{hand} hand: platform could not fill joint {kind} for the whole hand")]
    FillFailed { hand: Handedness, kind: FillKind },
    #[error("{hand} hand: pose query rejected: {message}")]
    Platform { hand: Handedness, message: String },
}

impl PoseError {
    pub fn hand(&self) -> Handedness {
        match self {
            PoseError::FillFailed { hand, .. } | PoseError::Platform { hand, .. } => *hand,
        }
    }
}

/// Supplies joint poses once per hand per rendered frame.
pub trait PoseSource {
    /// Whether the platform can report joint poses and radii at all.
    /// Queried once when a session starts.
    fn supports_joint_poses(&self) -> bool;

    fn joint_poses(&mut self, hand: Handedness) -> Result<HandPoses, PoseError>;
}
