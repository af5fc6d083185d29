//! Per-frame copy of joint poses onto the marker pool.

use crate::hand::{HandJoint, Handedness, JOINT_COUNT};
use crate::markers::{MarkerId, MarkerPool};
use crate::pose::{HandPoses, JointPose, PoseError};
use crate::render::RenderTarget;
use glam::Vec3;

/// Keeps markers aligned with the latest joint poses.
///
/// A joint without a pose this frame is hidden, never frozen at its last
/// transform. Render calls for visibility are issued only on change.
///
/// Query failures are logged at `warn` once per streak. A streak ends when
/// the hand is tracked again or reported unavailable (out of view), so a
/// failure after the hand comes back into view warns again.
#[derive(Debug)]
pub struct PoseSync {
    enabled: bool,
    failing: [bool; 2],
}

impl PoseSync {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            failing: [false; 2],
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether `hand` is inside a failure streak.
    #[inline]
    pub fn is_failing(&self, hand: Handedness) -> bool {
        self.failing[hand.index()]
    }

    /// Apply one hand's query result. Returns whether the hand was tracked.
    pub fn sync_hand<R: RenderTarget>(
        &mut self,
        pool: &mut MarkerPool,
        render: &mut R,
        hand: Handedness,
        result: Result<HandPoses, PoseError>,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        match result {
            Ok(HandPoses::Tracked(poses)) => {
                if std::mem::take(&mut self.failing[hand.index()]) {
                    log::info!("[sync] {} hand pose queries recovered", hand);
                }
                apply_poses(pool, render, hand, &poses);
                true
            }
            Ok(HandPoses::Unavailable) => {
                self.failing[hand.index()] = false;
                hide_hand(pool, render, hand);
                false
            }
            Err(e) => {
                if self.failing[hand.index()] {
                    log::debug!("[sync] {}", e);
                } else {
                    log::warn!("[sync] skipping hand for this frame: {}", e);
                    self.failing[hand.index()] = true;
                }
                hide_hand(pool, render, hand);
                false
            }
        }
    }
}

/// Copy `poses` onto `hand`'s markers. Joints with no valid pose are hidden.
/// Returns the number of markers shown.
pub fn apply_poses<R: RenderTarget>(
    pool: &mut MarkerPool,
    render: &mut R,
    hand: Handedness,
    poses: &[JointPose],
) -> usize {
    let mut latest: [Option<&JointPose>; JOINT_COUNT] = [None; JOINT_COUNT];
    for pose in poses {
        if pose.hand != hand {
            log::debug!(
                "[sync] ignoring {} pose for {} delivered with {} hand",
                pose.joint,
                pose.hand,
                hand
            );
            continue;
        }
        if !pose.is_valid() {
            continue;
        }
        latest[pose.joint.index()] = Some(pose);
    }

    let mut shown = 0;
    for joint in HandJoint::ALL {
        let id = MarkerId::for_joint(hand, joint);
        let marker = pool.get_mut(id);
        match latest[joint.index()] {
            Some(pose) => {
                marker.translation = pose.translation;
                marker.rotation = pose.rotation;
                marker.scale = Vec3::splat(pose.radius);
                render.set_transform(id, marker.translation, marker.rotation, marker.scale);
                if !marker.visible {
                    marker.visible = true;
                    render.set_visible(id, true);
                }
                shown += 1;
            }
            None => {
                if marker.visible {
                    marker.visible = false;
                    render.set_visible(id, false);
                }
            }
        }
    }
    shown
}

pub fn hide_hand<R: RenderTarget>(pool: &mut MarkerPool, render: &mut R, hand: Handedness) {
    for joint in HandJoint::ALL {
        let id = MarkerId::for_joint(hand, joint);
        let marker = pool.get_mut(id);
        if marker.visible {
            marker.visible = false;
            render.set_visible(id, false);
        }
    }
}
