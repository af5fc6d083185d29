//! Hand-to-target proximity checks.

use crate::hand::{HandJoint, Handedness};
use crate::interaction::{InteractionTarget, TargetId, TargetState};
use crate::markers::MarkerPool;
use crate::render::RenderTarget;
use glam::Vec3;
use smallvec::SmallVec;

/// Which hand is reported when both are inside a target's radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HandPriority {
    #[default]
    LeftFirst,
    RightFirst,
}

impl HandPriority {
    #[inline]
    pub fn order(self) -> [Handedness; 2] {
        match self {
            HandPriority::LeftFirst => [Handedness::Left, Handedness::Right],
            HandPriority::RightFirst => [Handedness::Right, Handedness::Left],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetTransition {
    pub target: TargetId,
    pub from: TargetState,
    pub to: TargetState,
    /// Entered `Engaged` on a pressable target.
    pub pressed: bool,
}

pub type Transitions = SmallVec<[TargetTransition; 4]>;

pub struct ProximityEvaluator {
    joints: SmallVec<[HandJoint; 2]>,
    priority: HandPriority,
}

impl ProximityEvaluator {
    pub fn new(joints: &[HandJoint], priority: HandPriority) -> Self {
        Self {
            joints: joints.iter().copied().collect(),
            priority,
        }
    }

    #[inline]
    pub fn priority(&self) -> HandPriority {
        self.priority
    }

    /// First hand, in priority order, with a designated visible marker
    /// strictly closer than `radius` to `position`.
    pub fn contact(&self, pool: &MarkerPool, position: Vec3, radius: f32) -> Option<Handedness> {
        self.priority.order().into_iter().find(|&hand| {
            self.joints.iter().any(|&joint| {
                pool.marker(hand, joint)
                    .position()
                    .is_some_and(|p| p.distance(position) < radius)
            })
        })
    }

    /// Next state for `target` without applying it. Held targets stay engaged
    /// by the holding hand.
    pub fn state_for(&self, pool: &MarkerPool, target: &InteractionTarget) -> TargetState {
        if let Some(hand) = target.held_by {
            return TargetState::Engaged(hand);
        }
        let engaged_by = self.contact(pool, target.position, target.trigger_radius);
        let hovered_by = match (engaged_by, target.hover_radius) {
            (None, Some(r)) => self.contact(pool, target.position, r),
            _ => None,
        };
        TargetState::next(engaged_by, hovered_by)
    }

    /// Update every target's state, notifying `render` and `out` on change.
    pub fn evaluate<R: RenderTarget>(
        &self,
        pool: &MarkerPool,
        targets: &mut [InteractionTarget],
        render: &mut R,
        out: &mut Transitions,
    ) {
        for target in targets.iter_mut() {
            let next = self.state_for(pool, target);
            if next == target.state {
                continue;
            }
            let transition = TargetTransition {
                target: target.id,
                from: target.state,
                to: next,
                pressed: target.pressable && next.is_engaged() && !target.state.is_engaged(),
            };
            log::debug!(
                "[proximity] {} {:?} -> {:?}",
                target.name,
                transition.from,
                transition.to
            );
            target.state = next;
            render.set_target_state(target.id, next);
            out.push(transition);
        }
    }
}
