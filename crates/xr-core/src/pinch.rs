//! Thumb/index pinch detection and grabbing of pinchable targets.

use crate::constants::{PINCH_END_DISTANCE, PINCH_START_DISTANCE};
use crate::error::SceneError;
use crate::hand::{HandJoint, Handedness};
use crate::interaction::{InteractionTarget, TargetId};
use crate::markers::MarkerPool;
use crate::proximity::HandPriority;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchEvent {
    Started { hand: Handedness, point: Vec3 },
    Ended { hand: Handedness },
    Grabbed { hand: Handedness, target: TargetId },
    Released { hand: Handedness, target: TargetId },
}

pub type PinchEvents = SmallVec<[PinchEvent; 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchThresholds {
    pub start: f32,
    pub end: f32,
}

impl Default for PinchThresholds {
    fn default() -> Self {
        Self {
            start: PINCH_START_DISTANCE,
            end: PINCH_END_DISTANCE,
        }
    }
}

impl PinchThresholds {
    pub fn validate(&self) -> Result<(), SceneError> {
        let ok = self.start.is_finite() && self.end.is_finite() && self.start > 0.0;
        if !ok || self.end <= self.start {
            return Err(SceneError::InvalidPinchThresholds {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct HandPinch {
    pinching: bool,
    point: Vec3,
    holding: Option<TargetId>,
}

pub struct PinchTracker {
    thresholds: PinchThresholds,
    hands: [HandPinch; 2],
}

impl PinchTracker {
    pub fn new(thresholds: PinchThresholds) -> Self {
        Self {
            thresholds,
            hands: [HandPinch::default(); 2],
        }
    }

    #[inline]
    pub fn is_pinching(&self, hand: Handedness) -> bool {
        self.hands[hand.index()].pinching
    }

    #[inline]
    pub fn pinch_point(&self, hand: Handedness) -> Option<Vec3> {
        let h = &self.hands[hand.index()];
        h.pinching.then_some(h.point)
    }

    #[inline]
    pub fn holding(&self, hand: Handedness) -> Option<TargetId> {
        self.hands[hand.index()].holding
    }

    /// Advance pinch state from the current tip markers. Held targets are
    /// moved to their hand's pinch point; the ids of moved targets are pushed
    /// to `moved`.
    pub fn update(
        &mut self,
        pool: &MarkerPool,
        targets: &mut [InteractionTarget],
        priority: HandPriority,
        events: &mut PinchEvents,
        moved: &mut SmallVec<[TargetId; 2]>,
    ) {
        for hand in priority.order() {
            let thumb = pool.marker(hand, HandJoint::ThumbTip).position();
            let index = pool.marker(hand, HandJoint::IndexFingerTip).position();
            let (thumb, index) = match (thumb, index) {
                (Some(t), Some(i)) => (t, i),
                _ => {
                    if self.hands[hand.index()].pinching {
                        log::debug!("[pinch] {} hand lost tracking mid-pinch", hand);
                        self.end_pinch(hand, targets, events);
                    }
                    continue;
                }
            };
            let gap = thumb.distance(index);
            let point = (thumb + index) * 0.5;
            let state = &mut self.hands[hand.index()];
            if state.pinching {
                if gap > self.thresholds.end {
                    self.end_pinch(hand, targets, events);
                    continue;
                }
                state.point = point;
            } else if gap < self.thresholds.start {
                state.pinching = true;
                state.point = point;
                events.push(PinchEvent::Started { hand, point });
                if let Some(target) = grab_candidate(targets, point) {
                    targets[target.0].held_by = Some(hand);
                    state.holding = Some(target);
                    log::info!("[pinch] {} hand grabbed {}", hand, targets[target.0].name);
                    events.push(PinchEvent::Grabbed { hand, target });
                }
            } else {
                continue;
            }
            if let Some(target) = state.holding {
                targets[target.0].position = point;
                moved.push(target);
            }
        }
    }

    /// Drop all pinches and release every held target.
    pub fn reset(&mut self, targets: &mut [InteractionTarget], events: &mut PinchEvents) {
        for hand in Handedness::ALL {
            if self.hands[hand.index()].pinching {
                self.end_pinch(hand, targets, events);
            }
        }
    }

    fn end_pinch(
        &mut self,
        hand: Handedness,
        targets: &mut [InteractionTarget],
        events: &mut PinchEvents,
    ) {
        let state = &mut self.hands[hand.index()];
        state.pinching = false;
        if let Some(target) = state.holding.take() {
            if let Some(t) = targets.get_mut(target.0) {
                t.held_by = None;
                log::info!("[pinch] {} hand released {}", hand, t.name);
            }
            events.push(PinchEvent::Released { hand, target });
        }
        events.push(PinchEvent::Ended { hand });
    }
}

/// Nearest free pinchable target whose trigger radius contains `point`.
fn grab_candidate(targets: &[InteractionTarget], point: Vec3) -> Option<TargetId> {
    targets
        .iter()
        .filter(|t| t.pinchable && !t.is_held())
        .map(|t| (t.id, t.position.distance(point), t.trigger_radius))
        .filter(|(_, d, r)| d < r)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _, _)| id)
}
