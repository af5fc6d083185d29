//! Fixed pool of joint markers, one slot per joint per hand side.

use crate::hand::{HandJoint, Handedness, JOINT_COUNT};
use glam::{Quat, Vec3};

pub const MARKER_POOL_SIZE: usize = JOINT_COUNT * 2;

/// Slot index of a marker. Left-hand joints occupy `0..25`, right-hand `25..50`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

impl MarkerId {
    #[inline]
    pub fn for_joint(hand: Handedness, joint: HandJoint) -> Self {
        MarkerId(hand.index() * JOINT_COUNT + joint.index())
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub fn hand(self) -> Handedness {
        if self.0 < JOINT_COUNT {
            Handedness::Left
        } else {
            Handedness::Right
        }
    }

    #[inline]
    pub fn joint(self) -> HandJoint {
        HandJoint::ALL[self.0 % JOINT_COUNT]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub hand: Handedness,
    pub joint: HandJoint,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub visible: bool,
}

impl Marker {
    fn hidden(id: MarkerId) -> Self {
        Self {
            id,
            hand: id.hand(),
            joint: id.joint(),
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ZERO,
            visible: false,
        }
    }

    /// Current position, or `None` if the joint had no pose this frame.
    #[inline]
    pub fn position(&self) -> Option<Vec3> {
        self.visible.then_some(self.translation)
    }
}

pub struct MarkerPool {
    markers: Box<[Marker]>,
}

impl Default for MarkerPool {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerPool {
    pub fn new() -> Self {
        let markers = (0..MARKER_POOL_SIZE)
            .map(|i| Marker::hidden(MarkerId(i)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { markers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[inline]
    pub fn get(&self, id: MarkerId) -> &Marker {
        &self.markers[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: MarkerId) -> &mut Marker {
        &mut self.markers[id.index()]
    }

    #[inline]
    pub fn marker(&self, hand: Handedness, joint: HandJoint) -> &Marker {
        self.get(MarkerId::for_joint(hand, joint))
    }

    pub fn hand_markers(&self, hand: Handedness) -> &[Marker] {
        let start = hand.index() * JOINT_COUNT;
        &self.markers[start..start + JOINT_COUNT]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn visible_count(&self) -> usize {
        self.markers.iter().filter(|m| m.visible).count()
    }
}
