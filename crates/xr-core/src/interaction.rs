//! Interactive scene objects and their idle/hovered/engaged state machine.

use crate::constants::TRIGGER_RADIUS_PER_UNIT_SCALE;
use crate::hand::Handedness;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TargetState {
    #[default]
    Idle,
    Hovered(Handedness),
    Engaged(Handedness),
}

impl TargetState {
    #[inline]
    pub fn hand(self) -> Option<Handedness> {
        match self {
            TargetState::Idle => None,
            TargetState::Hovered(h) | TargetState::Engaged(h) => Some(h),
        }
    }

    #[inline]
    pub fn is_engaged(self) -> bool {
        matches!(self, TargetState::Engaged(_))
    }

    /// Transition given the hand (if any) strictly inside the trigger radius
    /// and the hand (if any) strictly inside the hover radius.
    pub fn next(engaged_by: Option<Handedness>, hovered_by: Option<Handedness>) -> TargetState {
        match (engaged_by, hovered_by) {
            (Some(h), _) => TargetState::Engaged(h),
            (None, Some(h)) => TargetState::Hovered(h),
            (None, None) => TargetState::Idle,
        }
    }
}

/// Scene-setup description of an interaction target.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetSpec {
    pub name: String,
    pub position: Vec3,
    pub trigger_radius: f32,
    pub hover_radius: Option<f32>,
    pub pinchable: bool,
    pub pressable: bool,
}

impl TargetSpec {
    pub fn new(name: impl Into<String>, position: Vec3, trigger_radius: f32) -> Self {
        Self {
            name: name.into(),
            position,
            trigger_radius,
            hover_radius: None,
            pinchable: false,
            pressable: false,
        }
    }

    /// Trigger radius derived from the object's scale: a unit primitive of
    /// scale `s` reaches `s * 0.5` along its largest axis.
    pub fn from_scale(name: impl Into<String>, position: Vec3, scale: Vec3) -> Self {
        Self::new(name, position, scale.max_element() * TRIGGER_RADIUS_PER_UNIT_SCALE)
    }

    pub fn with_hover_radius(mut self, radius: f32) -> Self {
        self.hover_radius = Some(radius);
        self
    }

    pub fn pinchable(mut self) -> Self {
        self.pinchable = true;
        self
    }

    pub fn pressable(mut self) -> Self {
        self.pressable = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionTarget {
    pub id: TargetId,
    pub name: String,
    pub position: Vec3,
    pub trigger_radius: f32,
    pub hover_radius: Option<f32>,
    pub pinchable: bool,
    pub pressable: bool,
    pub state: TargetState,
    pub held_by: Option<Handedness>,
    /// Uniform scale relative to setup size; radii follow it.
    pub scale: f32,
    base_trigger_radius: f32,
    base_hover_radius: Option<f32>,
}

impl InteractionTarget {
    pub fn from_spec(id: TargetId, spec: TargetSpec) -> Self {
        Self {
            id,
            name: spec.name,
            position: spec.position,
            trigger_radius: spec.trigger_radius,
            hover_radius: spec.hover_radius,
            pinchable: spec.pinchable,
            pressable: spec.pressable,
            state: TargetState::Idle,
            held_by: None,
            scale: 1.0,
            base_trigger_radius: spec.trigger_radius,
            base_hover_radius: spec.hover_radius,
        }
    }

    /// Rescale relative to the setup size. Trigger and hover radii scale
    /// with it, the same way a scale-derived radius would be recomputed.
    pub fn resize(&mut self, scale: f32) {
        self.scale = scale;
        self.trigger_radius = self.base_trigger_radius * scale;
        self.hover_radius = self.base_hover_radius.map(|r| r * scale);
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.held_by.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engagement_wins_over_hover() {
        assert_eq!(
            TargetState::next(Some(Handedness::Right), Some(Handedness::Left)),
            TargetState::Engaged(Handedness::Right)
        );
        assert_eq!(
            TargetState::next(None, Some(Handedness::Left)),
            TargetState::Hovered(Handedness::Left)
        );
        assert_eq!(TargetState::next(None, None), TargetState::Idle);
    }

    #[test]
    fn scale_derived_radius_uses_largest_axis() {
        let spec = TargetSpec::from_scale("orb", Vec3::ZERO, Vec3::new(0.5, 0.2, 0.3));
        assert!((spec.trigger_radius - 0.25).abs() < 1e-6);
    }

    #[test]
    fn resize_scales_both_radii_from_setup_size() {
        let spec = TargetSpec::new("orb", Vec3::ZERO, 0.2).with_hover_radius(0.3);
        let mut target = InteractionTarget::from_spec(TargetId(0), spec);
        target.resize(2.0);
        target.resize(0.5);
        assert_eq!(target.scale, 0.5);
        assert!((target.trigger_radius - 0.1).abs() < 1e-6);
        assert!((target.hover_radius.unwrap() - 0.15).abs() < 1e-6);
    }
}
