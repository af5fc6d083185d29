//! Pinch-dragged sliders: a knob constrained to a straight track, producing a
//! 0..1 value that can drive another target's size.

use crate::constants::SLIDER_VALUE_EPSILON;
use crate::error::SceneError;
use crate::interaction::{InteractionTarget, TargetId};
use glam::Vec3;

/// Maps a slider value onto a target's scale between `min_scale` and
/// `max_scale` (relative to the target's setup size).
#[derive(Clone, Debug, PartialEq)]
pub struct SizeBinding {
    pub target: String,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl SizeBinding {
    pub fn new(target: impl Into<String>, min_scale: f32, max_scale: f32) -> Self {
        Self {
            target: target.into(),
            min_scale,
            max_scale,
        }
    }

    #[inline]
    pub fn scale_at(&self, value: f32) -> f32 {
        self.min_scale + (self.max_scale - self.min_scale) * value
    }
}

/// Scene-setup description of a slider. `name` is also the name of the
/// pinchable knob target added to the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderSpec {
    pub name: String,
    pub track_start: Vec3,
    pub track_end: Vec3,
    pub knob_radius: f32,
    pub value: f32,
    pub resizes: Option<SizeBinding>,
}

impl SliderSpec {
    pub fn new(name: impl Into<String>, track_start: Vec3, track_end: Vec3, knob_radius: f32) -> Self {
        Self {
            name: name.into(),
            track_start,
            track_end,
            knob_radius,
            value: 0.0,
            resizes: None,
        }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn resizing(mut self, binding: SizeBinding) -> Self {
        self.resizes = Some(binding);
        self
    }

    #[inline]
    pub fn knob_position(&self) -> Vec3 {
        self.track_start.lerp(self.track_end, self.value)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let invalid = |reason: &'static str| -> Result<(), SceneError> {
            Err(SceneError::InvalidSlider {
                name: self.name.clone(),
                reason,
            })
        };
        let track = self.track_end - self.track_start;
        if !track.is_finite() || track.length_squared() <= f32::EPSILON {
            return invalid("track has no length");
        }
        if !(0.0..=1.0).contains(&self.value) {
            return invalid("initial value outside 0..1");
        }
        if let Some(b) = &self.resizes {
            let ok = b.min_scale.is_finite()
                && b.max_scale.is_finite()
                && b.min_scale > 0.0
                && b.max_scale >= b.min_scale;
            if !ok {
                return invalid("scale range must be positive and ordered");
            }
        }
        Ok(())
    }
}

/// Reported when a slider's value moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderChange {
    /// The knob target.
    pub slider: TargetId,
    pub value: f32,
}

/// A slider bound to its knob and, optionally, the target it resizes.
#[derive(Clone, Debug)]
pub struct Slider {
    pub knob: TargetId,
    start: Vec3,
    end: Vec3,
    value: f32,
    resize: Option<(TargetId, SizeBinding)>,
}

impl Slider {
    pub fn new(spec: SliderSpec, knob: TargetId, resize_target: Option<TargetId>) -> Self {
        let resize = match (resize_target, spec.resizes) {
            (Some(id), Some(binding)) => Some((id, binding)),
            _ => None,
        };
        Self {
            knob,
            start: spec.track_start,
            end: spec.track_end,
            value: spec.value,
            resize,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn resize_target(&self) -> Option<TargetId> {
        self.resize.as_ref().map(|(id, _)| *id)
    }

    /// Value of the track point nearest `point`, clamped to the track ends.
    pub fn project(&self, point: Vec3) -> f32 {
        let track = self.end - self.start;
        ((point - self.start).dot(track) / track.length_squared()).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn position_at(&self, value: f32) -> Vec3 {
        self.start.lerp(self.end, value)
    }

    /// Apply the current value to the resized target. Returns its id and new
    /// scale.
    pub fn apply_size(&self, targets: &mut [InteractionTarget]) -> Option<(TargetId, f32)> {
        let (id, binding) = self.resize.as_ref()?;
        let scale = binding.scale_at(self.value);
        targets.get_mut(id.0)?.resize(scale);
        Some((*id, scale))
    }

    /// Snap a held knob back onto the track and update the value. Returns
    /// the new value when it moved noticeably.
    pub fn constrain(&mut self, targets: &mut [InteractionTarget]) -> Option<f32> {
        let knob = targets.get_mut(self.knob.0)?;
        if !knob.is_held() {
            return None;
        }
        let value = self.project(knob.position);
        knob.position = self.position_at(value);
        if (value - self.value).abs() < SLIDER_VALUE_EPSILON {
            return None;
        }
        self.value = value;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> Slider {
        Slider::new(
            SliderSpec::new("s", Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.05).with_value(0.25),
            TargetId(0),
            None,
        )
    }

    #[test]
    fn projection_clamps_to_track_ends() {
        let s = slider();
        assert!((s.project(Vec3::new(0.4, 0.3, -0.2)) - 0.4).abs() < 1e-6);
        assert_eq!(s.project(Vec3::new(-2.0, 0.0, 0.0)), 0.0);
        assert_eq!(s.project(Vec3::new(5.0, 1.0, 0.0)), 1.0);
    }

    #[test]
    fn degenerate_track_is_rejected() {
        let spec = SliderSpec::new("s", Vec3::ONE, Vec3::ONE, 0.05);
        assert!(matches!(spec.validate(), Err(SceneError::InvalidSlider { .. })));
    }

    #[test]
    fn inverted_scale_range_is_rejected() {
        let spec = SliderSpec::new("s", Vec3::ZERO, Vec3::X, 0.05)
            .resizing(SizeBinding::new("orb", 2.0, 1.0));
        assert!(spec.validate().is_err());
    }

    #[test]
    fn scale_interpolates_between_bounds() {
        let b = SizeBinding::new("orb", 0.5, 1.5);
        assert_eq!(b.scale_at(0.0), 0.5);
        assert_eq!(b.scale_at(0.5), 1.0);
        assert_eq!(b.scale_at(1.0), 1.5);
    }
}
