//! Scene setup handed to a session when it starts.

use crate::constants::*;
use crate::interaction::TargetSpec;
use crate::planets::{default_planets, PlanetSpec};
use crate::slider::{SizeBinding, SliderSpec};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSetup {
    pub center: Vec3,
    /// Each planet drives the interaction target with the same name.
    pub planets: Vec<PlanetSpec>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneSetup {
    pub targets: Vec<TargetSpec>,
    pub orbit: Option<OrbitSetup>,
    pub sliders: Vec<SliderSpec>,
}

impl SceneSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: TargetSpec) -> Self {
        self.targets.push(target);
        self
    }

    /// Add an orbit and one touchable target per planet.
    pub fn with_planets(mut self, center: Vec3, planets: Vec<PlanetSpec>, touch_radius: f32) -> Self {
        for p in &planets {
            let start = p.position_at(center, 0.0);
            self.targets.push(
                TargetSpec::new(p.name.clone(), start, touch_radius.max(p.size))
                    .with_hover_radius(touch_radius.max(p.size) * 2.0),
            );
        }
        self.orbit = Some(OrbitSetup { center, planets });
        self
    }

    /// Add a slider and its pinchable knob target.
    pub fn with_slider(mut self, slider: SliderSpec) -> Self {
        self.targets.push(
            TargetSpec::new(slider.name.clone(), slider.knob_position(), slider.knob_radius).pinchable(),
        );
        self.sliders.push(slider);
        self
    }

    pub fn target(&self, name: &str) -> Option<&TargetSpec> {
        self.targets.iter().find(|t| t.name == name)
    }
}

pub const ORB: &str = "orb";
pub const MENU_BUTTON: &str = "menu-button";
pub const CUBE: &str = "cube";
pub const ORB_SIZE_SLIDER: &str = "orb-size";

/// The demo layout: a touch orb with a slider that resizes it, a menu toggle
/// button, a pinchable cube and the planet system.
pub fn demo_scene() -> SceneSetup {
    SceneSetup::new()
        .with_target(
            TargetSpec::from_scale(ORB, vec3(ORB_POSITION), Vec3::splat(ORB_SCALE))
                .with_hover_radius(ORB_HOVER_RADIUS),
        )
        .with_target(
            TargetSpec::new(MENU_BUTTON, vec3(MENU_BUTTON_POSITION), MENU_BUTTON_RADIUS)
                .with_hover_radius(MENU_BUTTON_HOVER_RADIUS)
                .pressable(),
        )
        .with_slider(
            SliderSpec::new(
                ORB_SIZE_SLIDER,
                vec3(SLIDER_TRACK_START),
                vec3(SLIDER_TRACK_END),
                SLIDER_KNOB_RADIUS,
            )
            .with_value(SLIDER_INITIAL_VALUE)
            .resizing(SizeBinding::new(ORB, ORB_MIN_SCALE, ORB_MAX_SCALE)),
        )
        .with_target(TargetSpec::new(CUBE, vec3(CUBE_POSITION), CUBE_RADIUS).pinchable())
        .with_planets(vec3(PLANET_CENTER), default_planets(), PLANET_TOUCH_RADIUS)
}
