//! Orbiting planets driven by frame time.

use crate::constants::DEFAULT_PLANETS;
use crate::interaction::TargetId;
use glam::Vec3;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct PlanetSpec {
    pub name: String,
    pub orbit_radius: f32,
    pub period_sec: f32,
    pub phase: f32,
    pub size: f32,
}

impl PlanetSpec {
    pub fn new(name: impl Into<String>, orbit_radius: f32, period_sec: f32) -> Self {
        Self {
            name: name.into(),
            orbit_radius,
            period_sec,
            phase: 0.0,
            size: 0.04,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Position on the horizontal orbit around `center` after `elapsed_sec`.
    pub fn position_at(&self, center: Vec3, elapsed_sec: f64) -> Vec3 {
        let theta = self.phase as f64 + TAU * elapsed_sec / self.period_sec as f64;
        let r = self.orbit_radius as f64;
        center + Vec3::new((r * theta.cos()) as f32, 0.0, (r * theta.sin()) as f32)
    }
}

pub fn default_planets() -> Vec<PlanetSpec> {
    DEFAULT_PLANETS
        .iter()
        .map(|&(name, radius, period, phase, size)| {
            PlanetSpec::new(name, radius, period)
                .with_phase(phase)
                .with_size(size)
        })
        .collect()
}

pub struct PlanetSystem {
    center: Vec3,
    planets: Vec<(PlanetSpec, TargetId)>,
    elapsed_sec: f64,
}

impl PlanetSystem {
    pub fn new(center: Vec3, planets: Vec<(PlanetSpec, TargetId)>) -> Self {
        Self {
            center,
            planets,
            elapsed_sec: 0.0,
        }
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn advance(&mut self, dt_sec: f64) {
        self.elapsed_sec += dt_sec.max(0.0);
    }

    /// Current position of every planet with its bound target.
    pub fn positions(&self) -> impl Iterator<Item = (TargetId, Vec3)> + '_ {
        self.planets
            .iter()
            .map(|(spec, id)| (*id, spec.position_at(self.center, self.elapsed_sec)))
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}
