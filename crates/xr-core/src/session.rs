//! Session-scoped state and the start/frame/end lifecycle.
//!
//! Everything a session touches (marker pool, targets, pinch and orbit state)
//! lives in [`Session`], built when the host enters immersive mode and
//! dropped when it leaves. [`SessionHost`] owns the one-shot active flag that
//! turns frame callbacks arriving after teardown into no-ops.

use crate::constants::MAX_FRAME_DT_SEC;
use crate::error::SceneError;
use crate::hand::{HandJoint, Handedness};
use crate::interaction::{InteractionTarget, TargetId, TargetState};
use crate::markers::{MarkerId, MarkerPool};
use crate::pinch::{PinchEvents, PinchThresholds, PinchTracker};
use crate::planets::PlanetSystem;
use crate::pose::PoseSource;
use crate::proximity::{HandPriority, ProximityEvaluator, Transitions};
use crate::render::RenderTarget;
use crate::scene::SceneSetup;
use crate::slider::{Slider, SliderChange};
use crate::sync::PoseSync;
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Markers checked against interaction targets.
    pub interaction_joints: Vec<HandJoint>,
    pub hand_priority: HandPriority,
    pub pinch: PinchThresholds,
    pub max_frame_dt_sec: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interaction_joints: vec![HandJoint::IndexFingerTip],
            hand_priority: HandPriority::LeftFirst,
            pinch: PinchThresholds::default(),
            max_frame_dt_sec: MAX_FRAME_DT_SEC,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    pub frame_index: u64,
    pub timestamp_ms: f64,
    pub dt_sec: f64,
    pub tracked: [bool; 2],
    pub transitions: Transitions,
    pub pinch_events: PinchEvents,
    pub slider_changes: SmallVec<[SliderChange; 2]>,
}

impl FrameReport {
    #[inline]
    pub fn is_tracked(&self, hand: Handedness) -> bool {
        self.tracked[hand.index()]
    }

    /// Pressable targets that became engaged this frame.
    pub fn presses(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.transitions
            .iter()
            .filter(|t| t.pressed)
            .map(|t| t.target)
    }
}

#[derive(Clone, Debug)]
pub enum FrameOutcome {
    /// No session, or the session already ended.
    Inactive,
    Rendered(FrameReport),
}

pub struct Session {
    config: SessionConfig,
    pool: MarkerPool,
    sync: PoseSync,
    evaluator: ProximityEvaluator,
    pinch: PinchTracker,
    targets: Vec<InteractionTarget>,
    names: FnvHashMap<String, TargetId>,
    planets: Option<PlanetSystem>,
    sliders: Vec<Slider>,
    last_timestamp_ms: Option<f64>,
    frames: u64,
}

impl Session {
    pub fn start<S, R>(
        config: SessionConfig,
        scene: SceneSetup,
        source: &S,
        render: &mut R,
    ) -> Result<Self, SceneError>
    where
        S: PoseSource + ?Sized,
        R: RenderTarget,
    {
        if config.interaction_joints.is_empty() {
            return Err(SceneError::NoInteractionJoints);
        }
        config.pinch.validate()?;
        if !(config.max_frame_dt_sec.is_finite() && config.max_frame_dt_sec > 0.0) {
            return Err(SceneError::InvalidFrameDt(config.max_frame_dt_sec));
        }

        let mut targets = Vec::with_capacity(scene.targets.len());
        let mut names = FnvHashMap::default();
        for spec in scene.targets {
            validate_radius(&spec.name, spec.trigger_radius)?;
            if let Some(r) = spec.hover_radius {
                validate_radius(&spec.name, r)?;
            }
            let id = TargetId(targets.len());
            if names.insert(spec.name.clone(), id).is_some() {
                return Err(SceneError::DuplicateTarget(spec.name));
            }
            targets.push(InteractionTarget::from_spec(id, spec));
        }

        let planets = match scene.orbit {
            Some(orbit) => {
                let mut bound = Vec::with_capacity(orbit.planets.len());
                for p in orbit.planets {
                    if !(p.period_sec.is_finite() && p.period_sec > 0.0) {
                        return Err(SceneError::InvalidPeriod {
                            name: p.name,
                            period_sec: p.period_sec,
                        });
                    }
                    let id = *names
                        .get(&p.name)
                        .ok_or_else(|| SceneError::UnknownPlanetTarget(p.name.clone()))?;
                    bound.push((p, id));
                }
                let system = PlanetSystem::new(orbit.center, bound);
                for (id, pos) in system.positions() {
                    targets[id.0].position = pos;
                }
                Some(system)
            }
            None => None,
        };

        let mut sliders = Vec::with_capacity(scene.sliders.len());
        let mut resized = Vec::new();
        for spec in scene.sliders {
            spec.validate()?;
            let knob = *names.get(&spec.name).ok_or_else(|| SceneError::InvalidSlider {
                name: spec.name.clone(),
                reason: "no knob target",
            })?;
            let resize_target = match &spec.resizes {
                Some(b) => Some(
                    *names
                        .get(&b.target)
                        .ok_or_else(|| SceneError::UnknownSizeTarget(b.target.clone()))?,
                ),
                None => None,
            };
            let slider = Slider::new(spec, knob, resize_target);
            targets[knob.0].position = slider.position_at(slider.value());
            if let Some(resize) = slider.apply_size(&mut targets) {
                resized.push(resize);
            }
            sliders.push(slider);
        }

        let supported = source.supports_joint_poses();
        if !supported {
            log::info!("[xr] hand joint poses not supported; hand markers disabled for this session");
        }

        let pool = MarkerPool::new();
        for marker in pool.iter() {
            render.set_visible(marker.id, false);
        }
        for t in &targets {
            render.set_target_position(t.id, t.position);
            render.set_target_state(t.id, t.state);
        }
        for (id, scale) in resized {
            render.set_target_scale(id, scale);
        }
        log::info!(
            "[xr] session started: {} markers, {} targets, {} planets",
            pool.len(),
            targets.len(),
            planets.as_ref().map_or(0, PlanetSystem::len)
        );

        Ok(Self {
            evaluator: ProximityEvaluator::new(&config.interaction_joints, config.hand_priority),
            pinch: PinchTracker::new(config.pinch),
            sync: PoseSync::new(supported),
            config,
            pool,
            targets,
            names,
            planets,
            sliders,
            last_timestamp_ms: None,
            frames: 0,
        })
    }

    /// Run one frame: sync markers, animate, pinch, evaluate proximity.
    pub fn frame<S, R>(&mut self, timestamp_ms: f64, source: &mut S, render: &mut R) -> FrameReport
    where
        S: PoseSource + ?Sized,
        R: RenderTarget,
    {
        let dt_sec = self.frame_dt(timestamp_ms);
        let mut report = FrameReport {
            frame_index: self.frames,
            timestamp_ms,
            dt_sec,
            ..Default::default()
        };
        self.frames += 1;

        if self.sync.is_enabled() {
            for hand in Handedness::ALL {
                let result = source.joint_poses(hand);
                report.tracked[hand.index()] =
                    self.sync.sync_hand(&mut self.pool, render, hand, result);
            }
        }

        if let Some(planets) = &mut self.planets {
            planets.advance(dt_sec);
            for (id, pos) in planets.positions() {
                let target = &mut self.targets[id.0];
                if !target.is_held() {
                    target.position = pos;
                    render.set_target_position(id, pos);
                }
            }
        }

        let mut moved: SmallVec<[TargetId; 2]> = SmallVec::new();
        self.pinch.update(
            &self.pool,
            &mut self.targets,
            self.config.hand_priority,
            &mut report.pinch_events,
            &mut moved,
        );
        for slider in &mut self.sliders {
            let Some(value) = slider.constrain(&mut self.targets) else {
                continue;
            };
            report.slider_changes.push(SliderChange {
                slider: slider.knob,
                value,
            });
            if let Some((id, scale)) = slider.apply_size(&mut self.targets) {
                log::debug!("[slider] value {:.3} scales target {} to {:.3}", value, id.0, scale);
                render.set_target_scale(id, scale);
            }
        }
        for id in moved {
            render.set_target_position(id, self.targets[id.0].position);
        }

        self.evaluator
            .evaluate(&self.pool, &mut self.targets, render, &mut report.transitions);
        report
    }

    /// Release held targets, hide markers and reset target visuals.
    pub fn teardown<R: RenderTarget>(mut self, render: &mut R) -> PinchEvents {
        let mut events = PinchEvents::new();
        self.pinch.reset(&mut self.targets, &mut events);
        for marker in self.pool.iter().filter(|m| m.visible) {
            render.set_visible(marker.id, false);
        }
        for t in self.targets.iter().filter(|t| t.state != TargetState::Idle) {
            render.set_target_state(t.id, TargetState::Idle);
        }
        log::info!("[xr] session ended after {} frames", self.frames);
        events
    }

    fn frame_dt(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_timestamp_ms {
            Some(prev) => ((timestamp_ms - prev) / 1000.0).clamp(0.0, self.config.max_frame_dt_sec),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        dt
    }

    #[inline]
    pub fn markers(&self) -> &MarkerPool {
        &self.pool
    }

    #[inline]
    pub fn marker(&self, hand: Handedness, joint: HandJoint) -> &crate::markers::Marker {
        self.pool.marker(hand, joint)
    }

    #[inline]
    pub fn targets(&self) -> &[InteractionTarget] {
        &self.targets
    }

    pub fn target_id(&self, name: &str) -> Option<TargetId> {
        self.names.get(name).copied()
    }

    pub fn target(&self, name: &str) -> Option<&InteractionTarget> {
        self.target_id(name).map(|id| &self.targets[id.0])
    }

    #[inline]
    pub fn pose_sync_enabled(&self) -> bool {
        self.sync.is_enabled()
    }

    #[inline]
    pub fn pinch(&self) -> &PinchTracker {
        &self.pinch
    }

    /// Current value of the slider whose knob is named `name`.
    pub fn slider_value(&self, name: &str) -> Option<f32> {
        let knob = self.target_id(name)?;
        self.sliders.iter().find(|s| s.knob == knob).map(Slider::value)
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.planets.as_ref().map_or(0.0, PlanetSystem::elapsed_sec)
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_marker_visible(&self, id: MarkerId) -> bool {
        self.pool.get(id).visible
    }
}

fn validate_radius(name: &str, radius: f32) -> Result<(), SceneError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidRadius {
            name: name.to_string(),
            radius,
        })
    }
}

/// Entry points the platform drives: start, one call per frame, end.
#[derive(Default)]
pub struct SessionHost {
    active: bool,
    session: Option<Session>,
}

impl SessionHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn on_session_start<S, R>(
        &mut self,
        config: SessionConfig,
        scene: SceneSetup,
        source: &S,
        render: &mut R,
    ) -> Result<(), SceneError>
    where
        S: PoseSource + ?Sized,
        R: RenderTarget,
    {
        if self.active {
            log::warn!("[xr] session start while another is active; ending the previous one");
            self.on_session_end(render);
        }
        let session = Session::start(config, scene, source, render)?;
        self.session = Some(session);
        self.active = true;
        Ok(())
    }

    pub fn on_frame<S, R>(&mut self, timestamp_ms: f64, source: &mut S, render: &mut R) -> FrameOutcome
    where
        S: PoseSource + ?Sized,
        R: RenderTarget,
    {
        if !self.active {
            log::debug!("[xr] frame at {:.1}ms after session end ignored", timestamp_ms);
            return FrameOutcome::Inactive;
        }
        match self.session.as_mut() {
            Some(session) => FrameOutcome::Rendered(session.frame(timestamp_ms, source, render)),
            None => FrameOutcome::Inactive,
        }
    }

    /// Returns `false` if no session was active.
    pub fn on_session_end<R: RenderTarget>(&mut self, render: &mut R) -> bool {
        if !std::mem::replace(&mut self.active, false) {
            return false;
        }
        if let Some(session) = self.session.take() {
            session.teardown(render);
        }
        true
    }
}
