use anyhow::Context;
use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xr_core::constants::{
    vec3, CUBE_POSITION, ORB_POSITION, SLIDER_INITIAL_VALUE, SLIDER_TRACK_END, SLIDER_TRACK_START,
};
use xr_core::{
    demo_scene, FillKind, FrameOutcome, HandJoint, HandPoses, Handedness, JointPose, MarkerId,
    PinchEvent, PoseError, PoseSource, RenderTarget, SessionConfig, SessionHost, TargetId,
    TargetState,
};

const FRAME_RATE_HZ: f64 = 72.0;
const DEFAULT_FRAMES: u64 = 720;
const DROPOUT_CHANCE: f64 = 0.03;
const FILL_FAILURE_CHANCE: f64 = 0.01;
const JOINT_RADIUS: f32 = 0.008;

/// Two scripted hands: the left index finger sweeps through the orb, the
/// right hand drags the cube sideways and then the orb's size slider. The
/// right hand drops out at random, seeded so runs repeat.
struct ScriptedPoseSource {
    t_sec: f64,
    rng: StdRng,
}

impl ScriptedPoseSource {
    fn new(seed: u64) -> Self {
        Self {
            t_sec: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn set_time(&mut self, t_sec: f64) {
        self.t_sec = t_sec;
    }

    /// A hand laid out around `wrist`, with explicit index and thumb tips.
    fn hand(hand: Handedness, wrist: Vec3, index_tip: Vec3, thumb_tip: Vec3) -> Vec<JointPose> {
        HandJoint::ALL
            .iter()
            .map(|&joint| {
                let at = match joint {
                    HandJoint::IndexFingerTip => index_tip,
                    HandJoint::ThumbTip => thumb_tip,
                    _ => {
                        let i = joint.index() as f32;
                        wrist + Vec3::new(0.004 * (i % 5.0), 0.0, -0.012 * (i / 5.0).floor())
                    }
                };
                JointPose::new(hand, joint, at, Quat::IDENTITY, JOINT_RADIUS)
            })
            .collect()
    }

    fn left(&self) -> Vec<JointPose> {
        let orb = vec3(ORB_POSITION);
        let sweep = (self.t_sec * 0.8).sin() as f32 * 0.45;
        let tip = orb + Vec3::new(-0.05, 0.0, sweep);
        Self::hand(
            Handedness::Left,
            tip + Vec3::new(-0.03, -0.02, 0.15),
            tip,
            tip + Vec3::new(-0.06, -0.02, 0.03),
        )
    }

    fn right(&self) -> Vec<JointPose> {
        // 0..2s reach, 2..6s pinch and drag the cube, 6..8s open,
        // 8..11s pinch the slider knob and push it along the track.
        let phase = self.t_sec % 12.0;
        let (anchor, drag, pinching) = if phase < 8.0 {
            let pinching = (2.0..6.0).contains(&phase);
            let drag = if pinching { ((phase - 2.0) / 4.0) as f32 * 0.3 } else { 0.0 };
            (vec3(CUBE_POSITION), drag, pinching)
        } else {
            let knob = vec3(SLIDER_TRACK_START).lerp(vec3(SLIDER_TRACK_END), SLIDER_INITIAL_VALUE);
            let pinching = phase < 11.0;
            let drag = if pinching { ((phase - 8.0) / 3.0) as f32 * 0.12 } else { 0.0 };
            (knob, drag, pinching)
        };
        let gap = if pinching { 0.01 } else { 0.07 };
        // Centre the pinch point on the anchor.
        let index_tip = anchor + Vec3::new(drag - gap * 0.5, 0.0, 0.0);
        Self::hand(
            Handedness::Right,
            index_tip + Vec3::new(0.04, -0.03, 0.12),
            index_tip,
            index_tip + Vec3::new(gap, 0.0, 0.0),
        )
    }
}

impl PoseSource for ScriptedPoseSource {
    fn supports_joint_poses(&self) -> bool {
        true
    }

    fn joint_poses(&mut self, hand: Handedness) -> Result<HandPoses, PoseError> {
        match hand {
            Handedness::Left => Ok(HandPoses::Tracked(self.left())),
            Handedness::Right => {
                if self.rng.gen_bool(FILL_FAILURE_CHANCE) {
                    return Err(PoseError::FillFailed {
                        hand,
                        kind: FillKind::Poses,
                    });
                }
                if self.rng.gen_bool(DROPOUT_CHANCE) {
                    return Ok(HandPoses::Unavailable);
                }
                Ok(HandPoses::Tracked(self.right()))
            }
        }
    }
}

/// Stands in for the scene: counts marker writes and logs target colors.
#[derive(Default)]
struct LogTarget {
    transforms: u64,
    visibility_changes: u64,
    names: Vec<String>,
}

impl RenderTarget for LogTarget {
    fn set_transform(&mut self, _marker: MarkerId, _translation: Vec3, _rotation: Quat, _scale: Vec3) {
        self.transforms += 1;
    }

    fn set_visible(&mut self, _marker: MarkerId, _visible: bool) {
        self.visibility_changes += 1;
    }

    fn set_target_state(&mut self, target: TargetId, state: TargetState) {
        let name = self.names.get(target.0).map_or("?", String::as_str);
        log::debug!("[render] {} -> {:?}", name, state);
    }

    fn set_target_position(&mut self, _target: TargetId, _position: Vec3) {}

    fn set_target_scale(&mut self, target: TargetId, scale: f32) {
        let name = self.names.get(target.0).map_or("?", String::as_str);
        log::debug!("[render] {} scale {:.3}", name, scale);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>().context("frame count must be a number")?,
        None => DEFAULT_FRAMES,
    };

    let scene = demo_scene();
    let mut render = LogTarget {
        names: scene.targets.iter().map(|t| t.name.clone()).collect(),
        ..LogTarget::default()
    };
    let mut source = ScriptedPoseSource::new(7);
    let mut host = SessionHost::new();
    host.on_session_start(SessionConfig::default(), scene, &source, &mut render)?;

    let frame_ms = 1000.0 / FRAME_RATE_HZ;
    let mut presses = 0usize;
    let mut grabs = 0usize;
    let mut slider_moves = 0usize;
    for i in 0..frames {
        let ts = i as f64 * frame_ms;
        source.set_time(ts / 1000.0);
        let report = match host.on_frame(ts, &mut source, &mut render) {
            FrameOutcome::Rendered(report) => report,
            FrameOutcome::Inactive => break,
        };
        for t in &report.transitions {
            log::info!(
                "[sim] frame {} {} {:?} -> {:?}{}",
                report.frame_index,
                render.names[t.target.0],
                t.from,
                t.to,
                if t.pressed { " (press)" } else { "" }
            );
        }
        presses += report.presses().count();
        for ev in &report.pinch_events {
            if let PinchEvent::Grabbed { .. } = ev {
                grabs += 1;
            }
            log::info!("[sim] frame {} {:?}", report.frame_index, ev);
        }
        for change in &report.slider_changes {
            slider_moves += 1;
            log::info!(
                "[sim] frame {} {} = {:.3}",
                report.frame_index,
                render.names[change.slider.0],
                change.value
            );
        }
    }

    // Frames after the end must be ignored.
    host.on_session_end(&mut render);
    let late = host.on_frame(frames as f64 * frame_ms, &mut source, &mut render);
    anyhow::ensure!(
        matches!(late, FrameOutcome::Inactive),
        "frame after session end was processed"
    );

    log::info!(
        "[sim] {} frames: {} transforms, {} visibility changes, {} presses, {} grabs, {} slider moves",
        frames,
        render.transforms,
        render.visibility_changes,
        presses,
        grabs,
        slider_moves
    );
    Ok(())
}
