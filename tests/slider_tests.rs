// Host-side tests for the pinch-dragged size slider.

mod common;

use common::*;
use glam::Vec3;
use xr_core::*;

const TRACK_START: Vec3 = Vec3::new(-0.1, 1.0, -0.5);
const TRACK_END: Vec3 = Vec3::new(0.1, 1.0, -0.5);

fn slider_scene() -> SceneSetup {
    SceneSetup::new()
        .with_target(TargetSpec::new("orb", Vec3::new(0.0, 1.3, -0.8), 0.2).with_hover_radius(0.3))
        .with_slider(
            SliderSpec::new("size", TRACK_START, TRACK_END, 0.04)
                .with_value(0.5)
                .resizing(SizeBinding::new("orb", 0.5, 1.5)),
        )
}

/// Right thumb and index tips `gap` apart, centred on `at`.
fn tips(at: Vec3, gap: f32) -> Vec<JointPose> {
    let half = Vec3::new(0.0, gap * 0.5, 0.0);
    vec![
        pose(Handedness::Right, HandJoint::ThumbTip, at - half),
        pose(Handedness::Right, HandJoint::IndexFingerTip, at + half),
    ]
}

fn frame(
    host: &mut SessionHost,
    render: &mut RecordingTarget,
    source: &mut QueuedSource,
    ts: f64,
) -> FrameReport {
    match host.on_frame(ts, source, render) {
        FrameOutcome::Rendered(r) => r,
        FrameOutcome::Inactive => panic!("session inactive"),
    }
}

fn scales(render: &RecordingTarget, target: TargetId) -> Vec<f32> {
    render
        .calls
        .iter()
        .filter_map(|c| match c {
            RenderCall::TargetScale(id, s) if *id == target => Some(*s),
            _ => None,
        })
        .collect()
}

fn start() -> (SessionHost, RecordingTarget, QueuedSource) {
    let source = QueuedSource::new();
    let mut host = SessionHost::new();
    let mut render = RecordingTarget::default();
    host.on_session_start(SessionConfig::default(), slider_scene(), &source, &mut render)
        .unwrap();
    (host, render, source)
}

#[test]
fn initial_value_places_knob_and_sizes_target() {
    let (host, render, _) = start();
    let session = host.session().unwrap();
    let orb = session.target_id("orb").unwrap();

    assert_eq!(session.slider_value("size"), Some(0.5));
    assert!((session.target("size").unwrap().position - Vec3::new(0.0, 1.0, -0.5)).length() < 1e-6);
    assert_eq!(scales(&render, orb), vec![1.0]);
    let target = session.target("orb").unwrap();
    assert!((target.trigger_radius - 0.2).abs() < 1e-6);
    assert_eq!(session.slider_value("orb"), None);
}

#[test]
fn dragging_knob_resizes_target_and_stays_on_track() {
    let (mut host, mut render, mut source) = start();
    let knob = host.session().unwrap().target_id("size").unwrap();
    let orb = host.session().unwrap().target_id("orb").unwrap();

    source.push_tracked(Handedness::Right, tips(Vec3::new(0.0, 1.0, -0.5), 0.01));
    let r = frame(&mut host, &mut render, &mut source, 0.0);
    assert!(r.pinch_events.contains(&PinchEvent::Grabbed {
        hand: Handedness::Right,
        target: knob
    }));
    // Grabbing without moving reports no change.
    assert!(r.slider_changes.is_empty());

    render.clear();
    source.push_tracked(Handedness::Right, tips(Vec3::new(0.05, 1.1, -0.4), 0.01));
    let r = frame(&mut host, &mut render, &mut source, 16.0);

    assert_eq!(r.slider_changes.len(), 1);
    assert_eq!(r.slider_changes[0].slider, knob);
    assert!((r.slider_changes[0].value - 0.75).abs() < 1e-5);
    let session = host.session().unwrap();
    let on_track = Vec3::new(0.05, 1.0, -0.5);
    assert!((session.target("size").unwrap().position - on_track).length() < 1e-5);
    assert!(render.calls.iter().any(
        |c| matches!(c, RenderCall::TargetPosition(id, p) if *id == knob && (*p - on_track).length() < 1e-5)
    ));

    let target = session.target("orb").unwrap();
    assert!((target.scale - 1.25).abs() < 1e-5);
    assert!((target.trigger_radius - 0.25).abs() < 1e-5);
    assert!((target.hover_radius.unwrap() - 0.375).abs() < 1e-5);
    let sent = scales(&render, orb);
    assert_eq!(sent.len(), 1);
    assert!((sent[0] - 1.25).abs() < 1e-5);
}

#[test]
fn knob_clamps_at_track_ends() {
    let (mut host, mut render, mut source) = start();
    source.push_tracked(Handedness::Right, tips(Vec3::new(0.0, 1.0, -0.5), 0.01));
    frame(&mut host, &mut render, &mut source, 0.0);

    source.push_tracked(Handedness::Right, tips(Vec3::new(-0.6, 1.0, -0.5), 0.01));
    frame(&mut host, &mut render, &mut source, 16.0);

    let session = host.session().unwrap();
    assert!(session.slider_value("size").unwrap().abs() < 1e-6);
    assert!((session.target("size").unwrap().position - TRACK_START).length() < 1e-6);
    assert!((session.target("orb").unwrap().trigger_radius - 0.1).abs() < 1e-6);
}

#[test]
fn released_knob_keeps_its_value() {
    let (mut host, mut render, mut source) = start();
    source.push_tracked(Handedness::Right, tips(Vec3::new(0.0, 1.0, -0.5), 0.01));
    frame(&mut host, &mut render, &mut source, 0.0);
    source.push_tracked(Handedness::Right, tips(Vec3::new(0.1, 1.0, -0.5), 0.01));
    frame(&mut host, &mut render, &mut source, 16.0);
    source.push_tracked(Handedness::Right, tips(Vec3::new(0.1, 1.0, -0.5), 0.06));
    frame(&mut host, &mut render, &mut source, 32.0);

    render.clear();
    // An open hand sweeping past the knob does not move it.
    source.push_tracked(Handedness::Right, tips(Vec3::new(-0.05, 1.0, -0.5), 0.06));
    let r = frame(&mut host, &mut render, &mut source, 48.0);

    assert!(r.slider_changes.is_empty());
    assert!((host.session().unwrap().slider_value("size").unwrap() - 1.0).abs() < 1e-6);
    assert!(scales(&render, host.session().unwrap().target_id("orb").unwrap()).is_empty());
}

#[test]
fn invalid_sliders_are_rejected() {
    let source = QueuedSource::new();
    let mut render = RecordingTarget::default();
    let mut host = SessionHost::new();

    let missing = SceneSetup::new().with_slider(
        SliderSpec::new("size", TRACK_START, TRACK_END, 0.04)
            .resizing(SizeBinding::new("ghost", 0.5, 1.5)),
    );
    assert_eq!(
        host.on_session_start(SessionConfig::default(), missing, &source, &mut render),
        Err(SceneError::UnknownSizeTarget("ghost".into()))
    );

    let flat = SceneSetup::new().with_slider(SliderSpec::new("size", TRACK_START, TRACK_START, 0.04));
    assert!(matches!(
        host.on_session_start(SessionConfig::default(), flat, &source, &mut render),
        Err(SceneError::InvalidSlider { .. })
    ));

    let clash = slider_scene().with_slider(SliderSpec::new("orb", TRACK_START, TRACK_END, 0.04));
    assert_eq!(
        host.on_session_start(SessionConfig::default(), clash, &source, &mut render),
        Err(SceneError::DuplicateTarget("orb".into()))
    );
    assert!(!host.is_active());
}

#[test]
fn demo_slider_drives_the_orb() {
    let source = QueuedSource::new();
    let mut host = SessionHost::new();
    let mut render = RecordingTarget::default();
    host.on_session_start(SessionConfig::default(), demo_scene(), &source, &mut render)
        .unwrap();
    let session = host.session().unwrap();
    assert!(session.target(ORB_SIZE_SLIDER).unwrap().pinchable);
    assert_eq!(session.slider_value(ORB_SIZE_SLIDER), Some(xr_core::constants::SLIDER_INITIAL_VALUE));
    let orb = session.target_id(ORB).unwrap();
    assert_eq!(scales(&render, orb).len(), 1);
}
