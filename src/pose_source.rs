use crate::pose_math::{hand_poses_from_buffers, TRANSFORM_BUFFER_LEN};
use crate::xr::{self, XrFrame, XrHand, XrSession, XrSpace};
use js_sys::{Array, Float32Array};
use xr_core::{FillKind, HandJoint, HandPoses, Handedness, PoseError, PoseSource, JOINT_COUNT};

/// Per-hand joint spaces in `HandJoint` order, ready for the fill calls.
struct TrackedHand {
    hand: XrHand,
    spaces: Array,
}

/// Reads hand joints from the current `XRFrame` relative to the scene's
/// reference space. `begin_frame` must be called before each frame's queries.
pub struct WebXrPoseSource {
    session: XrSession,
    base_space: XrSpace,
    supported: bool,
    frame: Option<XrFrame>,
    hands: [Option<TrackedHand>; 2],
    transforms_js: Float32Array,
    radii_js: Float32Array,
    transforms: Vec<f32>,
    radii: Vec<f32>,
}

impl WebXrPoseSource {
    pub fn new(session: XrSession, base_space: XrSpace) -> Self {
        let supported = xr::hand_pose_api_available() && xr::session_has_hand_tracking(&session);
        Self {
            session,
            base_space,
            supported,
            frame: None,
            hands: [None, None],
            transforms_js: Float32Array::new_with_length(TRANSFORM_BUFFER_LEN as u32),
            radii_js: Float32Array::new_with_length(JOINT_COUNT as u32),
            transforms: vec![0.0; TRANSFORM_BUFFER_LEN],
            radii: vec![0.0; JOINT_COUNT],
        }
    }

    /// Adopt this frame and refresh which input sources carry hands.
    pub fn begin_frame(&mut self, frame: XrFrame) {
        self.frame = Some(frame);
        let mut seen = [false; 2];
        let sources = self.session.input_sources();
        for i in 0..sources.length() {
            let Some(source) = sources.get(i) else { continue };
            let Some(side) = Handedness::from_xr(&source.handedness()) else {
                continue;
            };
            let Some(hand) = source.hand() else { continue };
            seen[side.index()] = true;
            let slot = &mut self.hands[side.index()];
            let stale = match slot {
                Some(tracked) => !js_sys::Object::is(&tracked.hand, &hand),
                None => true,
            };
            if stale {
                *slot = joint_spaces(&hand).map(|spaces| TrackedHand { hand, spaces });
            }
        }
        for side in Handedness::ALL {
            if !seen[side.index()] {
                self.hands[side.index()] = None;
            }
        }
    }

    pub fn end_frame(&mut self) {
        self.frame = None;
    }
}

fn joint_spaces(hand: &XrHand) -> Option<Array> {
    let spaces = Array::new_with_length(JOINT_COUNT as u32);
    for joint in HandJoint::ALL {
        let space = hand.get(joint.xr_name())?;
        spaces.set(joint.index() as u32, space.into());
    }
    Some(spaces)
}

fn js_message(e: wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl PoseSource for WebXrPoseSource {
    fn supports_joint_poses(&self) -> bool {
        self.supported
    }

    fn joint_poses(&mut self, hand: Handedness) -> Result<HandPoses, PoseError> {
        let (Some(frame), Some(tracked)) = (&self.frame, &self.hands[hand.index()]) else {
            return Ok(HandPoses::Unavailable);
        };
        let filled = frame
            .fill_joint_radii(&tracked.spaces, &self.radii_js)
            .map_err(|e| PoseError::Platform {
                hand,
                message: js_message(e),
            })?;
        if !filled {
            return Err(PoseError::FillFailed {
                hand,
                kind: FillKind::Radii,
            });
        }
        let filled = frame
            .fill_poses(&tracked.spaces, &self.base_space, &self.transforms_js)
            .map_err(|e| PoseError::Platform {
                hand,
                message: js_message(e),
            })?;
        if !filled {
            return Err(PoseError::FillFailed {
                hand,
                kind: FillKind::Poses,
            });
        }
        self.radii_js.copy_to(&mut self.radii);
        self.transforms_js.copy_to(&mut self.transforms);
        Ok(HandPoses::Tracked(hand_poses_from_buffers(
            hand,
            &self.transforms,
            &self.radii,
        )))
    }
}
