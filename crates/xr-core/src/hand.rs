//! Hand sides and the 25 WebXR hand joints.
//!
//! Joint order follows the WebXR Hand Input enumeration, so `HandJoint::index`
//! doubles as the offset into per-hand `fillPoses`/`fillJointRadii` buffers.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub const ALL: [Handedness; 2] = [Handedness::Left, Handedness::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Handedness::Left => 0,
            Handedness::Right => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Handedness {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }

    /// Parse an `XRInputSource.handedness` value. `"none"` has no hand side.
    pub fn from_xr(value: &str) -> Option<Handedness> {
        match value {
            "left" => Some(Handedness::Left),
            "right" => Some(Handedness::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const JOINT_COUNT: usize = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandJoint {
    Wrist,
    ThumbMetacarpal,
    ThumbPhalanxProximal,
    ThumbPhalanxDistal,
    ThumbTip,
    IndexFingerMetacarpal,
    IndexFingerPhalanxProximal,
    IndexFingerPhalanxIntermediate,
    IndexFingerPhalanxDistal,
    IndexFingerTip,
    MiddleFingerMetacarpal,
    MiddleFingerPhalanxProximal,
    MiddleFingerPhalanxIntermediate,
    MiddleFingerPhalanxDistal,
    MiddleFingerTip,
    RingFingerMetacarpal,
    RingFingerPhalanxProximal,
    RingFingerPhalanxIntermediate,
    RingFingerPhalanxDistal,
    RingFingerTip,
    PinkyFingerMetacarpal,
    PinkyFingerPhalanxProximal,
    PinkyFingerPhalanxIntermediate,
    PinkyFingerPhalanxDistal,
    PinkyFingerTip,
}

use HandJoint::*;

const XR_NAMES: [&str; JOINT_COUNT] = [
    "wrist",
    "thumb-metacarpal",
    "thumb-phalanx-proximal",
    "thumb-phalanx-distal",
    "thumb-tip",
    "index-finger-metacarpal",
    "index-finger-phalanx-proximal",
    "index-finger-phalanx-intermediate",
    "index-finger-phalanx-distal",
    "index-finger-tip",
    "middle-finger-metacarpal",
    "middle-finger-phalanx-proximal",
    "middle-finger-phalanx-intermediate",
    "middle-finger-phalanx-distal",
    "middle-finger-tip",
    "ring-finger-metacarpal",
    "ring-finger-phalanx-proximal",
    "ring-finger-phalanx-intermediate",
    "ring-finger-phalanx-distal",
    "ring-finger-tip",
    "pinky-finger-metacarpal",
    "pinky-finger-phalanx-proximal",
    "pinky-finger-phalanx-intermediate",
    "pinky-finger-phalanx-distal",
    "pinky-finger-tip",
];

impl HandJoint {
    pub const ALL: [HandJoint; JOINT_COUNT] = [
        Wrist,
        ThumbMetacarpal,
        ThumbPhalanxProximal,
        ThumbPhalanxDistal,
        ThumbTip,
        IndexFingerMetacarpal,
        IndexFingerPhalanxProximal,
        IndexFingerPhalanxIntermediate,
        IndexFingerPhalanxDistal,
        IndexFingerTip,
        MiddleFingerMetacarpal,
        MiddleFingerPhalanxProximal,
        MiddleFingerPhalanxIntermediate,
        MiddleFingerPhalanxDistal,
        MiddleFingerTip,
        RingFingerMetacarpal,
        RingFingerPhalanxProximal,
        RingFingerPhalanxIntermediate,
        RingFingerPhalanxDistal,
        RingFingerTip,
        PinkyFingerMetacarpal,
        PinkyFingerPhalanxProximal,
        PinkyFingerPhalanxIntermediate,
        PinkyFingerPhalanxDistal,
        PinkyFingerTip,
    ];

    pub const TIPS: [HandJoint; 5] = [
        ThumbTip,
        IndexFingerTip,
        MiddleFingerTip,
        RingFingerTip,
        PinkyFingerTip,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<HandJoint> {
        Self::ALL.get(index).copied()
    }

    /// Joint name as used by `XRHand.get()`.
    #[inline]
    pub fn xr_name(self) -> &'static str {
        XR_NAMES[self.index()]
    }

    pub fn from_xr_name(name: &str) -> Option<HandJoint> {
        XR_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(HandJoint::from_index)
    }

    #[inline]
    pub fn is_tip(self) -> bool {
        Self::TIPS.contains(&self)
    }
}

impl fmt::Display for HandJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xr_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_index_matches_enumeration_order() {
        for (i, joint) in HandJoint::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
            assert_eq!(HandJoint::from_index(i), Some(*joint));
        }
        assert_eq!(HandJoint::from_index(JOINT_COUNT), None);
    }

    #[test]
    fn xr_names_parse_back() {
        for joint in HandJoint::ALL {
            assert_eq!(HandJoint::from_xr_name(joint.xr_name()), Some(joint));
        }
        assert_eq!(HandJoint::from_xr_name("elbow"), None);
        assert_eq!(IndexFingerTip.xr_name(), "index-finger-tip");
    }

    #[test]
    fn handedness_parses_xr_values() {
        assert_eq!(Handedness::from_xr("left"), Some(Handedness::Left));
        assert_eq!(Handedness::from_xr("right"), Some(Handedness::Right));
        assert_eq!(Handedness::from_xr("none"), None);
        assert_eq!(Handedness::Left.other(), Handedness::Right);
    }
}
