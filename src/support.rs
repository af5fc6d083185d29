// Which immersive session modes the device offers, and the status line shown
// for them. Pure; the host-side tests include this file directly.

pub const IMMERSIVE_AR: &str = "immersive-ar";
pub const IMMERSIVE_VR: &str = "immersive-vr";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImmersiveSupport {
    pub ar: bool,
    pub vr: bool,
}

impl ImmersiveSupport {
    #[inline]
    pub fn any(&self) -> bool {
        self.ar || self.vr
    }

    /// "AR/VR", "AR" or "VR", for whichever modes are offered.
    pub fn label(&self) -> &'static str {
        match (self.ar, self.vr) {
            (true, true) | (false, false) => "AR/VR",
            (true, false) => "AR",
            (false, true) => "VR",
        }
    }
}

pub fn status_message(support: ImmersiveSupport, hand_api: bool) -> String {
    if !support.any() {
        return "Immersive AR/VR is not supported on this device.".to_string();
    }
    let label = support.label();
    if hand_api {
        format!("Immersive {} ready. Enter {} and use your hands.", label, label)
    } else {
        format!("Immersive {} ready. Hand joint tracking is not available.", label)
    }
}
