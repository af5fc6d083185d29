// Minimal WebXR bindings for the hand-input pieces we use.
// web-sys only exposes these behind `web_sys_unstable_apis`, so the handful of
// methods needed here are declared directly.

use js_sys::{Array, Float32Array, Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = XRSystem)]
    pub type XrSystem;

    #[wasm_bindgen(method, js_name = isSessionSupported)]
    pub fn is_session_supported(this: &XrSystem, mode: &str) -> Promise;

    #[wasm_bindgen(extends = web::EventTarget, js_name = XRSession)]
    pub type XrSession;

    #[wasm_bindgen(method, js_name = requestAnimationFrame)]
    pub fn request_animation_frame(this: &XrSession, callback: &Function) -> u32;

    #[wasm_bindgen(method, js_name = requestReferenceSpace)]
    pub fn request_reference_space(this: &XrSession, kind: &str) -> Promise;

    #[wasm_bindgen(method, getter, js_name = inputSources)]
    pub fn input_sources(this: &XrSession) -> XrInputSourceArray;

    #[wasm_bindgen(method, getter, js_name = enabledFeatures)]
    pub fn enabled_features(this: &XrSession) -> JsValue;

    #[wasm_bindgen(js_name = XRInputSourceArray)]
    pub type XrInputSourceArray;

    #[wasm_bindgen(method, getter)]
    pub fn length(this: &XrInputSourceArray) -> u32;

    #[wasm_bindgen(method, indexing_getter)]
    pub fn get(this: &XrInputSourceArray, index: u32) -> Option<XrInputSource>;

    #[wasm_bindgen(js_name = XRInputSource)]
    pub type XrInputSource;

    #[wasm_bindgen(method, getter)]
    pub fn handedness(this: &XrInputSource) -> String;

    #[wasm_bindgen(method, getter)]
    pub fn hand(this: &XrInputSource) -> Option<XrHand>;

    #[wasm_bindgen(js_name = XRHand)]
    pub type XrHand;

    #[wasm_bindgen(method)]
    pub fn get(this: &XrHand, joint: &str) -> Option<XrSpace>;

    #[wasm_bindgen(js_name = XRSpace)]
    pub type XrSpace;

    #[wasm_bindgen(js_name = XRFrame)]
    pub type XrFrame;

    #[wasm_bindgen(method, catch, js_name = fillPoses)]
    pub fn fill_poses(
        this: &XrFrame,
        spaces: &Array,
        base_space: &XrSpace,
        transforms: &Float32Array,
    ) -> Result<bool, JsValue>;

    #[wasm_bindgen(method, catch, js_name = fillJointRadii)]
    pub fn fill_joint_radii(
        this: &XrFrame,
        spaces: &Array,
        radii: &Float32Array,
    ) -> Result<bool, JsValue>;
}

/// `navigator.xr`, if the browser has WebXR at all.
pub fn system() -> Option<XrSystem> {
    let navigator = web::window()?.navigator();
    let xr = Reflect::get(&navigator, &JsValue::from_str("xr")).ok()?;
    if xr.is_undefined() || xr.is_null() {
        return None;
    }
    Some(xr.unchecked_into())
}

/// Whether `XRFrame.fillPoses`/`fillJointRadii` and `XRHand` exist.
pub fn hand_pose_api_available() -> bool {
    let global = js_sys::global();
    let has_hand = Reflect::get(&global, &"XRHand".into())
        .map(|v| !v.is_undefined())
        .unwrap_or(false);
    let frame_proto = Reflect::get(&global, &"XRFrame".into())
        .and_then(|ctor| Reflect::get(&ctor, &"prototype".into()))
        .ok()
        .filter(|p| !p.is_undefined());
    let has_fill = frame_proto.is_some_and(|proto| {
        ["fillPoses", "fillJointRadii"].iter().all(|name| {
            Reflect::get(&proto, &JsValue::from_str(name))
                .map(|f| f.is_function())
                .unwrap_or(false)
        })
    });
    has_hand && has_fill
}

/// Whether the session granted `hand-tracking`. Browsers without
/// `enabledFeatures` are given the benefit of the doubt.
pub fn session_has_hand_tracking(session: &XrSession) -> bool {
    let features = session.enabled_features();
    if !Array::is_array(&features) {
        return true;
    }
    Array::from(&features).includes(&"hand-tracking".into(), 0)
}

/// `sceneEl.xrSession` as set by A-Frame once immersive mode is entered.
pub fn scene_session(scene: &web::Element) -> Option<XrSession> {
    let session = Reflect::get(scene, &"xrSession".into()).ok()?;
    if session.is_undefined() || session.is_null() {
        return None;
    }
    Some(session.unchecked_into())
}

/// The reference space three.js renders with: `sceneEl.renderer.xr.getReferenceSpace()`.
pub fn scene_reference_space(scene: &web::Element) -> Option<XrSpace> {
    let renderer = Reflect::get(scene, &"renderer".into()).ok()?;
    let xr = Reflect::get(&renderer, &"xr".into()).ok()?;
    let getter: Function = Reflect::get(&xr, &"getReferenceSpace".into())
        .ok()?
        .dyn_into()
        .ok()?;
    let space = getter.call0(&xr).ok()?;
    if space.is_undefined() || space.is_null() {
        return None;
    }
    Some(space.unchecked_into())
}
