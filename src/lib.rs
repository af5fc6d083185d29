#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;
use xr_core::{demo_scene, PoseSource, SessionConfig, SessionHost, MENU_BUTTON};

mod aframe;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod pose_math;
mod pose_source;
mod scene;
mod support;
mod xr;

use constants::*;
use frame::FrameContext;
use pose_source::WebXrPoseSource;
use scene::DomScene;
use support::{ImmersiveSupport, IMMERSIVE_AR, IMMERSIVE_VR};

/// Everything the A-Frame event handlers share.
#[derive(Clone)]
struct App {
    document: web::Document,
    scene_el: web::Element,
    host: Rc<RefCell<SessionHost>>,
    scene: Rc<RefCell<DomScene>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("handxr-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let scene_el = document
        .query_selector(SCENE_SELECTOR)
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("missing <{}>", SCENE_SELECTOR))?;
    _ = scene_el.set_attribute("webxr", "optionalFeatures: hand-tracking");

    events::wire_global_keydown(&document);
    let doc_close = document.clone();
    dom::add_click_listener(&document, STATUS_CLOSE_ID, move || overlay::hide(&doc_close));

    report_support(&document).await;

    let scene = DomScene::build(&document, &scene_el, &demo_scene())?;
    let app = App {
        document,
        scene_el: scene_el.clone(),
        host: Rc::new(RefCell::new(SessionHost::new())),
        scene: Rc::new(RefCell::new(scene)),
    };

    let app_enter = app.clone();
    dom::add_event_listener(&scene_el, "enter-vr", move || {
        let app = app_enter.clone();
        spawn_local(async move {
            if let Err(e) = enter_session(app).await {
                log::error!("[xr] session start failed: {:?}", e);
            }
        });
    });
    let app_exit = app.clone();
    dom::add_event_listener(&scene_el, "exit-vr", move || end_session(&app_exit));
    Ok(())
}

async fn report_support(document: &web::Document) {
    let Some(system) = xr::system() else {
        overlay::set_status(document, "WebXR is not available in this browser.");
        return;
    };
    let support = ImmersiveSupport {
        ar: mode_supported(&system, IMMERSIVE_AR).await,
        vr: mode_supported(&system, IMMERSIVE_VR).await,
    };
    let status = support::status_message(support, xr::hand_pose_api_available());
    log::info!("[xr] {} (ar={}, vr={})", status, support.ar, support.vr);
    overlay::set_status(document, &status);
}

async fn mode_supported(system: &xr::XrSystem, mode: &str) -> bool {
    JsFuture::from(system.is_session_supported(mode))
        .await
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

async fn enter_session(app: App) -> anyhow::Result<()> {
    let session = xr::scene_session(&app.scene_el).ok_or_else(|| anyhow!("scene has no xrSession"))?;
    let base_space = match xr::scene_reference_space(&app.scene_el) {
        Some(space) => space,
        None => JsFuture::from(session.request_reference_space(FALLBACK_REFERENCE_SPACE))
            .await
            .map_err(|e| anyhow!("reference space: {:?}", e))?
            .unchecked_into(),
    };

    let source = WebXrPoseSource::new(session.clone(), base_space);
    if !source.supports_joint_poses() {
        overlay::set_status(&app.document, "Hand joint tracking is not available in this session.");
    }
    app.host.borrow_mut().on_session_start(
        SessionConfig::default(),
        demo_scene(),
        &source,
        &mut *app.scene.borrow_mut(),
    )?;
    let menu_button = app
        .host
        .borrow()
        .session()
        .and_then(|s| s.target_id(MENU_BUTTON));

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        host: app.host.clone(),
        scene: app.scene.clone(),
        source,
        document: app.document.clone(),
        menu_button,
    }));
    frame::start_loop(frame_ctx, session.clone());

    let app_end = app.clone();
    dom::add_event_listener(&session, "end", move || end_session(&app_end));
    log::info!("[xr] session started");
    Ok(())
}

fn end_session(app: &App) {
    if app
        .host
        .borrow_mut()
        .on_session_end(&mut *app.scene.borrow_mut())
    {
        log::info!("[xr] session ended");
    }
}
