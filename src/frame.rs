use crate::constants::*;
use crate::pose_source::WebXrPoseSource;
use crate::scene::DomScene;
use crate::xr::{XrFrame, XrSession};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use xr_core::{FrameOutcome, FrameReport, PinchEvent, SessionHost, TargetId};

pub struct FrameContext {
    pub host: Rc<RefCell<SessionHost>>,
    pub scene: Rc<RefCell<DomScene>>,
    pub source: WebXrPoseSource,
    pub document: web::Document,
    pub menu_button: Option<TargetId>,
}

impl FrameContext {
    /// Run one XR frame. Returns `false` once the session is gone so the
    /// loop stops re-arming itself.
    pub fn frame(&mut self, timestamp_ms: f64, xr_frame: XrFrame) -> bool {
        let started = Instant::now();
        self.source.begin_frame(xr_frame);
        let outcome = {
            let mut scene = self.scene.borrow_mut();
            self.host
                .borrow_mut()
                .on_frame(timestamp_ms, &mut self.source, &mut *scene)
        };
        self.source.end_frame();

        let report = match outcome {
            FrameOutcome::Inactive => return false,
            FrameOutcome::Rendered(report) => report,
        };
        self.handle_report(&report);

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > SLOW_FRAME_MS {
            log::debug!(
                "[xr] frame {} took {:.2}ms",
                report.frame_index,
                elapsed_ms
            );
        }
        true
    }

    fn handle_report(&self, report: &FrameReport) {
        for target in report.presses() {
            if Some(target) == self.menu_button {
                if let Some(visible) = crate::dom::toggle_visible(&self.document, MENU_PANEL_ID) {
                    log::info!("[xr] menu panel visible={}", visible);
                }
            }
        }
        for ev in &report.pinch_events {
            match ev {
                PinchEvent::Grabbed { hand, target } => {
                    log::info!("[pinch] {} hand grabbed target {}", hand, target.0)
                }
                PinchEvent::Released { hand, target } => {
                    log::info!("[pinch] {} hand released target {}", hand, target.0)
                }
                other => log::debug!("[pinch] {:?}", other),
            }
        }
        for change in &report.slider_changes {
            log::debug!("[slider] target {} value {:.3}", change.slider.0, change.value);
        }
    }
}

/// Drive `frame_ctx` from the session's own animation frames. A-Frame keeps
/// its render loop; this callback only reads hand joints and updates entities.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, session: XrSession) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64, XrFrame)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let session_tick = session.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64, xr_frame: XrFrame| {
        if !frame_ctx.borrow_mut().frame(ts, xr_frame) {
            log::debug!("[xr] frame loop stopped");
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            session_tick.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64, XrFrame)>));
    if let Some(cb) = tick.borrow().as_ref() {
        session.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
