use crate::aframe::{self, bool_attr, rotation_attr, vec3_attr};
use crate::constants::*;
use anyhow::anyhow;
use glam::{Quat, Vec3};
use web_sys as web;
use xr_core::{
    HandJoint, Handedness, MarkerId, RenderTarget, SceneSetup, TargetId, TargetState,
    MARKER_POOL_SIZE,
};

struct TargetEntity {
    el: web::Element,
    idle_color: &'static str,
}

/// Render target over A-Frame entities: one `<a-sphere>` per marker slot and
/// per interaction target, created once and mutated through attributes.
pub struct DomScene {
    markers: Vec<web::Element>,
    targets: Vec<TargetEntity>,
}

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))
}

fn set(el: &web::Element, name: &str, value: &str) {
    _ = el.set_attribute(name, value);
}

/// Reuse an existing entity by id or append a fresh `<a-entity>` to the scene.
fn root_entity(document: &web::Document, scene: &web::Element, id: &str) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(id) {
        return Ok(el);
    }
    let el = create(document, "a-entity")?;
    el.set_id(id);
    scene
        .append_child(&el)
        .map_err(|e| anyhow!("append #{}: {:?}", id, e))?;
    Ok(el)
}

impl DomScene {
    /// Build marker and target entities for `setup` under `scene`. Entities
    /// from a previous session are replaced.
    pub fn build(document: &web::Document, scene: &web::Element, setup: &SceneSetup) -> anyhow::Result<Self> {
        let marker_root = root_entity(document, scene, MARKER_ROOT_ID)?;
        let target_root = root_entity(document, scene, TARGET_ROOT_ID)?;
        marker_root.set_inner_html("");
        target_root.set_inner_html("");

        let mut markers = Vec::with_capacity(MARKER_POOL_SIZE);
        for hand in Handedness::ALL {
            for joint in HandJoint::ALL {
                let el = create(document, "a-sphere")?;
                el.set_id(&aframe::marker_element_id(hand, joint));
                set(&el, "radius", "1");
                set(&el, "segments-width", &MARKER_SEGMENTS.to_string());
                set(&el, "segments-height", &MARKER_SEGMENTS.to_string());
                set(&el, "color", aframe::marker_color(hand));
                set(&el, "opacity", &MARKER_OPACITY.to_string());
                set(&el, "visible", "false");
                marker_root
                    .append_child(&el)
                    .map_err(|e| anyhow!("append marker: {:?}", e))?;
                markers.push(el);
            }
        }

        let planet_names: Vec<&str> = setup
            .orbit
            .iter()
            .flat_map(|o| o.planets.iter().map(|p| p.name.as_str()))
            .collect();
        let mut targets = Vec::with_capacity(setup.targets.len());
        for spec in &setup.targets {
            let el = create(document, "a-sphere")?;
            el.set_id(&aframe::target_element_id(&spec.name));
            let idle_color = match planet_names.iter().position(|n| *n == spec.name) {
                Some(i) => PLANET_IDLE_COLORS[i % PLANET_IDLE_COLORS.len()],
                None => TARGET_IDLE_COLOR,
            };
            let radius = setup
                .orbit
                .iter()
                .flat_map(|o| o.planets.iter())
                .find(|p| p.name == spec.name)
                .map_or(spec.trigger_radius, |p| p.size);
            set(&el, "radius", &radius.to_string());
            set(&el, "color", idle_color);
            set(&el, "position", &vec3_attr(spec.position));
            target_root
                .append_child(&el)
                .map_err(|e| anyhow!("append target: {:?}", e))?;
            targets.push(TargetEntity { el, idle_color });
        }

        if let Some(orbit) = &setup.orbit {
            let sun = create(document, "a-sphere")?;
            set(&sun, "radius", &SUN_RADIUS.to_string());
            set(&sun, "color", SUN_COLOR);
            set(&sun, "material", "shader: flat");
            set(&sun, "position", &vec3_attr(orbit.center));
            _ = target_root.append_child(&sun);
        }

        for slider in &setup.sliders {
            let track = create(document, "a-entity")?;
            set(&track, "line", &aframe::line_attr(slider.track_start, slider.track_end, SLIDER_TRACK_COLOR));
            _ = target_root.append_child(&track);
        }

        log::info!(
            "[scene] built {} markers and {} targets",
            markers.len(),
            targets.len()
        );
        Ok(Self { markers, targets })
    }
}

impl RenderTarget for DomScene {
    fn set_transform(&mut self, marker: MarkerId, translation: Vec3, rotation: Quat, scale: Vec3) {
        if let Some(el) = self.markers.get(marker.index()) {
            set(el, "position", &vec3_attr(translation));
            set(el, "rotation", &rotation_attr(rotation));
            set(el, "scale", &vec3_attr(scale));
        }
    }

    fn set_visible(&mut self, marker: MarkerId, visible: bool) {
        if let Some(el) = self.markers.get(marker.index()) {
            set(el, "visible", bool_attr(visible));
        }
    }

    fn set_target_state(&mut self, target: TargetId, state: TargetState) {
        if let Some(t) = self.targets.get(target.0) {
            set(&t.el, "color", aframe::state_color(state, t.idle_color));
        }
    }

    fn set_target_position(&mut self, target: TargetId, position: Vec3) {
        if let Some(t) = self.targets.get(target.0) {
            set(&t.el, "position", &vec3_attr(position));
        }
    }

    fn set_target_scale(&mut self, target: TargetId, scale: f32) {
        if let Some(t) = self.targets.get(target.0) {
            set(&t.el, "scale", &vec3_attr(Vec3::splat(scale)));
        }
    }
}
