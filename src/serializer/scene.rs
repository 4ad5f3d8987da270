use super::{apply, lookup, place, read_bool, read_int, read_number, read_text, Document, FieldError};
use crate::camera3d::{Camera3D, EasyCam, SceneNode};
use crate::value::ValueText;
use glam::Vec3;
use serde_json::Value;
use tracing::warn;

// Every scene object is written under `name`, or straight into the given
// object when `name` is empty. Reading a missing `name` changes nothing and
// reports the name as the only failure.

pub fn serialize_node(json: &mut Document, name: &str, node: &SceneNode) {
    let mut fields = Document::new();
    write_node(&mut fields, node);
    place(json, name, fields);
}

/// Returns the fields that could not be applied.
pub fn deserialize_node(json: &Document, name: &str, node: &mut SceneNode) -> Vec<FieldError> {
    match named(json, name) {
        Ok(fields) => read_node(fields, node),
        Err(err) => vec![err],
    }
}

pub fn serialize_camera(json: &mut Document, name: &str, camera: &Camera3D) {
    let mut fields = Document::new();
    write_camera(&mut fields, camera);
    place(json, name, fields);
}

/// The stored aspect ratio only takes effect when the document also forces it.
pub fn deserialize_camera(json: &Document, name: &str, camera: &mut Camera3D) -> Vec<FieldError> {
    match named(json, name) {
        Ok(fields) => read_camera(fields, camera),
        Err(err) => vec![err],
    }
}

pub fn serialize_easy_cam(json: &mut Document, name: &str, cam: &EasyCam) {
    let mut fields = Document::new();
    write_camera(&mut fields, &cam.camera);
    fields.insert("target".into(), Value::String(cam.target().to_text()));
    fields.insert("distance".into(), cam.distance().into());
    fields.insert("drag".into(), cam.drag.into());
    fields.insert("mouseInputEnabled".into(), cam.mouse_input.into());
    fields.insert("mouseMiddleButtonEnabled".into(), cam.mouse_middle_button.into());
    fields.insert("translationKey".into(), cam.translation_key.into());
    fields.insert("relativeYAxis".into(), cam.relative_y_axis.into());
    fields.insert("upAxis".into(), Value::String(cam.up_axis.to_text()));
    fields.insert("inertiaEnabled".into(), cam.inertia.into());
    place(json, name, fields);
}

/// Restores the camera fields first so the stored transform survives, then
/// the orbit state. Automatic distance is switched off once `name` is found.
pub fn deserialize_easy_cam(json: &Document, name: &str, cam: &mut EasyCam) -> Vec<FieldError> {
    let fields = match named(json, name) {
        Ok(fields) => fields,
        Err(err) => return vec![err],
    };
    cam.auto_distance = false;
    let mut failures = read_camera(fields, &mut cam.camera);
    let transform = cam.camera.node.transform;

    apply(read_text::<Vec3>(fields, "upAxis"), &mut failures, |up| cam.up_axis = up);
    apply(read_text::<Vec3>(fields, "target"), &mut failures, |target| cam.set_target(target));
    apply(read_number(fields, "distance"), &mut failures, |distance| cam.set_distance(distance));
    apply(read_number(fields, "drag"), &mut failures, |drag| cam.drag = drag);
    apply(read_bool(fields, "mouseInputEnabled"), &mut failures, |enabled| cam.mouse_input = enabled);
    apply(read_bool(fields, "mouseMiddleButtonEnabled"), &mut failures, |enabled| {
        cam.mouse_middle_button = enabled
    });
    apply(read_int(fields, "translationKey"), &mut failures, |key| cam.translation_key = key);
    apply(read_bool(fields, "relativeYAxis"), &mut failures, |relative| cam.relative_y_axis = relative);
    apply(read_bool(fields, "inertiaEnabled"), &mut failures, |inertia| cam.inertia = inertia);

    if fields.contains_key("transform") && failures.iter().all(|err| !is_key(err, "transform")) {
        cam.camera.node.transform = transform;
    }
    failures
}

fn named<'a>(json: &'a Document, name: &str) -> Result<&'a Document, FieldError> {
    lookup(json, name).map_err(|err| {
        warn!(name, error = %err, "scene object left unchanged");
        err
    })
}

fn write_node(fields: &mut Document, node: &SceneNode) {
    fields.insert("transform".into(), Value::String(node.transform.to_text()));
}

fn read_node(fields: &Document, node: &mut SceneNode) -> Vec<FieldError> {
    let mut failures = Vec::new();
    apply(read_text(fields, "transform"), &mut failures, |transform| node.transform = transform);
    failures
}

fn write_camera(fields: &mut Document, camera: &Camera3D) {
    fields.insert("fov".into(), camera.fov_y_degrees.into());
    fields.insert("nearClip".into(), camera.near.into());
    fields.insert("farClip".into(), camera.far.into());
    fields.insert("lensOffset".into(), Value::String(camera.lens_offset.to_text()));
    fields.insert("aspectRatio".into(), camera.aspect_ratio.into());
    fields.insert("forceAspectRatio".into(), camera.force_aspect_ratio.into());
    fields.insert("ortho".into(), camera.ortho.into());
    write_node(fields, &camera.node);
}

fn read_camera(fields: &Document, camera: &mut Camera3D) -> Vec<FieldError> {
    let mut failures = Vec::new();
    apply(read_number(fields, "fov"), &mut failures, |fov| camera.fov_y_degrees = fov);
    apply(read_number(fields, "nearClip"), &mut failures, |near| camera.near = near);
    apply(read_number(fields, "farClip"), &mut failures, |far| camera.far = far);
    apply(read_text(fields, "lensOffset"), &mut failures, |offset| camera.lens_offset = offset);
    apply(read_bool(fields, "forceAspectRatio"), &mut failures, |force| camera.force_aspect_ratio = force);
    if camera.force_aspect_ratio {
        apply(read_number(fields, "aspectRatio"), &mut failures, |aspect| camera.aspect_ratio = aspect);
    }
    apply(read_bool(fields, "ortho"), &mut failures, |ortho| camera.ortho = ortho);
    failures.extend(read_node(fields, &mut camera.node));
    failures
}

fn is_key(err: &FieldError, name: &str) -> bool {
    match err {
        FieldError::Missing { key } | FieldError::WrongType { key, .. } | FieldError::Value { key, .. } => key == name,
    }
}
