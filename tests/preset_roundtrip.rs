use glam::{IVec3, Vec2, Vec4};
use kestrel_preset::serializer::{self, Document};
use kestrel_preset::{load_preset, save_preset, Color, ParameterGroup, Parameter};
use serde_json::{json, Value};

fn scene_params(scale: f32, count: i32, offset: Vec2) -> ParameterGroup {
    ParameterGroup::new("scene")
        .with(Parameter::with_range("scale", scale, -10.0, 10.0))
        .with(Parameter::with_range("count", count, -100, 100))
        .with(Parameter::new("offset", offset))
        .with_group(
            ParameterGroup::new("material")
                .with(Parameter::new("tint", Color::new(0.25, 0.5, 0.75, 1.0)))
                .with(Parameter::new("weights", Vec4::new(0.0, -0.5, 1.0, 0.125)))
                .with(Parameter::new("cells", IVec3::new(-1, 0, 7))),
        )
}

fn as_document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn preset_file_round_trips_boundary_values() {
    let dir = tempfile::tempdir().expect("temp dir");
    for (scale, count) in [(0.0, 0), (-10.0, -100), (10.0, 100), (-0.001, -1)] {
        let path = dir.path().join(format!("scene_{count}.json"));
        let saved = scene_params(scale, count, Vec2::new(-3.5, 0.0));
        save_preset(&path, &saved).expect("save preset");

        let mut loaded = scene_params(1.0, 1, Vec2::ONE);
        load_preset(&path, &mut loaded).expect("load preset");
        assert_eq!(loaded, saved);
    }
}

#[test]
fn non_serializable_group_is_absent_and_untouched() {
    let build = |gain: f32| {
        ParameterGroup::new("")
            .with(Parameter::new("gain", gain))
            .with_group(ParameterGroup::new("runtime").serializable(false).with(Parameter::new("fps", gain)))
    };
    let mut json = Document::new();
    serializer::serialize_group(&mut json, &build(0.5));
    assert_eq!(Value::Object(json), json!({ "gain": "0.5" }));

    let stored = as_document(json!({ "gain": "0.75", "runtime": { "fps": "60" } }));
    let mut group = build(0.5);
    assert!(serializer::deserialize_group(&stored, &mut group));
    assert_eq!(group.get::<f32>("gain").map(Parameter::get), Some(0.75));
    let runtime = group.group("runtime").expect("runtime group");
    assert_eq!(runtime.get::<f32>("fps").map(Parameter::get), Some(0.5));
}

#[test]
fn non_serializable_parameter_is_skipped_both_ways() {
    let mut group = ParameterGroup::new("")
        .with(Parameter::new("seed", 3_i32).serializable(false))
        .with(Parameter::new("size", 4_i32));
    let mut json = Document::new();
    serializer::serialize_group(&mut json, &group);
    assert_eq!(Value::Object(json), json!({ "size": "4" }));

    let stored = as_document(json!({ "seed": "9", "size": "8" }));
    serializer::deserialize_group(&stored, &mut group);
    assert_eq!(group.get::<i32>("seed").map(Parameter::get), Some(3));
    assert_eq!(group.get::<i32>("size").map(Parameter::get), Some(8));
}

#[test]
fn unnamed_root_writes_children_into_document() {
    let group = ParameterGroup::new("")
        .with(Parameter::new("a", 1_i32))
        .with_group(ParameterGroup::new("inner").with(Parameter::new("b", true)));
    let mut json = as_document(json!({ "existing": "kept" }));
    serializer::serialize_group(&mut json, &group);
    assert_eq!(Value::Object(json), json!({ "existing": "kept", "a": "1", "inner": { "b": "1" } }));
}

#[test]
fn named_root_nests_under_its_name() {
    let group = ParameterGroup::new("root").with(Parameter::new("a", 2_i32));
    let mut json = Document::new();
    serializer::serialize_group(&mut json, &group);
    assert_eq!(Value::Object(json), json!({ "root": { "a": "2" } }));
}

#[test]
fn missing_keys_leave_every_value_alone() {
    let mut group = scene_params(2.0, 5, Vec2::ZERO);
    let before = group.clone();
    assert!(!serializer::deserialize_group(&Document::new(), &mut group));
    assert_eq!(group, before);
}
