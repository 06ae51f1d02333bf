//! Snapshot consistency: payload position derived from the pose.

use super::{drive, model_of, same_bits};
use crane3d_model::prelude::*;

fn assert_consistent(state: &ModelState) {
    let derived = ModelState::from_pose(
        state.alfa,
        state.beta,
        state.rail_offset,
        state.cart_offset,
        state.lift_line,
    );
    assert!(same_bits(state, &derived), "{state:?} vs {derived:?}");
}

#[test]
fn state_query_is_idempotent() {
    let mut model = model_of(ModelType::NonLinearComplete);
    drive(&mut model, ControlForces::new(15.0, -10.0, 2.0), 120);

    let first = model.state();
    let second = model.state();
    assert!(same_bits(&first, &second));
    assert_eq!(model.tick_count(), 0);
}

#[test]
fn every_snapshot_is_kinematically_consistent() {
    for model_type in ModelType::ALL {
        let mut model = model_of(model_type);
        assert_consistent(&model.state());
        for i in 0..300 {
            let t = i as f64 * 0.01;
            let forces = ControlForces::new(25.0 * t.cos(), 18.0 * (2.0 * t).sin(), 4.0 * t.sin());
            let state = model.update(0.01, forces);
            assert_consistent(&state);
        }
    }
}

#[test]
fn payload_hangs_below_suspension_at_rest() {
    let state = Model::new().state();
    assert_eq!(state.payload_x, state.rail_offset);
    assert_eq!(state.payload_y, state.cart_offset);
    assert_eq!(state.payload_z, -state.lift_line);
    assert_eq!(state.suspension(), Vec3d::new(0.0, 0.0, 0.0));
}

#[test]
fn payload_distance_equals_line_length() {
    let mut model = model_of(ModelType::NonLinearConstantLine);
    let state = drive(&mut model, ControlForces::new(40.0, 30.0, 0.0), 80);
    assert!(state.alfa != 0.0 && state.beta != 0.0);

    let distance = (state.payload() - state.suspension()).length();
    assert!((distance - state.lift_line).abs() < 1e-12);
}

#[test]
fn snapshot_serializes_with_field_names() {
    let mut model = model_of(ModelType::Linear2);
    let state = drive(&mut model, ControlForces::new(5.0, 5.0, 0.0), 10);

    let json = serde_json::to_value(state).unwrap();
    for key in [
        "alfa",
        "beta",
        "rail_offset",
        "cart_offset",
        "lift_line",
        "payload_x",
        "payload_y",
        "payload_z",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    let back: ModelState = serde_json::from_value(json).unwrap();
    assert!(same_bits(&state, &back));
}
