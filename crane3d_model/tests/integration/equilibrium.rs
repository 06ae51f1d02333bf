//! Undriven behaviour: rest stays rest, friction never adds energy.

use super::{drive, model_of};
use crane3d_model::prelude::*;

#[test]
fn one_second_linear_step_from_rest_changes_nothing() {
    let mut model = Model::new();
    model.set_model_type(ModelType::Linear);
    let initial = model.state();

    let state = model.update(1.0, ControlForces::ZERO);

    assert_eq!(state, initial);
    assert_eq!(state.alfa, 0.0);
    assert_eq!(state.beta, 0.0);
    assert_eq!(state.rail_offset, 0.0);
    assert_eq!(state.cart_offset, 0.0);
    assert_eq!(state.lift_line, 5.0);
    assert_eq!(model.kinematics().x_vel, 0.0);
    assert_eq!(model.kinematics().alfa_vel, 0.0);
}

#[test]
fn rest_is_preserved_by_every_variant() {
    for model_type in ModelType::ALL {
        let mut model = model_of(model_type);
        let initial = model.state();
        let state = drive(&mut model, ControlForces::ZERO, 1000);
        assert_eq!(state, initial, "{model_type} moved without force");
    }
}

#[test]
fn friction_only_slows_a_released_rail() {
    let mut model = model_of(ModelType::Linear);
    drive(&mut model, ControlForces::new(60.0, 0.0, 0.0), 50);

    let mut speed = model.kinematics().x_vel;
    assert!(speed > 0.0);

    for _ in 0..500 {
        model.update(0.01, ControlForces::ZERO);
        let v = model.kinematics().x_vel;
        assert!(v >= 0.0, "friction reversed the rail: {v}");
        assert!(v <= speed, "rail sped up without force: {v} > {speed}");
        speed = v;
    }
    assert!(speed < 1e-6);
}

#[test]
fn friction_cannot_reverse_even_with_a_huge_step() {
    let mut model = model_of(ModelType::Linear);
    drive(&mut model, ControlForces::new(0.0, 30.0, 0.0), 20);
    assert!(model.kinematics().y_vel > 0.0);

    // 100x the friction time constant in a single step
    model.update(2.0, ControlForces::ZERO);
    assert!(model.kinematics().y_vel >= 0.0);
}

#[test]
fn released_crane_settles_inside_travelled_range() {
    for model_type in ModelType::ALL {
        let mut model = model_of(model_type);
        let pushed = drive(&mut model, ControlForces::new(20.0, -20.0, 0.0), 100);
        let settled = drive(&mut model, ControlForces::ZERO, 3000);

        // coasting distance is bounded by the released speed over friction
        assert!(settled.rail_offset >= 0.0, "{model_type}: {settled:?}");
        assert!(settled.rail_offset - pushed.rail_offset < 1.0, "{model_type}: {settled:?}");
        assert!(settled.cart_offset <= 0.0, "{model_type}: {settled:?}");
        assert!(pushed.cart_offset - settled.cart_offset < 1.0, "{model_type}: {settled:?}");
    }
}
