//! Travel limit enforcement.

use super::{FIXED, drive, model_of};
use crane3d_model::prelude::*;
use proptest::prelude::*;

fn assert_within(config: &ModelConfig, state: &ModelState) {
    assert!(config.rail_limits.contains(state.rail_offset), "rail out of range: {state:?}");
    assert!(config.cart_limits.contains(state.cart_offset), "cart out of range: {state:?}");
    assert!(config.line_limits.contains(state.lift_line), "line out of range: {state:?}");
}

#[test]
fn rail_pinned_at_limit_does_not_penetrate_or_bounce() {
    for model_type in ModelType::ALL {
        let mut model = model_of(model_type);
        let max = model.config().rail_limits.max;

        // 200 N against ~100 N·s/m friction reaches the 30 m limit in ~15 s
        let state = drive(&mut model, ControlForces::new(200.0, 0.0, 0.0), 2000);
        assert_eq!(state.rail_offset, max, "{model_type}");

        for _ in 0..20 {
            let state = model.update(FIXED, ControlForces::new(200.0, 0.0, 0.0));
            assert_eq!(state.rail_offset, max, "{model_type}");
            assert_eq!(model.kinematics().x_vel, 0.0, "{model_type}");
        }
    }
}

#[test]
fn cart_pinned_at_negative_limit() {
    let mut model = model_of(ModelType::Linear2);
    model.config_mut().cart_limits = TravelLimits::new(-0.5, 0.5);

    let state = drive(&mut model, ControlForces::new(0.0, -100.0, 0.0), 200);
    assert_eq!(state.cart_offset, -0.5);
    assert_eq!(model.kinematics().y_vel, 0.0);
}

#[test]
fn winding_stops_at_line_limits() {
    for model_type in [ModelType::NonLinearComplete, ModelType::NonLinearOriginal] {
        let mut model = model_of(model_type);
        model.config_mut().line_limits = TravelLimits::new(5.0, 6.0);

        // pay the line out to the lower end of the drum
        let state = drive(&mut model, ControlForces::new(0.0, 0.0, -50.0), 500);
        assert_eq!(state.lift_line, 6.0, "{model_type}");
        assert_eq!(model.kinematics().r_vel, 0.0, "{model_type}");

        // and wind it back in
        let state = drive(&mut model, ControlForces::new(0.0, 0.0, 50.0), 500);
        assert_eq!(state.lift_line, 5.0, "{model_type}");
        assert_eq!(model.kinematics().r_vel, 0.0, "{model_type}");
    }
}

#[test]
fn limits_changed_between_updates_apply_on_next_update() {
    let mut model = model_of(ModelType::Linear);
    let state = drive(&mut model, ControlForces::new(50.0, 50.0, 0.0), 300);
    assert!(state.rail_offset > 0.5);
    assert!(state.cart_offset > 0.5);

    model.config_mut().rail_limits = TravelLimits::new(-0.1, 0.1);
    model.config_mut().cart_limits = TravelLimits::new(-0.2, 0.2);
    let state = model.update(FIXED, ControlForces::ZERO);
    assert_eq!(state.rail_offset, 0.1);
    assert_eq!(state.cart_offset, 0.2);
}

#[test]
fn swing_dies_out_while_cart_is_pinned() {
    let push = ControlForces::new(0.0, 50.0, 0.0);

    for model_type in ModelType::ALL {
        let mut model = model_of(model_type);
        model.config_mut().cart_limits = TravelLimits::new(-0.5, 0.5);

        let mut early: f64 = 0.0;
        let mut late: f64 = 0.0;
        for tick in 0..6000 {
            let state = model.update(FIXED, push);
            if tick < 200 {
                continue;
            }
            assert_eq!(state.cart_offset, 0.5, "{model_type} left the limit");
            assert_eq!(model.kinematics().y_vel, 0.0, "{model_type}");
            assert!(state.beta.abs() < 1e-12, "{model_type}: beta={}", state.beta);

            if tick < 500 {
                early = early.max(state.alfa.abs());
            } else if tick >= 5700 {
                late = late.max(state.alfa.abs());
            }
        }

        // the stop kicks the payload into a swing around the vertical,
        // which then only decays
        assert!(early > 0.02, "{model_type}: early amplitude {early}");
        assert!(late < 0.6 * early, "{model_type}: {late} vs {early}");
        assert!(late < 0.06, "{model_type}: late amplitude {late}");
    }
}

#[test]
fn sustained_large_forces_stay_finite_and_within_limits() {
    let frame = 1.0 / 60.0;

    for forces in [
        ControlForces::new(300.0, -300.0, 30.0),
        ControlForces::new(-300.0, 300.0, -30.0),
    ] {
        for model_type in ModelType::ALL {
            let mut model = model_of(model_type);
            let config = model.config().clone();

            for _ in 0..3000 {
                let state = model.update_fixed(FIXED, frame, forces);
                let fields = [
                    state.alfa,
                    state.beta,
                    state.rail_offset,
                    state.cart_offset,
                    state.lift_line,
                    state.payload_x,
                    state.payload_y,
                    state.payload_z,
                ];
                assert!(
                    fields.iter().all(|v| v.is_finite()),
                    "{model_type} under {forces:?}: {state:?}"
                );
                assert_within(&config, &state);
                assert!(state.alfa.abs() < core::f64::consts::FRAC_PI_2, "{model_type}: {state:?}");
            }

            // both carriage axes end up parked against a limit
            let state = model.state();
            assert!(
                state.rail_offset == config.rail_limits.min || state.rail_offset == config.rail_limits.max,
                "{model_type}: {state:?}"
            );
            assert!(
                state.cart_offset == config.cart_limits.min || state.cart_offset == config.cart_limits.max,
                "{model_type}: {state:?}"
            );
        }
    }
}

#[test]
fn narrowed_limits_hold_without_a_due_tick() {
    let mut model = model_of(ModelType::NonLinearComplete);
    let state = drive(&mut model, ControlForces::new(50.0, 0.0, 0.0), 300);
    assert!(state.rail_offset > 1.0);

    model.config_mut().rail_limits = TravelLimits::new(-0.1, 0.1);
    let state = model.update_fixed(FIXED, 0.001, ControlForces::ZERO);
    assert_eq!(model.tick_count(), 0);
    assert_within(model.config(), &state);
    assert_eq!(state.rail_offset, 0.1);
}

fn variant() -> impl Strategy<Value = ModelType> {
    prop::sample::select(ModelType::ALL.to_vec())
}

fn forces() -> impl Strategy<Value = ControlForces> {
    (-20.0..20.0f64, -20.0..20.0f64, -20.0..20.0f64)
        .prop_map(|(rail, cart, wind)| ControlForces::new(rail, cart, wind))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn positions_always_within_limits(
        model_type in variant(),
        steps in prop::collection::vec((forces(), 0.001..0.02f64), 1..80),
    ) {
        let mut model = model_of(model_type);
        // tight box so the limits are actually reached
        model.config_mut().rail_limits = TravelLimits::new(-0.3, 0.3);
        model.config_mut().cart_limits = TravelLimits::new(-0.2, 0.25);
        model.config_mut().line_limits = TravelLimits::new(5.0, 5.4);
        let config = model.config().clone();

        for (forces, dt) in steps {
            let state = model.update(dt, forces);
            assert_within(&config, &state);
            let state = model.update_fixed(FIXED, dt * 3.0, forces);
            assert_within(&config, &state);
        }
    }
}
