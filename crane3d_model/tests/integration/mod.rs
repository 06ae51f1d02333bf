//! Shared helpers for the engine integration tests.

mod determinism;
mod equilibrium;
mod kinematics;
mod limits;

use crane3d_model::prelude::*;

/// Standard fixed step used across the tests [s].
pub const FIXED: f64 = 0.01;

/// Run `ticks` fixed steps with constant forces, returning the last state.
pub fn drive(model: &mut Model, forces: ControlForces, ticks: usize) -> ModelState {
    let mut state = model.state();
    for _ in 0..ticks {
        state = model.update(FIXED, forces);
    }
    state
}

/// Bitwise equality of two snapshots.
pub fn same_bits(a: &ModelState, b: &ModelState) -> bool {
    let bits = |s: &ModelState| {
        [
            s.alfa,
            s.beta,
            s.rail_offset,
            s.cart_offset,
            s.lift_line,
            s.payload_x,
            s.payload_y,
            s.payload_z,
        ]
        .map(f64::to_bits)
    };
    bits(a) == bits(b)
}

/// A model of the reference crane with the given variant.
pub fn model_of(model_type: ModelType) -> Model {
    let mut model = Model::new();
    model.set_model_type(model_type);
    model
}
