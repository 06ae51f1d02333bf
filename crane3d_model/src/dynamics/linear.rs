//! Small-angle crane models.
//!
//! Both variants integrate the auxiliary pair (Δα, Δβ) with the line length
//! held constant and ignore the winding force. Linearised about the hanging
//! rest position (sin θ ≈ θ, cos θ ≈ 1):
//!
//! ```text
//! Δα'' = −(g·Δα + ÿ) / R
//! Δβ'' = −(g·Δβ + ẍ) / R
//! ```

use crane3d_common::crane::config::ModelConfig;

use super::KinematicState;
use super::constraints::restrain_carriage;
use super::friction::BasicRelations;

/// Pendulum accelerations for carriage accelerations `x_acc`, `y_acc`.
#[inline]
fn pendulum(state: &KinematicState, g: f64, x_acc: f64, y_acc: f64) -> (f64, f64) {
    let r = state.r;
    let alfa_acc = -(g * state.small.alfa + y_acc) / r;
    let beta_acc = -(g * state.small.beta + x_acc) / r;
    (alfa_acc, beta_acc)
}

#[inline]
fn integrate(state: &mut KinematicState, x_acc: f64, y_acc: f64, alfa_acc: f64, beta_acc: f64, dt: f64) {
    state.integrate_carriage(x_acc, y_acc, dt);
    state.hold_line();

    let small = &mut state.small;
    small.alfa_vel += alfa_acc * dt;
    small.beta_vel += beta_acc * dt;
    small.alfa += small.alfa_vel * dt;
    small.beta += small.beta_vel * dt;

    state.sync_swing_from_small();
}

/// Basic linear model: the carriage is driven by the net accelerations
/// alone and the payload swings behind it without reacting on it.
pub(super) fn basic(state: &mut KinematicState, config: &ModelConfig, rel: &BasicRelations, dt: f64) {
    let (x_acc, y_acc) = restrain_carriage(state, config, rel.rail.net, rel.cart.net);
    let (alfa_acc, beta_acc) = pendulum(state, config.gravity, x_acc, y_acc);
    integrate(state, x_acc, y_acc, alfa_acc, beta_acc, dt);
}

/// Linear model with the payload reaction on the carriage.
///
/// The horizontal component of the line tension (≈ Mc·g·θ) pulls the
/// carriage towards the payload, scaled by the mass ratios:
///
/// ```text
/// ẍ = N2 + μ2·g·Δβ
/// ÿ = N1 + μ1·g·Δα
/// ```
pub(super) fn reaction_coupled(
    state: &mut KinematicState,
    config: &ModelConfig,
    rel: &BasicRelations,
    dt: f64,
) {
    let g = config.gravity;
    let (x_acc, y_acc) = restrain_carriage(
        state,
        config,
        rel.rail.net + rel.mu2 * g * state.small.beta,
        rel.cart.net + rel.mu1 * g * state.small.alfa,
    );
    let (alfa_acc, beta_acc) = pendulum(state, g, x_acc, y_acc);
    integrate(state, x_acc, y_acc, alfa_acc, beta_acc, dt);
}
