//! Non-linear crane models.
//!
//! The payload is a spherical pendulum hanging from the cart. With the
//! line direction `e = (cos α·sin β, sin α, −cos α·cos β)` and the
//! suspension point accelerating with (ẍ, ÿ, 0):
//!
//! ```text
//! α'' = (−g·sα·cβ + ẍ·sα·sβ − ÿ·cα − 2·Ṙ·α' − R·β'²·sα·cα) / R
//! β'' = (−g·sβ − ẍ·cβ − 2·Ṙ·β'·cα + 2·R·α'·β'·sα) / (R·cα)
//! ```
//!
//! The line tension per unit payload mass is taken from the current state
//! (`S/Mc ≈ g·cα·cβ + R·(α'² + β'²·cα²)`) and pulls the carriage towards
//! the payload through μ1 and μ2. The winch holds the static payload weight;
//! the winding force acts on top of it.
//!
//! `β''` divides by `cos α`; a payload swung fully sideways (α = ±π/2) is a
//! singular pose and yields non-finite values.

use crane3d_common::crane::config::ModelConfig;

use super::KinematicState;
use super::constraints::{restrain_carriage, restrain_line};
use super::friction::{BasicRelations, DryFriction};

/// Winding axis friction model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Winch {
    /// Viscous friction only.
    Viscous,
    /// Viscous plus dry steel-on-steel drum friction.
    DrySteel,
}

/// Trigonometry of the current swing.
#[derive(Debug, Clone, Copy)]
struct Swing {
    sin_a: f64,
    cos_a: f64,
    sin_b: f64,
    cos_b: f64,
}

impl Swing {
    #[inline]
    fn of(state: &KinematicState) -> Self {
        let (sin_a, cos_a) = state.alfa.sin_cos();
        let (sin_b, cos_b) = state.beta.sin_cos();
        Self {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
        }
    }
}

/// Centripetal part of the radial acceleration, R·(α'² + β'²·cα²).
#[inline]
fn centripetal(state: &KinematicState, sw: &Swing) -> f64 {
    state.r * (state.alfa_vel * state.alfa_vel + state.beta_vel * state.beta_vel * sw.cos_a * sw.cos_a)
}

/// Carriage accelerations including the line tension reaction, held to
/// zero on an axis pinned at its limit.
#[inline]
fn carriage(state: &KinematicState, config: &ModelConfig, rel: &BasicRelations, sw: &Swing) -> (f64, f64) {
    let tension = config.gravity * sw.cos_a * sw.cos_b + centripetal(state, sw);
    let x_acc = rel.rail.net + rel.mu2 * tension * sw.cos_a * sw.sin_b;
    let y_acc = rel.cart.net + rel.mu1 * tension * sw.sin_a;
    restrain_carriage(state, config, x_acc, y_acc)
}

/// Swing angle accelerations.
#[inline]
fn pendulum(state: &KinematicState, g: f64, sw: &Swing, x_acc: f64, y_acc: f64) -> (f64, f64) {
    let r = state.r;
    let r_vel = state.r_vel;
    let (a_vel, b_vel) = (state.alfa_vel, state.beta_vel);

    let alfa_acc = (-g * sw.sin_a * sw.cos_b + x_acc * sw.sin_a * sw.sin_b
        - y_acc * sw.cos_a
        - 2.0 * r_vel * a_vel
        - r * b_vel * b_vel * sw.sin_a * sw.cos_a)
        / r;

    let beta_acc = (-g * sw.sin_b - x_acc * sw.cos_b - 2.0 * r_vel * b_vel * sw.cos_a
        + 2.0 * r * a_vel * b_vel * sw.sin_a)
        / (r * sw.cos_a);

    (alfa_acc, beta_acc)
}

#[inline]
fn integrate_swing(state: &mut KinematicState, alfa_acc: f64, beta_acc: f64, dt: f64) {
    state.alfa_vel += alfa_acc * dt;
    state.beta_vel += beta_acc * dt;
    state.alfa += state.alfa_vel * dt;
    state.beta += state.beta_vel * dt;
    state.sync_small_from_swing();
}

/// Non-linear model with a constant lift-line. The winding force is ignored.
pub(super) fn constant_line(
    state: &mut KinematicState,
    config: &ModelConfig,
    rel: &BasicRelations,
    dt: f64,
) {
    state.hold_line();

    let sw = Swing::of(state);
    let (x_acc, y_acc) = carriage(state, config, rel, &sw);
    let (alfa_acc, beta_acc) = pendulum(state, config.gravity, &sw, x_acc, y_acc);

    state.integrate_carriage(x_acc, y_acc, dt);
    integrate_swing(state, alfa_acc, beta_acc, dt);
}

/// Non-linear model with all three forces and a variable lift-line.
///
/// Radial balance along the line, with the winch holding Mc·g:
///
/// ```text
/// R̈ = R·(α'² + β'²·cα²) + g·(cα·cβ − 1) − ẍ·cα·sβ − ÿ·sα − N3
/// ```
pub(super) fn variable_line(
    state: &mut KinematicState,
    config: &ModelConfig,
    rel: &BasicRelations,
    dt: f64,
    winch: Winch,
) {
    let g = config.gravity;
    let sw = Swing::of(state);
    let (x_acc, y_acc) = carriage(state, config, rel, &sw);

    let swing_radial = centripetal(state, &sw) + g * (sw.cos_a * sw.cos_b - 1.0)
        - x_acc * sw.cos_a * sw.sin_b
        - y_acc * sw.sin_a;

    let r_acc = match winch {
        Winch::Viscous => swing_radial - rel.wind.net,
        Winch::DrySteel => {
            let tension = g * sw.cos_a * sw.cos_b + centripetal(state, &sw);
            let dry = DryFriction::winch(tension);
            dry.apply(swing_radial - rel.wind.net, state.r_vel, dt)
        }
    };
    let r_acc = restrain_line(state, config, r_acc);

    let (alfa_acc, beta_acc) = pendulum(state, g, &sw, x_acc, y_acc);

    state.integrate_carriage(x_acc, y_acc, dt);
    state.r_vel += r_acc * dt;
    state.r += state.r_vel * dt;
    integrate_swing(state, alfa_acc, beta_acc, dt);
}
