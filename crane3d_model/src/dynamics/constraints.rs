//! Travel limits and numerical damping.

use crane3d_common::crane::config::{ModelConfig, TravelLimits};
use tracing::trace;

use super::KinematicState;

/// Per-tick multiplier applied to every velocity.
pub const VELOCITY_DAMPING: f64 = 0.9995;

/// Velocities below this magnitude are snapped to zero.
pub const REST_VELOCITY: f64 = 1e-12;

/// Clamp `pos` into `limits`. Returns true if it had to be moved, in which
/// case `vel` is zeroed.
#[inline]
fn clamp_axis(pos: &mut f64, vel: &mut f64, limits: &TravelLimits) -> bool {
    let clamped = limits.clamp(*pos);
    if clamped != *pos && !pos.is_nan() {
        *pos = clamped;
        *vel = 0.0;
        return true;
    }
    false
}

/// Enforce rail, cart and line limits in place.
pub fn apply_limits(state: &mut KinematicState, config: &ModelConfig) {
    if clamp_axis(&mut state.x, &mut state.x_vel, &config.rail_limits) {
        trace!("Rail clamped at {:.3}", state.x);
    }
    if clamp_axis(&mut state.y, &mut state.y_vel, &config.cart_limits) {
        trace!("Cart clamped at {:.3}", state.y);
    }
    if clamp_axis(&mut state.r, &mut state.r_vel, &config.line_limits) {
        trace!("Lift-line clamped at {:.3}", state.r);
    }
}

/// Drop an acceleration that pushes an axis resting on a limit further out.
#[inline]
fn hold_at_limit(pos: f64, acc: f64, limits: &TravelLimits) -> f64 {
    if (pos >= limits.max && acc > 0.0) || (pos <= limits.min && acc < 0.0) {
        0.0
    } else {
        acc
    }
}

/// Carriage accelerations the rail and cart can actually follow.
///
/// An axis pinned at a limit does not accelerate, so it must not drive the
/// pendulum either.
#[inline]
pub(crate) fn restrain_carriage(
    state: &KinematicState,
    config: &ModelConfig,
    x_acc: f64,
    y_acc: f64,
) -> (f64, f64) {
    (
        hold_at_limit(state.x, x_acc, &config.rail_limits),
        hold_at_limit(state.y, y_acc, &config.cart_limits),
    )
}

/// Radial acceleration the lift-line can actually follow.
#[inline]
pub(crate) fn restrain_line(state: &KinematicState, config: &ModelConfig, r_acc: f64) -> f64 {
    hold_at_limit(state.r, r_acc, &config.line_limits)
}

#[inline]
fn damp(vel: &mut f64) {
    *vel *= VELOCITY_DAMPING;
    if vel.abs() < REST_VELOCITY {
        *vel = 0.0;
    }
}

/// Bleed a small fraction of every velocity to suppress long-run drift.
pub fn dampen(state: &mut KinematicState) {
    damp(&mut state.x_vel);
    damp(&mut state.y_vel);
    damp(&mut state.r_vel);
    damp(&mut state.alfa_vel);
    damp(&mut state.beta_vel);
    state.sync_small_from_swing();
}
