//! Driving, friction and net accelerations of the actuated axes.
//!
//! Friction is viscous (`T = coeff · v / m`) and always opposes the current
//! velocity. A stationary axis feels no viscous friction, and friction alone
//! can at most bring an axis to rest within one step, never reverse it.
//! The winch additionally has a dry steel-on-steel component, used by the
//! refined winding model.

use crane3d_common::consts::{KINETIC_DRY_STEEL_FRICTION, STATIC_DRY_STEEL_FRICTION};
use crane3d_common::crane::config::ModelConfig;
use crane3d_common::crane::types::ControlForces;

use super::KinematicState;

/// Share of the line tension pressing on the winch drum bearings.
pub const WINCH_DRY_FRICTION_SHARE: f64 = 0.05;

/// Accelerations of one actuated axis for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisAccel {
    /// Applied force over driven mass.
    pub driving: f64,
    /// Velocity-opposing friction term (same sign as the velocity).
    pub friction: f64,
    /// `driving - friction`.
    pub net: f64,
}

/// Largest friction deceleration that cannot reverse `vel` within `dt`.
#[inline]
fn friction_cap(vel: f64, dt: f64) -> f64 {
    if dt > 0.0 { vel.abs() / dt } else { f64::INFINITY }
}

/// Compute driving, friction and net acceleration of one axis.
///
/// # Arguments
/// * `force` - Applied force
/// * `mass` - Mass moved by the actuator
/// * `coeff` - Viscous friction coefficient
/// * `vel` - Current axis velocity
/// * `dt` - Step size the result will be integrated over
#[inline]
pub fn axis_accel(force: f64, mass: f64, coeff: f64, vel: f64, dt: f64) -> AxisAccel {
    let driving = force / mass;

    let friction = if vel == 0.0 {
        0.0
    } else {
        let cap = friction_cap(vel, dt);
        // max/min instead of clamp: NaN must flow through, not panic
        (coeff * vel / mass).max(-cap).min(cap)
    };

    AxisAccel {
        driving,
        friction,
        net: driving - friction,
    }
}

/// Per-tick relations shared by every dynamics variant.
///
/// Recomputed from scratch on every tick; nothing here survives the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicRelations {
    /// Rail axis (X), driving the rail together with the cart.
    pub rail: AxisAccel,
    /// Cart axis (Y).
    pub cart: AxisAccel,
    /// Winding axis, positive when winding the line in.
    pub wind: AxisAccel,
    /// μ1, payload / cart mass ratio.
    pub mu1: f64,
    /// μ2, payload / (rail + cart) mass ratio.
    pub mu2: f64,
}

impl BasicRelations {
    /// Evaluate the three axes for the given forces at step size `dt`.
    pub fn prepare(
        config: &ModelConfig,
        state: &KinematicState,
        forces: ControlForces,
        dt: f64,
    ) -> Self {
        Self {
            rail: axis_accel(
                forces.rail,
                config.rail_driven_mass(),
                config.rail_friction,
                state.x_vel,
                dt,
            ),
            cart: axis_accel(
                forces.cart,
                config.cart_mass,
                config.cart_friction,
                state.y_vel,
                dt,
            ),
            // Winding in shortens the line: winding velocity is -Ṙ.
            wind: axis_accel(
                forces.wind,
                config.payload_mass,
                config.winding_friction,
                -state.r_vel,
                dt,
            ),
            mu1: config.cart_mass_ratio(),
            mu2: config.rail_mass_ratio(),
        }
    }
}

/// Dry (Coulomb) friction of the winch drum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryFriction {
    /// Acceleration the axis must exceed to break away from rest.
    pub breakaway: f64,
    /// Constant deceleration while sliding.
    pub kinetic: f64,
}

impl DryFriction {
    /// Winch friction for a line carrying `tension_per_mass` (S / Mc).
    pub fn winch(tension_per_mass: f64) -> Self {
        let normal = tension_per_mass.abs() * WINCH_DRY_FRICTION_SHARE;
        Self {
            breakaway: STATIC_DRY_STEEL_FRICTION * normal,
            kinetic: KINETIC_DRY_STEEL_FRICTION * normal,
        }
    }

    /// Apply dry friction to the total acceleration `accel` of an axis
    /// moving at `vel`.
    ///
    /// At rest the axis sticks until `|accel|` exceeds the breakaway level.
    /// While moving the kinetic term opposes `vel` and is capped so that it
    /// cannot reverse the axis within `dt`.
    pub fn apply(&self, accel: f64, vel: f64, dt: f64) -> f64 {
        if vel == 0.0 {
            if accel.abs() <= self.breakaway {
                return 0.0;
            }
            return accel - self.kinetic.copysign(accel);
        }

        let cap = friction_cap(vel, dt);
        accel - self.kinetic.copysign(vel).max(-cap).min(cap)
    }
}
