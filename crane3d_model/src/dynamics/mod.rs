//! Crane dynamics.
//!
//! This module owns the kinematic state of the crane and the five mutually
//! exclusive systems of motion equations that evolve it:
//!
//! | Variant                 | Forces            | Pendulum                          |
//! |-------------------------|-------------------|-----------------------------------|
//! | `Linear`                | rail, cart        | small-angle, decoupled            |
//! | `Linear2`               | rail, cart        | small-angle, reaction coupled     |
//! | `NonLinearConstantLine` | rail, cart        | spherical, constant line          |
//! | `NonLinearComplete`     | rail, cart, wind  | spherical, variable line          |
//! | `NonLinearOriginal`     | rail, cart, wind  | as Complete, dry winch friction   |
//!
//! Every variant integrates with semi-implicit Euler
//! (`v += a·dt; x += v·dt`).

mod constraints;
pub mod friction;
mod linear;
mod nonlinear;

pub use constraints::{REST_VELOCITY, VELOCITY_DAMPING, apply_limits, dampen};
pub use friction::{AxisAccel, BasicRelations, DryFriction, axis_accel};

use crane3d_common::crane::config::{ModelConfig, ModelType};
use crane3d_common::crane::types::{ControlForces, ModelState};

/// Small-angle auxiliary swing state, integrated by the linear variants.
///
/// Kept equal to the full swing angles after every tick so either family
/// of variants can pick up where the other left off.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmallAngles {
    /// Δα
    pub alfa: f64,
    pub alfa_vel: f64,
    /// Δβ
    pub beta: f64,
    pub beta_vel: f64,
}

/// Mutable physical state of one crane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicState {
    /// Rail offset (Xw) and velocity.
    pub x: f64,
    pub x_vel: f64,
    /// Cart offset (Yw) and velocity.
    pub y: f64,
    pub y_vel: f64,
    /// Lift-line length (R) and velocity.
    pub r: f64,
    pub r_vel: f64,
    /// Swing angles and angular velocities.
    pub alfa: f64,
    pub alfa_vel: f64,
    pub beta: f64,
    pub beta_vel: f64,
    /// Linear-model auxiliaries.
    pub small: SmallAngles,
}

impl KinematicState {
    /// Crane at rest: rail and cart centred, line at its shortest.
    ///
    /// Positions are placed inside the configured limits.
    pub fn at_rest(config: &ModelConfig) -> Self {
        Self {
            x: config.rail_limits.clamp(0.0),
            y: config.cart_limits.clamp(0.0),
            r: config.line_limits.min,
            ..Default::default()
        }
    }

    /// Snapshot of the current pose.
    #[inline]
    pub fn snapshot(&self) -> ModelState {
        ModelState::from_pose(self.alfa, self.beta, self.x, self.y, self.r)
    }

    /// Copy the full swing angles into the small-angle auxiliaries.
    #[inline]
    pub(crate) fn sync_small_from_swing(&mut self) {
        self.small = SmallAngles {
            alfa: self.alfa,
            alfa_vel: self.alfa_vel,
            beta: self.beta,
            beta_vel: self.beta_vel,
        };
    }

    /// Publish the small-angle auxiliaries as the swing angles.
    #[inline]
    pub(crate) fn sync_swing_from_small(&mut self) {
        self.alfa = self.small.alfa;
        self.alfa_vel = self.small.alfa_vel;
        self.beta = self.small.beta;
        self.beta_vel = self.small.beta_vel;
    }

    /// Integrate the rail and cart axes over `dt`.
    #[inline]
    pub(crate) fn integrate_carriage(&mut self, x_acc: f64, y_acc: f64, dt: f64) {
        self.x_vel += x_acc * dt;
        self.y_vel += y_acc * dt;
        self.x += self.x_vel * dt;
        self.y += self.y_vel * dt;
    }

    /// Freeze the lift-line for variants that hold it constant.
    #[inline]
    pub(crate) fn hold_line(&mut self) {
        self.r_vel = 0.0;
    }
}

/// Advance `state` by one tick of `dt` under the selected variant.
///
/// Steps: per-axis accelerations, variant equations, travel limits,
/// velocity damping. Exactly one variant runs per call.
pub fn step(
    model_type: ModelType,
    state: &mut KinematicState,
    config: &ModelConfig,
    forces: ControlForces,
    dt: f64,
) {
    let relations = BasicRelations::prepare(config, state, forces, dt);

    match model_type {
        ModelType::Linear => linear::basic(state, config, &relations, dt),
        ModelType::Linear2 => linear::reaction_coupled(state, config, &relations, dt),
        ModelType::NonLinearConstantLine => nonlinear::constant_line(state, config, &relations, dt),
        ModelType::NonLinearComplete => {
            nonlinear::variable_line(state, config, &relations, dt, nonlinear::Winch::Viscous)
        }
        ModelType::NonLinearOriginal => {
            nonlinear::variable_line(state, config, &relations, dt, nonlinear::Winch::DrySteel)
        }
    }

    apply_limits(state, config);
    dampen(state);
}
