//! 3D crane dynamics engine.
//!
//! The `Model` owns the kinematic state of one simulated crane and advances
//! it under the dynamics variant selected in its [`ModelConfig`].
//!
//! Coordinate system:
//! - X: outermost movement of the rail, considered as forward
//! - Y: left-right movement of the cart
//! - Z: up-down movement of the payload

use crane3d_common::crane::config::{ModelConfig, ModelType};
use crane3d_common::crane::types::{ControlForces, ModelState};
use tracing::{debug, trace};

use crate::dynamics::{self, KinematicState};
use crate::stepping::FixedStepClock;

/// Stateful crane plant model.
///
/// Single-threaded and synchronous. One instance must be driven by one
/// caller at a time; independent instances share nothing.
#[derive(Debug, Clone)]
pub struct Model {
    /// Caller-owned parameters, never written by the engine.
    config: ModelConfig,
    /// Positions, velocities and swing angles.
    state: KinematicState,
    /// Fixed-step time bank for `update_fixed`.
    clock: FixedStepClock,
    /// Variant that ran the previous tick.
    last_type: ModelType,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Create a model of the reference crane using the `Linear` variant.
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    /// Create a model at rest from an explicit configuration.
    ///
    /// The configuration is not validated; see [`ModelConfig::validate`].
    pub fn with_config(config: ModelConfig) -> Self {
        let state = KinematicState::at_rest(&config);
        debug!(
            "Crane model created: type={}, line={:.3}, masses=({}, {}, {})",
            config.model_type, state.r, config.payload_mass, config.cart_mass, config.rail_mass
        );
        Self {
            last_type: config.model_type,
            config,
            state,
            clock: FixedStepClock::new(),
        }
    }

    /// Advance the simulation by exactly `delta_time` in a single step.
    ///
    /// Friction and pendulum terms are evaluated at the literal step size,
    /// so widely varying `delta_time` can make the integration unstable.
    /// Prefer [`Model::update_fixed`] when the caller's frame rate varies.
    pub fn update(&mut self, delta_time: f64, forces: ControlForces) -> ModelState {
        self.tick(delta_time, forces);
        self.state()
    }

    /// Advance the simulation in whole ticks of `fixed_time`.
    ///
    /// `delta_time` is banked; every full `fixed_time` in the bank runs one
    /// tick. The remainder is kept for the next call. A large `delta_time`
    /// runs proportionally many ticks before returning.
    ///
    /// Travel limits are enforced on return even when no tick was due, so
    /// limits narrowed through [`Model::config_mut`] always hold.
    pub fn update_fixed(&mut self, fixed_time: f64, delta_time: f64, forces: ControlForces) -> ModelState {
        let due = self.clock.advance(fixed_time, delta_time);
        for _ in 0..due {
            self.tick(fixed_time, forces);
        }
        dynamics::apply_limits(&mut self.state, &self.config);
        self.state()
    }

    /// Current state of the crane without advancing time.
    #[inline]
    pub fn state(&self) -> ModelState {
        self.state.snapshot()
    }

    /// Run one integration tick of `dt` with the configured variant.
    fn tick(&mut self, dt: f64, forces: ControlForces) {
        let model_type = self.config.model_type;
        if model_type != self.last_type {
            debug!("Dynamics variant switched: {} -> {}", self.last_type, model_type);
            self.last_type = model_type;
        }

        dynamics::step(model_type, &mut self.state, &self.config, forces, dt);

        trace!(
            "Crane tick of {}s: x={:.4} ({:.4}), y={:.4} ({:.4}), r={:.4} ({:.4}), α={:.5}, β={:.5}",
            dt,
            self.state.x,
            self.state.x_vel,
            self.state.y,
            self.state.y_vel,
            self.state.r,
            self.state.r_vel,
            self.state.alfa,
            self.state.beta
        );
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Mutable configuration. Changes apply from the next tick on.
    #[inline]
    pub fn config_mut(&mut self) -> &mut ModelConfig {
        &mut self.config
    }

    /// Active dynamics variant.
    #[inline]
    pub fn model_type(&self) -> ModelType {
        self.config.model_type
    }

    /// Select the dynamics variant for subsequent ticks.
    #[inline]
    pub fn set_model_type(&mut self, model_type: ModelType) {
        self.config.model_type = model_type;
    }

    /// Full kinematic state, velocities included.
    #[inline]
    pub fn kinematics(&self) -> &KinematicState {
        &self.state
    }

    /// Time banked by `update_fixed` but not yet simulated [s].
    #[inline]
    pub fn simulation_time(&self) -> f64 {
        self.clock.residual()
    }

    /// Number of fixed-step ticks run so far.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.clock.ticks()
    }
}

// Independent engines may be moved to and shared between threads.
static_assertions::assert_impl_all!(Model: Send, Sync, Clone);
