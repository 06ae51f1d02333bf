//! Crane model configuration types.
//!
//! This module contains the caller-owned parameters of the dynamics engine:
//! - `ModelType` - Which system of motion equations drives the crane
//! - `TravelLimits` - Min/max pair for one actuated axis
//! - `ModelConfig` - Masses, gravity, friction and limits
//!
//! The engine never writes to any of these. `ModelConfig::validate` is an
//! opt-in plausibility check; the engine itself runs on whatever it is given.

use crate::config::ConfigError;
use crate::consts::*;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

// ─── ModelType ──────────────────────────────────────────────────────

/// Selects the crane dynamics formulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// Basic small-angle model. Rail and cart forces only.
    #[default]
    Linear,
    /// Small-angle model with the payload reaction folded into the
    /// rail and cart equations.
    Linear2,
    /// Non-linear spherical pendulum with constant lift-line.
    /// The winding force is ignored.
    NonLinearConstantLine,
    /// Non-linear model with all three forces and a variable lift-line.
    NonLinearComplete,
    /// `NonLinearComplete` with dry steel friction on the winding axis.
    NonLinearOriginal,
}

impl ModelType {
    /// All variants, in declaration order.
    pub const ALL: [ModelType; 5] = [
        ModelType::Linear,
        ModelType::Linear2,
        ModelType::NonLinearConstantLine,
        ModelType::NonLinearComplete,
        ModelType::NonLinearOriginal,
    ];

    /// Whether this variant integrates the lift-line length.
    pub fn honors_winding(self) -> bool {
        matches!(self, Self::NonLinearComplete | Self::NonLinearOriginal)
    }

    /// Config/CLI name of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Linear2 => "linear2",
            Self::NonLinearConstantLine => "non_linear_constant_line",
            Self::NonLinearComplete => "non_linear_complete",
            Self::NonLinearOriginal => "non_linear_original",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown ModelType: {s:?}"))
    }
}

// ─── TravelLimits ───────────────────────────────────────────────────

/// Inclusive travel range of one actuated axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TravelLimits {
    pub min: f64,
    pub max: f64,
}

impl TravelLimits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range.
    ///
    /// Inverted pairs are not checked: `max` wins over `min`.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// True if `value` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<(f64, f64)> for TravelLimits {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

fn default_rail_limits() -> TravelLimits {
    DEFAULT_RAIL_LIMITS.into()
}

fn default_cart_limits() -> TravelLimits {
    DEFAULT_CART_LIMITS.into()
}

fn default_line_limits() -> TravelLimits {
    DEFAULT_LINE_LIMITS.into()
}

fn default_payload_mass() -> f64 {
    DEFAULT_PAYLOAD_MASS
}

fn default_cart_mass() -> f64 {
    DEFAULT_CART_MASS
}

fn default_rail_mass() -> f64 {
    DEFAULT_RAIL_MASS
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

fn default_rail_friction() -> f64 {
    DEFAULT_RAIL_FRICTION
}

fn default_cart_friction() -> f64 {
    DEFAULT_CART_FRICTION
}

fn default_winding_friction() -> f64 {
    DEFAULT_WINDING_FRICTION
}

// ─── ModelConfig ────────────────────────────────────────────────────

/// Physical parameters of one simulated crane.
///
/// Coordinate system: X is the rail (forward), Y the cart (left-right),
/// Z the lift-line (up-down).
///
/// # TOML Example
///
/// ```toml
/// [model]
/// model_type = "non_linear_complete"
/// payload_mass = 1.5
/// rail_limits = { min = -20.0, max = 20.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Active dynamics formulation.
    #[serde(default)]
    pub model_type: ModelType,

    /// Mc, mass of the payload [kg].
    #[serde(default = "default_payload_mass")]
    pub payload_mass: f64,

    /// Mw, mass of the cart [kg].
    #[serde(default = "default_cart_mass")]
    pub cart_mass: f64,

    /// Ms, mass of the moving rail [kg]. The rail also carries the cart.
    #[serde(default = "default_rail_mass")]
    pub rail_mass: f64,

    /// Gravity constant [m/s²].
    #[serde(default = "default_gravity")]
    pub gravity: f64,

    /// Tx, viscous rail friction.
    #[serde(default = "default_rail_friction")]
    pub rail_friction: f64,

    /// Ty, viscous cart friction.
    #[serde(default = "default_cart_friction")]
    pub cart_friction: f64,

    /// Tr, viscous lift-line winding friction.
    #[serde(default = "default_winding_friction")]
    pub winding_friction: f64,

    /// Rail offset range.
    #[serde(default = "default_rail_limits")]
    pub rail_limits: TravelLimits,

    /// Cart offset range.
    #[serde(default = "default_cart_limits")]
    pub cart_limits: TravelLimits,

    /// Lift-line length range.
    #[serde(default = "default_line_limits")]
    pub line_limits: TravelLimits,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::default(),
            payload_mass: DEFAULT_PAYLOAD_MASS,
            cart_mass: DEFAULT_CART_MASS,
            rail_mass: DEFAULT_RAIL_MASS,
            gravity: DEFAULT_GRAVITY,
            rail_friction: DEFAULT_RAIL_FRICTION,
            cart_friction: DEFAULT_CART_FRICTION,
            winding_friction: DEFAULT_WINDING_FRICTION,
            rail_limits: default_rail_limits(),
            cart_limits: default_cart_limits(),
            line_limits: default_line_limits(),
        }
    }
}

impl ModelConfig {
    /// Mass driven by the rail actuator (rail plus the cart riding on it).
    #[inline]
    pub fn rail_driven_mass(&self) -> f64 {
        self.rail_mass + self.cart_mass
    }

    /// μ1, payload to cart mass ratio.
    #[inline]
    pub fn cart_mass_ratio(&self) -> f64 {
        self.payload_mass / self.cart_mass
    }

    /// μ2, payload to rail-with-cart mass ratio.
    #[inline]
    pub fn rail_mass_ratio(&self) -> f64 {
        self.payload_mass / self.rail_driven_mass()
    }

    /// Check physical plausibility of the configuration.
    ///
    /// # Validation Rules
    /// 1. All masses > 0
    /// 2. `gravity` > 0
    /// 3. All friction coefficients >= 0
    /// 4. Every limit pair has `min` <= `max`
    /// 5. `line_limits.min` > 0
    ///
    /// Non-finite values fail every rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, mass) in [
            ("payload_mass", self.payload_mass),
            ("cart_mass", self.cart_mass),
            ("rail_mass", self.rail_mass),
        ] {
            if !(mass.is_finite() && mass > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be > 0 (got {mass})"
                )));
            }
        }

        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "gravity must be > 0 (got {})",
                self.gravity
            )));
        }

        for (name, friction) in [
            ("rail_friction", self.rail_friction),
            ("cart_friction", self.cart_friction),
            ("winding_friction", self.winding_friction),
        ] {
            if !(friction.is_finite() && friction >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be >= 0 (got {friction})"
                )));
            }
        }

        for (name, limits) in [
            ("rail_limits", self.rail_limits),
            ("cart_limits", self.cart_limits),
            ("line_limits", self.line_limits),
        ] {
            if !(limits.min.is_finite() && limits.max.is_finite() && limits.min <= limits.max) {
                return Err(ConfigError::ValidationError(format!(
                    "{name}: min ({}) must be <= max ({})",
                    limits.min, limits.max
                )));
            }
        }

        if self.line_limits.min <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "line_limits.min must be > 0 (got {})",
                self.line_limits.min
            )));
        }

        Ok(())
    }
}
