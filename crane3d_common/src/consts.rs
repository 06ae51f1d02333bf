//! Physical defaults of the reference crane.
//!
//! Approximate mass and friction profile of a laboratory 3D crane.
//! Single source of truth for every default in [`crate::crane::config`].

/// Default gravity constant [m/s²].
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Default payload mass (Mc) [kg].
pub const DEFAULT_PAYLOAD_MASS: f64 = 1.000;

/// Default cart mass (Mw) [kg].
pub const DEFAULT_CART_MASS: f64 = 1.155;

/// Default moving rail mass (Ms) [kg].
pub const DEFAULT_RAIL_MASS: f64 = 2.200;

/// Default rail friction coefficient (Tx) [N·s/m].
pub const DEFAULT_RAIL_FRICTION: f64 = 100.0;

/// Default cart friction coefficient (Ty) [N·s/m].
pub const DEFAULT_CART_FRICTION: f64 = 82.0;

/// Default lift-line winding friction coefficient (Tr) [N·s/m].
pub const DEFAULT_WINDING_FRICTION: f64 = 75.0;

/// Default rail travel limits.
pub const DEFAULT_RAIL_LIMITS: (f64, f64) = (-30.0, 30.0);

/// Default cart travel limits.
pub const DEFAULT_CART_LIMITS: (f64, f64) = (-35.0, 35.0);

/// Default lift-line length limits.
pub const DEFAULT_LINE_LIMITS: (f64, f64) = (5.0, 90.0);

/// Static friction coefficient, dry steel on steel.
pub const STATIC_DRY_STEEL_FRICTION: f64 = 0.7;

/// Kinetic friction coefficient, dry steel on steel.
pub const KINETIC_DRY_STEEL_FRICTION: f64 = 0.6;

/// Default fixed integration step used by the harness [s].
pub const DEFAULT_FIXED_TIME: f64 = 0.01;

/// Default harness service name.
pub const DEFAULT_SERVICE_NAME: &str = "crane3d-sim";
