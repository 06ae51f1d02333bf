//! Crane input and output types.
//!
//! - `ControlForces` - The three actuator forces applied for one update
//! - `ModelState` - Measured snapshot of the crane after an update

use crate::math::Vec3d;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Actuator forces for one update.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlForces {
    /// Fx, force driving the rail with the cart [N].
    pub rail: f64,
    /// Fy, force driving the cart along the rail [N].
    pub cart: f64,
    /// Fr, force winding the lift-line [N]. Positive winds the line in.
    pub wind: f64,
}

impl ControlForces {
    /// No force on any axis.
    pub const ZERO: Self = Self {
        rail: 0.0,
        cart: 0.0,
        wind: 0.0,
    };

    pub const fn new(rail: f64, cart: f64, wind: f64) -> Self {
        Self { rail, cart, wind }
    }
}

/// Output state of the crane model.
///
/// Recomputed on every call. `payload_*` are always derived from the other
/// five fields of the same snapshot through [`ModelState::from_pose`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelState {
    /// α, angle between the cart axis (Y) and the lift-line, measured as a
    /// deflection from the vertical [rad].
    pub alfa: f64,
    /// β, angle between the downward vertical and the projection of the
    /// lift-line onto the XZ plane [rad].
    pub beta: f64,

    /// Xw, distance of the rail with the cart from the frame center.
    pub rail_offset: f64,
    /// Yw, distance of the cart from the center of the rail.
    pub cart_offset: f64,
    /// R, lift-line length.
    pub lift_line: f64,

    /// Payload 3D coordinates.
    pub payload_x: f64,
    pub payload_y: f64,
    pub payload_z: f64,
}

impl ModelState {
    /// Build a snapshot from the crane pose, deriving the payload position.
    ///
    /// The payload hangs `lift_line` below the cart, swung `alfa` towards Y
    /// and `beta` towards X:
    ///
    /// ```text
    /// Xc = Xw + R·cos α·sin β
    /// Yc = Yw + R·sin α
    /// Zc =    − R·cos α·cos β
    /// ```
    pub fn from_pose(alfa: f64, beta: f64, rail_offset: f64, cart_offset: f64, lift_line: f64) -> Self {
        let (sin_a, cos_a) = alfa.sin_cos();
        let (sin_b, cos_b) = beta.sin_cos();

        let suspension = Vec3d::new(rail_offset, cart_offset, 0.0);
        let direction = Vec3d::new(cos_a * sin_b, sin_a, -cos_a * cos_b);
        let payload = suspension + Vec3d::splat(lift_line) * direction;

        Self {
            alfa,
            beta,
            rail_offset,
            cart_offset,
            lift_line,
            payload_x: payload.x,
            payload_y: payload.y,
            payload_z: payload.z,
        }
    }

    /// Payload position as a vector.
    #[inline]
    pub fn payload(&self) -> Vec3d {
        Vec3d::new(self.payload_x, self.payload_y, self.payload_z)
    }

    /// Cart suspension point (top of the lift-line).
    #[inline]
    pub fn suspension(&self) -> Vec3d {
        Vec3d::new(self.rail_offset, self.cart_offset, 0.0)
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alfa:       {:.6} rad", self.alfa)?;
        writeln!(f, "Beta:       {:.6} rad", self.beta)?;
        writeln!(f, "RailOffset: {:.6}", self.rail_offset)?;
        writeln!(f, "CartOffset: {:.6}", self.cart_offset)?;
        writeln!(f, "LiftLine:   {:.6}", self.lift_line)?;
        write!(
            f,
            "Payload:    ({:.6}, {:.6}, {:.6})",
            self.payload_x, self.payload_y, self.payload_z
        )
    }
}
