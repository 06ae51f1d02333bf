//! Minimal 3-component vector used for intermediate 3D computations.
//!
//! All operators are component-wise. Division by a zero component is not
//! guarded and follows IEEE-754 (`inf` / `NaN`).

use core::ops::{Add, Div, Mul, Sub};

/// Component-wise 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3d {
    /// Zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector with all three components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vec3d {
    type Output = Self;
    #[inline]
    fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub for Vec3d {
    type Output = Self;
    #[inline]
    fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl Mul for Vec3d {
    type Output = Self;
    #[inline]
    fn mul(self, v: Self) -> Self {
        Self::new(self.x * v.x, self.y * v.y, self.z * v.z)
    }
}

impl Div for Vec3d {
    type Output = Self;
    #[inline]
    fn div(self, v: Self) -> Self {
        Self::new(self.x / v.x, self.y / v.y, self.z / v.z)
    }
}
