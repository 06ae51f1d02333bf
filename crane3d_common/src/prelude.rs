//! Prelude module for common re-exports.
//!
//! ```rust
//! use crane3d_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, RunConfig, SharedConfig, SimConfig};

// ─── Crane model ────────────────────────────────────────────────────
pub use crate::crane::config::{ModelConfig, ModelType, TravelLimits};
pub use crate::crane::types::{ControlForces, ModelState};

// ─── Math ───────────────────────────────────────────────────────────
pub use crate::math::Vec3d;

// Snapshots and forces cross thread boundaries freely.
static_assertions::assert_impl_all!(ModelState: Copy, Send, Sync);
static_assertions::assert_impl_all!(ControlForces: Copy, Send, Sync);
