//! # Crane3D Model Library
//!
//! Dynamics engine of a 3-axis overhead crane: a rail-mounted cart carrying
//! a payload on a variable-length lift-line, swinging as a spherical
//! pendulum. The engine turns three control forces (rail drive, cart drive,
//! line winding) into the measured crane state, for testing control
//! algorithms against a plant model.
//!
//! # Module Structure
//!
//! - [`model`] - `Model`, the stateful engine and its update operations
//! - [`dynamics`] - Kinematic state, friction and the five motion equation sets
//! - [`stepping`] - Fixed-step time accumulator
//!
//! # Architecture
//!
//! ```text
//! update / update_fixed
//!          │
//!          ▼
//! ┌─────────────────┐   ticks   ┌──────────────────────────────────┐
//! │ FixedStepClock  │──────────►│ dynamics::step                   │
//! └─────────────────┘           │  1. BasicRelations               │
//!                               │  2. variant equations (1 of 5)   │
//!                               │  3. apply_limits                 │
//!                               │  4. dampen                       │
//!                               └───────────────┬──────────────────┘
//!                                               ▼
//!                                     ModelState snapshot
//! ```
//!
//! # Example
//!
//! ```rust
//! use crane3d_model::prelude::*;
//!
//! let mut model = Model::new();
//! model.set_model_type(ModelType::NonLinearComplete);
//! let state = model.update_fixed(0.01, 1.0 / 60.0, ControlForces::new(10.0, 0.0, 0.0));
//! assert!(state.rail_offset > 0.0);
//! ```

pub mod dynamics;
pub mod model;
pub mod stepping;

// Re-export key types for convenience
pub use crate::model::Model;
pub use crate::stepping::FixedStepClock;

/// Engine plus the shared crane types.
pub mod prelude {
    pub use crate::model::Model;
    pub use crate::stepping::FixedStepClock;
    pub use crane3d_common::prelude::*;
}
