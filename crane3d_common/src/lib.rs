//! Crane3D Common Library
//!
//! Shared types, physical defaults and configuration loading for the
//! 3-axis overhead crane model workspace.
//!
//! # Module Structure
//!
//! - [`consts`] - Physical defaults of the reference crane
//! - [`config`] - Configuration loading traits and harness configuration
//! - [`crane`] - Model configuration, control forces and state snapshot
//! - [`math`] - Minimal 3-component vector utility
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use crane3d_common::prelude::*;
//!
//! let config = ModelConfig::default();
//! assert_eq!(config.model_type, ModelType::Linear);
//! ```

pub mod config;
pub mod consts;
pub mod crane;
pub mod math;
pub mod prelude;
