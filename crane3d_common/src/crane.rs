//! Crane model configuration and data types.
//!
//! This module contains the caller-owned configuration of the dynamics
//! engine and the values exchanged with it on every update.

pub mod config;
pub mod types;
