//! # Printer Module
//!
//! This module provides printer models and the registry resolving model
//! identifiers.
//!
//! ## Modules
//!
//! - [`model`]: Model definitions, line-ending rules, and the static registry

pub mod model;

pub use model::{LineEnding, Model, models, resolve};
