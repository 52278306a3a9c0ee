//! # Workflows Module
//!
//! The public, user-facing entry points of the library: complete procedures
//! tying the [`crate::core`] models and the [`crate::engine`] pipeline
//! together. Callers hand in a structure snapshot, a species configuration,
//! and a conformer store, and get back everything the external scan driver
//! needs to run.

pub mod prep;

pub use crate::engine::minima::reaction_energy;
pub use prep::{RotorPrep, prepare_rotors};
