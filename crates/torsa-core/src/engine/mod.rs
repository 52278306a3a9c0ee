//! # Engine Module
//!
//! The torsional-scan preparation pipeline: deciding which coordinates are
//! scanned torsions, bounding rotor dimensionality, and building the grids,
//! symmetry numbers, axes, and constraints a scan driver consumes.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Per-species user configuration
//! - **Name Resolution** ([`resolver`]) - The three-tier torsion name chain
//! - **Dimensionality Reduction** ([`reduction`]) - Bounding rotor groups to
//!   four torsions via methyl-rotor isolation
//! - **Grid Construction** ([`grid`]) - Scan grids, symmetry numbers, and
//!   cartesian expansion
//! - **Axis Definition** ([`axis`]) - Rotating group, bond axis, and
//!   saddle-point symmetry corrections
//! - **Constraints** ([`constraints`]) - Frozen-coordinate maps for scans
//! - **Energy Lookup** ([`minima`]) - Minimum-energy conformer and
//!   reaction-energy aggregation
//! - **Error Handling** ([`error`]) - The pipeline's error taxonomy
//!
//! Everything in this layer is a pure function over its inputs plus read-only
//! store queries; diagnostics via `tracing` are the only side effect.

pub mod axis;
pub mod config;
pub mod constraints;
pub mod error;
pub mod grid;
pub mod minima;
pub mod reduction;
pub mod resolver;

pub use error::EngineError;

/// Upper bound on the dimensionality of a single rotor group.
pub const MAX_ROTOR_DIM: usize = 4;
