//! # Core Models Module
//!
//! Data structures representing the internal-coordinate view of a molecule
//! and the torsional entities derived from it.
//!
//! ## Key Components
//!
//! - [`element`] - Static element data (atomic numbers, hydrogen/dummy tests)
//! - [`coord`] - Internal-coordinate definitions and name conventions
//! - [`zmatrix`] - The z-matrix view: symbols, coordinates, values, and the
//!   torsion-aware queries the engine consumes
//! - [`rotor`] - Scan dimensionality models and rotor groups
//! - [`ts`] - Transition-state bond sets (forming/breaking bonds)

pub mod coord;
pub mod element;
pub mod rotor;
pub mod ts;
pub mod zmatrix;

pub use coord::CoordDef;
pub use rotor::{RotorGroup, TorsModel};
pub use ts::{BondKey, TsBonds};
pub use zmatrix::Zmatrix;
