//! # Core Module
//!
//! Fundamental building blocks for torsional-scan preparation: the molecular
//! data models and the filesystem-backed conformer store.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Z-matrix view, torsion/rotor
//!   types, transition-state bond sets, and element data
//! - **Graph Algorithms** ([`graph`]) - Connectivity derived from the z-matrix
//!   and branch/ring queries over it
//! - **Geometry Math** ([`geometry`]) - Distance/angle/dihedral measurement
//!   from Cartesian coordinates
//! - **Store I/O** ([`io`]) - Reading stored conformers, energies, and scan
//!   identifiers off disk
//!
//! All types in this layer are stateless values: every transformation produces
//! a new value, and nothing here performs I/O except the [`io`] submodule.

pub mod geometry;
pub mod graph;
pub mod io;
pub mod models;
