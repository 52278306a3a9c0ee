//! # torsa Core Library
//!
//! A library for preparing hindered-rotor (torsional) scans in automated
//! reaction-kinetics workflows: it decides which internal coordinates of a
//! molecule are scannable torsions, partitions them into rotor groups of
//! bounded dimensionality, builds the multi-dimensional scan grids and
//! symmetry numbers the scan driver consumes, and resolves reference
//! structures out of a filesystem-backed conformer store.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Stateless data models (the z-matrix view
//!   [`core::models::Zmatrix`], the molecular graph, element data) and the
//!   filesystem-backed conformer store.
//!
//! - **[`engine`]: The Logic Core.** The preparation pipeline itself: torsion
//!   name resolution, rotor-group dimensionality reduction, grid and symmetry
//!   construction, axis/group definition, constraint building, and
//!   minimum-energy conformer lookup.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer,
//!   tying `engine` and `core` together into complete procedures such as
//!   [`workflows::prepare_rotors`].

pub mod core;
pub mod engine;
pub mod workflows;
