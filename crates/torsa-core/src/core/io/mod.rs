//! # Store I/O Module
//!
//! Read access to the structured on-disk store of computed conformers: the
//! per-theory conformer/energy table and each conformer's stored scan
//! identifiers. This is the only part of the core layer that touches the
//! filesystem; everything else consumes its already-materialized results.

pub mod store;

pub use store::{ConformerStore, FsConformerStore, MemoryStore, StoreError};
