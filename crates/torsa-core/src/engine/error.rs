use crate::core::io::store::StoreError;
use crate::core::models::zmatrix::ZmatrixError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "attempting to constrain coordinates not in the z-matrix: {names:?} (known coordinates: {known:?})"
    )]
    InvalidCoordinate {
        names: Vec<String>,
        known: Vec<String>,
    },

    #[error("rotor must have 1-4 dimensions, got {0}")]
    UnsupportedDimensionality(usize),

    #[error("missing capability: {0}")]
    MissingCapability(&'static str),

    #[error("structure query failed: {source}")]
    Structure {
        #[from]
        source: ZmatrixError,
    },

    #[error("store access failed: {source}")]
    Store {
        #[from]
        source: StoreError,
    },
}
