use crate::core::io::store::ConformerStore;
use crate::core::models::rotor::{RotorGroup, TorsModel};
use crate::core::models::ts::TsBonds;
use crate::core::models::zmatrix::Zmatrix;
use crate::engine::config::SpeciesConfig;
use crate::engine::error::EngineError;
use crate::engine::grid::{self, TorsGrid};
use crate::engine::minima;
use crate::engine::reduction::MethylDetector;
use crate::engine::resolver::{self, TorsSource};
use tracing::{info, instrument};

/// Everything the external scan driver needs for one species: the rotor
/// groups, their grids and symmetry numbers in lock-step order, the name
/// source, and the minimum-energy conformer the scans are anchored to.
#[derive(Debug, Clone, PartialEq)]
pub struct RotorPrep {
    pub groups: Vec<RotorGroup>,
    pub grids: Vec<TorsGrid>,
    pub sym_nums: Vec<Vec<usize>>,
    pub source: Option<TorsSource>,
    pub min_locator: Option<String>,
}

impl RotorPrep {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Prepares the hindered-rotor scans for one species.
///
/// Resolves the torsion names (species configuration, stored scans of the
/// minimum-energy conformer, then the structure itself), bounds rotor
/// dimensionality for multi-dimensional models, and builds the grids and
/// symmetry numbers. An empty result means the species has nothing to scan;
/// it is not an error.
#[instrument(skip_all, name = "rotor_prep_workflow", fields(model = %model))]
pub fn prepare_rotors(
    zma: &Zmatrix,
    species: &SpeciesConfig,
    store: &dyn ConformerStore,
    model: TorsModel,
    increment_deg: f64,
    ts: &TsBonds,
    detector: &dyn MethylDetector,
) -> Result<RotorPrep, EngineError> {
    let min_locator = minima::min_energy_locator(store)?;
    let resolved = resolver::resolve(species, store, min_locator.as_deref(), Some(zma), model)?;
    if resolved.is_empty() {
        info!("no torsions to scan for this species");
        return Ok(RotorPrep {
            groups: Vec::new(),
            grids: Vec::new(),
            sym_nums: Vec::new(),
            source: resolved.source,
            min_locator,
        });
    }

    let scan = grid::build_scan_grids(zma, resolved.groups, increment_deg, model, ts, detector)?;
    Ok(RotorPrep {
        groups: scan.groups,
        grids: scan.grids,
        sym_nums: scan.sym_nums,
        source: resolved.source,
        min_locator,
    })
}
