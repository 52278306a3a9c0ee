use super::config::SpeciesConfig;
use super::error::EngineError;
use crate::core::io::store::ConformerStore;
use crate::core::models::coord::{self, NAME_SEPARATOR};
use crate::core::models::rotor::{RotorGroup, TorsModel};
use crate::core::models::zmatrix::Zmatrix;
use std::fmt;
use tracing::{debug, info};

/// Which tier of the resolution chain produced the torsion names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorsSource {
    /// User-declared rotor groups in the species configuration.
    UserConfig,
    /// The auto-generated transition-state name list in the configuration.
    TsGenerated,
    /// Stored scan identifiers of the minimum-energy conformer.
    Filesystem,
    /// Rotatable dihedral axes of the structure itself.
    Geometry,
}

impl fmt::Display for TorsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::UserConfig => "user input",
                Self::TsGenerated => "generated ts names",
                Self::Filesystem => "filesystem",
                Self::Geometry => "geometry",
            }
        )
    }
}

/// Outcome of torsion name resolution: the rotor groups and which tier of the
/// chain produced them (`None` when nothing resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTorsions {
    pub groups: Vec<RotorGroup>,
    pub source: Option<TorsSource>,
}

impl ResolvedTorsions {
    fn empty() -> Self {
        Self {
            groups: Vec::new(),
            source: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Resolves the torsion names to scan for one species.
///
/// Tiers are tried in a fixed order, first non-empty wins: the species
/// configuration, the stored scans of the minimum-energy conformer, and
/// (for `tau` only) the structure's own rotatable dihedrals. Models outside
/// `1dhr`/`mdhr`/`tau` resolve nothing and perform no lookups. Absence of
/// names is a legitimate empty result, not an error.
pub fn resolve(
    species: &SpeciesConfig,
    store: &dyn ConformerStore,
    min_locator: Option<&str>,
    zma: Option<&Zmatrix>,
    model: TorsModel,
) -> Result<ResolvedTorsions, EngineError> {
    if !model.resolves_names() {
        return Ok(ResolvedTorsions::empty());
    }

    let mut selected = names_from_config(species, model);
    if selected.is_none() {
        selected = names_from_filesystem(store, min_locator, model)?;
    }
    if selected.is_none() && model == TorsModel::Tau {
        selected = zma.and_then(|zma| names_from_structure(zma, model));
    }

    match selected {
        Some((groups, source)) => {
            info!(%source, ngroups = groups.len(), "resolved torsion names");
            Ok(ResolvedTorsions {
                groups,
                source: Some(source),
            })
        }
        None => {
            info!("no torsion names resolved from any source");
            Ok(ResolvedTorsions::empty())
        }
    }
}

/// Configuration tier: the user-declared group list wins over the generated
/// transition-state list.
fn names_from_config(
    species: &SpeciesConfig,
    model: TorsModel,
) -> Option<(Vec<RotorGroup>, TorsSource)> {
    if let Some(groups) = &species.tors_names {
        if !groups.is_empty() {
            let groups = groups.iter().cloned().map(RotorGroup::new).collect();
            return Some((groups, TorsSource::UserConfig));
        }
    }
    if let Some(names) = &species.ts_tors_names {
        if !names.is_empty() {
            let groups = if model == TorsModel::OneDhr {
                names.iter().cloned().map(RotorGroup::singleton).collect()
            } else {
                vec![RotorGroup::new(names.clone())]
            };
            return Some((groups, TorsSource::TsGenerated));
        }
    }
    None
}

/// Filesystem tier: stored scan identifiers of the minimum-energy conformer.
///
/// Torsion identifiers are the stored scan names containing `'D'`. Single
/// scans (no separator) feed `1dhr`/`tau`; separator-joined identifiers feed
/// `mdhr`, falling back to singles when no coupled scan was ever stored.
fn names_from_filesystem(
    store: &dyn ConformerStore,
    min_locator: Option<&str>,
    model: TorsModel,
) -> Result<Option<(Vec<RotorGroup>, TorsSource)>, EngineError> {
    let Some(locator) = min_locator else {
        debug!("no minimum-energy conformer for the torsion filesystem tier");
        return Ok(None);
    };
    let Some(scan_names) = store.scan_names(locator)? else {
        debug!(locator, "no stored scans for conformer");
        return Ok(None);
    };

    let tors_names: Vec<&String> = scan_names.iter().filter(|n| n.contains('D')).collect();
    let groups: Vec<RotorGroup> = match model {
        TorsModel::OneDhr | TorsModel::Tau => singles(&tors_names),
        TorsModel::Mdhr => {
            let coupled: Vec<RotorGroup> = tors_names
                .iter()
                .filter(|n| n.contains(NAME_SEPARATOR))
                .map(|n| RotorGroup::new(coord::split_names(n)))
                .collect();
            if coupled.is_empty() {
                singles(&tors_names)
            } else {
                coupled
            }
        }
        TorsModel::MdhrV => Vec::new(),
    };

    if groups.is_empty() {
        Ok(None)
    } else {
        Ok(Some((groups, TorsSource::Filesystem)))
    }
}

fn singles(tors_names: &[&String]) -> Vec<RotorGroup> {
    tors_names
        .iter()
        .filter(|n| coord::is_single_name(n))
        .map(|n| RotorGroup::singleton((*n).clone()))
        .collect()
}

/// Geometry tier: torsion names from the structure's rotatable dihedral axes;
/// multi-dimensional models flatten everything into a single group.
fn names_from_structure(zma: &Zmatrix, model: TorsModel) -> Option<(Vec<RotorGroup>, TorsSource)> {
    let names = zma.torsion_coordinate_names();
    if names.is_empty() {
        return None;
    }
    let groups = if model.is_multi_dimensional() {
        vec![RotorGroup::new(names)]
    } else {
        names.into_iter().map(RotorGroup::singleton).collect()
    };
    Some((groups, TorsSource::Geometry))
}
