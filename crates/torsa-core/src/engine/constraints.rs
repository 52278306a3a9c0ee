use super::error::EngineError;
use crate::core::models::coord::name_suffix;
use crate::core::models::zmatrix::{Zmatrix, ZmatrixError};
use tracing::debug;

/// Ordered name → value map of coordinates held fixed during a scan.
pub type ConstraintDict = Vec<(String, f64)>;

/// Builds the frozen-coordinate map for a scan.
///
/// Names are classed by their marker letter, each class sorted by numeric
/// suffix, concatenated distances–angles–dihedrals, and the active scan
/// coordinates removed; the survivors must all exist in the z-matrix. Values
/// are rounded to two decimals. `None` means "no constraints", distinct from
/// an empty map.
pub fn constraint_dict(
    zma: &Zmatrix,
    const_names: &[String],
    scan_names: &[String],
) -> Result<Option<ConstraintDict>, EngineError> {
    let ordered = sorted_constraint_names(const_names);
    let remaining: Vec<String> = ordered
        .into_iter()
        .filter(|name| !scan_names.contains(name))
        .collect();
    debug!(?remaining, ?scan_names, "constraint names after scan exclusion");

    if remaining.is_empty() {
        return Ok(None);
    }

    let unknown: Vec<String> = remaining
        .iter()
        .filter(|name| !zma.has_coordinate(name))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(EngineError::InvalidCoordinate {
            names: unknown,
            known: zma.coordinate_names().map(str::to_owned).collect(),
        });
    }

    let mut dict = Vec::with_capacity(remaining.len());
    for name in remaining {
        let value = zma
            .value(&name)
            .ok_or_else(|| ZmatrixError::UnknownCoordinate(name.clone()))?;
        let rounded = (value * 100.0).round() / 100.0;
        dict.push((name, rounded));
    }
    Ok(Some(dict))
}

/// Classes constraint names by marker letter and sorts each class by its
/// integer suffix, concatenating distances, angles, then dihedrals.
fn sorted_constraint_names(const_names: &[String]) -> Vec<String> {
    let mut rnames: Vec<String> = Vec::new();
    let mut anames: Vec<String> = Vec::new();
    let mut dnames: Vec<String> = Vec::new();
    for name in const_names {
        if name.contains('R') {
            rnames.push(name.clone());
        } else if name.contains('A') {
            anames.push(name.clone());
        } else if name.contains('D') {
            dnames.push(name.clone());
        }
    }
    rnames.sort_by_key(|n| name_suffix(n, 'R'));
    anames.sort_by_key(|n| name_suffix(n, 'A'));
    dnames.sort_by_key(|n| name_suffix(n, 'D'));

    rnames.into_iter().chain(anames).chain(dnames).collect()
}
