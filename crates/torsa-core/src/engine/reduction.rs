use super::MAX_ROTOR_DIM;
use super::error::EngineError;
use crate::core::models::element;
use crate::core::models::rotor::RotorGroup;
use crate::core::models::zmatrix::Zmatrix;
use tracing::debug;

/// Pluggable classifier for methyl-type torsions.
///
/// Dimensionality reduction isolates methyl rotors out of oversized coupled
/// groups; the classifier decides what counts as one. Supplying no working
/// classifier is a configuration error ([`EngineError::MissingCapability`]),
/// never a silent no-op.
pub trait MethylDetector {
    fn is_methyl_rotor(&self, zma: &Zmatrix, tors_name: &str) -> Result<bool, EngineError>;
}

/// Graph-based methyl classifier: a torsion is a methyl rotor when one of its
/// axis atoms is a carbon whose only connections beyond the axis bond are
/// exactly three hydrogens.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphMethylDetector;

impl MethylDetector for GraphMethylDetector {
    fn is_methyl_rotor(&self, zma: &Zmatrix, tors_name: &str) -> Result<bool, EngineError> {
        let (j, k) = zma.dihedral_axis(tors_name)?;
        let gra = zma.graph();
        let symbols = zma.symbols();
        for (end, other) in [(j, k), (k, j)] {
            if !element::is_carbon(&symbols[end]) {
                continue;
            }
            let caps: Vec<usize> = gra
                .neighbors(end)
                .iter()
                .copied()
                .filter(|&n| n != other)
                .collect();
            if caps.len() == 3 && caps.iter().all(|&n| element::is_hydrogen(&symbols[n])) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Stand-in for deployments without connectivity data; always fails with
/// [`EngineError::MissingCapability`] when reduction is actually exercised.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedMethylDetector;

impl MethylDetector for UnimplementedMethylDetector {
    fn is_methyl_rotor(&self, _zma: &Zmatrix, _tors_name: &str) -> Result<bool, EngineError> {
        Err(EngineError::MissingCapability("methyl-rotor detection"))
    }
}

/// Bounds every rotor group to at most [`MAX_ROTOR_DIM`] torsions.
///
/// Groups within the bound pass through unchanged; oversized groups are
/// reduced in place, preserving relative position across groups.
pub fn reduce_groups(
    zma: &Zmatrix,
    groups: Vec<RotorGroup>,
    detector: &dyn MethylDetector,
) -> Result<Vec<RotorGroup>, EngineError> {
    let mut reduced = Vec::with_capacity(groups.len());
    for group in groups {
        if group.len() > MAX_ROTOR_DIM {
            reduced.extend(reduce_rotor(zma, group, detector)?);
        } else {
            reduced.push(group);
        }
    }
    Ok(reduced)
}

/// Reduces one oversized rotor group: methyl torsions are pulled out as
/// singletons appended after the residual group; when even that leaves more
/// than [`MAX_ROTOR_DIM`] members, everything flattens to singletons.
///
/// The bound is checked against the residual alone, deliberately: isolated
/// methyls always scan as 1-D singletons and never rejoin the coupled group,
/// so counting them against the bound would flatten every oversized group
/// unconditionally.
fn reduce_rotor(
    zma: &Zmatrix,
    rotor: RotorGroup,
    detector: &dyn MethylDetector,
) -> Result<Vec<RotorGroup>, EngineError> {
    let mut residual: Vec<String> = Vec::new();
    let mut methyls: Vec<String> = Vec::new();
    for name in rotor.names() {
        if detector.is_methyl_rotor(zma, name)? {
            methyls.push(name.clone());
        } else {
            residual.push(name.clone());
        }
    }
    debug!(
        rotor = %rotor,
        nmethyl = methyls.len(),
        nresidual = residual.len(),
        "reduced rotor dimensionality"
    );

    let mut reduced = Vec::new();
    if residual.len() > MAX_ROTOR_DIM {
        // Not enough methyls to pull out; the coupled scan degenerates to 1D.
        reduced.extend(residual.into_iter().map(RotorGroup::singleton));
    } else if !residual.is_empty() {
        reduced.push(RotorGroup::new(residual));
    }
    reduced.extend(methyls.into_iter().map(RotorGroup::singleton));
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coord::CoordDef;
    use std::collections::HashMap;

    /// Fixed-answer classifier keyed by torsion name.
    struct FixedDetector(Vec<&'static str>);
    impl MethylDetector for FixedDetector {
        fn is_methyl_rotor(&self, _: &Zmatrix, name: &str) -> Result<bool, EngineError> {
            Ok(self.0.contains(&name))
        }
    }

    fn skeleton(n_dihedrals: usize) -> Zmatrix {
        // Linear chain long enough to host the dihedral definitions; only the
        // coordinate table matters for these tests.
        let n_atoms = n_dihedrals + 3;
        let symbols = vec!["C".to_owned(); n_atoms];
        let mut coords = Vec::new();
        let mut values = HashMap::new();
        for i in 0..n_atoms - 1 {
            let name = format!("R{}", i + 1);
            coords.push((name.clone(), CoordDef::Distance([i, i + 1])));
            values.insert(name, 1.5);
        }
        for i in 0..n_dihedrals {
            let name = format!("D{}", i + 1);
            coords.push((name.clone(), CoordDef::Dihedral([i, i + 1, i + 2, i + 3])));
            values.insert(name, 0.0);
        }
        Zmatrix::new(symbols, coords, values).unwrap()
    }

    fn group(names: &[&str]) -> RotorGroup {
        RotorGroup::new(names.iter().map(|s| (*s).to_owned()).collect())
    }

    #[test]
    fn small_groups_pass_through() {
        let zma = skeleton(4);
        let groups = vec![group(&["D1"]), group(&["D2", "D3", "D4"])];
        let out = reduce_groups(&zma, groups.clone(), &UnimplementedMethylDetector).unwrap();
        // Detector never consulted for groups within the bound.
        assert_eq!(out, groups);
    }

    #[test]
    fn methyl_isolation_bounds_the_group() {
        let zma = skeleton(5);
        let det = FixedDetector(vec!["D2", "D5"]);
        let out = reduce_groups(&zma, vec![group(&["D1", "D2", "D3", "D4", "D5"])], &det).unwrap();
        assert_eq!(
            out,
            vec![group(&["D1", "D3", "D4"]), group(&["D2"]), group(&["D5"])]
        );
        assert!(out.iter().all(|g| (1..=MAX_ROTOR_DIM).contains(&g.len())));
    }

    #[test]
    fn stubborn_groups_flatten_to_singletons() {
        let zma = skeleton(6);
        let det = FixedDetector(vec!["D6"]);
        let out = reduce_groups(
            &zma,
            vec![group(&["D1", "D2", "D3", "D4", "D5", "D6"])],
            &det,
        )
        .unwrap();
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|g| g.len() == 1));
    }

    #[test]
    fn missing_detector_is_a_configuration_error() {
        let zma = skeleton(5);
        let err = reduce_groups(
            &zma,
            vec![group(&["D1", "D2", "D3", "D4", "D5"])],
            &UnimplementedMethylDetector,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::MissingCapability(_)));
    }

    #[test]
    fn graph_detector_spots_a_methyl_cap() {
        let zma = crate::core::models::zmatrix::tests::ethane();
        // Both ends of the D5 axis are CH3 carbons.
        assert!(GraphMethylDetector.is_methyl_rotor(&zma, "D5").unwrap());
    }
}
