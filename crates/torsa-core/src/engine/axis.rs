use super::error::EngineError;
use crate::core::models::element;
use crate::core::models::ts::{BondKey, TsBonds};
use crate::core::models::zmatrix::Zmatrix;
use tracing::debug;

/// Definition of one hindered rotor for the rate-theory input: the rotating
/// atom group and bond axis (1-based), the checked symmetry number, and the
/// possibly truncated potential-value list.
#[derive(Debug, Clone, PartialEq)]
pub struct RotorDef {
    pub group: Vec<usize>,
    pub axis: [usize; 2],
    pub symmetry: usize,
    pub potential: Vec<f64>,
}

/// Computes the rotating group and oriented axis of a named torsion.
///
/// The key atom starts as the axis member belonging to the transition-state
/// bond, if any, else the second axis atom; an empty branch retries from the
/// other axis atom. Saddle points get the reaction-class group extension and
/// the missed-XH3 symmetry check. Atom identifiers in the result are shifted
/// to the 1-based convention of the consuming format, and the axis is
/// oriented with the key atom second.
pub fn rotor_definition(
    zma: &Zmatrix,
    tors_name: &str,
    tors_sym: usize,
    potential: &[f64],
    ts_bnd: Option<BondKey>,
    rxn_class: &str,
    saddle: bool,
) -> Result<RotorDef, EngineError> {
    let (group, axis, atm_key) = initial_groups(zma, tors_name, ts_bnd, saddle)?;
    let (group, axis, potential, symmetry) = if saddle {
        check_saddle_groups(
            zma,
            rxn_class,
            group,
            axis,
            potential.to_vec(),
            ts_bnd,
            tors_sym,
        )
    } else {
        (group, axis, potential.to_vec(), tors_sym)
    };

    let group: Vec<usize> = group.iter().map(|atm| atm + 1).collect();
    let mut axis = [axis.0 + 1, axis.1 + 1];
    if atm_key + 1 != axis[1] {
        axis.reverse();
    }

    Ok(RotorDef {
        group,
        axis,
        symmetry,
        potential,
    })
}

/// Initial rotating group: the branch on the key-atom side of the axis.
fn initial_groups(
    zma: &Zmatrix,
    tors_name: &str,
    ts_bnd: Option<BondKey>,
    saddle: bool,
) -> Result<(Vec<usize>, (usize, usize), usize), EngineError> {
    let gra = zma.graph();
    let axis = zma.dihedral_axis(tors_name)?;
    let ts = match ts_bnd {
        Some(bnd) => TsBonds {
            forming: vec![bnd],
            breaking: Vec::new(),
        },
        None => TsBonds::none(),
    };

    let mut atm_key = axis.1;
    if let Some(bnd) = ts_bnd {
        for atm in [axis.0, axis.1] {
            if bnd.contains(atm) {
                atm_key = atm;
                break;
            }
        }
    }

    let mut group: Vec<usize> = gra
        .branch_atom_keys(atm_key, axis, &ts, saddle)
        .into_iter()
        .collect();
    if group.is_empty() {
        atm_key = if atm_key == axis.0 { axis.1 } else { axis.0 };
        group = gra
            .branch_atom_keys(atm_key, axis, &ts, saddle)
            .into_iter()
            .collect();
        debug!(tors_name, "empty branch, retried from the other axis atom");
    }

    Ok((group, axis, atm_key))
}

/// Saddle-point corrections to the rotating group and symmetry number.
///
/// Addition/abstraction classes pull the newly forming fragment into the
/// group; a symmetry number of 1 with exactly three hydrogens (and nothing
/// but hydrogens or dummies) outside group and axis is a missed three-fold
/// top, so the potential keeps only its first third.
fn check_saddle_groups(
    zma: &Zmatrix,
    rxn_class: &str,
    mut group: Vec<usize>,
    axis: (usize, usize),
    mut potential: Vec<f64>,
    ts_bnd: Option<BondKey>,
    mut sym_num: usize,
) -> (Vec<usize>, (usize, usize), Vec<f64>, usize) {
    let n_atm = zma.count();

    if let Some(bnd) = ts_bnd {
        if rxn_class.contains("addition") || rxn_class.contains("abstraction") {
            let ts_bnd1 = bnd.min();
            let ts_bnd2 = bnd.max();
            if group.contains(&ts_bnd1) {
                for atm in ts_bnd2..n_atm {
                    if !group.contains(&atm) {
                        group.push(atm);
                    }
                }
            }
        }
    }

    if sym_num == 1 {
        let outside: Vec<usize> = (0..n_atm)
            .filter(|atm| !group.contains(atm) && *atm != axis.0 && *atm != axis.1)
            .collect();
        let symbols = zma.symbols();
        let mut all_hyd = true;
        let mut hyd_count = 0;
        for &atm in &outside {
            if !element::is_hydrogen(&symbols[atm]) && !element::is_dummy(&symbols[atm]) {
                all_hyd = false;
                break;
            }
            if element::is_hydrogen(&symbols[atm]) {
                hyd_count += 1;
            }
        }
        if all_hyd && hyd_count == 3 {
            sym_num = 3;
            potential.truncate(potential.len() / 3);
        }
    }

    (group, axis, potential, sym_num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coord::CoordDef;
    use std::collections::HashMap;

    // Ethane-like fragment shared with the z-matrix tests.
    fn ethane() -> Zmatrix {
        crate::core::models::zmatrix::tests::ethane()
    }

    #[test]
    fn axis_is_oriented_key_atom_second() {
        let zma = ethane();
        // D5 axis is (1, 0); default key atom is the second element, atom 0.
        let def = rotor_definition(&zma, "D5", 3, &[], None, "", false).unwrap();
        assert_eq!(def.axis, [2, 1]);
        assert_eq!(def.symmetry, 3);
        // Branch on the atom-0 side: its three hydrogens, 1-based.
        assert_eq!(def.group, vec![3, 4, 5]);
    }

    #[test]
    fn ts_bond_member_becomes_the_key_atom() {
        let zma = ethane();
        let def = rotor_definition(&zma, "D5", 3, &[], Some(BondKey(1, 7)), "", false).unwrap();
        // Axis atom 1 sits on the TS bond, so it is the key atom and the
        // branch is its hydrogens.
        assert_eq!(def.axis, [1, 2]);
        assert_eq!(def.group, vec![6, 7, 8]);
    }

    #[test]
    fn addition_class_extends_the_group() {
        let zma = ethane();
        // ts_bnd1 = 2 already sits in the group, so every atom from ts_bnd2
        // to the end of the atom list joins it.
        let (group, _, _, sym) = check_saddle_groups(
            &zma,
            "radical addition",
            vec![2, 5],
            (0, 1),
            vec![0.0; 6],
            Some(BondKey(2, 6)),
            3,
        );
        assert_eq!(group, vec![2, 5, 6, 7]);
        assert_eq!(sym, 3);
    }

    #[test]
    fn forming_fragment_joins_the_branch() {
        // Methanol-plus-H saddle: C0-O1 axis, H2..H4 on C0, H5 on O1, and a
        // sixth atom forming a bond to O1.
        let symbols = ["C", "O", "H", "H", "H", "H", "H"]
            .map(String::from)
            .to_vec();
        let coords = vec![
            ("R1".to_owned(), CoordDef::Distance([0, 1])),
            ("R2".to_owned(), CoordDef::Distance([0, 2])),
            ("R3".to_owned(), CoordDef::Distance([0, 3])),
            ("R4".to_owned(), CoordDef::Distance([0, 4])),
            ("R5".to_owned(), CoordDef::Distance([1, 5])),
            ("D3".to_owned(), CoordDef::Dihedral([5, 1, 0, 2])),
        ];
        let mut values = HashMap::new();
        for (name, _) in &coords {
            values.insert(name.clone(), 1.0);
        }
        let zma = Zmatrix::new(symbols, coords, values).unwrap();

        let pot = vec![0.0; 6];
        let def = rotor_definition(
            &zma,
            "D3",
            1,
            &pot,
            Some(BondKey(1, 6)),
            "hydrogen abstraction",
            true,
        )
        .unwrap();
        // Axis atom 1 sits on the forming bond, so the branch from it picks
        // up the incoming atom 6 through the TS edge.
        assert!(def.group.contains(&7));
        assert_eq!(def.axis[1], 2);
    }

    #[test]
    fn missed_xh3_symmetry_truncates_the_potential() {
        let zma = ethane();
        // Force key atom to 1 so the group is the far-side hydrogens and the
        // three H on atom 0 sit outside group and axis.
        let pot: Vec<f64> = (0..12).map(f64::from).collect();
        let def = rotor_definition(&zma, "D5", 1, &pot, Some(BondKey(1, 7)), "", true).unwrap();
        assert_eq!(def.symmetry, 3);
        assert_eq!(def.potential, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn symmetry_above_one_passes_through_saddle_checks() {
        let zma = ethane();
        let pot = vec![0.0; 6];
        let def = rotor_definition(&zma, "D5", 3, &pot, Some(BondKey(1, 7)), "", true).unwrap();
        assert_eq!(def.symmetry, 3);
        assert_eq!(def.potential.len(), 6);
    }
}
