use super::MAX_ROTOR_DIM;
use super::error::EngineError;
use super::reduction::{self, MethylDetector};
use crate::core::models::rotor::{RotorGroup, TorsModel};
use crate::core::models::ts::TsBonds;
use crate::core::models::zmatrix::{Zmatrix, ZmatrixError};
use tracing::debug;

/// Sampled coordinate values for one rotor group, one value list per torsion.
pub type TorsGrid = Vec<Vec<f64>>;

/// Output of grid construction: the (possibly reduced) rotor groups with one
/// grid and one symmetry-number list per group, all in lock-step order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanGrids {
    pub groups: Vec<RotorGroup>,
    pub grids: Vec<TorsGrid>,
    pub sym_nums: Vec<Vec<usize>>,
}

/// Builds the scan grid and symmetry numbers for every rotor group.
///
/// Multi-dimensional models are reduced first. Grid values are offsets from
/// the torsion's symmetry-unique span added onto its current value in the
/// base structure, never absolute angles. `increment_deg` is in degrees and
/// must be positive.
pub fn build_scan_grids(
    zma: &Zmatrix,
    groups: Vec<RotorGroup>,
    increment_deg: f64,
    model: TorsModel,
    ts: &TsBonds,
    detector: &dyn MethylDetector,
) -> Result<ScanGrids, EngineError> {
    let groups = if model.is_multi_dimensional() {
        reduction::reduce_groups(zma, groups, detector)?
    } else {
        groups
    };
    let increment = increment_deg.to_radians();

    let mut grids = Vec::with_capacity(groups.len());
    let mut sym_nums = Vec::with_capacity(groups.len());
    for group in &groups {
        let names = group.names().to_vec();
        let linspaces = zma.torsional_scan_linspaces(&names, increment, ts)?;
        let mut grid = Vec::with_capacity(names.len());
        for (name, (start, stop, npoints)) in names.iter().zip(linspaces) {
            let base = zma
                .value(name)
                .ok_or_else(|| ZmatrixError::UnknownCoordinate(name.clone()))?;
            grid.push(
                linspace(start, stop, npoints)
                    .map(|offset| offset + base)
                    .collect(),
            );
        }
        debug!(group = %group, dims = grid.len(), "built torsion grid");
        grids.push(grid);
        sym_nums.push(zma.torsional_symmetry_numbers(&names, ts)?);
    }

    Ok(ScanGrids {
        groups,
        grids,
        sym_nums,
    })
}

/// Evenly spaced samples from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, npoints: usize) -> impl Iterator<Item = f64> {
    let step = if npoints > 1 {
        (stop - start) / (npoints - 1) as f64
    } else {
        0.0
    };
    (0..npoints.max(1)).map(move |i| start + step * i as f64)
}

/// Cartesian expansion of one rotor group's grid into lock-step index tuples
/// and value tuples, the first torsion varying slowest.
///
/// Dimensionality outside `1..=4` is a contract violation.
pub fn expand_grid(grid: &TorsGrid) -> Result<(Vec<Vec<usize>>, Vec<Vec<f64>>), EngineError> {
    let ndim = grid.len();
    if !(1..=MAX_ROTOR_DIM).contains(&ndim) {
        return Err(EngineError::UnsupportedDimensionality(ndim));
    }

    let total: usize = grid.iter().map(Vec::len).product();
    let mut points = Vec::with_capacity(total);
    let mut values = Vec::with_capacity(total);
    let mut odometer = vec![0usize; ndim];
    for _ in 0..total {
        points.push(odometer.clone());
        values.push(
            odometer
                .iter()
                .enumerate()
                .map(|(dim, &i)| grid[dim][i])
                .collect(),
        );
        for dim in (0..ndim).rev() {
            odometer[dim] += 1;
            if odometer[dim] < grid[dim].len() {
                break;
            }
            odometer[dim] = 0;
        }
    }
    Ok((points, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::zmatrix::tests::ethane;
    use crate::engine::reduction::GraphMethylDetector;
    use std::f64::consts::PI;

    #[test]
    fn grids_are_offsets_from_the_current_value() {
        let zma = ethane();
        let groups = vec![RotorGroup::singleton("D5")];
        let scan = build_scan_grids(
            &zma,
            groups,
            30.0,
            TorsModel::OneDhr,
            &TsBonds::none(),
            &GraphMethylDetector,
        )
        .unwrap();

        assert_eq!(scan.groups.len(), 1);
        assert_eq!(scan.grids.len(), 1);
        assert_eq!(scan.sym_nums, vec![vec![3]]);

        // sigma = 3 at 30 degrees: 4 points over a 90 degree span, shifted by
        // the current D5 value of 60 degrees.
        let grid = &scan.grids[0][0];
        assert_eq!(grid.len(), 4);
        let expected: Vec<f64> = (0..4).map(|i| PI / 3.0 + i as f64 * PI / 6.0).collect();
        for (got, want) in grid.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn grid_shape_matches_group_dimensionality() {
        let zma = ethane();
        let groups = vec![RotorGroup::singleton("D5")];
        let scan = build_scan_grids(
            &zma,
            groups,
            30.0,
            TorsModel::Mdhr,
            &TsBonds::none(),
            &GraphMethylDetector,
        )
        .unwrap();
        for (group, grid) in scan.groups.iter().zip(&scan.grids) {
            assert_eq!(group.len(), grid.len());
        }
    }

    #[test]
    fn zero_increment_is_fatal() {
        let zma = ethane();
        let groups = vec![RotorGroup::singleton("D5")];
        let err = build_scan_grids(
            &zma,
            groups,
            0.0,
            TorsModel::OneDhr,
            &TsBonds::none(),
            &GraphMethylDetector,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Structure { .. }));
    }

    #[test]
    fn expansion_orders_first_torsion_slowest() {
        let grid: TorsGrid = vec![vec![0.0, 1.0], vec![10.0, 20.0, 30.0]];
        let (points, values) = expand_grid(&grid).unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], vec![0, 0]);
        assert_eq!(points[1], vec![0, 1]);
        assert_eq!(points[3], vec![1, 0]);
        assert_eq!(values[4], vec![1.0, 20.0]);
    }

    #[test]
    fn expansion_rejects_out_of_range_dimensionality() {
        let empty: TorsGrid = Vec::new();
        assert!(matches!(
            expand_grid(&empty),
            Err(EngineError::UnsupportedDimensionality(0))
        ));
        let five: TorsGrid = vec![vec![0.0]; 5];
        assert!(matches!(
            expand_grid(&five),
            Err(EngineError::UnsupportedDimensionality(5))
        ));
    }
}
