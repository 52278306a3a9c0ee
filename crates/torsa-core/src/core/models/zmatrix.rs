use super::coord::{CoordDef, CoordKind};
use super::element;
use super::ts::TsBonds;
use crate::core::geometry;
use crate::core::graph::ZGraph;
use nalgebra::Point3;
use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZmatrixError {
    #[error("unknown internal coordinate '{0}'")]
    UnknownCoordinate(String),
    #[error("coordinate '{name}' is a {kind}, not a dihedral")]
    NotADihedral { name: String, kind: CoordKind },
    #[error("coordinate '{name}' references atom {atom}, but the structure has {count} atoms")]
    AtomOutOfRange {
        name: String,
        atom: usize,
        count: usize,
    },
    #[error("duplicate coordinate name '{0}'")]
    DuplicateName(String),
    #[error("no value supplied for coordinate '{0}'")]
    MissingValue(String),
    #[error("scan increment must be a positive angle, got {0}")]
    InvalidIncrement(f64),
}

/// Internal-coordinate view of a molecular structure.
///
/// Holds the atom symbols, the ordered coordinate definitions, and the current
/// value of every coordinate (lengths in whatever unit the caller supplies,
/// angles and dihedrals in radians). This is the structure snapshot the whole
/// preparation pipeline reads from; nothing here is mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Zmatrix {
    symbols: Vec<String>,
    coords: Vec<(String, CoordDef)>,
    index: HashMap<String, usize>,
    values: HashMap<String, f64>,
}

impl Zmatrix {
    /// Builds a z-matrix from explicit coordinate values.
    ///
    /// Every coordinate must have a value, reference in-range atoms, and carry
    /// a unique name.
    pub fn new(
        symbols: Vec<String>,
        coords: Vec<(String, CoordDef)>,
        values: HashMap<String, f64>,
    ) -> Result<Self, ZmatrixError> {
        let count = symbols.len();
        let mut index = HashMap::with_capacity(coords.len());
        for (pos, (name, def)) in coords.iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(ZmatrixError::DuplicateName(name.clone()));
            }
            if let Some(&atom) = def.atoms().iter().find(|&&a| a >= count) {
                return Err(ZmatrixError::AtomOutOfRange {
                    name: name.clone(),
                    atom,
                    count,
                });
            }
            if !values.contains_key(name) {
                return Err(ZmatrixError::MissingValue(name.clone()));
            }
        }
        Ok(Self {
            symbols,
            coords,
            index,
            values,
        })
    }

    /// Builds a z-matrix by measuring every coordinate from Cartesian
    /// positions (one point per atom, same order as `symbols`).
    pub fn from_cartesian(
        symbols: Vec<String>,
        coords: Vec<(String, CoordDef)>,
        positions: &[Point3<f64>],
    ) -> Result<Self, ZmatrixError> {
        let count = symbols.len();
        let mut values = HashMap::with_capacity(coords.len());
        for (name, def) in &coords {
            if let Some(&atom) = def.atoms().iter().find(|&&a| a >= positions.len().min(count)) {
                return Err(ZmatrixError::AtomOutOfRange {
                    name: name.clone(),
                    atom,
                    count: positions.len().min(count),
                });
            }
            let val = match def {
                CoordDef::Distance([a, b]) => geometry::distance(&positions[*a], &positions[*b]),
                CoordDef::Angle([a, b, c]) => {
                    geometry::angle(&positions[*a], &positions[*b], &positions[*c])
                }
                CoordDef::Dihedral([a, b, c, d]) => geometry::dihedral(
                    &positions[*a],
                    &positions[*b],
                    &positions[*c],
                    &positions[*d],
                ),
            };
            values.insert(name.clone(), val);
        }
        Self::new(symbols, coords, values)
    }

    pub fn count(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn values(&self) -> &HashMap<String, f64> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn coordinate_names(&self) -> impl Iterator<Item = &str> {
        self.coords.iter().map(|(name, _)| name.as_str())
    }

    pub fn has_coordinate(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn coordinate(&self, name: &str) -> Option<&CoordDef> {
        self.index.get(name).map(|&pos| &self.coords[pos].1)
    }

    /// The rotation axis (middle bond) of a named dihedral.
    pub fn dihedral_axis(&self, name: &str) -> Result<(usize, usize), ZmatrixError> {
        let def = self
            .coordinate(name)
            .ok_or_else(|| ZmatrixError::UnknownCoordinate(name.to_owned()))?;
        def.dihedral_axis().ok_or_else(|| ZmatrixError::NotADihedral {
            name: name.to_owned(),
            kind: def.kind(),
        })
    }

    /// Bond graph of the structure; every distance coordinate is a bond.
    pub fn graph(&self) -> ZGraph {
        let bonds = self.coords.iter().filter_map(|(_, def)| match def {
            CoordDef::Distance([a, b]) => Some((*a, *b)),
            _ => None,
        });
        ZGraph::from_bonds(self.symbols.len(), bonds)
    }

    /// Names of the dihedral coordinates that sit on rotatable bonds, one
    /// representative per axis.
    ///
    /// An axis is rotatable when both of its atoms carry at least one further
    /// neighbor and the bond does not close a ring.
    pub fn torsion_coordinate_names(&self) -> Vec<String> {
        let gra = self.graph();
        let mut seen_axes = HashSet::new();
        let mut names = Vec::new();
        for (name, def) in &self.coords {
            let Some((j, k)) = def.dihedral_axis() else {
                continue;
            };
            let axis = (j.min(k), j.max(k));
            if seen_axes.contains(&axis) {
                continue;
            }
            if gra.degree(j) < 2 || gra.degree(k) < 2 {
                continue;
            }
            if gra.bond_in_ring(j, k) {
                continue;
            }
            seen_axes.insert(axis);
            names.push(name.clone());
        }
        names
    }

    /// Rotational symmetry number of each named torsion.
    ///
    /// An axis end bonded to exactly three hydrogens (and nothing else beyond
    /// the axis) is a three-fold top. Axis ends touched by a forming/breaking
    /// bond lose their end-group symmetry.
    pub fn torsional_symmetry_numbers(
        &self,
        names: &[String],
        ts: &TsBonds,
    ) -> Result<Vec<usize>, ZmatrixError> {
        let gra = self.graph();
        names
            .iter()
            .map(|name| self.torsional_symmetry_number(&gra, name, ts))
            .collect()
    }

    fn torsional_symmetry_number(
        &self,
        gra: &ZGraph,
        name: &str,
        ts: &TsBonds,
    ) -> Result<usize, ZmatrixError> {
        let (j, k) = self.dihedral_axis(name)?;
        for (end, other) in [(j, k), (k, j)] {
            if !ts.is_empty() && ts.involves(end) {
                continue;
            }
            let caps: Vec<usize> = gra
                .neighbors(end)
                .iter()
                .copied()
                .filter(|&n| n != other)
                .collect();
            if caps.len() == 3
                && caps
                    .iter()
                    .all(|&n| element::is_hydrogen(&self.symbols[n]))
            {
                return Ok(3);
            }
        }
        Ok(1)
    }

    /// Linear-scan descriptors `(start, stop, count)` for each named torsion.
    ///
    /// The span is one symmetry-unique period minus a single increment, so
    /// the grid never revisits the starting point; `increment` is in radians
    /// and must be positive.
    pub fn torsional_scan_linspaces(
        &self,
        names: &[String],
        increment: f64,
        ts: &TsBonds,
    ) -> Result<Vec<(f64, f64, usize)>, ZmatrixError> {
        if increment <= 0.0 || increment.is_nan() {
            return Err(ZmatrixError::InvalidIncrement(increment));
        }
        let sym_nums = self.torsional_symmetry_numbers(names, ts)?;
        Ok(sym_nums
            .into_iter()
            .map(|sym| {
                let interval = (TAU / sym as f64 - increment).max(0.0);
                let npoints = (interval / increment).floor() as usize + 1;
                (0.0, interval, npoints)
            })
            .collect())
    }
}
