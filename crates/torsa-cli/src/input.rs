use crate::error::{CliError, Result};
use nalgebra::Point3;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use torsa::core::models::coord::CoordDef;
use torsa::core::models::ts::TsBonds;
use torsa::core::models::zmatrix::Zmatrix;
use torsa::engine::config::SpeciesConfig;
use torsa::engine::error::EngineError;

/// The TOML input document of `torsa prep`: the structure snapshot, the
/// per-species configuration, and the scan settings.
#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub structure: StructureSpec,
    #[serde(default)]
    pub species: SpeciesConfig,
    #[serde(default)]
    pub scan: ScanSpec,
    #[serde(default)]
    pub ts: TsBonds,
}

#[derive(Debug, Deserialize)]
pub struct StructureSpec {
    pub symbols: Vec<String>,
    pub coordinates: Vec<CoordSpec>,
    /// Cartesian positions, one `[x, y, z]` per atom; when present the
    /// coordinate values are measured from it instead of read from `value`.
    #[serde(default)]
    pub geometry: Option<Vec<[f64; 3]>>,
}

#[derive(Debug, Deserialize)]
pub struct CoordSpec {
    pub name: String,
    pub kind: CoordKindSpec,
    pub atoms: Vec<usize>,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordKindSpec {
    Distance,
    Angle,
    Dihedral,
}

#[derive(Debug, Deserialize)]
pub struct ScanSpec {
    pub model: torsa::core::models::rotor::TorsModel,
    pub increment: f64,
}

impl Default for ScanSpec {
    fn default() -> Self {
        Self {
            model: torsa::core::models::rotor::TorsModel::OneDhr,
            increment: 30.0,
        }
    }
}

impl InputDoc {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|source| CliError::FileParsing {
            path: path.to_owned(),
            source,
        })
    }

    /// Builds the z-matrix view out of the structure section.
    pub fn zmatrix(&self) -> Result<Zmatrix> {
        let mut coords = Vec::with_capacity(self.structure.coordinates.len());
        for spec in &self.structure.coordinates {
            coords.push((spec.name.clone(), coord_def(spec)?));
        }

        let symbols = self.structure.symbols.clone();
        let zma = if let Some(geometry) = &self.structure.geometry {
            let positions: Vec<Point3<f64>> = geometry
                .iter()
                .map(|&[x, y, z]| Point3::new(x, y, z))
                .collect();
            Zmatrix::from_cartesian(symbols, coords, &positions)
        } else {
            let mut values = HashMap::new();
            for spec in &self.structure.coordinates {
                let value = spec.value.ok_or_else(|| {
                    CliError::Input(format!(
                        "coordinate '{}' has no value and no geometry was given",
                        spec.name
                    ))
                })?;
                values.insert(spec.name.clone(), value);
            }
            Zmatrix::new(symbols, coords, values)
        };
        zma.map_err(|source| CliError::TorsaCore(EngineError::from(source)))
    }
}

fn coord_def(spec: &CoordSpec) -> Result<CoordDef> {
    let arity_error = |want: usize| {
        CliError::Input(format!(
            "coordinate '{}' needs {} atoms, got {}",
            spec.name,
            want,
            spec.atoms.len()
        ))
    };
    match spec.kind {
        CoordKindSpec::Distance => spec
            .atoms
            .as_slice()
            .try_into()
            .map(CoordDef::Distance)
            .map_err(|_| arity_error(2)),
        CoordKindSpec::Angle => spec
            .atoms
            .as_slice()
            .try_into()
            .map(CoordDef::Angle)
            .map_err(|_| arity_error(3)),
        CoordKindSpec::Dihedral => spec
            .atoms
            .as_slice()
            .try_into()
            .map(CoordDef::Dihedral)
            .map_err(|_| arity_error(4)),
    }
}
