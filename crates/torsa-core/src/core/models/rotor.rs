use super::coord::NAME_SEPARATOR;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scan dimensionality models for torsional treatment.
///
/// `1dhr` scans every torsion independently, `mdhr`/`mdhrv` scan coupled
/// groups of up to four torsions, and `tau` samples all torsions together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TorsModel {
    #[serde(rename = "1dhr")]
    OneDhr,
    Mdhr,
    MdhrV,
    Tau,
}

impl TorsModel {
    /// Models for which torsion names are resolved at all.
    pub fn resolves_names(self) -> bool {
        matches!(self, Self::OneDhr | Self::Mdhr | Self::Tau)
    }

    /// Models whose rotor groups may be multi-dimensional and therefore go
    /// through dimensionality reduction before grids are built.
    pub fn is_multi_dimensional(self) -> bool {
        matches!(self, Self::Mdhr | Self::MdhrV)
    }
}

#[derive(Debug, Error)]
#[error("unknown torsional model '{0}' (expected 1dhr, mdhr, mdhrv, or tau)")]
pub struct ParseTorsModelError(String);

impl FromStr for TorsModel {
    type Err = ParseTorsModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1dhr" => Ok(Self::OneDhr),
            "mdhr" => Ok(Self::Mdhr),
            "mdhrv" => Ok(Self::MdhrV),
            "tau" => Ok(Self::Tau),
            _ => Err(ParseTorsModelError(s.to_owned())),
        }
    }
}

impl fmt::Display for TorsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::OneDhr => "1dhr",
                Self::Mdhr => "mdhr",
                Self::MdhrV => "mdhrv",
                Self::Tau => "tau",
            }
        )
    }
}

/// An ordered group of torsion names sharing one scan.
///
/// Order is insertion order from the resolution source, never sorted. After
/// dimensionality reduction the length is guaranteed to be between 1 and 4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct RotorGroup(Vec<String>);

impl RotorGroup {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn singleton(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Splits the group into its member torsions as singleton groups.
    pub fn flatten(self) -> Vec<RotorGroup> {
        self.0.into_iter().map(RotorGroup::singleton).collect()
    }
}

impl fmt::Display for RotorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in &self.0 {
            if !first {
                write!(f, "{}", NAME_SEPARATOR)?;
            }
            write!(f, "{}", name)?;
            first = false;
        }
        Ok(())
    }
}

impl From<Vec<String>> for RotorGroup {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}
