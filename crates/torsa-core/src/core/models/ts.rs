use serde::Deserialize;

/// An unordered pair of 0-based atom indices identifying a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct BondKey(pub usize, pub usize);

impl BondKey {
    pub fn contains(&self, atom: usize) -> bool {
        self.0 == atom || self.1 == atom
    }

    pub fn min(&self) -> usize {
        self.0.min(self.1)
    }

    pub fn max(&self) -> usize {
        self.0.max(self.1)
    }

    pub fn as_pair(&self) -> (usize, usize) {
        (self.0, self.1)
    }
}

impl PartialEq<(usize, usize)> for BondKey {
    fn eq(&self, other: &(usize, usize)) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

/// The forming/breaking bonds of a transition state.
///
/// An empty set means "no transition-state context": every TS-specific branch
/// in grid, symmetry, and axis construction is suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TsBonds {
    #[serde(default)]
    pub forming: Vec<BondKey>,
    #[serde(default)]
    pub breaking: Vec<BondKey>,
}

impl TsBonds {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.forming.is_empty() && self.breaking.is_empty()
    }

    /// Whether any forming or breaking bond touches the given atom.
    pub fn involves(&self, atom: usize) -> bool {
        self.forming
            .iter()
            .chain(self.breaking.iter())
            .any(|b| b.contains(atom))
    }

    pub fn bonds(&self) -> impl Iterator<Item = &BondKey> {
        self.forming.iter().chain(self.breaking.iter())
    }
}
