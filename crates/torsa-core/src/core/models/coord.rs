use std::fmt;

/// Separator joining the member names of a multi-dimensional scan identifier
/// (e.g. `D3_D6` for a coupled two-torsion scan).
pub const NAME_SEPARATOR: char = '_';

/// Classes of internal coordinates, distinguished by the marker letter in
/// their conventional names (`R<n>`, `A<n>`, `D<n>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordKind {
    Distance,
    Angle,
    Dihedral,
}

impl CoordKind {
    pub fn marker(self) -> char {
        match self {
            Self::Distance => 'R',
            Self::Angle => 'A',
            Self::Dihedral => 'D',
        }
    }
}

impl fmt::Display for CoordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Distance => "distance",
                Self::Angle => "angle",
                Self::Dihedral => "dihedral",
            }
        )
    }
}

/// Definition of one internal coordinate as a tuple of 0-based atom indices.
///
/// Every distance coordinate of a z-matrix doubles as a bond, which is where
/// the molecular graph in [`crate::core::graph`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordDef {
    Distance([usize; 2]),
    Angle([usize; 3]),
    Dihedral([usize; 4]),
}

impl CoordDef {
    pub fn kind(&self) -> CoordKind {
        match self {
            Self::Distance(_) => CoordKind::Distance,
            Self::Angle(_) => CoordKind::Angle,
            Self::Dihedral(_) => CoordKind::Dihedral,
        }
    }

    pub fn atoms(&self) -> &[usize] {
        match self {
            Self::Distance(a) => a,
            Self::Angle(a) => a,
            Self::Dihedral(a) => a,
        }
    }

    /// The middle bond of a dihedral, i.e. the rotation axis.
    pub fn dihedral_axis(&self) -> Option<(usize, usize)> {
        match self {
            Self::Dihedral([_, j, k, _]) => Some((*j, *k)),
            _ => None,
        }
    }
}

/// Whether a scan identifier names a single-torsion scan (no separator).
pub fn is_single_name(name: &str) -> bool {
    !name.contains(NAME_SEPARATOR)
}

/// Splits a multi-torsion scan identifier into its member names.
pub fn split_names(name: &str) -> Vec<String> {
    name.split(NAME_SEPARATOR).map(str::to_owned).collect()
}

/// The integer suffix following a coordinate's marker letter (`"D12"` → 12).
///
/// Names that do not follow the `<marker><n>` convention sort last.
pub fn name_suffix(name: &str, marker: char) -> usize {
    name.split(marker)
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dihedral_axis_is_middle_bond() {
        let coo = CoordDef::Dihedral([4, 1, 2, 7]);
        assert_eq!(coo.dihedral_axis(), Some((1, 2)));
        assert_eq!(CoordDef::Distance([0, 1]).dihedral_axis(), None);
    }

    #[test]
    fn name_splitting_honors_separator() {
        assert!(is_single_name("D4"));
        assert!(!is_single_name("D4_D7"));
        assert_eq!(split_names("D4_D7"), vec!["D4", "D7"]);
    }

    #[test]
    fn suffix_parsing() {
        assert_eq!(name_suffix("D12", 'D'), 12);
        assert_eq!(name_suffix("R1", 'R'), 1);
        assert_eq!(name_suffix("D", 'D'), usize::MAX);
    }
}
