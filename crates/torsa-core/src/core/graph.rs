//! Molecular connectivity derived from a z-matrix and the branch/ring queries
//! the torsion pipeline runs over it.

use super::models::ts::TsBonds;
use std::collections::{BTreeSet, VecDeque};

/// Adjacency-list view of a molecule's bond graph.
///
/// Built from the distance coordinates of a z-matrix; transition-state
/// forming/breaking bonds can be joined in on demand for saddle points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZGraph {
    adjacency: Vec<Vec<usize>>,
}

impl ZGraph {
    pub fn from_bonds(atom_count: usize, bonds: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut adjacency = vec![Vec::new(); atom_count];
        for (a, b) in bonds {
            if a == b || a >= atom_count || b >= atom_count {
                continue;
            }
            if !adjacency[a].contains(&b) {
                adjacency[a].push(b);
                adjacency[b].push(a);
            }
        }
        Self { adjacency }
    }

    pub fn atom_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, atom: usize) -> &[usize] {
        &self.adjacency[atom]
    }

    pub fn degree(&self, atom: usize) -> usize {
        self.adjacency[atom].len()
    }

    /// Atoms reachable from `key` without crossing the `axis` bond, excluding
    /// the axis atoms themselves.
    ///
    /// For saddle points the transition-state bonds are treated as extra
    /// edges, so a forming fragment connected only through a TS bond still
    /// lands in the branch.
    pub fn branch_atom_keys(
        &self,
        key: usize,
        axis: (usize, usize),
        ts: &TsBonds,
        saddle: bool,
    ) -> BTreeSet<usize> {
        let mut adjacency = self.adjacency.clone();
        if saddle {
            for bond in ts.bonds() {
                let (a, b) = bond.as_pair();
                if a < adjacency.len() && b < adjacency.len() && !adjacency[a].contains(&b) {
                    adjacency[a].push(b);
                    adjacency[b].push(a);
                }
            }
        }

        let (ax1, ax2) = axis;
        let other = if key == ax1 { ax2 } else { ax1 };

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        visited.insert(key);
        queue.push_back(key);
        while let Some(atom) = queue.pop_front() {
            for &nbr in &adjacency[atom] {
                if nbr == other || visited.contains(&nbr) {
                    continue;
                }
                visited.insert(nbr);
                queue.push_back(nbr);
            }
        }

        visited.remove(&ax1);
        visited.remove(&ax2);
        visited
    }

    /// Whether the `(a, b)` bond closes a ring, i.e. `b` stays reachable from
    /// `a` with the direct edge removed.
    pub fn bond_in_ring(&self, a: usize, b: usize) -> bool {
        if a >= self.adjacency.len() || b >= self.adjacency.len() {
            return false;
        }
        let mut visited = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::new();
        visited[a] = true;
        queue.push_back(a);
        while let Some(atom) = queue.pop_front() {
            for &nbr in &self.adjacency[atom] {
                if atom == a && nbr == b {
                    continue;
                }
                if nbr == b {
                    return true;
                }
                if !visited[nbr] {
                    visited[nbr] = true;
                    queue.push_back(nbr);
                }
            }
        }
        false
    }
}
