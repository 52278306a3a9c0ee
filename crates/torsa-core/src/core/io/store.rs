use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the conformer/energy table at a theory-level store path.
const CONFORMER_TABLE: &str = "conformers.csv";

/// Relative path from a conformer directory to its stored scan identifiers.
const SCANS_SUBDIR: &str = "zmat/SCANS";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read conformer table {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("I/O error under {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no stored energy for conformer '{0}'")]
    MissingEnergy(String),
}

/// Read access to the stored conformers of one species at one theory level.
///
/// Absences are soft: an empty locator list or a missing scan directory is a
/// legitimate result, not an error.
pub trait ConformerStore {
    /// Stored conformer locators, in store order.
    fn locators(&self) -> Result<Vec<String>, StoreError>;

    /// The stored energy of one conformer.
    fn energy(&self, locator: &str) -> Result<f64, StoreError>;

    /// Stored scan-coordinate identifiers for one conformer, or `None` when
    /// the conformer has no scan directory at all.
    fn scan_names(&self, locator: &str) -> Result<Option<BTreeSet<String>>, StoreError>;
}

#[derive(Debug, Deserialize)]
struct ConfRecord {
    locator: String,
    energy: f64,
}

/// Conformer store backed by the on-disk layout of the save filesystem:
/// a `conformers.csv` table at the theory path and a `zmat/SCANS/` directory
/// under each conformer.
#[derive(Debug, Clone)]
pub struct FsConformerStore {
    root: PathBuf,
    order: Vec<String>,
    energies: HashMap<String, f64>,
}

impl FsConformerStore {
    /// Opens the store at a theory-level path, reading the conformer table
    /// eagerly. A missing table is an empty store, not an error.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        let table = root.join(CONFORMER_TABLE);
        let mut order = Vec::new();
        let mut energies = HashMap::new();

        if table.exists() {
            let mut reader = csv::Reader::from_path(&table).map_err(|source| StoreError::Table {
                path: table.clone(),
                source,
            })?;
            for record in reader.deserialize() {
                let record: ConfRecord = record.map_err(|source| StoreError::Table {
                    path: table.clone(),
                    source,
                })?;
                order.push(record.locator.clone());
                energies.insert(record.locator, record.energy);
            }
        }

        Ok(Self {
            root,
            order,
            energies,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scans_dir(&self, locator: &str) -> PathBuf {
        self.root.join(locator).join(SCANS_SUBDIR)
    }
}

impl ConformerStore for FsConformerStore {
    fn locators(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.order.clone())
    }

    fn energy(&self, locator: &str) -> Result<f64, StoreError> {
        self.energies
            .get(locator)
            .copied()
            .ok_or_else(|| StoreError::MissingEnergy(locator.to_owned()))
    }

    fn scan_names(&self, locator: &str) -> Result<Option<BTreeSet<String>>, StoreError> {
        let dir = self.scans_dir(locator);
        if !dir.exists() {
            return Ok(None);
        }
        let entries = std::fs::read_dir(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            if let Some(name) = entry.file_name().to_str() {
                names.insert(name.to_owned());
            }
        }
        Ok(Some(names))
    }
}

/// In-memory store for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    conformers: Vec<(String, f64)>,
    scans: HashMap<String, BTreeSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locator: impl Into<String>, energy: f64) {
        self.conformers.push((locator.into(), energy));
    }

    pub fn insert_scans<I, S>(&mut self, locator: impl Into<String>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scans.insert(
            locator.into(),
            names.into_iter().map(Into::into).collect(),
        );
    }
}

impl ConformerStore for MemoryStore {
    fn locators(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.conformers.iter().map(|(loc, _)| loc.clone()).collect())
    }

    fn energy(&self, locator: &str) -> Result<f64, StoreError> {
        self.conformers
            .iter()
            .find(|(loc, _)| loc == locator)
            .map(|(_, ene)| *ene)
            .ok_or_else(|| StoreError::MissingEnergy(locator.to_owned()))
    }

    fn scan_names(&self, locator: &str) -> Result<Option<BTreeSet<String>>, StoreError> {
        Ok(self.scans.get(locator).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_table(root: &Path, rows: &[(&str, f64)]) {
        let mut body = String::from("locator,energy\n");
        for (loc, ene) in rows {
            body.push_str(&format!("{},{}\n", loc, ene));
        }
        fs::write(root.join(CONFORMER_TABLE), body).unwrap();
    }

    #[test]
    fn missing_table_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConformerStore::open(dir.path()).unwrap();
        assert!(store.locators().unwrap().is_empty());
    }

    #[test]
    fn table_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), &[("cB", -10.2), ("cA", -10.5), ("cC", -9.9)]);
        let store = FsConformerStore::open(dir.path()).unwrap();
        assert_eq!(store.locators().unwrap(), vec!["cB", "cA", "cC"]);
        assert_eq!(store.energy("cA").unwrap(), -10.5);
        assert!(matches!(
            store.energy("missing"),
            Err(StoreError::MissingEnergy(_))
        ));
    }

    #[test]
    fn scan_names_list_the_scans_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), &[("c1", -1.0)]);
        let scans = dir.path().join("c1").join(SCANS_SUBDIR);
        fs::create_dir_all(scans.join("D1")).unwrap();
        fs::create_dir_all(scans.join("D2_D3")).unwrap();

        let store = FsConformerStore::open(dir.path()).unwrap();
        let names = store.scan_names("c1").unwrap().unwrap();
        assert_eq!(names, BTreeSet::from(["D1".to_owned(), "D2_D3".to_owned()]));

        // No SCANS directory at all reads as "not present".
        assert!(store.scan_names("c2").unwrap().is_none());
    }
}
